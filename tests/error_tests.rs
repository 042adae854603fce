//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn voice_notes(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("voice-notes").unwrap();
    cmd.env("VOICE_NOTES_DATA_DIR", data.path())
        .env("XDG_CONFIG_HOME", data.path().join("config"))
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn unknown_note_id() {
    let data = tempfile::tempdir().unwrap();
    voice_notes(&data)
        .args(["archive", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No note matches"));
}

#[test]
fn invalid_category() {
    let data = tempfile::tempdir().unwrap();
    voice_notes(&data)
        .args(["add", "x", "-C", "shopping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));
}

#[test]
fn invalid_sort_order() {
    let data = tempfile::tempdir().unwrap();
    voice_notes(&data)
        .args(["list", "--sort", "size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort order"));
}

#[test]
fn invalid_reminder() {
    let data = tempfile::tempdir().unwrap();
    let output = voice_notes(&data).args(["add", "Rent"]).output().unwrap();
    let id = String::from_utf8_lossy(&output.stdout).trim().to_string();

    voice_notes(&data)
        .args(["edit", &id, "--reminder", "next tuesday"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid reminder"));
}

#[test]
fn restore_missing_version() {
    let data = tempfile::tempdir().unwrap();
    let output = voice_notes(&data).args(["add", "Only"]).output().unwrap();
    let id = String::from_utf8_lossy(&output.stdout).trim().to_string();

    voice_notes(&data)
        .args(["restore", &id, "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no version 0"));
}

#[test]
fn oversized_image_is_rejected() {
    let data = tempfile::tempdir().unwrap();
    let output = voice_notes(&data).args(["add", "Photo"]).output().unwrap();
    let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let image = data.path().join("big.jpg");
    std::fs::write(&image, vec![0u8; 500_001]).unwrap();

    voice_notes(&data)
        .args(["edit", &id, "--image"])
        .arg(&image)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("limit is 500000 bytes"));
}

#[test]
fn invalid_max_duration() {
    let data = tempfile::tempdir().unwrap();
    voice_notes(&data)
        .args(["record", "--max-duration", "forever"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid max-duration"));
}

#[test]
fn corrupt_store_starts_empty() {
    let data = tempfile::tempdir().unwrap();
    std::fs::write(data.path().join("voice-to-structure-notes.json"), "{ nope").unwrap();

    voice_notes(&data)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No notes"));
}

#[test]
fn binary_store_starts_empty() {
    let data = tempfile::tempdir().unwrap();
    std::fs::write(
        data.path().join("voice-to-structure-notes.json"),
        [0xff, 0xfe, 0x00, 0x9f],
    )
    .unwrap();

    voice_notes(&data)
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No notes"));
}

#[test]
fn data_dir_pointing_at_a_file() {
    let data = tempfile::tempdir().unwrap();
    let blocker = data.path().join("blocker");
    std::fs::write(&blocker, "x").unwrap();

    let mut cmd = Command::cargo_bin("voice-notes").unwrap();
    cmd.env("VOICE_NOTES_DATA_DIR", &blocker)
        .env("XDG_CONFIG_HOME", data.path().join("config"))
        .args(["add", "Nowhere"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Note storage failed"));
}

#[test]
fn config_set_unknown_key() {
    let data = tempfile::tempdir().unwrap();
    voice_notes(&data)
        .args(["config", "set", "api_key", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_language() {
    let data = tempfile::tempdir().unwrap();
    voice_notes(&data)
        .args(["config", "set", "language", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language"));
}
