//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated data and config directories for one test
struct Sandbox {
    data: TempDir,
    config: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            data: tempfile::tempdir().unwrap(),
            config: tempfile::tempdir().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("voice-notes").unwrap();
        cmd.env("VOICE_NOTES_DATA_DIR", self.data.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Add a note and return its id
    fn add(&self, args: &[&str]) -> String {
        let output = self.cmd().arg("add").args(args).output().unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}

#[test]
fn help_output() {
    Command::cargo_bin("voice-notes")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kanban"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("record"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn version_output() {
    Command::cargo_bin("voice-notes")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("voice-notes"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn empty_board() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No notes"));
}

#[test]
fn add_then_list_shows_note_in_its_column() {
    let sandbox = Sandbox::new();
    let id = sandbox.add(&["Buy milk", "-c", "- milk\n- eggs", "-C", "tasks"]);
    assert!(!id.is_empty());

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Zadania (1)"))
        .stdout(predicate::str::contains("Buy milk"));

    assert!(sandbox
        .data
        .path()
        .join("voice-to-structure-notes.json")
        .exists());
}

#[test]
fn move_archive_and_unarchive() {
    let sandbox = Sandbox::new();
    let id = sandbox.add(&["Standup", "-C", "notes"]);

    sandbox.cmd().args(["move", &id, "meetings"]).assert().success();
    sandbox
        .cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("meetings"));

    sandbox.cmd().args(["archive", &id[..8]]).assert().success();
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standup").not());
    sandbox
        .cmd()
        .args(["list", "--archived"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Standup"));

    sandbox.cmd().args(["unarchive", &id]).assert().success();
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Standup"));
}

#[test]
fn search_filters_board() {
    let sandbox = Sandbox::new();
    sandbox.add(&["Call the plumber"]);
    sandbox.add(&["Book flights", "-c", "to Lisbon"]);

    sandbox
        .cmd()
        .args(["list", "--search", "LISBON"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book flights"))
        .stdout(predicate::str::contains("plumber").not());
}

#[test]
fn edit_records_history_and_restore_brings_it_back() {
    let sandbox = Sandbox::new();
    let id = sandbox.add(&["Draft", "-c", "first"]);

    sandbox
        .cmd()
        .args(["edit", &id, "--title", "Final", "--tags", "work, urgent,"])
        .assert()
        .success();
    sandbox
        .cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Final"))
        .stdout(predicate::str::contains("work, urgent"));

    sandbox
        .cmd()
        .args(["history", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0]"))
        .stdout(predicate::str::contains("Draft"));

    sandbox.cmd().args(["restore", &id, "0"]).assert().success();
    sandbox
        .cmd()
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft"))
        .stdout(predicate::str::contains("versions: 2"));
}

#[test]
fn edit_attaches_image_as_data_uri() {
    let sandbox = Sandbox::new();
    let id = sandbox.add(&["Whiteboard"]);
    let image = sandbox.data.path().join("photo.png");
    std::fs::write(&image, b"not really a png").unwrap();

    sandbox
        .cmd()
        .args(["edit", &id, "--image"])
        .arg(&image)
        .assert()
        .success();

    let stored =
        std::fs::read_to_string(sandbox.data.path().join("voice-to-structure-notes.json")).unwrap();
    assert!(stored.contains("data:image/png;base64,"));
}

#[test]
fn reminders_are_listed_when_due() {
    let sandbox = Sandbox::new();
    let id = sandbox.add(&["Pay rent"]);
    sandbox.add(&["Later"]);

    sandbox
        .cmd()
        .args(["edit", &id, "--reminder", "2001-01-01T00:00:00Z"])
        .assert()
        .success();

    sandbox
        .cmd()
        .arg("due")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay rent"))
        .stdout(predicate::str::contains("Later").not());
}

#[test]
fn delete_removes_note() {
    let sandbox = Sandbox::new();
    let id = sandbox.add(&["Temporary"]);

    sandbox.cmd().args(["delete", &id]).assert().success();
    sandbox
        .cmd()
        .args(["show", &id])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No note matches"));
}

#[test]
fn shell_supports_undo() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("shell")
        .write_stdin("add 'Buy milk' -C tasks\nmove nope ideas\nundo\nundo\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("No note matches"))
        .stderr(predicate::str::contains("Undone"))
        .stderr(predicate::str::contains("Nothing to undo"));

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stderr(predicate::str::contains("No notes"));
}

#[test]
fn data_dir_flag_overrides_environment() {
    let sandbox = Sandbox::new();
    let other = tempfile::tempdir().unwrap();

    sandbox
        .cmd()
        .args(["add", "Elsewhere", "--data-dir"])
        .arg(other.path())
        .assert()
        .success();

    assert!(other.path().join("voice-to-structure-notes.json").exists());
    assert!(!sandbox
        .data
        .path()
        .join("voice-to-structure-notes.json")
        .exists());
}

#[test]
fn config_round_trip() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("voice-notes"))
        .stdout(predicate::str::contains("config.toml"));

    sandbox.cmd().args(["config", "init"]).assert().success();
    sandbox.cmd().args(["config", "set", "language", "english"]).assert().success();
    sandbox
        .cmd()
        .args(["config", "get", "language"])
        .assert()
        .success()
        .stdout("en\n");
    sandbox
        .cmd()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max_duration: 60s"));
}

#[test]
fn language_setting_changes_column_labels() {
    let sandbox = Sandbox::new();
    sandbox.add(&["Standup", "-C", "meetings"]);

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spotkania (1)"));

    sandbox.cmd().args(["config", "set", "language", "en"]).assert().success();
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meetings (1)"))
        .stdout(predicate::str::contains("Spotkania").not());
}

#[test]
fn config_dir_setting_is_used_for_notes() {
    let sandbox = Sandbox::new();
    let notes = tempfile::tempdir().unwrap();
    let dir = notes.path().to_string_lossy().to_string();

    sandbox.cmd().args(["config", "set", "data_dir", &dir]).assert().success();

    let mut cmd = Command::cargo_bin("voice-notes").unwrap();
    cmd.env_remove("VOICE_NOTES_DATA_DIR")
        .env("XDG_CONFIG_HOME", sandbox.config.path())
        .args(["add", "From config"])
        .assert()
        .success();

    assert!(notes.path().join("voice-to-structure-notes.json").exists());
}
