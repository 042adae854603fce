//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::note::{NoteCategory, NoteColor, SortOrder};

/// VoiceNotes - voice notes on a kanban board
#[derive(Parser, Debug)]
#[command(name = "voice-notes")]
#[command(version)]
#[command(about = "Record voice notes and organize them on a kanban board")]
#[command(long_about = None)]
pub struct Cli {
    /// Show debug logs (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Directory holding the note collection
    #[arg(long, value_name = "DIR", global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Note(NoteCommand),

    /// Record from the microphone until Enter, Ctrl-C or the ceiling
    Record {
        /// Auto-stop after this long (e.g., 30s, 1m, 2m30s)
        #[arg(short = 'm', long, value_name = "TIME")]
        max_duration: Option<String>,

        /// Write the FLAC recording here
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Interactive session; supports `undo`
    Shell,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Note commands, shared by the command line and the shell
#[derive(Subcommand, Debug, Clone)]
pub enum NoteCommand {
    /// Show the board
    List {
        /// Show the archive instead of active notes
        #[arg(short = 'a', long)]
        archived: bool,

        /// Only notes whose title or content contains this
        #[arg(short = 's', long, value_name = "QUERY")]
        search: Option<String>,

        /// Column ordering: date or alpha
        #[arg(long, value_name = "ORDER", default_value = "date")]
        sort: SortOrder,
    },

    /// Create a note
    Add {
        title: String,

        #[arg(short = 'c', long, default_value = "")]
        content: String,

        /// tasks, ideas, notes or meetings
        #[arg(short = 'C', long, default_value = "notes")]
        category: NoteCategory,

        /// Raw transcript (defaults to the title)
        #[arg(short = 't', long)]
        transcript: Option<String>,
    },

    /// Show one note
    Show { id: String },

    /// Edit a note's text or decorations
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Comma-separated tags; an empty string clears them
        #[arg(long, value_name = "TAGS")]
        tags: Option<String>,

        #[arg(long)]
        color: Option<NoteColor>,

        /// RFC 3339 or YYYY-MM-DDTHH:MM local time, or "none" to clear
        #[arg(long, value_name = "WHEN")]
        reminder: Option<String>,

        /// Attach an image (repeatable)
        #[arg(long = "image", value_name = "PATH")]
        images: Vec<PathBuf>,

        /// Remove all attached images
        #[arg(long, conflicts_with = "images")]
        clear_images: bool,
    },

    /// Move a note to another column
    Move { id: String, category: NoteCategory },

    /// Hide a note from the board
    Archive { id: String },

    /// Bring an archived note back
    Unarchive { id: String },

    /// Delete a note
    Delete { id: String },

    /// List a note's earlier versions
    History { id: String },

    /// Bring back an earlier version
    Restore { id: String, index: usize },

    /// List notes whose reminder is due
    Due,
}

/// One line typed into the shell
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    #[command(flatten)]
    Note(NoteCommand),

    /// Revert the last change
    Undo,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "data_dir",
    "max_duration",
    "language",
    "translation_language",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_list_defaults() {
        let cli = Cli::parse_from(["voice-notes", "list"]);
        match cli.command {
            Commands::Note(NoteCommand::List { archived, search, sort }) => {
                assert!(!archived);
                assert!(search.is_none());
                assert_eq!(sort, SortOrder::Date);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_add() {
        let cli = Cli::parse_from([
            "voice-notes", "add", "Buy milk", "-c", "- milk", "-C", "tasks",
        ]);
        match cli.command {
            Commands::Note(NoteCommand::Add { title, content, category, transcript }) => {
                assert_eq!(title, "Buy milk");
                assert_eq!(content, "- milk");
                assert_eq!(category, NoteCategory::Tasks);
                assert!(transcript.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["voice-notes", "move", "abc", "shopping"]).is_err());
    }

    #[test]
    fn cli_parses_edit_with_images() {
        let cli = Cli::parse_from([
            "voice-notes", "edit", "abc", "--image", "a.png", "--image", "b.jpg", "--color", "blue",
        ]);
        match cli.command {
            Commands::Note(NoteCommand::Edit { images, color, clear_images, .. }) => {
                assert_eq!(images, vec![PathBuf::from("a.png"), PathBuf::from("b.jpg")]);
                assert_eq!(color, Some(NoteColor::Blue));
                assert!(!clear_images);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn image_and_clear_images_conflict() {
        assert!(Cli::try_parse_from([
            "voice-notes", "edit", "abc", "--image", "a.png", "--clear-images",
        ])
        .is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["voice-notes", "list", "--data-dir", "/tmp/x", "-v"]);
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some("/tmp/x".to_string()));
    }

    #[test]
    fn cli_parses_record() {
        let cli = Cli::parse_from(["voice-notes", "record", "-m", "30s", "-o", "out.flac"]);
        match cli.command {
            Commands::Record { max_duration, output } => {
                assert_eq!(max_duration, Some("30s".to_string()));
                assert_eq!(output, Some(PathBuf::from("out.flac")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["voice-notes", "config", "set", "language", "en"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "language");
            assert_eq!(value, "en");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn shell_line_parses_undo_and_note_commands() {
        let line = ShellLine::try_parse_from(["undo"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Undo));

        let line = ShellLine::try_parse_from(["quit"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Exit));

        let line = ShellLine::try_parse_from(["archive", "abc"]).unwrap();
        assert!(matches!(
            line.command,
            ShellCommand::Note(NoteCommand::Archive { ref id }) if id == "abc"
        ));
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("language"));
        assert!(is_valid_config_key("max_duration"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
        ShellLine::command().debug_assert();
    }
}
