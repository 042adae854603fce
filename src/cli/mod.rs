//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the interactive shell
//! and the command runners.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod error;
pub mod notes_cmd;
pub mod presenter;
pub mod record_cmd;
pub mod shell;

// Re-export commonly used types
pub use app::{run, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction, NoteCommand};
pub use error::CliError;
pub use presenter::Presenter;
