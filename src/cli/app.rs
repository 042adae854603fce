//! Application wiring: config merge, logging and command dispatch

use std::env;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::application::ports::{Clock, ConfigStore};
use crate::application::NoteStore;
use crate::domain::config::AppConfig;
use crate::domain::recording::Duration;
use crate::infrastructure::{FileStore, SystemClock, UuidGenerator, XdgConfigStore};

use super::args::{Cli, Commands};
use super::config_cmd::handle_config_command;
use super::error::CliError;
use super::notes_cmd::handle_note_command;
use super::presenter::Presenter;
use super::record_cmd::run_record;
use super::shell::run_shell;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "VOICE_NOTES_DATA_DIR";

/// Note store backed by the data directory
pub type AppNoteStore = NoteStore<FileStore, SystemClock, UuidGenerator>;

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins; otherwise only warnings, or debug output for this crate
/// with `--verbose`. Logs go to stderr so stdout stays clean for output.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "voice_notes=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let loaded = match XdgConfigStore::new() {
        Ok(store) => store.load().await,
        Err(e) => Err(e),
    };
    let file_config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    let env_config = AppConfig {
        data_dir: env::var(DATA_DIR_ENV).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Open the persisted note collection
pub fn open_store(config: &AppConfig) -> Result<AppNoteStore, CliError> {
    let dir = config
        .data_dir()
        .or_else(FileStore::default_dir)
        .ok_or(CliError::NoDataDir)?;
    debug!(dir = %dir.display(), "opening note store");
    Ok(NoteStore::open(FileStore::new(dir), SystemClock, UuidGenerator)?)
}

/// Run a parsed command line and map the outcome to an exit code
pub async fn run(cli: Cli) -> ExitCode {
    init_logging(cli.verbose);
    let mut presenter = Presenter::new();

    let result = match cli.command {
        Commands::Config { action } => {
            match XdgConfigStore::new() {
                Ok(store) => handle_config_command(action, &store, &presenter)
                    .await
                    .map_err(CliError::from),
                Err(e) => Err(e.into()),
            }
        }
        command => {
            let cli_config = AppConfig {
                data_dir: cli.data_dir,
                ..Default::default()
            };
            let config = load_merged_config(cli_config).await;
            presenter.set_language(config.language_or_default());
            dispatch(command, &config, &mut presenter).await
        }
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            if e.is_usage_error() {
                ExitCode::from(EXIT_USAGE_ERROR)
            } else {
                ExitCode::from(EXIT_ERROR)
            }
        }
    }
}

async fn dispatch(
    command: Commands,
    config: &AppConfig,
    presenter: &mut Presenter,
) -> Result<(), CliError> {
    match command {
        Commands::Note(command) => {
            let mut store = open_store(config)?;
            handle_note_command(command, &mut store, presenter, SystemClock.now_millis())
        }
        Commands::Record { max_duration, output } => {
            let max_duration = match max_duration {
                Some(s) => s.parse::<Duration>()?,
                None => config.max_duration_or_default(),
            };
            run_record(max_duration, output, presenter).await
        }
        Commands::Shell => {
            let mut store = open_store(config)?;
            run_shell(&mut store, presenter).await
        }
        Commands::Config { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_store_uses_configured_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: Some(dir.path().to_string_lossy().to_string()),
            ..AppConfig::defaults()
        };

        let mut store = open_store(&config).unwrap();
        assert!(store.is_empty());
        store
            .save_note("t", "Title", "", crate::domain::note::NoteCategory::Ideas)
            .unwrap();

        let reopened = open_store(&config).unwrap();
        assert_eq!(reopened.len(), 1);
        assert!(dir.path().join("voice-to-structure-notes.json").exists());
    }
}
