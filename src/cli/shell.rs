//! Interactive shell
//!
//! Keeps one note store open across commands, which is what makes `undo`
//! useful: the undo history lives only as long as the process.

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::application::ports::{Clock, IdGenerator, KeyValueStore};
use crate::application::NoteStore;
use crate::infrastructure::SystemClock;

use super::args::{ShellCommand, ShellLine};
use super::error::CliError;
use super::notes_cmd::handle_note_command;
use super::presenter::Presenter;

const PROMPT: &str = "voice-notes> ";

/// Run the shell on stdin
pub async fn run_shell<S, C, G>(
    store: &mut NoteStore<S, C, G>,
    presenter: &Presenter,
) -> Result<(), CliError>
where
    S: KeyValueStore,
    C: Clock,
    G: IdGenerator,
{
    presenter.info("Type a command (list, add, edit, move, undo, ...), 'help' or 'exit'");
    run_shell_on(BufReader::new(tokio::io::stdin()), store, presenter, true).await
}

/// Run the shell on any line source. Command errors are reported and the
/// session continues; only reading input can end it with an error.
pub async fn run_shell_on<R, S, C, G>(
    input: R,
    store: &mut NoteStore<S, C, G>,
    presenter: &Presenter,
    prompt: bool,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    S: KeyValueStore,
    C: Clock,
    G: IdGenerator,
{
    let mut lines = input.lines();

    loop {
        if prompt {
            eprint!("{}", PROMPT);
            let _ = std::io::stderr().flush();
        }

        let Some(line) = lines.next_line().await.map_err(|e| CliError::ReadFile {
            path: "stdin".to_string(),
            message: e.to_string(),
        })?
        else {
            break;
        };

        let words = match split_words(&line) {
            Ok(words) if words.is_empty() => continue,
            Ok(words) => words,
            Err(message) => {
                presenter.error(&message);
                continue;
            }
        };

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        match command {
            ShellCommand::Note(command) => {
                if let Err(e) = handle_note_command(command, store, presenter, SystemClock.now_millis()) {
                    presenter.error(&e.to_string());
                }
            }
            ShellCommand::Undo => match store.undo() {
                Ok(true) => presenter.success("Undone"),
                Ok(false) => presenter.info("Nothing to undo"),
                Err(e) => presenter.error(&e.to_string()),
            },
            ShellCommand::Exit => break,
        }
    }

    Ok(())
}

/// Split a line into words, honoring single quotes, double quotes and
/// backslash escapes
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"'), '\\') | (None, '\\') => match chars.next() {
                Some(escaped) => {
                    current.push(escaped);
                    in_word = true;
                }
                None => return Err("Trailing backslash".to_string()),
            },
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
