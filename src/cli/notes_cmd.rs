//! Note command handlers

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

use crate::application::ports::{Clock, IdGenerator, KeyValueStore};
use crate::application::NoteStore;
use crate::domain::note::{
    due_reminders, encode_image_data_uri, image_mime_type, parse_tags, Board, BoardQuery,
    FieldUpdate, Note, NoteUpdate,
};

use super::args::NoteCommand;
use super::error::CliError;
use super::presenter::{short_id, Presenter};

/// Run one note command against the store
pub fn handle_note_command<S, C, G>(
    command: NoteCommand,
    store: &mut NoteStore<S, C, G>,
    presenter: &Presenter,
    now: i64,
) -> Result<(), CliError>
where
    S: KeyValueStore,
    C: Clock,
    G: IdGenerator,
{
    match command {
        NoteCommand::List { archived, search, sort } => {
            let query = BoardQuery {
                show_archived: archived,
                search,
                sort,
            };
            let board = Board::build(store.notes(), &query);
            if board.is_empty() {
                presenter.info(if archived { "Archive is empty" } else { "No notes" });
            } else {
                presenter.board(&board);
            }
        }

        NoteCommand::Add { title, content, category, transcript } => {
            let transcript = transcript.unwrap_or_else(|| title.clone());
            let note = store.save_note(&transcript, &title, &content, category)?;
            presenter.success(&format!("Added to {}", presenter.category_label(category)));
            presenter.output(&note.id);
        }

        NoteCommand::Show { id } => {
            let note = resolve(store.notes(), &id)?;
            presenter.note_detail(note);
        }

        NoteCommand::Edit {
            id,
            title,
            content,
            tags,
            color,
            reminder,
            images,
            clear_images,
        } => {
            let note = resolve(store.notes(), &id)?;
            let id = note.id.clone();

            let mut update = NoteUpdate::new(
                title.unwrap_or_else(|| note.title.clone()),
                content.unwrap_or_else(|| note.content.clone()),
            );
            if let Some(tags) = tags {
                update = update.with_tags(parse_tags(&tags));
            }
            if let Some(color) = color {
                update = update.with_color(color);
            }
            if let Some(reminder) = reminder {
                update = update.with_reminder(parse_reminder(&reminder)?);
            }
            if clear_images {
                update = update.with_images(Vec::new());
            } else if !images.is_empty() {
                let mut attached = note.images.clone().unwrap_or_default();
                for path in &images {
                    attached.push(load_image(path)?);
                }
                update = update.with_images(attached);
            }

            store.update_note(&id, update)?;
            presenter.success(&format!("Updated {}", short_id(&id)));
        }

        NoteCommand::Move { id, category } => {
            let id = resolve(store.notes(), &id)?.id.clone();
            store.update_note_category(&id, category)?;
            presenter.success(&format!(
                "Moved {} to {}",
                short_id(&id),
                presenter.category_label(category)
            ));
        }

        NoteCommand::Archive { id } => {
            let id = resolve(store.notes(), &id)?.id.clone();
            store.archive_note(&id)?;
            presenter.success(&format!("Archived {}", short_id(&id)));
        }

        NoteCommand::Unarchive { id } => {
            let id = resolve(store.notes(), &id)?.id.clone();
            store.unarchive_note(&id)?;
            presenter.success(&format!("Restored {} to the board", short_id(&id)));
        }

        NoteCommand::Delete { id } => {
            let id = resolve(store.notes(), &id)?.id.clone();
            store.delete_note(&id)?;
            presenter.success(&format!("Deleted {}", short_id(&id)));
        }

        NoteCommand::History { id } => {
            let note = resolve(store.notes(), &id)?;
            presenter.versions(note);
        }

        NoteCommand::Restore { id, index } => {
            let note = resolve(store.notes(), &id)?;
            let count = note.versions().len();
            if index >= count {
                return Err(CliError::NoSuchVersion { index, count });
            }
            let id = note.id.clone();
            store.restore_version(&id, index)?;
            presenter.success(&format!("Restored version {} of {}", index, short_id(&id)));
        }

        NoteCommand::Due => {
            let due = due_reminders(store.notes(), now);
            if due.is_empty() {
                presenter.info("No reminders due");
            } else {
                presenter.note_list(&due);
            }
        }
    }

    Ok(())
}

/// Find a note by full id or unique id prefix
pub fn resolve<'a>(notes: &'a [Note], id: &str) -> Result<&'a Note, CliError> {
    if let Some(note) = notes.iter().find(|n| n.id == id) {
        return Ok(note);
    }
    if id.is_empty() {
        return Err(CliError::NotFound(id.to_string()));
    }

    let mut matches = notes.iter().filter(|n| n.id.starts_with(id));
    match (matches.next(), matches.count()) {
        (Some(note), 0) => Ok(note),
        (Some(_), rest) => Err(CliError::Ambiguous {
            prefix: id.to_string(),
            count: rest + 1,
        }),
        (None, _) => Err(CliError::NotFound(id.to_string())),
    }
}

/// `none` clears; otherwise RFC 3339 or a local `YYYY-MM-DDTHH:MM`
pub fn parse_reminder(input: &str) -> Result<FieldUpdate<i64>, CliError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("none") || input.is_empty() {
        return Ok(FieldUpdate::Clear);
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Ok(FieldUpdate::Set(at.timestamp_millis()));
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M")
        .ok()
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|at| FieldUpdate::Set(at.timestamp_millis()))
        .ok_or_else(|| CliError::InvalidReminder(input.to_string()))
}

fn load_image(path: &Path) -> Result<String, CliError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let mime_type = image_mime_type(extension)?;
    let bytes = fs::read(path).map_err(|e| CliError::ReadFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(encode_image_data_uri(&bytes, mime_type)?)
}
