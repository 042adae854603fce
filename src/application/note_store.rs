//! Undo-capable, write-through note store

use std::collections::{HashSet, VecDeque};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::note::{Note, NoteCategory, NoteUpdate};

use super::ports::{Clock, IdGenerator, KeyValueStore, StorageError};

/// Key the note collection is persisted under
pub const STORAGE_KEY: &str = "voice-to-structure-notes";

/// Number of undo snapshots kept
pub const MAX_HISTORY: usize = 10;

/// Errors from persisting the note collection
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to encode notes: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Note storage failed: {0}")]
    Storage(#[from] StorageError),
}

/// Sole owner of the note collection.
///
/// Every mutation serializes the whole next collection and writes it to the
/// key-value store before it becomes visible in memory; if the write fails
/// the store is left untouched and the error is returned. Each committed
/// mutation pushes the previous collection onto a bounded undo stack.
///
/// Unknown ids are not an error: mutations referencing them return
/// `Ok(false)` and change nothing.
pub struct NoteStore<S, C, G>
where
    S: KeyValueStore,
    C: Clock,
    G: IdGenerator,
{
    storage: S,
    clock: C,
    ids: G,
    notes: Vec<Note>,
    history: VecDeque<Vec<Note>>,
}

impl<S, C, G> NoteStore<S, C, G>
where
    S: KeyValueStore,
    C: Clock,
    G: IdGenerator,
{
    /// Load the persisted collection.
    ///
    /// Unparseable stored data yields an empty collection (logged); a failing
    /// read is returned as an error.
    pub fn open(storage: S, clock: C, ids: G) -> Result<Self, PersistenceError> {
        let mut notes = match storage.get(STORAGE_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Note>>(&raw) {
                Ok(notes) => notes,
                Err(e) => {
                    warn!(error = %e, "stored notes are unreadable, starting empty");
                    Vec::new()
                }
            },
        };

        let loaded = notes.len();
        let mut seen = HashSet::new();
        notes.retain(|n| seen.insert(n.id.clone()));
        if notes.len() < loaded {
            warn!(
                dropped = loaded - notes.len(),
                "stored notes repeat ids, keeping the first of each"
            );
        }
        debug!(count = notes.len(), "note store opened");

        Ok(Self {
            storage,
            clock,
            ids,
            notes,
            history: VecDeque::new(),
        })
    }

    /// Notes, most recent first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Create a note and put it at the front of the collection
    pub fn save_note(
        &mut self,
        transcript: &str,
        title: &str,
        content: &str,
        category: NoteCategory,
    ) -> Result<Note, PersistenceError> {
        let note = Note::new(
            self.fresh_id(),
            transcript,
            title,
            content,
            category,
            self.clock.now_millis(),
        );

        let mut next = Vec::with_capacity(self.notes.len() + 1);
        next.push(note.clone());
        next.extend(self.notes.iter().cloned());
        self.commit(next)?;

        debug!(note_id = %note.id, category = %category, "note saved");
        Ok(note)
    }

    pub fn update_note_category(
        &mut self,
        id: &str,
        category: NoteCategory,
    ) -> Result<bool, PersistenceError> {
        self.mutate(id, |note| note.category = category)
    }

    /// Write a note's text and decorations, recording a version when the
    /// text changes
    pub fn update_note(&mut self, id: &str, update: NoteUpdate) -> Result<bool, PersistenceError> {
        let now = self.clock.now_millis();
        self.mutate(id, |note| {
            if note.apply_update(update, now) {
                debug!(note_id = %note.id, versions = note.versions().len(), "version recorded");
            }
        })
    }

    /// Bring back the text of `versions[index]`; the current text becomes a
    /// version itself
    pub fn restore_version(&mut self, id: &str, index: usize) -> Result<bool, PersistenceError> {
        let Some(version) = self.get(id).and_then(|n| n.versions().get(index)).cloned() else {
            return Ok(false);
        };
        self.update_note(id, NoteUpdate::new(version.title, version.content))
    }

    pub fn delete_note(&mut self, id: &str) -> Result<bool, PersistenceError> {
        if self.get(id).is_none() {
            return Ok(false);
        }
        let next = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        self.commit(next)?;
        debug!(note_id = %id, "note deleted");
        Ok(true)
    }

    pub fn archive_note(&mut self, id: &str) -> Result<bool, PersistenceError> {
        self.mutate(id, |note| note.archived = Some(true))
    }

    pub fn unarchive_note(&mut self, id: &str) -> Result<bool, PersistenceError> {
        self.mutate(id, |note| note.archived = Some(false))
    }

    /// Roll the whole collection back to the previous snapshot.
    ///
    /// Returns false when there is nothing to undo. There is no redo.
    pub fn undo(&mut self) -> Result<bool, PersistenceError> {
        let Some(previous) = self.history.pop_back() else {
            return Ok(false);
        };

        if let Err(e) = self.persist(&previous) {
            self.history.push_back(previous);
            return Err(e);
        }

        self.notes = previous;
        debug!(remaining = self.history.len(), "undo applied");
        Ok(true)
    }

    fn mutate<F>(&mut self, id: &str, change: F) -> Result<bool, PersistenceError>
    where
        F: FnOnce(&mut Note),
    {
        let Some(index) = self.notes.iter().position(|n| n.id == id) else {
            debug!(note_id = %id, "no such note, ignoring");
            return Ok(false);
        };

        let mut next = self.notes.clone();
        change(&mut next[index]);
        self.commit(next)?;
        Ok(true)
    }

    /// Persist `next`, then make it current and remember what it replaced
    fn commit(&mut self, next: Vec<Note>) -> Result<(), PersistenceError> {
        self.persist(&next)?;

        let previous = std::mem::replace(&mut self.notes, next);
        self.history.push_back(previous);
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
        Ok(())
    }

    fn persist(&self, notes: &[Note]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(notes)?;
        self.storage.set(STORAGE_KEY, &json)?;
        Ok(())
    }

    fn fresh_id(&self) -> String {
        let mut id = self.ids.generate();
        let mut attempt = 1;
        while self.get(&id).is_some() {
            id = if attempt < 8 {
                self.ids.generate()
            } else {
                format!("{}-{}", self.ids.generate(), attempt)
            };
            attempt += 1;
        }
        id
    }
}
