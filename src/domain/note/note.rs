//! Note entity

use serde::{Deserialize, Serialize};

use super::{NoteCategory, NoteColor, NoteUpdate};

/// Number of text snapshots kept per note
pub const MAX_VERSIONS: usize = 10;

/// Snapshot of a note's text taken just before it was changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteVersion {
    pub title: String,
    pub content: String,
    pub timestamp: i64,
}

/// A structured note derived from a voice transcript.
///
/// Optional fields are omitted from the stored JSON when absent, so a list
/// that was never set stays distinguishable from one that was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub transcript: String,
    pub title: String,
    pub content: String,
    pub category: NoteCategory,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<NoteColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<NoteVersion>>,
}

impl Note {
    /// Create a fresh note with no decorations
    pub fn new(
        id: impl Into<String>,
        transcript: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: NoteCategory,
        created_at: i64,
    ) -> Self {
        Self {
            id: id.into(),
            transcript: transcript.into(),
            title: title.into(),
            content: content.into(),
            category,
            created_at,
            tags: None,
            color: None,
            reminder: None,
            archived: None,
            images: None,
            versions: None,
        }
    }

    pub fn is_archived(&self) -> bool {
        self.archived.unwrap_or(false)
    }

    pub fn color_or_default(&self) -> NoteColor {
        self.color.unwrap_or_default()
    }

    pub fn versions(&self) -> &[NoteVersion] {
        self.versions.as_deref().unwrap_or(&[])
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Whether writing this title/content would change the note's text
    pub fn text_differs(&self, title: &str, content: &str) -> bool {
        self.title != title || self.content != content
    }

    /// Whether the reminder time has passed
    pub fn reminder_due(&self, now: i64) -> bool {
        self.reminder.is_some_and(|at| at <= now)
    }

    /// Apply an edit, snapshotting the previous text when it changes.
    ///
    /// Returns true if a version was recorded.
    pub fn apply_update(&mut self, update: NoteUpdate, now: i64) -> bool {
        let text_changed = self.text_differs(&update.title, &update.content);

        if text_changed {
            let snapshot = NoteVersion {
                title: std::mem::take(&mut self.title),
                content: std::mem::take(&mut self.content),
                timestamp: now,
            };
            let versions = self.versions.get_or_insert_with(Vec::new);
            versions.push(snapshot);
            if versions.len() > MAX_VERSIONS {
                let excess = versions.len() - MAX_VERSIONS;
                versions.drain(..excess);
            }
        }

        self.title = update.title;
        self.content = update.content;
        if let Some(tags) = update.tags {
            self.tags = Some(tags);
        }
        if let Some(color) = update.color {
            self.color = Some(color);
        }
        if let Some(images) = update.images {
            self.images = Some(images);
        }
        self.reminder = update.reminder.apply(self.reminder.take());

        text_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::note::FieldUpdate;

    fn sample() -> Note {
        Note::new("n1", "raw words", "Title", "Body", NoteCategory::Tasks, 1_000)
    }

    #[test]
    fn new_note_has_no_decorations() {
        let note = sample();
        assert!(!note.is_archived());
        assert_eq!(note.color_or_default(), NoteColor::Default);
        assert!(note.versions().is_empty());
        assert!(note.tags.is_none());
    }

    #[test]
    fn text_change_records_previous_version() {
        let mut note = sample();
        let recorded = note.apply_update(NoteUpdate::new("New", "Body"), 2_000);

        assert!(recorded);
        assert_eq!(note.title, "New");
        assert_eq!(
            note.versions(),
            &[NoteVersion {
                title: "Title".to_string(),
                content: "Body".to_string(),
                timestamp: 2_000,
            }]
        );
    }

    #[test]
    fn identical_text_records_nothing() {
        let mut note = sample();
        let recorded = note.apply_update(
            NoteUpdate::new("Title", "Body").with_color(NoteColor::Red),
            2_000,
        );

        assert!(!recorded);
        assert!(note.versions.is_none());
        assert_eq!(note.color, Some(NoteColor::Red));
    }

    #[test]
    fn versions_are_capped_oldest_first() {
        let mut note = sample();
        for i in 0..12 {
            note.apply_update(NoteUpdate::new(format!("T{i}"), "Body"), i);
        }

        let versions = note.versions();
        assert_eq!(versions.len(), MAX_VERSIONS);
        // 12 edits produced snapshots Title, T0..T10; the two oldest are gone
        assert_eq!(versions[0].title, "T1");
        assert_eq!(versions[MAX_VERSIONS - 1].title, "T10");
    }

    #[test]
    fn reminder_tri_state() {
        let mut note = sample();
        note.apply_update(
            NoteUpdate::new("Title", "Body").with_reminder(FieldUpdate::Set(5_000)),
            0,
        );
        assert_eq!(note.reminder, Some(5_000));

        note.apply_update(NoteUpdate::new("Title", "Body"), 0);
        assert_eq!(note.reminder, Some(5_000));

        note.apply_update(
            NoteUpdate::new("Title", "Body").with_reminder(FieldUpdate::Clear),
            0,
        );
        assert_eq!(note.reminder, None);
    }

    #[test]
    fn reminder_due() {
        let mut note = sample();
        assert!(!note.reminder_due(10));
        note.reminder = Some(10);
        assert!(note.reminder_due(10));
        assert!(!note.reminder_due(9));
    }

    #[test]
    fn json_uses_camel_case_and_omits_absent_fields() {
        let note = sample();
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["createdAt"], 1_000);
        assert_eq!(json["category"], "tasks");
        assert!(json.get("tags").is_none());
        assert!(json.get("archived").is_none());
    }

    #[test]
    fn json_keeps_empty_list_distinct_from_absent() {
        let mut note = sample();
        note.tags = Some(vec![]);
        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tags, Some(vec![]));
    }
}
