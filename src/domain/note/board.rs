//! Kanban board view over the note collection

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidSortOrderError;

use super::{Note, NoteCategory, ALL_CATEGORIES};

/// How notes are ordered inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first
    #[default]
    Date,
    /// Title, case-insensitive A to Z
    Alpha,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Alpha => "alpha",
        }
    }
}

impl FromStr for SortOrder {
    type Err = InvalidSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "alpha" => Ok(Self::Alpha),
            _ => Err(InvalidSortOrderError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which notes the board shows and how
#[derive(Debug, Clone, Default)]
pub struct BoardQuery {
    /// Show the archive instead of the active notes
    pub show_archived: bool,
    /// Case-insensitive filter over title and content
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl BoardQuery {
    fn matches(&self, note: &Note) -> bool {
        if note.is_archived() != self.show_archived {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                note.title.to_lowercase().contains(&query)
                    || note.content.to_lowercase().contains(&query)
            }
        }
    }
}

/// One board column
#[derive(Debug, Clone)]
pub struct Column<'a> {
    pub category: NoteCategory,
    pub notes: Vec<&'a Note>,
}

/// Notes grouped into the four category columns, in display order
#[derive(Debug, Clone)]
pub struct Board<'a> {
    columns: Vec<Column<'a>>,
}

impl<'a> Board<'a> {
    pub fn build(notes: &'a [Note], query: &BoardQuery) -> Self {
        let columns = ALL_CATEGORIES
            .iter()
            .map(|&category| {
                let mut column: Vec<&Note> = notes
                    .iter()
                    .filter(|n| n.category == category && query.matches(n))
                    .collect();
                match query.sort {
                    SortOrder::Date => column.sort_by_key(|n| Reverse(n.created_at)),
                    SortOrder::Alpha => column.sort_by_key(|n| n.title.to_lowercase()),
                }
                Column { category, notes: column }
            })
            .collect();

        Self { columns }
    }

    pub fn columns(&self) -> &[Column<'a>] {
        &self.columns
    }

    pub fn column(&self, category: NoteCategory) -> &[&'a Note] {
        self.columns
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.notes.as_slice())
            .unwrap_or(&[])
    }

    /// Number of notes on the board
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.notes.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Active notes whose reminder time has passed, oldest reminder first
pub fn due_reminders(notes: &[Note], now: i64) -> Vec<&Note> {
    let mut due: Vec<&Note> = notes
        .iter()
        .filter(|n| !n.is_archived() && n.reminder_due(now))
        .collect();
    due.sort_by_key(|n| n.reminder);
    due
}
