//! Note category value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::capture::Language;
use crate::domain::error::InvalidCategoryError;

/// Board columns, in display order
pub const ALL_CATEGORIES: &[NoteCategory] = &[
    NoteCategory::Tasks,
    NoteCategory::Ideas,
    NoteCategory::Notes,
    NoteCategory::Meetings,
];

/// Kanban column a note belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteCategory {
    Tasks,
    Ideas,
    #[default]
    Notes,
    Meetings,
}

impl NoteCategory {
    /// Get the string identifier for this category
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Ideas => "ideas",
            Self::Notes => "notes",
            Self::Meetings => "meetings",
        }
    }

    /// Get the human-readable column label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Ideas => "Ideas",
            Self::Notes => "Notes",
            Self::Meetings => "Meetings",
        }
    }

    /// Column label in the interface language
    pub const fn label_in(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.label(),
            Language::Polish => match self {
                Self::Tasks => "Zadania",
                Self::Ideas => "Pomysły",
                Self::Notes => "Notatki",
                Self::Meetings => "Spotkania",
            },
        }
    }

    /// Parse a category suggested by a language model.
    ///
    /// Models answer with stray whitespace, casing or punctuation; anything
    /// that still does not match a column lands in `notes`.
    pub fn parse_lenient(s: &str) -> Self {
        let cleaned: String = s
            .trim()
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        cleaned.parse().unwrap_or_default()
    }
}

impl FromStr for NoteCategory {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tasks" => Ok(Self::Tasks),
            "ideas" => Ok(Self::Ideas),
            "notes" => Ok(Self::Notes),
            "meetings" => Ok(Self::Meetings),
            _ => Err(InvalidCategoryError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for NoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_categories() {
        assert_eq!("tasks".parse::<NoteCategory>().unwrap(), NoteCategory::Tasks);
        assert_eq!("ideas".parse::<NoteCategory>().unwrap(), NoteCategory::Ideas);
        assert_eq!("notes".parse::<NoteCategory>().unwrap(), NoteCategory::Notes);
        assert_eq!(
            "meetings".parse::<NoteCategory>().unwrap(),
            NoteCategory::Meetings
        );
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(" Tasks ".parse::<NoteCategory>().unwrap(), NoteCategory::Tasks);
    }

    #[test]
    fn parse_invalid() {
        let err = "todo".parse::<NoteCategory>().unwrap_err();
        assert!(err.to_string().contains("todo"));
    }

    #[test]
    fn labels_follow_language() {
        assert_eq!(NoteCategory::Tasks.label_in(Language::English), "Tasks");
        assert_eq!(NoteCategory::Tasks.label_in(Language::Polish), "Zadania");
        assert_eq!(NoteCategory::Meetings.label_in(Language::Polish), "Spotkania");
    }

    #[test]
    fn parse_lenient_falls_back_to_notes() {
        assert_eq!(NoteCategory::parse_lenient("Ideas."), NoteCategory::Ideas);
        assert_eq!(NoteCategory::parse_lenient("\"meetings\"\n"), NoteCategory::Meetings);
        assert_eq!(NoteCategory::parse_lenient("shopping"), NoteCategory::Notes);
        assert_eq!(NoteCategory::parse_lenient(""), NoteCategory::Notes);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&NoteCategory::Meetings).unwrap();
        assert_eq!(json, "\"meetings\"");
    }

    #[test]
    fn column_order() {
        assert_eq!(ALL_CATEGORIES.len(), 4);
        assert_eq!(ALL_CATEGORIES[0], NoteCategory::Tasks);
        assert_eq!(ALL_CATEGORIES[3], NoteCategory::Meetings);
    }
}
