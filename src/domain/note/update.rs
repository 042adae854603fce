//! Note update request

/// Change requested for an optional field.
///
/// `Keep` leaves the stored value alone, `Clear` removes it, `Set` replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Resolve against the current value
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `None` clears, `Some` sets
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Set(v),
            None => Self::Clear,
        }
    }
}

/// Edit of a note's text and decorations.
///
/// `title` and `content` are always written. The list fields and `color`
/// follow "absent keeps, provided replaces": `None` preserves the stored value
/// and `Some(vec![])` explicitly clears a list. `reminder` is tri-state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteUpdate {
    pub title: String,
    pub content: String,
    pub tags: Option<Vec<String>>,
    pub color: Option<super::NoteColor>,
    pub reminder: FieldUpdate<i64>,
    pub images: Option<Vec<String>>,
}

impl NoteUpdate {
    /// Text-only update; every decoration is preserved
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_color(mut self, color: super::NoteColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_reminder(mut self, reminder: FieldUpdate<i64>) -> Self {
        self.reminder = reminder;
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }
}
