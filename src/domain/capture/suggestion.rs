//! Limits on model suggestions for an existing note

/// Longest title plus content sent for tag or category suggestions
pub const MAX_SUGGESTION_INPUT_LENGTH: usize = 5_000;

/// Tags kept from one suggestion
pub const MAX_SUGGESTED_TAGS: usize = 5;

/// Trim suggested tags, drop blanks and keep at most `MAX_SUGGESTED_TAGS`
pub fn clean_suggested_tags(raw: Vec<String>) -> Vec<String> {
    raw.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .take(MAX_SUGGESTED_TAGS)
        .collect()
}
