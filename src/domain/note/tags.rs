//! Tag input helpers

/// Split comma-separated tag input, trimming entries and dropping empties.
///
/// Order is kept and duplicates are not removed.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Append `suggested` to `existing`, skipping tags already present.
///
/// Blank suggestions are dropped; the existing order is kept.
pub fn merge_tags(existing: &[String], suggested: &[String]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for tag in suggested.iter().map(|t| t.trim()) {
        if !tag.is_empty() && !merged.iter().any(|t| t == tag) {
            merged.push(tag.to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(parse_tags(" work, home ,urgent"), vec!["work", "home", "urgent"]);
    }

    #[test]
    fn drops_empty_entries() {
        assert_eq!(parse_tags("a,, ,b,"), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_is_empty_list() {
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn merge_keeps_existing_and_skips_duplicates() {
        let existing = vec!["work".to_string(), "urgent".to_string()];
        let suggested = vec![
            "urgent".to_string(),
            " budget ".to_string(),
            "".to_string(),
            "budget".to_string(),
        ];
        assert_eq!(merge_tags(&existing, &suggested), vec!["work", "urgent", "budget"]);
    }

    #[test]
    fn merge_into_nothing() {
        assert_eq!(merge_tags(&[], &["a".to_string()]), vec!["a"]);
        assert!(merge_tags(&[], &[]).is_empty());
    }
}
