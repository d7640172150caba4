//! Note search helpers.
//!
//! Search is a plain case-insensitive substring match over title and
//! content. The query is taken literally: no pattern syntax, ranking or
//! pagination.

pub const MSG_QUERY_REQUIRED: &str = "Search query is required";

/// Accept the raw `query` parameter, rejecting an absent or empty one.
pub fn validate_query(query: Option<&str>) -> Result<&str, String> {
    match query {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(MSG_QUERY_REQUIRED.to_string()),
    }
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Whether a note with the given title and content matches `query`.
pub fn note_matches(title: &str, content: &str, query: &str) -> bool {
    contains_ignore_case(title, query) || contains_ignore_case(content, query)
}
