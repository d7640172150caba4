//! Field rules for creating and editing notes.

pub const MSG_TITLE_REQUIRED: &str = "Title is required";
pub const MSG_CONTENT_REQUIRED: &str = "Content is required";
pub const MSG_NO_CHANGES: &str = "No changes provided";

/// Entity label used in not-found errors.
pub const ENTITY_NOTE: &str = "Note";

/// Keep a string field only when it is non-empty.
///
/// Edits treat an empty title or content exactly like an absent one.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// An edit may only raise the pinned flag; `false` is ignored.
pub fn pin_raise(value: Option<bool>) -> Option<bool> {
    value.filter(|pinned| *pinned)
}

/// Whether an edit carries at least one of title, content or tags.
///
/// `is_pinned` alone does not count; a present tag list counts even when
/// empty.
pub fn has_changes(title: Option<&str>, content: Option<&str>, tags: Option<&[String]>) -> bool {
    title.is_some_and(|t| !t.is_empty())
        || content.is_some_and(|c| !c.is_empty())
        || tags.is_some()
}

pub fn validate_new_note(title: Option<&str>, content: Option<&str>) -> Result<(), String> {
    if !title.is_some_and(|t| !t.is_empty()) {
        return Err(MSG_TITLE_REQUIRED.to_string());
    }
    if !content.is_some_and(|c| !c.is_empty()) {
        return Err(MSG_CONTENT_REQUIRED.to_string());
    }
    Ok(())
}
