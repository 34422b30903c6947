use serde::Serialize;
use validator::ValidationError;

use super::rules;

pub const TITLE_MAX_CHARS: usize = 255;
pub const CONTENT_MAX_CHARS: usize = 10_000;

/// Validation messages for one submitted note form.
///
/// `title` and `content` are field errors tied to a single input; `form`
/// carries the cross-field rule that has no single home.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct NoteFormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

impl NoteFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.form.is_none()
    }
}

pub fn validate_note_form(title: &str, content: &str) -> Result<(), NoteFormErrors> {
    let mut errors = NoteFormErrors::default();

    if let Err(err) = rules::note_title(title) {
        errors.title = Some(message_for(&err));
    }

    if let Err(err) = rules::note_content(content) {
        errors.content = Some(message_for(&err));
    }

    // The cross-field rule only applies once both fields pass their own checks.
    if errors.is_empty() && !content_mentions_title(title, content) {
        errors.form = Some("Content must mention at least one word from the title".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// True when the content contains at least one word of the title,
/// case-insensitively and ignoring punctuation at word edges. A title with
/// no alphanumeric words has nothing to mention and passes.
pub fn content_mentions_title(title: &str, content: &str) -> bool {
    let content = content.to_lowercase();
    let mut words = title
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|word| !word.is_empty())
        .peekable();

    if words.peek().is_none() {
        return true;
    }

    words.any(|word| content.contains(&word.to_lowercase()))
}

fn message_for(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_content_that_mentions_the_title() {
        assert!(validate_note_form("Meeting notes", "Notes from the planning meeting").is_ok());
    }

    #[test]
    fn rejects_blank_and_oversized_fields() {
        assert!(validate_note_form("", "").is_err());
        assert!(validate_note_form("   ", "content").is_err());

        let errors = validate_note_form("Valid", &"a".repeat(CONTENT_MAX_CHARS + 1)).unwrap_err();
        assert!(errors.content.is_some());
        assert!(errors.title.is_none());

        let errors = validate_note_form(&"a".repeat(TITLE_MAX_CHARS + 1), "aaa").unwrap_err();
        assert!(errors.title.is_some());
    }

    #[test]
    fn cross_field_rule_reports_a_form_error() {
        let errors = validate_note_form("Shopping list", "Nothing related here").unwrap_err();

        assert!(errors.title.is_none());
        assert!(errors.content.is_none());
        assert_eq!(
            errors.form.as_deref(),
            Some("Content must mention at least one word from the title")
        );
    }

    #[test]
    fn cross_field_rule_skipped_when_a_field_is_invalid() {
        let errors = validate_note_form("", "unrelated").unwrap_err();

        assert!(errors.title.is_some());
        assert!(errors.form.is_none());
    }

    #[test]
    fn title_matching_is_case_insensitive_and_ignores_punctuation() {
        assert!(content_mentions_title("Rust!", "I have been learning rust."));
        assert!(content_mentions_title("TODO: groceries", "Buy Groceries tomorrow"));
        assert!(!content_mentions_title("Shopping", "unrelated text"));
        // No alphanumeric words to mention.
        assert!(content_mentions_title("???", "anything"));
    }
}
