pub mod note;

/// 常用验证规则
pub mod rules {
    use validator::ValidationError;

    use super::note::{CONTENT_MAX_CHARS, TITLE_MAX_CHARS};

    pub fn note_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            let mut err = ValidationError::new("required");
            err.message = Some("Title is required".into());
            return Err(err);
        }

        if title.chars().count() > TITLE_MAX_CHARS {
            let mut err = ValidationError::new("too_long");
            err.message = Some(
                format!("Title is too long (max {} characters)", TITLE_MAX_CHARS).into(),
            );
            return Err(err);
        }

        Ok(())
    }

    pub fn note_content(content: &str) -> Result<(), ValidationError> {
        if content.trim().is_empty() {
            let mut err = ValidationError::new("required");
            err.message = Some("Content is required".into());
            return Err(err);
        }

        if content.chars().count() > CONTENT_MAX_CHARS {
            let mut err = ValidationError::new("too_long");
            err.message = Some(
                format!("Content is too long (max {} characters)", CONTENT_MAX_CHARS).into(),
            );
            return Err(err);
        }

        Ok(())
    }
}
