// Validation-only tests for the note form

#[test]
fn validate_note_form_collects_field_errors() {
    use noteboard::validation::note::validate_note_form;

    assert!(validate_note_form("Shopping", "Shopping for the weekend").is_ok());

    let errors = validate_note_form("", "Some content").unwrap_err();
    assert_eq!(errors.title.as_deref(), Some("Title is required"));
    assert!(errors.content.is_none());

    let errors = validate_note_form("", "").unwrap_err();
    assert!(errors.title.is_some());
    assert!(errors.content.is_some());
}

#[test]
fn validate_note_form_cross_field_rule_is_a_form_error() {
    use noteboard::validation::note::validate_note_form;

    let errors = validate_note_form("Shopping list", "Nothing related here").unwrap_err();
    assert!(errors.title.is_none());
    assert!(errors.content.is_none());
    assert!(errors.form.is_some());
}
