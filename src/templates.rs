//! Server-rendered page templates, compiled into the binary and loaded into
//! a single [`Environment`] at startup.

use axum::response::Html;
use minijinja::{Environment, value::Value};

use crate::error::AppError;

pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))
        .expect("base.html is invalid");
    env.add_template("notes_list.html", include_str!("../templates/notes_list.html"))
        .expect("notes_list.html is invalid");
    env.add_template("note_detail.html", include_str!("../templates/note_detail.html"))
        .expect("note_detail.html is invalid");
    env.add_template("note_form.html", include_str!("../templates/note_form.html"))
        .expect("note_form.html is invalid");
    env
}

pub fn render(env: &Environment<'_>, name: &str, ctx: Value) -> Result<Html<String>, AppError> {
    let template = env.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn notes_list_renders_empty_state() {
        let env = environment();

        let html = render(&env, "notes_list.html", context! { notes => Vec::<u8>::new() })
            .unwrap()
            .0;

        assert!(html.contains("No notes yet"));
    }

    #[test]
    fn note_form_renders_field_and_form_errors() {
        let env = environment();

        let html = render(
            &env,
            "note_form.html",
            context! {
                heading => "Edit note",
                action => "/notes/abc/edit",
                cancel_url => "/notes/abc",
                title => "",
                content => "unrelated",
                errors => context! {
                    title => "Title is required",
                    form => "Content must mention at least one word from the title",
                },
            },
        )
        .unwrap()
        .0;

        assert!(html.contains("Title is required"));
        assert!(html.contains("Content must mention at least one word from the title"));
        assert!(html.contains("role=\"alert\""));
        assert!(html.contains(">unrelated</textarea>"));
    }

    #[test]
    fn note_form_escapes_submitted_values() {
        let env = environment();

        let html = render(
            &env,
            "note_form.html",
            context! {
                heading => "New note",
                action => "/notes/new",
                cancel_url => "/notes",
                title => "Tom & Jerry",
                content => "<script>alert(1)</script>",
                errors => context! {},
            },
        )
        .unwrap()
        .0;

        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let env = environment();

        assert!(render(&env, "missing.html", context! {}).is_err());
    }
}
