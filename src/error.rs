use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use minijinja::{Environment, context};
use thiserror::Error;

use crate::validation::note::NoteFormErrors;

const ERROR_TEMPLATE: &str = include_str!("../templates/error.html");

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Invalid form submission")]
    InvalidForm { errors: NoteFormErrors },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side".to_string(),
                )
            }
            AppError::Pool(ref e) => {
                tracing::error!("Connection pool error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side".to_string(),
                )
            }
            AppError::Template(ref e) => {
                tracing::error!("Template error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side".to_string(),
                )
            }
            AppError::InvalidForm { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "The submitted form data was invalid".to_string(),
            ),
            AppError::NotFound { ref resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side".to_string(),
                )
            }
            AppError::Internal(ref message) => {
                tracing::error!("Internal error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong on our side".to_string(),
                )
            }
        };

        (status, Html(error_page(status, &message))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// 便捷的错误创建函数
impl AppError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn invalid_form(errors: NoteFormErrors) -> Self {
        Self::InvalidForm { errors }
    }
}

/// Renders the standalone error page. The template is self-contained so it
/// can be rendered without access to application state; if it fails to
/// render the response degrades to plain text.
fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");

    let mut env = Environment::new();
    if env.add_template("error.html", ERROR_TEMPLATE).is_err() {
        return format!("{} {} - {}", status.as_u16(), reason, message);
    }

    let rendered = env.get_template("error.html").and_then(|template| {
        template.render(context! {
            status => status.as_u16(),
            reason => reason,
            message => message,
        })
    });

    rendered.unwrap_or_else(|_| format!("{} {} - {}", status.as_u16(), reason, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_page_includes_status_and_message() {
        let page = error_page(StatusCode::NOT_FOUND, "Note not found");

        assert!(page.contains("404"));
        assert!(page.contains("Not Found"));
        assert!(page.contains("Note not found"));
    }

    #[test]
    fn not_found_maps_to_404_response() {
        let response = AppError::not_found("Note").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
