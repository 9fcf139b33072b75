// File: src/error.rs
// Purpose: Server-side error response builder

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use rusty_binding::BindingError;

#[derive(Debug)]
pub struct ErrorResponse {
    status: StatusCode,
    message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = maud::html! {
            div class="error" {
                h1 { "Error " (self.status.as_u16()) }
                p { (self.message) }
            }
        };
        (self.status, Html(body.into_string())).into_response()
    }
}

// Binding errors are programming or catalog defects, never bad input
impl From<BindingError> for ErrorResponse {
    fn from(err: BindingError) -> Self {
        tracing::error!(error = %err, "request aborted");
        ErrorResponse::internal(err.to_string())
    }
}
