use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// JSON error body rendered by every Holocron service.
///
/// Serializes as `{"kind": ..., "message": ..., "status_code": ...}`. Services keep their
/// own error enums and convert into this at the response boundary.
#[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize)]
pub struct ErrorPayload {
    pub kind: &'static str,
    pub message: String,
    pub status_code: u16,
}

impl ErrorPayload {
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: status.as_u16(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorPayload {
    fn into_response(self) -> Response {
        (self.status(), axum::Json(self)).into_response()
    }
}
