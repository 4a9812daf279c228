use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use holocron_core::error::ErrorPayload;

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("person not found")]
    PersonNotFound,
    #[error("planet not found")]
    PlanetNotFound,
    #[error("favorite not found")]
    FavoriteNotFound,
    #[error("favorite already exists")]
    FavoriteAlreadyExists,
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("no users exist")]
    NoUsers,
    #[error("field 'name' is required")]
    MissingName,
    #[error("field '{field}' must be at most {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

/// Caller-facing error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Internal,
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PersonNotFound => "PERSON_NOT_FOUND",
            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::FavoriteAlreadyExists => "FAVORITE_ALREADY_EXISTS",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::NoUsers => "NO_USERS",
            Self::MissingName => "MISSING_NAME",
            Self::FieldTooLong { .. } => "FIELD_TOO_LONG",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPath(_) => "INVALID_PATH",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UserNotFound
            | Self::PersonNotFound
            | Self::PlanetNotFound
            | Self::FavoriteNotFound => ErrorCategory::NotFound,
            Self::FavoriteAlreadyExists | Self::EmailAlreadyExists => ErrorCategory::Conflict,
            Self::NoUsers
            | Self::MissingName
            | Self::FieldTooLong { .. }
            | Self::InvalidEmail
            | Self::InvalidBody(_)
            | Self::InvalidPath(_) => ErrorCategory::Validation,
            Self::Internal(_) => ErrorCategory::Internal,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.category() {
            ErrorCategory::Validation => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Conflict => StatusCode::CONFLICT,
            ErrorCategory::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for CatalogServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for CatalogServiceError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        // 4xx are recorded by the trace layer.
        if let Self::Internal(ref e) = self {
            let detail = format!("{e:#}");
            tracing::error!(error = %detail, kind = "INTERNAL", "internal error");
        }
        ErrorPayload::new(self.status(), self.kind(), self.to_string()).into_response()
    }
}
