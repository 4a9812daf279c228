//! Caller-supplied identity header extractor.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::request::Parts;

use holocron_core::error::ErrorPayload;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity supplied by the caller via the `x-user-id` header.
///
/// The header is optional: `user_id` is `None` when it is absent or blank, and the
/// service decides how to resolve an anonymous caller. A present header that is not
/// an integer is rejected with 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityHeader {
    pub user_id: Option<i32>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityRejection {
    #[error("X-User-Id must be an integer")]
    InvalidUserId,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        ErrorPayload::new(StatusCode::BAD_REQUEST, "INVALID_USER_ID", self.to_string())
            .into_response()
    }
}

fn parse_user_id(parts: &Parts) -> Result<Option<i32>, IdentityRejection> {
    let Some(value) = parts.headers.get(USER_ID_HEADER) else {
        return Ok(None);
    };
    let raw = value
        .to_str()
        .map_err(|_| IdentityRejection::InvalidUserId)?
        .trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| IdentityRejection::InvalidUserId)
}

impl<S> FromRequestParts<S> for IdentityHeader
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract synchronously and return a 'static async move block so the future
    // does not borrow `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parse_user_id(parts);
        async move { Ok(Self { user_id: user_id? }) }
    }
}
