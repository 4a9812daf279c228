use axum::{Json, extract::State};
use serde::Serialize;

use holocron_identity::identity::IdentityHeader;

use crate::domain::types::User;
use crate::error::CatalogServiceError;
use crate::state::AppState;
use crate::usecase::user::{ListUsersUseCase, ResolveCurrentUserUseCase};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Resolve the caller named by the identity header (or the fallback user).
pub(crate) async fn current_user(
    state: &AppState,
    identity: IdentityHeader,
) -> Result<User, CatalogServiceError> {
    let usecase = ResolveCurrentUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(identity.user_id).await
}

// ── GET /users ───────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, CatalogServiceError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn get_current_user(
    identity: IdentityHeader,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, CatalogServiceError> {
    let user = current_user(&state, identity).await?;
    Ok(Json(user.into()))
}
