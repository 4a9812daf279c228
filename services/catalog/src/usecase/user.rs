use crate::domain::repository::UserRepository;
use crate::domain::types::{User, validate_email};
use crate::error::CatalogServiceError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, CatalogServiceError> {
        self.repo.list().await
    }
}

// ── ResolveCurrentUser ───────────────────────────────────────────────────────

/// Resolve the caller from the optional `X-User-Id` value.
///
/// An explicit id must name an existing user. Without one, the user with the
/// lowest id is used; an empty directory is a validation error.
pub struct ResolveCurrentUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ResolveCurrentUserUseCase<R> {
    pub async fn execute(&self, user_id: Option<i32>) -> Result<User, CatalogServiceError> {
        match user_id {
            Some(id) => self
                .repo
                .find_by_id(id)
                .await?
                .ok_or(CatalogServiceError::UserNotFound),
            None => self
                .repo
                .find_first()
                .await?
                .ok_or(CatalogServiceError::NoUsers),
        }
    }
}

// ── SeedUser ─────────────────────────────────────────────────────────────────

pub struct SeedUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SeedUserUseCase<R> {
    /// Create a user with `email` if the directory is empty.
    /// Returns the created user, or `None` when users already exist.
    pub async fn execute(&self, email: &str) -> Result<Option<User>, CatalogServiceError> {
        if !validate_email(email) {
            return Err(CatalogServiceError::InvalidEmail);
        }
        if self.repo.find_first().await?.is_some() {
            return Ok(None);
        }
        let user = self.repo.create(email).await?;
        tracing::info!(user_id = user.id, "seeded user");
        Ok(Some(user))
    }
}
