#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Favorite, FavoriteTarget, NewPerson, NewPlanet, Person, PersonChanges, Planet, PlanetChanges,
    User,
};
use crate::error::CatalogServiceError;

/// Repository for people.
pub trait PersonRepository: Send + Sync {
    /// All people ordered by ascending id.
    async fn list(&self) -> Result<Vec<Person>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Person>, CatalogServiceError>;

    async fn create(&self, person: &NewPerson) -> Result<Person, CatalogServiceError>;

    /// Apply a partial update. Returns `None` if the person does not exist.
    async fn update(
        &self,
        id: i32,
        changes: &PersonChanges,
    ) -> Result<Option<Person>, CatalogServiceError>;

    /// Delete a person and every favorite pointing at it, atomically.
    /// Returns `true` if the person existed.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for planets.
pub trait PlanetRepository: Send + Sync {
    /// All planets ordered by ascending id.
    async fn list(&self) -> Result<Vec<Planet>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, CatalogServiceError>;

    async fn create(&self, planet: &NewPlanet) -> Result<Planet, CatalogServiceError>;

    /// Apply a partial update. Returns `None` if the planet does not exist.
    async fn update(
        &self,
        id: i32,
        changes: &PlanetChanges,
    ) -> Result<Option<Planet>, CatalogServiceError>;

    /// Delete a planet and every favorite pointing at it, atomically.
    /// Returns `true` if the planet existed.
    async fn delete(&self, id: i32) -> Result<bool, CatalogServiceError>;
}

/// Repository for the user directory.
pub trait UserRepository: Send + Sync {
    /// All users ordered by ascending id.
    async fn list(&self) -> Result<Vec<User>, CatalogServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, CatalogServiceError>;

    /// The user with the lowest id, if any.
    async fn find_first(&self) -> Result<Option<User>, CatalogServiceError>;

    /// Insert a user. Fails with `EmailAlreadyExists` when the email is taken.
    async fn create(&self, email: &str) -> Result<User, CatalogServiceError>;
}

/// The only writer of favorite rows.
pub trait FavoriteRepository: Send + Sync {
    /// The user's favorites ordered by ascending id, each with its resolved target.
    async fn list_for_user(&self, user_id: i32) -> Result<Vec<Favorite>, CatalogServiceError>;

    /// Insert a favorite and return it with its target resolved.
    ///
    /// Fails with `FavoriteAlreadyExists` when the user already favorited the target, and
    /// with `PersonNotFound` / `PlanetNotFound` when the target no longer exists.
    async fn add(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, CatalogServiceError>;

    /// Delete the user's favorite for the target. Returns `true` if a row was deleted.
    async fn remove(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<bool, CatalogServiceError>;

    /// Delete every favorite pointing at the target. Returns the number of rows deleted.
    async fn cascade_on_target_deleted(
        &self,
        target: FavoriteTarget,
    ) -> Result<u64, CatalogServiceError>;

    /// Delete every favorite owned by the user. Returns the number of rows deleted.
    async fn cascade_on_user_deleted(&self, user_id: i32) -> Result<u64, CatalogServiceError>;
}
