use crate::domain::repository::{FavoriteRepository, PersonRepository, PlanetRepository};
use crate::domain::types::{Favorite, FavoriteTarget};
use crate::error::CatalogServiceError;

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> ListFavoritesUseCase<F> {
    pub async fn execute(&self, user_id: i32) -> Result<Vec<Favorite>, CatalogServiceError> {
        self.favorites.list_for_user(user_id).await
    }
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<P: PersonRepository, L: PlanetRepository, F: FavoriteRepository> {
    pub people: P,
    pub planets: L,
    pub favorites: F,
}

impl<P: PersonRepository, L: PlanetRepository, F: FavoriteRepository> AddFavoriteUseCase<P, L, F> {
    pub async fn execute(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Favorite, CatalogServiceError> {
        let exists = match target {
            FavoriteTarget::Person(id) => self.people.find_by_id(id).await?.is_some(),
            FavoriteTarget::Planet(id) => self.planets.find_by_id(id).await?.is_some(),
        };
        if !exists {
            return Err(match target {
                FavoriteTarget::Person(_) => CatalogServiceError::PersonNotFound,
                FavoriteTarget::Planet(_) => CatalogServiceError::PlanetNotFound,
            });
        }

        let favorite = self.favorites.add(user_id, target).await?;
        tracing::info!(
            favorite_id = favorite.id,
            user_id,
            item_type = target.kind().as_str(),
            target_id = target.id(),
            "favorite added"
        );
        Ok(favorite)
    }
}

// ── RemoveFavorite ───────────────────────────────────────────────────────────

pub struct RemoveFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> RemoveFavoriteUseCase<F> {
    pub async fn execute(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<(), CatalogServiceError> {
        if !self.favorites.remove(user_id, target).await? {
            return Err(CatalogServiceError::FavoriteNotFound);
        }
        tracing::info!(
            user_id,
            item_type = target.kind().as_str(),
            target_id = target.id(),
            "favorite removed"
        );
        Ok(())
    }
}
