use crate::domain::repository::PlanetRepository;
use crate::domain::types::{NewPlanet, Planet, PlanetChanges};
use crate::error::CatalogServiceError;

// ── ListPlanets ──────────────────────────────────────────────────────────────

pub struct ListPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> ListPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, CatalogServiceError> {
        self.repo.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Planet, CatalogServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::PlanetNotFound)
    }
}

// ── CreatePlanet ─────────────────────────────────────────────────────────────

pub struct CreatePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> CreatePlanetUseCase<R> {
    pub async fn execute(&self, input: NewPlanet) -> Result<Planet, CatalogServiceError> {
        input.validate()?;
        let planet = self.repo.create(&input).await?;
        tracing::info!(planet_id = planet.id, "planet created");
        Ok(planet)
    }
}

// ── UpdatePlanet ─────────────────────────────────────────────────────────────

pub struct UpdatePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> UpdatePlanetUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        changes: PlanetChanges,
    ) -> Result<Planet, CatalogServiceError> {
        changes.validate()?;
        self.repo
            .update(id, &changes)
            .await?
            .ok_or(CatalogServiceError::PlanetNotFound)
    }
}

// ── DeletePlanet ─────────────────────────────────────────────────────────────

pub struct DeletePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> DeletePlanetUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), CatalogServiceError> {
        if !self.repo.delete(id).await? {
            return Err(CatalogServiceError::PlanetNotFound);
        }
        tracing::info!(planet_id = id, "planet deleted");
        Ok(())
    }
}
