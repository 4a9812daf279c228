use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use holocron_core::serde::double_option;

use crate::domain::types::{NewPlanet, Planet, PlanetChanges};
use crate::error::CatalogServiceError;
use crate::extract::{IdPath, JsonBody};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::planet::{
    CreatePlanetUseCase, DeletePlanetUseCase, GetPlanetUseCase, ListPlanetsUseCase,
    UpdatePlanetUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub surface_water: Option<i32>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

impl From<Planet> for PlanetResponse {
    fn from(p: Planet) -> Self {
        Self {
            id: p.id,
            name: p.name,
            diameter: p.diameter,
            rotation_period: p.rotation_period,
            orbital_period: p.orbital_period,
            gravity: p.gravity,
            population: p.population,
            surface_water: p.surface_water,
            climate: p.climate,
            terrain: p.terrain,
        }
    }
}

// ── GET /planets ─────────────────────────────────────────────────────────────

pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, CatalogServiceError> {
    let usecase = ListPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = usecase.execute().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planets/{id} ────────────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PlanetResponse>, CatalogServiceError> {
    let usecase = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /planets ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub diameter: Option<i32>,
    pub rotation_period: Option<i32>,
    pub orbital_period: Option<i32>,
    pub gravity: Option<String>,
    pub population: Option<i64>,
    pub surface_water: Option<i32>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
}

pub async fn create_planet(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreatePlanetRequest>,
) -> Result<(StatusCode, Json<PlanetResponse>), CatalogServiceError> {
    let usecase = CreatePlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = usecase
        .execute(NewPlanet {
            name: body.name.unwrap_or_default(),
            diameter: body.diameter,
            rotation_period: body.rotation_period,
            orbital_period: body.orbital_period,
            gravity: body.gravity,
            population: body.population,
            surface_water: body.surface_water,
            climate: body.climate,
            terrain: body.terrain,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(planet.into())))
}

// ── PUT /planets/{id} ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdatePlanetRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub diameter: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub rotation_period: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub orbital_period: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub gravity: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub population: Option<Option<i64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub surface_water: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub climate: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub terrain: Option<Option<String>>,
}

pub async fn update_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody<UpdatePlanetRequest>,
) -> Result<Json<PlanetResponse>, CatalogServiceError> {
    let usecase = UpdatePlanetUseCase {
        repo: state.planet_repo(),
    };
    let changes = PlanetChanges {
        name: body.name.map(Option::unwrap_or_default),
        diameter: body.diameter,
        rotation_period: body.rotation_period,
        orbital_period: body.orbital_period,
        gravity: body.gravity,
        population: body.population,
        surface_water: body.surface_water,
        climate: body.climate,
        terrain: body.terrain,
    };
    let planet = usecase.execute(id, changes).await?;
    Ok(Json(planet.into()))
}

// ── DELETE /planets/{id} ─────────────────────────────────────────────────────

pub async fn delete_planet(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let usecase = DeletePlanetUseCase {
        repo: state.planet_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new(format!("planet {id} deleted"))))
}
