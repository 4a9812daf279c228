use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use holocron_core::serde::double_option;

use crate::domain::types::{NewPerson, Person, PersonChanges};
use crate::error::CatalogServiceError;
use crate::extract::{IdPath, JsonBody};
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::person::{
    CreatePersonUseCase, DeletePersonUseCase, GetPersonUseCase, ListPeopleUseCase,
    UpdatePersonUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: i32,
    pub name: String,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub birth_year: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
}

impl From<Person> for PersonResponse {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            name: p.name,
            height: p.height,
            mass: p.mass,
            birth_year: p.birth_year,
            hair_color: p.hair_color,
            skin_color: p.skin_color,
            eye_color: p.eye_color,
            gender: p.gender,
        }
    }
}

// ── GET /people ──────────────────────────────────────────────────────────────

pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonResponse>>, CatalogServiceError> {
    let usecase = ListPeopleUseCase {
        repo: state.person_repo(),
    };
    let people = usecase.execute().await?;
    Ok(Json(people.into_iter().map(PersonResponse::from).collect()))
}

// ── GET /people/{id} ─────────────────────────────────────────────────────────

pub async fn get_person(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<PersonResponse>, CatalogServiceError> {
    let usecase = GetPersonUseCase {
        repo: state.person_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /people ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub birth_year: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
}

pub async fn create_person(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), CatalogServiceError> {
    let usecase = CreatePersonUseCase {
        repo: state.person_repo(),
    };
    let person = usecase
        .execute(NewPerson {
            name: body.name.unwrap_or_default(),
            height: body.height,
            mass: body.mass,
            birth_year: body.birth_year,
            hair_color: body.hair_color,
            skin_color: body.skin_color,
            eye_color: body.eye_color,
            gender: body.gender,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(person.into())))
}

// ── PUT /people/{id} ─────────────────────────────────────────────────────────

/// Partial update: absent keys are left alone, `null` clears an optional field.
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub height: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub mass: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub birth_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub hair_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub skin_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub eye_color: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub gender: Option<Option<String>>,
}

pub async fn update_person(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody<UpdatePersonRequest>,
) -> Result<Json<PersonResponse>, CatalogServiceError> {
    let usecase = UpdatePersonUseCase {
        repo: state.person_repo(),
    };
    let changes = PersonChanges {
        // null name is rejected the same way as an empty one
        name: body.name.map(Option::unwrap_or_default),
        height: body.height,
        mass: body.mass,
        birth_year: body.birth_year,
        hair_color: body.hair_color,
        skin_color: body.skin_color,
        eye_color: body.eye_color,
        gender: body.gender,
    };
    Ok(Json(usecase.execute(id, changes).await?.into()))
}

// ── DELETE /people/{id} ──────────────────────────────────────────────────────

pub async fn delete_person(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let usecase = DeletePersonUseCase {
        repo: state.person_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse::new(format!("person {id} deleted"))))
}
