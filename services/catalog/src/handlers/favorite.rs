use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use holocron_identity::identity::IdentityHeader;

use crate::domain::types::{Favorite, FavoriteItem, FavoriteTarget};
use crate::error::CatalogServiceError;
use crate::extract::IdPath;
use crate::handlers::MessageResponse;
use crate::handlers::person::PersonResponse;
use crate::handlers::planet::PlanetResponse;
use crate::handlers::user::current_user;
use crate::state::AppState;
use crate::usecase::favorite::{AddFavoriteUseCase, ListFavoritesUseCase, RemoveFavoriteUseCase};

// ── Response types ───────────────────────────────────────────────────────────

/// `{id, user_id, item_type}` plus exactly one of `person` / `planet`.
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub item_type: &'static str,
    #[serde(flatten)]
    pub item: FavoriteItemResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteItemResponse {
    Person(PersonResponse),
    Planet(PlanetResponse),
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        let item_type = favorite.kind().as_str();
        let item = match favorite.item {
            FavoriteItem::Person(p) => FavoriteItemResponse::Person(p.into()),
            FavoriteItem::Planet(p) => FavoriteItemResponse::Planet(p.into()),
        };
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            item_type,
            item,
        }
    }
}

// ── GET /users/favorites ─────────────────────────────────────────────────────

pub async fn list_favorites(
    identity: IdentityHeader,
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, CatalogServiceError> {
    let user = current_user(&state, identity).await?;
    let usecase = ListFavoritesUseCase {
        favorites: state.favorite_repo(),
    };
    let favorites = usecase.execute(user.id).await?;
    Ok(Json(
        favorites.into_iter().map(FavoriteResponse::from).collect(),
    ))
}

// ── POST /favorite/{people,planet}/{id} ──────────────────────────────────────

async fn add_favorite(
    state: AppState,
    identity: IdentityHeader,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<FavoriteResponse>), CatalogServiceError> {
    let user = current_user(&state, identity).await?;
    let usecase = AddFavoriteUseCase {
        people: state.person_repo(),
        planets: state.planet_repo(),
        favorites: state.favorite_repo(),
    };
    let favorite = usecase.execute(user.id, target).await?;
    Ok((StatusCode::CREATED, Json(favorite.into())))
}

pub async fn add_person_favorite(
    identity: IdentityHeader,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<(StatusCode, Json<FavoriteResponse>), CatalogServiceError> {
    add_favorite(state, identity, FavoriteTarget::Person(id)).await
}

pub async fn add_planet_favorite(
    identity: IdentityHeader,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<(StatusCode, Json<FavoriteResponse>), CatalogServiceError> {
    add_favorite(state, identity, FavoriteTarget::Planet(id)).await
}

// ── DELETE /favorite/{people,planet}/{id} ────────────────────────────────────

async fn remove_favorite(
    state: AppState,
    identity: IdentityHeader,
    target: FavoriteTarget,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    let user = current_user(&state, identity).await?;
    let usecase = RemoveFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    usecase.execute(user.id, target).await?;
    Ok(Json(MessageResponse::new(format!(
        "favorite {} {} removed",
        target.kind().as_str(),
        target.id()
    ))))
}

pub async fn remove_person_favorite(
    identity: IdentityHeader,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    remove_favorite(state, identity, FavoriteTarget::Person(id)).await
}

pub async fn remove_planet_favorite(
    identity: IdentityHeader,
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>, CatalogServiceError> {
    remove_favorite(state, identity, FavoriteTarget::Planet(id)).await
}
