use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;

use holocron_core::health::healthz;
use holocron_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    discovery::list_routes,
    favorite::{
        add_person_favorite, add_planet_favorite, list_favorites, remove_person_favorite,
        remove_planet_favorite,
    },
    health::readyz,
    person::{create_person, delete_person, get_person, list_people, update_person},
    planet::{create_planet, delete_planet, get_planet, list_planets, update_planet},
    user::{get_current_user, list_users},
};
use crate::state::AppState;

/// Every `(method, path)` the service answers, as reported by `GET /`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/healthz"),
    ("GET", "/readyz"),
    ("GET", "/people"),
    ("POST", "/people"),
    ("GET", "/people/{id}"),
    ("PUT", "/people/{id}"),
    ("DELETE", "/people/{id}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("GET", "/planets/{id}"),
    ("PUT", "/planets/{id}"),
    ("DELETE", "/planets/{id}"),
    ("GET", "/users"),
    ("GET", "/user"),
    ("GET", "/users/favorites"),
    ("POST", "/favorite/planet/{id}"),
    ("DELETE", "/favorite/planet/{id}"),
    ("POST", "/favorite/people/{id}"),
    ("DELETE", "/favorite/people/{id}"),
];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_routes))
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // People
        .route("/people", get(list_people))
        .route("/people", post(create_person))
        .route("/people/{id}", get(get_person))
        .route("/people/{id}", put(update_person))
        .route("/people/{id}", delete(delete_person))
        // Planets
        .route("/planets", get(list_planets))
        .route("/planets", post(create_planet))
        .route("/planets/{id}", get(get_planet))
        .route("/planets/{id}", put(update_planet))
        .route("/planets/{id}", delete(delete_planet))
        // Users
        .route("/users", get(list_users))
        .route("/user", get(get_current_user))
        // Favorites
        .route("/users/favorites", get(list_favorites))
        .route("/favorite/planet/{id}", post(add_planet_favorite))
        .route("/favorite/planet/{id}", delete(remove_planet_favorite))
        .route("/favorite/people/{id}", post(add_person_favorite))
        .route("/favorite/people/{id}", delete(remove_person_favorite))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer()),
        )
        .with_state(state)
}
