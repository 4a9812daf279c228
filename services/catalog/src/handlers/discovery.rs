use axum::Json;
use serde::Serialize;

use crate::router::ROUTES;

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub method: &'static str,
    pub path: &'static str,
}

// ── GET / ────────────────────────────────────────────────────────────────────

pub async fn list_routes() -> Json<Vec<RouteResponse>> {
    Json(
        ROUTES
            .iter()
            .map(|&(method, path)| RouteResponse { method, path })
            .collect(),
    )
}
