use sea_orm::DatabaseConnection;

use crate::infra::db::{DbPersonRepository, DbPlanetRepository, DbUserRepository};
use crate::infra::favorites::DbFavoriteRepository;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn person_repo(&self) -> DbPersonRepository {
        DbPersonRepository {
            db: self.db.clone(),
        }
    }

    pub fn planet_repo(&self) -> DbPlanetRepository {
        DbPlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }
}
