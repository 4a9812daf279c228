use holocron_core::config::{env_flag, env_opt, env_or};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";

/// Catalog service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Database connection URL (PostgreSQL or SQLite). Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `CATALOG_PORT`, then `PORT`.
    pub catalog_port: u16,
    /// Apply pending migrations before serving (default true). Env var: `CATALOG_AUTO_MIGRATE`.
    pub auto_migrate: bool,
    /// Email of the user to create when the directory is empty. Env var: `SEED_USER_EMAIL`.
    pub seed_user_email: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: env_opt("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned()),
            catalog_port: env_or("CATALOG_PORT", env_or("PORT", 3000)),
            auto_migrate: env_flag("CATALOG_AUTO_MIGRATE", true),
            seed_user_email: env_opt("SEED_USER_EMAIL"),
        }
    }

    pub fn http_addr(&self) -> String {
        format!("0.0.0.0:{}", self.catalog_port)
    }
}
