use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait as _;
use tracing::info;

use holocron_catalog::config::CatalogConfig;
use holocron_catalog::router::build_router;
use holocron_catalog::state::AppState;
use holocron_catalog::usecase::user::SeedUserUseCase;
use holocron_catalog_migration::Migrator;
use holocron_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,sea_orm=warn,sqlx=warn");

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    if config.auto_migrate {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        info!("migrations applied");
    }

    let state = AppState { db };

    if let Some(email) = config.seed_user_email.as_deref() {
        let usecase = SeedUserUseCase {
            repo: state.user_repo(),
        };
        let seeded = usecase
            .execute(email)
            .await
            .context("failed to seed user")?;
        if seeded.is_none() {
            info!("users already present, seed skipped");
        }
    }

    let router = build_router(state);
    let http_addr = config.http_addr();
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}
