use std::sync::Arc;

use anyhow::Context;
use storage::{Database, MemoryStore, SharedStore};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::footprints::handlers::get_calculator,
        features::footprints::handlers::submit_footprint,
        features::footprints::handlers::list_lowest_footprints,
        features::game::handlers::get_game,
        features::game::handlers::submit_score,
        features::game::handlers::get_leaderboard,
        features::contact::handlers::submit_feedback,
    ),
    components(
        schemas(
            storage::dto::footprint::FootprintForm,
            storage::dto::footprint::BreakdownResponse,
            storage::dto::footprint::CalculatorView,
            storage::dto::game::ScoreForm,
            storage::dto::game::GameView,
            storage::dto::game::SubmissionResponse,
            storage::dto::contact::ContactForm,
            storage::dto::common::MessageResponse,
            storage::models::Footprint,
            storage::models::GameScore,
        )
    ),
    tags(
        (name = "footprints", description = "Carbon footprint calculator"),
        (name = "game", description = "Game scores and leaderboard"),
        (name = "contact", description = "Visitor feedback"),
    )
)]
struct ApiDoc;

async fn open_store(config: &Config) -> anyhow::Result<SharedStore> {
    if config.uses_memory_store() {
        tracing::warn!("Using the in-memory store, data is lost on shutdown");
        return Ok(Arc::new(MemoryStore::new()));
    }

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    Ok(Arc::new(db))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting footprint API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = open_store(&config).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let app = features::router(store)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
