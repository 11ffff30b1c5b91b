//! Wish Exchange server binary.
//!
//! Storage is PostgreSQL when `WISH_EXCHANGE__DATABASE__URL` is set and
//! in-memory otherwise. Without `WISH_EXCHANGE__IMAGE__GEMINI_API_KEY` every
//! wish falls back to a placeholder image.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use wish_exchange::adapters::http::{api_router, with_http_layers, ApiDependencies, WishAppState};
use wish_exchange::adapters::{
    seed_demo_data, GeminiConfig, GeminiImageGenerator, InMemoryEventBus,
    InMemoryIdentityProvider, InMemoryWishRepository, PostgresWishRepository,
};
use wish_exchange::config::AppConfig;
use wish_exchange::ports::WishRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Configuration
    let config = AppConfig::load()?;
    config.validate()?;

    // 2. Logging (RUST_LOG wins over the configured level)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.features.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?config.server.environment,
        "Starting wish exchange"
    );

    // 3. Storage
    let wishes: Arc<dyn WishRepository> = match config.database.url.as_deref() {
        Some(url) if config.database.is_configured() => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .acquire_timeout(config.database.acquire_timeout())
                .connect(url)
                .await?;
            if config.database.run_migrations {
                sqlx::migrate!().run(&pool).await?;
                tracing::info!("Database migrations applied");
            }
            tracing::info!("Using PostgreSQL wish store");
            Arc::new(PostgresWishRepository::new(pool))
        }
        _ => {
            tracing::warn!("No database configured, wishes are kept in memory");
            Arc::new(InMemoryWishRepository::new())
        }
    };
    let identity = Arc::new(InMemoryIdentityProvider::new());

    if config.features.seed_demo_data {
        let inserted = seed_demo_data(&identity, wishes.as_ref()).await?;
        tracing::info!(wishes = inserted, "Demo data seeded");
    }

    // 4. Image generation
    if !config.image.has_api_key() {
        tracing::warn!("No Gemini API key configured, wishes will use placeholder images");
    }
    let image_generator = Arc::new(GeminiImageGenerator::new(
        GeminiConfig::new(config.image.gemini_api_key.clone())
            .with_model(config.image.model.clone())
            .with_base_url(config.image.base_url.clone())
            .with_timeout(config.image.timeout()),
    )?);

    // 5. HTTP
    let wish_state = WishAppState::new(
        wishes,
        image_generator,
        identity.clone(),
        Arc::new(InMemoryEventBus::new()),
    )
    .with_image_timeout(config.image.timeout());

    let app = with_http_layers(
        api_router(ApiDependencies {
            identity: identity.clone(),
            session_validator: identity,
            wishes: wish_state,
        }),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
