// File: src/main.rs
// Purpose: Item form server with validation and error binding

mod config;
mod error;
mod routes;
mod store;
mod views;

use anyhow::{Context, Result};
use config::Config;
use routes::AppState;
use rusty_binding::Item;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load_default().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {:#}. Using defaults.", e);
        Config::default()
    });

    tracing::info!(
        price_min = config.rules.price_min,
        price_max = config.rules.price_max,
        quantity_max = config.rules.quantity_max,
        total_price_min = config.rules.total_price_min,
        "item rules loaded"
    );

    let state = AppState::new(&config)?;

    if config.server.seed_data {
        state.repository().save(Item::new("itemA", 10000, 10)).await;
        state.repository().save(Item::new("itemB", 20000, 20)).await;
        tracing::info!("seeded sample items");
    }

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
