mod routes;
mod views;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use worldmappin_client::{GeometryClient, HiveClient, SourcesConfig, WorldMapPinClient};

use crate::routes::{router, AppState};

const DEFAULT_ADDR: &str = "127.0.0.1:8787";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = env::var("WORLDMAPPIN_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let config = SourcesConfig::from_env()?;

    let pins = WorldMapPinClient::new(config.clone())?;
    let profiles = HiveClient::new(config.clone())?;
    let map = GeometryClient::new(config.clone())?;
    let lookup = GeometryClient::for_lookup(config)?;

    let state = AppState::load(Arc::new(pins), Arc::new(profiles), &map, &lookup).await;
    let app = router(state);

    let addr: SocketAddr = addr.parse()?;
    info!(%addr, "WorldMapPin API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
