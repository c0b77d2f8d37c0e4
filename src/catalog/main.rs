use std::{error::Error, sync::OnceLock};

use axum::{serve, Router};
use product_catalog::{
    app::build_app,
    products::CatalogClient,
    signals::shutdown_signal,
    utils::{configure_tracing, get_env_var_or},
};
use tokio::net::TcpListener;
use tracing::info;

static ADDRESS: &str = "0.0.0.0:8080";

// Host variables
static LOG_LEVEL: OnceLock<String> = OnceLock::new();

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize env variables
    init_env();

    // Configure logging
    configure_tracing(LOG_LEVEL.get().map_or("info", String::as_str));

    // Build application and listen to incoming requests.
    let client: CatalogClient = CatalogClient::default();
    let app: Router = build_app(client);
    let listener: TcpListener = TcpListener::bind(ADDRESS).await?;

    info!("Server running at http://localhost:8080");

    // Run the app.
    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// Initialize env variables
fn init_env() {
    LOG_LEVEL.get_or_init(|| get_env_var_or("LOG_LEVEL", "info"));
}
