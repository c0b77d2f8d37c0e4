use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::{
    products::{CatalogClient, Product},
    template::{render_fragment, render_full_page},
};

type HtmlResult = Result<Html<String>, (StatusCode, String)>;

/// Builds the application.
pub fn build_app(client: CatalogClient) -> Router {
    Router::new()
        .route("/", get(products_page))
        .route("/products-table", get(products_table))
        .fallback(not_found)
        .with_state(Arc::new(client))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn products_page(State(client): State<Arc<CatalogClient>>) -> HtmlResult {
    let products: Vec<Product> = fetch(&client).await?;

    match render_full_page(&products) {
        Ok(v) => Ok(Html(v)),
        Err(e) => Err(render_error(e)),
    }
}

async fn products_table(State(client): State<Arc<CatalogClient>>) -> HtmlResult {
    let products: Vec<Product> = fetch(&client).await?;

    match render_fragment(&products) {
        Ok(v) => Ok(Html(v)),
        Err(e) => Err(render_error(e)),
    }
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

async fn fetch(client: &CatalogClient) -> Result<Vec<Product>, (StatusCode, String)> {
    match client.fetch().await {
        Ok(v) => Ok(v),
        Err(e) => {
            error!("Could not fetch products from {}: {:?}", client.url(), e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error fetching products: {e}"),
            ))
        }
    }
}

fn render_error(e: askama::Error) -> (StatusCode, String) {
    error!("Could not render products: {:?}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error rendering products: {e}"),
    )
}
