use reqwest::Response;
use thiserror::Error;
use tracing::debug;

use super::{Product, ProductsResponse};

/// Upstream products endpoint.
pub static PRODUCTS_URL: &str = "https://dummyjson.com/products";

/// Failure while retrieving the product catalog.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed or its body could not be read.
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body was not a valid products payload.
    #[error("payload malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Http client bound to a products endpoint.
#[derive(Clone, Debug)]
pub struct CatalogClient {
    req_client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(req_client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            req_client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        fetch_products(&self.req_client, &self.url).await
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new(), PRODUCTS_URL)
    }
}

/// Fetches and decodes the product list from `url`.
///
/// The body is decoded whatever the response status. It is read in full
/// before decoding, so the connection goes back to the client either way.
pub async fn fetch_products(
    req_client: &reqwest::Client,
    url: &str,
) -> Result<Vec<Product>, FetchError> {
    let response: Response = req_client.get(url).send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        debug!("Upstream {} answered {}", url, status);
    }

    let payload: ProductsResponse = serde_json::from_slice(&body)?;

    debug!("Fetched {} products from {}", payload.products.len(), url);

    Ok(payload.products)
}
