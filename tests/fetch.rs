mod common;

use axum::http::StatusCode;
use common::{refused_upstream, start_mock_upstream};
use product_catalog::products::{fetch_products, CatalogClient, FetchError, Product};

const PEN: &str = r#"{"products":[{"title":"Pen","category":"Stationery","price":1.5,"thumbnail":"http://x/p.png","description":"Blue pen"}],"total":1,"skip":0,"limit":30}"#;

#[tokio::test]
async fn test_fetch_decodes_products() {
    let url = start_mock_upstream(StatusCode::OK, PEN).await;
    let products = fetch_products(&reqwest::Client::new(), &url).await.unwrap();

    assert_eq!(
        vec![Product {
            title: "Pen".to_owned(),
            category: "Stationery".to_owned(),
            price: 1.5,
            thumbnail: "http://x/p.png".to_owned(),
            description: "Blue pen".to_owned(),
        }],
        products
    );
}

#[tokio::test]
async fn test_fetch_empty_list() {
    let url = start_mock_upstream(StatusCode::OK, r#"{"products":[]}"#).await;
    let client = CatalogClient::new(reqwest::Client::new(), url);

    assert!(client.fetch().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_malformed_payload() {
    let url = start_mock_upstream(StatusCode::OK, "<html>not json</html>").await;
    let client = CatalogClient::new(reqwest::Client::new(), url);

    assert!(matches!(client.fetch().await, Err(FetchError::Malformed(_))));
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let client = CatalogClient::new(reqwest::Client::new(), refused_upstream().await);

    assert!(matches!(client.fetch().await, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn test_fetch_error_status_still_decodes() {
    let url = start_mock_upstream(StatusCode::SERVICE_UNAVAILABLE, r#"{"products":[]}"#).await;
    let client = CatalogClient::new(reqwest::Client::new(), url);

    assert!(client.fetch().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_error_page_is_malformed() {
    let url = start_mock_upstream(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").await;
    let client = CatalogClient::new(reqwest::Client::new(), url);

    assert!(matches!(client.fetch().await, Err(FetchError::Malformed(_))));
}
