//! Mock upstream products API for integration tests.

use axum::{http::StatusCode, routing::get, Router};
use tokio::net::TcpListener;

/// Serves `body` with `status` on `/products` and returns the endpoint url.
pub async fn start_mock_upstream(status: StatusCode, body: &'static str) -> String {
    let app = Router::new().route("/products", get(move || async move { (status, body) }));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/products")
}

/// Url of a local port nothing listens on.
pub async fn refused_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/products")
}
