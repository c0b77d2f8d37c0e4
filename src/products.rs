pub mod request;

mod model;

pub use model::*;
pub use request::{fetch_products, CatalogClient, FetchError};
