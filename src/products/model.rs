use serde::Deserialize;
use url::{ParseError, Url};

/// A single catalog entry as sent by the upstream products API.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Product {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub thumbnail: String,
    pub description: String,
}

/// Envelope around the product list, `{"products": [...]}`.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

impl Product {
    /// Price with exactly two fractional digits, without the currency sign.
    pub fn formatted_price(&self) -> String {
        format!("{:.2}", self.price)
    }

    /// Thumbnail url, empty when it carries a scheme other than http(s).
    ///
    /// Relative and protocol-relative urls are kept as-is.
    pub fn thumbnail_src(&self) -> &str {
        match Url::parse(&self.thumbnail) {
            Ok(v) if matches!(v.scheme(), "http" | "https") => &self.thumbnail,
            Err(ParseError::RelativeUrlWithoutBase) => &self.thumbnail,
            _ => "",
        }
    }
}
