use askama::Template;

use crate::products::Product;

/// Product table, served on its own for htmx reloads.
#[derive(Template)]
#[template(path = "products_table.html")]
pub struct ProductsTable<'a> {
    pub products: &'a [Product],
}

/// Full document with the product table embedded.
#[derive(Template)]
#[template(path = "products_page.html")]
pub struct ProductsPage<'a> {
    pub table: ProductsTable<'a>,
}

impl<'a> ProductsPage<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self {
            table: ProductsTable { products },
        }
    }
}

pub fn render_fragment(products: &[Product]) -> askama::Result<String> {
    ProductsTable { products }.render()
}

pub fn render_full_page(products: &[Product]) -> askama::Result<String> {
    ProductsPage::new(products).render()
}
