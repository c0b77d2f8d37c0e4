pub mod app;
pub mod products;
pub mod signals;
pub mod template;
pub mod utils;
