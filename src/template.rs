mod products;

pub use products::*;
