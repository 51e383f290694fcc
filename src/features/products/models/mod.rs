mod product;

pub use product::{CatalogPage, Product};
