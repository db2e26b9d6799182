//! Product catalog
//!
//! Loads the static product list and narrows it to a single category.

mod catalog_loader;
mod product;

pub use catalog_loader::{CatalogLoader, categories, filter_by_category};
pub use product::{Catalog, Product, ProductId};
