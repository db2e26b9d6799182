use std::path::{Path, PathBuf};

use super::product::{Catalog, Product};
use crate::error::RoutinistError;

/// Reads the catalog document from disk
///
/// The file is re-read on every category change, so edits to the catalog
/// show up without restarting.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog file
    ///
    /// # Returns
    /// * `Ok(Vec<Product>)` - All products in document order
    /// * `Err(RoutinistError)` - Missing file, IO failure or malformed JSON
    pub fn load(&self) -> Result<Vec<Product>, RoutinistError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RoutinistError::CatalogNotFound(self.path.clone())
            } else {
                RoutinistError::from(e)
            }
        })?;

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Vec<Product>, RoutinistError> {
        let catalog: Catalog = serde_json::from_str(contents)
            .map_err(|e| RoutinistError::InvalidCatalog(e.to_string()))?;
        Ok(catalog.products)
    }
}

/// Distinct categories in first-appearance order
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Products whose category matches exactly
pub fn filter_by_category(products: Vec<Product>, category: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| product.category == category)
        .collect()
}

#[cfg(test)]
#[path = "catalog_loader_tests.rs"]
mod catalog_loader_tests;
