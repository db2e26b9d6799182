//! Selected product set
//!
//! Ordered by insertion and unique by product id. Only explicit user actions
//! mutate it; the grid highlight and the tag list both render from it.

use crate::catalog::{Product, ProductId};

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    products: Vec<Product>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Add the product if absent, remove it if present
    ///
    /// Returns true if the product is selected after the call.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if let Some(index) = self.position(product.id) {
            self.products.remove(index);
            false
        } else {
            self.products.push(product.clone());
            true
        }
    }

    /// Remove by id (tag removal). Returns the removed product, if any.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        self.position(id).map(|index| self.products.remove(index))
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

#[cfg(test)]
#[path = "selection_state_tests.rs"]
mod selection_state_tests;
