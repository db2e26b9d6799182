use serde::{Deserialize, Serialize};

pub type ProductId = u32;

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Image reference, only shown in the details popup
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Top-level shape of the catalog document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}
