//! Routine prompt construction

use serde::Serialize;

use super::message::ChatMessage;
use crate::catalog::Product;

pub const SYSTEM_PERSONA: &str = "You are a helpful beauty and skincare expert who creates \
personalized routines and answers follow-up questions. Provide clear, practical advice and \
remember the conversation context. Always refer back to the user's selected products and \
previous questions when relevant.";

const MISSING_DESCRIPTION: &str = "No description available";

/// The subset of a product sent to the model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub category: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a Product> for ProductSummary<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: &product.name,
            brand: &product.brand,
            category: &product.category,
            description: product
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(MISSING_DESCRIPTION),
        }
    }
}

/// Pretty-printed JSON array of product summaries
pub fn products_payload(products: &[Product]) -> String {
    let summaries: Vec<ProductSummary> = products.iter().map(ProductSummary::from).collect();
    // Serializing borrowed strings into a String cannot fail
    serde_json::to_string_pretty(&summaries).unwrap_or_else(|_| "[]".to_string())
}

pub fn build_routine_prompt(products: &[Product]) -> String {
    format!(
        "Please create a personalized beauty/skincare routine using these products: {}.\n\
         \n\
         Please provide:\n\
         1. A step-by-step routine explaining when and how to use each product\n\
         2. Tips for best results\n\
         3. Any important notes about product combinations\n\
         \n\
         Make the response friendly and easy to follow.",
        products_payload(products)
    )
}

/// Fresh two-entry history for a routine request
pub fn routine_history(products: &[Product]) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PERSONA),
        ChatMessage::user(build_routine_prompt(products)),
    ]
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
