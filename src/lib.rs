pub mod app;
pub mod assistant;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod error;
pub mod selection;
pub mod widgets;

#[cfg(test)]
mod test_utils;
