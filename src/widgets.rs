pub mod popup;
pub mod text;
