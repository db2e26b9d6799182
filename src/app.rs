mod app_commands;
mod app_events;
mod app_render;
mod app_state;

pub use app_commands::AppCommand;
pub use app_state::{App, Focus};
