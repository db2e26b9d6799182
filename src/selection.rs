mod selection_render;
mod selection_state;

pub use selection_render::render_selection;
pub use selection_state::SelectionSet;
