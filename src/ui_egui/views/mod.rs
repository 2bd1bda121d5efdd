pub mod assignment_rendering;
mod palette;
pub mod time_grid;
mod time_grid_cell;
mod time_grid_context_menu;
pub mod types;

pub use time_grid::render_week_grid;
pub use types::{DragStart, GridInteractionResult};
