mod activity_editor;
mod app;
pub mod dialogs;
pub mod drag;
pub mod views;

pub use app::{PlannerApp, MIN_ROOT_HEIGHT, MIN_ROOT_WIDTH};
