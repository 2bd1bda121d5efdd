//! Shared types for the week grid view.

use crate::models::assignment::CellKey;

/// A drag gesture that started on an occupied cell this frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragStart {
    pub source: CellKey,
    /// Alt/command was held when the drag started
    pub is_duplicating: bool,
}

/// Result of grid interactions (context menus, drags).
///
/// Rendering only reads the grid; the app applies these requests afterwards.
#[derive(Default, Debug)]
pub struct GridInteractionResult {
    pub drag_start: Option<DragStart>,
    /// "Duplicate to Other Days" was chosen for this cell
    pub duplicate_request: Option<CellKey>,
    /// "Delete Activity" was chosen for this cell
    pub delete_request: Option<CellKey>,
}

impl GridInteractionResult {
    /// Merge another result into this one; later requests win.
    pub fn merge(&mut self, other: GridInteractionResult) {
        if other.drag_start.is_some() {
            self.drag_start = other.drag_start;
        }
        if other.duplicate_request.is_some() {
            self.duplicate_request = other.duplicate_request;
        }
        if other.delete_request.is_some() {
            self.delete_request = other.delete_request;
        }
    }

    pub fn has_actions(&self) -> bool {
        self.drag_start.is_some() || self.duplicate_request.is_some() || self.delete_request.is_some()
    }
}
