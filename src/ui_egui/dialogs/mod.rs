pub mod duplicate_dialog;
pub mod fuzziness_warning;

pub use duplicate_dialog::{render_duplicate_dialog, DuplicateDialogState};
pub use fuzziness_warning::FuzzinessWarningState;

use egui::{Context, Rect};

/// Result of a dialog with confirm and cancel choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    Cancelled,
    /// Dialog is still open
    Pending,
}

/// True when a pointer press this frame landed outside `window_rect`.
pub(crate) fn clicked_outside(ctx: &Context, window_rect: Rect) -> bool {
    ctx.input(|i| {
        i.pointer.any_pressed()
            && i
                .pointer
                .interact_pos()
                .is_some_and(|pos| !window_rect.contains(pos))
    })
}
