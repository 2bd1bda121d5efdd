//! Applies what the grid reported this frame: drag gestures, context menu
//! requests, and the dialogs they open.

use super::toast::{Toast, ToastLevel};
use super::PlannerApp;
use crate::models::assignment::CellKey;
use crate::services::drag::DropOutcome;
use crate::ui_egui::dialogs::{render_duplicate_dialog, DialogResult, DuplicateDialogState};
use crate::ui_egui::drag::DragManager;
use crate::ui_egui::views::assignment_rendering::render_activity_chip;
use crate::ui_egui::views::GridInteractionResult;
use egui::{Context, CursorIcon, Id, Key, Order, Sense, Vec2};

const GHOST_SIZE: Vec2 = Vec2::new(130.0, 26.0);
const GHOST_OFFSET: Vec2 = Vec2::new(12.0, 12.0);

impl PlannerApp {
    pub(super) fn apply_grid_result(&mut self, result: GridInteractionResult) {
        if let Some(start) = result.drag_start {
            if self.grid.begin_drag_from_cell(&start.source, start.is_duplicating) {
                log::debug!(
                    "Started {} drag from {}",
                    if start.is_duplicating { "copy" } else { "move" },
                    start.source
                );
            }
        }

        if let Some(key) = result.delete_request {
            if let Some(removed) = self.grid.remove(&key) {
                self.toast_manager
                    .success(format!("Deleted \"{}\" from {}", removed.activity_name, describe(&key)));
            }
        }

        if let Some(key) = result.duplicate_request {
            self.duplicate_dialog = DuplicateDialogState::open(key, self.grid.store());
        }
    }

    /// Draw the ghost label and finish the drag once the pointer is released.
    pub(super) fn update_drag(&mut self, ctx: &Context) {
        let drag = self.grid.drag();
        if !drag.is_dragging() {
            return;
        }
        if drag.payload().is_none() {
            // Undecodable payload: release now so it is rejected
            self.finish_drag(ctx, false);
            return;
        }

        let cancelled = ctx.input(|i| i.key_pressed(Key::Escape));
        let released = ctx.input(|i| i.pointer.any_released() || !i.pointer.any_down());
        if cancelled || released {
            self.finish_drag(ctx, !cancelled);
            return;
        }

        ctx.set_cursor_icon(CursorIcon::Grabbing);
        if let (Some(pointer), Some(payload)) = (DragManager::pointer_pos(ctx), self.grid.drag().payload()) {
            egui::Area::new(Id::new("planner_drag_ghost"))
                .order(Order::Tooltip)
                .fixed_pos(pointer + GHOST_OFFSET)
                .interactable(false)
                .show(ctx, |ui| {
                    let (rect, _) = ui.allocate_exact_size(GHOST_SIZE, Sense::hover());
                    render_activity_chip(ui.painter(), rect, payload.activity_name(), payload.color());
                });
        }
        ctx.request_repaint();
    }

    fn finish_drag(&mut self, ctx: &Context, use_hover: bool) {
        let target = if use_hover {
            DragManager::hovered(ctx).map(|hover| hover.cell)
        } else {
            None
        };
        let name = self
            .grid
            .drag()
            .payload()
            .map(|payload| payload.activity_name().to_string())
            .unwrap_or_default();

        match self.grid.release_drag(target.as_ref(), &self.catalog) {
            DropOutcome::Assigned { dest, replaced } => {
                if let Some(previous) = replaced {
                    log::debug!("{} replaced {:?} at {}", name, previous.activity_name, dest);
                }
            }
            DropOutcome::Copied { dest, .. } => {
                self.toast_manager
                    .success(format!("Duplicated \"{}\" to {}", name, describe(&dest)));
            }
            DropOutcome::DeletedSource(source) => {
                self.toast_manager
                    .success(format!("Deleted \"{}\" from {}", name, describe(&source)));
            }
            DropOutcome::Stale => {
                self.toast_manager
                    .info(format!("\"{}\" changed during the drag, nothing was placed", name));
            }
            DropOutcome::Rejected(e) => {
                self.toast_manager.error(format!("Drop failed: {}", e));
            }
            DropOutcome::Moved { .. }
            | DropOutcome::SelfDrop
            | DropOutcome::Cancelled
            | DropOutcome::Idle => {}
        }
    }

    pub(super) fn render_duplicate_dialog(&mut self, ctx: &Context) {
        let Some(state) = self.duplicate_dialog.as_mut() else {
            return;
        };
        state.refresh_conflicts(self.grid.store());

        match render_duplicate_dialog(ctx, state) {
            DialogResult::Pending => {}
            DialogResult::Cancelled => self.duplicate_dialog = None,
            DialogResult::Confirmed => {
                if let Some(state) = self.duplicate_dialog.take() {
                    let written = self.grid.duplicate_to_days(state.source(), &state.selected_days());
                    self.toast_manager
                        .push(duplicate_feedback(state.activity_name(), written));
                }
            }
        }
    }
}

fn describe(key: &CellKey) -> String {
    format!("{} {}", key.day, key.slot)
}

/// Nothing is written when the source was cleared while the dialog was open.
fn duplicate_feedback(name: &str, written: usize) -> Toast {
    if written == 0 {
        Toast::new(format!("\"{}\" is gone, nothing duplicated", name), ToastLevel::Info)
    } else {
        Toast::new(format!("Duplicated \"{}\" to {} day(s)", name, written), ToastLevel::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Day;

    #[test]
    fn test_describe_cell() {
        assert_eq!(describe(&CellKey::new(Day::Mon, "9:00 AM")), "Mon 9:00 AM");
    }

    #[test]
    fn test_duplicate_feedback_counts_days() {
        let toast = duplicate_feedback("Work", 2);
        assert_eq!(toast.level, ToastLevel::Success);
        assert_eq!(toast.message, "Duplicated \"Work\" to 2 day(s)");
    }

    #[test]
    fn test_duplicate_feedback_when_nothing_written() {
        let toast = duplicate_feedback("Work", 0);
        assert_eq!(toast.level, ToastLevel::Info);
        assert!(!toast.message.contains("0 day"));
    }
}
