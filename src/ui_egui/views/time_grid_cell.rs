//! Single cell rendering for the week grid.
//!
//! Handles background painting, the assignment block, hover and drop
//! highlights, tooltips, drag start and the context menu for one
//! (day, slot) cell.

use egui::{CursorIcon, Pos2, Sense, Stroke, Vec2};

use super::assignment_rendering::render_assignment_block;
use super::palette::TimeGridPalette;
use super::time_grid::SLOT_HEIGHT;
use super::time_grid_context_menu::render_cell_context_menu;
use super::types::{DragStart, GridInteractionResult};
use crate::models::assignment::{Assignment, CellKey};
use crate::services::grid::ScheduleGrid;
use crate::ui_egui::drag::DragManager;

/// Render one grid cell and report what the user asked of it.
pub fn render_grid_cell(
    ui: &mut egui::Ui,
    col_width: f32,
    key: &CellKey,
    grid: &ScheduleGrid,
    block_minutes: u32,
    palette: &TimeGridPalette,
) -> GridInteractionResult {
    let mut result = GridInteractionResult::default();
    let assignment = grid.store().get(key);
    let is_dragging = grid.drag().is_dragging();

    // Empty cells have nothing to drag
    let sense = if assignment.is_some() {
        Sense::click_and_drag()
    } else {
        Sense::click()
    };
    let (rect, response) = ui.allocate_exact_size(Vec2::new(col_width, SLOT_HEIGHT), sense);

    let bg_color = if key.day.is_weekend() {
        palette.weekend_bg
    } else {
        palette.regular_bg
    };
    ui.painter().rect_filled(rect, 0.0, bg_color);
    ui.painter().line_segment(
        [
            Pos2::new(rect.left(), rect.top()),
            Pos2::new(rect.right(), rect.top()),
        ],
        Stroke::new(1.0, palette.slot_line),
    );
    ui.painter().line_segment(
        [
            Pos2::new(rect.right(), rect.top()),
            Pos2::new(rect.right(), rect.bottom()),
        ],
        Stroke::new(1.0, palette.divider),
    );

    if let Some(assignment) = assignment {
        render_assignment_block(ui.painter(), rect, assignment, block_minutes);
    }

    if response.hovered() && !is_dragging {
        ui.painter().rect_filled(rect, 0.0, palette.hover_overlay);
        if let Some(assignment) = assignment {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
            let tooltip_text = format_assignment_tooltip(key, assignment);
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(tooltip_text);
            });
        }
    }

    // Drop target tracking
    let pointer = ui
        .ctx()
        .pointer_interact_pos()
        .or_else(|| ui.input(|i| i.pointer.hover_pos()));
    if let Some(pointer) = pointer {
        if rect.contains(pointer) && ui.clip_rect().contains(pointer) {
            DragManager::update_hover(ui.ctx(), key.clone(), rect);
            if is_dragging {
                ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
                ui.ctx().request_repaint();
            }
        }
    }

    if is_dragging && DragManager::is_hovering(ui.ctx(), key) {
        let highlight = rect.shrink2(Vec2::new(3.0, 2.0));
        ui.painter().rect_filled(highlight, 2.0, palette.drop_fill);
        ui.painter()
            .rect_stroke(highlight, 2.0, Stroke::new(1.5, palette.drop_stroke));
    }

    render_cell_context_menu(ui, &response, key, assignment, &mut result);

    if response.drag_started() && assignment.is_some() {
        let is_duplicating = ui.input(|i| i.modifiers.alt || i.modifiers.command);
        result.drag_start = Some(DragStart {
            source: key.clone(),
            is_duplicating,
        });
        ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
    }

    result
}

fn format_assignment_tooltip(key: &CellKey, assignment: &Assignment) -> String {
    let mut text = format!("{}\n{} {}", assignment.activity_name, key.day, key.slot);
    if assignment.fuzziness_minutes > 0 {
        text.push_str(&format!("\n± {} min", assignment.fuzziness_minutes));
    }
    text.push_str("\nDrag to move, Alt+drag to copy");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Day;

    #[test]
    fn test_tooltip_without_fuzziness() {
        let key = CellKey::new(Day::Mon, "9:00 AM");
        let text = format_assignment_tooltip(&key, &Assignment::new("Work", "#3D5A5E", 0));
        assert!(text.starts_with("Work\nMon 9:00 AM"));
        assert!(!text.contains('±'));
    }

    #[test]
    fn test_tooltip_shows_fuzziness() {
        let key = CellKey::new(Day::Sat, "7:00 AM");
        let text = format_assignment_tooltip(&key, &Assignment::new("Sleep", "#89778F", 10));
        assert!(text.contains("± 10 min"));
    }
}
