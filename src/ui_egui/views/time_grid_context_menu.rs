//! Context menu for occupied week grid cells.

use super::types::GridInteractionResult;
use crate::models::assignment::{Assignment, CellKey};

/// Render the right-click popup for a grid cell.
///
/// Empty cells have no menu. Choices are written into `result`.
pub fn render_cell_context_menu(
    ui: &mut egui::Ui,
    response: &egui::Response,
    key: &CellKey,
    assignment: Option<&Assignment>,
    result: &mut GridInteractionResult,
) {
    let Some(assignment) = assignment else {
        return;
    };
    let popup_id = response.id.with(format!("cell_context_menu_{}", key));

    if response.secondary_clicked() {
        ui.memory_mut(|mem| mem.open_popup(popup_id));
    }

    egui::popup::popup_above_or_below_widget(
        ui,
        popup_id,
        response,
        egui::AboveOrBelow::Below,
        egui::PopupCloseBehavior::CloseOnClickOutside,
        |ui| {
            ui.set_min_width(180.0);
            ui.label(
                egui::RichText::new(format!("{} · {} {}", assignment.activity_name, key.day, key.slot))
                    .strong(),
            );
            ui.separator();

            if ui.button("📋 Duplicate to Other Days").clicked() {
                result.duplicate_request = Some(key.clone());
                ui.memory_mut(|mem| mem.close_popup());
            }
            if ui.button("🗑 Delete Activity").clicked() {
                result.delete_request = Some(key.clone());
                ui.memory_mut(|mem| mem.close_popup());
            }
        },
    );
}
