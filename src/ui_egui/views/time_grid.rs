//! Week grid rendering.
//!
//! Draws the day header and one row per generated time slot, delegating each
//! cell to `time_grid_cell`.

use egui::{Align2, FontId, Vec2};

use super::palette::TimeGridPalette;
use super::time_grid_cell::render_grid_cell;
use super::types::GridInteractionResult;
use crate::models::assignment::CellKey;
use crate::models::schedule::{Day, ScheduleParameters};
use crate::services::grid::ScheduleGrid;
use crate::services::time_slots::slots_for;
use crate::ui_egui::drag::DragManager;

pub const SLOT_HEIGHT: f32 = 28.0;
pub const TIME_LABEL_WIDTH: f32 = 70.0;
pub const COLUMN_SPACING: f32 = 1.0;
pub const HEADER_HEIGHT: f32 = 24.0;
const MIN_COLUMN_WIDTH: f32 = 60.0;

/// Width of one day column for the given available width.
pub fn column_width(available_width: f32) -> f32 {
    let days = Day::ALL.len() as f32;
    ((available_width - TIME_LABEL_WIDTH - COLUMN_SPACING * days) / days).max(MIN_COLUMN_WIDTH)
}

/// Render the header row and all slot rows for the current parameters.
pub fn render_week_grid(
    ui: &mut egui::Ui,
    grid: &ScheduleGrid,
    params: &ScheduleParameters,
) -> GridInteractionResult {
    let mut result = GridInteractionResult::default();
    let palette = TimeGridPalette::from_visuals(ui.visuals());
    let col_width = column_width(ui.available_width());

    let pointer = ui
        .ctx()
        .pointer_interact_pos()
        .or_else(|| ui.input(|i| i.pointer.hover_pos()));
    DragManager::begin_frame(ui.ctx(), pointer);

    render_header(ui, col_width, &palette);

    egui::ScrollArea::vertical()
        .id_source("week_grid_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            for slot in slots_for(params) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 0.0;

                    ui.allocate_ui_with_layout(
                        Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT),
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.add_space(5.0);
                            ui.label(
                                egui::RichText::new(&slot.label)
                                    .size(12.0)
                                    .color(palette.time_label),
                            );
                        },
                    );

                    ui.add_space(COLUMN_SPACING);

                    for (day_idx, day) in Day::ALL.iter().enumerate() {
                        let key = CellKey::new(*day, slot.label.clone());
                        let cell_result = render_grid_cell(
                            ui,
                            col_width,
                            &key,
                            grid,
                            params.block_minutes(),
                            &palette,
                        );
                        result.merge(cell_result);

                        if day_idx < Day::ALL.len() - 1 {
                            ui.add_space(COLUMN_SPACING);
                        }
                    }
                });
            }
        });

    result
}

fn render_header(ui: &mut egui::Ui, col_width: f32, palette: &TimeGridPalette) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(TIME_LABEL_WIDTH + COLUMN_SPACING);

        for (day_idx, day) in Day::ALL.iter().enumerate() {
            let (rect, _) =
                ui.allocate_exact_size(Vec2::new(col_width, HEADER_HEIGHT), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, palette.header_bg);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                day.label(),
                FontId::proportional(13.0),
                palette.header_text,
            );

            if day_idx < Day::ALL.len() - 1 {
                ui.add_space(COLUMN_SPACING);
            }
        }
    });
}
