//! Left panel: schedule setup controls and the activity editor.

use super::PlannerApp;
use crate::models::schedule::{start_time_options, BlockSize, FUZZINESS_SLIDER_MAX};
use crate::ui_egui::activity_editor::render_activity_editor;
use egui::RichText;

const SIDEBAR_MIN_WIDTH: f32 = 220.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 250.0;
const SIDEBAR_MAX_WIDTH: f32 = 360.0;

impl PlannerApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("planner_sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_schedule_setup(ui);
                    ui.add_space(8.0);
                    ui.separator();
                    ui.add_space(8.0);
                    self.render_activities(ui);
                });
            });
    }

    fn render_schedule_setup(&mut self, ui: &mut egui::Ui) {
        ui.heading("Schedule Setup");
        ui.add_space(4.0);

        egui::Grid::new("schedule_setup_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Block size:");
                let mut block_size = self.params.block_size();
                egui::ComboBox::from_id_source("block_size_combo")
                    .selected_text(block_size.label())
                    .show_ui(ui, |ui| {
                        for option in BlockSize::ALL {
                            ui.selectable_value(&mut block_size, option, option.label());
                        }
                    });
                if block_size != self.params.block_size() {
                    log::info!("Block size changed to {}", block_size);
                    let update = self.params.set_block_size(block_size);
                    self.on_fuzziness_update(update);
                }
                ui.end_row();

                ui.label("Start time:");
                let mut start_minute = self.params.start_minute();
                egui::ComboBox::from_id_source("start_time_combo")
                    .selected_text(self.params.start_label())
                    .show_ui(ui, |ui| {
                        for (minute, label) in start_time_options() {
                            ui.selectable_value(&mut start_minute, minute, label);
                        }
                    });
                if start_minute != self.params.start_minute() {
                    self.params.set_start_minute(start_minute);
                    log::info!("Start time changed to {}", self.params.start_label());
                }
                ui.end_row();

                ui.label("Fuzziness:");
                let mut requested = self.params.fuzziness_minutes();
                let slider = ui.add(
                    egui::Slider::new(&mut requested, 0..=FUZZINESS_SLIDER_MAX).suffix(" min"),
                );
                if slider.changed() && requested != self.params.fuzziness_minutes() {
                    let update = self.params.set_fuzziness(requested);
                    self.on_fuzziness_update(update);
                }
                ui.end_row();
            });

        ui.label(
            RichText::new(format!(
                "Max fuzziness for {} blocks: {} min",
                self.params.block_size(),
                self.params.max_fuzziness()
            ))
            .small()
            .weak(),
        );
        if self.fuzziness_warning.is_open() {
            ui.label(
                RichText::new("⚠ Fuzziness limited to 25% of the block")
                    .small()
                    .color(egui::Color32::from_rgb(220, 150, 50)),
            );
        }
    }

    fn render_activities(&mut self, ui: &mut egui::Ui) {
        let response = render_activity_editor(ui, &mut self.activity_editor, &mut self.catalog);

        if let Some(activity) = response.drag_start {
            log::debug!("Started dragging {:?} from the catalog", activity.name);
            self.grid.begin_drag_from_catalog(&activity);
        }
        if response.catalog_changed {
            self.sync_grid();
        }
        if let Some(message) = response.message {
            self.toast_manager.success(message);
        }
    }
}
