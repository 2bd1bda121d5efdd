//! "Duplicate to Other Days" dialog.
//!
//! Copies one assignment into the same slot on the chosen days. Days whose
//! slot is already occupied are flagged but never block the copy.

use std::collections::BTreeSet;

use egui::{Color32, RichText};

use super::{clicked_outside, DialogResult};
use crate::models::assignment::{Assignment, CellKey};
use crate::models::schedule::Day;
use crate::services::assignment::AssignmentStore;
use crate::ui_egui::views::assignment_rendering::{parse_color, FALLBACK_COLOR};

#[derive(Debug, Clone)]
pub struct DuplicateDialogState {
    source: CellKey,
    assignment: Assignment,
    selected: BTreeSet<Day>,
    conflicts: Vec<Day>,
    just_opened: bool,
}

impl DuplicateDialogState {
    /// Open for the assignment at `source`. Empty cells have nothing to copy.
    pub fn open(source: CellKey, store: &AssignmentStore) -> Option<Self> {
        let assignment = store.get(&source)?.clone();
        let selected = Day::ALL.iter().copied().filter(|day| *day != source.day).collect();
        let mut state = Self {
            source,
            assignment,
            selected,
            conflicts: Vec::new(),
            just_opened: true,
        };
        state.refresh_conflicts(store);
        Some(state)
    }

    pub fn source(&self) -> &CellKey {
        &self.source
    }

    pub fn activity_name(&self) -> &str {
        &self.assignment.activity_name
    }

    pub fn is_selected(&self, day: Day) -> bool {
        self.selected.contains(&day)
    }

    /// Flip `day` in or out of the selection. The source day stays unselected.
    pub fn toggle(&mut self, day: Day) {
        if day == self.source.day {
            return;
        }
        if !self.selected.remove(&day) {
            self.selected.insert(day);
        }
    }

    pub fn selected_days(&self) -> Vec<Day> {
        self.selected.iter().copied().collect()
    }

    /// Days other than the source whose slot is already occupied.
    pub fn conflicts(&self) -> &[Day] {
        &self.conflicts
    }

    pub fn has_conflict(&self, day: Day) -> bool {
        self.conflicts.contains(&day)
    }

    pub fn refresh_conflicts(&mut self, store: &AssignmentStore) {
        self.conflicts = store.conflicts(&self.source, &Day::ALL);
    }
}

/// Render the dialog. On `Confirmed` the caller copies the source to
/// [`DuplicateDialogState::selected_days`].
pub fn render_duplicate_dialog(ctx: &egui::Context, state: &mut DuplicateDialogState) -> DialogResult {
    let mut result = DialogResult::Pending;
    let mut window_open = true;

    let response = egui::Window::new("Duplicate to Other Days")
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);

            ui.horizontal(|ui| {
                let color = parse_color(&state.assignment.color).unwrap_or(FALLBACK_COLOR);
                let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, color);
                ui.label(RichText::new(state.activity_name()).strong());
                ui.label(format!("at {} on {}", state.source.slot, state.source.day));
            });
            ui.add_space(8.0);
            ui.label("Copy to:");

            for day in Day::ALL {
                ui.horizontal(|ui| {
                    let is_source = day == state.source.day;
                    let mut checked = state.is_selected(day);
                    let checkbox = ui.add_enabled(!is_source, egui::Checkbox::new(&mut checked, day.label()));
                    if checkbox.changed() {
                        state.toggle(day);
                    }
                    if is_source {
                        ui.label(RichText::new("(source)").small().weak());
                    } else if state.has_conflict(day) {
                        ui.label(
                            RichText::new("⚠ will replace existing")
                                .small()
                                .color(Color32::from_rgb(220, 150, 50)),
                        );
                    }
                });
            }

            ui.add_space(10.0);
            ui.separator();
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_confirm = !state.selected.is_empty();
                    if ui.add_enabled(can_confirm, egui::Button::new("Duplicate")).clicked() {
                        result = DialogResult::Confirmed;
                    }
                    ui.add_space(10.0);
                    if ui.button("Cancel").clicked() {
                        result = DialogResult::Cancelled;
                    }
                });
            });
        });

    if !window_open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        result = DialogResult::Cancelled;
    }

    if result == DialogResult::Pending && !state.just_opened {
        if let Some(inner) = &response {
            if clicked_outside(ctx, inner.response.rect) {
                result = DialogResult::Cancelled;
            }
        }
    }
    state.just_opened = false;

    result
}
