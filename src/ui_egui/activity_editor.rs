//! Sidebar panel for creating, editing, and deleting activities.
//!
//! Each activity is shown as a chip that can be dragged onto the grid.

use egui::{Color32, RichText, Sense, Stroke};

use crate::models::activity::{Activity, ActivityValidationError, SUGGESTED_NAMES, SWATCHES};
use crate::services::catalog::ActivityCatalog;
use crate::ui_egui::views::assignment_rendering::{parse_color, render_activity_chip, FALLBACK_COLOR};

const CHIP_WIDTH: f32 = 150.0;
const CHIP_HEIGHT: f32 = 26.0;
const SWATCH_SIZE: f32 = 20.0;

/// State for the activity editor.
#[derive(Debug, Clone, Default)]
pub struct ActivityEditorState {
    /// Index of the activity being edited (None = creating new)
    pub editing: Option<usize>,
    pub name_input: String,
    pub color_input: String,
    pub error_message: Option<String>,
}

impl ActivityEditorState {
    pub fn new(catalog: &ActivityCatalog) -> Self {
        let mut state = Self::default();
        state.start_new(catalog);
        state
    }

    /// Reset the form for a new activity, prefilled with an unused suggestion.
    pub fn start_new(&mut self, catalog: &ActivityCatalog) {
        self.editing = None;
        self.name_input = SUGGESTED_NAMES
            .into_iter()
            .find(|name| catalog.find(name).is_none())
            .unwrap_or_default()
            .to_string();
        self.color_input = catalog.next_free_swatch().unwrap_or(SWATCHES[0]).to_string();
        self.error_message = None;
    }

    pub fn start_edit(&mut self, index: usize, activity: &Activity) {
        self.editing = Some(index);
        self.name_input = activity.name.clone();
        self.color_input = activity.color.clone();
        self.error_message = None;
    }

    /// Apply the form to the catalog. Returns a confirmation message.
    pub fn submit(&mut self, catalog: &mut ActivityCatalog) -> Result<String, ActivityValidationError> {
        let activity = Activity::new(self.name_input.clone(), self.color_input.clone());
        let outcome = match self.editing {
            Some(index) => catalog
                .update(index, activity)
                .map(|_| format!("Updated \"{}\"", self.name_input.trim())),
            None => catalog
                .add(activity)
                .map(|_| format!("Added \"{}\"", self.name_input.trim())),
        };
        match outcome {
            Ok(message) => {
                self.start_new(catalog);
                Ok(message)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Remove the activity at `index`, resetting the form if it was being edited.
    pub fn delete(&mut self, index: usize, catalog: &mut ActivityCatalog) -> Option<Activity> {
        let removed = catalog.remove(index)?;
        match self.editing {
            Some(editing) if editing == index => self.start_new(catalog),
            Some(editing) if editing > index => self.editing = Some(editing - 1),
            _ => {}
        }
        if self.editing.is_none() && catalog.find(&self.name_input).is_some() {
            self.start_new(catalog);
        }
        Some(removed)
    }
}

/// What the editor did this frame.
#[derive(Debug, Default)]
pub struct ActivityEditorResponse {
    /// An activity chip started being dragged
    pub drag_start: Option<Activity>,
    pub catalog_changed: bool,
    pub message: Option<String>,
}

/// Render the activity list and editor form into the sidebar.
pub fn render_activity_editor(
    ui: &mut egui::Ui,
    state: &mut ActivityEditorState,
    catalog: &mut ActivityCatalog,
) -> ActivityEditorResponse {
    let mut response = ActivityEditorResponse::default();
    let mut edit_request: Option<usize> = None;
    let mut delete_request: Option<usize> = None;

    ui.heading("Activities");
    ui.label(RichText::new("Drag an activity onto the grid").small().weak());
    ui.add_space(4.0);

    if catalog.is_empty() {
        ui.label(RichText::new("No activities yet").italics());
    }

    for (index, activity) in catalog.activities().iter().enumerate() {
        ui.horizontal(|ui| {
            let (rect, chip) =
                ui.allocate_exact_size(egui::vec2(CHIP_WIDTH, CHIP_HEIGHT), Sense::click_and_drag());
            render_activity_chip(ui.painter(), rect, &activity.name, &activity.color);
            if chip.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
            }
            if chip.drag_started() {
                response.drag_start = Some(activity.clone());
            }
            if chip.double_clicked() {
                edit_request = Some(index);
            }

            if ui.small_button("✏").on_hover_text("Edit").clicked() {
                edit_request = Some(index);
            }
            if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                delete_request = Some(index);
            }
        });
    }

    if let Some(index) = edit_request {
        if let Some(activity) = catalog.activities().get(index) {
            let activity = activity.clone();
            state.start_edit(index, &activity);
        }
    }
    if let Some(index) = delete_request {
        if let Some(removed) = state.delete(index, catalog) {
            response.catalog_changed = true;
            response.message = Some(format!("Deleted \"{}\"", removed.name));
        }
    }

    ui.add_space(8.0);
    ui.separator();

    ui.label(RichText::new(if state.editing.is_some() { "Edit Activity" } else { "New Activity" }).strong());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(
            egui::TextEdit::singleline(&mut state.name_input)
                .desired_width(140.0)
                .hint_text("e.g. Work"),
        );
    });

    ui.horizontal_wrapped(|ui| {
        for swatch in SWATCHES {
            let fill = parse_color(swatch).unwrap_or(FALLBACK_COLOR);
            let (rect, swatch_response) =
                ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
            ui.painter().rect_filled(rect, 3.0, fill);
            if state.color_input.eq_ignore_ascii_case(swatch) {
                ui.painter()
                    .rect_stroke(rect.expand(2.0), 4.0, Stroke::new(2.0, ui.visuals().strong_text_color()));
            }
            if swatch_response.on_hover_text(swatch).clicked() {
                state.color_input = swatch.to_string();
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label("Color:");
        ui.add(egui::TextEdit::singleline(&mut state.color_input).desired_width(80.0));
        let preview = parse_color(&state.color_input).unwrap_or(Color32::TRANSPARENT);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), Sense::hover());
        ui.painter().rect_filled(rect, 3.0, preview);
    });

    if let Some(ref error) = state.error_message {
        ui.colored_label(Color32::RED, format!("❌ {}", error));
    }

    ui.horizontal(|ui| {
        let label = if state.editing.is_some() { "💾 Save" } else { "➕ Add" };
        if ui.button(label).clicked() {
            if let Ok(message) = state.submit(catalog) {
                response.catalog_changed = true;
                response.message = Some(message);
            }
        }
        if state.editing.is_some() && ui.button("Cancel").clicked() {
            state.start_new(catalog);
        }
    });

    response
}
