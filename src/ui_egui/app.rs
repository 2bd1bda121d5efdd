mod interaction;
mod lifecycle;
mod sidebar;
mod toast;

use self::toast::ToastManager;
use crate::models::schedule::{FuzzinessUpdate, ScheduleParameters};
use crate::models::settings::Settings;
use crate::services::catalog::ActivityCatalog;
use crate::services::grid::ScheduleGrid;
use crate::ui_egui::activity_editor::ActivityEditorState;
use crate::ui_egui::dialogs::{DuplicateDialogState, FuzzinessWarningState};

pub const MIN_ROOT_WIDTH: f32 = 640.0;
pub const MIN_ROOT_HEIGHT: f32 = 420.0;

pub struct PlannerApp {
    /// Startup configuration, read once
    settings: Settings,
    params: ScheduleParameters,
    catalog: ActivityCatalog,
    /// Assignments, drag state, and what they were last reconciled against
    grid: ScheduleGrid,
    activity_editor: ActivityEditorState,
    duplicate_dialog: Option<DuplicateDialogState>,
    fuzziness_warning: FuzzinessWarningState,
    toast_manager: ToastManager,
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl PlannerApp {
    /// Bring the grid up to date with the catalog and schedule parameters.
    fn sync_grid(&mut self) {
        let report = self.grid.sync(&self.catalog, &self.params);
        if let Some(summary) = report.catalog {
            if summary.removed > 0 {
                self.toast_manager.info(format!(
                    "Removed {} assignment(s) of deleted activities",
                    summary.removed
                ));
            }
        }
        if let Some(changed) = report.fuzziness {
            log::debug!(
                "Fuzziness set to {} min on {} assignment(s)",
                self.params.fuzziness_minutes(),
                changed
            );
        }
    }

    fn on_fuzziness_update(&mut self, update: FuzzinessUpdate) {
        if let FuzzinessUpdate::Clamped { requested, applied } = update {
            log::info!("Fuzziness {} min clamped to {} min", requested, applied);
            self.fuzziness_warning.open_for(self.params.block_size());
        }
    }
}
