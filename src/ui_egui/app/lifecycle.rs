use super::toast::ToastManager;
use super::PlannerApp;
use crate::models::settings::Settings;
use crate::services::catalog::ActivityCatalog;
use crate::services::grid::ScheduleGrid;
use crate::ui_egui::activity_editor::ActivityEditorState;
use crate::ui_egui::dialogs::FuzzinessWarningState;
use crate::ui_egui::views::render_week_grid;

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let params = settings.schedule_parameters();
        let catalog = ActivityCatalog::from_activities(settings.activities.clone());
        log::info!(
            "Starting planner: {} blocks from {}, fuzziness {} min, {} activities",
            params.block_size(),
            params.start_label(),
            params.fuzziness_minutes(),
            catalog.len()
        );

        cc.egui_ctx.set_visuals(if settings.is_dark_theme() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let activity_editor = ActivityEditorState::new(&catalog);
        let mut app = Self {
            settings,
            params,
            catalog,
            grid: ScheduleGrid::new(),
            activity_editor,
            duplicate_dialog: None,
            fuzziness_warning: FuzzinessWarningState::new(),
            toast_manager: ToastManager::new(),
        };
        app.sync_grid();
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_grid();

        self.render_sidebar(ctx);
        self.sync_grid();

        let result = egui::CentralPanel::default()
            .show(ctx, |ui| render_week_grid(ui, &self.grid, &self.params))
            .inner;
        self.apply_grid_result(result);
        self.update_drag(ctx);

        self.render_duplicate_dialog(ctx);
        self.fuzziness_warning.render(ctx);

        let is_dark = self.settings.is_dark_theme();
        self.toast_manager.render(ctx, is_dark);
    }
}
