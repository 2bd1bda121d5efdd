// Fuzzy Planner
// Main entry point

use anyhow::Result;
use fuzzy_planner::services::settings::SettingsService;
use fuzzy_planner::ui_egui::{PlannerApp, MIN_ROOT_HEIGHT, MIN_ROOT_WIDTH};

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting Fuzzy Planner");

    let settings_service = SettingsService::from_environment();
    if let Some(path) = settings_service.path() {
        log::info!("Config path: {}", path.display());
    }
    let settings = settings_service.load_or_default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Fuzzy Planner")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        "Fuzzy Planner",
        options,
        Box::new(move |cc| Ok(Box::new(PlannerApp::new(cc, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the planner window: {}", e))
}
