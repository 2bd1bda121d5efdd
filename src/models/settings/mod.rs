// Startup settings read from planner.toml
// Every key is optional; anything missing falls back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::models::activity::Activity;
use crate::models::schedule::ScheduleParameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// "30 minutes", "1 hour" or "2 hours"
    pub block_size: String,
    /// Label of the first grid row, e.g. "8:00 AM"
    pub start_time: String,
    pub fuzziness_minutes: u32,
    /// "light" or "dark"
    pub theme: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Activities present in the catalog at startup
    pub activities: Vec<Activity>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            block_size: "1 hour".to_string(),
            start_time: "8:00 AM".to_string(),
            fuzziness_minutes: 0,
            theme: "light".to_string(),
            window_width: 1200.0,
            window_height: 800.0,
            activities: Vec::new(),
        }
    }
}

impl Settings {
    /// Schedule parameters described by these settings, with defaults and the
    /// fuzziness cap applied.
    pub fn schedule_parameters(&self) -> ScheduleParameters {
        ScheduleParameters::from_labels(
            Some(&self.block_size),
            Some(&self.start_time),
            self.fuzziness_minutes,
        )
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme.eq_ignore_ascii_case("dark")
    }
}
