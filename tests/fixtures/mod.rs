// Test fixtures - reusable test data
// Provides consistent activities and cells across the integration tests

#![allow(dead_code)]

use fuzzy_planner::models::activity::Activity;
use fuzzy_planner::models::assignment::CellKey;
use fuzzy_planner::models::schedule::Day;
use fuzzy_planner::services::catalog::ActivityCatalog;

/// Sample activities using the default swatches
pub mod activities {
    use super::*;

    pub fn work() -> Activity {
        Activity::new("Work", "#3D5A5E")
    }

    pub fn play() -> Activity {
        Activity::new("Play", "#DB7A2A")
    }

    pub fn eat() -> Activity {
        Activity::new("Eat", "#2CC2DB")
    }

    pub fn sleep() -> Activity {
        Activity::new("Sleep", "#A0DB2C")
    }
}

/// Catalog holding all four sample activities
pub fn sample_catalog() -> ActivityCatalog {
    ActivityCatalog::from_activities(vec![
        activities::work(),
        activities::play(),
        activities::eat(),
        activities::sleep(),
    ])
}

pub fn cell(day: Day, slot: &str) -> CellKey {
    CellKey::new(day, slot)
}
