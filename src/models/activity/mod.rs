//! Activity model for tagging time slots.
//!
//! An activity is a named, colored tag (Work, Sleep, ...) that users drag
//! onto the week grid. Assignments copy the name and color by value, so an
//! activity is never referenced from the grid directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of an activity name after trimming.
pub const MAX_NAME_LEN: usize = 50;

/// Name suggestions offered by the activity editor.
pub const SUGGESTED_NAMES: [&str; 4] = ["Work", "Play", "Eat", "Sleep"];

/// Swatches offered by the activity editor, in display order.
pub const SWATCHES: [&str; 6] = [
    "#3D5A5E", "#DB7A2A", "#2CC2DB", "#A0DB2C", "#AF2CDB", "#89778F",
];

/// A named, colored activity definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
    /// Display name, unique among the catalog's activities
    pub name: String,
    /// Hex color code (e.g. "#3D5A5E"), unique among the catalog's activities
    pub color: String,
}

impl Activity {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Validate the fields of a single activity.
    ///
    /// Uniqueness is a catalog concern and is checked by
    /// [`ActivityCatalog`](crate::services::catalog::ActivityCatalog).
    pub fn validate(&self) -> Result<(), ActivityValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ActivityValidationError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ActivityValidationError::NameTooLong);
        }
        if !is_valid_hex_color(&self.color) {
            return Err(ActivityValidationError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }

    /// Copy with the name trimmed, the way it is stored in the catalog.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            color: self.color.trim().to_string(),
        }
    }
}

/// Validation errors for activities and the catalog that holds them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityValidationError {
    #[error("Activity name cannot be empty")]
    EmptyName,
    #[error("Activity name must be 50 characters or less")]
    NameTooLong,
    #[error("Invalid color {0:?} (use hex like #3D5A5E)")]
    InvalidColor(String),
    #[error("An activity named {0:?} already exists")]
    DuplicateName(String),
    #[error("Color {0} is already used by another activity")]
    DuplicateColor(String),
    #[error("No activity at position {0}")]
    OutOfRange(usize),
}

/// Check if a string is a valid hex color code.
pub fn is_valid_hex_color(color: &str) -> bool {
    let Some(hex) = color.trim().strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
