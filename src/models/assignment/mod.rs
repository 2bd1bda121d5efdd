//! Assignment model: the activity occupying one grid cell.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::activity::Activity;
use crate::models::schedule::Day;

/// Identifies a grid cell by day column and slot label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub day: Day,
    /// Formatted slot label, e.g. "9:00 AM"
    pub slot: String,
}

impl CellKey {
    pub fn new(day: Day, slot: impl Into<String>) -> Self {
        Self {
            day,
            slot: slot.into(),
        }
    }

    /// The same slot on another day.
    pub fn with_day(&self, day: Day) -> Self {
        Self {
            day,
            slot: self.slot.clone(),
        }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.day, self.slot)
    }
}

/// Snapshot of an activity placed in a cell.
///
/// Color and fuzziness are denormalized copies; the grid refreshes them
/// whenever the catalog or the fuzziness setting changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub activity_name: String,
    pub color: String,
    pub fuzziness_minutes: u32,
}

impl Assignment {
    pub fn new(
        activity_name: impl Into<String>,
        color: impl Into<String>,
        fuzziness_minutes: u32,
    ) -> Self {
        Self {
            activity_name: activity_name.into(),
            color: color.into(),
            fuzziness_minutes,
        }
    }

    pub fn from_activity(activity: &Activity, fuzziness_minutes: u32) -> Self {
        Self::new(activity.name.clone(), activity.color.clone(), fuzziness_minutes)
    }

    /// The `{name, color}` part of the snapshot.
    pub fn activity(&self) -> Activity {
        Activity::new(self.activity_name.clone(), self.color.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_key_display() {
        let key = CellKey::new(Day::Mon, "9:00 AM");
        assert_eq!(key.to_string(), "Mon-9:00 AM");
    }

    #[test]
    fn test_with_day_keeps_slot() {
        let key = CellKey::new(Day::Mon, "9:00 AM");
        assert_eq!(key.with_day(Day::Thu), CellKey::new(Day::Thu, "9:00 AM"));
    }

    #[test]
    fn test_assignment_from_activity() {
        let activity = Activity::new("Work", "#3D5A5E");
        let assignment = Assignment::from_activity(&activity, 5);
        assert_eq!(assignment.activity_name, "Work");
        assert_eq!(assignment.fuzziness_minutes, 5);
        assert_eq!(assignment.activity(), activity);
    }

    #[test]
    fn test_assignment_serializes_camel_case() {
        let assignment = Assignment::new("Eat", "#DB7A2A", 0);
        let json = serde_json::to_string(&assignment).unwrap();
        assert_eq!(
            json,
            r##"{"activityName":"Eat","color":"#DB7A2A","fuzzinessMinutes":0}"##
        );
    }
}
