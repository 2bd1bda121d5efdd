//! Activity catalog: the owned list of activity definitions.
//!
//! The grid never mutates the catalog. It reads snapshots and compares
//! [`ActivityCatalog::revision`] against the revision it last reconciled
//! against; every successful mutation bumps the revision.

use crate::models::activity::{Activity, ActivityValidationError, SWATCHES};

/// Ordered list of activities with unique names and colors.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
    revision: u64,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from configured activities, skipping invalid entries.
    pub fn from_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut catalog = Self::new();
        for activity in activities {
            if let Err(e) = catalog.add(activity.clone()) {
                log::warn!("Skipping configured activity {:?}: {}", activity.name, e);
            }
        }
        catalog
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.name == name)
    }

    /// Change counter; differs from a remembered value iff the list changed since.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a new activity.
    pub fn add(&mut self, activity: Activity) -> Result<(), ActivityValidationError> {
        let activity = activity.normalized();
        self.check(&activity, None)?;
        log::debug!("Added activity {:?} ({})", activity.name, activity.color);
        self.activities.push(activity);
        self.bump();
        Ok(())
    }

    /// Replace the activity at `index` (rename and/or recolor).
    pub fn update(&mut self, index: usize, activity: Activity) -> Result<(), ActivityValidationError> {
        if index >= self.activities.len() {
            return Err(ActivityValidationError::OutOfRange(index));
        }
        let activity = activity.normalized();
        self.check(&activity, Some(index))?;
        if self.activities[index] != activity {
            log::debug!(
                "Updated activity {:?} -> {:?} ({})",
                self.activities[index].name,
                activity.name,
                activity.color
            );
            self.activities[index] = activity;
            self.bump();
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<Activity> {
        if index >= self.activities.len() {
            return None;
        }
        let removed = self.activities.remove(index);
        log::debug!("Removed activity {:?}", removed.name);
        self.bump();
        Some(removed)
    }

    pub fn remove_by_name(&mut self, name: &str) -> Option<Activity> {
        let index = self.activities.iter().position(|a| a.name == name)?;
        self.remove(index)
    }

    /// First default swatch no activity is using yet.
    pub fn next_free_swatch(&self) -> Option<&'static str> {
        SWATCHES
            .into_iter()
            .find(|swatch| !self.activities.iter().any(|a| a.color.eq_ignore_ascii_case(swatch)))
    }

    fn check(&self, activity: &Activity, skip: Option<usize>) -> Result<(), ActivityValidationError> {
        activity.validate()?;
        let others = self
            .activities
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != skip)
            .map(|(_, other)| other);
        for other in others {
            if other.name == activity.name {
                return Err(ActivityValidationError::DuplicateName(activity.name.clone()));
            }
            if other.color.eq_ignore_ascii_case(&activity.color) {
                return Err(ActivityValidationError::DuplicateColor(activity.color.clone()));
            }
        }
        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
