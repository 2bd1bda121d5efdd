//! Assignment store: which activity occupies which (day, slot) cell.
//!
//! The store is a derived cache. Colors and fuzziness must match the current
//! activity catalog and fuzziness setting, so callers run the reconcile
//! passes whenever either upstream input changes.

use std::collections::BTreeMap;

use crate::models::activity::Activity;
use crate::models::assignment::{Assignment, CellKey};
use crate::models::schedule::Day;

/// Counts from a catalog reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Assignments whose color changed to follow the catalog
    pub recolored: usize,
    /// Assignments dropped because their activity no longer exists
    pub removed: usize,
}

impl ReconcileSummary {
    pub fn is_noop(&self) -> bool {
        self.recolored == 0 && self.removed == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentStore {
    cells: BTreeMap<CellKey, Assignment>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CellKey) -> Option<&Assignment> {
        self.cells.get(key)
    }

    pub fn contains(&self, key: &CellKey) -> bool {
        self.cells.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &Assignment)> {
        self.cells.iter()
    }

    /// Insert or overwrite the assignment at `key`, returning what was there.
    pub fn assign(&mut self, key: CellKey, assignment: Assignment) -> Option<Assignment> {
        log::debug!("Assign {:?} to {}", assignment.activity_name, key);
        self.cells.insert(key, assignment)
    }

    /// Move the assignment at `source` to `dest`, overwriting `dest`.
    ///
    /// Returns false when `source` is empty. Moving a cell onto itself leaves
    /// it in place.
    pub fn move_assignment(&mut self, source: &CellKey, dest: CellKey) -> bool {
        if *source == dest {
            return self.contains(source);
        }
        let Some(assignment) = self.cells.remove(source) else {
            return false;
        };
        log::debug!("Move {:?} from {} to {}", assignment.activity_name, source, dest);
        self.cells.insert(dest, assignment);
        true
    }

    /// Copy the assignment at `source` to every key in `dests`.
    ///
    /// Existing entries at the destinations are overwritten and the source is
    /// kept. Returns the number of cells written.
    pub fn duplicate(&mut self, source: &CellKey, dests: &[CellKey]) -> usize {
        let Some(assignment) = self.cells.get(source).cloned() else {
            return 0;
        };
        let mut written = 0;
        for dest in dests.iter().filter(|dest| *dest != source) {
            self.cells.insert(dest.clone(), assignment.clone());
            written += 1;
        }
        log::debug!(
            "Duplicated {:?} from {} to {} cell(s)",
            assignment.activity_name,
            source,
            written
        );
        written
    }

    /// Set the fuzziness of the assignment at `key`, if there is one.
    pub fn stamp_fuzziness(&mut self, key: &CellKey, fuzziness_minutes: u32) {
        if let Some(assignment) = self.cells.get_mut(key) {
            assignment.fuzziness_minutes = fuzziness_minutes;
        }
    }

    /// Delete the assignment at `key`; absent keys are a no-op.
    pub fn remove(&mut self, key: &CellKey) -> Option<Assignment> {
        let removed = self.cells.remove(key);
        if removed.is_some() {
            log::debug!("Removed assignment at {}", key);
        }
        removed
    }

    /// Bring every assignment in line with the catalog.
    ///
    /// Assignments whose activity name is still present take the catalog's
    /// current color; the rest are removed. Running the pass twice with the
    /// same catalog changes nothing the second time.
    pub fn reconcile_with_catalog(&mut self, activities: &[Activity]) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        self.cells.retain(|_, assignment| {
            match activities.iter().find(|a| a.name == assignment.activity_name) {
                Some(activity) => {
                    if assignment.color != activity.color {
                        assignment.color = activity.color.clone();
                        summary.recolored += 1;
                    }
                    true
                }
                None => {
                    summary.removed += 1;
                    false
                }
            }
        });
        if !summary.is_noop() {
            log::debug!(
                "Catalog reconciliation: {} recolored, {} removed",
                summary.recolored,
                summary.removed
            );
        }
        summary
    }

    /// Stamp `fuzziness_minutes` onto every assignment. Returns how many changed.
    pub fn reconcile_with_fuzziness(&mut self, fuzziness_minutes: u32) -> usize {
        let mut changed = 0;
        for assignment in self.cells.values_mut() {
            if assignment.fuzziness_minutes != fuzziness_minutes {
                assignment.fuzziness_minutes = fuzziness_minutes;
                changed += 1;
            }
        }
        changed
    }

    /// Days among `days` whose copy of `source`'s slot is already occupied.
    ///
    /// The source day itself is never reported.
    pub fn conflicts(&self, source: &CellKey, days: &[Day]) -> Vec<Day> {
        days.iter()
            .copied()
            .filter(|day| *day != source.day && self.contains(&source.with_day(*day)))
            .collect()
    }
}
