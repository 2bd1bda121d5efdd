//! State owned by the week grid: the assignment store, the drag controller,
//! and what the store was last reconciled against.
//!
//! Upstream changes (catalog edits, fuzziness) must be applied with
//! [`ScheduleGrid::sync`] before the store is read again.

use crate::models::activity::Activity;
use crate::models::assignment::{Assignment, CellKey};
use crate::models::schedule::{Day, ScheduleParameters};
use crate::services::assignment::{AssignmentStore, ReconcileSummary};
use crate::services::catalog::ActivityCatalog;
use crate::services::drag::{DragController, DropOutcome};

/// What a [`ScheduleGrid::sync`] call had to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub catalog: Option<ReconcileSummary>,
    /// Number of assignments restamped with a new fuzziness, if that pass ran
    pub fuzziness: Option<usize>,
}

#[derive(Debug, Default)]
pub struct ScheduleGrid {
    store: AssignmentStore,
    drag: DragController,
    catalog_revision: Option<u64>,
    fuzziness: u32,
}

impl ScheduleGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &AssignmentStore {
        &self.store
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    pub fn fuzziness(&self) -> u32 {
        self.fuzziness
    }

    /// Reconcile with whichever upstream inputs changed since the last call.
    pub fn sync(&mut self, catalog: &ActivityCatalog, params: &ScheduleParameters) -> SyncReport {
        let mut report = SyncReport::default();
        if self.catalog_revision != Some(catalog.revision()) {
            report.catalog = Some(self.on_catalog_changed(catalog.activities()));
            self.catalog_revision = Some(catalog.revision());
        }
        if self.fuzziness != params.fuzziness_minutes() {
            report.fuzziness = Some(self.on_fuzziness_changed(params.fuzziness_minutes()));
        }
        report
    }

    pub fn on_catalog_changed(&mut self, activities: &[Activity]) -> ReconcileSummary {
        self.store.reconcile_with_catalog(activities)
    }

    pub fn on_fuzziness_changed(&mut self, fuzziness_minutes: u32) -> usize {
        self.fuzziness = fuzziness_minutes;
        self.store.reconcile_with_fuzziness(fuzziness_minutes)
    }

    /// Place `activity` directly on a cell, overwriting whatever is there.
    pub fn assign(&mut self, key: CellKey, activity: &Activity) -> Option<Assignment> {
        self.store
            .assign(key, Assignment::from_activity(activity, self.fuzziness))
    }

    pub fn remove(&mut self, key: &CellKey) -> Option<Assignment> {
        self.store.remove(key)
    }

    /// Copy the assignment at `source` into the same slot on each of `days`.
    pub fn duplicate_to_days(&mut self, source: &CellKey, days: &[Day]) -> usize {
        let targets: Vec<CellKey> = days.iter().map(|day| source.with_day(*day)).collect();
        self.store.duplicate(source, &targets)
    }

    pub fn begin_drag_from_catalog(&mut self, activity: &Activity) -> bool {
        self.drag.begin_from_catalog(activity)
    }

    pub fn begin_drag_from_cell(&mut self, source: &CellKey, is_duplicating: bool) -> bool {
        self.drag.begin_from_cell(source, &self.store, is_duplicating)
    }

    /// Finish the in-flight drag over `target`, or over nothing.
    ///
    /// Call after [`ScheduleGrid::sync`] so cell drops read a reconciled store.
    pub fn release_drag(&mut self, target: Option<&CellKey>, catalog: &ActivityCatalog) -> DropOutcome {
        self.drag
            .release(target, &mut self.store, catalog.activities(), self.fuzziness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ActivityCatalog {
        ActivityCatalog::from_activities(vec![
            Activity::new("Work", "#3D5A5E"),
            Activity::new("Sleep", "#89778F"),
        ])
    }

    #[test]
    fn test_first_sync_reconciles_catalog() {
        let mut grid = ScheduleGrid::new();
        let report = grid.sync(&catalog(), &ScheduleParameters::default());
        assert!(report.catalog.is_some());
        assert!(report.fuzziness.is_none());
    }

    #[test]
    fn test_sync_without_changes_does_nothing() {
        let mut grid = ScheduleGrid::new();
        let catalog = catalog();
        let params = ScheduleParameters::default();
        grid.sync(&catalog, &params);
        assert_eq!(grid.sync(&catalog, &params), SyncReport::default());
    }

    #[test]
    fn test_catalog_edit_recolors_on_next_sync() {
        let mut grid = ScheduleGrid::new();
        let mut catalog = catalog();
        let params = ScheduleParameters::default();
        grid.sync(&catalog, &params);
        let key = CellKey::new(Day::Mon, "9:00 AM");
        grid.assign(key.clone(), &catalog.activities()[0]);

        catalog.update(0, Activity::new("Work", "#2CC2DB")).unwrap();
        grid.sync(&catalog, &params);

        assert_eq!(grid.store().get(&key).unwrap().color, "#2CC2DB");
    }

    #[test]
    fn test_fuzziness_change_restamps_assignments() {
        let mut grid = ScheduleGrid::new();
        let catalog = catalog();
        let mut params = ScheduleParameters::default();
        grid.sync(&catalog, &params);
        let key = CellKey::new(Day::Mon, "9:00 AM");
        grid.assign(key.clone(), &catalog.activities()[1]);

        params.set_fuzziness(12);
        let report = grid.sync(&catalog, &params);

        assert_eq!(report.fuzziness, Some(1));
        assert_eq!(grid.store().get(&key).unwrap().fuzziness_minutes, 12);
    }

    #[test]
    fn test_duplicate_to_days() {
        let mut grid = ScheduleGrid::new();
        let source = CellKey::new(Day::Mon, "9:00 AM");
        grid.assign(source.clone(), &Activity::new("Work", "#3D5A5E"));

        assert_eq!(grid.duplicate_to_days(&source, &[Day::Tue, Day::Wed]), 2);
        assert_eq!(grid.store().len(), 3);
    }

    #[test]
    fn test_drag_round_trip_through_grid() {
        let mut grid = ScheduleGrid::new();
        grid.on_fuzziness_changed(5);
        grid.begin_drag_from_catalog(&Activity::new("Work", "#3D5A5E"));
        let dest = CellKey::new(Day::Fri, "1:00 PM");

        let outcome = grid.release_drag(Some(&dest), &catalog());

        assert!(outcome.changed_store());
        assert_eq!(grid.store().get(&dest).unwrap().fuzziness_minutes, 5);
    }

    #[test]
    fn test_activity_deleted_during_move_drag_stays_deleted() {
        let mut grid = ScheduleGrid::new();
        let mut catalog = catalog();
        let params = ScheduleParameters::default();
        grid.sync(&catalog, &params);
        let source = CellKey::new(Day::Mon, "9:00 AM");
        grid.assign(source.clone(), &catalog.activities()[0]);
        assert!(grid.begin_drag_from_cell(&source, false));

        catalog.remove_by_name("Work").unwrap();
        grid.sync(&catalog, &params);
        let outcome = grid.release_drag(Some(&CellKey::new(Day::Tue, "9:00 AM")), &catalog);
        grid.sync(&catalog, &params);

        assert_eq!(outcome, DropOutcome::Stale);
        assert!(grid.store().is_empty());
    }

    #[test]
    fn test_activity_recolored_during_copy_drag_copies_new_color() {
        let mut grid = ScheduleGrid::new();
        let mut catalog = catalog();
        let params = ScheduleParameters::default();
        grid.sync(&catalog, &params);
        let source = CellKey::new(Day::Mon, "9:00 AM");
        let dest = CellKey::new(Day::Tue, "9:00 AM");
        grid.assign(source.clone(), &catalog.activities()[0]);
        grid.begin_drag_from_cell(&source, true);

        catalog.update(0, Activity::new("Work", "#DB7A2A")).unwrap();
        grid.sync(&catalog, &params);
        grid.release_drag(Some(&dest), &catalog);

        assert_eq!(grid.store().get(&source).unwrap().color, "#DB7A2A");
        assert_eq!(grid.store().get(&dest).unwrap().color, "#DB7A2A");
    }

    #[test]
    fn test_activity_deleted_during_catalog_drag_is_not_placed() {
        let mut grid = ScheduleGrid::new();
        let mut catalog = catalog();
        let params = ScheduleParameters::default();
        grid.sync(&catalog, &params);
        grid.begin_drag_from_catalog(&catalog.activities()[1]);

        catalog.remove_by_name("Sleep").unwrap();
        grid.sync(&catalog, &params);
        let outcome = grid.release_drag(Some(&CellKey::new(Day::Wed, "9:00 PM")), &catalog);

        assert_eq!(outcome, DropOutcome::Stale);
        assert!(grid.store().is_empty());
    }
}
