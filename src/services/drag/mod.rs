//! Drag/drop controller for the week grid.
//!
//! At most one gesture is in flight. The payload is encoded to its wire form
//! when the drag starts and decoded once; a payload that fails to decode ends
//! the gesture on release without touching the store.
//!
//! Drops read the store and the catalog as they are at release time, not as
//! they were when the drag started. Releasing a *move* drag over no cell
//! deletes the dragged assignment.

mod payload;

pub use payload::{DragPayload, DragPayloadError, GRID_CELL_TYPE};

use crate::models::activity::Activity;
use crate::models::assignment::{Assignment, CellKey};
use crate::services::assignment::AssignmentStore;

/// What a release did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// A catalog activity was placed on `dest`
    Assigned {
        dest: CellKey,
        replaced: Option<Assignment>,
    },
    Moved { source: CellKey, dest: CellKey },
    Copied { source: CellKey, dest: CellKey },
    /// A move drag ended outside the grid and the source was deleted
    DeletedSource(CellKey),
    /// Dropped back onto the cell it came from
    SelfDrop,
    /// Released outside the grid with nothing to undo
    Cancelled,
    /// The dragged cell was emptied, or the dragged activity left the
    /// catalog, before the release
    Stale,
    Rejected(DragPayloadError),
    /// No drag was in flight
    Idle,
}

impl DropOutcome {
    pub fn changed_store(&self) -> bool {
        matches!(
            self,
            DropOutcome::Assigned { .. }
                | DropOutcome::Moved { .. }
                | DropOutcome::Copied { .. }
                | DropOutcome::DeletedSource(_)
        )
    }
}

#[derive(Debug, Clone)]
struct InFlight {
    wire: String,
    decoded: Result<DragPayload, DragPayloadError>,
}

impl InFlight {
    fn from_wire(wire: String) -> Self {
        let decoded = DragPayload::from_wire(&wire);
        Self { wire, decoded }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    in_flight: Option<InFlight>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The in-flight payload, if there is one and it decoded.
    pub fn payload(&self) -> Option<&DragPayload> {
        self.in_flight
            .as_ref()
            .and_then(|in_flight| in_flight.decoded.as_ref().ok())
    }

    /// Start a gesture. Any gesture already in flight is replaced.
    pub fn begin(&mut self, payload: &DragPayload) -> bool {
        match payload.to_wire() {
            Ok(wire) => {
                self.in_flight = Some(InFlight {
                    wire,
                    decoded: Ok(payload.clone()),
                });
                true
            }
            Err(e) => {
                log::warn!("Could not start drag: {}", e);
                self.in_flight = None;
                false
            }
        }
    }

    /// Start a gesture from an already-encoded payload.
    ///
    /// A wire that does not decode still starts a gesture; it is rejected on
    /// release.
    pub fn begin_wire(&mut self, wire: impl Into<String>) {
        self.in_flight = Some(InFlight::from_wire(wire.into()));
    }

    pub fn begin_from_catalog(&mut self, activity: &Activity) -> bool {
        self.begin(&DragPayload::FromCatalog(activity.clone()))
    }

    /// Start dragging the assignment at `source`. Empty cells cannot be dragged.
    pub fn begin_from_cell(
        &mut self,
        source: &CellKey,
        store: &AssignmentStore,
        is_duplicating: bool,
    ) -> bool {
        let Some(assignment) = store.get(source) else {
            return false;
        };
        self.begin(&DragPayload::FromCell {
            source: source.clone(),
            assignment: assignment.clone(),
            is_duplicating,
        })
    }

    pub fn drop_on(
        &mut self,
        dest: &CellKey,
        store: &mut AssignmentStore,
        activities: &[Activity],
        fuzziness: u32,
    ) -> DropOutcome {
        self.release(Some(dest), store, activities, fuzziness)
    }

    /// Release outside any cell.
    pub fn cancel(&mut self, store: &mut AssignmentStore) -> DropOutcome {
        self.release(None, store, &[], 0)
    }

    /// End the gesture over `target` (or over nothing) and apply it to `store`.
    ///
    /// Catalog drops are looked up by name in `activities` and take the
    /// current color. Cell drops move or copy whatever `store` holds at the
    /// source now. New, moved and copied assignments are stamped with
    /// `fuzziness`.
    pub fn release(
        &mut self,
        target: Option<&CellKey>,
        store: &mut AssignmentStore,
        activities: &[Activity],
        fuzziness: u32,
    ) -> DropOutcome {
        let Some(InFlight { wire, decoded }) = self.in_flight.take() else {
            return DropOutcome::Idle;
        };
        let payload = match decoded {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Ignoring drop of {:?}: {}", wire, e);
                return DropOutcome::Rejected(e);
            }
        };

        match (payload, target) {
            (DragPayload::FromCatalog(activity), Some(dest)) => {
                let Some(current) = activities.iter().find(|a| a.name == activity.name) else {
                    log::debug!("{:?} left the catalog during the drag", activity.name);
                    return DropOutcome::Stale;
                };
                let replaced = store.assign(dest.clone(), Assignment::from_activity(current, fuzziness));
                DropOutcome::Assigned {
                    dest: dest.clone(),
                    replaced,
                }
            }
            (DragPayload::FromCatalog(_), None) => DropOutcome::Cancelled,
            (DragPayload::FromCell { source, .. }, _) if !store.contains(&source) => {
                log::debug!("Drag source {} was emptied during the drag", source);
                DropOutcome::Stale
            }
            (DragPayload::FromCell { source, .. }, Some(dest)) if source == *dest => DropOutcome::SelfDrop,
            (
                DragPayload::FromCell {
                    source,
                    is_duplicating: true,
                    ..
                },
                Some(dest),
            ) => {
                store.duplicate(&source, std::slice::from_ref(dest));
                store.stamp_fuzziness(dest, fuzziness);
                DropOutcome::Copied {
                    source,
                    dest: dest.clone(),
                }
            }
            (DragPayload::FromCell { source, .. }, Some(dest)) => {
                store.move_assignment(&source, dest.clone());
                store.stamp_fuzziness(dest, fuzziness);
                DropOutcome::Moved {
                    source,
                    dest: dest.clone(),
                }
            }
            (DragPayload::FromCell { is_duplicating: true, .. }, None) => DropOutcome::Cancelled,
            (DragPayload::FromCell { source, .. }, None) => {
                log::debug!("Move drag ended outside the grid, deleting {}", source);
                store.remove(&source);
                DropOutcome::DeletedSource(source)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Day;

    fn key(day: Day, slot: &str) -> CellKey {
        CellKey::new(day, slot)
    }

    fn catalog() -> Vec<Activity> {
        vec![
            Activity::new("Work", "#3D5A5E"),
            Activity::new("Eat", "#DB7A2A"),
            Activity::new("Sleep", "#89778F"),
        ]
    }

    fn store_with_work() -> AssignmentStore {
        let mut store = AssignmentStore::new();
        store.assign(key(Day::Mon, "9:00 AM"), Assignment::new("Work", "#3D5A5E", 0));
        store
    }

    #[test]
    fn test_release_without_drag_is_idle() {
        let mut controller = DragController::new();
        let mut store = AssignmentStore::new();
        assert_eq!(controller.cancel(&mut store), DropOutcome::Idle);
    }

    #[test]
    fn test_catalog_drop_assigns_with_fuzziness() {
        let mut controller = DragController::new();
        let mut store = AssignmentStore::new();
        controller.begin_from_catalog(&Activity::new("Eat", "#DB7A2A"));
        assert!(controller.is_dragging());

        let outcome = controller.drop_on(&key(Day::Tue, "12:00 PM"), &mut store, &catalog(), 10);

        assert!(matches!(outcome, DropOutcome::Assigned { replaced: None, .. }));
        assert_eq!(
            store.get(&key(Day::Tue, "12:00 PM")),
            Some(&Assignment::new("Eat", "#DB7A2A", 10))
        );
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_catalog_drop_overwrites_without_confirmation() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        controller.begin_from_catalog(&Activity::new("Sleep", "#89778F"));

        let outcome = controller.drop_on(&key(Day::Mon, "9:00 AM"), &mut store, &catalog(), 0);

        assert_eq!(
            outcome,
            DropOutcome::Assigned {
                dest: key(Day::Mon, "9:00 AM"),
                replaced: Some(Assignment::new("Work", "#3D5A5E", 0)),
            }
        );
        assert_eq!(store.get(&key(Day::Mon, "9:00 AM")).unwrap().activity_name, "Sleep");
    }

    #[test]
    fn test_catalog_cancel_changes_nothing() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        controller.begin_from_catalog(&Activity::new("Sleep", "#89778F"));
        assert_eq!(controller.cancel(&mut store), DropOutcome::Cancelled);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cell_drag_moves() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        assert!(controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, false));

        let outcome = controller.drop_on(&key(Day::Wed, "10:00 AM"), &mut store, &catalog(), 0);

        assert!(matches!(outcome, DropOutcome::Moved { .. }));
        assert!(!store.contains(&key(Day::Mon, "9:00 AM")));
        assert!(store.contains(&key(Day::Wed, "10:00 AM")));
    }

    #[test]
    fn test_cell_drag_duplicates() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, true);

        controller.drop_on(&key(Day::Sat, "9:00 AM"), &mut store, &catalog(), 0);

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get(&key(Day::Mon, "9:00 AM")),
            store.get(&key(Day::Sat, "9:00 AM"))
        );
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        let before = store.clone();
        controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, false);

        assert_eq!(
            controller.drop_on(&key(Day::Mon, "9:00 AM"), &mut store, &catalog(), 0),
            DropOutcome::SelfDrop
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_move_released_outside_grid_deletes_source() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, false);

        let outcome = controller.cancel(&mut store);

        assert_eq!(outcome, DropOutcome::DeletedSource(key(Day::Mon, "9:00 AM")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_duplicate_released_outside_grid_keeps_source() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, true);

        assert_eq!(controller.cancel(&mut store), DropOutcome::Cancelled);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_cell_cannot_be_dragged() {
        let mut controller = DragController::new();
        let store = AssignmentStore::new();
        assert!(!controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, false));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_malformed_wire_is_rejected_without_changes() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        let before = store.clone();
        controller.begin_wire("{oops");

        let outcome = controller.drop_on(&key(Day::Tue, "9:00 AM"), &mut store, &catalog(), 0);

        assert!(matches!(outcome, DropOutcome::Rejected(DragPayloadError::Malformed(_))));
        assert!(!outcome.changed_store());
        assert_eq!(store, before);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_payload_preview() {
        let mut controller = DragController::new();
        let store = store_with_work();
        controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, false);
        let payload = controller.payload().unwrap();
        assert_eq!(payload.activity_name(), "Work");
        assert_eq!(payload.color(), "#3D5A5E");
    }

    #[test]
    fn test_malformed_wire_keeps_gesture_without_preview() {
        let mut controller = DragController::new();
        controller.begin_wire("{oops");
        assert!(controller.is_dragging());
        assert!(controller.payload().is_none());
    }

    #[test]
    fn test_cell_drop_uses_source_as_it_is_at_release() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        let source = key(Day::Mon, "9:00 AM");
        controller.begin_from_cell(&source, &store, true);
        store.assign(source.clone(), Assignment::new("Work", "#2CC2DB", 0));

        controller.drop_on(&key(Day::Tue, "9:00 AM"), &mut store, &catalog(), 0);

        assert_eq!(store.get(&key(Day::Tue, "9:00 AM")).unwrap().color, "#2CC2DB");
    }

    #[test]
    fn test_move_of_emptied_source_is_stale() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        let source = key(Day::Mon, "9:00 AM");
        controller.begin_from_cell(&source, &store, false);
        store.remove(&source);

        let outcome = controller.drop_on(&key(Day::Tue, "9:00 AM"), &mut store, &catalog(), 0);

        assert_eq!(outcome, DropOutcome::Stale);
        assert!(!outcome.changed_store());
        assert!(store.is_empty());
    }

    #[test]
    fn test_move_of_emptied_source_outside_grid_is_stale() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        controller.begin_from_cell(&key(Day::Mon, "9:00 AM"), &store, false);
        store.remove(&key(Day::Mon, "9:00 AM"));

        assert_eq!(controller.cancel(&mut store), DropOutcome::Stale);
    }

    #[test]
    fn test_catalog_drop_takes_current_color() {
        let mut controller = DragController::new();
        let mut store = AssignmentStore::new();
        controller.begin_from_catalog(&Activity::new("Eat", "#FFFFFF"));

        controller.drop_on(&key(Day::Tue, "12:00 PM"), &mut store, &catalog(), 0);

        assert_eq!(store.get(&key(Day::Tue, "12:00 PM")).unwrap().color, "#DB7A2A");
    }

    #[test]
    fn test_catalog_drop_of_removed_activity_is_stale() {
        let mut controller = DragController::new();
        let mut store = store_with_work();
        let before = store.clone();
        controller.begin_from_catalog(&Activity::new("Play", "#2CDB7A"));

        let outcome = controller.drop_on(&key(Day::Tue, "9:00 AM"), &mut store, &catalog(), 0);

        assert_eq!(outcome, DropOutcome::Stale);
        assert_eq!(store, before);
        assert!(!controller.is_dragging());
    }
}
