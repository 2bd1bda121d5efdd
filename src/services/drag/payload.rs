//! Drag payload and its in-process wire format.
//!
//! Cell payloads carry a `"type": "grid-cell"` tag; catalog payloads are a
//! bare `{name, color}` object. Anything else is rejected at the boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::activity::{Activity, ActivityValidationError};
use crate::models::assignment::{Assignment, CellKey};

/// Type tag carried by payloads that originate from a grid cell.
pub const GRID_CELL_TYPE: &str = "grid-cell";

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// An activity dragged from the catalog
    FromCatalog(Activity),
    /// An occupied cell being moved or duplicated
    FromCell {
        source: CellKey,
        assignment: Assignment,
        is_duplicating: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragPayloadError {
    #[error("malformed drag payload: {0}")]
    Malformed(String),
    #[error("unknown drag payload type {0}")]
    UnknownType(String),
    #[error("invalid activity in drag payload: {0}")]
    InvalidActivity(#[from] ActivityValidationError),
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CellWire {
    #[serde(rename = "type")]
    kind: String,
    cell_key: CellKey,
    assignment: Assignment,
    is_duplicating: bool,
}

impl DragPayload {
    /// Label shown next to the pointer while dragging.
    pub fn activity_name(&self) -> &str {
        match self {
            DragPayload::FromCatalog(activity) => &activity.name,
            DragPayload::FromCell { assignment, .. } => &assignment.activity_name,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            DragPayload::FromCatalog(activity) => &activity.color,
            DragPayload::FromCell { assignment, .. } => &assignment.color,
        }
    }

    pub fn to_wire(&self) -> Result<String, DragPayloadError> {
        let encoded = match self {
            DragPayload::FromCatalog(activity) => serde_json::to_string(activity),
            DragPayload::FromCell {
                source,
                assignment,
                is_duplicating,
            } => serde_json::to_string(&CellWire {
                kind: GRID_CELL_TYPE.to_string(),
                cell_key: source.clone(),
                assignment: assignment.clone(),
                is_duplicating: *is_duplicating,
            }),
        };
        encoded.map_err(|e| DragPayloadError::Malformed(e.to_string()))
    }

    pub fn from_wire(wire: &str) -> Result<DragPayload, DragPayloadError> {
        let value: Value =
            serde_json::from_str(wire).map_err(|e| DragPayloadError::Malformed(e.to_string()))?;
        let kind = value.get("type").cloned();

        match kind {
            None => {
                let activity: Activity = serde_json::from_value(value)
                    .map_err(|e| DragPayloadError::Malformed(e.to_string()))?;
                activity.validate()?;
                Ok(DragPayload::FromCatalog(activity))
            }
            Some(Value::String(tag)) if tag == GRID_CELL_TYPE => {
                let cell: CellWire = serde_json::from_value(value)
                    .map_err(|e| DragPayloadError::Malformed(e.to_string()))?;
                Ok(DragPayload::FromCell {
                    source: cell.cell_key,
                    assignment: cell.assignment,
                    is_duplicating: cell.is_duplicating,
                })
            }
            Some(other) => Err(DragPayloadError::UnknownType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Day;

    #[test]
    fn test_catalog_payload_is_untagged() {
        let payload = DragPayload::FromCatalog(Activity::new("Work", "#3D5A5E"));
        let wire = payload.to_wire().unwrap();
        assert_eq!(wire, r##"{"name":"Work","color":"#3D5A5E"}"##);
        assert_eq!(DragPayload::from_wire(&wire).unwrap(), payload);
    }

    #[test]
    fn test_cell_payload_carries_type_tag() {
        let payload = DragPayload::FromCell {
            source: CellKey::new(Day::Mon, "9:00 AM"),
            assignment: Assignment::new("Work", "#3D5A5E", 5),
            is_duplicating: true,
        };
        let wire = payload.to_wire().unwrap();
        let value: Value = serde_json::from_str(&wire).unwrap();
        assert_eq!(value["type"], "grid-cell");
        assert_eq!(value["isDuplicating"], true);
        assert_eq!(value["cellKey"]["day"], "Mon");
        assert_eq!(DragPayload::from_wire(&wire).unwrap(), payload);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            DragPayload::from_wire("not json"),
            Err(DragPayloadError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let err = DragPayload::from_wire(r#"{"type":"file","name":"x"}"#).unwrap_err();
        assert_eq!(err, DragPayloadError::UnknownType("\"file\"".to_string()));
    }

    #[test]
    fn test_rejects_cell_payload_missing_fields() {
        assert!(matches!(
            DragPayload::from_wire(r#"{"type":"grid-cell"}"#),
            Err(DragPayloadError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_catalog_payload_with_blank_name() {
        let err = DragPayload::from_wire(r##"{"name":"  ","color":"#3D5A5E"}"##).unwrap_err();
        assert_eq!(
            err,
            DragPayloadError::InvalidActivity(ActivityValidationError::EmptyName)
        );
    }
}
