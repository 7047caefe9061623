use floorplan_layout::{FloorGrid, GridPosition, PixelCoordinate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

pub type BoothId = Uuid;
pub type EventId = Uuid;

const MAX_NAME_LEN: usize = 100;

/// One exhibitor's space at an event.
///
/// Width and height are not stored per booth; every booth uses the
/// configured booth size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booth {
    pub id: BoothId,
    pub event_id: EventId,
    pub name: String,
    /// Logical cell reserved for the booth, if it was auto-assigned.
    pub grid: Option<GridPosition>,
    /// Top-left corner on the canvas, if the booth has been placed.
    pub position: Option<PixelCoordinate>,
}

impl Booth {
    /// Placement pair used to derive the occupied cells of an event.
    pub fn placement(&self) -> (Option<GridPosition>, Option<PixelCoordinate>) {
        (self.grid, self.position)
    }

    /// Display label of the booth's cell, e.g. `B4`.
    pub fn grid_label(&self, grid: &FloorGrid) -> Option<String> {
        self.grid.map(|cell| grid.grid_label(cell))
    }
}

/// Input for creating a booth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooth {
    pub event_id: EventId,
    pub name: String,
}

impl NewBooth {
    pub fn new(event_id: EventId, name: impl Into<String>) -> Self {
        Self { event_id, name: name.into() }
    }

    /// Checks the record at the boundary, returning the trimmed name.
    pub fn validate(&self) -> Result<&str, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation { field: "name", reason: "must not be blank" });
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(CoreError::Validation { field: "name", reason: "must be at most 100 characters" });
        }
        Ok(name)
    }
}
