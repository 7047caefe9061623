use floorplan_layout::{GridPosition, LayoutError};
use thiserror::Error;

use crate::booth::{BoothId, EventId};

/// Errors surfaced by the booth workflows.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The configuration file or environment could not be read or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    /// An input record or setting failed boundary validation.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: &'static str },
    /// Every cell in the bounded grid is taken. Recoverable; shown to the user.
    #[error("no available grid positions")]
    NoAvailableGridPosition,
    /// Another booth of the same event already holds this grid cell.
    #[error("grid cell {cell} is already taken in event `{event}`")]
    CellTaken { event: EventId, cell: GridPosition },
    /// No booth with this id exists in the store.
    #[error("booth `{0}` not found")]
    BoothNotFound(BoothId),
    /// The backing store rejected or failed an operation.
    #[error("booth store error: {0}")]
    Store(String),
    /// Layout parameters were invalid.
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}
