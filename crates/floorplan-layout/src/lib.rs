#![warn(missing_docs)]
#![doc = "Booth grid layout for expo floor plans."]
#![doc = ""]
#![doc = "This crate maps logical `(row, col)` grid cells onto canvas pixel coordinates,"]
#![doc = "finds the next unoccupied cell for a new booth and provides the grid, single-row"]
#![doc = "and single-column auto-arrange strategies used by bulk rearrangement."]
#![doc = ""]
#![doc = "Everything here is synchronous and side-effect free; persisting the results is"]
#![doc = "the caller's job."]

pub mod arrange;
pub mod error;
pub mod grid;

pub use arrange::{ArrangeStrategy, arrange};
pub use error::LayoutError;
pub use grid::{BoothSize, Canvas, FloorGrid, GridPosition, PixelCoordinate};
