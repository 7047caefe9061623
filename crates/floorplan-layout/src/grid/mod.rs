//! Grid-related functionality for booth placement.
//!
//! This module provides the floor grid (cell to pixel mapping and labels)
//! and the next-free-cell search used when a booth is auto-assigned.

pub mod floor_grid;
pub mod placement;
pub mod point_types;

pub use floor_grid::FloorGrid;
pub use placement::{find_next_available_cell, occupied_cells};
pub use point_types::{BoothSize, Canvas, GridPosition, PixelCoordinate};
