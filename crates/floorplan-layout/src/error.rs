//! This module defines the error types used by the `floorplan-layout` crate.

use thiserror::Error;

/// Error type for layout operations.
///
/// Only construction of layout parameters can fail; mapping, searching and
/// arranging are total once a [`FloorGrid`](crate::FloorGrid) exists.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Returned when the column count or the cell size is not positive.
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(&'static str),
    /// Returned when the spacing between cells is negative or not finite.
    #[error("Invalid grid spacing: {0}")]
    InvalidSpacing(&'static str),
    /// Returned when the grid origin is not a finite point.
    #[error("Invalid grid origin: {0}")]
    InvalidOrigin(&'static str),
    /// Returned when the booth capacity is zero or too large to address.
    #[error("Invalid grid capacity: {0}")]
    InvalidCapacity(&'static str),
    /// Returned when an arrange strategy name is not recognised.
    #[error("Unknown arrange strategy `{0}` (expected grid, row or column)")]
    UnknownStrategy(String),
}
