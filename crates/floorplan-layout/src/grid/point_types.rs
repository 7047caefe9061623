//! Point and size types shared by the grid and the arrange strategies.

use std::fmt;

/// A logical cell in the floor grid (row and column indices).
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPosition {
    /// The row index, counted from the top of the floor plan.
    pub row: usize,
    /// The column index, counted from the left of the floor plan.
    pub col: usize,
}

impl GridPosition {
    /// Creates a new `GridPosition`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Top-left corner of a booth's bounding box on the canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelCoordinate {
    /// Horizontal offset from the canvas' left edge.
    pub x: f32,
    /// Vertical offset from the canvas' top edge.
    pub y: f32,
}

impl PixelCoordinate {
    /// Creates a new `PixelCoordinate`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Footprint of a single booth.
///
/// Every booth on a floor plan shares this size; it is also the size of a
/// grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoothSize {
    /// Width of the booth box.
    pub width: f32,
    /// Height of the booth box.
    pub height: f32,
}

impl BoothSize {
    /// Creates a new `BoothSize`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for BoothSize {
    fn default() -> Self {
        Self::new(60.0, 60.0)
    }
}

/// The drawable area booths are laid out on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    /// Canvas width.
    pub width: f32,
    /// Canvas height.
    pub height: f32,
}

impl Canvas {
    /// Creates a new `Canvas`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns true if the whole box of `size` at `p` lies on the canvas.
    pub fn contains(&self, p: PixelCoordinate, size: BoothSize) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x + size.width <= self.width && p.y + size.height <= self.height
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
