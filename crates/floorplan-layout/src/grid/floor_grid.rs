//! Floor grid: the fixed-column virtual grid booths are placed on.
//!
//! A [`FloorGrid`] maps a logical [`GridPosition`] onto the top-left
//! [`PixelCoordinate`] of the booth occupying it through a fixed affine
//! transform (origin + cell size + spacing, per axis). Rows are unbounded in
//! principle; `max_booths` only bounds the search for a free cell.

use std::fmt;

use crate::error::LayoutError;
use super::{BoothSize, GridPosition, PixelCoordinate};

/// Layout constants for the booth grid of one floor plan.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorGrid {
    /// Number of columns per row
    columns: usize,
    /// Size of a single cell, identical to the booth footprint
    cell: BoothSize,
    /// Horizontal gap between neighbouring cells
    spacing_x: f32,
    /// Vertical gap between neighbouring cells
    spacing_y: f32,
    /// Pixel coordinate of cell (0, 0)
    origin: PixelCoordinate,
    /// Expected maximum number of booths, bounds the free-cell search
    max_booths: usize,
}

impl FloorGrid {
    /// Creates a new FloorGrid.
    ///
    /// # Arguments
    /// * `columns` - Number of columns per row
    /// * `cell` - Width and height of one cell (the booth footprint)
    /// * `spacing_x` - Horizontal gap between cells
    /// * `spacing_y` - Vertical gap between cells
    /// * `origin` - Pixel coordinate of the top-left corner of cell (0, 0)
    /// * `max_booths` - Expected maximum number of booths on the floor
    ///
    /// # Returns
    /// * `Result<Self, LayoutError>` - The grid or an error if a parameter is invalid
    pub fn new(
        columns: usize,
        cell: BoothSize,
        spacing_x: f32,
        spacing_y: f32,
        origin: PixelCoordinate,
        max_booths: usize,
    ) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::InvalidDimensions("Column count must be non-zero"));
        }
        if !(cell.width > 0.0 && cell.height > 0.0) || !cell.width.is_finite() || !cell.height.is_finite() {
            return Err(LayoutError::InvalidDimensions("Cell width and height must be positive"));
        }
        if !(spacing_x >= 0.0 && spacing_y >= 0.0) || !spacing_x.is_finite() || !spacing_y.is_finite() {
            return Err(LayoutError::InvalidSpacing("Spacing must be non-negative"));
        }
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(LayoutError::InvalidOrigin("Origin must be a finite point"));
        }
        if max_booths == 0 {
            return Err(LayoutError::InvalidCapacity("Maximum booth count must be non-zero"));
        }
        if max_booths.div_ceil(columns).checked_mul(columns).is_none() {
            return Err(LayoutError::InvalidCapacity("Grid capacity too large, would cause overflow"));
        }

        Ok(FloorGrid {
            columns,
            cell,
            spacing_x,
            spacing_y,
            origin,
            max_booths,
        })
    }

    /// Number of columns per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The cell (and booth) footprint.
    pub fn cell_size(&self) -> BoothSize {
        self.cell
    }

    /// Pixel coordinate of cell (0, 0).
    pub fn origin(&self) -> PixelCoordinate {
        self.origin
    }

    /// Expected maximum number of booths.
    pub fn max_booths(&self) -> usize {
        self.max_booths
    }

    /// Number of rows scanned when looking for a free cell.
    pub fn max_rows(&self) -> usize {
        self.max_booths.div_ceil(self.columns)
    }

    /// Total number of cells in the bounded search space.
    pub fn capacity(&self) -> usize {
        self.max_rows() * self.columns
    }

    /// Distance between the left edges of two neighbouring columns.
    fn pitch_x(&self) -> f32 {
        self.cell.width + self.spacing_x
    }

    /// Distance between the top edges of two neighbouring rows.
    fn pitch_y(&self) -> f32 {
        self.cell.height + self.spacing_y
    }

    /// Converts a grid cell to the pixel coordinate of its top-left corner.
    ///
    /// Total for any cell, including cells beyond the search bound.
    pub fn grid_to_coordinates(&self, pos: GridPosition) -> PixelCoordinate {
        PixelCoordinate::new(
            self.origin.x + pos.col as f32 * self.pitch_x(),
            self.origin.y + pos.row as f32 * self.pitch_y(),
        )
    }

    /// Converts a pixel coordinate back to the nearest grid cell.
    /// Returns None if the point lies outside the grid's columns or above/left
    /// of the first cell by more than half a pitch.
    ///
    /// # Arguments
    /// * `p` - Top-left corner of a booth box
    ///
    /// # Returns
    /// * `Option<GridPosition>` - Nearest cell if within the grid, None otherwise
    pub fn coordinates_to_grid(&self, p: PixelCoordinate) -> Option<GridPosition> {
        let col_f = ((p.x - self.origin.x) / self.pitch_x()).round();
        let row_f = ((p.y - self.origin.y) / self.pitch_y()).round();

        if !col_f.is_finite() || !row_f.is_finite() || col_f < 0.0 || row_f < 0.0 {
            return None;
        }
        if col_f >= self.columns as f32 {
            return None;
        }

        Some(GridPosition::new(row_f as usize, col_f as usize))
    }

    /// Human readable cell label: spreadsheet-style row letters followed by
    /// the 1-based column, e.g. `A1`, `B10`, `AA3`.
    pub fn grid_label(&self, pos: GridPosition) -> String {
        format!("{}{}", row_letters(pos.row), pos.col + 1)
    }

    /// Returns true if `pos` is inside the bounded search space.
    pub fn in_bounds(&self, pos: GridPosition) -> bool {
        pos.col < self.columns && pos.row < self.max_rows()
    }
}

impl Default for FloorGrid {
    fn default() -> Self {
        FloorGrid {
            columns: 10,
            cell: BoothSize::default(),
            spacing_x: 20.0,
            spacing_y: 20.0,
            origin: PixelCoordinate::new(100.0, 100.0),
            max_booths: 1000,
        }
    }
}

impl fmt::Display for FloorGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FloorGrid ({} cols x {} rows, cell {:.0}x{:.0}, spacing {:.0}/{:.0}, origin {})",
            self.columns,
            self.max_rows(),
            self.cell.width,
            self.cell.height,
            self.spacing_x,
            self.spacing_y,
            self.origin
        )
    }
}

// A..Z, AA..AZ, BA.. (bijective base 26)
fn row_letters(row: usize) -> String {
    let mut letters = Vec::new();
    let mut n = row;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> FloorGrid {
        FloorGrid::new(
            10,
            BoothSize::new(60.0, 60.0),
            20.0,
            20.0,
            PixelCoordinate::new(100.0, 100.0),
            1000,
        )
        .unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = grid();
        assert_eq!(grid.columns(), 10);
        assert_eq!(grid.max_rows(), 100);
        assert_eq!(grid.capacity(), 1000);
        assert_eq!(grid, FloorGrid::default());
    }

    #[test]
    fn test_capacity_rounds_up_partial_row() {
        let grid = FloorGrid::new(10, BoothSize::default(), 0.0, 0.0, PixelCoordinate::default(), 95).unwrap();
        assert_eq!(grid.max_rows(), 10);
        assert_eq!(grid.capacity(), 100);
    }

    #[test]
    fn test_invalid_creation() {
        let origin = PixelCoordinate::default();
        let cell = BoothSize::default();
        assert!(matches!(
            FloorGrid::new(0, cell, 20.0, 20.0, origin, 1000),
            Err(LayoutError::InvalidDimensions(_))
        ));
        assert!(matches!(
            FloorGrid::new(10, BoothSize::new(0.0, 60.0), 20.0, 20.0, origin, 1000),
            Err(LayoutError::InvalidDimensions(_))
        ));
        assert!(matches!(
            FloorGrid::new(10, BoothSize::new(60.0, f32::NAN), 20.0, 20.0, origin, 1000),
            Err(LayoutError::InvalidDimensions(_))
        ));
        assert!(matches!(
            FloorGrid::new(10, cell, -1.0, 20.0, origin, 1000),
            Err(LayoutError::InvalidSpacing(_))
        ));
        assert!(matches!(
            FloorGrid::new(10, cell, 20.0, 20.0, PixelCoordinate::new(f32::INFINITY, 0.0), 1000),
            Err(LayoutError::InvalidOrigin(_))
        ));
        assert!(matches!(
            FloorGrid::new(10, cell, 20.0, 20.0, origin, 0),
            Err(LayoutError::InvalidCapacity(_))
        ));
        assert!(matches!(
            FloorGrid::new(7, cell, 20.0, 20.0, origin, usize::MAX),
            Err(LayoutError::InvalidCapacity(_))
        ));
    }

    #[test]
    fn test_origin_cell_maps_to_origin() {
        let grid = grid();
        assert_eq!(grid.grid_to_coordinates(GridPosition::new(0, 0)), PixelCoordinate::new(100.0, 100.0));
    }

    #[test]
    fn test_affine_mapping() {
        let grid = grid();
        // Next row down: y advances by cell height + vertical spacing
        assert_eq!(grid.grid_to_coordinates(GridPosition::new(1, 0)), PixelCoordinate::new(100.0, 180.0));
        assert_eq!(grid.grid_to_coordinates(GridPosition::new(0, 2)), PixelCoordinate::new(260.0, 100.0));
        assert_eq!(grid.grid_to_coordinates(GridPosition::new(3, 9)), PixelCoordinate::new(820.0, 340.0));
        // Beyond the search bound the transform still applies
        assert_eq!(grid.grid_to_coordinates(GridPosition::new(200, 0)), PixelCoordinate::new(100.0, 16100.0));
    }

    #[test]
    fn test_inverse_mapping() {
        let grid = grid();
        for row in 0..5 {
            for col in 0..10 {
                let cell = GridPosition::new(row, col);
                assert_eq!(grid.coordinates_to_grid(grid.grid_to_coordinates(cell)), Some(cell));
            }
        }
        // Slightly off-grid points snap to the nearest cell
        assert_eq!(grid.coordinates_to_grid(PixelCoordinate::new(265.0, 97.0)), Some(GridPosition::new(0, 2)));
        // Far above/left of the origin, or past the last column
        assert_eq!(grid.coordinates_to_grid(PixelCoordinate::new(0.0, 100.0)), None);
        assert_eq!(grid.coordinates_to_grid(PixelCoordinate::new(100.0, 0.0)), None);
        assert_eq!(grid.coordinates_to_grid(PixelCoordinate::new(900.0, 100.0)), None);
        assert_eq!(grid.coordinates_to_grid(PixelCoordinate::new(f32::NAN, 100.0)), None);
    }

    #[test]
    fn test_grid_label() {
        let grid = grid();
        assert_eq!(grid.grid_label(GridPosition::new(0, 0)), "A1");
        assert_eq!(grid.grid_label(GridPosition::new(1, 9)), "B10");
        assert_eq!(grid.grid_label(GridPosition::new(25, 0)), "Z1");
        assert_eq!(grid.grid_label(GridPosition::new(26, 2)), "AA3");
        assert_eq!(grid.grid_label(GridPosition::new(27, 0)), "AB1");
        assert_eq!(grid.grid_label(GridPosition::new(701, 0)), "ZZ1");
        assert_eq!(grid.grid_label(GridPosition::new(702, 0)), "AAA1");
    }

    #[test]
    fn test_in_bounds() {
        let grid = grid();
        assert!(grid.in_bounds(GridPosition::new(99, 9)));
        assert!(!grid.in_bounds(GridPosition::new(100, 0)));
        assert!(!grid.in_bounds(GridPosition::new(0, 10)));
    }

    #[test]
    fn test_display() {
        let display_str = format!("{}", grid());
        assert!(display_str.contains("FloorGrid (10 cols x 100 rows"));
        assert!(display_str.contains("origin (100.0, 100.0)"));
    }
}
