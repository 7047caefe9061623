//! Free-cell search for auto-assigning new booths.

use std::collections::HashSet;

use tracing::debug;

use super::{FloorGrid, GridPosition, PixelCoordinate};

/// Finds the first unoccupied cell in row-major order, starting at (0, 0).
///
/// The scan covers `grid.max_rows()` rows of `grid.columns()` cells. Cells in
/// `occupied` outside that space are ignored. Returns None when every cell in
/// the bounded space is taken; callers report that as "no available grid
/// positions" instead of inserting.
///
/// # Arguments
/// * `grid` - The floor grid being searched
/// * `occupied` - Cells already holding a booth
///
/// # Returns
/// * `Option<GridPosition>` - The first free cell, None if the grid is full
pub fn find_next_available_cell(grid: &FloorGrid, occupied: &HashSet<GridPosition>) -> Option<GridPosition> {
    let columns = grid.columns();
    let free = (0..grid.max_rows())
        .flat_map(|row| (0..columns).map(move |col| GridPosition::new(row, col)))
        .find(|cell| !occupied.contains(cell));

    if free.is_none() {
        debug!(capacity = grid.capacity(), occupied = occupied.len(), "Floor grid exhausted");
    }
    free
}

/// Builds the occupied set from booth placements.
///
/// Each item is a booth's `(grid cell, pixel position)` pair. The logical cell
/// wins when present; otherwise the pixel position is snapped back onto the
/// grid. Booths with neither, or whose position falls off the grid, occupy
/// nothing.
pub fn occupied_cells<I>(grid: &FloorGrid, placements: I) -> HashSet<GridPosition>
where
    I: IntoIterator<Item = (Option<GridPosition>, Option<PixelCoordinate>)>,
{
    placements
        .into_iter()
        .filter_map(|(cell, position)| cell.or_else(|| position.and_then(|p| grid.coordinates_to_grid(p))))
        .collect()
}
