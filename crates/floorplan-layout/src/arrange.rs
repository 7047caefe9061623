//! Auto-arrange strategies.
//!
//! Each strategy takes the ordered booth ids of one event and returns a fresh
//! top-left coordinate for every booth, spreading them evenly over the
//! canvas. Existing positions are not inputs. The result keeps the input
//! order, so booth `i` in gets assignment `i` out.

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;
use crate::grid::{BoothSize, Canvas, PixelCoordinate};

/// The bulk layout applied to all booths of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrangeStrategy {
    /// Near-square grid, `ceil(sqrt(N))` columns.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "grid"))]
    Grid,
    /// All booths on one horizontal line.
    #[cfg_attr(feature = "serde", serde(rename = "row"))]
    SingleRow,
    /// All booths stacked in one vertical line.
    #[cfg_attr(feature = "serde", serde(rename = "column"))]
    SingleColumn,
}

impl ArrangeStrategy {
    /// All strategies, in menu order.
    pub const ALL: [ArrangeStrategy; 3] = [
        ArrangeStrategy::Grid,
        ArrangeStrategy::SingleRow,
        ArrangeStrategy::SingleColumn,
    ];

    /// Short name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrangeStrategy::Grid => "grid",
            ArrangeStrategy::SingleRow => "row",
            ArrangeStrategy::SingleColumn => "column",
        }
    }
}

impl fmt::Display for ArrangeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrangeStrategy {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ArrangeStrategy::Grid),
            "row" | "single-row" | "single_row" => Ok(ArrangeStrategy::SingleRow),
            "column" | "single-column" | "single_column" => Ok(ArrangeStrategy::SingleColumn),
            _ => Err(LayoutError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Runs `strategy` over `ids`.
pub fn arrange<Id: Clone>(
    strategy: ArrangeStrategy,
    ids: &[Id],
    canvas: Canvas,
    booth: BoothSize,
) -> Vec<(Id, PixelCoordinate)> {
    match strategy {
        ArrangeStrategy::Grid => arrange_grid(ids, canvas, booth),
        ArrangeStrategy::SingleRow => arrange_single_row(ids, canvas, booth),
        ArrangeStrategy::SingleColumn => arrange_single_column(ids, canvas, booth),
    }
}

/// Column and row counts of the grid arrangement for `n` booths.
///
/// `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`. None when `n` is zero.
pub fn grid_dimensions(n: usize) -> Option<(usize, usize)> {
    if n == 0 {
        return None;
    }
    let root = n.isqrt();
    let cols = if root * root == n { root } else { root + 1 };
    Some((cols, n.div_ceil(cols)))
}

/// Places booths on a near-square grid that exactly fills the canvas.
///
/// The canvas is split into `cols x rows` equal slots and each booth is
/// centred in its slot. A booth bigger than its slot is pinned to the slot's
/// top-left corner.
pub fn arrange_grid<Id: Clone>(ids: &[Id], canvas: Canvas, booth: BoothSize) -> Vec<(Id, PixelCoordinate)> {
    let Some((cols, rows)) = grid_dimensions(ids.len()) else {
        return Vec::new();
    };
    let slot_w = canvas.width / cols as f32;
    let slot_h = canvas.height / rows as f32;
    let inset_x = centring_inset(slot_w, booth.width);
    let inset_y = centring_inset(slot_h, booth.height);

    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let (row, col) = (i / cols, i % cols);
            let p = PixelCoordinate::new(col as f32 * slot_w + inset_x, row as f32 * slot_h + inset_y);
            (id.clone(), p)
        })
        .collect()
}

/// Lays booths out left to right in equal slots across the canvas width,
/// vertically centred.
pub fn arrange_single_row<Id: Clone>(ids: &[Id], canvas: Canvas, booth: BoothSize) -> Vec<(Id, PixelCoordinate)> {
    if ids.is_empty() {
        return Vec::new();
    }
    let slot = canvas.width / ids.len() as f32;
    let inset = centring_inset(slot, booth.width);
    let y = centring_inset(canvas.height, booth.height);

    ids.iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), PixelCoordinate::new(i as f32 * slot + inset, y)))
        .collect()
}

/// Stacks booths top to bottom in equal slots down the canvas height,
/// horizontally centred.
pub fn arrange_single_column<Id: Clone>(ids: &[Id], canvas: Canvas, booth: BoothSize) -> Vec<(Id, PixelCoordinate)> {
    if ids.is_empty() {
        return Vec::new();
    }
    let slot = canvas.height / ids.len() as f32;
    let inset = centring_inset(slot, booth.height);
    let x = centring_inset(canvas.width, booth.width);

    ids.iter()
        .enumerate()
        .map(|(i, id)| (id.clone(), PixelCoordinate::new(x, i as f32 * slot + inset)))
        .collect()
}

// Offset that centres `extent` inside `slot`, zero when it does not fit.
fn centring_inset(slot: f32, extent: f32) -> f32 {
    ((slot - extent) / 2.0).max(0.0)
}
