use std::collections::HashSet;

use floorplan_layout::grid::{find_next_available_cell, occupied_cells};
use floorplan_layout::{ArrangeStrategy, BoothSize, Canvas, FloorGrid, GridPosition, PixelCoordinate, arrange};

fn main() {
    // 10 columns of 60x60 cells, 20px apart, first cell at (100, 100)
    let grid = FloorGrid::default();
    println!("{}", grid);

    // Booths already on the floor: two with a logical cell, one placed by hand
    let placements = vec![
        (Some(GridPosition::new(0, 0)), None),
        (Some(GridPosition::new(0, 1)), None),
        (None, Some(PixelCoordinate::new(341.0, 102.0))),
    ];
    let occupied: HashSet<GridPosition> = occupied_cells(&grid, placements);
    println!("\nOccupied cells:");
    let mut sorted: Vec<_> = occupied.iter().copied().collect();
    sorted.sort();
    for cell in &sorted {
        println!("  {} {} -> {}", grid.grid_label(*cell), cell, grid.grid_to_coordinates(*cell));
    }

    match find_next_available_cell(&grid, &occupied) {
        Some(cell) => println!(
            "\nNext booth goes to {} {} at {}",
            grid.grid_label(cell),
            cell,
            grid.grid_to_coordinates(cell)
        ),
        None => println!("\nNo available grid positions"),
    }

    // Rearrange seven booths with every strategy
    let booths: Vec<String> = (1..=7).map(|i| format!("Booth {}", i)).collect();
    let canvas = Canvas::default();
    for strategy in ArrangeStrategy::ALL {
        println!("\n{} arrangement on {}x{}:", strategy, canvas.width, canvas.height);
        for (name, p) in arrange(strategy, &booths, canvas, BoothSize::default()) {
            println!("  {:<8} {}", name, p);
        }
    }
}
