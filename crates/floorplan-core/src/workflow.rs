//! Booth-creation and bulk-rearrange workflows.
//!
//! Both run the pure layout functions and then persist through a
//! [`BoothStore`]. Bulk updates are sent one booth at a time with no
//! atomicity across the batch; failures are counted and reported rather than
//! aborting the remaining updates.

use std::fmt;

use floorplan_layout::grid::{find_next_available_cell, occupied_cells};
use floorplan_layout::{ArrangeStrategy, BoothSize, Canvas, FloorGrid, arrange};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::booth::{Booth, BoothId, EventId, NewBooth};
use crate::error::CoreError;
use crate::store::BoothStore;

/// How often `create_booth` re-reads the floor after losing a cell to a
/// concurrent insert.
const MAX_PLACEMENT_ATTEMPTS: usize = 5;

/// Creates a booth in the first free grid cell of its event.
///
/// Fails with [`CoreError::NoAvailableGridPosition`] when the event's grid is
/// full; nothing is inserted in that case. If the store reports the chosen
/// cell as taken by a concurrent insert, the free cell is searched again, up
/// to `MAX_PLACEMENT_ATTEMPTS` times before the conflict is returned.
pub async fn create_booth<S: BoothStore>(store: &S, grid: &FloorGrid, new: NewBooth) -> Result<Booth, CoreError> {
    let name = new.validate()?.to_string();
    let event = new.event_id;

    async move {
        let mut attempt = 1;
        loop {
            let existing = store.list_booths(event).await?;
            let occupied = occupied_cells(grid, existing.iter().map(Booth::placement));

            let Some(cell) = find_next_available_cell(grid, &occupied) else {
                error!(booths = existing.len(), capacity = grid.capacity(), "No available grid positions");
                return Err(CoreError::NoAvailableGridPosition);
            };
            let position = grid.grid_to_coordinates(cell);

            let booth = Booth {
                id: Uuid::new_v4(),
                event_id: event,
                name: name.clone(),
                grid: Some(cell),
                position: Some(position),
            };
            match store.insert_booth(booth).await {
                Ok(booth) => {
                    info!(booth = %booth.id, cell = %grid.grid_label(cell), %position, "Booth placed");
                    return Ok(booth);
                }
                Err(CoreError::CellTaken { .. }) if attempt < MAX_PLACEMENT_ATTEMPTS => {
                    warn!(cell = %grid.grid_label(cell), attempt, "Grid cell taken concurrently, searching again");
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
    .instrument(info_span!("create_booth", %event))
    .await
}

/// Outcome of a bulk rearrange.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangeReport {
    pub strategy: ArrangeStrategy,
    pub succeeded: usize,
    /// Booths whose update failed, with the reason.
    pub failed: Vec<(BoothId, String)>,
}

impl ArrangeReport {
    fn new(strategy: ArrangeStrategy) -> Self {
        Self { strategy, succeeded: 0, failed: Vec::new() }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for ArrangeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} arrange: arranged {} of {} booths ({} failed)",
            self.strategy,
            self.succeeded,
            self.total(),
            self.failed.len()
        )
    }
}

/// Recomputes the position of every booth of `event` with `strategy` and
/// persists each coordinate individually.
///
/// Only a failure to list the booths is an error; per-booth write failures
/// land in the returned report. An event without booths yields an empty,
/// complete report.
pub async fn bulk_arrange<S: BoothStore>(
    store: &S,
    event: EventId,
    strategy: ArrangeStrategy,
    canvas: Canvas,
    booth_size: BoothSize,
) -> Result<ArrangeReport, CoreError> {
    async move {
        let booths = store.list_booths(event).await?;
        let ids: Vec<BoothId> = booths.iter().map(|b| b.id).collect();
        let assignment = arrange(strategy, &ids, canvas, booth_size);

        let mut report = ArrangeReport::new(strategy);
        for (id, position) in assignment {
            match store.update_position(id, position).await {
                Ok(()) => report.succeeded += 1,
                Err(e) => {
                    warn!(booth = %id, error = %e, "Failed to persist booth position");
                    report.failed.push((id, e.to_string()));
                }
            }
        }

        if report.is_complete() {
            info!(arranged = report.succeeded, "{}", report);
        } else {
            warn!(arranged = report.succeeded, failed = report.failed.len(), "{}", report);
        }
        Ok(report)
    }
    .instrument(info_span!("bulk_arrange", %event, %strategy))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryBoothStore;
    use floorplan_layout::{GridPosition, PixelCoordinate};
    use std::collections::HashSet;

    fn small_grid() -> FloorGrid {
        FloorGrid::new(2, BoothSize::default(), 20.0, 20.0, PixelCoordinate::new(100.0, 100.0), 4).unwrap()
    }

    #[tokio::test]
    async fn test_create_booth_assigns_cells_in_row_major_order() {
        let store = InMemoryBoothStore::new();
        let grid = FloorGrid::default();
        let event = Uuid::new_v4();

        let mut cells = Vec::new();
        for i in 0..3 {
            let booth = create_booth(&store, &grid, NewBooth::new(event, format!("Booth {i}"))).await.unwrap();
            cells.push(booth.grid.unwrap());
        }
        assert_eq!(cells, vec![GridPosition::new(0, 0), GridPosition::new(0, 1), GridPosition::new(0, 2)]);

        let third = store.list_booths(event).await.unwrap().pop().unwrap();
        assert_eq!(third.position, Some(PixelCoordinate::new(260.0, 100.0)));
        assert_eq!(third.name, "Booth 2");
    }

    #[tokio::test]
    async fn test_create_booth_is_scoped_to_event() {
        let store = InMemoryBoothStore::new();
        let grid = FloorGrid::default();
        let (expo, camp) = (Uuid::new_v4(), Uuid::new_v4());
        create_booth(&store, &grid, NewBooth::new(expo, "a")).await.unwrap();
        let other = create_booth(&store, &grid, NewBooth::new(camp, "b")).await.unwrap();
        assert_eq!(other.grid, Some(GridPosition::new(0, 0)));
    }

    #[tokio::test]
    async fn test_create_booth_respects_hand_placed_booths() {
        let store = InMemoryBoothStore::new();
        let grid = FloorGrid::default();
        let event = Uuid::new_v4();
        // Dropped by hand onto cell (0, 0) without a logical cell
        store
            .insert_booth(Booth {
                id: Uuid::new_v4(),
                event_id: event,
                name: "Hand placed".to_string(),
                grid: None,
                position: Some(PixelCoordinate::new(103.0, 98.0)),
            })
            .await
            .unwrap();

        let booth = create_booth(&store, &grid, NewBooth::new(event, "Auto")).await.unwrap();
        assert_eq!(booth.grid, Some(GridPosition::new(0, 1)));
    }

    #[tokio::test]
    async fn test_create_booth_reports_full_grid() {
        let store = InMemoryBoothStore::new();
        let grid = small_grid();
        let event = Uuid::new_v4();
        for i in 0..4 {
            create_booth(&store, &grid, NewBooth::new(event, format!("Booth {i}"))).await.unwrap();
        }

        let err = create_booth(&store, &grid, NewBooth::new(event, "One too many")).await.unwrap_err();
        assert!(matches!(err, CoreError::NoAvailableGridPosition));
        assert_eq!(err.to_string(), "no available grid positions");
        assert_eq!(store.len(), 4);
    }

    #[tokio::test]
    async fn test_create_booth_validates_before_touching_store() {
        let store = InMemoryBoothStore::new();
        let err = create_booth(&store, &FloorGrid::default(), NewBooth::new(Uuid::new_v4(), " ")).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation { field: "name", .. }));
        assert!(store.is_empty());
    }

    /// Hands control back to the runtime between reading the floor and
    /// inserting, so overlapping `create_booth` calls see the same free cell.
    #[derive(Clone, Default)]
    struct YieldingStore {
        inner: InMemoryBoothStore,
    }

    impl BoothStore for YieldingStore {
        async fn list_booths(&self, event: EventId) -> Result<Vec<Booth>, CoreError> {
            let booths = self.inner.list_booths(event).await?;
            tokio::task::yield_now().await;
            Ok(booths)
        }

        async fn insert_booth(&self, booth: Booth) -> Result<Booth, CoreError> {
            self.inner.insert_booth(booth).await
        }

        async fn update_position(&self, id: BoothId, position: PixelCoordinate) -> Result<(), CoreError> {
            self.inner.update_position(id, position).await
        }
    }

    #[tokio::test]
    async fn test_overlapping_creates_get_distinct_cells() {
        let store = YieldingStore::default();
        let grid = FloorGrid::default();
        let event = Uuid::new_v4();

        let (a, b) = tokio::join!(
            create_booth(&store, &grid, NewBooth::new(event, "a")),
            create_booth(&store, &grid, NewBooth::new(event, "b")),
        );
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_ne!(a.grid, b.grid);
        let cells: HashSet<_> = [a.grid.unwrap(), b.grid.unwrap()].into_iter().collect();
        assert_eq!(cells, HashSet::from([GridPosition::new(0, 0), GridPosition::new(0, 1)]));
        assert_eq!(store.inner.len(), 2);
    }

    #[tokio::test]
    async fn test_overlapping_create_on_last_cell_reports_full_grid() {
        let store = YieldingStore::default();
        let grid = small_grid();
        let event = Uuid::new_v4();
        for i in 0..3 {
            create_booth(&store, &grid, NewBooth::new(event, format!("Booth {i}"))).await.unwrap();
        }

        let (a, b) = tokio::join!(
            create_booth(&store, &grid, NewBooth::new(event, "a")),
            create_booth(&store, &grid, NewBooth::new(event, "b")),
        );
        // One wins the last cell, the other re-reads a full floor
        let outcomes = [a, b];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes.iter().any(|r| matches!(r, Err(CoreError::NoAvailableGridPosition))));
        assert_eq!(store.inner.len(), 4);
    }

    #[tokio::test]
    async fn test_bulk_arrange_updates_every_booth() {
        let store = InMemoryBoothStore::new();
        let grid = FloorGrid::default();
        let event = Uuid::new_v4();
        for i in 0..10 {
            create_booth(&store, &grid, NewBooth::new(event, format!("Booth {i}"))).await.unwrap();
        }

        let report = bulk_arrange(&store, event, ArrangeStrategy::Grid, Canvas::default(), BoothSize::default())
            .await
            .unwrap();
        assert!(report.is_complete());
        assert_eq!(report.succeeded, 10);
        assert_eq!(report.to_string(), "grid arrange: arranged 10 of 10 booths (0 failed)");

        let booths = store.list_booths(event).await.unwrap();
        let positions: HashSet<_> = booths
            .iter()
            .map(|b| {
                let p = b.position.unwrap();
                (p.x.to_bits(), p.y.to_bits())
            })
            .collect();
        assert_eq!(positions.len(), 10);
        // 10 booths -> 4 columns of 300px, 3 rows; first booth centred in its slot
        assert_eq!(booths[0].position, Some(PixelCoordinate::new(120.0, (800.0 / 3.0 - 60.0) / 2.0)));
    }

    #[tokio::test]
    async fn test_bulk_arrange_reports_partial_failure() {
        let store = InMemoryBoothStore::new();
        let grid = FloorGrid::default();
        let event = Uuid::new_v4();
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(create_booth(&store, &grid, NewBooth::new(event, format!("Booth {i}"))).await.unwrap().id);
        }
        store.fail_updates_for(ids[1]);
        store.fail_updates_for(ids[3]);

        let report = bulk_arrange(&store, event, ArrangeStrategy::SingleRow, Canvas::default(), BoothSize::default())
            .await
            .unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.succeeded, 3);
        assert_eq!(report.total(), 5);
        let failed: Vec<_> = report.failed.iter().map(|(id, _)| *id).collect();
        assert_eq!(failed, vec![ids[1], ids[3]]);
        assert_eq!(report.to_string(), "row arrange: arranged 3 of 5 booths (2 failed)");

        // Updates after a failure still went through
        let last = store.booth(ids[4]).unwrap();
        assert_eq!(last.position, Some(PixelCoordinate::new(4.0 * 240.0 + 90.0, 370.0)));
    }

    #[tokio::test]
    async fn test_bulk_arrange_empty_event() {
        let store = InMemoryBoothStore::new();
        for strategy in ArrangeStrategy::ALL {
            let report = bulk_arrange(&store, Uuid::new_v4(), strategy, Canvas::default(), BoothSize::default())
                .await
                .unwrap();
            assert_eq!(report, ArrangeReport::new(strategy));
            assert!(report.is_complete());
        }
    }
}
