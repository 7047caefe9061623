use anyhow::Context;
use floorplan_core::{
    ArrangeReport, Booth, BoothStore, CoreError, EventId, InMemoryBoothStore, NewBooth, Settings, bulk_arrange,
    create_booth,
};
use floorplan_layout::{ArrangeStrategy, BoothSize, Canvas, FloorGrid};
use tokio::runtime::Runtime;
use tracing::{info, warn};

/// One event's floor plan, backed by its own store and runtime.
///
/// The render loop is synchronous; workflow calls block on the runtime
/// between frames.
pub struct FloorplanSession {
    runtime: Runtime,
    store: InMemoryBoothStore,
    event: EventId,
    pub event_name: String,
    pub grid: FloorGrid,
    pub canvas: Canvas,
    pub booth_size: BoothSize,
    pub booths: Vec<Booth>,
    pub status: String,
}

impl FloorplanSession {
    /// Creates the session and seeds `demo.booth_count` exhibitors, then
    /// applies the configured arrangement.
    pub fn seed(settings: &Settings) -> anyhow::Result<Self> {
        let runtime = Runtime::new().context("starting tokio runtime")?;
        let mut session = FloorplanSession {
            runtime,
            store: InMemoryBoothStore::new(),
            event: EventId::new_v4(),
            event_name: settings.demo.event_name.clone(),
            grid: settings.floor_grid()?,
            canvas: settings.canvas(),
            booth_size: settings.booth_size(),
            booths: Vec::new(),
            status: String::new(),
        };
        info!(event = %session.event, name = %session.event_name, grid = %session.grid, "Seeding demo event");

        for _ in 0..settings.demo.booth_count {
            match session.add_booth() {
                Ok(()) => {}
                Err(CoreError::NoAvailableGridPosition) => break,
                Err(e) => return Err(e).context("creating demo booth"),
            }
        }
        session.rearrange(settings.demo.strategy)?;
        Ok(session)
    }

    /// Auto-assigns one more exhibitor to the next free cell.
    ///
    /// A full grid is reported in the status line and returned to the caller.
    pub fn add_booth(&mut self) -> Result<(), CoreError> {
        let name = format!("Exhibitor {}", self.booths.len() + 1);
        let result = self
            .runtime
            .block_on(create_booth(&self.store, &self.grid, NewBooth::new(self.event, name)));
        match result {
            Ok(booth) => {
                self.status = format!(
                    "{} placed at {}",
                    booth.name,
                    booth.grid_label(&self.grid).unwrap_or_default()
                );
                self.refresh()
            }
            Err(e) => {
                warn!(error = %e, "Booth was not created");
                self.status = format!("Could not add booth: {}", e);
                Err(e)
            }
        }
    }

    /// Re-lays out every booth of the event with `strategy`.
    pub fn rearrange(&mut self, strategy: ArrangeStrategy) -> Result<ArrangeReport, CoreError> {
        let report = self.runtime.block_on(bulk_arrange(
            &self.store,
            self.event,
            strategy,
            self.canvas,
            self.booth_size,
        ))?;
        self.status = report.to_string();
        self.refresh()?;
        Ok(report)
    }

    fn refresh(&mut self) -> Result<(), CoreError> {
        self.booths = self.runtime.block_on(self.store.list_booths(self.event))?;
        Ok(())
    }
}
