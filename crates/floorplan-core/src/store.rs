use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use floorplan_layout::PixelCoordinate;
use parking_lot::RwLock;
use tracing::debug;

use crate::booth::{Booth, BoothId, EventId};
use crate::error::CoreError;

/// Persistence seam for booth records.
///
/// Workflows receive the store explicitly; there is no process-wide client.
pub trait BoothStore {
    /// All booths of `event`, in insertion order.
    fn list_booths(&self, event: EventId) -> impl Future<Output = Result<Vec<Booth>, CoreError>> + Send;

    /// Persists a new booth and returns the stored record.
    ///
    /// Fails with [`CoreError::CellTaken`] when another booth of the same
    /// event already holds the booth's grid cell.
    fn insert_booth(&self, booth: Booth) -> impl Future<Output = Result<Booth, CoreError>> + Send;

    /// Writes one booth's pixel position.
    fn update_position(
        &self,
        id: BoothId,
        position: PixelCoordinate,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Debug, Default)]
struct Tables {
    booths: Vec<Booth>,
    failing_updates: HashSet<BoothId>,
}

/// Process-local booth store.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoothStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryBoothStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later `update_position` for `id` fail, to exercise
    /// partial-failure handling.
    pub fn fail_updates_for(&self, id: BoothId) {
        self.tables.write().failing_updates.insert(id);
    }

    pub fn booth(&self, id: BoothId) -> Option<Booth> {
        self.tables.read().booths.iter().find(|b| b.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tables.read().booths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BoothStore for InMemoryBoothStore {
    async fn list_booths(&self, event: EventId) -> Result<Vec<Booth>, CoreError> {
        let tables = self.tables.read();
        Ok(tables.booths.iter().filter(|b| b.event_id == event).cloned().collect())
    }

    async fn insert_booth(&self, booth: Booth) -> Result<Booth, CoreError> {
        let mut tables = self.tables.write();
        if tables.booths.iter().any(|b| b.id == booth.id) {
            return Err(CoreError::Store(format!("duplicate booth id {}", booth.id)));
        }
        if let Some(cell) = booth.grid {
            let taken = tables
                .booths
                .iter()
                .any(|b| b.event_id == booth.event_id && b.grid == Some(cell));
            if taken {
                return Err(CoreError::CellTaken { event: booth.event_id, cell });
            }
        }
        debug!(booth = %booth.id, event = %booth.event_id, "Inserting booth");
        tables.booths.push(booth.clone());
        Ok(booth)
    }

    async fn update_position(&self, id: BoothId, position: PixelCoordinate) -> Result<(), CoreError> {
        let mut tables = self.tables.write();
        if tables.failing_updates.contains(&id) {
            return Err(CoreError::Store(format!("write rejected for booth {}", id)));
        }
        let booth = tables
            .booths
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CoreError::BoothNotFound(id))?;
        booth.position = Some(position);
        Ok(())
    }
}
