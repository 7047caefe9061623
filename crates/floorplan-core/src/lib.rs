//! Booth placement workflows for expo floor plans.
//!
//! Wires the pure layout engine in `floorplan-layout` to typed configuration,
//! booth records and a [`BoothStore`] passed in by the caller.

pub mod booth;
pub mod error;
pub mod settings;
pub mod store;
pub mod workflow;

pub use booth::{Booth, BoothId, EventId, NewBooth};
pub use error::CoreError;
pub use settings::{DEFAULT_CONFIG_PATH, Settings, load_config};
pub use store::{BoothStore, InMemoryBoothStore};
pub use workflow::{ArrangeReport, bulk_arrange, create_booth};
