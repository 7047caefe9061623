use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use floorplan_layout::{ArrangeStrategy, BoothSize, Canvas, FloorGrid, PixelCoordinate};
use serde::Deserialize;
use tracing::{error, info};

use crate::error::CoreError;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Environment overrides look like `FLOORPLAN__GRID__COLUMNS=12`.
const ENV_PREFIX: &str = "FLOORPLAN";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub columns: usize,
    pub spacing_x: f32,
    pub spacing_y: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub max_booths: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings {
            columns: 10,
            spacing_x: 20.0,
            spacing_y: 20.0,
            origin_x: 100.0,
            origin_y: 100.0,
            max_booths: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        CanvasSettings { width: 1200.0, height: 800.0 }
    }
}

/// The one booth footprint shared by the grid, the arrange strategies and
/// rendering.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoothSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for BoothSettings {
    fn default() -> Self {
        BoothSettings { width: 60.0, height: 60.0 }
    }
}

/// Seed data for the floor plan viewer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub event_name: String,
    pub booth_count: usize,
    pub strategy: ArrangeStrategy,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            event_name: "College Expo".to_string(),
            booth_count: 24,
            strategy: ArrangeStrategy::Grid,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid: GridSettings,
    pub canvas: CanvasSettings,
    pub booth: BoothSettings,
    pub demo: DemoSettings,
}

impl Settings {
    /// Parses settings from a TOML document, without file or environment
    /// sources.
    pub fn from_toml_str(toml: &str) -> Result<Self, CoreError> {
        build(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Builds the validated floor grid. Grid cells take the booth size.
    pub fn floor_grid(&self) -> Result<FloorGrid, CoreError> {
        let grid = FloorGrid::new(
            self.grid.columns,
            self.booth_size(),
            self.grid.spacing_x,
            self.grid.spacing_y,
            PixelCoordinate::new(self.grid.origin_x, self.grid.origin_y),
            self.grid.max_booths,
        )?;
        Ok(grid)
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas.width, self.canvas.height)
    }

    pub fn booth_size(&self) -> BoothSize {
        BoothSize::new(self.booth.width, self.booth.height)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.floor_grid()?;
        let CanvasSettings { width, height } = self.canvas;
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(CoreError::Validation { field: "canvas", reason: "width and height must be positive" });
        }
        Ok(())
    }
}

/// Loads settings from `path` (TOML, optional) layered with `FLOORPLAN__*`
/// environment variables. Missing keys fall back to the defaults.
pub fn load_config(path: &str) -> Result<Settings, CoreError> {
    info!("Attempting to load configuration from {}", path);

    let builder = Config::builder()
        .add_source(File::new(path, FileFormat::Toml).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true));

    match build(builder) {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings, CoreError> {
    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
