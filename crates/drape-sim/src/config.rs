//! Simulation configuration.
//!
//! Every field has a default, so a TOML file only needs to name what it
//! changes:
//!
//! ```toml
//! frames = 120
//!
//! [grid]
//! width = 30
//! pins = { kind = "top_row" }
//!
//! [sphere]
//! center = [344.0, 320.0, -60.0]
//! radius = 90.0
//! ```

use std::path::Path;

use drape_contact::{PinCollisionPolicy, SphereCollider};
use drape_math::Vec3;
use drape_mesh::{ClothGrid, PinPolicy};
use drape_render::png_sequence::FRAME_PLACEHOLDER;
use drape_solver::{SolverConfig, WindConfig};
use drape_types::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_CONTACT_EPSILON,
    DEFAULT_CONTACT_FRICTION, DEFAULT_FRAME_COUNT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_ORIGIN,
    DEFAULT_GRID_SPACING, DEFAULT_GRID_WIDTH, DEFAULT_LIGHT,
};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Default output path pattern.
pub const DEFAULT_OUTPUT_PATTERN: &str = "outputs/frame_{frame}.png";

/// Full configuration of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Label used in logs and metrics.
    pub name: String,
    pub grid: GridConfig,
    pub canvas: CanvasConfig,
    pub solver: SolverConfig,
    pub wind: WindConfig,
    /// Direction light travels along when shading faces.
    pub light: [f32; 3],
    /// Optional static sphere collider.
    pub sphere: Option<SphereConfig>,
    /// Frames to simulate and render.
    pub frames: u32,
    /// Output path pattern; `{frame}` becomes the 3-digit frame index.
    pub output: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            name: "custom".into(),
            grid: GridConfig::default(),
            canvas: CanvasConfig::default(),
            solver: SolverConfig::default(),
            wind: WindConfig::default(),
            light: DEFAULT_LIGHT,
            sphere: None,
            frames: DEFAULT_FRAME_COUNT,
            output: DEFAULT_OUTPUT_PATTERN.into(),
        }
    }
}

/// Particle grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    pub spacing: f32,
    pub origin: [f32; 3],
    pub pins: PinPolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            spacing: DEFAULT_GRID_SPACING,
            origin: DEFAULT_GRID_ORIGIN,
            pins: PinPolicy::default(),
        }
    }
}

impl GridConfig {
    pub fn to_grid(&self) -> ClothGrid {
        ClothGrid::new(self.width, self.height, self.spacing)
            .with_origin(Vec3::from_array(self.origin))
    }
}

/// Pixel surface dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

/// Serializable form of [`SphereCollider`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    pub center: [f32; 3],
    pub radius: f32,
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default)]
    pub pin_policy: PinCollisionPolicy,
}

fn default_epsilon() -> f32 {
    DEFAULT_CONTACT_EPSILON
}

fn default_friction() -> f32 {
    DEFAULT_CONTACT_FRICTION
}

impl SphereConfig {
    pub fn new(center: [f32; 3], radius: f32) -> Self {
        Self {
            center,
            radius,
            epsilon: DEFAULT_CONTACT_EPSILON,
            friction: DEFAULT_CONTACT_FRICTION,
            pin_policy: PinCollisionPolicy::default(),
        }
    }

    pub fn to_collider(&self) -> SphereCollider {
        let mut collider = SphereCollider::new(Vec3::from_array(self.center), self.radius)
            .with_friction(self.friction)
            .with_pin_policy(self.pin_policy);
        collider.epsilon = self.epsilon;
        collider
    }
}

impl SimulationConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> DrapeResult<Self> {
        let config: Self = toml::from_str(text)
            .map_err(|e| DrapeError::InvalidConfig(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: &Path) -> DrapeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text).map_err(|e| match e {
            DrapeError::InvalidConfig(msg) => {
                DrapeError::InvalidConfig(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> DrapeResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DrapeError::Serialization(format!("TOML serialization failed: {e}")))
    }

    /// Checks every section.
    pub fn validate(&self) -> DrapeResult<()> {
        self.grid.to_grid().validate()?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(DrapeError::InvalidConfig(format!(
                "canvas must be at least 1x1, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        self.solver.validate()?;
        if !self.wind.strength.is_finite() {
            return Err(DrapeError::InvalidConfig("wind strength must be finite".into()));
        }
        if !Vec3::from_array(self.light).is_finite() {
            return Err(DrapeError::InvalidConfig("light must be finite".into()));
        }
        if let Some(sphere) = &self.sphere {
            sphere.to_collider().validate()?;
        }
        if !self.output.contains(FRAME_PLACEHOLDER) {
            return Err(DrapeError::InvalidConfig(format!(
                "output pattern '{}' must contain {FRAME_PLACEHOLDER}",
                self.output
            )));
        }
        Ok(())
    }
}
