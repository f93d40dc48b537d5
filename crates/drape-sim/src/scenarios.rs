//! Built-in scenarios.
//!
//! 1. **Flag**: 25×25 cloth hanging from three top anchors, blown by wind
//! 2. **Sphere drape**: the same cloth with a sphere behind its lower half

use std::fmt;
use std::str::FromStr;

use drape_types::DrapeError;
use serde::{Deserialize, Serialize};

use crate::config::{SimulationConfig, SphereConfig};

/// Which built-in scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Plain cloth, no collider.
    Flag,
    /// Plain cloth plus a static sphere.
    SphereDrape,
}

impl ScenarioKind {
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::Flag, ScenarioKind::SphereDrape]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Flag => "flag",
            ScenarioKind::SphereDrape => "sphere_drape",
        }
    }

    /// Full configuration for this scenario.
    pub fn config(&self) -> SimulationConfig {
        let mut config = SimulationConfig {
            name: self.name().to_string(),
            ..Default::default()
        };
        if *self == ScenarioKind::SphereDrape {
            // Centered under the default grid, bulging through its lower rows.
            config.sphere = Some(SphereConfig::new([344.0, 320.0, -60.0], 90.0));
        }
        config
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = DrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKind::all()
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                DrapeError::InvalidConfig(format!(
                    "unknown scenario '{s}', expected one of: {}",
                    known.join(", ")
                ))
            })
    }
}
