//! Solver configuration.
//!
//! Parameters for the per-step physics phases. Units are screen units per
//! step; there is no separate `dt` because gravity and damping are applied
//! as per-step quantities.

use drape_types::constants::{
    DEFAULT_DAMPING, DEFAULT_GRAVITY, DEFAULT_SOLVER_ITERATIONS, DEFAULT_TIME_STEP,
    DEFAULT_WIND_STRENGTH,
};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

/// Configuration for the cloth solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Gauss–Seidel sweeps over all constraints per step.
    pub iterations: u32,

    /// Fraction of implicit velocity kept each step (< 1 loses energy).
    pub damping: f32,

    /// Impulse added to Y each step. +Y points down the canvas.
    pub gravity: f32,

    /// Simulation time advanced per step.
    pub time_step: f32,

    /// Record constraint violation after every sweep, not just the last.
    pub record_convergence: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_SOLVER_ITERATIONS,
            damping: DEFAULT_DAMPING,
            gravity: DEFAULT_GRAVITY,
            time_step: DEFAULT_TIME_STEP,
            record_convergence: false,
        }
    }
}

impl SolverConfig {
    /// No gravity; everything else at defaults.
    pub fn still() -> Self {
        Self {
            gravity: 0.0,
            ..Default::default()
        }
    }

    /// Checks ranges the integrator relies on.
    pub fn validate(&self) -> DrapeResult<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(DrapeError::InvalidConfig(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if !self.gravity.is_finite() || !self.time_step.is_finite() {
            return Err(DrapeError::InvalidConfig(
                "gravity and time_step must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the wind phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Disabled wind leaves particles untouched.
    pub enabled: bool,

    /// Displacement along the normal for a particle facing the wind head-on.
    pub strength: f32,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            strength: DEFAULT_WIND_STRENGTH,
        }
    }
}

impl WindConfig {
    /// Wind switched off.
    pub fn calm() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }
}
