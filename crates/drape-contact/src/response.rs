//! Contact response summary.

use serde::{Deserialize, Serialize};

/// Result of a contact resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    /// Number of particles pushed out.
    pub resolved_count: u32,
    /// Deepest penetration found before resolution.
    pub max_penetration: f32,
    /// Sum of all push-out distances.
    pub total_correction: f32,
}

impl ContactResult {
    /// True when no particle was touched.
    pub fn is_empty(&self) -> bool {
        self.resolved_count == 0
    }
}
