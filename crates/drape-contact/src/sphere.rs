//! Analytical sphere collision.
//!
//! A static sphere that keeps particles at least `radius + epsilon` from
//! its center. Contacts are resolved by direct position projection; the
//! Verlet history is rewritten so the particle leaves the contact with a
//! reduced velocity.

use drape_math::Vec3;
use drape_solver::state::Particle;
use drape_types::constants::{DEFAULT_CONTACT_EPSILON, DEFAULT_CONTACT_FRICTION};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::response::ContactResult;

/// Push-out direction for a particle sitting exactly at the center.
const FALLBACK_NORMAL: Vec3 = Vec3::Y;

/// Who wins when a pinned particle lies inside the sphere.
///
/// Pinning and collision can disagree: a pin placed inside the sphere is
/// pushed out under [`Unconditional`](Self::Unconditional), which breaks
/// the pin's promise of a fixed position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinCollisionPolicy {
    /// Every particle collides, pinned or not.
    #[default]
    Unconditional,
    /// Pinned particles are left where they are.
    ExemptPinned,
}

/// Static sphere collider.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
    /// Clearance kept outside the surface.
    pub epsilon: f32,
    /// Fraction of implicit velocity kept on contact.
    pub friction: f32,
    /// Pin-vs-collision precedence.
    pub pin_policy: PinCollisionPolicy,
}

impl SphereCollider {
    /// Creates a sphere collider with default clearance and friction.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            epsilon: DEFAULT_CONTACT_EPSILON,
            friction: DEFAULT_CONTACT_FRICTION,
            pin_policy: PinCollisionPolicy::default(),
        }
    }

    /// Sets the pin-vs-collision precedence.
    pub fn with_pin_policy(mut self, pin_policy: PinCollisionPolicy) -> Self {
        self.pin_policy = pin_policy;
        self
    }

    /// Sets the friction factor.
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    /// Rejects non-positive radii and friction outside `[0, 1]`.
    pub fn validate(&self) -> DrapeResult<()> {
        if !self.center.is_finite() {
            return Err(DrapeError::InvalidConfig("sphere center must be finite".into()));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(DrapeError::InvalidConfig(format!(
                "sphere radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(DrapeError::InvalidConfig(format!(
                "contact epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(DrapeError::InvalidConfig(format!(
                "contact friction must be within [0, 1], got {}",
                self.friction
            )));
        }
        Ok(())
    }

    /// Distance from the center that particles are pushed to.
    #[inline]
    pub fn contact_radius(&self) -> f32 {
        self.radius + self.epsilon
    }

    /// Resolve sphere contacts by projecting penetrating particles to the surface.
    ///
    /// A contact rewrites `previous` as
    /// `new_position - 0.5 * friction * (old_position - old_previous)`,
    /// so the next integration step starts from a damped velocity.
    pub fn resolve(&self, particles: &mut [Particle]) -> ContactResult {
        let limit = self.contact_radius();
        let mut result = ContactResult::default();

        for p in particles.iter_mut() {
            if p.pinned && self.pin_policy == PinCollisionPolicy::ExemptPinned {
                continue;
            }

            let offset = p.position - self.center;
            let dist = offset.length();
            if dist >= limit {
                continue;
            }

            let normal = if dist > 0.0 {
                offset / dist
            } else {
                FALLBACK_NORMAL
            };

            let damped_velocity = p.velocity() * self.friction;
            p.position = self.center + normal * limit;
            p.previous = p.position - damped_velocity * 0.5;

            let depth = limit - dist;
            result.resolved_count += 1;
            result.max_penetration = result.max_penetration.max(depth);
            result.total_correction += depth;
        }

        result
    }
}
