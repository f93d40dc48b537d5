//! # drape-contact
//!
//! Collision response for cloth particles against a static sphere.
//!
//! The collider is an optional phase of the simulation pipeline: it runs
//! after constraint relaxation, projects penetrating particles back to the
//! surface and bleeds off their velocity to imitate sliding friction.

pub mod response;
pub mod sphere;

pub use response::ContactResult;
pub use sphere::{PinCollisionPolicy, SphereCollider};
