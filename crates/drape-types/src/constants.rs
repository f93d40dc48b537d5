//! Simulation defaults and numeric tolerances.
//!
//! Units are screen units: the cloth lives in the same coordinate space
//! as the output image, with +Y pointing down the canvas.

/// Gravity impulse added to the Y axis of every free particle each step.
pub const DEFAULT_GRAVITY: f32 = 0.5;

/// Fraction of the implicit Verlet velocity kept from one step to the next.
pub const DEFAULT_DAMPING: f32 = 0.99;

/// Simulation time advanced per step. Drives the wind oscillation.
pub const DEFAULT_TIME_STEP: f32 = 0.06;

/// Gauss–Seidel sweeps over the constraint list per step.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 20;

/// Displacement applied along the normal of a particle facing the wind head-on.
pub const DEFAULT_WIND_STRENGTH: f32 = 0.55;

/// Extra clearance kept between a sphere surface and the particles it pushes out.
pub const DEFAULT_CONTACT_EPSILON: f32 = 0.01;

/// Fraction of implicit velocity kept after a particle touches a sphere.
pub const DEFAULT_CONTACT_FRICTION: f32 = 0.8;

/// Position of grid particle (row 0, column 0).
pub const DEFAULT_GRID_ORIGIN: [f32; 3] = [200.0, 50.0, 0.0];

/// Reference cloth: 25×25 particles, 12 units apart.
pub const DEFAULT_GRID_WIDTH: u32 = 25;
pub const DEFAULT_GRID_HEIGHT: u32 = 25;
pub const DEFAULT_GRID_SPACING: f32 = 12.0;

/// Reference canvas size in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Default number of frames rendered by a run.
pub const DEFAULT_FRAME_COUNT: u32 = 300;

/// Directional light used for flat shading.
pub const DEFAULT_LIGHT: [f32; 3] = [0.0, -0.5, -1.0];

/// Gray level painted behind the cloth.
pub const BACKGROUND_GRAY: u8 = 30;

/// Darkest gray a rasterized face can take, so unlit faces stay visible.
pub const MIN_SHADE: u8 = 20;

/// Barycentric denominators smaller than this mark a zero-area projection.
pub const DEGENERATE_DENOMINATOR: f32 = 1.0e-6;

/// Tolerance on negative barycentric weights, so edge pixels are covered.
pub const BARYCENTRIC_EPSILON: f32 = 1.0e-6;
