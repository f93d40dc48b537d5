//! The simulation context.
//!
//! One struct owns everything a run mutates. Phases are called in a
//! fixed order on the particle array, and constraints are always swept
//! in construction order, so a run is fully reproducible.

use drape_contact::{ContactResult, SphereCollider};
use drape_math::Vec3;
use drape_mesh::{ClothGrid, PinPolicy, Topology};
use drape_render::{FrameRenderer, FrameStats, ImageSurface, PixelSurface};
use drape_solver::integrator::verlet_step;
use drape_solver::normals::accumulate_vertex_normals;
use drape_solver::wind::{apply_wind, wind_at};
use drape_solver::{relax_constraints, ClothState, Particle, RelaxationReport, SolverConfig, WindConfig};
use drape_types::constants::DEFAULT_LIGHT;
use drape_types::{DrapeError, DrapeResult};

use crate::config::{CanvasConfig, SimulationConfig};

/// What one `step()` did.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// Frames completed, including this one.
    pub frame: u32,
    /// Simulation time after the advance.
    pub time: f32,
    /// Free particles nudged by the wind.
    pub wind_pushed: usize,
    /// Constraint relaxation outcome.
    pub relaxation: RelaxationReport,
    /// Sphere contacts, when a collider is present.
    pub contact: Option<ContactResult>,
}

/// Cloth simulation: topology, particle state, and the per-frame pipeline.
pub struct Simulation {
    name: String,
    grid: ClothGrid,
    topology: Topology,
    state: ClothState,
    solver: SolverConfig,
    wind: WindConfig,
    collider: Option<SphereCollider>,
    canvas: CanvasConfig,
    renderer: FrameRenderer,
    frame: u32,
}

impl Simulation {
    /// Plain cloth with the reference settings: three top anchors, gravity,
    /// wind, 20 constraint iterations and no collider.
    pub fn new(
        grid_width: u32,
        grid_height: u32,
        spacing: f32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> DrapeResult<Self> {
        let mut config = SimulationConfig::default();
        config.grid.width = grid_width;
        config.grid.height = grid_height;
        config.grid.spacing = spacing;
        config.canvas = CanvasConfig {
            width: canvas_width,
            height: canvas_height,
        };
        Self::from_config(&config)
    }

    /// Builds any variant from a validated configuration.
    pub fn from_config(config: &SimulationConfig) -> DrapeResult<Self> {
        config.validate()?;
        let grid = config.grid.to_grid();
        let mut sim = Self::build(grid, &config.grid.pins)?;
        sim.name = config.name.clone();
        sim.solver = config.solver.clone();
        sim.wind = config.wind.clone();
        sim.canvas = config.canvas;
        sim.renderer = FrameRenderer::new(Vec3::from_array(config.light));
        sim.collider = config.sphere.as_ref().map(|s| s.to_collider());

        tracing::debug!(
            name = %sim.name,
            particles = sim.state.particle_count(),
            constraints = sim.topology.constraint_count(),
            triangles = sim.topology.triangle_count(),
            collider = sim.collider.is_some(),
            "simulation built"
        );
        Ok(sim)
    }

    fn build(grid: ClothGrid, pins: &PinPolicy) -> DrapeResult<Self> {
        let state = ClothState::from_grid(&grid, pins)?;
        let topology = Topology::build(&grid);
        Ok(Self {
            name: String::from("custom"),
            grid,
            topology,
            state,
            solver: SolverConfig::default(),
            wind: WindConfig::default(),
            collider: None,
            canvas: CanvasConfig::default(),
            renderer: FrameRenderer::new(Vec3::from_array(DEFAULT_LIGHT)),
            frame: 0,
        })
    }

    /// Adds (or replaces) the sphere collider phase.
    ///
    /// The collider is validated first; a non-positive radius or a
    /// friction outside `[0, 1]` is rejected.
    pub fn with_collider(mut self, collider: SphereCollider) -> DrapeResult<Self> {
        collider.validate()?;
        self.collider = Some(collider);
        Ok(self)
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_wind(mut self, wind: WindConfig) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_light(mut self, light: Vec3) -> Self {
        self.renderer.light = light;
        self
    }

    /// Advances the cloth by one frame.
    pub fn step(&mut self) -> StepReport {
        self.state.time += self.solver.time_step;
        let particles = &mut self.state.particles;

        verlet_step(particles, self.solver.damping, self.solver.gravity);
        accumulate_vertex_normals(particles, &self.topology.triangles);

        let wind_pushed = if self.wind.enabled {
            apply_wind(particles, wind_at(self.state.time), self.wind.strength)
        } else {
            0
        };

        let relaxation = relax_constraints(
            particles,
            &self.topology.constraints,
            self.solver.iterations,
            self.solver.record_convergence,
        );

        let contact = self.collider.as_ref().map(|c| c.resolve(particles));

        self.frame += 1;
        StepReport {
            frame: self.frame,
            time: self.state.time,
            wind_pushed,
            relaxation,
            contact,
        }
    }

    /// Clears `surface` and rasterizes the current cloth into it.
    pub fn render<S: PixelSurface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        self.renderer
            .render(surface, &self.topology.triangles, &self.state.particles)
    }

    /// Triangle list, fixed for the lifetime of the simulation.
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.topology.triangles
    }

    pub fn particles(&self) -> &[Particle] {
        &self.state.particles
    }

    /// Elapsed simulation time.
    pub fn time(&self) -> f32 {
        self.state.time
    }

    /// Frames stepped so far.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn state(&self) -> &ClothState {
        &self.state
    }

    pub fn collider(&self) -> Option<&SphereCollider> {
        self.collider.as_ref()
    }

    /// A blank surface sized to the configured canvas.
    pub fn new_surface(&self) -> ImageSurface {
        ImageSurface::new(self.canvas.width, self.canvas.height)
    }

    /// Replaces the particle state, e.g. with one restored from a snapshot.
    ///
    /// The new state must have one particle per grid cell.
    pub fn resume(&mut self, state: ClothState, frame: u32) -> DrapeResult<()> {
        if state.particle_count() != self.grid.particle_count() {
            return Err(DrapeError::InvalidConfig(format!(
                "state has {} particles, grid expects {}",
                state.particle_count(),
                self.grid.particle_count()
            )));
        }
        self.state = state;
        self.frame = frame;
        Ok(())
    }
}
