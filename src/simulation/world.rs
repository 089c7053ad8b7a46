//! Main simulation world that ties everything together
//!
//! This is the entry point for running the driving simulation without any
//! Bevy dependencies.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::camera::{compute_camera_basis, CameraBasis, ViewMode};
use super::collision::is_blocked;
use super::grid::{BuildingSite, GridSpec};
use super::signal::{SignalFixture, DEFAULT_FOOTPRINT_HALF_WIDTH};
use super::types::{Position, TICK_SECONDS};
use super::vehicle::{DriveIntent, Vehicle, VehicleTuning};

/// Grid columns that get a signal fixture in the default city, along the
/// central east-west road.
pub const SIGNAL_COLUMNS: [i32; 5] = [-2, 0, 2, 4, 6];

/// Read-only vehicle snapshot for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct VehiclePose {
    pub position: Position,
    pub heading_degrees: f32,
    pub wheel_rotation_degrees: f32,
}

/// Read-only fixture snapshot for the renderer: world position plus the
/// on/off state of the three lamp slots.
#[derive(Debug, Clone, Copy)]
pub struct FixtureRenderState {
    pub position: Position,
    pub lights: [bool; 3],
}

/// The main simulation world
///
/// Owns all core state explicitly; components receive it through update
/// calls rather than reaching for globals.
pub struct SimWorld {
    /// Static street layout.
    pub grid: GridSpec,

    /// Procedurally placed buildings, render data only.
    pub buildings: Vec<BuildingSite>,

    /// Signal fixtures; their footprints are obstacles for the resolver.
    pub fixtures: Vec<SignalFixture>,

    vehicle: Vehicle,
    tuning: VehicleTuning,

    /// Intent flags set by the input collaborator, read at tick start.
    intent: DriveIntent,

    view_mode: ViewMode,

    /// Camera basis of the last completed tick.
    camera: CameraBasis,

    /// Simulation time
    pub time: f32,

    quit_requested: bool,
}

impl SimWorld {
    /// Create an empty world on the given grid. Fails when the tuning
    /// violates its ordering precondition.
    pub fn new(grid: GridSpec, tuning: VehicleTuning) -> Result<Self> {
        tuning.validate()?;

        let vehicle = Vehicle::new();
        let view_mode = ViewMode::default();
        let camera = compute_camera_basis(&vehicle, view_mode);

        Ok(Self {
            grid,
            buildings: Vec::new(),
            fixtures: Vec::new(),
            vehicle,
            tuning,
            intent: DriveIntent::default(),
            view_mode,
            camera,
            time: 0.0,
            quit_requested: false,
        })
    }

    /// Create the default city: standard grid, five signals along the
    /// central east-west road, and procedurally placed buildings.
    pub fn create_city_world() -> Self {
        Self::build_city(&mut rand::rng())
    }

    /// Create the default city with a seeded RNG for reproducible scenes.
    pub fn create_city_world_with_seed(seed: u64) -> Self {
        Self::build_city(&mut StdRng::seed_from_u64(seed))
    }

    fn build_city<R: Rng>(rng: &mut R) -> Self {
        let grid = GridSpec::default();
        let buildings = grid.building_sites(rng);

        let fixtures = SIGNAL_COLUMNS
            .iter()
            .map(|&col| {
                let x = grid.line_offset(col) + grid.road_width;
                let z = grid.line_offset(0) + grid.road_width;
                SignalFixture::new(Position::new(x, 0.0, z), DEFAULT_FOOTPRINT_HALF_WIDTH)
            })
            .collect();

        let vehicle = Vehicle::new();
        let view_mode = ViewMode::default();
        let camera = compute_camera_basis(&vehicle, view_mode);

        Self {
            grid,
            buildings,
            fixtures,
            vehicle,
            tuning: VehicleTuning::default(),
            intent: DriveIntent::default(),
            view_mode,
            camera,
            time: 0.0,
            quit_requested: false,
        }
    }

    /// Advance one fixed simulation step.
    ///
    /// Order matters: the vehicle's move is fully resolved (including the
    /// collision decision) before the signals advance and the camera
    /// recomputes, so both see the committed pose, never the candidate.
    pub fn tick(&mut self) {
        self.time += TICK_SECONDS;

        self.vehicle.update_speed(self.intent, &self.tuning);
        if let Some(candidate) = self.vehicle.propose_move() {
            if is_blocked(&self.grid, &self.fixtures, candidate) {
                self.vehicle.reject_move();
            } else {
                self.vehicle.commit_move(candidate, &self.tuning);
            }
        }

        for fixture in &mut self.fixtures {
            fixture.advance(TICK_SECONDS);
        }

        self.camera = compute_camera_basis(&self.vehicle, self.view_mode);
    }

    // Input mutators, fire-and-forget.

    pub fn turn_left(&mut self) {
        self.vehicle.turn_left();
    }

    pub fn turn_right(&mut self) {
        self.vehicle.turn_right();
    }

    pub fn set_forward_intent(&mut self, on: bool) {
        self.intent.forward = on;
    }

    pub fn set_backward_intent(&mut self, on: bool) {
        self.intent.backward = on;
    }

    /// Select a camera view by its 1-based index, clamping out-of-range
    /// values. The switch is instantaneous.
    pub fn set_view_mode(&mut self, index: i32) {
        self.view_mode = ViewMode::from_index(index);
        self.camera = compute_camera_basis(&self.vehicle, self.view_mode);
    }

    /// Request process shutdown; the driving loop polls for it.
    pub fn terminate(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    // Snapshot queries. All values reflect the same completed tick.

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn vehicle_pose(&self) -> VehiclePose {
        VehiclePose {
            position: self.vehicle.position,
            heading_degrees: self.vehicle.heading_degrees,
            wheel_rotation_degrees: self.vehicle.wheel_rotation_degrees,
        }
    }

    pub fn fixture_render_states(&self) -> Vec<FixtureRenderState> {
        self.fixtures
            .iter()
            .map(|fixture| FixtureRenderState {
                position: fixture.position,
                lights: fixture.lights(),
            })
            .collect()
    }

    pub fn camera_basis(&self) -> &CameraBasis {
        &self.camera
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== City Drive Summary ===");
        println!("Time: {:.2}s", self.time);
        println!(
            "Car: position=({:.2}, {:.2}), heading={:.0} deg, speed={:.3}",
            self.vehicle.position.x,
            self.vehicle.position.z,
            self.vehicle.heading_degrees,
            self.vehicle.speed
        );
        println!("View mode: {:?}", self.view_mode);
        println!("Buildings: {}", self.buildings.len());

        println!("--- Signals ---");
        for (index, fixture) in self.fixtures.iter().enumerate() {
            println!(
                "  Signal {}: ({:.1}, {:.1}) {:?} for {:.2}s",
                index,
                fixture.position.x,
                fixture.position.z,
                fixture.state,
                fixture.time_in_state
            );
        }
    }
}
