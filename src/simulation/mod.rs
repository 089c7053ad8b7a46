//! Standalone driving simulation module
//!
//! This module contains all the core simulation logic that can run
//! independently of the Bevy game engine. It can be tested via console
//! without needing to boot up the full game.

mod camera;
mod collision;
mod grid;
mod signal;
mod types;
mod vehicle;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use camera::{compute_camera_basis, CameraBasis, ViewMode};
#[allow(unused_imports)]
pub use collision::is_blocked;
#[allow(unused_imports)]
pub use grid::{
    BuildingSite, GridSpec, RoadAxis, RoadStrip, BUILDING_HALF_WIDTH, MAX_BUILDINGS,
};
#[allow(unused_imports)]
pub use signal::{SignalFixture, SignalState, DEFAULT_FOOTPRINT_HALF_WIDTH};
#[allow(unused_imports)]
pub use types::{Position, TICK_SECONDS};
#[allow(unused_imports)]
pub use vehicle::{DriveIntent, Vehicle, VehicleTuning};
pub use world::{FixtureRenderState, SimWorld, VehiclePose, SIGNAL_COLUMNS};
