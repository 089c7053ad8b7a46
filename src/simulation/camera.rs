//! Camera director
//!
//! Pure pose computation per view mode. Nothing here carries state between
//! frames, so the camera snaps instantly on mode switches with no blending.

use super::types::Position;
use super::vehicle::Vehicle;

const CHASE_DISTANCE_BEHIND: f32 = 5.0;
const CHASE_HEIGHT_ABOVE: f32 = 3.0;
const OVERHEAD_HEIGHT: f32 = 20.0;
const SIDE_DISTANCE: f32 = 5.0;
const SIDE_HEIGHT_ABOVE: f32 = 3.0;
const DRIVER_EYE_HEIGHT: f32 = 2.0;
const DRIVER_EYE_SETBACK: f32 = -0.5;
const DRIVER_LOOK_AHEAD: f32 = 10.0;

/// Active camera formula selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Chase,
    Overhead,
    Side,
    Driver,
}

impl ViewMode {
    /// Map the 1-based selector the input collaborator sends.
    /// Out-of-range values clamp to the nearest valid mode.
    pub fn from_index(index: i32) -> ViewMode {
        match index.clamp(1, 4) {
            1 => ViewMode::Chase,
            2 => ViewMode::Overhead,
            3 => ViewMode::Side,
            _ => ViewMode::Driver,
        }
    }
}

/// Eye/look-at/up triple handed to the renderer each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub eye: Position,
    pub look_at: Position,
    pub up: Position,
    pub view_mode: ViewMode,
}

/// Compute the camera pose for a vehicle and view mode.
///
/// A pure function of its arguments: identical inputs yield bit-identical
/// results.
pub fn compute_camera_basis(vehicle: &Vehicle, mode: ViewMode) -> CameraBasis {
    let (eye, look_at, up) = match mode {
        ViewMode::Chase => chase_pose(vehicle),
        ViewMode::Overhead => overhead_pose(vehicle),
        ViewMode::Side => side_pose(vehicle),
        ViewMode::Driver => driver_pose(vehicle),
    };

    CameraBasis {
        eye,
        look_at,
        up,
        view_mode: mode,
    }
}

/// Trailing view: behind and above the vehicle, looking at its roofline.
fn chase_pose(vehicle: &Vehicle) -> (Position, Position, Position) {
    let rad = vehicle.heading_degrees.to_radians();
    let pos = vehicle.position;

    let eye = Position::new(
        pos.x + rad.sin() * CHASE_DISTANCE_BEHIND,
        pos.y + CHASE_HEIGHT_ABOVE,
        pos.z + rad.cos() * CHASE_DISTANCE_BEHIND,
    );
    let look_at = Position::new(pos.x, pos.y + 1.0, pos.z);

    (eye, look_at, Position::new(0.0, 1.0, 0.0))
}

/// Top-down view. Up points along negative z so the vehicle's forward
/// direction stays upright in the projection.
fn overhead_pose(vehicle: &Vehicle) -> (Position, Position, Position) {
    let pos = vehicle.position;

    let eye = Position::new(pos.x, pos.y + OVERHEAD_HEIGHT, pos.z);

    (eye, pos, Position::new(0.0, 0.0, -1.0))
}

/// Side view: offset along the vehicle's right, looking at its roofline.
fn side_pose(vehicle: &Vehicle) -> (Position, Position, Position) {
    let rad = vehicle.heading_degrees.to_radians();
    let pos = vehicle.position;

    let eye = Position::new(
        pos.x + rad.cos() * SIDE_DISTANCE,
        pos.y + SIDE_HEIGHT_ABOVE,
        pos.z + rad.sin() * SIDE_DISTANCE,
    );
    let look_at = Position::new(pos.x, pos.y + 1.0, pos.z);

    (eye, look_at, Position::new(0.0, 1.0, 0.0))
}

/// Cabin view: eye just behind the dashboard, looking far down the road at
/// eye height.
fn driver_pose(vehicle: &Vehicle) -> (Position, Position, Position) {
    let rad = vehicle.heading_degrees.to_radians();
    let pos = vehicle.position;

    let eye = Position::new(
        pos.x + rad.sin() * DRIVER_EYE_SETBACK,
        pos.y + DRIVER_EYE_HEIGHT,
        pos.z + rad.cos() * DRIVER_EYE_SETBACK,
    );
    let look_at = Position::new(
        pos.x - rad.sin() * DRIVER_LOOK_AHEAD,
        pos.y + DRIVER_EYE_HEIGHT,
        pos.z - rad.cos() * DRIVER_LOOK_AHEAD,
    );

    (eye, look_at, Position::new(0.0, 1.0, 0.0))
}
