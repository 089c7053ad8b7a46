//! Core types for the driving simulation
//!
//! These are standalone types that don't depend on Bevy.

/// Simulated seconds that elapse in one call to `SimWorld::tick`.
///
/// All time-dependent state (signal dwell timers, the world clock) advances
/// by exactly this much per tick. Kinematics constants are expressed in
/// world-units per tick and are not scaled by it.
pub const TICK_SECONDS: f32 = 0.01;

/// A 3D position in the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Unit vector a vehicle with the given heading travels along.
    ///
    /// Heading 0 faces negative z; positive headings rotate counterclockwise
    /// when viewed from above.
    pub fn heading_vector(heading_degrees: f32) -> Position {
        let rad = heading_degrees.to_radians();
        Position::new(-rad.sin(), 0.0, -rad.cos())
    }

    pub fn translated(&self, direction: &Position, amount: f32) -> Position {
        Position::new(
            self.x + direction.x * amount,
            self.y + direction.y * amount,
            self.z + direction.z * amount,
        )
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}
