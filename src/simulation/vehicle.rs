//! Vehicle kinematics
//!
//! Integrates drive intent into speed and position one fixed tick at a time.
//! The world submits each proposed move to the collision resolver before
//! committing it back here.

use anyhow::{bail, Result};

use super::types::Position;

/// Kinematic limits in world-units per tick.
#[derive(Debug, Clone, Copy)]
pub struct VehicleTuning {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Wheel radius used to convert travel distance into wheel spin.
    pub wheel_radius: f32,
}

impl Default for VehicleTuning {
    fn default() -> Self {
        Self {
            max_speed: 0.1,
            acceleration: 0.05,
            deceleration: 0.01,
            wheel_radius: 0.5,
        }
    }
}

impl VehicleTuning {
    /// Setup-time precondition; never re-checked per tick.
    pub fn validate(&self) -> Result<()> {
        if self.deceleration <= 0.0
            || self.deceleration >= self.acceleration
            || self.acceleration >= self.max_speed
        {
            bail!(
                "vehicle tuning must satisfy 0 < deceleration < acceleration < max_speed, got \
                 deceleration={}, acceleration={}, max_speed={}",
                self.deceleration,
                self.acceleration,
                self.max_speed
            );
        }
        if self.wheel_radius <= 0.0 {
            bail!("wheel_radius must be positive, got {}", self.wheel_radius);
        }
        Ok(())
    }
}

/// Drive intent flags, set by the input collaborator and read at tick start.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveIntent {
    pub forward: bool,
    pub backward: bool,
}

/// The user-controlled car.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub position: Position,
    pub heading_degrees: f32,
    /// Signed speed in world-units per tick; `|speed| <= max_speed`.
    pub speed: f32,
    pub wheel_rotation_degrees: f32,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle {
    pub fn new() -> Self {
        Self {
            position: Position::default(),
            heading_degrees: 0.0,
            speed: 0.0,
            wheel_rotation_degrees: 0.0,
        }
    }

    /// Integrate intent into speed for one tick.
    ///
    /// Forward/backward intent accelerates toward the matching speed limit;
    /// with neither set, speed coasts toward zero by the deceleration step
    /// and stops exactly at zero rather than crossing it.
    pub fn update_speed(&mut self, intent: DriveIntent, tuning: &VehicleTuning) {
        if intent.forward {
            self.speed = (self.speed + tuning.acceleration).min(tuning.max_speed);
        } else if intent.backward {
            self.speed = (self.speed - tuning.acceleration).max(-tuning.max_speed);
        } else if self.speed > 0.0 {
            self.speed = (self.speed - tuning.deceleration).max(0.0);
        } else if self.speed < 0.0 {
            self.speed = (self.speed + tuning.deceleration).min(0.0);
        }
    }

    /// Position this tick's motion would reach, or `None` when stationary.
    pub fn propose_move(&self) -> Option<Position> {
        if self.speed == 0.0 {
            return None;
        }

        let direction = Position::heading_vector(self.heading_degrees);
        Some(self.position.translated(&direction, self.speed))
    }

    /// Commit an accepted candidate and spin the wheels to match the travel.
    pub fn commit_move(&mut self, candidate: Position, tuning: &VehicleTuning) {
        self.position = candidate;
        self.wheel_rotation_degrees +=
            360.0 * self.speed / (2.0 * std::f32::consts::PI * tuning.wheel_radius);
    }

    /// A rejected candidate is a hard stop: no partial motion, no bounce.
    pub fn reject_move(&mut self) {
        self.speed = 0.0;
    }

    /// Turn 90 degrees left on the spot. Turns are instantaneous, reset the
    /// wheel spin, and are never collision-checked.
    pub fn turn_left(&mut self) {
        self.heading_degrees += 90.0;
        self.wheel_rotation_degrees = 0.0;
    }

    /// Turn 90 degrees right on the spot.
    pub fn turn_right(&mut self) {
        self.heading_degrees -= 90.0;
        self.wheel_rotation_degrees = 0.0;
    }
}
