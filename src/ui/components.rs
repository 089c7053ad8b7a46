//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::SimWorld;

/// Uniform scale applied to the car model.
pub const CAR_SCALE: f32 = 0.6;

/// Height the car body rides above the road surface.
pub const CAR_RIDE_HEIGHT: f32 = 0.5;

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

impl Default for SimWorldResource {
    fn default() -> Self {
        Self(SimWorld::create_city_world())
    }
}

/// Marker component for ground plane
#[derive(Component)]
pub struct Ground;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for the car body root entity
#[derive(Component)]
pub struct CarBody;

/// Marker for a wheel child of the car body
#[derive(Component)]
pub struct CarWheel;

/// Links a lamp entity to a fixture index and lamp slot (0 red, 1 green,
/// 2 yellow)
#[derive(Component)]
pub struct SignalLamp {
    pub fixture: usize,
    pub slot: usize,
}
