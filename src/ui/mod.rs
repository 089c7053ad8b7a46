//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the
//! `simulation` module. The UI reads state from `SimWorld` and renders it
//! using Bevy's 3D graphics.

mod components;
mod input;
mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::SimWorldResource;

use input::handle_drive_input;
use spawner::spawn_scene_visuals;
use sync::{sync_camera, sync_signal_lamps, sync_vehicle, tick_simulation};
use world::setup_world;

/// Plugin to register all UI systems
pub struct CityDriveUiPlugin;

impl Plugin for CityDriveUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimWorldResource>()
            // One FixedUpdate step per simulation tick
            .insert_resource(Time::<Fixed>::from_hz(100.0))
            .add_systems(
                Startup,
                (setup_world, spawn_scene_visuals.after(setup_world)),
            )
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_drive_input,
                    sync_vehicle,
                    sync_signal_lamps,
                    sync_camera,
                ),
            );
    }
}
