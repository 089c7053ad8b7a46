//! World setup systems for camera, lighting, and ground

use bevy::prelude::*;

use super::components::{Ground, MainCamera, SimWorldResource};

/// System to setup the world environment (ground, lighting, camera)
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim_world: Res<SimWorldResource>,
) {
    // Sky
    commands.insert_resource(ClearColor(Color::srgb(0.5, 0.8, 0.92)));

    // The camera transform is driven every frame from the simulation's
    // camera basis; this initial pose is replaced on the first sync.
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_xyz(0.0, 3.0, 5.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Ground plane covering the whole grid
    let ground_size = sim_world.0.grid.half_extent() * 2.0;
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ground_size, ground_size))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.7, 0.3))),
    ));
}
