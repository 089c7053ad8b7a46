//! Systems for spawning visual entities from simulation state

use bevy::prelude::*;

use super::components::{
    CarBody, CarWheel, SignalLamp, SimWorldResource, CAR_RIDE_HEIGHT, CAR_SCALE,
};
use crate::simulation::{RoadAxis, SimWorld};

const ROAD_THICKNESS: f32 = 0.02;

const POLE_WIDTH: f32 = 0.2;
const POLE_HEIGHT: f32 = 3.0;
const LIGHT_BOX_WIDTH: f32 = 0.4;
const LIGHT_BOX_HEIGHT: f32 = 1.5;
const LAMP_RADIUS: f32 = 0.15;
const LAMP_SPACING: f32 = 0.5;

/// Lamps start dim; the sync system lights them from fixture state.
const LAMP_OFF_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

/// System to create the static scene and the car from simulation state
pub fn spawn_scene_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim_world: Res<SimWorldResource>,
) {
    let world = &sim_world.0;

    spawn_roads(&mut commands, &mut meshes, &mut materials, world);
    spawn_buildings(&mut commands, &mut meshes, &mut materials, world);
    spawn_signals(&mut commands, &mut meshes, &mut materials, world);
    spawn_car(&mut commands, &mut meshes, &mut materials);
}

fn spawn_roads(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    world: &SimWorld,
) {
    let road_color = Color::srgb(0.2, 0.2, 0.2);
    let full_extent = world.grid.half_extent() * 2.0;
    let full_width = world.grid.road_width * 2.0;

    for strip in world.grid.road_strips() {
        let (size, translation) = match strip.axis {
            RoadAxis::NorthSouth => (
                Vec3::new(full_width, ROAD_THICKNESS, full_extent),
                Vec3::new(strip.offset, ROAD_THICKNESS / 2.0, 0.0),
            ),
            RoadAxis::EastWest => (
                Vec3::new(full_extent, ROAD_THICKNESS, full_width),
                Vec3::new(0.0, ROAD_THICKNESS / 2.0, strip.offset),
            ),
        };

        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(road_color)),
            Transform::from_translation(translation),
        ));
    }
}

fn spawn_buildings(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    world: &SimWorld,
) {
    for site in &world.buildings {
        let footprint = site.half_width * 2.0;
        let color = Color::srgb(site.color[0], site.color[1], site.color[2]);

        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(footprint, site.height, footprint))),
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(Vec3::new(
                site.position.x,
                site.height / 2.0,
                site.position.z,
            )),
        ));
    }
}

fn spawn_signals(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    world: &SimWorld,
) {
    let pole_color = Color::srgb(0.8, 0.2, 0.2);
    let box_color = Color::srgb(0.1, 0.1, 0.1);

    for (fixture_index, state) in world.fixture_render_states().iter().enumerate() {
        let base = Vec3::new(state.position.x, 0.0, state.position.z);

        let root = commands
            .spawn((
                Transform::from_translation(base),
                Visibility::default(),
            ))
            .id();

        commands.entity(root).with_children(|parent| {
            // Connector pole up from the ground
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(POLE_WIDTH, POLE_HEIGHT, POLE_WIDTH))),
                MeshMaterial3d(materials.add(pole_color)),
                Transform::from_translation(Vec3::new(0.0, POLE_HEIGHT / 2.0, 0.0)),
            ));

            // Light box on top
            let box_center_y = POLE_HEIGHT + LIGHT_BOX_HEIGHT / 2.0;
            parent.spawn((
                Mesh3d(meshes.add(Cuboid::new(
                    LIGHT_BOX_WIDTH,
                    LIGHT_BOX_HEIGHT,
                    LIGHT_BOX_WIDTH,
                ))),
                MeshMaterial3d(materials.add(box_color)),
                Transform::from_translation(Vec3::new(0.0, box_center_y, 0.0)),
            ));

            // Three lamps down the box face, red on top
            for slot in 0..3 {
                let lamp_y = box_center_y + LAMP_SPACING - slot as f32 * LAMP_SPACING;
                parent.spawn((
                    SignalLamp {
                        fixture: fixture_index,
                        slot,
                    },
                    Mesh3d(meshes.add(Sphere::new(LAMP_RADIUS))),
                    MeshMaterial3d(materials.add(LAMP_OFF_COLOR)),
                    Transform::from_translation(Vec3::new(
                        0.0,
                        lamp_y,
                        LIGHT_BOX_WIDTH / 2.0 + LAMP_RADIUS / 2.0,
                    )),
                ));
            }
        });
    }
}

fn spawn_car(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let body_color = Color::srgb(0.0, 0.0, 1.0);
    let wheel_color = Color::srgb(0.05, 0.05, 0.05);

    // Model space: length along x, the sync system adds the 90 degree yaw
    // that lines it up with the heading.
    let body_size = Vec3::new(3.0, 1.2, 1.6) * CAR_SCALE;
    let wheel_radius = 0.4 * CAR_SCALE;
    let wheel_width = 0.4 * CAR_SCALE;

    let wheel_offsets = [
        Vec3::new(-1.0, 0.0, 0.8),
        Vec3::new(1.0, 0.0, 0.8),
        Vec3::new(-1.0, 0.0, -0.8),
        Vec3::new(1.0, 0.0, -0.8),
    ];

    let root = commands
        .spawn((
            CarBody,
            Transform::from_xyz(0.0, CAR_RIDE_HEIGHT, 0.0),
            Visibility::default(),
        ))
        .id();

    commands.entity(root).with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Cuboid::new(body_size.x, body_size.y, body_size.z))),
            MeshMaterial3d(materials.add(body_color)),
            Transform::from_translation(Vec3::new(0.0, body_size.y / 2.0, 0.0)),
        ));

        for offset in wheel_offsets {
            parent.spawn((
                CarWheel,
                Mesh3d(meshes.add(Cylinder::new(wheel_radius, wheel_width))),
                MeshMaterial3d(materials.add(wheel_color)),
                Transform::from_translation(offset * CAR_SCALE)
                    .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2)),
            ));
        }
    });
}
