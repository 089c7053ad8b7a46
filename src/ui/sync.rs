//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{CarBody, CarWheel, MainCamera, SignalLamp, SimWorldResource, CAR_RIDE_HEIGHT};

const LAMP_ON_COLORS: [Color; 3] = [
    Color::srgb(1.0, 0.0, 0.0),
    Color::srgb(0.0, 1.0, 0.0),
    Color::srgb(1.0, 1.0, 0.0),
];
const LAMP_OFF_COLOR: Color = Color::srgb(0.1, 0.1, 0.1);

/// System to run one fixed simulation step
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.tick();
}

/// System to copy the committed vehicle pose onto the car entity
pub fn sync_vehicle(
    sim_world: Res<SimWorldResource>,
    mut body_query: Query<&mut Transform, (With<CarBody>, Without<CarWheel>)>,
    mut wheel_query: Query<&mut Transform, (With<CarWheel>, Without<CarBody>)>,
) {
    let pose = sim_world.0.vehicle_pose();

    for mut transform in body_query.iter_mut() {
        transform.translation = Vec3::new(
            pose.position.x,
            pose.position.y + CAR_RIDE_HEIGHT,
            pose.position.z,
        );
        // The body model runs along x; heading 0 faces negative z
        transform.rotation = Quat::from_rotation_y((pose.heading_degrees + 90.0).to_radians());
    }

    // Spin wheels about their axle; translation stays where the spawner
    // put them
    let spin = pose.wheel_rotation_degrees.to_radians();
    for mut transform in wheel_query.iter_mut() {
        transform.rotation =
            Quat::from_rotation_z(-spin) * Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
    }
}

/// System to light each fixture's lamps from its signal state
pub fn sync_signal_lamps(
    sim_world: Res<SimWorldResource>,
    lamp_query: Query<(&SignalLamp, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let states = sim_world.0.fixture_render_states();

    for (lamp, material_handle) in lamp_query.iter() {
        let Some(state) = states.get(lamp.fixture) else {
            warn!("signal lamp references missing fixture {}", lamp.fixture);
            continue;
        };

        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = if state.lights[lamp.slot] {
                LAMP_ON_COLORS[lamp.slot]
            } else {
                LAMP_OFF_COLOR
            };
        }
    }
}

/// System to drive the render camera from the committed camera basis
pub fn sync_camera(
    sim_world: Res<SimWorldResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let basis = sim_world.0.camera_basis();
    let eye = Vec3::new(basis.eye.x, basis.eye.y, basis.eye.z);
    let target = Vec3::new(basis.look_at.x, basis.look_at.y, basis.look_at.z);
    let up = Vec3::new(basis.up.x, basis.up.y, basis.up.z);

    for mut transform in camera_query.iter_mut() {
        *transform = Transform::from_translation(eye).looking_at(target, up);
    }
}
