//! Camera director validation tests

use city_drive::simulation::{compute_camera_basis, Position, Vehicle, ViewMode};

fn vehicle_at(x: f32, z: f32, heading_degrees: f32) -> Vehicle {
    let mut vehicle = Vehicle::new();
    vehicle.position = Position::new(x, 0.0, z);
    vehicle.heading_degrees = heading_degrees;
    vehicle
}

fn assert_close(actual: Position, expected: Position) {
    assert!(
        (actual.x - expected.x).abs() < 1e-4
            && (actual.y - expected.y).abs() < 1e-4
            && (actual.z - expected.z).abs() < 1e-4,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn chase_trails_behind_and_above() {
    let vehicle = vehicle_at(0.0, 0.0, 0.0);
    let basis = compute_camera_basis(&vehicle, ViewMode::Chase);

    // Heading 0 faces negative z, so behind is positive z
    assert_close(basis.eye, Position::new(0.0, 3.0, 5.0));
    assert_close(basis.look_at, Position::new(0.0, 1.0, 0.0));
    assert_close(basis.up, Position::new(0.0, 1.0, 0.0));
}

#[test]
fn chase_rotates_with_the_heading() {
    let vehicle = vehicle_at(2.0, -4.0, 90.0);
    let basis = compute_camera_basis(&vehicle, ViewMode::Chase);

    // Facing negative x: the camera trails on the positive x side
    assert_close(basis.eye, Position::new(7.0, 3.0, -4.0));
    assert_close(basis.look_at, Position::new(2.0, 1.0, -4.0));
}

#[test]
fn overhead_looks_straight_down_with_flipped_up() {
    let vehicle = vehicle_at(3.0, 7.0, 42.0);
    let basis = compute_camera_basis(&vehicle, ViewMode::Overhead);

    assert_close(basis.eye, Position::new(3.0, 20.0, 7.0));
    // Look-at is the vehicle position exactly, not the roofline
    assert_close(basis.look_at, Position::new(3.0, 0.0, 7.0));
    assert_close(basis.up, Position::new(0.0, 0.0, -1.0));
}

#[test]
fn side_offsets_along_the_right_vector() {
    let vehicle = vehicle_at(0.0, 0.0, 0.0);
    let basis = compute_camera_basis(&vehicle, ViewMode::Side);

    assert_close(basis.eye, Position::new(5.0, 3.0, 0.0));
    assert_close(basis.look_at, Position::new(0.0, 1.0, 0.0));
    assert_close(basis.up, Position::new(0.0, 1.0, 0.0));
}

#[test]
fn driver_sits_in_the_cabin_looking_down_the_road() {
    let vehicle = vehicle_at(0.0, 0.0, 0.0);
    let basis = compute_camera_basis(&vehicle, ViewMode::Driver);

    // Eye just behind the dashboard, look-at ten units ahead at eye height
    assert_close(basis.eye, Position::new(0.0, 2.0, -0.5));
    assert_close(basis.look_at, Position::new(0.0, 2.0, -10.0));
    assert_close(basis.up, Position::new(0.0, 1.0, 0.0));
}

#[test]
fn driver_view_follows_the_heading() {
    let vehicle = vehicle_at(10.0, 10.0, 180.0);
    let basis = compute_camera_basis(&vehicle, ViewMode::Driver);

    // Facing positive z
    assert_close(basis.eye, Position::new(10.0, 2.0, 10.5));
    assert_close(basis.look_at, Position::new(10.0, 2.0, 20.0));
}

#[test]
fn camera_basis_is_pure() {
    let vehicle = vehicle_at(1.25, -3.5, 270.0);

    for mode in [
        ViewMode::Chase,
        ViewMode::Overhead,
        ViewMode::Side,
        ViewMode::Driver,
    ] {
        let first = compute_camera_basis(&vehicle, mode);
        let second = compute_camera_basis(&vehicle, mode);
        assert_eq!(first, second);
        assert_eq!(first.view_mode, mode);
    }
}

#[test]
fn view_mode_selector_clamps_out_of_range_values() {
    assert_eq!(ViewMode::from_index(1), ViewMode::Chase);
    assert_eq!(ViewMode::from_index(2), ViewMode::Overhead);
    assert_eq!(ViewMode::from_index(3), ViewMode::Side);
    assert_eq!(ViewMode::from_index(4), ViewMode::Driver);

    assert_eq!(ViewMode::from_index(0), ViewMode::Chase);
    assert_eq!(ViewMode::from_index(-7), ViewMode::Chase);
    assert_eq!(ViewMode::from_index(5), ViewMode::Driver);
    assert_eq!(ViewMode::from_index(99), ViewMode::Driver);
}
