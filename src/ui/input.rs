//! Input handling systems

use bevy::prelude::*;

use super::components::SimWorldResource;

/// Forward keyboard state to the simulation's input mutators
pub fn handle_drive_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    let world = &mut sim_world.0;

    // Pressing one drive key clears the opposing intent
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        world.set_forward_intent(true);
        world.set_backward_intent(false);
    }
    if keyboard.just_released(KeyCode::ArrowUp) {
        world.set_forward_intent(false);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        world.set_backward_intent(true);
        world.set_forward_intent(false);
    }
    if keyboard.just_released(KeyCode::ArrowDown) {
        world.set_backward_intent(false);
    }

    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        world.turn_left();
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        world.turn_right();
    }

    if keyboard.just_pressed(KeyCode::F1) {
        world.set_view_mode(1);
    }
    if keyboard.just_pressed(KeyCode::F2) {
        world.set_view_mode(2);
    }
    if keyboard.just_pressed(KeyCode::F3) {
        world.set_view_mode(3);
    }
    if keyboard.just_pressed(KeyCode::F4) {
        world.set_view_mode(4);
    }

    if keyboard.just_pressed(KeyCode::Escape) || keyboard.just_pressed(KeyCode::KeyQ) {
        world.terminate();
        exit.write(AppExit::Success);
    }
}
