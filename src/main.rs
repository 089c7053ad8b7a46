mod simulation;

#[cfg(feature = "ui")]
mod ui;

use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(name = "city_drive")]
#[command(about = "City driving simulator with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "3000")]
    ticks: u32,

    /// Seed for the procedural scene
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui();
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        run_headless(cli.ticks, cli.seed);
    }
}

/// Run a scripted drive in headless mode (no graphics)
fn run_headless(ticks: u32, seed: Option<u64>) {
    env_logger::init();

    println!("Running city drive in headless mode...");
    println!("Ticks: {}", ticks);
    println!();

    let mut world = match seed {
        Some(seed) => simulation::SimWorld::create_city_world_with_seed(seed),
        None => simulation::SimWorld::create_city_world(),
    };

    println!("Initial state:");
    world.print_summary();
    println!();

    // Scripted drive: accelerate, coast to a stop, turn onto the cross
    // street, then back up until the run ends.
    let accelerate_until = ticks / 4;
    let turn_at = ticks / 2;
    let reverse_at = ticks * 3 / 4;
    let summary_every = (ticks / 5).max(1);

    info!("driving forward");
    world.set_forward_intent(true);

    for tick in 0..ticks {
        if tick == accelerate_until {
            info!("coasting");
            world.set_forward_intent(false);
        }
        if tick == turn_at {
            info!("turning left onto the cross street");
            world.turn_left();
            world.set_forward_intent(true);
        }
        if tick == reverse_at {
            info!("reversing");
            world.set_forward_intent(false);
            world.set_backward_intent(true);
        }

        world.tick();

        if (tick + 1) % summary_every == 0 {
            println!("--- After tick {} ({:.2}s simulated time) ---", tick + 1, world.time);
            world.print_summary();
            println!();
        }
    }

    println!("=== Final State ===");
    world.print_summary();
}

#[cfg(feature = "ui")]
fn run_with_ui() {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting City Drive UI...");
    println!();
    println!("Controls:");
    println!("  Up/Down     - Accelerate / reverse");
    println!("  Left/Right  - Turn 90 degrees");
    println!("  F1-F4       - Chase / overhead / side / driver view");
    println!("  ESC or Q    - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,city_drive=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "City Drive".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::CityDriveUiPlugin)
        .run();
}
