//! Firebreak main entry point.
//!
//! A 2D fire-fighting platformer written in Rust using:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the world, the per-frame schedule and observers
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `config.ini`
//! 2. Open the window, load textures, boot the level (file or built-in)
//! 3. Build the ECS world and the schedule:
//!    input → hotkeys → editor | entity update → particles → camera → render
//! 4. Run until the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level levels/level.bin --edit
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use firebreak::game;
use firebreak::resources::gameconfig::GameConfig;
use firebreak::resources::screensize::ScreenSize;
use firebreak::resources::texturestore::{EXTINGUISHER_TEXTURE, TextureStore};
use firebreak::systems::camera::camera_system;
use firebreak::systems::hotkeys::hotkeys_system;
use firebreak::systems::input::update_input_state;
use firebreak::systems::render::render_system;
use firebreak::systems::time::update_world_time;
use log::{error, info, warn};
use std::path::PathBuf;

const EXTINGUISHER_TEXTURE_PATH: &str = "./assets/textures/extinguisher.png";

/// Firebreak: put the fires out, then build more.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to read (and write with --write-config).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level file to play and edit; overrides the configuration.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Start in editor mode.
    #[arg(long)]
    edit: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{}; using defaults", e);
    }
    if let Some(level) = cli.level {
        config.level_path = level;
    }
    if cli.edit {
        config.start_editing = true;
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let store = match game::boot_store(&config) {
        Ok(store) => store,
        Err(e) => {
            error!("Cannot build the starting level: {}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Firebreak")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let mut textures = TextureStore::new();
    match rl.load_texture(&thread, EXTINGUISHER_TEXTURE_PATH) {
        Ok(texture) => textures.insert(EXTINGUISHER_TEXTURE, texture),
        Err(e) => warn!(
            "Could not load {}, drawing extinguishers as circles: {}",
            EXTINGUISHER_TEXTURE_PATH, e
        ),
    }

    // --------------- ECS world + resources ---------------
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    let mut world = game::build_world(config, screen, store);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    game::add_tick_systems(&mut update);
    update.add_systems(update_input_state.before(hotkeys_system));
    update.add_systems(render_system.after(camera_system));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();

        // Window may have been resized
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let mut screen = world.resource_mut::<ScreenSize>();
        screen.w = new_w;
        screen.h = new_h;
    }
    info!("Bye");
}
