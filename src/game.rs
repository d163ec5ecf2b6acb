//! World bootstrap.
//!
//! Builds the starting level (the level file when there is one, otherwise a
//! small built-in scenario), inserts every simulation resource into a
//! [`World`], registers the observers and assembles the per-tick
//! [`Schedule`]. The binary adds the Raylib-facing systems (input polling and
//! rendering) around the schedule built here; tests run it as is.

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::levelentity::{EntityKind, Extinguisher, Fire, HelpText, Player};
use crate::components::levelrect::LevelRect;
use crate::events::level::save_reload_observer;
use crate::events::respawn::respawn_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::switcheditor::switch_editor_observer;
use crate::level;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::editor::EditorState;
use crate::resources::entitystore::{EntityStore, StoreError};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::particles::Particles;
use crate::resources::screensize::ScreenSize;
use crate::resources::spawnpoint::SpawnPoint;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::camera_system;
use crate::systems::editor::editor_system;
use crate::systems::hotkeys::hotkeys_system;
use crate::systems::particles::particle_update_system;
use crate::systems::simulation::{
    editor_active, editor_inactive, entity_update_system, gameplay_active,
};

/// The level used when no level file exists yet.
pub fn boot_scenario() -> Result<EntityStore, StoreError> {
    let mut store = EntityStore::new();
    store.add(EntityKind::Ground(LevelRect::new(-400.0, -200.0, 900.0, 400.0)))?;
    store.add(EntityKind::Obstacle(LevelRect::new(-440.0, -240.0, 980.0, 40.0)))?;
    store.add(EntityKind::Obstacle(LevelRect::new(-440.0, 200.0, 980.0, 40.0)))?;
    store.add(EntityKind::Obstacle(LevelRect::new(-440.0, -200.0, 40.0, 400.0)))?;
    store.add(EntityKind::Obstacle(LevelRect::new(500.0, -200.0, 40.0, 150.0)))?;
    store.add(EntityKind::Obstacle(LevelRect::new(500.0, 50.0, 40.0, 150.0)))?;
    store.add(EntityKind::Ground(LevelRect::new(800.0, -150.0, 500.0, 300.0)))?;
    store.add(EntityKind::Fire(Fire::new(LevelRect::new(900.0, -100.0, 200.0, 200.0))))?;
    store.add(EntityKind::Extinguisher(Extinguisher::at(120.0, 0.0)))?;
    store.add(EntityKind::HelpText(HelpText::new(
        -380.0,
        -180.0,
        "E: grab/throw  LMB: spray  Tab: edit",
    )))?;
    store.add(EntityKind::Player(Player::at(0.0, 0.0)))?;
    Ok(store)
}

/// Starting level: the configured level file if it loads, else the boot
/// scenario.
pub fn boot_store(config: &GameConfig) -> Result<EntityStore, StoreError> {
    if config.level_path.exists() {
        match level::load_from_file(&config.level_path) {
            Ok(store) => return Ok(store),
            Err(e) => warn!(
                "Level {:?} could not be loaded, using the built-in level: {}",
                config.level_path, e
            ),
        }
    } else {
        info!(
            "No level at {:?}, using the built-in level",
            config.level_path
        );
    }
    boot_scenario()
}

/// Insert every simulation resource.
pub fn insert_resources(
    world: &mut World,
    config: GameConfig,
    screen: ScreenSize,
    store: EntityStore,
) {
    let spawn = SpawnPoint::from_store(&store);
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Camera2DRes::centered(spawn.0, screen.w, screen.h));
    world.insert_resource(screen);
    world.insert_resource(EditorState::new(config.start_editing));
    world.insert_resource(Particles::default());
    world.insert_resource(spawn);
    world.insert_resource(store);
    world.insert_resource(config);
}

pub fn register_observers(world: &mut World) {
    world.add_observer(switch_debug_observer);
    world.add_observer(switch_editor_observer);
    world.add_observer(respawn_observer);
    world.add_observer(save_reload_observer);
}

/// Add the simulation systems, in tick order, to `schedule`.
pub fn add_tick_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            hotkeys_system,
            editor_system.run_if(editor_active),
            entity_update_system.run_if(gameplay_active),
            particle_update_system.run_if(editor_inactive),
            camera_system,
        )
            .chain(),
    );
}

/// World with every resource and observer in place, ready for a schedule
/// built with [`add_tick_systems`].
pub fn build_world(config: GameConfig, screen: ScreenSize, store: EntityStore) -> World {
    let mut world = World::new();
    insert_resources(&mut world, config, screen, store);
    register_observers(&mut world);
    world
}
