//! Shared helpers for the integration tests.

#![allow(dead_code)]

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use firebreak::components::levelentity::{EntityId, EntityKind, Extinguisher, Fire, Player};
use firebreak::game;
use firebreak::resources::camera2d::Camera2DRes;
use firebreak::resources::entitystore::EntityStore;
use firebreak::resources::gameconfig::GameConfig;
use firebreak::resources::input::InputState;
use firebreak::resources::screensize::ScreenSize;
use firebreak::resources::worldtime::WorldTime;

pub const EPSILON: f32 = 1e-3;

pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// World booted on `store` with a fixed frame delta.
pub fn make_world(store: EntityStore, config: GameConfig, delta: f32) -> World {
    let mut world = game::build_world(config, ScreenSize { w: 800, h: 600 }, store);
    world.insert_resource(WorldTime { delta });
    world
}

/// Run one simulation tick.
pub fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    game::add_tick_systems(&mut schedule);
    schedule.run(world);
}

pub fn input(world: &mut World) -> Mut<'_, InputState> {
    world.resource_mut::<InputState>()
}

/// Point the cursor at a world position through the current camera.
pub fn point_at(world: &mut World, x: f32, y: f32) {
    let screen = world
        .resource::<Camera2DRes>()
        .world_to_screen(Vector2::new(x, y));
    input(world).pointer = screen;
}

/// Clear every button and per-frame input.
pub fn release_all(world: &mut World) {
    let mut input = input(world);
    for button in input.buttons_mut() {
        button.idle();
    }
    input.wheel = 0.0;
    input.typed.clear();
}

pub fn entities(world: &World) -> &EntityStore {
    world.resource::<EntityStore>()
}

pub fn player(world: &World) -> Player {
    *entities(world).find_player().expect("player present")
}

pub fn extinguisher(world: &World, id: EntityId) -> Extinguisher {
    match entities(world).find(id).map(|e| &e.kind) {
        Some(EntityKind::Extinguisher(ext)) => *ext,
        other => panic!("expected extinguisher #{id}, got {other:?}"),
    }
}

pub fn fire(world: &World, id: EntityId) -> Fire {
    match entities(world).find(id).map(|e| &e.kind) {
        Some(EntityKind::Fire(fire)) => *fire,
        other => panic!("expected fire #{id}, got {other:?}"),
    }
}

/// Configuration pointing at a level file that does not exist.
pub fn config_without_level(dir: &tempfile::TempDir) -> GameConfig {
    let mut config = GameConfig::with_path(dir.path().join("config.ini"));
    config.level_path = dir.path().join("missing.bin");
    config
}
