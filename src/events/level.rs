//! Level save/reload event and observer.
//!
//! Writes the current store to the configured level file and immediately
//! loads it back, so whatever is in memory afterwards went through the codec.
//! Failures are logged and leave the in-memory level untouched.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::error;

use crate::level::{self, LevelError};
use crate::resources::entitystore::EntityStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::spawnpoint::SpawnPoint;

#[derive(Event, Debug, Clone, Copy)]
pub struct SaveReloadEvent {}

/// Save `store` to `config.level_path` and replace it with what reads back.
pub fn save_and_reload(store: &mut EntityStore, config: &GameConfig) -> Result<(), LevelError> {
    level::save_to_file(store, &config.level_path)?;
    let loaded = level::load_from_file(&config.level_path)?;
    store.replace(loaded);
    Ok(())
}

pub fn save_reload_observer(
    _trigger: On<SaveReloadEvent>,
    mut store: ResMut<EntityStore>,
    mut spawn: ResMut<SpawnPoint>,
    config: Res<GameConfig>,
) {
    match save_and_reload(&mut store, &config) {
        Ok(()) => *spawn = SpawnPoint::from_store(&store),
        Err(e) => error!("Save/reload of {:?} failed: {}", config.level_path, e),
    }
}
