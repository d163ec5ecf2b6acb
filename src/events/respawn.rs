//! Respawn event and observer.
//!
//! Triggered by the player dying or by the reset hotkey. The observer runs
//! when commands are applied, never in the middle of the entity update pass.
//!
//! Unless `keep_edits` is set the level is reloaded first: the level file, or
//! the built-in level when there is no file yet. A file that fails to load
//! leaves the current level in place. Either way the particle buffer is
//! emptied and the player is put back on the spawn point with full health,
//! at rest and empty-handed.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::kinematic::Kinematic;
use crate::game;
use crate::level;
use crate::resources::entitystore::EntityStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::particles::Particles;
use crate::resources::spawnpoint::SpawnPoint;

#[derive(Event, Debug, Clone, Copy)]
pub struct RespawnEvent {
    /// Keep the in-memory level instead of reloading the level file.
    pub keep_edits: bool,
}

pub fn respawn_observer(
    trigger: On<RespawnEvent>,
    mut store: ResMut<EntityStore>,
    mut particles: ResMut<Particles>,
    spawn: Res<SpawnPoint>,
    config: Res<GameConfig>,
) {
    let event = trigger.event();

    if !event.keep_edits {
        if config.level_path.exists() {
            match level::load_from_file(&config.level_path) {
                Ok(loaded) => store.replace(loaded),
                Err(e) => warn!(
                    "Respawn could not reload {:?}, keeping current level: {}",
                    config.level_path, e
                ),
            }
        } else {
            match game::boot_scenario() {
                Ok(built_in) => store.replace(built_in),
                Err(e) => warn!("Respawn could not rebuild the built-in level: {}", e),
            }
        }
    }

    particles.clear();

    let Some(player) = store.find_player_mut() else {
        warn!("Respawn requested but the level has no player");
        return;
    };
    player.body = Kinematic::at(spawn.0.x, spawn.0.y);
    player.set_health(1.0);
    player.grabbed = None;
    info!("Respawned at ({:.0}, {:.0})", spawn.0.x, spawn.0.y);
}
