//! Player spawn point resource.
//!
//! Holds the position the player last landed on ground (airborne to grounded
//! transition). Respawns put the player back here. Loading a level re-derives
//! it from the loaded player.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::entitystore::EntityStore;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SpawnPoint(pub Vector2);

impl Default for SpawnPoint {
    fn default() -> Self {
        Self(Vector2::zero())
    }
}

impl SpawnPoint {
    /// Spawn point for a freshly loaded store: the player's position, or the
    /// origin when the level has no player.
    pub fn from_store(store: &EntityStore) -> Self {
        store
            .find_player()
            .map(|p| Self(p.body.pos))
            .unwrap_or_default()
    }
}
