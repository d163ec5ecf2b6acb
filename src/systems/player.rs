//! Player behaviour.
//!
//! Steering only works on the ground: an airborne player keeps its momentum.
//! After moving, the body is resolved against the level with full bounce.
//! Health drains inside fires (scaled by the fire's intensity), drains slowly
//! while airborne and regenerates on the ground.
//!
//! The player carries at most one extinguisher, referenced by id. The grab
//! key picks up the nearest extinguisher in reach, or throws the carried one
//! towards the pointer, pushing the player back by the same impulse.

use raylib::prelude::Vector2;

use crate::components::levelentity::{EntityId, EntityKind, Extinguisher, Player};
use crate::resources::entitystore::EntityStore;
use crate::resources::spawnpoint::SpawnPoint;
use crate::systems::physics::glide_and_bounce;
use crate::systems::simulation::TickInput;

/// Top walking speed in world units per second.
pub const PLAYER_SPEED: f32 = 400.0;
/// How quickly velocity converges to the steering target, per second.
pub const PLAYER_STEER: f32 = 9.0;
pub const PLAYER_BOUNCE: f32 = 1.0;
/// Health lost per second inside a fire at full intensity.
pub const FIRE_DRAIN: f32 = 0.5;
/// Health lost per second while airborne.
pub const AIR_DRAIN: f32 = 0.15;
/// Health regained per second while grounded.
pub const GROUND_REGEN: f32 = 0.1;
/// Maximum distance between player and extinguisher centers for a grab.
pub const GRAB_RADIUS: f32 = 60.0;
/// Speed given to a thrown extinguisher, and taken from the player.
pub const THROW_IMPULSE: f32 = 500.0;

/// Extinguisher with `id`, if it still exists.
pub fn extinguisher_mut(store: &mut EntityStore, id: EntityId) -> Option<&mut Extinguisher> {
    match store.find_mut(id).map(|e| &mut e.kind) {
        Some(EntityKind::Extinguisher(ext)) => Some(ext),
        _ => None,
    }
}

/// First extinguisher in storage order within [`GRAB_RADIUS`] of `pos`.
pub fn extinguisher_in_reach(store: &EntityStore, pos: Vector2) -> Option<EntityId> {
    store.iter().find_map(|e| match &e.kind {
        EntityKind::Extinguisher(ext) if ext.body.pos.distance_to(pos) <= GRAB_RADIUS => Some(e.id),
        _ => None,
    })
}

/// Health change per second for a player at `pos`.
fn health_rate(store: &EntityStore, pos: Vector2, grounded: bool) -> f32 {
    let burning = store.iter().find_map(|e| match &e.kind {
        EntityKind::Fire(fire) if fire.rect.has_point(pos) => Some(fire.intensity),
        _ => None,
    });
    match burning {
        Some(intensity) => -FIRE_DRAIN * intensity,
        None if !grounded => -AIR_DRAIN,
        None => GROUND_REGEN,
    }
}

/// Update the player stored in `slot`. Returns true when health ran out.
pub fn update(
    store: &mut EntityStore,
    slot: usize,
    tick: &TickInput,
    spawn: &mut SpawnPoint,
) -> bool {
    let Some(mut player) = store.player_at_mut(slot).copied() else {
        return false;
    };
    let was_grounded = player.body.grounded;

    let mut body = player.body;
    if body.grounded {
        let target = tick.movement.scale_by(PLAYER_SPEED);
        body.vel = body.vel.lerp(target, (tick.dt * PLAYER_STEER).min(1.0));
    }
    body.integrate(tick.dt);
    player.body = glide_and_bounce(body, PLAYER_BOUNCE, store.as_slice());

    if player.body.grounded && !was_grounded {
        spawn.0 = player.body.pos;
    }

    let rate = health_rate(store, player.body.pos, player.body.grounded);
    player.set_health(player.health + rate * tick.dt);

    // A deleted extinguisher leaves a dangling id behind.
    if let Some(id) = player.grabbed {
        if extinguisher_mut(store, id).is_none() {
            player.grabbed = None;
        }
    }

    if tick.grab {
        match player.grabbed {
            None => player.grabbed = extinguisher_in_reach(store, player.body.pos),
            Some(id) => {
                throw(store, id, &mut player, tick.aim);
                player.grabbed = None;
            }
        }
    }

    if let Some(id) = player.grabbed {
        if let Some(ext) = extinguisher_mut(store, id) {
            ext.body = player.body;
        }
    }

    let dead = player.health <= 0.0;
    if let Some(slot_player) = store.player_at_mut(slot) {
        *slot_player = player;
    }
    dead
}

/// Release extinguisher `id` towards `aim` with an equal and opposite push
/// on the player.
fn throw(store: &mut EntityStore, id: EntityId, player: &mut Player, aim: Vector2) {
    let dir = (aim - player.body.pos).normalized();
    let impulse = dir.scale_by(THROW_IMPULSE);
    if let Some(ext) = extinguisher_mut(store, id) {
        ext.body.pos = player.body.pos;
        ext.body.vel = player.body.vel + impulse;
    }
    player.body.vel = player.body.vel - impulse;
}
