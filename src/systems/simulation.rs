//! Per-entity simulation tick.
//!
//! [`entity_update_system`] walks the entity store once in storage order and
//! dispatches on the variant:
//!
//! - `Player` → [`player::update`](crate::systems::player::update)
//! - `Extinguisher` → [`extinguisher::update`](crate::systems::extinguisher::update)
//! - `Fire` → [`fire::update`](crate::systems::fire::update)
//! - `Obstacle`, `Ground`, `HelpText` are passive
//!
//! A player death only queues a [`RespawnEvent`]. The observer that reloads
//! the level runs when commands are applied, after this system has finished
//! iterating the store.

use bevy_ecs::prelude::*;
use fastrand::Rng;
use raylib::prelude::Vector2;

use crate::components::levelentity::KindTag;
use crate::events::respawn::RespawnEvent;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::editor::EditorState;
use crate::resources::entitystore::EntityStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::particles::Particles;
use crate::resources::spawnpoint::SpawnPoint;
use crate::resources::worldtime::WorldTime;
use crate::systems::{extinguisher, fire, player};

/// Input and timing shared by every behaviour during one tick.
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Seconds to simulate.
    pub dt: f32,
    /// Normalized movement direction.
    pub movement: Vector2,
    /// Grab/throw was pressed this tick.
    pub grab: bool,
    /// Spray is held.
    pub spray: bool,
    /// Pointer in world space.
    pub aim: Vector2,
}

impl TickInput {
    pub fn from_input(input: &InputState, camera: &Camera2DRes, dt: f32) -> Self {
        Self {
            dt,
            movement: input.movement(),
            grab: input.grab.just_pressed,
            spray: input.pointer_primary.active,
            aim: camera.screen_to_world(input.pointer),
        }
    }
}

/// Run condition: play mode with a player in the level.
pub fn gameplay_active(editor: Res<EditorState>, store: Res<EntityStore>) -> bool {
    !editor.active && store.player_index().is_some()
}

/// Run condition: the simulation is not paused by the editor.
pub fn editor_inactive(editor: Res<EditorState>) -> bool {
    !editor.active
}

/// Run condition: the editor overlay is active.
pub fn editor_active(editor: Res<EditorState>) -> bool {
    editor.active
}

/// Advance every entity by one tick, in storage order.
pub fn entity_update_system(
    mut store: ResMut<EntityStore>,
    mut particles: ResMut<Particles>,
    mut spawn: ResMut<SpawnPoint>,
    input: Res<InputState>,
    camera: Res<Camera2DRes>,
    time: Res<WorldTime>,
    config: Res<GameConfig>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    let dt = time.delta;
    if dt <= 0.0 {
        return;
    }
    let tick = TickInput::from_input(&input, &camera, dt);

    let mut died = false;
    for slot in 0..store.len() {
        let Some(tag) = store.get(slot).map(|e| e.kind.tag()) else {
            break;
        };
        match tag {
            KindTag::Player => {
                died |= player::update(&mut store, slot, &tick, &mut spawn);
            }
            KindTag::Extinguisher => {
                extinguisher::update(&mut store, slot, &tick, &mut particles, &mut rng);
            }
            KindTag::Fire => {
                fire::update(&mut store, slot, &tick, &mut particles, &mut rng);
            }
            KindTag::Obstacle | KindTag::Ground | KindTag::HelpText => {}
        }
    }

    if died {
        commands.trigger(RespawnEvent {
            keep_edits: config.respawn_keeps_edits,
        });
    }
}
