//! Camera update system.
//!
//! In play mode the camera eases towards the player. In the editor it is
//! panned with the movement keys instead, except while a label is being typed.
use bevy_ecs::prelude::*;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::editor::EditorState;
use crate::resources::entitystore::EntityStore;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// How fast the camera closes the gap to the player, per second.
pub const CAMERA_FOLLOW: f32 = 5.0;
/// Editor pan speed in world units per second.
pub const EDITOR_PAN_SPEED: f32 = 600.0;

pub fn camera_system(
    mut camera: ResMut<Camera2DRes>,
    store: Res<EntityStore>,
    editor: Res<EditorState>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Option<Res<ScreenSize>>,
) {
    let dt = time.delta;
    let cam = &mut camera.0;
    if let Some(screen) = screen {
        cam.offset.x = screen.w as f32 * 0.5;
        cam.offset.y = screen.h as f32 * 0.5;
    }

    if editor.active {
        if editor.typing.is_none() {
            cam.target = cam.target + input.movement().scale_by(EDITOR_PAN_SPEED * dt);
        }
    } else if let Some(player) = store.find_player() {
        cam.target = cam.target.lerp(player.body.pos, (dt * CAMERA_FOLLOW).min(1.0));
    }
}
