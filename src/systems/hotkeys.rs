//! Global hotkeys.
//!
//! Turns one-shot key presses into events:
//!
//! - `F11` → [`SwitchDebugEvent`]
//! - `Tab` → [`SwitchEditorEvent`]
//! - `F5` (editor) → [`SaveReloadEvent`]
//! - `R` (play) → [`RespawnEvent`]
//!
//! While a help text is capturing typed characters every hotkey is ignored.
use bevy_ecs::prelude::*;

use crate::events::level::SaveReloadEvent;
use crate::events::respawn::RespawnEvent;
use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::switcheditor::SwitchEditorEvent;
use crate::resources::editor::EditorState;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

pub fn hotkeys_system(
    input: Res<InputState>,
    editor: Res<EditorState>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    if editor.typing.is_some() {
        return;
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.toggle_editor.just_pressed {
        commands.trigger(SwitchEditorEvent {});
        return;
    }

    if editor.active {
        if input.save_reload.just_pressed {
            commands.trigger(SaveReloadEvent {});
        }
    } else if input.reset.just_pressed {
        commands.trigger(RespawnEvent {
            keep_edits: config.respawn_keeps_edits,
        });
    }
}
