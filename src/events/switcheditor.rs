//! Event and observer to switch between play and editor mode.
//!
//! Leaving either mode drops whatever the editor had in progress: a
//! half-dragged rectangle is discarded and label typing ends.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::editor::EditorState;

#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchEditorEvent {}

pub fn switch_editor_observer(_trigger: On<SwitchEditorEvent>, mut editor: ResMut<EditorState>) {
    editor.cancel();
    editor.active = !editor.active;
    if editor.active {
        info!("Editor mode on, gameplay paused");
    } else {
        info!("Editor mode off");
    }
}
