//! Input polling system.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the derived predicates into
//! [`InputState`](crate::resources::input::InputState). Nothing else in the
//! game talks to Raylib's input functions.
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::resources::input::{Binding, BoolState, InputState};

/// Refresh one button from its binding.
fn poll_button(button: &mut BoolState, rl: &RaylibHandle) {
    match button.binding {
        Binding::None => button.idle(),
        Binding::Key(key) => button.set(
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        ),
        Binding::Mouse(mb) => button.set(
            rl.is_mouse_button_down(mb),
            rl.is_mouse_button_pressed(mb),
            rl.is_mouse_button_released(mb),
        ),
    }
}

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, mut rl: NonSendMut<RaylibHandle>) {
    for button in input.buttons_mut() {
        poll_button(button, &rl);
    }

    input.pointer = rl.get_mouse_position();
    input.wheel = rl.get_mouse_wheel_move();

    input.typed.clear();
    while let Some(c) = rl.get_char_pressed() {
        if !c.is_control() {
            input.typed.push(c);
        }
    }
}
