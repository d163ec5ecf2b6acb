//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the game cares about and
//! exposes it to systems via the [`InputState`] resource. Only derived
//! predicates are stored (down / pressed / released this tick), plus the
//! pointer position, wheel delta and characters typed this tick.
//!
//! Defaults: WASD moves, `E` grabs and throws, left mouse sprays (play) or
//! places (editor), right mouse deletes in the editor, `Tab` toggles the
//! editor, `F5` saves and reloads the level, `R` respawns.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Physical input an action is bound to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    None,
    Key(KeyboardKey),
    Mouse(MouseButton),
}

#[derive(Debug, Clone, Copy)]
/// Boolean button state with an associated binding.
pub struct BoolState {
    /// Whether the button is currently held this frame.
    pub active: bool,
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was just released this frame.
    pub just_released: bool,

    /// The key or mouse button bound to this action.
    pub binding: Binding,
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound(Binding::None)
    }
}

impl BoolState {
    pub fn bound(binding: Binding) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            binding,
        }
    }

    fn key(key: KeyboardKey) -> Self {
        Self::bound(Binding::Key(key))
    }

    fn mouse(button: MouseButton) -> Self {
        Self::bound(Binding::Mouse(button))
    }

    /// Set all three flags at once; handy for tests and replay.
    pub fn set(&mut self, active: bool, just_pressed: bool, just_released: bool) {
        self.active = active;
        self.just_pressed = just_pressed;
        self.just_released = just_released;
    }

    /// Simulate the first frame of a press.
    pub fn press(&mut self) {
        self.set(true, true, false);
    }

    /// Simulate a held button after its first frame.
    pub fn hold(&mut self) {
        self.set(true, false, false);
    }

    /// Simulate the frame the button is let go.
    pub fn release(&mut self) {
        self.set(false, false, true);
    }

    /// Clear all flags.
    pub fn idle(&mut self) {
        self.set(false, false, false);
    }
}

/// Resource capturing the per-frame input relevant to play and edit mode.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_up: BoolState,
    pub move_left: BoolState,
    pub move_down: BoolState,
    pub move_right: BoolState,
    /// Grab an extinguisher, or throw the one being held.
    pub grab: BoolState,
    /// Respawn at the last spawn point.
    pub reset: BoolState,
    /// Primary pointer button: spray in play mode, place in the editor.
    pub pointer_primary: BoolState,
    /// Secondary pointer button: delete in the editor.
    pub pointer_secondary: BoolState,
    pub toggle_editor: BoolState,
    pub save_reload: BoolState,
    /// Finish typing a help text label.
    pub confirm: BoolState,
    pub erase: BoolState,
    pub mode_debug: BoolState,
    /// Pointer position in screen space.
    pub pointer: Vector2,
    /// Mouse wheel movement this frame.
    pub wheel: f32,
    /// Characters typed this frame, in order.
    pub typed: String,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_up: BoolState::key(KeyboardKey::KEY_W),
            move_left: BoolState::key(KeyboardKey::KEY_A),
            move_down: BoolState::key(KeyboardKey::KEY_S),
            move_right: BoolState::key(KeyboardKey::KEY_D),
            grab: BoolState::key(KeyboardKey::KEY_E),
            reset: BoolState::key(KeyboardKey::KEY_R),
            pointer_primary: BoolState::mouse(MouseButton::MOUSE_BUTTON_LEFT),
            pointer_secondary: BoolState::mouse(MouseButton::MOUSE_BUTTON_RIGHT),
            toggle_editor: BoolState::key(KeyboardKey::KEY_TAB),
            save_reload: BoolState::key(KeyboardKey::KEY_F5),
            confirm: BoolState::key(KeyboardKey::KEY_ENTER),
            erase: BoolState::key(KeyboardKey::KEY_BACKSPACE),
            mode_debug: BoolState::key(KeyboardKey::KEY_F11),
            pointer: Vector2::zero(),
            wheel: 0.0,
            typed: String::new(),
        }
    }
}

impl InputState {
    /// Normalized WASD direction, zero when nothing (or opposite keys) is held.
    pub fn movement(&self) -> Vector2 {
        let axis = |neg: &BoolState, pos: &BoolState| f32::from(pos.active) - f32::from(neg.active);
        let dir = Vector2::new(
            axis(&self.move_left, &self.move_right),
            axis(&self.move_up, &self.move_down),
        );
        dir.normalized()
    }

    /// Every button field, for polling.
    pub fn buttons_mut(&mut self) -> [&mut BoolState; 13] {
        [
            &mut self.move_up,
            &mut self.move_left,
            &mut self.move_down,
            &mut self.move_right,
            &mut self.grab,
            &mut self.reset,
            &mut self.pointer_primary,
            &mut self.pointer_secondary,
            &mut self.toggle_editor,
            &mut self.save_reload,
            &mut self.confirm,
            &mut self.erase,
            &mut self.mode_debug,
        ]
    }
}
