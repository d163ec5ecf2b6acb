//! Editor state resource.
//!
//! Tracks whether the authoring overlay is active, which entity kind the next
//! click places, the rectangle currently being dragged out (not yet in the
//! store) and the help text currently capturing typed characters.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::components::levelentity::{EntityId, EntityKind};

/// Entity kinds the editor can place, in wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceKind {
    #[default]
    Obstacle,
    Ground,
    Fire,
    Extinguisher,
    HelpText,
    Player,
}

impl PlaceKind {
    pub const ALL: [PlaceKind; 6] = [
        PlaceKind::Obstacle,
        PlaceKind::Ground,
        PlaceKind::Fire,
        PlaceKind::Extinguisher,
        PlaceKind::HelpText,
        PlaceKind::Player,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PlaceKind::Obstacle => "Obstacle",
            PlaceKind::Ground => "Ground",
            PlaceKind::Fire => "Fire",
            PlaceKind::Extinguisher => "Extinguisher",
            PlaceKind::HelpText => "HelpText",
            PlaceKind::Player => "Player",
        }
    }

    /// Step `steps` entries through [`PlaceKind::ALL`], wrapping both ways.
    pub fn cycled(self, steps: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0) as i32;
        Self::ALL[(index + steps).rem_euclid(len) as usize]
    }

    /// Whether this kind is authored by dragging out a rectangle.
    pub fn is_rect(self) -> bool {
        matches!(self, PlaceKind::Obstacle | PlaceKind::Ground | PlaceKind::Fire)
    }
}

/// Rectangle entity being dragged out; appended to the store on release.
#[derive(Debug, Clone, PartialEq)]
pub struct Construction {
    pub origin: Vector2,
    pub kind: EntityKind,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct EditorState {
    /// Editor overlay active; gameplay is paused while it is.
    pub active: bool,
    pub place_kind: PlaceKind,
    pub construction: Option<Construction>,
    /// Help text capturing typed characters until confirmed.
    pub typing: Option<EntityId>,
}

impl EditorState {
    pub fn new(active: bool) -> Self {
        Self {
            active,
            ..Self::default()
        }
    }

    /// Drop any in-progress construction or typing.
    pub fn cancel(&mut self) {
        self.construction = None;
        self.typing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(PlaceKind::Obstacle.cycled(1), PlaceKind::Ground);
        assert_eq!(PlaceKind::Obstacle.cycled(-1), PlaceKind::Player);
        assert_eq!(PlaceKind::Player.cycled(1), PlaceKind::Obstacle);
        assert_eq!(PlaceKind::Fire.cycled(6), PlaceKind::Fire);
        assert_eq!(PlaceKind::Ground.cycled(-8), PlaceKind::Player);
    }

    #[test]
    fn test_rect_kinds() {
        assert!(PlaceKind::Obstacle.is_rect());
        assert!(PlaceKind::Fire.is_rect());
        assert!(!PlaceKind::HelpText.is_rect());
        assert!(!PlaceKind::Player.is_rect());
    }

    #[test]
    fn test_cancel_clears_construction() {
        let mut editor = EditorState::new(true);
        editor.typing = Some(3);
        editor.cancel();
        assert!(editor.typing.is_none());
        assert!(editor.construction.is_none());
        assert!(editor.active);
    }
}
