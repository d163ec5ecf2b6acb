//! Editor mode system.
//!
//! Authoring runs on the same [`EntityStore`] the game plays on:
//!
//! - mouse wheel cycles the kind the next click places
//! - left drag stretches a rectangle kind from the press point to the pointer
//!   and appends it on release
//! - a left click places an extinguisher, a player (moving the existing one
//!   if there is one) or a help text, which then captures typed characters
//!   until `Enter`
//! - holding right removes every entity under the pointer
//!
//! The rectangle being dragged lives in [`EditorState`] and is only added to
//! the store once finished.
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::Vector2;

use crate::components::kinematic::Kinematic;
use crate::components::levelentity::{EntityId, EntityKind, Extinguisher, Fire, HelpText, Player};
use crate::components::levelrect::LevelRect;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::editor::{Construction, EditorState, PlaceKind};
use crate::resources::entitystore::EntityStore;
use crate::resources::input::InputState;
use crate::resources::spawnpoint::SpawnPoint;

/// Smallest width or height a dragged rectangle can have.
pub const MIN_EXTENT: f32 = 8.0;
/// Pointer distance within which a point entity counts as picked.
pub const PICK_RADIUS: f32 = 24.0;

pub fn editor_system(
    mut editor: ResMut<EditorState>,
    mut store: ResMut<EntityStore>,
    mut spawn: ResMut<SpawnPoint>,
    input: Res<InputState>,
    camera: Res<Camera2DRes>,
) {
    let pointer = camera.screen_to_world(input.pointer);

    if let Some(id) = editor.typing {
        if !type_into(&mut store, id, &input) {
            editor.typing = None;
        }
        return;
    }

    if input.wheel != 0.0 && editor.construction.is_none() {
        editor.place_kind = editor.place_kind.cycled(input.wheel.signum() as i32);
        debug!("Placing {}", editor.place_kind.name());
    }

    if input.pointer_secondary.active {
        delete_at(&mut store, pointer);
    }

    if input.pointer_primary.just_pressed {
        place(&mut editor, &mut store, &mut spawn, pointer);
    }

    if input.pointer_primary.active {
        if let Some(construction) = editor.construction.as_mut() {
            stretch(construction, pointer);
        }
    } else {
        finish(&mut editor, &mut store);
    }
}

/// Feed this frame's typed characters into help text `id`.
/// Returns false once typing is over (confirmed, or the text is gone).
fn type_into(store: &mut EntityStore, id: EntityId, input: &InputState) -> bool {
    let Some(EntityKind::HelpText(text)) = store.find_mut(id).map(|e| &mut e.kind) else {
        return false;
    };
    for c in input.typed.chars() {
        if !text.push_char(c) {
            break;
        }
    }
    if input.erase.just_pressed {
        text.pop_char();
    }
    !input.confirm.just_pressed
}

/// Start a drag or drop a point entity at `pointer`.
fn place(editor: &mut EditorState, store: &mut EntityStore, spawn: &mut SpawnPoint, pointer: Vector2) {
    let rect = LevelRect::new(pointer.x, pointer.y, MIN_EXTENT, MIN_EXTENT);
    let added = match editor.place_kind {
        PlaceKind::Obstacle => return start_drag(editor, pointer, EntityKind::Obstacle(rect)),
        PlaceKind::Ground => return start_drag(editor, pointer, EntityKind::Ground(rect)),
        PlaceKind::Fire => return start_drag(editor, pointer, EntityKind::Fire(Fire::new(rect))),
        PlaceKind::Extinguisher => {
            store.add(EntityKind::Extinguisher(Extinguisher::at(pointer.x, pointer.y)))
        }
        PlaceKind::HelpText => {
            let added = store.add(EntityKind::HelpText(HelpText::new(pointer.x, pointer.y, "")));
            if let Ok(id) = added {
                editor.typing = Some(id);
            }
            added
        }
        PlaceKind::Player => {
            spawn.0 = pointer;
            if let Some(player) = store.find_player_mut() {
                player.body = Kinematic::at(pointer.x, pointer.y);
                info!("Moved player to ({:.0}, {:.0})", pointer.x, pointer.y);
                return;
            }
            store.add(EntityKind::Player(Player::at(pointer.x, pointer.y)))
        }
    };
    match added {
        Ok(id) => info!("Placed {} #{}", editor.place_kind.name(), id),
        Err(e) => warn!("Cannot place {}: {}", editor.place_kind.name(), e),
    }
}

fn start_drag(editor: &mut EditorState, origin: Vector2, kind: EntityKind) {
    editor.construction = Some(Construction { origin, kind });
}

/// Resize the rectangle under construction so it spans origin to `pointer`.
fn stretch(construction: &mut Construction, pointer: Vector2) {
    let origin = construction.origin;
    if let Some(rect) = construction.kind.rect_mut() {
        *rect = LevelRect::new(
            origin.x,
            origin.y,
            at_least_min_extent(pointer.x - origin.x),
            at_least_min_extent(pointer.y - origin.y),
        );
    }
}

/// Signed extent with magnitude of at least [`MIN_EXTENT`].
fn at_least_min_extent(extent: f32) -> f32 {
    if extent.abs() < MIN_EXTENT {
        MIN_EXTENT.copysign(extent)
    } else {
        extent
    }
}

/// Append the finished construction to the store.
fn finish(editor: &mut EditorState, store: &mut EntityStore) {
    let Some(construction) = editor.construction.take() else {
        return;
    };
    let name = construction.kind.name();
    match store.add(construction.kind) {
        Ok(id) => info!("Placed {} #{}", name, id),
        Err(e) => warn!("Cannot place {}: {}", name, e),
    }
}

/// Whether `entity` is under `pointer` for deletion purposes.
pub fn is_under(kind: &EntityKind, pointer: Vector2) -> bool {
    if let Some(rect) = kind.rect() {
        return rect.has_point(pointer);
    }
    kind.point()
        .is_some_and(|p| p.distance_to(pointer) <= PICK_RADIUS)
}

fn delete_at(store: &mut EntityStore, pointer: Vector2) {
    let doomed: Vec<EntityId> = store
        .iter()
        .filter(|e| is_under(&e.kind, pointer))
        .map(|e| e.id)
        .collect();
    for id in doomed {
        if let Some(removed) = store.remove(id) {
            info!("Deleted {} #{}", removed.kind.name(), id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_extent_keeps_drag_direction() {
        assert_eq!(at_least_min_extent(3.0), MIN_EXTENT);
        assert_eq!(at_least_min_extent(-3.0), -MIN_EXTENT);
        assert_eq!(at_least_min_extent(0.0), MIN_EXTENT);
        assert_eq!(at_least_min_extent(-40.0), -40.0);
    }

    #[test]
    fn test_is_under_rect_and_point_kinds() {
        let pointer = Vector2::new(10.0, 10.0);
        let negative = EntityKind::Obstacle(LevelRect::new(20.0, 20.0, -15.0, -15.0));
        assert!(is_under(&negative, pointer));

        let near = EntityKind::Extinguisher(Extinguisher::at(10.0 + PICK_RADIUS, 10.0));
        assert!(is_under(&near, pointer));
        let far = EntityKind::HelpText(HelpText::new(10.0 + PICK_RADIUS + 1.0, 10.0, "x"));
        assert!(!is_under(&far, pointer));
    }

    #[test]
    fn test_stretch_follows_pointer_both_ways() {
        let mut c = Construction {
            origin: Vector2::new(100.0, 100.0),
            kind: EntityKind::Ground(LevelRect::new(100.0, 100.0, MIN_EXTENT, MIN_EXTENT)),
        };
        stretch(&mut c, Vector2::new(40.0, 102.0));
        assert_eq!(
            c.kind.rect().copied(),
            Some(LevelRect::new(100.0, 100.0, -60.0, MIN_EXTENT))
        );
    }
}
