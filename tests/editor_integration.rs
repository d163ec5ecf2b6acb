//! Editor mode integration tests: placement, dragging, deletion, labels and
//! save/reload, run through the real schedule.

mod common;

use raylib::prelude::Vector2;

use common::*;
use firebreak::components::levelentity::{EntityKind, Extinguisher, HelpText, Player};
use firebreak::components::levelrect::LevelRect;
use firebreak::level;
use firebreak::resources::editor::{EditorState, PlaceKind};
use firebreak::resources::entitystore::EntityStore;
use firebreak::resources::gameconfig::GameConfig;
use firebreak::resources::spawnpoint::SpawnPoint;
use firebreak::systems::editor::MIN_EXTENT;

const DT: f32 = 1.0 / 60.0;

fn editing(dir: &tempfile::TempDir) -> GameConfig {
    let mut config = config_without_level(dir);
    config.start_editing = true;
    config
}

fn editor(world: &bevy_ecs::world::World) -> &EditorState {
    world.resource::<EditorState>()
}

fn set_place_kind(world: &mut bevy_ecs::world::World, kind: PlaceKind) {
    world.resource_mut::<EditorState>().place_kind = kind;
}

#[test]
fn drag_creates_rect_on_release_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = make_world(EntityStore::new(), editing(&dir), DT);

    point_at(&mut world, 100.0, 100.0);
    input(&mut world).pointer_primary.press();
    tick(&mut world);

    point_at(&mut world, 40.0, 103.0);
    input(&mut world).pointer_primary.hold();
    tick(&mut world);
    assert!(entities(&world).is_empty());
    let preview = editor(&world)
        .construction
        .as_ref()
        .and_then(|c| c.kind.rect().copied());
    assert_eq!(preview, Some(LevelRect::new(100.0, 100.0, -60.0, MIN_EXTENT)));

    input(&mut world).pointer_primary.release();
    tick(&mut world);

    assert!(editor(&world).construction.is_none());
    assert_eq!(entities(&world).len(), 1);
    let placed = entities(&world).get(0).unwrap();
    assert_eq!(
        placed.kind,
        EntityKind::Obstacle(LevelRect::new(100.0, 100.0, -60.0, MIN_EXTENT))
    );
}

#[test]
fn wheel_cycles_and_wraps() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = make_world(EntityStore::new(), editing(&dir), DT);

    input(&mut world).wheel = 1.0;
    tick(&mut world);
    assert_eq!(editor(&world).place_kind, PlaceKind::Ground);

    input(&mut world).wheel = -1.0;
    tick(&mut world);
    input(&mut world).wheel = -1.0;
    tick(&mut world);
    assert_eq!(editor(&world).place_kind, PlaceKind::Player);
}

#[test]
fn held_delete_removes_everything_under_pointer() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntityStore::new();
    let keep = store
        .add(EntityKind::Obstacle(LevelRect::new(500.0, 500.0, 10.0, 10.0)))
        .unwrap();
    store
        .add(EntityKind::Ground(LevelRect::new(120.0, 120.0, -40.0, -40.0)))
        .unwrap();
    store
        .add(EntityKind::Extinguisher(Extinguisher::at(110.0, 100.0)))
        .unwrap();
    let last = store
        .add(EntityKind::HelpText(HelpText::new(300.0, 300.0, "keep me")))
        .unwrap();
    let mut world = make_world(store, editing(&dir), DT);

    point_at(&mut world, 100.0, 100.0);
    input(&mut world).pointer_secondary.hold();
    tick(&mut world);

    let ids: Vec<_> = entities(&world).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![keep, last]);
}

#[test]
fn help_text_captures_typing_until_confirm() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = make_world(EntityStore::new(), editing(&dir), DT);
    set_place_kind(&mut world, PlaceKind::HelpText);

    point_at(&mut world, 10.0, 20.0);
    input(&mut world).pointer_primary.press();
    tick(&mut world);
    release_all(&mut world);
    let id = editor(&world).typing.expect("typing a new label");

    input(&mut world).typed.push_str("hot!x");
    input(&mut world).erase.press();
    input(&mut world).toggle_editor.press();
    tick(&mut world);
    release_all(&mut world);
    assert!(editor(&world).active);
    assert_eq!(editor(&world).typing, Some(id));

    input(&mut world).confirm.press();
    tick(&mut world);

    assert_eq!(editor(&world).typing, None);
    match entities(&world).find(id).map(|e| &e.kind) {
        Some(EntityKind::HelpText(text)) => assert_eq!(text.text.as_str(), "hot!"),
        other => panic!("expected help text, got {other:?}"),
    }
}

#[test]
fn placing_a_player_moves_the_existing_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntityStore::new();
    let id = store.add(EntityKind::Player(Player::at(0.0, 0.0))).unwrap();
    let mut world = make_world(store, editing(&dir), DT);
    set_place_kind(&mut world, PlaceKind::Player);

    point_at(&mut world, 300.0, -40.0);
    input(&mut world).pointer_primary.press();
    tick(&mut world);

    assert_eq!(entities(&world).len(), 1);
    assert_eq!(entities(&world).get(0).unwrap().id, id);
    let expected = Vector2::new(300.0, -40.0);
    assert!(approx_eq(player(&world).body.pos.x, expected.x));
    assert!(approx_eq(player(&world).body.pos.y, expected.y));
    assert_eq!(world.resource::<SpawnPoint>().0, player(&world).body.pos);
}

#[test]
fn editor_pauses_gameplay_and_tab_resumes_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntityStore::new();
    let mut p = Player::at(0.0, 0.0);
    p.body.vel = Vector2::new(60.0, 0.0);
    store.add(EntityKind::Player(p)).unwrap();
    let mut world = make_world(store, editing(&dir), DT);

    tick(&mut world);
    assert_eq!(player(&world).body.pos.x, 0.0);

    input(&mut world).toggle_editor.press();
    tick(&mut world);
    assert!(!editor(&world).active);
    assert!(player(&world).body.pos.x > 0.0);
}

#[test]
fn save_hotkey_writes_and_reloads_the_level() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = editing(&dir);
    config.level_path = dir.path().join("levels").join("saved.bin");
    let path = config.level_path.clone();
    let mut store = EntityStore::new();
    store
        .add(EntityKind::Ground(LevelRect::new(0.0, 0.0, 50.0, 50.0)))
        .unwrap();
    let removed = store
        .add(EntityKind::Obstacle(LevelRect::new(0.0, 0.0, 5.0, 5.0)))
        .unwrap();
    store.add(EntityKind::Player(Player::at(25.0, 25.0))).unwrap();
    store.remove(removed);
    let before = store.clone();
    let mut world = make_world(store, config, DT);

    input(&mut world).save_reload.press();
    tick(&mut world);

    let on_disk = level::load_from_file(&path).unwrap();
    assert_eq!(on_disk.as_slice(), before.as_slice());
    assert_eq!(entities(&world).as_slice(), before.as_slice());
    assert_eq!(entities(&world).next_id(), 3);
    assert_eq!(
        world.resource::<SpawnPoint>().0,
        Vector2::new(25.0, 25.0)
    );
}

#[test]
fn deleted_held_extinguisher_does_not_come_back_through_a_reused_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = EntityStore::new();
    store
        .add(EntityKind::Ground(LevelRect::new(-100.0, -100.0, 200.0, 200.0)))
        .unwrap();
    let player_id = store.add(EntityKind::Player(Player::at(0.0, 0.0))).unwrap();
    let held = store
        .add(EntityKind::Extinguisher(Extinguisher::at(200.0, 0.0)))
        .unwrap();
    if let Some(p) = store.find_player_mut() {
        p.grabbed = Some(held);
    }
    let mut world = make_world(store, editing(&dir), DT);

    point_at(&mut world, 200.0, 0.0);
    input(&mut world).pointer_secondary.hold();
    tick(&mut world);
    release_all(&mut world);
    assert!(entities(&world).find(held).is_none());
    assert_eq!(player(&world).grabbed, None);

    input(&mut world).save_reload.press();
    tick(&mut world);
    release_all(&mut world);
    assert_eq!(entities(&world).next_id(), player_id + 1);

    set_place_kind(&mut world, PlaceKind::Extinguisher);
    point_at(&mut world, 1500.0, 1500.0);
    input(&mut world).pointer_primary.press();
    tick(&mut world);
    release_all(&mut world);
    let placed = entities(&world).get(2).map(|e| e.id).unwrap();
    assert_eq!(placed, held);

    input(&mut world).toggle_editor.press();
    tick(&mut world);

    assert!(!editor(&world).active);
    assert_eq!(player(&world).grabbed, None);
    let far = extinguisher(&world, placed);
    assert!(approx_eq(far.body.pos.x, 1500.0));
    assert!(approx_eq(far.body.pos.y, 1500.0));
}
