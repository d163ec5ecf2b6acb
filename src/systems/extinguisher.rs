//! Extinguisher behaviour.
//!
//! A loose extinguisher is a kinematic body: it bounces softly off obstacles
//! and slides to a halt on ground. A carried one follows the player (the
//! player update moves it) and sprays retardant while the spray input is held
//! and charge remains.

use fastrand::Rng;
use raylib::prelude::Color;

use crate::components::levelentity::{EntityId, EntityKind};
use crate::components::particle::{Particle, ParticleKind};
use crate::resources::entitystore::EntityStore;
use crate::resources::particles::Particles;
use crate::systems::physics::glide_and_bounce;
use crate::systems::simulation::TickInput;

pub const EXTINGUISHER_BOUNCE: f32 = 0.4;
/// Fraction of velocity lost per second while resting on ground.
pub const GROUND_FRICTION: f32 = 4.0;
/// Charge used per second of spraying.
pub const USE_RATE: f32 = 0.1;
pub const SPRAY_SPEED: f32 = 450.0;
/// Maximum angular deviation of a spray particle, in radians.
pub const SPRAY_JITTER: f32 = 0.15;
pub const SPRAY_LIFETIME: f32 = 0.8;
/// Push on the player per second of spraying.
pub const SPRAY_RECOIL: f32 = 300.0;

const RETARDANT_COLOR: Color = Color {
    r: 220,
    g: 235,
    b: 255,
    a: 255,
};

/// Update the extinguisher stored in `slot`.
pub fn update(
    store: &mut EntityStore,
    slot: usize,
    tick: &TickInput,
    particles: &mut Particles,
    rng: &mut Rng,
) {
    let Some((id, mut ext)) = store.get(slot).and_then(|e| match &e.kind {
        EntityKind::Extinguisher(ext) => Some((e.id, *ext)),
        _ => None,
    }) else {
        return;
    };

    if !is_carried(store, id) {
        let mut body = glide_and_bounce(ext.body, EXTINGUISHER_BOUNCE, store.as_slice());
        if body.grounded {
            body.vel = body.vel.scale_by((1.0 - GROUND_FRICTION * tick.dt).max(0.0));
        }
        body.integrate(tick.dt);
        ext.body = body;
    } else if tick.spray && !ext.is_exhausted() {
        ext.add_usage(USE_RATE * tick.dt);
        let aim = (tick.aim - ext.body.pos).normalized();
        let jitter = (rng.f32() * 2.0 - 1.0) * SPRAY_JITTER;
        let dir = aim.rotated(jitter);
        particles.spawn(Particle::new(
            ParticleKind::Retardant,
            ext.body.pos,
            ext.body.vel + dir.scale_by(SPRAY_SPEED),
            SPRAY_LIFETIME,
            RETARDANT_COLOR,
        ));
        if let Some(player) = store.find_player_mut() {
            player.body.vel = player.body.vel - aim.scale_by(SPRAY_RECOIL * tick.dt);
        }
    }

    if let Some(EntityKind::Extinguisher(slot_ext)) = store.get_mut(slot).map(|e| &mut e.kind) {
        *slot_ext = ext;
    }
}

/// Whether the player currently holds extinguisher `id`.
pub fn is_carried(store: &EntityStore, id: EntityId) -> bool {
    store
        .find_player()
        .is_some_and(|p| p.grabbed == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;
    use crate::components::levelentity::{Extinguisher, Player};
    use crate::components::levelrect::LevelRect;

    fn tick(spray: bool, aim: Vector2) -> TickInput {
        TickInput {
            dt: 0.1,
            movement: Vector2::zero(),
            grab: false,
            spray,
            aim,
        }
    }

    fn extinguisher(store: &EntityStore, id: EntityId) -> Extinguisher {
        match store.find(id).map(|e| &e.kind) {
            Some(EntityKind::Extinguisher(ext)) => *ext,
            other => panic!("expected extinguisher, got {other:?}"),
        }
    }

    #[test]
    fn test_loose_extinguisher_slows_on_ground() {
        let mut store = EntityStore::new();
        store
            .add(EntityKind::Ground(LevelRect::new(-100.0, -100.0, 200.0, 200.0)))
            .unwrap();
        let mut ext = Extinguisher::at(0.0, 0.0);
        ext.body.grounded = true;
        ext.body.vel = Vector2::new(100.0, 0.0);
        let id = store.add(EntityKind::Extinguisher(ext)).unwrap();

        let mut particles = Particles::with_capacity(4);
        let mut rng = Rng::with_seed(7);
        update(&mut store, 1, &tick(false, ext.body.pos), &mut particles, &mut rng);

        let after = extinguisher(&store, id);
        assert!(after.body.grounded);
        assert!((after.body.vel.x - 60.0).abs() < 1e-3);
        assert!((after.body.pos.x - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_carried_extinguisher_sprays_and_pushes_player() {
        let mut store = EntityStore::new();
        let ext_id = store
            .add(EntityKind::Extinguisher(Extinguisher::at(0.0, 0.0)))
            .unwrap();
        let mut player = Player::at(0.0, 0.0);
        player.grabbed = Some(ext_id);
        store.add(EntityKind::Player(player)).unwrap();

        let mut particles = Particles::with_capacity(4);
        let mut rng = Rng::with_seed(7);
        update(
            &mut store,
            0,
            &tick(true, Vector2::new(100.0, 0.0)),
            &mut particles,
            &mut rng,
        );

        let ext = extinguisher(&store, ext_id);
        assert!((ext.usage - USE_RATE * 0.1).abs() < 1e-6);
        assert_eq!(particles.live_count(), 1);
        let spray = particles.iter_live().next().unwrap();
        assert_eq!(spray.kind, ParticleKind::Retardant);
        assert!(spray.vel.x > 0.0);

        let player = store.find_player().unwrap();
        assert!((player.body.vel.x + SPRAY_RECOIL * 0.1).abs() < 1e-3);
    }

    #[test]
    fn test_exhausted_extinguisher_does_not_spray() {
        let mut store = EntityStore::new();
        let mut ext = Extinguisher::at(0.0, 0.0);
        ext.usage = 1.0;
        let ext_id = store.add(EntityKind::Extinguisher(ext)).unwrap();
        let mut player = Player::at(0.0, 0.0);
        player.grabbed = Some(ext_id);
        store.add(EntityKind::Player(player)).unwrap();

        let mut particles = Particles::with_capacity(4);
        let mut rng = Rng::with_seed(1);
        update(
            &mut store,
            0,
            &tick(true, Vector2::new(100.0, 0.0)),
            &mut particles,
            &mut rng,
        );

        assert_eq!(particles.live_count(), 0);
        assert_eq!(extinguisher(&store, ext_id).usage, 1.0);
    }
}
