//! Fire behaviour.
//!
//! A burning fire emits one flame particle every interval. The interval
//! shrinks linearly from [`FIRE_INTERVAL_MAX`] at zero intensity to
//! [`FIRE_INTERVAL_MIN`] at full intensity. Fires far from the player keep
//! their timer running but emit nothing.

use fastrand::Rng;
use raylib::prelude::{Color, Vector2};

use crate::components::levelentity::{EntityKind, Fire};
use crate::components::particle::{Particle, ParticleKind};
use crate::resources::entitystore::EntityStore;
use crate::resources::particles::Particles;
use crate::systems::simulation::TickInput;

pub const FIRE_INTERVAL_MAX: f32 = 0.5;
pub const FIRE_INTERVAL_MIN: f32 = 0.02;
/// Fires farther than this from the player do not emit.
pub const FIRE_EMIT_DISTANCE: f32 = 1200.0;
/// Maximum deviation of a flame from the outward direction, in radians.
pub const FLAME_SPREAD: f32 = 0.5;

const FLAME_COLOR: Color = Color {
    r: 255,
    g: 140,
    b: 20,
    a: 255,
};

/// Seconds between two flames at `intensity`.
pub fn emit_interval(intensity: f32) -> f32 {
    FIRE_INTERVAL_MAX + (FIRE_INTERVAL_MIN - FIRE_INTERVAL_MAX) * intensity.clamp(0.0, 1.0)
}

/// Update the fire stored in `slot`.
pub fn update(
    store: &mut EntityStore,
    slot: usize,
    tick: &TickInput,
    particles: &mut Particles,
    rng: &mut Rng,
) {
    let player_pos = store.find_player().map(|p| p.body.pos);
    let Some(EntityKind::Fire(fire)) = store.get_mut(slot).map(|e| &mut e.kind) else {
        return;
    };

    fire.emit_timer += tick.dt;
    if fire.emit_timer < emit_interval(fire.intensity) {
        return;
    }
    fire.emit_timer = 0.0;

    let near = player_pos
        .is_some_and(|pos| pos.distance_to(fire.rect.normalized().center()) <= FIRE_EMIT_DISTANCE);
    if near && !fire.is_out() {
        particles.spawn(flame(fire, rng));
    }
}

fn flame(fire: &Fire, rng: &mut Rng) -> Particle {
    let rect = fire.rect.normalized();
    let pos = rect.lerp_point(rng.f32(), rng.f32());
    let mut outward = (pos - rect.center()).normalized();
    if outward.x == 0.0 && outward.y == 0.0 {
        outward = Vector2::new(0.0, -1.0);
    }
    let dir = outward.rotated((rng.f32() * 2.0 - 1.0) * FLAME_SPREAD);
    let speed = 30.0 + 60.0 * rng.f32();
    let lifetime = 0.4 + 0.6 * rng.f32();
    Particle::new(
        ParticleKind::Fire,
        pos,
        dir.scale_by(speed),
        lifetime,
        FLAME_COLOR,
    )
}
