//! Particle update system.
//!
//! Steps every live particle in the ring buffer:
//!
//! 1. Touching an `Obstacle` stops it; particles stick, they never bounce.
//! 2. A `Retardant` particle touching a `Fire` stops, loses half of its
//!    remaining life and lowers that fire's intensity by
//!    [`RETARDANT_FIRE_DECREMENT`].
//! 3. Remaining life counts down and the position integrates.
//!
//! Free slots (non-positive remaining life) are skipped.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::levelentity::EntityKind;
use crate::components::particle::ParticleKind;
use crate::resources::entitystore::EntityStore;
use crate::resources::particles::Particles;
use crate::resources::worldtime::WorldTime;

/// Fire intensity removed by one retardant contact.
pub const RETARDANT_FIRE_DECREMENT: f32 = 0.002;

const STOPPED: Vector2 = Vector2::zero();

/// Advance all particles by `dt` seconds against the level in `store`.
pub fn step_particles(particles: &mut Particles, store: &mut EntityStore, dt: f32) {
    for particle in particles.iter_mut() {
        if !particle.is_alive() {
            continue;
        }

        for entity in store.iter_mut() {
            match &mut entity.kind {
                EntityKind::Obstacle(rect) if rect.has_point(particle.pos) => {
                    particle.vel = STOPPED;
                }
                EntityKind::Fire(fire)
                    if particle.kind == ParticleKind::Retardant
                        && fire.rect.has_point(particle.pos) =>
                {
                    particle.vel = STOPPED;
                    particle.remaining *= 0.5;
                    fire.reduce(RETARDANT_FIRE_DECREMENT);
                }
                _ => {}
            }
        }

        particle.remaining -= dt;
        particle.pos = particle.pos + particle.vel.scale_by(dt);
    }
}

/// System wrapper around [`step_particles`] using the frame delta.
pub fn particle_update_system(
    mut particles: ResMut<Particles>,
    mut store: ResMut<EntityStore>,
    time: Res<WorldTime>,
) {
    step_particles(&mut particles, &mut store, time.delta);
}
