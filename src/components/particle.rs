//! Short-lived visual and interactive particles.
//!
//! Particles are owned by the [`Particles`](crate::resources::particles::Particles)
//! ring buffer and have no identity beyond the slot they occupy. A particle
//! with non-positive `remaining` is a free slot.

use raylib::prelude::{Color, Vector2};

/// What a particle does when it touches the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Extinguisher spray; puts out fires it touches.
    Retardant,
    /// Flame emitted by a fire; purely visual.
    Fire,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vector2,
    pub vel: Vector2,
    /// Seconds left to live.
    pub remaining: f32,
    /// Lifetime the particle was spawned with.
    pub max_lifetime: f32,
    pub color: Color,
    pub kind: ParticleKind,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            pos: Vector2::zero(),
            vel: Vector2::zero(),
            remaining: 0.0,
            max_lifetime: 0.0,
            color: Color {
                r: 255,
                g: 255,
                b: 255,
                a: 255,
            },
            kind: ParticleKind::Fire,
        }
    }
}

impl Particle {
    pub fn new(kind: ParticleKind, pos: Vector2, vel: Vector2, lifetime: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            remaining: lifetime,
            max_lifetime: lifetime,
            color,
            kind,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.remaining > 0.0
    }

    /// Opacity for rendering, `remaining / max_lifetime` in `[0, 1]`.
    pub fn alpha(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.remaining / self.max_lifetime).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Color {
        Color {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }

    #[test]
    fn test_default_particle_is_dead() {
        assert!(!Particle::default().is_alive());
        assert_eq!(Particle::default().alpha(), 0.0);
    }

    #[test]
    fn test_alpha_tracks_remaining_lifetime() {
        let zero = Vector2::zero();
        let mut p = Particle::new(ParticleKind::Retardant, zero, zero, 2.0, white());
        assert_eq!(p.alpha(), 1.0);
        p.remaining = 0.5;
        assert_eq!(p.alpha(), 0.25);
        p.remaining = -1.0;
        assert_eq!(p.alpha(), 0.0);
    }
}
