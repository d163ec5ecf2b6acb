//! Particle ring buffer resource.
//!
//! A fixed number of [`Particle`] slots and a write cursor. Spawning always
//! writes the slot under the cursor and advances it, so once the buffer is
//! saturated the oldest particle is silently replaced.

use bevy_ecs::prelude::Resource;

use crate::components::particle::Particle;

/// Default number of particle slots.
pub const MAX_PARTICLES: usize = 1024;

#[derive(Resource, Debug, Clone)]
pub struct Particles {
    slots: Vec<Particle>,
    cursor: usize,
}

impl Default for Particles {
    fn default() -> Self {
        Self::with_capacity(MAX_PARTICLES)
    }
}

impl Particles {
    /// Create a buffer of `capacity` free slots.
    ///
    /// # Panics
    /// If `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "particle buffer needs at least one slot");
        Self {
            slots: vec![Particle::default(); capacity],
            cursor: 0,
        }
    }

    /// Write `particle` into the next slot, replacing whatever was there.
    pub fn spawn(&mut self, particle: Particle) {
        self.slots[self.cursor] = particle;
        self.cursor = (self.cursor + 1) % self.slots.len();
    }

    /// Mark every slot free.
    pub fn clear(&mut self) {
        self.slots.fill(Particle::default());
        self.cursor = 0;
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|p| p.is_alive()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter()
    }

    pub fn iter_live(&self) -> impl Iterator<Item = &Particle> {
        self.slots.iter().filter(|p| p.is_alive())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.slots.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::particle::ParticleKind;
    use raylib::prelude::{Color, Vector2};

    fn particle(lifetime: f32, x: f32) -> Particle {
        Particle::new(
            ParticleKind::Fire,
            Vector2::new(x, 0.0),
            Vector2::zero(),
            lifetime,
            Color {
                r: 255,
                g: 128,
                b: 0,
                a: 255,
            },
        )
    }

    #[test]
    fn test_new_buffer_has_no_live_particles() {
        let particles = Particles::with_capacity(8);
        assert_eq!(particles.capacity(), 8);
        assert_eq!(particles.live_count(), 0);
    }

    #[test]
    fn test_saturation_discards_oldest() {
        let mut particles = Particles::with_capacity(4);
        for i in 0..5 {
            particles.spawn(particle(1.0, i as f32));
        }
        assert_eq!(particles.live_count(), 4);
        let xs: Vec<f32> = particles.iter_live().map(|p| p.pos.x).collect();
        assert!(!xs.contains(&0.0));
        for x in [1.0, 2.0, 3.0, 4.0] {
            assert!(xs.contains(&x));
        }
    }

    #[test]
    fn test_clear_frees_all_slots() {
        let mut particles = Particles::with_capacity(4);
        particles.spawn(particle(1.0, 0.0));
        particles.spawn(particle(1.0, 1.0));
        particles.clear();
        assert_eq!(particles.live_count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        let _ = Particles::with_capacity(0);
    }
}
