//! Kinematic body state and velocity reflection.
//!
//! [`Kinematic`] is embedded in every moving level entity (player and
//! extinguisher). A fresh value is produced each tick by
//! [`glide_and_bounce`](crate::systems::physics::glide_and_bounce); gameplay
//! code only reads it or replaces it as a whole.

use raylib::prelude::Vector2;

/// Radius of the circle every kinematic body collides as.
pub const BODY_RADIUS: f32 = 18.0;

/// Position, velocity and ground contact of a moving body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematic {
    /// Center of the body in world units.
    pub pos: Vector2,
    /// Velocity in world units per second.
    pub vel: Vector2,
    /// Whether the body overlapped a `Ground` rectangle on the last resolve.
    pub grounded: bool,
}

impl Default for Kinematic {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

impl Kinematic {
    /// Body at rest at the given position, airborne.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            vel: Vector2::zero(),
            grounded: false,
        }
    }

    /// Advance the position by `vel * dt`.
    pub fn integrate(&mut self, dt: f32) {
        self.pos = self.pos + self.vel.scale_by(dt);
    }
}

/// Mirror `v` about the plane with unit normal `n`.
pub fn reflect(v: Vector2, n: Vector2) -> Vector2 {
    v - n.scale_by(2.0 * v.dot(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_kinematic_default_at_rest() {
        let k = Kinematic::default();
        assert!(approx_eq(k.vel.x, 0.0));
        assert!(approx_eq(k.vel.y, 0.0));
        assert!(!k.grounded);
    }

    #[test]
    fn test_integrate() {
        let mut k = Kinematic::at(1.0, 2.0);
        k.vel = Vector2::new(10.0, -4.0);
        k.integrate(0.5);
        assert!(approx_eq(k.pos.x, 6.0));
        assert!(approx_eq(k.pos.y, 0.0));
    }

    #[test]
    fn test_reflect_keeps_speed() {
        let v = Vector2::new(3.0, -4.0);
        let n = Vector2::new(1.0, 1.0).normalized();
        assert!(approx_eq(reflect(v, n).length(), v.length()));
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let r = reflect(Vector2::new(5.0, -3.0), Vector2::new(0.0, 1.0));
        assert!(approx_eq(r.x, 5.0));
        assert!(approx_eq(r.y, 3.0));
    }
}
