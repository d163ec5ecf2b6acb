//! Glide-and-bounce collision resolver.
//!
//! Resolves a circular [`Kinematic`] body of radius [`BODY_RADIUS`] against
//! every `Obstacle` and `Ground` rectangle in storage order:
//!
//! - `Obstacle`: if the body penetrates, it is pushed out to exactly one
//!   radius from the closest point of the rectangle and its velocity is
//!   reflected about the contact normal and scaled by `bounce`.
//! - `Ground`: if the body center (as it was on entry) is inside, the result
//!   is grounded. Ground never displaces or reflects.
//!
//! Obstacles are resolved independently and cumulatively: a body touching
//! two obstacles in the same tick is pushed and reflected by both, in order.
//! Corners can therefore jitter; that is the documented behaviour.

use raylib::prelude::Vector2;

use crate::components::kinematic::{BODY_RADIUS, Kinematic, reflect};
use crate::components::levelentity::{EntityKind, LevelEntity};
use crate::components::levelrect::LevelRect;

/// Contact between a body and an obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Closest point of the rectangle surface to the body center.
    pub point: Vector2,
    /// Unit normal pointing from the surface towards the body.
    pub normal: Vector2,
}

/// Closest point on (or inside) `rect` to `center`.
pub fn closest_point(rect: &LevelRect, center: Vector2) -> Vector2 {
    let c = rect.center();
    let half = rect.half_extents();
    let rel = center - c;
    Vector2::new(
        c.x + rel.x.clamp(-half.x, half.x),
        c.y + rel.y.clamp(-half.y, half.y),
    )
}

/// Contact of a circle of `radius` at `center` with `rect`, if penetrating.
///
/// When the center lies inside the rectangle the closest-point normal is
/// degenerate, so the exit is taken through the nearest edge instead
/// (ties favour the x axis, then the min side).
pub fn penetration(rect: &LevelRect, center: Vector2, radius: f32) -> Option<Contact> {
    let point = closest_point(rect, center);
    let offset = center - point;
    let dist = offset.length();
    if dist >= radius {
        return None;
    }
    if dist > 0.0 {
        return Some(Contact {
            point,
            normal: offset.normalized(),
        });
    }

    let (min, max) = rect.aabb();
    let exits = [
        (center.x - min.x, Vector2::new(-1.0, 0.0)),
        (max.x - center.x, Vector2::new(1.0, 0.0)),
        (center.y - min.y, Vector2::new(0.0, -1.0)),
        (max.y - center.y, Vector2::new(0.0, 1.0)),
    ];
    let mut best = exits[0];
    for exit in &exits[1..] {
        if exit.0 < best.0 {
            best = *exit;
        }
    }
    let (depth, normal) = best;
    Some(Contact {
        point: Vector2::new(center.x + normal.x * depth, center.y + normal.y * depth),
        normal,
    })
}

/// Resolve one tick of collisions for `body` against the level.
///
/// `bounce` is the fraction of velocity kept after a reflection, in `[0, 1]`.
pub fn glide_and_bounce(body: Kinematic, bounce: f32, entities: &[LevelEntity]) -> Kinematic {
    let entry = body.pos;
    let mut out = Kinematic {
        grounded: false,
        ..body
    };

    for entity in entities {
        match &entity.kind {
            EntityKind::Obstacle(rect) => {
                if let Some(contact) = penetration(rect, out.pos, BODY_RADIUS) {
                    out.pos = contact.point + contact.normal.scale_by(BODY_RADIUS);
                    out.vel = reflect(out.vel, contact.normal).scale_by(bounce);
                }
            }
            EntityKind::Ground(rect) => {
                if !out.grounded && rect.has_point(entry) {
                    out.grounded = true;
                }
            }
            EntityKind::Player(_)
            | EntityKind::Extinguisher(_)
            | EntityKind::Fire(_)
            | EntityKind::HelpText(_) => {}
        }
    }

    out
}
