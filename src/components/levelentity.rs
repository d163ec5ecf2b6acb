//! Level entities.
//!
//! A [`LevelEntity`] pairs a stable [`EntityId`] with an [`EntityKind`], the
//! closed set of things a level is made of. Entities live in the
//! [`EntityStore`](crate::resources::entitystore::EntityStore); other code
//! refers to them by id only and resolves the id on every use.
//!
//! All fractional fields (health, fire intensity, extinguisher usage) are kept
//! in `[0, 1]` through the `set_*`/`add_*` helpers below.

use arrayvec::ArrayString;
use raylib::prelude::Vector2;

use crate::components::kinematic::Kinematic;
use crate::components::levelrect::LevelRect;

/// Identifier issued by the entity store. Never reused, never renumbered.
pub type EntityId = u32;

/// Maximum label length in bytes. Part of the fixed level record layout.
pub const LABEL_CAPACITY: usize = 48;

/// Fixed-capacity help text label.
pub type Label = ArrayString<LABEL_CAPACITY>;

/// Usage fraction at which an extinguisher stops spraying.
pub const EXTINGUISHER_EXHAUSTED: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub body: Kinematic,
    /// Health in `[0, 1]`. Reaching 0 requests a respawn.
    pub health: f32,
    /// Extinguisher currently carried, if any. May dangle after editor
    /// deletion; resolve before use.
    pub grabbed: Option<EntityId>,
}

impl Player {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            body: Kinematic::at(x, y),
            health: 1.0,
            grabbed: None,
        }
    }

    pub fn set_health(&mut self, health: f32) {
        self.health = health.clamp(0.0, 1.0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extinguisher {
    pub body: Kinematic,
    /// Fraction of the charge already used, in `[0, 1]`.
    pub usage: f32,
}

impl Extinguisher {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            body: Kinematic::at(x, y),
            usage: 0.0,
        }
    }

    pub fn add_usage(&mut self, amount: f32) {
        self.usage = (self.usage + amount).clamp(0.0, 1.0);
    }

    pub fn is_exhausted(&self) -> bool {
        self.usage >= EXTINGUISHER_EXHAUSTED
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fire {
    pub rect: LevelRect,
    /// Remaining intensity in `[0, 1]`; 0 means the fire is out.
    pub intensity: f32,
    /// Seconds since the last emitted particle.
    pub emit_timer: f32,
}

impl Fire {
    pub fn new(rect: LevelRect) -> Self {
        Self {
            rect,
            intensity: 1.0,
            emit_timer: 0.0,
        }
    }

    pub fn reduce(&mut self, amount: f32) {
        self.intensity = (self.intensity - amount).clamp(0.0, 1.0);
    }

    pub fn is_out(&self) -> bool {
        self.intensity <= 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HelpText {
    pub pos: Vector2,
    pub text: Label,
}

impl HelpText {
    pub fn new(x: f32, y: f32, text: &str) -> Self {
        let mut label = Label::new();
        push_truncated(&mut label, text);
        Self {
            pos: Vector2::new(x, y),
            text: label,
        }
    }

    /// Append a typed character. Returns false when the label is full.
    pub fn push_char(&mut self, c: char) -> bool {
        self.text.try_push(c).is_ok()
    }

    pub fn pop_char(&mut self) -> Option<char> {
        self.text.pop()
    }
}

/// Push as much of `text` as fits, never splitting a character.
fn push_truncated(label: &mut Label, text: &str) {
    for c in text.chars() {
        if label.try_push(c).is_err() {
            break;
        }
    }
}

/// Discriminant of [`EntityKind`]; the numeric value is the level file tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindTag {
    Player = 0,
    Obstacle = 1,
    Ground = 2,
    Extinguisher = 3,
    Fire = 4,
    HelpText = 5,
}

impl KindTag {
    pub fn from_u32(tag: u32) -> Option<Self> {
        match tag {
            0 => Some(KindTag::Player),
            1 => Some(KindTag::Obstacle),
            2 => Some(KindTag::Ground),
            3 => Some(KindTag::Extinguisher),
            4 => Some(KindTag::Fire),
            5 => Some(KindTag::HelpText),
            _ => None,
        }
    }
}

/// The closed set of level entity variants.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Player(Player),
    Obstacle(LevelRect),
    Ground(LevelRect),
    Extinguisher(Extinguisher),
    Fire(Fire),
    HelpText(HelpText),
}

impl EntityKind {
    pub fn tag(&self) -> KindTag {
        match self {
            EntityKind::Player(_) => KindTag::Player,
            EntityKind::Obstacle(_) => KindTag::Obstacle,
            EntityKind::Ground(_) => KindTag::Ground,
            EntityKind::Extinguisher(_) => KindTag::Extinguisher,
            EntityKind::Fire(_) => KindTag::Fire,
            EntityKind::HelpText(_) => KindTag::HelpText,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.tag() {
            KindTag::Player => "Player",
            KindTag::Obstacle => "Obstacle",
            KindTag::Ground => "Ground",
            KindTag::Extinguisher => "Extinguisher",
            KindTag::Fire => "Fire",
            KindTag::HelpText => "HelpText",
        }
    }

    /// Rectangle for rectangle-bearing variants.
    pub fn rect(&self) -> Option<&LevelRect> {
        match self {
            EntityKind::Obstacle(r) | EntityKind::Ground(r) => Some(r),
            EntityKind::Fire(f) => Some(&f.rect),
            EntityKind::Player(_) | EntityKind::Extinguisher(_) | EntityKind::HelpText(_) => None,
        }
    }

    pub fn rect_mut(&mut self) -> Option<&mut LevelRect> {
        match self {
            EntityKind::Obstacle(r) | EntityKind::Ground(r) => Some(r),
            EntityKind::Fire(f) => Some(&mut f.rect),
            EntityKind::Player(_) | EntityKind::Extinguisher(_) | EntityKind::HelpText(_) => None,
        }
    }

    /// Anchor position for point variants.
    pub fn point(&self) -> Option<Vector2> {
        match self {
            EntityKind::Player(p) => Some(p.body.pos),
            EntityKind::Extinguisher(e) => Some(e.body.pos),
            EntityKind::HelpText(h) => Some(h.pos),
            EntityKind::Obstacle(_) | EntityKind::Ground(_) | EntityKind::Fire(_) => None,
        }
    }
}

/// One entry of the entity store.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelEntity {
    pub id: EntityId,
    pub kind: EntityKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_health_is_clamped() {
        let mut p = Player::at(0.0, 0.0);
        p.set_health(1.7);
        assert_eq!(p.health, 1.0);
        p.set_health(-0.2);
        assert_eq!(p.health, 0.0);
    }

    #[test]
    fn test_extinguisher_usage_is_clamped_and_exhausts() {
        let mut e = Extinguisher::at(0.0, 0.0);
        e.add_usage(0.6);
        assert!(!e.is_exhausted());
        e.add_usage(0.6);
        assert_eq!(e.usage, 1.0);
        assert!(e.is_exhausted());
    }

    #[test]
    fn test_fire_reduce_floors_at_zero() {
        let mut f = Fire::new(LevelRect::new(0.0, 0.0, 10.0, 10.0));
        f.intensity = 0.01;
        f.reduce(0.05);
        assert_eq!(f.intensity, 0.0);
        assert!(f.is_out());
    }

    #[test]
    fn test_help_text_truncates_to_capacity() {
        let long = "x".repeat(LABEL_CAPACITY + 10);
        let mut h = HelpText::new(0.0, 0.0, &long);
        assert_eq!(h.text.len(), LABEL_CAPACITY);
        assert!(!h.push_char('y'));
        assert_eq!(h.pop_char(), Some('x'));
        assert!(h.push_char('y'));
    }

    #[test]
    fn test_kind_geometry_accessors() {
        let ground = EntityKind::Ground(LevelRect::new(1.0, 2.0, 3.0, 4.0));
        assert!(ground.rect().is_some());
        assert!(ground.point().is_none());
        let text = EntityKind::HelpText(HelpText::new(5.0, 6.0, "hi"));
        assert!(text.rect().is_none());
        assert_eq!(text.point().map(|p| p.x), Some(5.0));
        assert_eq!(text.name(), "HelpText");
    }

    #[test]
    fn test_kind_tag_numbers_roundtrip() {
        for tag in [
            KindTag::Player,
            KindTag::Obstacle,
            KindTag::Ground,
            KindTag::Extinguisher,
            KindTag::Fire,
            KindTag::HelpText,
        ] {
            assert_eq!(KindTag::from_u32(tag as u32), Some(tag));
        }
        assert_eq!(KindTag::from_u32(6), None);
    }
}
