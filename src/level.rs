//! Level file codec.
//!
//! A level file is a flat concatenation of fixed-size records, one per
//! entity, in storage order. There is no header, version or checksum; the
//! entity count is `file size / RECORD_SIZE` and a file whose size is not an
//! exact multiple is rejected.
//!
//! # Record layout
//!
//! All values little-endian, [`RECORD_SIZE`] bytes per record:
//!
//! | offset | size | field                         |
//! |--------|------|-------------------------------|
//! | 0      | 4    | variant tag (`u32`)           |
//! | 4      | 4    | entity id (`u32`)             |
//! | 8      | 60   | payload, zero padded          |
//!
//! Payloads:
//! - `Player`: pos.x pos.y vel.x vel.y (`f32`), grounded (`u32`), health
//!   (`f32`), has_grab (`u32`), grab id (`u32`)
//! - `Obstacle` / `Ground`: x y width height (`f32`)
//! - `Extinguisher`: pos.x pos.y vel.x vel.y (`f32`), grounded (`u32`),
//!   usage (`f32`)
//! - `Fire`: x y width height intensity emit_timer (`f32`)
//! - `HelpText`: pos.x pos.y (`f32`), label length (`u32`), label bytes
//!
//! Every float must be finite. Decoding validates every record before
//! anything is handed back, so a bad file never partially replaces the
//! current level.

use std::path::Path;

use log::info;
use raylib::prelude::Vector2;
use thiserror::Error;

use crate::components::kinematic::Kinematic;
use crate::components::levelentity::{
    EntityId, EntityKind, Extinguisher, Fire, HelpText, KindTag, LABEL_CAPACITY, Label,
    LevelEntity, Player,
};
use crate::components::levelrect::LevelRect;
use crate::resources::entitystore::{EntityStore, MAX_ENTITIES};

const HEADER_SIZE: usize = 8;
const PAYLOAD_SIZE: usize = 60;

/// Size in bytes of one encoded entity.
pub const RECORD_SIZE: usize = HEADER_SIZE + PAYLOAD_SIZE;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("level data is {len} bytes, not a multiple of the {record} byte record size")]
    Misaligned { len: usize, record: usize },
    #[error("level holds {count} entities, capacity is {capacity}")]
    TooManyEntities { count: usize, capacity: usize },
    #[error("record {index} has unknown variant tag {tag}")]
    UnknownTag { index: usize, tag: u32 },
    #[error("record {index} has an invalid help text label")]
    BadLabel { index: usize },
    #[error("record {index} reuses entity id {id}")]
    DuplicateId { index: usize, id: EntityId },
    #[error("record {index} is a second player")]
    DuplicatePlayer { index: usize },
    #[error("record {index} holds a NaN or infinite number")]
    NonFinite { index: usize },
}

/// Sequential little-endian writer over a record buffer.
struct RecordWriter<'a> {
    buf: &'a mut [u8],
    at: usize,
}

impl<'a> RecordWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, at: 0 }
    }

    fn bytes(&mut self, bytes: &[u8]) {
        self.buf[self.at..self.at + bytes.len()].copy_from_slice(bytes);
        self.at += bytes.len();
    }

    fn u32(&mut self, v: u32) {
        self.bytes(&v.to_le_bytes());
    }

    fn f32(&mut self, v: f32) {
        self.bytes(&v.to_le_bytes());
    }

    fn flag(&mut self, v: bool) {
        self.u32(u32::from(v));
    }

    fn vec2(&mut self, v: Vector2) {
        self.f32(v.x);
        self.f32(v.y);
    }

    fn rect(&mut self, r: &LevelRect) {
        self.f32(r.x);
        self.f32(r.y);
        self.f32(r.width);
        self.f32(r.height);
    }

    fn body(&mut self, k: &Kinematic) {
        self.vec2(k.pos);
        self.vec2(k.vel);
        self.flag(k.grounded);
    }
}

/// Sequential little-endian reader over one record.
///
/// Remembers whether any float read so far was NaN or infinite.
struct RecordReader<'a> {
    buf: &'a [u8],
    at: usize,
    non_finite: bool,
}

impl<'a> RecordReader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            at: 0,
            non_finite: false,
        }
    }

    fn bytes(&mut self, len: usize) -> &'a [u8] {
        let out = &self.buf[self.at..self.at + len];
        self.at += len;
        out
    }

    fn word(&mut self) -> [u8; 4] {
        let mut w = [0u8; 4];
        w.copy_from_slice(self.bytes(4));
        w
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.word())
    }

    fn f32(&mut self) -> f32 {
        let v = f32::from_le_bytes(self.word());
        self.non_finite |= !v.is_finite();
        v
    }

    fn flag(&mut self) -> bool {
        self.u32() != 0
    }

    fn vec2(&mut self) -> Vector2 {
        let x = self.f32();
        let y = self.f32();
        Vector2::new(x, y)
    }

    fn rect(&mut self) -> LevelRect {
        let x = self.f32();
        let y = self.f32();
        let width = self.f32();
        let height = self.f32();
        LevelRect::new(x, y, width, height)
    }

    fn body(&mut self) -> Kinematic {
        let pos = self.vec2();
        let vel = self.vec2();
        let grounded = self.flag();
        Kinematic { pos, vel, grounded }
    }
}

fn encode_record(entity: &LevelEntity, out: &mut [u8]) {
    let mut w = RecordWriter::new(out);
    w.u32(entity.kind.tag() as u32);
    w.u32(entity.id);
    match &entity.kind {
        EntityKind::Player(p) => {
            w.body(&p.body);
            w.f32(p.health);
            w.flag(p.grabbed.is_some());
            w.u32(p.grabbed.unwrap_or(0));
        }
        EntityKind::Obstacle(r) | EntityKind::Ground(r) => w.rect(r),
        EntityKind::Extinguisher(e) => {
            w.body(&e.body);
            w.f32(e.usage);
        }
        EntityKind::Fire(f) => {
            w.rect(&f.rect);
            w.f32(f.intensity);
            w.f32(f.emit_timer);
        }
        EntityKind::HelpText(h) => {
            w.vec2(h.pos);
            w.u32(h.text.len() as u32);
            w.bytes(h.text.as_bytes());
        }
    }
}

fn decode_record(index: usize, record: &[u8]) -> Result<LevelEntity, LevelError> {
    let mut r = RecordReader::new(record);
    let raw_tag = r.u32();
    let id = r.u32();
    let tag = KindTag::from_u32(raw_tag).ok_or(LevelError::UnknownTag {
        index,
        tag: raw_tag,
    })?;
    let kind = match tag {
        KindTag::Player => {
            let body = r.body();
            let health = r.f32();
            let has_grab = r.flag();
            let grab_id = r.u32();
            let mut player = Player {
                body,
                health: 1.0,
                grabbed: has_grab.then_some(grab_id),
            };
            player.set_health(health);
            EntityKind::Player(player)
        }
        KindTag::Obstacle => EntityKind::Obstacle(r.rect()),
        KindTag::Ground => EntityKind::Ground(r.rect()),
        KindTag::Extinguisher => {
            let body = r.body();
            let mut ext = Extinguisher { body, usage: 0.0 };
            ext.add_usage(r.f32());
            EntityKind::Extinguisher(ext)
        }
        KindTag::Fire => {
            let rect = r.rect();
            let intensity = r.f32().clamp(0.0, 1.0);
            let emit_timer = r.f32();
            EntityKind::Fire(Fire {
                rect,
                intensity,
                emit_timer,
            })
        }
        KindTag::HelpText => {
            let pos = r.vec2();
            let len = r.u32() as usize;
            if len > LABEL_CAPACITY {
                return Err(LevelError::BadLabel { index });
            }
            let text = std::str::from_utf8(&r.bytes(LABEL_CAPACITY)[..len])
                .ok()
                .and_then(|s| Label::from(s).ok())
                .ok_or(LevelError::BadLabel { index })?;
            EntityKind::HelpText(HelpText { pos, text })
        }
    };
    if r.non_finite {
        return Err(LevelError::NonFinite { index });
    }
    Ok(LevelEntity { id, kind })
}

/// Encode every entity of `store`, in storage order.
pub fn encode(store: &EntityStore) -> Vec<u8> {
    let mut out = vec![0u8; store.len() * RECORD_SIZE];
    for (entity, chunk) in store.iter().zip(out.chunks_exact_mut(RECORD_SIZE)) {
        encode_record(entity, chunk);
    }
    out
}

/// Decode a whole level. Nothing is returned unless every record is valid.
pub fn decode(bytes: &[u8]) -> Result<EntityStore, LevelError> {
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(LevelError::Misaligned {
            len: bytes.len(),
            record: RECORD_SIZE,
        });
    }
    let count = bytes.len() / RECORD_SIZE;
    if count > MAX_ENTITIES {
        return Err(LevelError::TooManyEntities {
            count,
            capacity: MAX_ENTITIES,
        });
    }

    let mut entities: Vec<LevelEntity> = Vec::with_capacity(count);
    let mut seen_player = false;
    for (index, record) in bytes.chunks_exact(RECORD_SIZE).enumerate() {
        let entity = decode_record(index, record)?;
        if entities.iter().any(|e| e.id == entity.id) {
            return Err(LevelError::DuplicateId {
                index,
                id: entity.id,
            });
        }
        if matches!(entity.kind, EntityKind::Player(_)) {
            if seen_player {
                return Err(LevelError::DuplicatePlayer { index });
            }
            seen_player = true;
        }
        entities.push(entity);
    }

    EntityStore::from_entities(entities).map_err(|_| LevelError::TooManyEntities {
        count,
        capacity: MAX_ENTITIES,
    })
}

/// Write the store to `path`, creating parent directories as needed.
pub fn save_to_file(store: &EntityStore, path: &Path) -> Result<(), LevelError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let bytes = encode(store);
    std::fs::write(path, &bytes)?;
    info!(
        "Saved level {:?}: {} entities, {} bytes",
        path,
        store.len(),
        bytes.len()
    );
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<EntityStore, LevelError> {
    let bytes = std::fs::read(path)?;
    let store = decode(&bytes)?;
    info!("Loaded level {:?}: {} entities", path, store.len());
    Ok(store)
}
