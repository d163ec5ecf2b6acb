//! Entity store resource.
//!
//! Fixed-capacity, densely packed list of [`LevelEntity`] values in storage
//! order. Identity is the [`EntityId`] issued by [`EntityStore::add`], not the
//! slot: removing an entity shifts later entities down but never renumbers
//! them.
//!
//! Lookups are linear scans; the store is small and bounded.
//!
//! The player's grab is an id, so the store drops it whenever the grabbed
//! extinguisher leaves (removal, or a loaded level that never had it).

use arrayvec::ArrayVec;
use bevy_ecs::prelude::Resource;
use thiserror::Error;

use crate::components::levelentity::{EntityId, EntityKind, LevelEntity, Player};

/// Maximum number of entities a level can hold.
pub const MAX_ENTITIES: usize = 256;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("entity store is full ({capacity} entities)")]
    Full { capacity: usize },
}

#[derive(Resource, Debug, Clone, Default)]
pub struct EntityStore {
    entities: ArrayVec<LevelEntity, MAX_ENTITIES>,
    next_id: EntityId,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-identified entities (e.g. a loaded level).
    ///
    /// The id counter is reseeded above the largest id found.
    pub fn from_entities(
        entities: impl IntoIterator<Item = LevelEntity>,
    ) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for entity in entities {
            store
                .entities
                .try_push(entity)
                .map_err(|_| StoreError::Full {
                    capacity: MAX_ENTITIES,
                })?;
        }
        store.next_id = store
            .entities
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(0, |max| max + 1);
        store.release_dangling_grab();
        Ok(store)
    }

    /// Append an entity and return its newly issued id.
    ///
    /// A full store rejects the entity; nothing is overwritten.
    pub fn add(&mut self, kind: EntityKind) -> Result<EntityId, StoreError> {
        let id = self.next_id;
        self.entities
            .try_push(LevelEntity { id, kind })
            .map_err(|_| StoreError::Full {
                capacity: MAX_ENTITIES,
            })?;
        self.next_id += 1;
        Ok(id)
    }

    /// Remove the entity with `id`, compacting later entities down.
    /// Returns the removed entity, `None` if the id is absent.
    pub fn remove(&mut self, id: EntityId) -> Option<LevelEntity> {
        let index = self.index_of(id)?;
        let removed = self.entities.remove(index);
        self.release_dangling_grab();
        Some(removed)
    }

    /// Clear the player's grab if it no longer names an extinguisher here.
    fn release_dangling_grab(&mut self) {
        let Some(id) = self.find_player().and_then(|p| p.grabbed) else {
            return;
        };
        let held = matches!(
            self.find(id).map(|e| &e.kind),
            Some(EntityKind::Extinguisher(_))
        );
        if !held {
            if let Some(player) = self.find_player_mut() {
                player.grabbed = None;
            }
        }
    }

    /// Replace the whole store contents, keeping this resource in place.
    pub fn replace(&mut self, other: EntityStore) {
        *self = other;
    }

    pub fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|e| e.id == id)
    }

    pub fn find(&self, id: EntityId) -> Option<&LevelEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn find_mut(&mut self, id: EntityId) -> Option<&mut LevelEntity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Slot of the (unique) player entity.
    pub fn player_index(&self) -> Option<usize> {
        self.entities
            .iter()
            .position(|e| matches!(e.kind, EntityKind::Player(_)))
    }

    pub fn find_player(&self) -> Option<&Player> {
        self.entities.iter().find_map(|e| match &e.kind {
            EntityKind::Player(p) => Some(p),
            _ => None,
        })
    }

    pub fn find_player_mut(&mut self) -> Option<&mut Player> {
        self.entities.iter_mut().find_map(|e| match &mut e.kind {
            EntityKind::Player(p) => Some(p),
            _ => None,
        })
    }

    /// Player stored in `slot`, if that slot holds the player.
    pub fn player_at_mut(&mut self, slot: usize) -> Option<&mut Player> {
        match self.entities.get_mut(slot).map(|e| &mut e.kind) {
            Some(EntityKind::Player(p)) => Some(p),
            _ => None,
        }
    }

    pub fn get(&self, slot: usize) -> Option<&LevelEntity> {
        self.entities.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut LevelEntity> {
        self.entities.get_mut(slot)
    }

    pub fn as_slice(&self) -> &[LevelEntity] {
        &self.entities
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelEntity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LevelEntity> {
        self.entities.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entities.is_full()
    }

    /// Id the next [`add`](Self::add) will issue.
    pub fn next_id(&self) -> EntityId {
        self.next_id
    }
}
