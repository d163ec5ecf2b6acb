//! Texture store resource.
//!
//! A non-send resource holding the textures the renderer draws, keyed by
//! string IDs. Textures are optional: the renderer falls back to primitives
//! when a key is missing.
//!
//! Note: This is a non-send resource because Raylib textures must be accessed
//! from the main thread only.

use raylib::prelude::Texture2D;
use std::collections::HashMap;

/// Key of the extinguisher sprite.
pub const EXTINGUISHER_TEXTURE: &str = "extinguisher";

/// Map of texture keys to loaded textures.
///
/// This is a non-send resource; use `NonSend<TextureStore>` in system parameters.
#[derive(Default)]
pub struct TextureStore {
    map: HashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.map.insert(id.into(), texture);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(id.as_ref())
    }
}
