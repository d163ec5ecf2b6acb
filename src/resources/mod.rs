//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. The level itself lives here as the
//! [`entitystore::EntityStore`] resource, next to the particle buffer, the
//! spawn point, input, timing, camera and editor state.
//!
//! Overview
//! - `camera2d` – shared 2D camera used for world/screen transforms
//! - `debugmode` – presence toggles optional debug overlays
//! - `editor` – editor overlay state (placement kind, construction, typing)
//! - `entitystore` – fixed-capacity level entity list with stable ids
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame keyboard and mouse state relevant to the game
//! - `particles` – fixed-capacity particle ring buffer
//! - `screensize` – current framebuffer dimensions in pixels
//! - `spawnpoint` – last grounded player position
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod debugmode;
pub mod editor;
pub mod entitystore;
pub mod gameconfig;
pub mod input;
pub mod particles;
pub mod screensize;
pub mod spawnpoint;
pub mod texturestore;
pub mod worldtime;
