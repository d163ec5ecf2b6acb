//! Game systems.
//!
//! This module groups the ECS systems that advance the simulation, drive the
//! editor and draw the frame.
//!
//! Submodules overview
//! - [`camera`] – follow the player, or pan in the editor
//! - [`editor`] – place, stretch, delete and label level entities
//! - [`extinguisher`] – loose extinguisher physics and spraying
//! - [`fire`] – flame emission
//! - [`hotkeys`] – turn one-shot key presses into events
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`particles`] – step the particle ring buffer against the level
//! - [`physics`] – circle-vs-rectangle glide-and-bounce resolver
//! - [`player`] – steering, health, grab and throw
//! - [`render`] – draw the level, particles, overlays and HUD using Raylib
//! - [`simulation`] – per-entity dispatch and run conditions
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod editor;
pub mod extinguisher;
pub mod fire;
pub mod hotkeys;
pub mod input;
pub mod particles;
pub mod physics;
pub mod player;
pub mod render;
pub mod simulation;
pub mod time;
