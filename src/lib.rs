//! Firebreak library.
//!
//! The simulation core of a small 2D fire-fighting platformer: a
//! fixed-capacity entity store, a glide-and-bounce resolver, a particle ring
//! buffer, a fixed-record level codec and the play/editor systems that drive
//! them. Exposed as a library for the binary and for integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod level;
pub mod resources;
pub mod systems;
