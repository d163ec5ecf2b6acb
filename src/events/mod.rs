//! Event types and observers.
//!
//! Events are one-shot actions raised with `Commands::trigger` by systems and
//! handled by observers registered on the world. Because observers run when
//! commands are applied, an event raised inside a system always executes
//! after that system has returned.
//!
//! Submodules:
//! - [`level`] – save the level file and load it straight back
//! - [`respawn`] – reload the level and reset the player to the spawn point
//! - [`switchdebug`] – toggle debug rendering and diagnostics on/off
//! - [`switcheditor`] – switch between play and editor mode
pub mod level;
pub mod respawn;
pub mod switchdebug;
pub mod switcheditor;
