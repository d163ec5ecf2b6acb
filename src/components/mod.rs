//! Plain data carried by level entities and particles.
//!
//! Submodules:
//! - [`kinematic`] – position/velocity/ground state of moving bodies, vector helpers
//! - [`levelentity`] – the entity variants a level is made of, and their ids
//! - [`levelrect`] – axis-aligned rectangles that may carry negative extents
//! - [`particle`] – short-lived retardant and flame particles
pub mod kinematic;
pub mod levelentity;
pub mod levelrect;
pub mod particle;
