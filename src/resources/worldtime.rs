//! Simulation clock resource.
//!
//! Every velocity and timer in the game integrates against `delta`; there is
//! no fixed-step accumulator, so the simulation follows the frame rate.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds to simulate this frame.
    pub delta: f32,
}
