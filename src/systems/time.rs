//! Time update.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Store this frame's delta on the `WorldTime` resource.
///
/// `dt` is the frame delta in seconds; a negative value counts as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().delta = dt.max(0.0);
}
