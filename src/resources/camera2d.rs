//! Shared 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so that systems can agree on
//! a single world/screen transform. The camera follow system moves it towards
//! the player every frame; the editor converts the pointer through it.

use bevy_ecs::prelude::Resource;
use raylib::prelude::{Camera2D, Vector2};

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Clone, Copy)]
pub struct Camera2DRes(pub Camera2D);

impl Camera2DRes {
    /// Camera looking at `target` with the screen center as offset.
    pub fn centered(target: Vector2, screen_w: i32, screen_h: i32) -> Self {
        Self(Camera2D {
            target,
            offset: Vector2::new(screen_w as f32 * 0.5, screen_h as f32 * 0.5),
            rotation: 0.0,
            zoom: 1.0,
        })
    }

    /// Screen position to world position. The camera never rotates.
    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        let cam = &self.0;
        let zoom = if cam.zoom != 0.0 { cam.zoom } else { 1.0 };
        Vector2::new(
            (screen.x - cam.offset.x) / zoom + cam.target.x,
            (screen.y - cam.offset.y) / zoom + cam.target.y,
        )
    }

    /// World position to screen position.
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        let cam = &self.0;
        Vector2::new(
            (world.x - cam.target.x) * cam.zoom + cam.offset.x,
            (world.y - cam.target.y) * cam.zoom + cam.offset.y,
        )
    }
}
