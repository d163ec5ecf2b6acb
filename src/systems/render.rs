use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::kinematic::BODY_RADIUS;
use crate::components::levelentity::{EntityKind, LevelEntity};
use crate::components::levelrect::LevelRect;
use crate::components::particle::Particle;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::editor::EditorState;
use crate::resources::entitystore::EntityStore;
use crate::resources::particles::Particles;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::{EXTINGUISHER_TEXTURE, TextureStore};
use crate::systems::editor::PICK_RADIUS;

const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    Color { r, g, b, a }
}

const BACKGROUND: Color = rgba(24, 26, 32, 255);
const OBSTACLE_COLOR: Color = rgba(120, 120, 135, 255);
const GROUND_COLOR: Color = rgba(60, 140, 70, 255);
const FIRE_COLOR: Color = rgba(230, 80, 20, 255);
const PLAYER_COLOR: Color = rgba(240, 200, 60, 255);
const EXTINGUISHER_COLOR: Color = rgba(200, 30, 30, 255);
const TEXT_COLOR: Color = rgba(230, 230, 230, 255);
const PREVIEW_COLOR: Color = rgba(255, 255, 255, 90);

/// `color` with its alpha scaled by `alpha` in `[0, 1]`.
fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8,
        ..color
    }
}

/// World-space drawing of one level entity.
fn draw_entity<D: RaylibDraw>(d: &mut D, entity: &LevelEntity, textures: &TextureStore) {
    match &entity.kind {
        EntityKind::Obstacle(rect) => d.draw_rectangle_rec(rect.to_raylib(), OBSTACLE_COLOR),
        EntityKind::Ground(rect) => {
            d.draw_rectangle_rec(rect.to_raylib(), with_alpha(GROUND_COLOR, 0.35))
        }
        EntityKind::Fire(fire) => {
            let alpha = 0.15 + 0.6 * fire.intensity;
            d.draw_rectangle_rec(fire.rect.to_raylib(), with_alpha(FIRE_COLOR, alpha));
        }
        EntityKind::Player(player) => {
            d.draw_circle_v(player.body.pos, BODY_RADIUS, PLAYER_COLOR);
        }
        EntityKind::Extinguisher(ext) => {
            if let Some(tex) = textures.get(EXTINGUISHER_TEXTURE) {
                let size = BODY_RADIUS * 2.0;
                let src = Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: tex.width as f32,
                    height: tex.height as f32,
                };
                let dest = Rectangle {
                    x: ext.body.pos.x,
                    y: ext.body.pos.y,
                    width: size,
                    height: size,
                };
                let origin = Vector2::new(BODY_RADIUS, BODY_RADIUS);
                d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
            } else {
                d.draw_circle_v(ext.body.pos, BODY_RADIUS * 0.7, EXTINGUISHER_COLOR);
            }
        }
        EntityKind::HelpText(text) => {
            d.draw_text(
                text.text.as_str(),
                text.pos.x as i32,
                text.pos.y as i32,
                20,
                TEXT_COLOR,
            );
        }
    }
}

fn draw_particle<D: RaylibDraw>(d: &mut D, particle: &Particle) {
    d.draw_circle_v(particle.pos, 3.0, with_alpha(particle.color, particle.alpha()));
}

fn draw_debug<D: RaylibDraw>(d: &mut D, store: &EntityStore) {
    for entity in store.iter() {
        if let Some(rect) = entity.kind.rect() {
            d.draw_rectangle_lines_ex(rect.to_raylib(), 1.0, Color::RED);
        }
        if let Some(point) = entity.kind.point() {
            d.draw_circle_lines(point.x as i32, point.y as i32, PICK_RADIUS, Color::GREEN);
        }
    }
}

fn draw_bar<D: RaylibDraw>(d: &mut D, y: i32, label: &str, fraction: f32, color: Color) {
    d.draw_text(label, 10, y, 20, TEXT_COLOR);
    d.draw_rectangle_lines(140, y, 202, 20, TEXT_COLOR);
    d.draw_rectangle(141, y + 1, (200.0 * fraction.clamp(0.0, 1.0)) as i32, 18, color);
}

/// Draw the level, particles, editor overlay and HUD for this frame.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    camera: Res<Camera2DRes>,
    screen: Res<ScreenSize>,
    store: Res<EntityStore>,
    particles: Res<Particles>,
    editor: Res<EditorState>,
    debug: Option<Res<DebugMode>>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    {
        let mut d2 = d.begin_mode2D(camera.0);
        for entity in store.iter() {
            draw_entity(&mut d2, entity, &textures);
        }
        for particle in particles.iter_live() {
            draw_particle(&mut d2, particle);
        }
        if let Some(rect) = editor
            .construction
            .as_ref()
            .and_then(|c| c.kind.rect())
            .map(LevelRect::to_raylib)
        {
            d2.draw_rectangle_rec(rect, PREVIEW_COLOR);
            d2.draw_rectangle_lines_ex(rect, 1.0, Color::WHITE);
        }
        if debug.is_some() {
            draw_debug(&mut d2, &store);
        }
    }

    if let Some(player) = store.find_player() {
        draw_bar(&mut d, 10, "Health", player.health, Color::GREEN);
        let usage = player
            .grabbed
            .and_then(|id| store.find(id))
            .and_then(|e| match &e.kind {
                EntityKind::Extinguisher(ext) => Some(ext.usage),
                _ => None,
            });
        if let Some(usage) = usage {
            draw_bar(&mut d, 36, "Charge", 1.0 - usage, Color::SKYBLUE);
        }
    }

    if editor.active {
        let banner = match editor.typing {
            Some(_) => "EDITOR | typing label, Enter to finish".to_string(),
            None => format!(
                "EDITOR | placing {} (wheel) | LMB {}, RMB delete, F5 save, Tab play",
                editor.place_kind.name(),
                if editor.place_kind.is_rect() { "drag" } else { "click" }
            ),
        };
        d.draw_text(&banner, 10, screen.h - 30, 20, Color::YELLOW);
    }

    if debug.is_some() {
        let text = format!(
            "DEBUG (F11) | FPS: {} | entities: {} | particles: {}/{}",
            d.get_fps(),
            store.len(),
            particles.live_count(),
            particles.capacity()
        );
        d.draw_text(&text, 10, 62, 10, TEXT_COLOR);
    }
}
