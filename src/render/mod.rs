mod world;

use self::world::WorldPainter;

use crate::prelude::*;

const TEXT_COLOR: Color = Color::WHITE;

pub struct GameRender {
    geng: Geng,
    /// Looks at the logical viewport, y pointing up as geng expects.
    pub camera: Camera2d,
    pub viewport: vec2<f32>,
}

impl GameRender {
    pub fn new(geng: &Geng, config: &Config) -> Self {
        let viewport = config.viewport_size();
        Self {
            geng: geng.clone(),
            camera: Camera2d {
                center: viewport / 2.0,
                rotation: Angle::ZERO,
                fov: viewport.y,
            },
            viewport,
        }
    }

    /// Convert from the simulation's y-down viewport coordinates.
    pub fn to_camera(&self, pos: vec2<f32>) -> vec2<f32> {
        vec2(pos.x, self.viewport.y - pos.y)
    }

    /// Convert a cursor position into the simulation's viewport coordinates.
    pub fn screen_to_viewport(
        &self,
        framebuffer_size: vec2<f32>,
        cursor_pos: vec2<f32>,
    ) -> vec2<f32> {
        let world = self.camera.screen_to_world(framebuffer_size, cursor_pos);
        self.to_camera(world)
    }

    pub fn draw(&self, model: &Model, framebuffer: &mut ugli::Framebuffer) {
        match model.mode {
            GameMode::Menu => self.draw_menu(&model.settings, framebuffer),
            GameMode::Playing => {
                model.draw_world(&mut WorldPainter::new(self, framebuffer));
                self.draw_hud(model, framebuffer);
            }
            GameMode::GameOver => {
                self.draw_banner("GAME OVER", Color::RED, framebuffer);
            }
            GameMode::Victory => {
                self.draw_banner("VICTORY", Color::GREEN, framebuffer);
            }
        }
    }

    fn draw_menu(&self, settings: &Settings, framebuffer: &mut ugli::Framebuffer) {
        self.draw_quad(
            Aabb2 {
                min: vec2::ZERO,
                max: self.viewport,
            },
            Color::try_from("#1e1e1e").unwrap_or(Color::BLACK),
            framebuffer,
        );
        self.draw_text(
            "MENU",
            vec2(self.viewport.x / 2.0, 100.0),
            50.0,
            TEXT_COLOR,
            framebuffer,
        );

        let button_color = Color::try_from("#4682b4").unwrap_or(Color::BLUE);
        for button in MenuButton::ALL {
            let bounds = button.bounds();
            self.draw_quad(bounds, button_color, framebuffer);
            self.draw_text(
                &button.label(settings),
                bounds.center(),
                24.0,
                TEXT_COLOR,
                framebuffer,
            );
        }
    }

    fn draw_hud(&self, model: &Model, framebuffer: &mut ugli::Framebuffer) {
        let health = model.player.health.value();
        self.draw_text_left(
            &format!("Health: {}", health as i64),
            vec2(10.0, 20.0),
            26.0,
            Color::RED,
            framebuffer,
        );
        for (i, hint) in ["[F to attack]", "[Arrow keys to move the hero]"]
            .into_iter()
            .enumerate()
        {
            let pos = vec2(10.0, 520.0 + 30.0 * i as f32);
            self.draw_text_left(hint, pos, 22.0, TEXT_COLOR, framebuffer);
        }
    }

    fn draw_banner(&self, title: &str, color: Color, framebuffer: &mut ugli::Framebuffer) {
        let center = self.viewport / 2.0;
        self.draw_text(title, center - vec2(0.0, 50.0), 80.0, color, framebuffer);
        self.draw_text(
            "Click to return to the menu",
            center + vec2(0.0, 50.0),
            40.0,
            TEXT_COLOR,
            framebuffer,
        );
    }

    /// Fill a region given in viewport coordinates.
    fn draw_quad(&self, bounds: Aabb2<f32>, color: Color, framebuffer: &mut ugli::Framebuffer) {
        let a = self.to_camera(bounds.min);
        let b = self.to_camera(bounds.max);
        let target = Aabb2 {
            min: vec2(a.x.min(b.x), a.y.min(b.y)),
            max: vec2(a.x.max(b.x), a.y.max(b.y)),
        };
        self.geng
            .draw2d()
            .draw2d(framebuffer, &self.camera, &draw2d::Quad::new(target, color));
    }

    fn draw_text(
        &self,
        text: &str,
        center: vec2<f32>,
        size: f32,
        color: Color,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        let align = geng::TextAlign::CENTER;
        self.draw_text_aligned(text, center, size, align, color, framebuffer);
    }

    fn draw_text_left(
        &self,
        text: &str,
        pos: vec2<f32>,
        size: f32,
        color: Color,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        let align = geng::TextAlign::LEFT;
        self.draw_text_aligned(text, pos, size, align, color, framebuffer);
    }

    fn draw_text_aligned(
        &self,
        text: &str,
        pos: vec2<f32>,
        size: f32,
        align: geng::TextAlign,
        color: Color,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        self.geng.default_font().draw(
            framebuffer,
            &self.camera,
            text,
            vec2(align, geng::TextAlign::CENTER),
            mat3::translate(self.to_camera(pos)) * mat3::scale_uniform(size),
            color,
        );
    }
}
