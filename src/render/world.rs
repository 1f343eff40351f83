use super::*;

const TILE_SIZE: f32 = 100.0;
const ENTITY_SIZE: f32 = 48.0;

/// Draws the play field. Sprites are stood in for by tinted quads
/// labelled with their identifiers.
pub struct WorldPainter<'a, 'b> {
    render: &'a GameRender,
    framebuffer: &'a mut ugli::Framebuffer<'b>,
}

impl<'a, 'b> WorldPainter<'a, 'b> {
    pub fn new(render: &'a GameRender, framebuffer: &'a mut ugli::Framebuffer<'b>) -> Self {
        Self {
            render,
            framebuffer,
        }
    }

    fn sprite_color(sprite: Sprite) -> Color {
        let name = sprite.sheet.name;
        if name.ends_with("_dead") {
            Color::try_from("#555555").unwrap_or(Color::BLACK)
        } else if name.starts_with("hero") {
            Color::try_from("#e0c068").unwrap_or(Color::WHITE)
        } else if name.ends_with("_attack") {
            Color::try_from("#c9464b").unwrap_or(Color::RED)
        } else {
            Color::try_from("#7a4ea0").unwrap_or(Color::BLUE)
        }
    }
}

impl RenderPort for WorldPainter<'_, '_> {
    fn draw_background(&mut self, offset: vec2<f32>) {
        let viewport = self.render.viewport;
        let first = (offset / TILE_SIZE).map(|x| x.floor() as i64);
        let columns = (viewport.x / TILE_SIZE).ceil() as i64 + 1;
        let rows = (viewport.y / TILE_SIZE).ceil() as i64 + 1;

        let light = Color::try_from("#2f5a2a").unwrap_or(Color::GREEN);
        let dark = Color::try_from("#284d24").unwrap_or(Color::GREEN);
        for dx in 0..columns {
            for dy in 0..rows {
                let tile = first + vec2(dx, dy);
                let min = tile.map(|x| x as f32 * TILE_SIZE) - offset;
                let color = if (tile.x + tile.y).rem_euclid(2) == 0 {
                    light
                } else {
                    dark
                };
                let bounds = Aabb2 {
                    min,
                    max: min + vec2::splat(TILE_SIZE),
                };
                self.render.draw_quad(bounds, color, self.framebuffer);
            }
        }
    }

    fn draw_entity(&mut self, sprite: Sprite, position: vec2<f32>, flipped: bool) {
        let body = Aabb2::point(position).extend_uniform(ENTITY_SIZE / 2.0);
        self.render
            .draw_quad(body, Self::sprite_color(sprite), self.framebuffer);

        // Marks the side the sprite faces.
        let side = if flipped { -1.0 } else { 1.0 };
        let eye = position + vec2(side * ENTITY_SIZE / 4.0, -ENTITY_SIZE / 4.0);
        let eye = Aabb2::point(eye).extend_uniform(4.0);
        self.render.draw_quad(eye, Color::BLACK, self.framebuffer);

        let label_pos = position - vec2(0.0, ENTITY_SIZE * 0.75);
        self.render.draw_text(
            &sprite.to_string(),
            label_pos,
            12.0,
            TEXT_COLOR,
            self.framebuffer,
        );
    }
}
