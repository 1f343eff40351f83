use super::*;

impl Model {
    /// Read-only draw pass of the world: background, adversaries, then the hero.
    pub fn draw_world(&self, port: &mut impl RenderPort) {
        port.draw_background(self.camera.offset);

        for (_, adversary) in &self.adversaries {
            if let Some(sprite) = adversary.sprite() {
                let position = self.camera.world_to_screen(adversary.position);
                port.draw_entity(sprite, position, false);
            }
        }

        port.draw_entity(
            self.player.sprite(),
            self.config.anchor(),
            self.player.is_flipped(),
        );
    }
}
