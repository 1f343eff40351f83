use super::*;

impl Model {
    /// Melee resolution between the hero and every adversary of the roster.
    /// Damage applies on every tick the ranges overlap.
    pub(super) fn resolve_combat(&mut self) {
        let hero_pos = self.player_world_pos();
        let contact_damage = self.settings.difficulty.enemy_damage();
        let attacking = self.player.is_attacking();

        for (_, adversary) in &mut self.adversaries {
            if adversary.is_dying() {
                continue;
            }
            let distance = adversary.distance_to(hero_pos);

            if distance < self.config.adversary.contact_radius {
                self.player.health.change(-contact_damage);
            }
            if attacking && distance < self.config.player.attack_reach {
                adversary.take_damage(self.config.player.attack_damage, &self.config.adversary);
            }
        }

        if self.player.health.is_min() && !self.player.is_dead() {
            self.player.die(&self.config.player);
        }
    }
}
