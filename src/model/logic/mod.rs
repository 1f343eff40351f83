mod adversary;
mod combat;
mod draw;
mod mode;
mod player;


use super::*;

impl Model {
    /// Advance the simulation by one fixed tick.
    pub fn tick(&mut self, input: &TickInput) {
        if self.mode != GameMode::Playing {
            return;
        }

        let death_finished = self.player.update(input, &mut self.camera, &self.config.player);

        let target = self.player_world_pos();
        for (_, adversary) in &mut self.adversaries {
            adversary.update(target, &self.config.adversary);
        }

        self.resolve_combat();

        if death_finished {
            self.defeat();
        } else if self.all_adversaries_dying() {
            self.victory();
        }
    }

    pub fn player_action(&mut self, player_input: PlayerInput) {
        log::debug!(
            "Player action: {:?}, current mode: {:?}",
            player_input,
            self.mode
        );
        match (self.mode, player_input) {
            (GameMode::Playing, PlayerInput::Attack) => {
                if self.player.start_attack(&self.config.player) {
                    self.request_audio(AudioCommand::PlayOnce(Cue::Slash));
                }
            }
            (GameMode::Menu, PlayerInput::Click(position)) => match MenuButton::at(position) {
                Some(button) => self.menu_action(button),
                None => log::debug!("click at {} hit no menu button", position),
            },
            (GameMode::GameOver | GameMode::Victory, PlayerInput::Click(_)) => {
                self.return_to_menu();
            }
            _ => {}
        }
    }

    fn all_adversaries_dying(&self) -> bool {
        !self.adversaries.is_empty() && self.adversaries.iter().all(|(_, a)| a.is_dying())
    }
}
