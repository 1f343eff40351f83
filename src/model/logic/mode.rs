use super::*;

impl Model {
    pub(super) fn menu_action(&mut self, button: MenuButton) {
        log::debug!("Menu button pressed: {:?}", button);
        match button {
            MenuButton::Start => self.start_game(),
            MenuButton::Sound => self.toggle_sound(),
            MenuButton::Difficulty => {
                self.settings.difficulty = self.settings.difficulty.next();
                log::info!("Difficulty set to {}", self.settings.difficulty.label());
            }
            MenuButton::Exit => {
                log::info!("Exit requested");
                self.exit_requested = true;
            }
        }
    }

    /// Reset the world and spawn a fresh roster.
    pub fn start_game(&mut self) {
        log::info!(
            "Starting a game on {} difficulty",
            self.settings.difficulty.label()
        );
        self.camera = WorldCamera::new();
        self.player = Player::new(&self.config.player);

        let max_health = self.settings.difficulty.enemy_max_health();
        let config = &self.config.adversary;
        self.adversaries = config
            .spawn_points()
            .map(|pos| Adversary::new(pos, max_health, config))
            .collect();

        self.mode = GameMode::Playing;
        self.request_audio(AudioCommand::PlayLoop(Track::Background));
    }

    fn toggle_sound(&mut self) {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        log::info!("Sound enabled: {}", self.settings.sound_enabled);
        if self.settings.sound_enabled {
            self.request_audio(AudioCommand::PlayLoop(Track::Background));
        } else {
            self.request_audio(AudioCommand::Stop);
        }
    }

    pub(super) fn defeat(&mut self) {
        log::info!("Game over");
        self.mode = GameMode::GameOver;
        self.adversaries.clear();
        self.request_audio(AudioCommand::Stop);
        self.request_audio(AudioCommand::PlayOnce(Cue::Defeat));
    }

    pub(super) fn victory(&mut self) {
        log::info!("Victory");
        self.mode = GameMode::Victory;
        self.adversaries.clear();
        self.request_audio(AudioCommand::Stop);
        self.request_audio(AudioCommand::PlayOnce(Cue::Victory));
    }

    pub(super) fn return_to_menu(&mut self) {
        log::info!("Returning to menu");
        self.mode = GameMode::Menu;
        self.request_audio(AudioCommand::PlayLoop(Track::Background));
    }
}
