mod adversary;
mod animation;
mod camera;
mod difficulty;
mod logic;
mod menu;
mod player;
mod ports;

pub use self::{
    adversary::*, animation::*, camera::*, difficulty::*, menu::*, player::*, ports::*,
};

use crate::prelude::*;

pub type Hp = f32;
pub type Health = geng_utils::bounded::Bounded<Hp>;

/// The whole simulation: every update and draw goes through here.
pub struct Model {
    pub config: Config,
    pub settings: Settings,
    pub mode: GameMode,
    pub camera: WorldCamera,
    pub player: Player,
    /// The roster, rebuilt every time a game starts.
    pub adversaries: Arena<Adversary>,
    /// Audio requests issued since the last drain.
    audio_queue: Vec<AudioCommand>,
    pub exit_requested: bool,
}

/// Options changed from the menu, they persist across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub sound_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Menu,
    Playing,
    /// The hero died and the death animation has finished.
    GameOver,
    /// Every adversary of the roster is dying.
    Victory,
}

/// Movement flags sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Model {
    pub fn new(config: Config, settings: Settings) -> Self {
        let player = Player::new(&config.player);
        Self {
            config,
            settings,
            mode: GameMode::Menu,
            camera: WorldCamera::new(),
            player,
            adversaries: Arena::new(),
            audio_queue: Vec::new(),
            exit_requested: false,
        }
    }

    /// World position of the hero.
    pub fn player_world_pos(&self) -> vec2<f32> {
        self.camera.world_position_of(self.config.anchor())
    }

    /// Take the pending audio requests in the order they were issued.
    pub fn drain_audio(&mut self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.audio_queue)
    }

    /// Queue a sound, muted when sound is disabled.
    fn request_audio(&mut self, command: AudioCommand) {
        if self.settings.sound_enabled || command == AudioCommand::Stop {
            self.audio_queue.push(command);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            sound_enabled: true,
        }
    }
}
