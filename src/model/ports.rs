//! Boundaries to the collaborators that draw and play sounds.

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    Background,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Slash,
    Defeat,
    Victory,
}

impl Track {
    pub fn id(self) -> &'static str {
        match self {
            Self::Background => "background_music",
        }
    }
}

impl Cue {
    pub fn id(self) -> &'static str {
        match self {
            Self::Slash => "slash",
            Self::Defeat => "game_over",
            Self::Victory => "victory",
        }
    }
}

/// Fire-and-forget audio request produced by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCommand {
    PlayLoop(Track),
    Stop,
    PlayOnce(Cue),
}

pub trait AudioPort {
    fn play_loop(&mut self, track: Track);
    fn stop(&mut self);
    fn play_once(&mut self, cue: Cue);

    fn apply(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::PlayLoop(track) => self.play_loop(track),
            AudioCommand::Stop => self.stop(),
            AudioCommand::PlayOnce(cue) => self.play_once(cue),
        }
    }
}

/// Receives the draw pass. Positions are in viewport coordinates.
pub trait RenderPort {
    fn draw_background(&mut self, offset: vec2<f32>);
    fn draw_entity(&mut self, sprite: Sprite, position: vec2<f32>, flipped: bool);
}
