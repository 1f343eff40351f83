use geng::prelude::*;

use crate::model::TickInput;

/// Key bindings for the hero.
pub struct Controls {
    pub up: Vec<geng::Key>,
    pub down: Vec<geng::Key>,
    pub left: Vec<geng::Key>,
    pub right: Vec<geng::Key>,
    pub attack: Vec<geng::Key>,
}

impl Controls {
    pub fn new() -> Self {
        use geng::Key;
        Self {
            up: vec![Key::ArrowUp, Key::W],
            down: vec![Key::ArrowDown, Key::S],
            left: vec![Key::ArrowLeft, Key::A],
            right: vec![Key::ArrowRight, Key::D],
            attack: vec![Key::F, Key::Space],
        }
    }

    /// Sample the held movement keys for this tick.
    pub fn sample(&self, window: &geng::Window) -> TickInput {
        let held = |keys: &[geng::Key]| keys.iter().any(|&key| window.is_key_pressed(key));
        TickInput {
            up: held(&self.up),
            down: held(&self.down),
            left: held(&self.left),
            right: held(&self.right),
        }
    }

    /// Whether the event is a fresh press of an attack key.
    pub fn is_attack(&self, event: &geng::Event) -> bool {
        geng_utils::key::is_event_press(event, self.attack.iter().copied())
    }
}
