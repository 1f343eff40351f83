use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuButton {
    Start,
    Sound,
    Difficulty,
    Exit,
}

impl MenuButton {
    pub const ALL: [Self; 4] = [Self::Start, Self::Sound, Self::Difficulty, Self::Exit];

    /// Hit region in viewport coordinates (y pointing down).
    pub fn bounds(self) -> Aabb2<f32> {
        let top = match self {
            Self::Start => 200.0,
            Self::Sound => 270.0,
            Self::Difficulty => 340.0,
            Self::Exit => 410.0,
        };
        Aabb2 {
            min: vec2(300.0, top),
            max: vec2(500.0, top + 50.0),
        }
    }

    /// The button under `position`, if any.
    pub fn at(position: vec2<f32>) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|button| button.bounds().contains(position))
    }

    pub fn label(self, settings: &Settings) -> String {
        match self {
            Self::Start => "Start".to_string(),
            Self::Sound => {
                let state = if settings.sound_enabled { "On" } else { "Off" };
                format!("Sound: {state}")
            }
            Self::Difficulty => format!("Difficulty: {}", settings.difficulty.label()),
            Self::Exit => "Exit".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_hit_the_right_button() {
        assert_eq!(MenuButton::at(vec2(400.0, 225.0)), Some(MenuButton::Start));
        assert_eq!(MenuButton::at(vec2(310.0, 300.0)), Some(MenuButton::Sound));
        assert_eq!(
            MenuButton::at(vec2(490.0, 345.0)),
            Some(MenuButton::Difficulty)
        );
        assert_eq!(MenuButton::at(vec2(400.0, 440.0)), Some(MenuButton::Exit));
    }

    #[test]
    fn gaps_hit_nothing() {
        assert_eq!(MenuButton::at(vec2(400.0, 260.0)), None);
        assert_eq!(MenuButton::at(vec2(100.0, 225.0)), None);
    }
}
