use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Health drained from the hero per tick of contact with one adversary.
    pub fn enemy_damage(self) -> Hp {
        match self {
            Self::Easy => 0.5,
            Self::Normal => 2.0,
            Self::Hard => 6.0,
        }
    }

    /// Health of freshly spawned adversaries.
    pub fn enemy_max_health(self) -> Hp {
        match self {
            Self::Easy => 60.0,
            Self::Normal => 150.0,
            Self::Hard => 300.0,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Easy => Self::Normal,
            Self::Normal => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }
}
