use super::*;

#[derive(Debug, Clone)]
pub struct Player {
    pub state: PlayerState,
    pub health: Health,
    pub facing: Facing,
    /// Frame within the sheet of the current state.
    pub frame: usize,
    pub frame_timer: FrameTimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Idle,
    Walking,
    Attacking,
    Dead {
        /// Whether the end of the death animation has been reported.
        finished: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// Discrete commands, as opposed to the per-tick movement flags.
#[derive(Debug, Clone, Copy)]
pub enum PlayerInput {
    Attack,
    /// Pointer press at a position in viewport coordinates.
    Click(vec2<f32>),
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            state: PlayerState::Idle,
            health: Health::new_max(config.max_health),
            facing: Facing::Right,
            frame: 0,
            frame_timer: FrameTimer::new(config.walk_interval),
        }
    }

    pub fn is_dead(&self) -> bool {
        matches!(self.state, PlayerState::Dead { .. })
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.state, PlayerState::Attacking)
    }

    pub fn is_flipped(&self) -> bool {
        matches!(self.facing, Facing::Left)
    }

    pub fn sprite(&self) -> Sprite {
        match self.state {
            PlayerState::Idle => HERO_IDLE.sprite(0),
            PlayerState::Walking => HERO_WALK.sprite(self.frame),
            PlayerState::Attacking => HERO_ATTACK.sprite(self.frame),
            PlayerState::Dead { .. } => HERO_DEAD.sprite(self.frame),
        }
    }
}
