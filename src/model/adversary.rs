use super::*;

#[derive(Debug, Clone)]
pub struct Adversary {
    /// World position.
    pub position: vec2<f32>,
    /// Patrol anchor, fixed at spawn.
    pub origin: vec2<f32>,
    pub direction: Direction,
    pub state: AdversaryState,
    pub health: Health,
    pub frame: usize,
    pub frame_timer: FrameTimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdversaryState {
    /// Patrolling around the origin.
    Idle,
    /// Chasing the hero. Never reverts.
    Aggro,
    /// Terminal.
    Dying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn random(rng: &mut impl Rng) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&Self::Down)
    }

    /// Unit vector in viewport orientation, y grows downwards.
    pub fn to_vec(self) -> vec2<f32> {
        match self {
            Self::Up => vec2(0.0, -1.0),
            Self::Down => vec2(0.0, 1.0),
            Self::Left => vec2(-1.0, 0.0),
            Self::Right => vec2(1.0, 0.0),
        }
    }
}

impl Adversary {
    pub fn new(position: vec2<f32>, max_health: Hp, config: &AdversaryConfig) -> Self {
        Self {
            position,
            origin: position,
            direction: Direction::random(&mut thread_rng()),
            state: AdversaryState::Idle,
            health: Health::new_max(max_health),
            frame: 0,
            frame_timer: FrameTimer::new(config.idle_interval),
        }
    }

    pub fn is_dying(&self) -> bool {
        matches!(self.state, AdversaryState::Dying)
    }

    /// Dying and done animating: nothing left to draw.
    pub fn is_gone(&self) -> bool {
        self.is_dying() && self.frame >= MOB_DEAD.frames
    }

    pub fn distance_to(&self, target: vec2<f32>) -> f32 {
        (target - self.position).len()
    }

    pub fn sprite(&self) -> Option<Sprite> {
        match self.state {
            AdversaryState::Idle => Some(MOB_IDLE.sprite(self.frame)),
            AdversaryState::Aggro => Some(MOB_ATTACK.sprite(self.frame)),
            AdversaryState::Dying if self.is_gone() => None,
            AdversaryState::Dying => Some(MOB_DEAD.sprite(self.frame)),
        }
    }
}
