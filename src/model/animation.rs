use super::*;

/// Counts ticks and fires once every `interval` ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTimer {
    interval: u32,
    elapsed: u32,
}

impl FrameTimer {
    pub fn new(interval: u32) -> Self {
        Self {
            interval: interval.max(1),
            elapsed: 0,
        }
    }

    /// Advance by one tick, returns `true` when a frame should advance.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.interval {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }
}

/// A named, fixed-length sequence of sprite frames.
#[derive(Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    pub name: &'static str,
    pub frames: usize,
}

pub static HERO_IDLE: SpriteSheet = SpriteSheet::new("hero_idle", 6);
pub static HERO_WALK: SpriteSheet = SpriteSheet::new("hero_walk", 3);
pub static HERO_ATTACK: SpriteSheet = SpriteSheet::new("hero_attack", 5);
pub static HERO_DEAD: SpriteSheet = SpriteSheet::new("hero_dead", 4);

pub static MOB_IDLE: SpriteSheet = SpriteSheet::new("mob_idle", 8);
pub static MOB_ATTACK: SpriteSheet = SpriteSheet::new("mob_attack", 5);
pub static MOB_DEAD: SpriteSheet = SpriteSheet::new("mob_dead", 3);

impl SpriteSheet {
    pub const fn new(name: &'static str, frames: usize) -> Self {
        Self { name, frames }
    }

    /// Sprite at `frame`, clamped to the last frame of the sheet.
    pub fn sprite(&'static self, frame: usize) -> Sprite {
        Sprite {
            sheet: self,
            frame: frame.min(self.frames.saturating_sub(1)),
        }
    }

    /// Index of the frame following `frame`, wrapping around.
    pub fn next_cyclic(&self, frame: usize) -> usize {
        (frame + 1) % self.frames
    }
}

/// Semantic sprite identifier handed to the render port, e.g. `hero_idle_1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    pub sheet: &'static SpriteSheet,
    pub frame: usize,
}

impl std::fmt::Display for Sprite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.sheet.name, self.frame + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_fires_every_interval() {
        let mut timer = FrameTimer::new(4);
        let fired: Vec<bool> = (0..8).map(|_| timer.tick()).collect();
        assert_eq!(
            fired,
            [false, false, false, true, false, false, false, true]
        );
    }

    #[test]
    fn sprite_ids_are_one_based_and_clamped() {
        assert_eq!(HERO_IDLE.sprite(0).to_string(), "hero_idle_1");
        assert_eq!(MOB_DEAD.sprite(7).to_string(), "mob_dead_3");
        assert_eq!(MOB_ATTACK.next_cyclic(4), 0);
    }
}
