use super::*;

impl Player {
    /// Advance the hero by one tick and move the camera.
    /// Returns `true` on the one tick the death animation completes.
    pub fn update(
        &mut self,
        input: &TickInput,
        camera: &mut WorldCamera,
        config: &PlayerConfig,
    ) -> bool {
        match self.state {
            PlayerState::Dead { .. } => self.update_death(),
            PlayerState::Attacking => {
                self.update_attack(config);
                false
            }
            PlayerState::Idle | PlayerState::Walking => {
                self.update_movement(input, camera, config);
                false
            }
        }
    }

    fn update_movement(
        &mut self,
        input: &TickInput,
        camera: &mut WorldCamera,
        config: &PlayerConfig,
    ) {
        let mut direction = vec2::<f32>::ZERO;
        if input.right {
            direction.x = 1.0;
            self.facing = Facing::Right;
        } else if input.left {
            direction.x = -1.0;
            self.facing = Facing::Left;
        }
        if input.up {
            direction.y = -1.0;
        } else if input.down {
            direction.y = 1.0;
        }

        if direction == vec2::ZERO {
            self.state = PlayerState::Idle;
            return;
        }

        camera.apply_movement(direction, config.speed);
        // The walk cycle resumes where it stopped.
        self.state = PlayerState::Walking;
        if self.frame_timer.tick() {
            self.frame = HERO_WALK.next_cyclic(self.frame);
        }
    }

    /// Begin a swing. Returns `false` if the hero cannot attack right now.
    pub fn start_attack(&mut self, config: &PlayerConfig) -> bool {
        if self.is_dead() || self.is_attacking() {
            return false;
        }
        self.state = PlayerState::Attacking;
        self.frame = 0;
        self.frame_timer = FrameTimer::new(config.attack_interval);
        true
    }

    fn update_attack(&mut self, config: &PlayerConfig) {
        if !self.frame_timer.tick() {
            return;
        }
        self.frame += 1;
        if self.frame >= HERO_ATTACK.frames {
            self.state = PlayerState::Idle;
            self.frame = 0;
            self.frame_timer = FrameTimer::new(config.walk_interval);
        }
    }

    /// Enter the dead state. Does nothing if already dead.
    pub fn die(&mut self, config: &PlayerConfig) {
        if self.is_dead() {
            return;
        }
        log::debug!("Hero died");
        self.state = PlayerState::Dead { finished: false };
        self.frame = 0;
        self.frame_timer = FrameTimer::new(config.death_interval);
    }

    fn update_death(&mut self) -> bool {
        let PlayerState::Dead { finished } = &mut self.state else {
            return false;
        };
        if *finished {
            return false;
        }
        if self.frame_timer.tick() && self.frame < HERO_DEAD.frames {
            self.frame += 1;
        }
        if self.frame >= HERO_DEAD.frames {
            *finished = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Player, WorldCamera, PlayerConfig) {
        let config = Config::default().player;
        (Player::new(&config), WorldCamera::new(), config)
    }

    fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            up,
            down,
            left,
            right,
        }
    }

    #[test]
    fn right_beats_left_and_axes_combine() {
        let (mut player, mut camera, config) = setup();
        player.update(&held(true, true, true, true), &mut camera, &config);
        assert_eq!(camera.offset, vec2(4.0, -4.0));
        assert_eq!(player.state, PlayerState::Walking);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn facing_survives_stopping() {
        let (mut player, mut camera, config) = setup();
        player.update(&held(false, false, true, false), &mut camera, &config);
        assert_eq!(player.facing, Facing::Left);
        player.update(&TickInput::default(), &mut camera, &config);
        assert_eq!(player.state, PlayerState::Idle);
        assert_eq!(player.facing, Facing::Left);
        player.update(&held(true, false, false, false), &mut camera, &config);
        assert_eq!(player.facing, Facing::Left);
    }

    #[test]
    fn walk_cycle_resumes_after_stop() {
        let (mut player, mut camera, config) = setup();
        let right = held(false, false, false, true);
        for _ in 0..config.walk_interval {
            player.update(&right, &mut camera, &config);
        }
        assert_eq!(player.frame, 1);

        player.update(&TickInput::default(), &mut camera, &config);
        assert_eq!(player.sprite(), HERO_IDLE.sprite(0));

        for _ in 0..config.walk_interval {
            player.update(&right, &mut camera, &config);
        }
        assert_eq!(player.frame, 2);
        assert_eq!(player.sprite(), HERO_WALK.sprite(2));
    }

    #[test]
    fn attack_lasts_all_frames_and_blocks_movement() {
        let (mut player, mut camera, config) = setup();
        assert!(player.start_attack(&config));
        assert!(!player.start_attack(&config));

        let ticks = config.attack_interval as usize * HERO_ATTACK.frames;
        for _ in 0..ticks - 1 {
            player.update(&held(false, false, false, true), &mut camera, &config);
            assert!(player.is_attacking());
        }
        assert_eq!(camera.offset, vec2::ZERO);

        player.update(&held(false, false, false, true), &mut camera, &config);
        assert_eq!(player.state, PlayerState::Idle);

        player.update(&held(false, false, false, true), &mut camera, &config);
        assert_eq!(camera.offset, vec2(4.0, 0.0));
    }

    #[test]
    fn death_is_idempotent() {
        let (mut player, mut camera, config) = setup();
        player.die(&config);
        for _ in 0..5 {
            player.update(&TickInput::default(), &mut camera, &config);
        }
        let before = player.clone();
        player.die(&config);
        assert_eq!(player.state, before.state);
        assert_eq!(player.frame, before.frame);
        assert_eq!(player.health.value(), before.health.value());
    }

    #[test]
    fn death_completion_reported_once() {
        let (mut player, mut camera, config) = setup();
        player.die(&config);
        assert!(!player.start_attack(&config));

        let reports: Vec<bool> = (0..100)
            .map(|_| player.update(&held(false, false, true, false), &mut camera, &config))
            .collect();
        let ticks = config.death_interval as usize * HERO_DEAD.frames;
        assert_eq!(reports.iter().filter(|&&done| done).count(), 1);
        assert!(reports[ticks - 1]);
        assert!(player.is_dead());
        assert_eq!(camera.offset, vec2::ZERO);
    }
}
