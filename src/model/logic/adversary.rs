use super::*;

impl Adversary {
    /// Advance one tick, `target` is the hero's world position.
    pub fn update(&mut self, target: vec2<f32>, config: &AdversaryConfig) {
        match self.state {
            AdversaryState::Idle => {
                if self.frame_timer.tick() {
                    self.frame = MOB_IDLE.next_cyclic(self.frame);
                }
                self.patrol(config);
                if self.distance_to(target) < config.aggro_radius {
                    log::debug!("Adversary at {} aggroed", self.position);
                    self.state = AdversaryState::Aggro;
                    self.frame = 0;
                    self.frame_timer = FrameTimer::new(config.aggro_interval);
                }
            }
            AdversaryState::Aggro => {
                if self.frame_timer.tick() {
                    self.frame = MOB_ATTACK.next_cyclic(self.frame);
                }
                self.chase(target, config);
            }
            AdversaryState::Dying => {
                if self.frame_timer.tick() && self.frame < MOB_DEAD.frames {
                    self.frame += 1;
                }
            }
        }
    }

    fn patrol(&mut self, config: &AdversaryConfig) {
        self.position = self.position + self.direction.to_vec() * config.speed;
        let delta = self.position - self.origin;
        if delta.x.abs() > config.patrol_radius || delta.y.abs() > config.patrol_radius {
            self.direction = Direction::random(&mut thread_rng());
        }
    }

    /// Step straight towards the target along the current bearing.
    fn chase(&mut self, target: vec2<f32>, config: &AdversaryConfig) {
        let delta = target - self.position;
        let angle = delta.y.atan2(delta.x);
        self.position = self.position + vec2(angle.cos(), angle.sin()) * config.speed;
    }

    /// Apply damage unless already dying. Health reaching zero starts dying.
    pub fn take_damage(&mut self, amount: Hp, config: &AdversaryConfig) {
        if self.is_dying() {
            return;
        }
        self.health.change(-amount);
        if self.health.is_min() {
            log::debug!("Adversary at {} is dying", self.position);
            self.state = AdversaryState::Dying;
            self.frame = 0;
            self.frame_timer = FrameTimer::new(config.death_interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spawn(x: f32, y: f32) -> (Adversary, AdversaryConfig) {
        let config = Config::default().adversary;
        let mut adversary = Adversary::new(vec2(x, y), 150.0, &config);
        adversary.direction = Direction::Right;
        (adversary, config)
    }

    #[test]
    fn patrol_walks_along_direction() {
        let (mut adversary, config) = spawn(0.0, 0.0);
        adversary.update(vec2(5000.0, 5000.0), &config);
        assert_eq!(adversary.position, vec2(1.5, 0.0));
        assert_eq!(adversary.state, AdversaryState::Idle);
    }

    #[test]
    fn patrol_rerolls_past_radius() {
        let mut rerolled = 0;
        for _ in 0..50 {
            let (mut adversary, config) = spawn(0.0, 0.0);
            adversary.position = vec2(config.patrol_radius, 0.0);
            adversary.update(vec2(5000.0, 5000.0), &config);
            assert_eq!(adversary.position, vec2(config.patrol_radius + 1.5, 0.0));
            if adversary.direction != Direction::Right {
                rerolled += 1;
            }
        }
        assert!(rerolled > 0, "direction never changed past the patrol radius");
    }

    #[test]
    fn patrol_keeps_direction_on_radius() {
        let (mut adversary, config) = spawn(0.0, 0.0);
        adversary.position = vec2(config.patrol_radius - config.speed, 0.0);
        adversary.update(vec2(5000.0, 5000.0), &config);
        assert_eq!(adversary.position, vec2(config.patrol_radius, 0.0));
        assert_eq!(adversary.direction, Direction::Right);
    }

    #[test]
    fn chase_follows_bearing() {
        let (mut adversary, config) = spawn(0.0, 0.0);
        adversary.state = AdversaryState::Aggro;
        adversary.update(vec2(30.0, 40.0), &config);
        assert_relative_eq!(adversary.position.x, 0.9, epsilon = 1e-5);
        assert_relative_eq!(adversary.position.y, 1.2, epsilon = 1e-5);
    }

    #[test]
    fn aggro_is_sticky() {
        let (mut adversary, config) = spawn(0.0, 0.0);
        adversary.update(vec2(50.0, 0.0), &config);
        assert_eq!(adversary.state, AdversaryState::Aggro);
        for _ in 0..100 {
            adversary.update(vec2(10_000.0, 0.0), &config);
        }
        assert_eq!(adversary.state, AdversaryState::Aggro);
    }

    #[test]
    fn dying_ignores_damage_and_movement() {
        let (mut adversary, config) = spawn(0.0, 0.0);
        adversary.take_damage(1000.0, &config);
        assert!(adversary.is_dying());
        assert_eq!(adversary.health.value(), 0.0);

        let position = adversary.position;
        adversary.take_damage(10.0, &config);
        for _ in 0..100 {
            adversary.update(vec2(0.0, 0.0), &config);
        }
        assert_eq!(adversary.position, position);
        assert_eq!(adversary.health.value(), 0.0);
        assert!(adversary.is_dying());
    }

    #[test]
    fn death_animation_ends_invisible() {
        let (mut adversary, config) = spawn(0.0, 0.0);
        adversary.take_damage(150.0, &config);
        let ticks = config.death_interval as usize * MOB_DEAD.frames;
        for _ in 0..ticks - 1 {
            adversary.update(vec2::ZERO, &config);
            assert!(adversary.sprite().is_some());
        }
        adversary.update(vec2::ZERO, &config);
        assert!(adversary.is_gone());
        assert_eq!(adversary.sprite(), None);
    }
}
