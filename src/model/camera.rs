use super::*;

/// Maps the hero's fixed screen anchor into the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldCamera {
    pub offset: vec2<f32>,
}

impl WorldCamera {
    pub fn new() -> Self {
        Self { offset: vec2::ZERO }
    }

    /// Move the camera by `speed` along `direction`. The world has no bounds.
    pub fn apply_movement(&mut self, direction: vec2<f32>, speed: f32) {
        self.offset = self.offset + direction * speed;
    }

    pub fn world_position_of(&self, anchor: vec2<f32>) -> vec2<f32> {
        self.offset + anchor
    }

    pub fn world_to_screen(&self, world_pos: vec2<f32>) -> vec2<f32> {
        world_pos - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_is_unbounded() {
        let mut camera = WorldCamera::new();
        for _ in 0..1000 {
            camera.apply_movement(vec2(-1.0, 0.0), 4.0);
        }
        assert_eq!(camera.offset, vec2(-4000.0, 0.0));
        assert_eq!(
            camera.world_position_of(vec2(400.0, 300.0)),
            vec2(-3600.0, 300.0)
        );
    }

    #[test]
    fn screen_and_world_agree_on_anchor() {
        let mut camera = WorldCamera::new();
        camera.apply_movement(vec2(1.0, 1.0), 4.0);
        let anchor = vec2(400.0, 300.0);
        let world = camera.world_position_of(anchor);
        assert_eq!(camera.world_to_screen(world), anchor);
    }
}
