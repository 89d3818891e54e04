use glam::Vec2;

/// Top-left world position of the viewport. Screen position of anything in
/// the world is `world - offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    pub offset: Vec2,
    pub viewport: Vec2,
    pub smoothing: f32,
}

impl FollowCamera {
    pub fn new(viewport: Vec2, smoothing: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            viewport,
            smoothing,
        }
    }

    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Ease toward centring `focus`, then clamp inside the level. The easing
    /// is a fixed fraction per tick and is not scaled by frame time.
    pub fn follow(&mut self, focus: Vec2, level_size: Vec2) {
        let target = focus - self.viewport * 0.5;
        self.offset += (target - self.offset) * self.smoothing;
        self.offset = self.clamped(self.offset, level_size);
    }

    /// On an axis where the level is smaller than the viewport the upper bound
    /// would fall below zero; it is floored at zero so the camera pins to the
    /// level's origin instead of inverting.
    fn clamped(&self, offset: Vec2, level_size: Vec2) -> Vec2 {
        let max = (level_size - self.viewport).max(Vec2::ZERO);
        offset.clamp(Vec2::ZERO, max)
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}
