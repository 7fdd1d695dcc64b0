use crate::{Bird, GameConfig, PipePair};

/// What a bird sees of the next unpassed pipe pair.
///
/// Three non-negative distances, each divided by the ground level:
///
/// - `[0]`: how far the bird's center is below the gap top
/// - `[1]`: how far the bird's center is above the gap bottom
/// - `[2]`: horizontal distance from the bird's x to the pair's left edge
///
/// A value is clamped to zero when the bird is on the other side of the
/// reference line (outside the gap, or already inside the pair horizontally).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vision([f32; Vision::LEN]);

impl Vision {
    pub const LEN: usize = 3;

    #[must_use]
    pub fn sense(bird: &Bird, pipe: &PipePair, config: &GameConfig) -> Self {
        let center_y = bird.center_y(config);
        let scale = config.ground_level;
        Self([
            f32::max(0.0, center_y - pipe.gap_top_y()) / scale,
            f32::max(0.0, pipe.gap_bottom_y() - center_y) / scale,
            f32::max(0.0, pipe.x() - config.bird_x) / scale,
        ])
    }

    #[must_use]
    pub const fn from_array(values: [f32; Self::LEN]) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[f32; Self::LEN] {
        &self.0
    }

    #[must_use]
    pub fn gap_top_distance(&self) -> f32 {
        self.0[0]
    }

    #[must_use]
    pub fn gap_bottom_distance(&self) -> f32 {
        self.0[1]
    }

    #[must_use]
    pub fn pipe_distance(&self) -> f32 {
        self.0[2]
    }
}
