use rand::Rng;

use crate::{GameConfig, Rect};

/// Spawn-order identifier of a pipe pair, unique within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct PipeId(u64);

impl PipeId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A pair of barriers sharing one x position, separated by a fixed gap.
///
/// The top barrier spans from the top of the screen down to the gap; the bottom
/// barrier spans from the gap down to the ground. Both rectangles are derived
/// from `x` and the gap bounds on every call.
///
/// `passed` becomes true once the pair's right edge reaches the bird's fixed x
/// position and never goes back to false.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    id: PipeId,
    x: f32,
    gap_top: f32,
    gap_height: f32,
    passed: bool,
}

impl PipePair {
    /// Creates a pipe pair at the right edge of the playfield.
    ///
    /// The gap top is drawn uniformly from [`GameConfig::gap_top_range`] and
    /// snapped to a whole pixel (clamped back into the range, which matters
    /// only when the range bounds themselves are fractional).
    pub fn spawn<R>(id: PipeId, config: &GameConfig, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let range = config.gap_top_range();
        let (lo, hi) = (*range.start(), *range.end());
        let gap_top = rng.random_range(range).round().clamp(lo, hi);
        Self::with_gap(id, config.screen_width, gap_top, config.gap_height)
    }

    /// Creates a pipe pair with explicit geometry.
    #[must_use]
    pub fn with_gap(id: PipeId, x: f32, gap_top: f32, gap_height: f32) -> Self {
        Self {
            id,
            x,
            gap_top,
            gap_height,
            passed: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PipeId {
        self.id
    }

    /// Returns the common left edge of both barriers.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn gap_top_y(&self) -> f32 {
        self.gap_top
    }

    #[must_use]
    pub fn gap_bottom_y(&self) -> f32 {
        self.gap_top + self.gap_height
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub fn right(&self, config: &GameConfig) -> f32 {
        self.x + config.pipe_width
    }

    /// Scrolls the pair left by `speed` pixels.
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Marks the pair passed once its right edge is at or left of `agent_x`.
    ///
    /// Returns whether this call changed the flag.
    pub fn mark_passed_if(&mut self, agent_x: f32, config: &GameConfig) -> bool {
        if self.passed || self.right(config) > agent_x {
            return false;
        }
        self.passed = true;
        true
    }

    /// Returns whether the pair has scrolled fully past the left screen edge.
    #[must_use]
    pub fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.right(config) < 0.0
    }

    #[must_use]
    pub fn top_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, 0.0, config.pipe_width, self.gap_top)
    }

    #[must_use]
    pub fn bottom_rect(&self, config: &GameConfig) -> Rect {
        let bottom = self.gap_bottom_y();
        Rect::new(
            self.x,
            bottom,
            config.pipe_width,
            config.ground_level - bottom,
        )
    }

    /// Returns both barriers, top first.
    #[must_use]
    pub fn rects(&self, config: &GameConfig) -> [Rect; 2] {
        [self.top_rect(config), self.bottom_rect(config)]
    }
}
