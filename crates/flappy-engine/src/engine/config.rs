use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{BirdColor, ConfigError, Rect};

/// Slowest allowed scroll speed, in pixels per frame.
pub const MIN_SCROLL_SPEED: f32 = 1.0;

/// Immutable constants of a game.
///
/// All lengths are in pixels and all speeds in pixels per frame. Missing fields
/// take their [`Default`] values when deserialized, so a config file only
/// needs to list what it changes.
///
/// Call [`validate`](Self::validate) before use; [`GameSession::new`] does so.
///
/// [`GameSession::new`]: crate::GameSession::new
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Top edge of the ground; pipes stand on it and birds die touching it.
    pub ground_level: f32,
    pub ground_thickness: f32,
    /// Fixed left edge of every bird.
    pub bird_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Color of the human-piloted bird.
    pub bird_color: BirdColor,
    pub gravity_step: f32,
    pub max_fall_speed: f32,
    /// Magnitude of the upward velocity set by a jump.
    pub jump_speed: f32,
    /// Re-arm threshold as a fraction of `jump_speed`.
    pub rearm_fraction: f32,
    /// Initial scroll speed; adjustable at runtime through [`SimParams`].
    pub scroll_speed: f32,
    pub pipe_width: f32,
    pub gap_height: f32,
    /// Minimum height of each barrier of a pipe pair.
    pub min_barrier: f32,
    /// Range of the horizontal distance between consecutive spawns.
    pub spawn_gap: [f32; 2],
    /// Range of the initial height of autonomous birds.
    pub spawn_band: [f32; 2],
    pub population: usize,
    pub fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 650.0,
            ground_level: 550.0,
            ground_thickness: 100.0,
            bird_x: 100.0,
            bird_width: 30.0,
            bird_height: 30.0,
            bird_color: BirdColor::new(255, 200, 0),
            gravity_step: 1.0,
            max_fall_speed: 10.0,
            jump_speed: 10.0,
            rearm_fraction: 0.25,
            scroll_speed: 5.0,
            pipe_width: 70.0,
            gap_height: 150.0,
            min_barrier: 100.0,
            spawn_gap: [250.0, 400.0],
            spawn_band: [150.0, 400.0],
            population: 100,
            fps: 30,
        }
    }
}

impl GameConfig {
    /// Checks every invariant the game loop relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_level", self.ground_level),
            ("ground_thickness", self.ground_thickness),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("gravity_step", self.gravity_step),
            ("max_fall_speed", self.max_fall_speed),
            ("jump_speed", self.jump_speed),
            ("pipe_width", self.pipe_width),
            ("gap_height", self.gap_height),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.min_barrier < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "min_barrier",
                value: self.min_barrier,
            });
        }
        if self.ground_level > self.screen_height {
            return Err(ConfigError::GroundOutOfScreen {
                ground_level: self.ground_level,
                screen_height: self.screen_height,
            });
        }
        if self.ground_level - self.gap_height - 2.0 * self.min_barrier < 0.0 {
            return Err(ConfigError::NoGapRange {
                ground_level: self.ground_level,
                gap_height: self.gap_height,
                min_barrier: self.min_barrier,
            });
        }
        let [gap_min, gap_max] = self.spawn_gap;
        if !(gap_min >= 0.0 && gap_min <= gap_max) {
            return Err(ConfigError::InvalidSpawnGap {
                min: gap_min,
                max: gap_max,
            });
        }
        let [band_min, band_max] = self.spawn_band;
        let limit = self.ground_level - self.bird_height;
        if !(band_min >= 0.0 && band_min <= band_max && band_max <= limit) {
            return Err(ConfigError::InvalidSpawnBand {
                min: band_min,
                max: band_max,
                limit,
            });
        }
        check_scroll_speed(self.scroll_speed, self.bird_width)?;
        if !(self.rearm_fraction > -1.0
            && self.rearm_fraction <= 1.0
            && self.rearm_velocity() < self.max_fall_speed)
        {
            return Err(ConfigError::InvalidRearmFraction {
                fraction: self.rearm_fraction,
                max_fall_speed: self.max_fall_speed,
            });
        }
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        Ok(())
    }

    /// Returns the velocity a bird must exceed before it may jump again.
    #[must_use]
    pub fn rearm_velocity(&self) -> f32 {
        self.rearm_fraction * self.jump_speed
    }

    /// Returns the closed range of valid gap-top positions.
    ///
    /// Any gap top in this range leaves both barriers at least `min_barrier`
    /// tall. The range is empty (start > end) only for configurations that
    /// [`validate`](Self::validate) rejects.
    #[must_use]
    pub fn gap_top_range(&self) -> RangeInclusive<f32> {
        self.min_barrier..=(self.ground_level - self.gap_height - self.min_barrier)
    }

    /// Returns the ground rectangle spanning the full screen width.
    #[must_use]
    pub fn ground_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.ground_level,
            self.screen_width,
            self.ground_thickness,
        )
    }

    /// Returns the starting height of a human-piloted bird.
    #[must_use]
    pub fn human_start_y(&self) -> f32 {
        (self.screen_height / 2.0).min(self.ground_level - self.bird_height)
    }
}

fn check_scroll_speed(speed: f32, bird_width: f32) -> Result<(), ConfigError> {
    if speed >= MIN_SCROLL_SPEED && speed < bird_width {
        Ok(())
    } else {
        Err(ConfigError::ScrollSpeedOutOfRange {
            speed,
            limit: bird_width,
        })
    }
}

/// Mutable runtime parameters of a session.
///
/// The scroll speed always stays within `[1, bird_width)`, so a pipe edge
/// cannot skip over a bird between two frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    scroll_speed: f32,
    speed_limit: f32,
}

impl SimParams {
    /// Creates parameters from a validated configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            scroll_speed: config.scroll_speed,
            speed_limit: config.bird_width,
        }
    }

    #[must_use]
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Returns the exclusive upper bound of the scroll speed.
    #[must_use]
    pub fn speed_limit(&self) -> f32 {
        self.speed_limit
    }

    /// Sets the scroll speed, rejecting values outside `[1, bird_width)`.
    pub fn set_scroll_speed(&mut self, speed: f32) -> Result<(), ConfigError> {
        check_scroll_speed(speed, self.speed_limit)?;
        self.scroll_speed = speed;
        Ok(())
    }

    /// Changes the scroll speed by `delta`, clamping into the allowed range.
    ///
    /// The upper clamp is one pixel below the bird width. Returns the speed
    /// actually applied.
    pub fn adjust_scroll_speed(&mut self, delta: f32) -> f32 {
        let max = (self.speed_limit - 1.0).max(MIN_SCROLL_SPEED);
        let wanted = self.scroll_speed + delta;
        let speed = wanted.clamp(MIN_SCROLL_SPEED, max);
        if (speed - wanted).abs() > f32::EPSILON {
            warn!(wanted, applied = speed, "scroll speed clamped");
        }
        self.scroll_speed = speed;
        speed
    }
}
