use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

use crate::{GameConfig, Rect};

/// RGB color of a bird, carried for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirdColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BirdColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Random colors for population birds, drawn with `rng.random()`.
impl Distribution<BirdColor> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BirdColor {
        let [r, g, b] = rng.random();
        BirdColor { r, g, b }
    }
}

/// A single agent: vertical physics, a re-armable jump, and a death flag.
///
/// The horizontal position is fixed at [`GameConfig::bird_x`] for every bird,
/// so only the vertical state lives here. The hitbox is derived on demand from
/// the position and the configured size.
///
/// # Jump lock
///
/// [`jump`](Self::jump) sets the lock; [`advance`](Self::advance) clears it
/// once the velocity rises strictly above [`GameConfig::rearm_velocity`].
/// While locked, further jumps are ignored.
///
/// # Example
///
/// ```
/// use flappy_engine::{Bird, BirdColor, GameConfig};
///
/// let config = GameConfig::default();
/// let mut bird = Bird::new(300.0, BirdColor::new(255, 200, 0));
///
/// assert!(bird.jump(&config));
/// assert!(!bird.jump(&config)); // locked until the velocity re-arms it
/// bird.advance(&config);
/// assert!(bird.y() < 300.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    y: f32,
    velocity: f32,
    jump_locked: bool,
    alive: bool,
    color: BirdColor,
}

impl Bird {
    /// Creates a live, unlocked bird at rest at height `y`.
    #[must_use]
    pub fn new(y: f32, color: BirdColor) -> Self {
        Self {
            y,
            velocity: 0.0,
            jump_locked: false,
            alive: true,
            color,
        }
    }

    /// Returns the top edge of the hitbox.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the signed vertical velocity (positive is downwards).
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[must_use]
    pub fn is_jump_locked(&self) -> bool {
        self.jump_locked
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[must_use]
    pub fn color(&self) -> BirdColor {
        self.color
    }

    /// Brings the bird back to life at height `y` with zero velocity and no lock.
    pub fn reset(&mut self, y: f32) {
        self.y = y;
        self.velocity = 0.0;
        self.jump_locked = false;
        self.alive = true;
    }

    pub fn set_color(&mut self, color: BirdColor) {
        self.color = color;
    }

    /// Applies one frame of physics.
    ///
    /// Moves by the current velocity, then accelerates by the gravity step up to
    /// the max fall speed, and re-arms the jump once the velocity exceeds the
    /// re-arm threshold.
    pub fn advance(&mut self, config: &GameConfig) {
        self.y += self.velocity;
        self.velocity = f32::min(self.velocity + config.gravity_step, config.max_fall_speed);
        if self.velocity > config.rearm_velocity() {
            self.jump_locked = false;
        }
    }

    /// Returns whether the bird's top edge is at or above the top of the screen.
    #[must_use]
    pub fn reached_ceiling(&self) -> bool {
        self.y <= 0.0
    }

    /// Starts a jump if the lock is released and the bird is below the ceiling.
    ///
    /// Returns whether the jump happened.
    pub fn jump(&mut self, config: &GameConfig) -> bool {
        if self.jump_locked || self.reached_ceiling() {
            return false;
        }
        self.velocity = -config.jump_speed;
        self.jump_locked = true;
        true
    }

    /// Releases the jump lock without waiting for the velocity to re-arm it.
    pub fn rearm(&mut self) {
        self.jump_locked = false;
    }

    /// Marks the bird as dead. Death is terminal until [`reset`](Self::reset).
    pub fn kill(&mut self) {
        self.alive = false;
    }

    #[must_use]
    pub fn hitbox(&self, config: &GameConfig) -> Rect {
        Rect::new(config.bird_x, self.y, config.bird_width, config.bird_height)
    }

    #[must_use]
    pub fn center_y(&self, config: &GameConfig) -> f32 {
        self.y + config.bird_height / 2.0
    }

    #[must_use]
    pub fn collides_with(&self, config: &GameConfig, rect: &Rect) -> bool {
        self.hitbox(config).overlaps(rect)
    }
}
