//! Game loop and the state it orchestrates.
//!
//! This module drives the core types once per frame:
//!
//! - [`GameConfig`] / [`SimParams`] - Immutable constants and mutable runtime parameters
//! - [`GameSeed`] - Seed for the single deterministic random source of a session
//! - [`PipeStream`] - Spawn timing, scrolling and retirement of pipe pairs
//! - [`Vision`] - Normalized sensory input for autonomous pilots
//! - [`Pilot`] - Decision strategy (human input or autonomous)
//! - [`GameSession`] - The unified loop for one bird or a whole population
//! - [`GameStats`] - Score, frame count, run number and per-bird survival
//!
//! # Frame Order
//!
//! Every call to [`GameSession::step`] applies, in this order:
//!
//! 1. Decision: each live bird asks the pilot whether to jump
//! 2. Physics: each live bird advances one frame
//! 3. Pipes: spawn check, scroll, passage marking, head retirement
//! 4. Collision: live birds against the ground and the next unpassed pipe pair
//! 5. Scoring: edge-triggered on a change of the next unpassed pipe pair
//! 6. Termination: game over once no bird is alive
//!
//! # Example
//!
//! ```
//! use flappy_engine::{FrameInput, GameConfig, GameSeed, GameSession, HumanPilot};
//!
//! let config = GameConfig {
//!     population: 1,
//!     ..GameConfig::default()
//! };
//! let mut session =
//!     GameSession::new(config, Box::new(HumanPilot), GameSeed::from_u64(23)).unwrap();
//!
//! while !session.is_game_over() {
//!     let jump = session.frames() % 12 == 0;
//!     session.step(FrameInput { jump });
//! }
//! println!("score: {}", session.stats().score());
//! ```

pub use self::{
    config::*, game_session::*, game_stats::*, pilot::*, pipe_stream::*, seed::*, vision::*,
};

mod config;
mod game_session;
mod game_stats;
mod pilot;
mod pipe_stream;
mod seed;
mod vision;
