use std::fmt;

use crate::{GameRng, Vision};

/// Who is flying the birds of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PilotKind {
    /// A single bird driven by external input.
    ///
    /// Starts centered in the configured color, and every jump request is a
    /// fresh flap (the jump lock is released right after each jump).
    Human,
    /// Birds deciding on their own from their [`Vision`].
    ///
    /// Start at random heights within the spawn band in random colors; the jump
    /// lock re-arms only through physics.
    Autonomous,
}

/// External input delivered once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// A jump was requested since the previous frame.
    pub jump: bool,
}

/// Decision strategy of a session.
///
/// The session asks the pilot once per frame for every live bird, in bird
/// index order, before applying physics. Pilots share the session's random
/// source, so their draws are part of the deterministic call order.
pub trait Pilot: fmt::Debug {
    fn kind(&self) -> PilotKind;

    /// Called on every session reset, after the birds are placed.
    fn prepare(&mut self, population: usize, rng: &mut GameRng);

    /// Returns whether bird `index` jumps this frame.
    ///
    /// `vision` is `None` when no unpassed pipe pair exists.
    fn decide(
        &mut self,
        index: usize,
        vision: Option<&Vision>,
        input: FrameInput,
        rng: &mut GameRng,
    ) -> bool;
}

/// Jumps whenever the frame input asks for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanPilot;

impl Pilot for HumanPilot {
    fn kind(&self) -> PilotKind {
        PilotKind::Human
    }

    fn prepare(&mut self, _population: usize, _rng: &mut GameRng) {}

    fn decide(
        &mut self,
        _index: usize,
        _vision: Option<&Vision>,
        input: FrameInput,
        _rng: &mut GameRng,
    ) -> bool {
        input.jump
    }
}
