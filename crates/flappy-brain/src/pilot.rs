use flappy_engine::{FrameInput, GameRng, Pilot, PilotKind, Vision};
use rand::Rng as _;
use tracing::debug;

use crate::{Perceptron, PerceptronParams};

/// Autonomous pilot giving every bird its own perceptron.
///
/// Perceptrons are redrawn on every [`prepare`](Pilot::prepare), four weights
/// per bird in index order. Frame input is ignored.
#[derive(Debug, Clone)]
pub struct PerceptronPilot {
    params: PerceptronParams,
    perceptrons: Vec<Perceptron>,
}

impl PerceptronPilot {
    #[must_use]
    pub fn new(params: PerceptronParams) -> Self {
        Self {
            params,
            perceptrons: Vec::new(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &PerceptronParams {
        &self.params
    }

    #[must_use]
    pub fn perceptrons(&self) -> &[Perceptron] {
        &self.perceptrons
    }
}

impl Pilot for PerceptronPilot {
    fn kind(&self) -> PilotKind {
        PilotKind::Autonomous
    }

    fn prepare(&mut self, population: usize, rng: &mut GameRng) {
        self.perceptrons.clear();
        self.perceptrons
            .extend((0..population).map(|_| Perceptron::random(rng)));
        debug!(population, "perceptrons drawn");
    }

    fn decide(
        &mut self,
        index: usize,
        vision: Option<&Vision>,
        _input: FrameInput,
        rng: &mut GameRng,
    ) -> bool {
        match self.perceptrons.get_mut(index) {
            Some(perceptron) => perceptron.decide(vision, &self.params, rng),
            None => {
                debug!(index, "no perceptron for bird, using the fallback draw");
                rng.random::<f32>() > self.params.fallback_threshold
            }
        }
    }
}
