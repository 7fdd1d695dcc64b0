use std::array;

use flappy_engine::Vision;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Constant input appended to the vision.
pub const BIAS: f32 = 1.0;

/// Number of weights: one per vision value plus the bias.
pub const INPUT_LEN: usize = Vision::LEN + 1;

#[must_use]
pub fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

/// Thresholds turning perceptron output (or a random draw) into a jump.
///
/// Both default to 0.972. The value is calibrated against the narrow output
/// range of uniform `[0, 1)` weights over normalized inputs, not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptronParams {
    /// Jump when the sigmoid output exceeds this.
    pub decision_threshold: f32,
    /// Jump when a uniform `[0, 1)` draw exceeds this, used while nothing is
    /// in sight.
    pub fallback_threshold: f32,
}

impl Default for PerceptronParams {
    fn default() -> Self {
        Self {
            decision_threshold: 0.972,
            fallback_threshold: 0.972,
        }
    }
}

/// A single linear unit with a sigmoid output.
///
/// # Example
///
/// ```
/// use flappy_brain::{Perceptron, PerceptronParams};
/// use flappy_engine::{GameSeed, Vision};
///
/// let mut perceptron = Perceptron::new([0.1, 0.2, 0.3, 0.4]);
/// let vision = Vision::from_array([0.2, 0.1, 0.7]);
/// let mut rng = GameSeed::from_u64(23).rng();
///
/// let jump = perceptron.decide(Some(&vision), &PerceptronParams::default(), &mut rng);
/// assert!(!jump);
/// assert!((perceptron.last_output().unwrap() - 0.657).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: [f32; INPUT_LEN],
    last_output: Option<f32>,
}

impl Perceptron {
    #[must_use]
    pub const fn new(weights: [f32; INPUT_LEN]) -> Self {
        Self {
            weights,
            last_output: None,
        }
    }

    /// Draws every weight uniformly from `[0, 1)`, in input order.
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::new(array::from_fn(|_| rng.random::<f32>()))
    }

    #[must_use]
    pub const fn weights(&self) -> &[f32; INPUT_LEN] {
        &self.weights
    }

    /// Output of the most recent vision-based decision.
    #[must_use]
    pub fn last_output(&self) -> Option<f32> {
        self.last_output
    }

    /// Computes `sigmoid(weights · [vision, BIAS])`.
    #[must_use]
    pub fn activate(&self, vision: &Vision) -> f32 {
        let z = vision
            .as_array()
            .iter()
            .chain(&[BIAS])
            .zip(&self.weights)
            .map(|(x, w)| x * w)
            .sum();
        sigmoid(z)
    }

    /// Decides whether to jump.
    ///
    /// With a vision, jumps when the activation exceeds the decision
    /// threshold. Without one, falls back to a uniform random draw against the
    /// fallback threshold.
    pub fn decide<R>(
        &mut self,
        vision: Option<&Vision>,
        params: &PerceptronParams,
        rng: &mut R,
    ) -> bool
    where
        R: Rng + ?Sized,
    {
        match vision {
            Some(vision) => {
                let output = self.activate(vision);
                self.last_output = Some(output);
                output > params.decision_threshold
            }
            None => rng.random::<f32>() > params.fallback_threshold,
        }
    }
}
