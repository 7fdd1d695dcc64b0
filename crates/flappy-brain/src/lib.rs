//! Fixed-weight perceptrons flying a bird population.
//!
//! - [`Perceptron`] - Sigmoid of a weighted sum of the vision and a bias
//! - [`PerceptronParams`] - Decision thresholds
//! - [`PerceptronPilot`] - The autonomous [`Pilot`](flappy_engine::Pilot), one perceptron per bird
//!
//! Weights are drawn once per run and never trained.

pub use self::{perceptron::*, pilot::*};

mod perceptron;
mod pilot;
