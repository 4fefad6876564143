//! Eligibility traces for tabular and linear value functions.
use crate::{
    domains::{Action, State, N_ACTIONS, N_DEALER_SUMS, N_PLAYER_SUMS},
    fa::{features::N_FEATURES, index},
};
use ndarray::{Array1, Array3};

pub trait Trace {
    /// Multiply every trace by `factor`.
    fn scale(&mut self, factor: f64);

    /// Clear all traces back to zero.
    fn reset(&mut self);
}

/// Accumulating trace over every in-play `(state, action)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct TabularTrace(Array3<f64>);

impl TabularTrace {
    pub fn new() -> TabularTrace {
        TabularTrace(Array3::zeros((N_PLAYER_SUMS, N_DEALER_SUMS, N_ACTIONS)))
    }

    pub fn get(&self, state: &State, action: Action) -> f64 {
        self.0[index(state, action)]
    }

    /// Add one occurrence of `(state, action)` to its trace.
    pub fn accumulate(&mut self, state: &State, action: Action) {
        self.0[index(state, action)] += 1.0;
    }

    pub fn values(&self) -> &Array3<f64> { &self.0 }

    pub fn values_mut(&mut self) -> &mut Array3<f64> { &mut self.0 }
}

impl Default for TabularTrace {
    fn default() -> TabularTrace { TabularTrace::new() }
}

impl Trace for TabularTrace {
    fn scale(&mut self, factor: f64) { self.0 *= factor; }

    fn reset(&mut self) { self.0.fill(0.0); }
}

/// Accumulating trace over the linear feature vector.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearTrace(Array1<f64>);

impl LinearTrace {
    pub fn new() -> LinearTrace { LinearTrace(Array1::zeros(N_FEATURES)) }

    /// Decay the existing trace by `lambda`, then add the current activation:
    /// `e ← λe + x`.
    pub fn decay_then_add(&mut self, lambda: f64, x: &Array1<f64>) {
        self.scale(lambda);
        self.0 += x;
    }

    pub fn values(&self) -> &Array1<f64> { &self.0 }
}

impl Default for LinearTrace {
    fn default() -> LinearTrace { LinearTrace::new() }
}

impl Trace for LinearTrace {
    fn scale(&mut self, factor: f64) { self.0 *= factor; }

    fn reset(&mut self) { self.0.fill(0.0); }
}
