//! Prediction interfaces for trained agents.
use crate::{
    domains::{Action, State},
    fa::StateActionFunction,
};

/// An interface for agents that can estimate the value of a state.
pub trait ValuePredictor {
    /// Estimate `v(s)`, the value of acting greedily from `s`.
    fn predict_v(&self, s: &State) -> f64;
}

/// An interface for agents that can estimate the value of a state-action pair.
pub trait ActionValuePredictor {
    fn predict_q(&self, s: &State, a: Action) -> f64;
}

impl<F: StateActionFunction> ValuePredictor for F {
    fn predict_v(&self, s: &State) -> f64 { self.find_max(s).1 }
}

impl<F: StateActionFunction> ActionValuePredictor for F {
    fn predict_q(&self, s: &State, a: Action) -> f64 { self.evaluate(s, a) }
}
