//! Function approximation and value function representation module.
use crate::{
    domains::{Action, Observation, State, N_ACTIONS},
    policies::greedy,
};
use ndarray::{Array1, ArrayView1, ArrayViewMut1};

pub mod features;

import_all!(tabular);
pub(crate) use self::tabular::index;
import_all!(linear);

/// An interface for types with a flat vector of learnable weights.
pub trait Parameterised {
    fn weights_view(&self) -> ArrayView1<f64>;

    fn weights_view_mut(&mut self) -> ArrayViewMut1<f64>;

    fn weights(&self) -> Array1<f64> { self.weights_view().to_owned() }

    fn weights_dim(&self) -> usize { self.weights_view().len() }

    /// Move the weights a step of size `factor` along `grad`.
    fn update_grad_scaled(&mut self, grad: &Array1<f64>, factor: f64) {
        self.weights_view_mut().scaled_add(factor, grad);
    }
}

/// An interface for state-action value functions.
pub trait StateActionFunction {
    fn evaluate(&self, state: &State, action: Action) -> f64;

    /// Evaluate every action at `state`, in canonical action order.
    fn evaluate_all(&self, state: &State) -> [f64; N_ACTIONS] {
        let mut values = [0.0; N_ACTIONS];

        for &a in Action::ALL.iter() {
            values[a.index()] = self.evaluate(state, a);
        }

        values
    }

    /// Evaluate every action at `obs`; the terminal observation is worth 0.
    fn evaluate_observation(&self, obs: &Observation) -> [f64; N_ACTIONS] {
        match obs {
            Observation::InPlay(s) => self.evaluate_all(s),
            Observation::Terminal => [0.0; N_ACTIONS],
        }
    }

    /// The greedy action at `state` and its value.
    fn find_max(&self, state: &State) -> (Action, f64) {
        let values = self.evaluate_all(state);
        let a = greedy(&values);

        (a, values[a.index()])
    }
}
