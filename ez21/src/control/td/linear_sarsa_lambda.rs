use crate::{
    OnlineLearner,
    control::Controller,
    domains::{Action, Observation, State, Transition},
    fa::{features, LinearQ, Parameterised, StateActionFunction},
    policies::{greedy, EpsilonGreedy},
    prediction::{ActionValuePredictor, ValuePredictor},
    traces::{LinearTrace, Trace},
};
use ndarray::{ArrayView1, ArrayViewMut1};
use rand::Rng;

/// TD(λ) control over the coarse-coded linear representation.
///
/// Unlike the tabular learner, exploration and step size are constant: every
/// action, including the first of an episode, is epsilon-greedy with a fixed
/// `ε`, and the weights move with a fixed `α`. The trace is decayed before
/// the current features are added.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinearSARSALambda {
    pub q_func: LinearQ,
    pub policy: EpsilonGreedy,

    pub alpha: f64,
    pub lambda: f64,

    #[serde(skip)]
    trace: LinearTrace,
}

impl LinearSARSALambda {
    pub fn new(alpha: f64, epsilon: f64, lambda: f64) -> Self {
        assert!(alpha > 0.0, "alpha must be positive, got {}", alpha);
        assert!(
            lambda >= 0.0 && lambda <= 1.0,
            "lambda must lie in [0, 1], got {}",
            lambda
        );

        LinearSARSALambda {
            q_func: LinearQ::zeros(),
            policy: EpsilonGreedy::new(epsilon),

            alpha,
            lambda,

            trace: LinearTrace::new(),
        }
    }

    pub fn trace(&self) -> &LinearTrace { &self.trace }

    pub fn into_q_func(self) -> LinearQ { self.q_func }
}

impl Parameterised for LinearSARSALambda {
    fn weights_view(&self) -> ArrayView1<f64> { self.q_func.weights_view() }

    fn weights_view_mut(&mut self) -> ArrayViewMut1<f64> { self.q_func.weights_view_mut() }
}

impl OnlineLearner for LinearSARSALambda {
    fn handle_transition(&mut self, t: &Transition, next_action: Option<Action>) {
        let x = features::encode(&t.from, t.action);

        let qsa = x.dot(&self.q_func.weights_view());
        let nqsna = match (t.to, next_action) {
            (Observation::InPlay(ns), Some(na)) => self.q_func.evaluate(&ns, na),
            _ => 0.0,
        };
        let td_error = t.reward + nqsna - qsa;

        self.trace.decay_then_add(self.lambda, &x);
        self.q_func.update_grad_scaled(self.trace.values(), self.alpha * td_error);
    }

    fn handle_terminal(&mut self) { self.trace.reset(); }
}

impl Controller for LinearSARSALambda {
    fn sample_behaviour(&self, rng: &mut impl Rng, s: &State) -> Action {
        self.policy.sample(rng, &self.q_func.evaluate_all(s))
    }

    fn sample_target(&self, _: &mut impl Rng, s: &State) -> Action {
        greedy(&self.q_func.evaluate_all(s))
    }
}

impl ValuePredictor for LinearSARSALambda {
    fn predict_v(&self, s: &State) -> f64 { self.q_func.predict_v(s) }
}

impl ActionValuePredictor for LinearSARSALambda {
    fn predict_q(&self, s: &State, a: Action) -> f64 { self.q_func.predict_q(s, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fa::features::N_FEATURES;

    #[test]
    fn test_terminal_update() {
        let mut agent = LinearSARSALambda::new(0.5, 0.05, 0.0);
        let s = State::new(20, 9);

        agent.handle_transition(
            &Transition {
                from: s,
                action: Action::Stick,
                reward: 1.0,
                to: Observation::Terminal,
            },
            None,
        );
        agent.handle_terminal();

        // (20, 9) activates a single feature, so q moves halfway to the reward.
        assert_eq!(agent.predict_q(&s, Action::Stick), 0.5);
        assert_eq!(agent.predict_q(&s, Action::Hit), 0.0);
        assert_eq!(agent.weights_dim(), N_FEATURES);
        assert_eq!(agent.trace(), &LinearTrace::new());
    }

    #[test]
    fn test_trace_carries_credit() {
        let mut agent = LinearSARSALambda::new(0.5, 0.05, 1.0);
        let (s1, s2) = (State::new(2, 9), State::new(20, 9));

        agent.handle_transition(
            &Transition {
                from: s1,
                action: Action::Hit,
                reward: 0.0,
                to: Observation::InPlay(s2),
            },
            Some(Action::Stick),
        );
        assert_eq!(agent.weights(), LinearQ::zeros().into_weights());

        agent.handle_transition(
            &Transition {
                from: s2,
                action: Action::Stick,
                reward: 1.0,
                to: Observation::Terminal,
            },
            None,
        );

        assert_eq!(agent.predict_q(&s1, Action::Hit), 0.5);
        assert_eq!(agent.predict_q(&s2, Action::Stick), 0.5);
    }
}
