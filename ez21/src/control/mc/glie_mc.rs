use crate::{
    BatchLearner,
    control::Controller,
    domains::{Action, State, Transition},
    fa::{QTable, StateActionFunction, VisitCounts},
    policies::{glie_epsilon, greedy, EpsilonGreedy},
    prediction::{ActionValuePredictor, ValuePredictor},
};
use rand::Rng;

/// Every-visit Monte Carlo control with a GLIE exploration schedule.
///
/// Actions are chosen epsilon-greedily with `ε = n0 / (n0 + N(s))`, where
/// `N(s)` counts the updates made at `s` so far. After each episode every
/// occurrence of a state-action pair, duplicates included, is moved towards
/// the episode's return with step size `1 / N(s, a)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GlieMC {
    pub q_func: QTable,
    pub visits: VisitCounts,

    pub n0: f64,
}

impl GlieMC {
    pub fn new(n0: f64) -> Self {
        assert!(n0 > 0.0, "n0 must be positive, got {}", n0);

        GlieMC {
            q_func: QTable::zeros(),
            visits: VisitCounts::zeros(),

            n0,
        }
    }

    pub fn epsilon(&self, s: &State) -> f64 { glie_epsilon(self.n0, self.visits.total(s)) }

    pub fn into_q_func(self) -> QTable { self.q_func }
}

impl BatchLearner for GlieMC {
    fn handle_batch(&mut self, batch: &[Transition]) {
        // Easy21 only pays out on the final transition and is undiscounted, so
        // the return from every step is the terminal reward.
        let ret = match batch.last() {
            Some(t) => t.reward,
            None => return,
        };

        for t in batch {
            let n = self.visits.increment(&t.from, t.action);
            let alpha = 1.0 / n as f64;

            let q = self.q_func.get_mut(&t.from, t.action);
            *q += alpha * (ret - *q);
        }
    }
}

impl Controller for GlieMC {
    fn sample_behaviour(&self, rng: &mut impl Rng, s: &State) -> Action {
        EpsilonGreedy::new(self.epsilon(s)).sample(rng, &self.q_func.evaluate_all(s))
    }

    fn sample_target(&self, _: &mut impl Rng, s: &State) -> Action {
        greedy(&self.q_func.evaluate_all(s))
    }
}

impl ValuePredictor for GlieMC {
    fn predict_v(&self, s: &State) -> f64 { self.q_func.predict_v(s) }
}

impl ActionValuePredictor for GlieMC {
    fn predict_q(&self, s: &State, a: Action) -> f64 { self.q_func.predict_q(s, a) }
}
