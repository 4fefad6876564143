use crate::{
    OnlineLearner,
    control::Controller,
    domains::{Action, Observation, State, Transition},
    fa::{QTable, StateActionFunction, VisitCounts},
    policies::{glie_epsilon, greedy, EpsilonGreedy},
    prediction::{ActionValuePredictor, ValuePredictor},
    traces::{TabularTrace, Trace},
};
use ndarray::Zip;
use rand::Rng;

/// On-policy tabular TD(λ) control with accumulating eligibility traces.
///
/// The first action of every episode is chosen uniformly at random; after
/// that the agent is epsilon-greedy with `ε = n0 / (n0 + N(s))`. Each update
/// uses the per-pair step size `1 / N(s, a)`.
///
/// # References
/// - Rummery, G. A. (1995). Problem Solving with Reinforcement Learning. Ph.D
/// thesis, Cambridge University.
/// - Sutton, R. S., Barto, A. G. (2018). Reinforcement Learning: An
/// Introduction, 2nd edition, §12.7.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SARSALambda {
    pub q_func: QTable,
    pub visits: VisitCounts,

    pub n0: f64,
    pub lambda: f64,

    #[serde(skip)]
    trace: TabularTrace,
}

impl SARSALambda {
    pub fn new(n0: f64, lambda: f64) -> Self {
        assert!(n0 > 0.0, "n0 must be positive, got {}", n0);
        assert!(
            lambda >= 0.0 && lambda <= 1.0,
            "lambda must lie in [0, 1], got {}",
            lambda
        );

        SARSALambda {
            q_func: QTable::zeros(),
            visits: VisitCounts::zeros(),

            n0,
            lambda,

            trace: TabularTrace::new(),
        }
    }

    pub fn epsilon(&self, s: &State) -> f64 { glie_epsilon(self.n0, self.visits.total(s)) }

    pub fn trace(&self) -> &TabularTrace { &self.trace }

    pub fn into_q_func(self) -> QTable { self.q_func }
}

impl OnlineLearner for SARSALambda {
    fn handle_transition(&mut self, t: &Transition, next_action: Option<Action>) {
        let (s, a) = (t.from, t.action);

        self.trace.accumulate(&s, a);
        self.visits.increment(&s, a);

        let qsa = self.q_func.get(&s, a);
        let nqsna = match (t.to, next_action) {
            (Observation::InPlay(ns), Some(na)) => self.q_func.get(&ns, na),
            _ => 0.0,
        };
        let td_error = t.reward + nqsna - qsa;
        let lambda = self.lambda;

        // Untouched pairs have a zero trace and may have no visits yet, so
        // they are skipped before the step size is formed.
        Zip::from(self.q_func.values_mut())
            .and(self.trace.values_mut())
            .and(self.visits.values())
            .apply(|q, e, &n| {
                if *e != 0.0 {
                    let alpha = 1.0 / n as f64;

                    *q += alpha * td_error * *e;
                    *e *= lambda;
                }
            });
    }

    fn handle_terminal(&mut self) { self.trace.reset(); }
}

impl Controller for SARSALambda {
    fn sample_initial(&self, rng: &mut impl Rng, s: &State) -> Action {
        EpsilonGreedy::new(1.0).sample(rng, &self.q_func.evaluate_all(s))
    }

    fn sample_behaviour(&self, rng: &mut impl Rng, s: &State) -> Action {
        EpsilonGreedy::new(self.epsilon(s)).sample(rng, &self.q_func.evaluate_all(s))
    }

    fn sample_target(&self, _: &mut impl Rng, s: &State) -> Action {
        greedy(&self.q_func.evaluate_all(s))
    }
}

impl ValuePredictor for SARSALambda {
    fn predict_v(&self, s: &State) -> f64 { self.q_func.predict_v(s) }
}

impl ActionValuePredictor for SARSALambda {
    fn predict_q(&self, s: &State, a: Action) -> f64 { self.q_func.predict_q(s, a) }
}
