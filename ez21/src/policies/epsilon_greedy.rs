use super::greedy;
use crate::domains::{Action, N_ACTIONS};
use rand::Rng;

const MASS_TOLERANCE: f64 = 1e-9;

/// Epsilon-greedy selection over a vector of action values.
///
/// The greedy action receives probability `ε/m + 1 - ε` and every other
/// action `ε/m`, where `m` is the number of actions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EpsilonGreedy {
    pub epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64) -> EpsilonGreedy {
        assert!(
            epsilon >= 0.0 && epsilon <= 1.0,
            "epsilon must lie in [0, 1], got {}",
            epsilon
        );

        EpsilonGreedy { epsilon }
    }

    pub fn probabilities(&self, values: &[f64; N_ACTIONS]) -> [f64; N_ACTIONS] {
        let best = greedy(values);
        let explore = self.epsilon / N_ACTIONS as f64;

        let mut ps = [explore; N_ACTIONS];
        ps[best.index()] += 1.0 - self.epsilon;

        ps
    }

    /// Sample an action by walking the cumulative probability mass in
    /// canonical action order.
    ///
    /// # Panics
    ///
    /// If the probability mass does not sum to one.
    pub fn sample(&self, rng: &mut impl Rng, values: &[f64; N_ACTIONS]) -> Action {
        let ps = self.probabilities(values);
        let total: f64 = ps.iter().sum();

        assert!(
            (total - 1.0).abs() < MASS_TOLERANCE,
            "action probabilities sum to {}, not 1",
            total
        );

        let tip: f64 = rng.gen();
        let mut mass = 0.0;

        for (&a, &p) in Action::ALL.iter().zip(ps.iter()) {
            mass += p;

            if tip <= mass {
                return a;
            }
        }

        // Only reachable through rounding in the cumulative sum.
        Action::ALL[N_ACTIONS - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn assert_close(ps: [f64; N_ACTIONS], expected: [f64; N_ACTIONS]) {
        for (p, e) in ps.iter().zip(expected.iter()) {
            assert!((p - e).abs() < 1e-12, "{:?} != {:?}", ps, expected);
        }
    }

    #[test]
    fn test_probabilities() {
        let p = EpsilonGreedy::new(0.2);

        assert_close(p.probabilities(&[1.0, 0.0]), [0.9, 0.1]);
        assert_close(p.probabilities(&[0.0, 1.0]), [0.1, 0.9]);
        assert_close(p.probabilities(&[0.0, 0.0]), [0.1, 0.9]);
    }

    #[test]
    fn test_greedy_when_epsilon_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let p = EpsilonGreedy::new(0.0);

        for _ in 0..1_000 {
            assert_eq!(p.sample(&mut rng, &[0.3, -0.3]), Action::Hit);
            assert_eq!(p.sample(&mut rng, &[-0.3, 0.3]), Action::Stick);
        }
    }

    #[test]
    fn test_uniform_when_epsilon_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = EpsilonGreedy::new(1.0);
        let n = 20_000;

        let n_hit = (0..n)
            .filter(|_| p.sample(&mut rng, &[0.0, 0.0]) == Action::Hit)
            .count();
        let p_hit = n_hit as f64 / n as f64;

        assert!((p_hit - 0.5).abs() < 0.02);
    }

    #[test]
    fn test_exploration_frequency() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = EpsilonGreedy::new(0.5);
        let n = 20_000;

        let n_stick = (0..n)
            .filter(|_| p.sample(&mut rng, &[1.0, 0.0]) == Action::Stick)
            .count();
        let p_stick = n_stick as f64 / n as f64;

        assert!((p_stick - 0.25).abs() < 0.02);
    }

    #[test]
    #[should_panic]
    fn test_invalid_epsilon() { EpsilonGreedy::new(1.5); }
}
