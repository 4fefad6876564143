use super::{features, Parameterised, StateActionFunction};
use crate::domains::{Action, State};
use ndarray::{Array1, ArrayView1, ArrayViewMut1};

/// Linear action-value function over the coarse-coded features,
/// `q(s, a) = x(s, a) · w`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearQ {
    weights: Array1<f64>,
}

impl LinearQ {
    pub fn zeros() -> LinearQ {
        LinearQ {
            weights: Array1::zeros(features::N_FEATURES),
        }
    }

    pub fn from_weights(weights: Array1<f64>) -> LinearQ {
        assert_eq!(
            weights.len(),
            features::N_FEATURES,
            "weight vector must have one entry per feature"
        );

        LinearQ { weights }
    }

    pub fn into_weights(self) -> Array1<f64> { self.weights }
}

impl Default for LinearQ {
    fn default() -> LinearQ { LinearQ::zeros() }
}

impl Parameterised for LinearQ {
    fn weights_view(&self) -> ArrayView1<f64> { self.weights.view() }

    fn weights_view_mut(&mut self) -> ArrayViewMut1<f64> { self.weights.view_mut() }
}

impl StateActionFunction for LinearQ {
    fn evaluate(&self, state: &State, action: Action) -> f64 {
        features::encode(state, action).dot(&self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weights() {
        let q = LinearQ::zeros();

        assert_eq!(q.weights_dim(), features::N_FEATURES);
        assert_eq!(q.evaluate(&State::new(12, 6), Action::Hit), 0.0);
    }

    #[test]
    fn test_evaluate_sums_active_weights() {
        let q = LinearQ::from_weights(Array1::from_shape_fn(features::N_FEATURES, |i| i as f64));
        let s = State::new(5, 4);

        let expected: f64 = [(0, 0), (0, 1), (1, 0), (1, 1)]
            .iter()
            .map(|&(d, p)| features::feature_index(d, p, Action::Hit) as f64)
            .sum();

        assert_eq!(q.evaluate(&s, Action::Hit), expected);
    }

    #[test]
    fn test_update_grad_scaled() {
        let mut q = LinearQ::zeros();
        let s = State::new(20, 9);
        let x = features::encode(&s, Action::Stick);

        q.update_grad_scaled(&x, 0.5);

        assert_eq!(q.evaluate(&s, Action::Stick), 0.5 * x.iter().sum::<f64>());
        assert_eq!(q.evaluate(&s, Action::Hit), 0.0);
    }

    #[test]
    #[should_panic]
    fn test_wrong_dimension() { LinearQ::from_weights(Array1::zeros(10)); }
}
