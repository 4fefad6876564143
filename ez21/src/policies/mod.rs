//! Agent policy module.
use crate::domains::{Action, N_ACTIONS};

import_all!(epsilon_greedy);

/// The action with the largest value in `values`, given in canonical action
/// order.
///
/// Ties go to the later action, so `Stick` is preferred when both actions
/// are valued equally.
pub fn greedy(values: &[f64; N_ACTIONS]) -> Action {
    let mut iter = values.iter().enumerate();
    let first = iter.next().map(|(i, &x)| (i, x)).unwrap_or((0, 0.0));

    let (i, _) = iter.fold(first, |acc, (i, &x)| if acc.1 > x { acc } else { (i, x) });

    Action::ALL[i]
}

/// Exploration rate that decays with the number of visits to a state,
/// `n0 / (n0 + visits)`.
pub fn glie_epsilon(n0: f64, visits: u32) -> f64 { n0 / (n0 + visits as f64) }
