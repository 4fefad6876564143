//! Coarse coding of `(state, action)` pairs into binary features.
//!
//! The state space is covered by overlapping dealer and player intervals; each
//! `(dealer interval, player interval, action)` cuboid is one feature. Indices
//! run dealer-major, then player, then action.
use crate::domains::{Action, State, N_ACTIONS};
use ndarray::Array1;

pub const DEALER_INTERVALS: [(i32, i32); 3] = [(1, 4), (4, 7), (7, 10)];

pub const PLAYER_INTERVALS: [(i32, i32); 6] = [(1, 6), (4, 9), (7, 12), (10, 15), (13, 18), (16, 21)];

pub const N_FEATURES: usize = DEALER_INTERVALS.len() * PLAYER_INTERVALS.len() * N_ACTIONS;

#[inline]
fn contains(interval: &(i32, i32), x: i32) -> bool { x >= interval.0 && x <= interval.1 }

/// Index of the feature for the given dealer interval, player interval and
/// action.
pub fn feature_index(dealer_interval: usize, player_interval: usize, action: Action) -> usize {
    (dealer_interval * PLAYER_INTERVALS.len() + player_interval) * N_ACTIONS + action.index()
}

/// Encode `(state, action)` as a 0/1 vector of length `N_FEATURES`.
pub fn encode(state: &State, action: Action) -> Array1<f64> {
    let mut x = Array1::zeros(N_FEATURES);

    for (i, d) in DEALER_INTERVALS.iter().enumerate() {
        if !contains(d, state.dealer) {
            continue;
        }

        for (j, p) in PLAYER_INTERVALS.iter().enumerate() {
            if contains(p, state.player) {
                x[feature_index(i, j, action)] = 1.0;
            }
        }
    }

    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_dimension() {
        assert_eq!(N_FEATURES, 36);
        assert_eq!(encode(&State::new(10, 5), Action::Hit).len(), N_FEATURES);
    }

    #[test]
    fn test_corners() {
        let x = encode(&State::new(1, 1), Action::Hit);

        assert_eq!(x[0], 1.0);
        assert_eq!(x.iter().sum::<f64>(), 1.0);

        let x = encode(&State::new(21, 10), Action::Stick);

        assert_eq!(x[35], 1.0);
        assert_eq!(x.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_overlap() {
        // Dealer 4 sits in the first two dealer intervals, player 5 in the
        // first two player intervals.
        let x = encode(&State::new(5, 4), Action::Stick);
        let active: Vec<usize> = x.indexed_iter().filter(|&(_, &v)| v == 1.0).map(|(i, _)| i).collect();

        assert_eq!(active, vec![
            feature_index(0, 0, Action::Stick),
            feature_index(0, 1, Action::Stick),
            feature_index(1, 0, Action::Stick),
            feature_index(1, 1, Action::Stick),
        ]);
    }

    #[test]
    fn test_encoding_is_binary_and_deterministic() {
        fn prop(p: u8, d: u8, stick: bool) -> bool {
            let s = State::new(1 + (p as i32) % 21, 1 + (d as i32) % 10);
            let a = if stick { Action::Stick } else { Action::Hit };

            let x = encode(&s, a);
            let n_active = x.iter().filter(|&&v| v == 1.0).count();

            x == encode(&s, a)
                && x.iter().all(|&v| v == 0.0 || v == 1.0)
                && n_active >= 1
                && n_active <= 4
                && x.indexed_iter().all(|(i, &v)| v == 0.0 || i % N_ACTIONS == a.index())
        }

        quickcheck(prop as fn(u8, u8, bool) -> bool);
    }
}
