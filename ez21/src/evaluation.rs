use crate::{
    domains::{Action, State},
    prediction::ActionValuePredictor,
};

/// Mean squared error between two action-value functions over every in-play
/// state-action pair, 21 × 10 × 2 = 420 entries.
pub fn mse<A, B>(q_a: &A, q_b: &B) -> f64
where
    A: ActionValuePredictor + ?Sized,
    B: ActionValuePredictor + ?Sized,
{
    let mut err = 0.0;
    let mut n = 0;

    for s in State::all() {
        for &a in Action::ALL.iter() {
            err += (q_a.predict_q(&s, a) - q_b.predict_q(&s, a)).powi(2);
            n += 1;
        }
    }

    err / n as f64
}
