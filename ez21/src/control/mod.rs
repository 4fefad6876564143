//! Agent control module.
use crate::domains::{Action, State};
use rand::Rng;

pub mod mc;
pub mod td;

/// An interface for value-based agents capable of acting in the environment.
pub trait Controller {
    /// Sample the first action of an episode.
    fn sample_initial(&self, rng: &mut impl Rng, s: &State) -> Action {
        self.sample_behaviour(rng, s)
    }

    /// Sample an action from the exploratory behaviour policy.
    fn sample_behaviour(&self, rng: &mut impl Rng, s: &State) -> Action;

    /// Sample an action from the greedy target policy.
    fn sample_target(&self, rng: &mut impl Rng, s: &State) -> Action;
}
