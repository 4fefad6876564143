//! Tabular and linear control algorithms for the Easy21 card game.
//!
//! Three learners are provided: every-visit GLIE Monte Carlo control
//! ([`GlieMC`](control/mc/struct.GlieMC.html)), tabular SARSA(λ)
//! ([`SARSALambda`](control/td/struct.SARSALambda.html)) and SARSA(λ) over a
//! coarse-coded linear representation
//! ([`LinearSARSALambda`](control/td/struct.LinearSARSALambda.html)). The
//! Monte Carlo estimate serves as the reference that the other two are
//! benchmarked against, see the [`experiment`](experiment/index.html) module.
#[macro_use]
extern crate serde;
#[macro_use]
extern crate slog;

pub use ez21_domains as domains;

#[macro_use]
mod macros;

pub mod logging;

pub mod config;
pub mod experiment;

pub mod control;
pub mod fa;
pub mod policies;
pub mod prediction;
pub mod traces;

import_all!(evaluation);

use crate::domains::{Action, Transition};

/// An interface for learners that update their estimates after every step.
pub trait OnlineLearner {
    /// Handle a single transition collected from the environment.
    ///
    /// `next_action` is the action the agent has committed to in `t.to`; it is
    /// `None` exactly when the transition is terminal.
    fn handle_transition(&mut self, t: &Transition, next_action: Option<Action>);

    /// Perform housekeeping after the end of an episode.
    fn handle_terminal(&mut self) {}
}

/// An interface for learners that update their estimates from whole episodes.
pub trait BatchLearner {
    /// Handle a complete episode of transitions, in the order they occurred.
    fn handle_batch(&mut self, batch: &[Transition]);
}
