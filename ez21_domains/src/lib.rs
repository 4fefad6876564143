//! The Easy21 card game.
//!
//! Easy21 is a stochastic variant of blackjack with an infinite deck: every
//! card has a value drawn uniformly from 1 to 10 and is black (added) with
//! probability 2/3 or red (subtracted) with probability 1/3. The player may
//! `Hit` until they either bust or `Stick`, after which the dealer draws until
//! reaching 17 or going bust.
#[macro_use]
extern crate serde;

mod easy21;
pub use self::easy21::*;

mod transition;
pub use self::transition::{Observation, Transition};
