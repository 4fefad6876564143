use crate::{Observation, Transition};
use rand::Rng;
use std::{cmp::Ordering, fmt};

pub const CARD_MIN: i32 = 1;
pub const CARD_MAX: i32 = 10;
pub const DECK_MAX: i32 = 21;
pub const DEALER_STICK: i32 = 17;

/// Number of distinct player sums an in-play state can take.
pub const N_PLAYER_SUMS: usize = (DECK_MAX - CARD_MIN + 1) as usize;

/// Number of distinct dealer sums an in-play state can take.
pub const N_DEALER_SUMS: usize = (CARD_MAX - CARD_MIN + 1) as usize;

pub const N_ACTIONS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw another card.
    Hit,
    /// Take no further cards; the dealer plays out their hand.
    Stick,
}

impl Action {
    /// The canonical action order. Value vectors, feature blocks and policy
    /// sampling all follow it.
    pub const ALL: [Action; N_ACTIONS] = [Action::Hit, Action::Stick];

    pub fn index(self) -> usize {
        match self {
            Action::Hit => 0,
            Action::Stick => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Action> { Action::ALL.get(i).copied() }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Hit => write!(f, "hit"),
            Action::Stick => write!(f, "stick"),
        }
    }
}

/// The visible game state: the player's running sum and the dealer's first
/// card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    pub player: i32,
    pub dealer: i32,
}

impl State {
    pub fn new(player: i32, dealer: i32) -> State { State { player, dealer } }

    /// True if the state lies in the bounded rectangle reachable under the
    /// rules, `player ∈ [1, 21]` and `dealer ∈ [1, 10]`.
    pub fn is_valid(&self) -> bool {
        self.player >= CARD_MIN
            && self.player <= DECK_MAX
            && self.dealer >= CARD_MIN
            && self.dealer <= CARD_MAX
    }

    /// Every in-play state, player-major.
    pub fn all() -> impl Iterator<Item = State> {
        (CARD_MIN..=DECK_MAX)
            .flat_map(|player| (CARD_MIN..=CARD_MAX).map(move |dealer| State { player, dealer }))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(player: {}, dealer: {})", self.player, self.dealer)
    }
}

pub fn is_bust(sum: i32) -> bool { sum > DECK_MAX || sum < CARD_MIN }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colour {
    Black,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub value: i32,
    pub colour: Colour,
}

impl Card {
    pub fn draw(rng: &mut impl Rng) -> Card {
        let value = rng.gen_range(CARD_MIN, CARD_MAX + 1);
        let colour = if rng.gen_ratio(2, 3) {
            Colour::Black
        } else {
            Colour::Red
        };

        Card { value, colour }
    }

    pub fn signed_value(&self) -> i32 {
        match self.colour {
            Colour::Black => self.value,
            Colour::Red => -self.value,
        }
    }
}

/// Draw a card from the infinite deck and return its signed value.
pub fn draw_card(rng: &mut impl Rng) -> i32 { Card::draw(rng).signed_value() }

/// Deal the opening hand: one forced-black card each for the player and the
/// dealer, in that order.
pub fn draw_initial_state(rng: &mut impl Rng) -> State {
    let player = draw_card(rng).abs();
    let dealer = draw_card(rng).abs();

    State { player, dealer }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DealerOutcome {
    Stuck(i32),
    Bust(i32),
}

/// Play the dealer's hand to completion from `dealer`.
///
/// The dealer draws while their sum is below 17, so the outcome is either a
/// sum in `[17, 21]` or a bust.
pub fn play_dealer(rng: &mut impl Rng, mut dealer: i32) -> DealerOutcome {
    while dealer < DEALER_STICK {
        dealer += draw_card(rng);

        if is_bust(dealer) {
            return DealerOutcome::Bust(dealer);
        }
    }

    DealerOutcome::Stuck(dealer)
}

/// Simulate one step of the game from a non-terminal `state`.
///
/// Hitting yields a reward of 0 and a new in-play state unless the player
/// busts, which ends the episode with -1. Sticking always ends the episode:
/// +1 if the dealer busts or finishes below the player, -1 if the dealer
/// finishes above, and 0 on a draw.
pub fn step(rng: &mut impl Rng, state: State, action: Action) -> Transition {
    let (to, reward) = match action {
        Action::Hit => {
            let player = state.player + draw_card(rng);

            if is_bust(player) {
                (Observation::Terminal, -1.0)
            } else {
                (Observation::InPlay(State { player, ..state }), 0.0)
            }
        },
        Action::Stick => match play_dealer(rng, state.dealer) {
            DealerOutcome::Bust(_) => (Observation::Terminal, 1.0),
            DealerOutcome::Stuck(dealer) => {
                let reward = match dealer.cmp(&state.player) {
                    Ordering::Less => 1.0,
                    Ordering::Greater => -1.0,
                    Ordering::Equal => 0.0,
                };

                (Observation::Terminal, reward)
            },
        },
    };

    Transition {
        from: state,
        action,
        reward,
        to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};
    use serde_test::{assert_tokens, Token};

    fn state_from(p: u8, d: u8) -> State {
        State::new(CARD_MIN + (p as i32) % 21, CARD_MIN + (d as i32) % 10)
    }

    #[test]
    fn test_draw_card_bounds() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..10_000 {
            let c = draw_card(&mut rng);

            assert!(c != 0);
            assert!(c.abs() >= CARD_MIN && c.abs() <= CARD_MAX);
        }
    }

    #[test]
    fn test_card_colour_frequency() {
        let mut rng = StdRng::seed_from_u64(1);
        let n = 60_000;

        let n_black = (0..n).filter(|_| draw_card(&mut rng) > 0).count();
        let p_black = n_black as f64 / n as f64;

        assert!((p_black - 2.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn test_initial_state_is_black() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..1_000 {
            let s = draw_initial_state(&mut rng);

            assert!(s.is_valid());
            assert!(s.player <= CARD_MAX);
        }
    }

    #[test]
    fn test_all_states() {
        let states: Vec<State> = State::all().collect();

        assert_eq!(states.len(), N_PLAYER_SUMS * N_DEALER_SUMS);
        assert_eq!(states[0], State::new(1, 1));
        assert_eq!(states[states.len() - 1], State::new(21, 10));
        assert!(states.iter().all(State::is_valid));
    }

    #[test]
    fn test_action_index() {
        for (i, a) in Action::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
            assert_eq!(Action::from_index(i), Some(*a));
        }

        assert_eq!(Action::from_index(2), None);
    }

    #[test]
    fn test_hit_reward() {
        fn prop(seed: u64, p: u8, d: u8) -> bool {
            let s = state_from(p, d);
            let expected = s.player + draw_card(&mut StdRng::seed_from_u64(seed));

            let t = step(&mut StdRng::seed_from_u64(seed), s, Action::Hit);

            match t.to {
                Observation::InPlay(ns) => {
                    !is_bust(expected) && t.reward == 0.0 && ns == State::new(expected, s.dealer)
                },
                Observation::Terminal => is_bust(expected) && t.reward == -1.0,
            }
        }

        quickcheck(prop as fn(u64, u8, u8) -> bool);
    }

    #[test]
    fn test_stick_reward() {
        fn prop(seed: u64, p: u8, d: u8) -> bool {
            let s = state_from(p, d);
            let outcome = play_dealer(&mut StdRng::seed_from_u64(seed), s.dealer);

            let t = step(&mut StdRng::seed_from_u64(seed), s, Action::Stick);

            t.terminated()
                && match outcome {
                    DealerOutcome::Bust(_) => t.reward == 1.0,
                    DealerOutcome::Stuck(dealer) if dealer == s.player => t.reward == 0.0,
                    DealerOutcome::Stuck(dealer) if dealer > s.player => t.reward == -1.0,
                    DealerOutcome::Stuck(_) => t.reward == 1.0,
                }
        }

        quickcheck(prop as fn(u64, u8, u8) -> bool);
    }

    #[test]
    fn test_dealer_plays_to_seventeen() {
        fn prop(seed: u64, d: u8) -> bool {
            let dealer = CARD_MIN + (d as i32) % 10;

            match play_dealer(&mut StdRng::seed_from_u64(seed), dealer) {
                DealerOutcome::Stuck(sum) => sum >= DEALER_STICK && sum <= DECK_MAX,
                DealerOutcome::Bust(sum) => is_bust(sum),
            }
        }

        quickcheck(prop as fn(u64, u8) -> bool);
    }

    #[test]
    fn test_serde_action() {
        assert_tokens(&Action::Hit, &[Token::UnitVariant {
            name: "Action",
            variant: "Hit",
        }]);
        assert_tokens(&Action::Stick, &[Token::UnitVariant {
            name: "Action",
            variant: "Stick",
        }]);
    }

    #[test]
    fn test_serde_state() {
        assert_tokens(&State::new(13, 7), &[
            Token::Struct {
                name: "State",
                len: 2,
            },
            Token::Str("player"),
            Token::I32(13),
            Token::Str("dealer"),
            Token::I32(7),
            Token::StructEnd,
        ]);
    }
}
