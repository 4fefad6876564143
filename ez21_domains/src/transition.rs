use crate::{Action, State};

/// The result of a transition: either a state the player acts in next, or the
/// end of the episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observation {
    InPlay(State),
    Terminal,
}

impl Observation {
    pub fn state(&self) -> Option<&State> {
        match self {
            Observation::InPlay(ref s) => Some(s),
            Observation::Terminal => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        match self {
            Observation::Terminal => true,
            _ => false,
        }
    }
}

impl From<State> for Observation {
    fn from(state: State) -> Observation { Observation::InPlay(state) }
}

/// A single step of experience, `(s, a, r, s')`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: State,
    pub action: Action,
    pub reward: f64,
    pub to: Observation,
}

impl Transition {
    pub fn terminated(&self) -> bool { self.to.is_terminal() }

    pub fn states(&self) -> (&State, Option<&State>) { (&self.from, self.to.state()) }
}
