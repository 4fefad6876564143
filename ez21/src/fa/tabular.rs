use super::StateActionFunction;
use crate::domains::{Action, State, CARD_MIN, N_ACTIONS, N_DEALER_SUMS, N_PLAYER_SUMS};
use ndarray::Array3;

#[inline]
pub(crate) fn index(state: &State, action: Action) -> [usize; 3] {
    debug_assert!(state.is_valid(), "{} lies outside the tabular domain", state);

    [
        (state.player - CARD_MIN) as usize,
        (state.dealer - CARD_MIN) as usize,
        action.index(),
    ]
}

/// Dense action-value table over every in-play state.
///
/// Entries are laid out as `[player - 1, dealer - 1, action]` and start at 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QTable(Array3<f64>);

impl QTable {
    pub fn zeros() -> QTable { QTable(Array3::zeros((N_PLAYER_SUMS, N_DEALER_SUMS, N_ACTIONS))) }

    pub fn get(&self, state: &State, action: Action) -> f64 { self.0[index(state, action)] }

    pub fn get_mut(&mut self, state: &State, action: Action) -> &mut f64 {
        &mut self.0[index(state, action)]
    }

    pub fn update(&mut self, state: &State, action: Action, delta: f64) {
        *self.get_mut(state, action) += delta;
    }

    pub fn values(&self) -> &Array3<f64> { &self.0 }

    pub fn values_mut(&mut self) -> &mut Array3<f64> { &mut self.0 }
}

impl Default for QTable {
    fn default() -> QTable { QTable::zeros() }
}

impl StateActionFunction for QTable {
    fn evaluate(&self, state: &State, action: Action) -> f64 { self.get(state, action) }
}

/// Per state-action visit counter with the same layout as `QTable`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisitCounts(Array3<u32>);

impl VisitCounts {
    pub fn zeros() -> VisitCounts {
        VisitCounts(Array3::zeros((N_PLAYER_SUMS, N_DEALER_SUMS, N_ACTIONS)))
    }

    pub fn get(&self, state: &State, action: Action) -> u32 { self.0[index(state, action)] }

    /// Record a visit to `(state, action)` and return the updated count.
    pub fn increment(&mut self, state: &State, action: Action) -> u32 {
        let n = &mut self.0[index(state, action)];
        *n += 1;

        *n
    }

    /// Total visits to `state` across all actions.
    pub fn total(&self, state: &State) -> u32 {
        Action::ALL.iter().map(|&a| self.get(state, a)).sum()
    }

    pub fn values(&self) -> &Array3<u32> { &self.0 }
}

impl Default for VisitCounts {
    fn default() -> VisitCounts { VisitCounts::zeros() }
}
