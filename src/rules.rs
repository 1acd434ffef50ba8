//! This module provides the `TransitionTable`, the registry of per-state transition rules
//! consulted by the machine on every step.

use crate::types::{Action, Direction, State, Symbol, TuringMachineError};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// The rules of a single state, keyed by the symbol read under the head.
pub type StateRules = HashMap<Symbol, Action>;

/// Builds a single `(read, action)` entry for a state's rule map.
///
/// ```
/// use tur_engine::rules::rule;
/// use tur_engine::Direction;
///
/// let (read, action) = rule('0', '1', Direction::Right, "q0");
/// assert_eq!(read, '0');
/// assert_eq!(action.write, '1');
/// ```
pub fn rule(
    read: Symbol,
    write: Symbol,
    direction: Direction,
    next_state: impl Into<State>,
) -> (Symbol, Action) {
    (read, Action::new(write, direction, next_state))
}

/// Why a lookup found no action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The state has no rules registered at all.
    #[error("State {0} has no rules")]
    UnknownState(State),
    /// The state has rules, but none for this symbol.
    #[error("State {0} has no rule for symbol {1:?}")]
    UnknownSymbol(State, Symbol),
}

impl From<LookupError> for TuringMachineError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::UnknownState(state) => TuringMachineError::UndefinedState(state),
            LookupError::UnknownSymbol(state, symbol) => {
                TuringMachineError::UndefinedTransition { state, symbol }
            }
        }
    }
}

/// Maps each state to its symbol-to-action rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    rules: HashMap<State, StateRules>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rules for `state`, replacing any rules it had before.
    ///
    /// Rule sets are never merged: the last registration for a state wins.
    pub fn register<I>(&mut self, state: impl Into<State>, rules: I)
    where
        I: IntoIterator<Item = (Symbol, Action)>,
    {
        let state = state.into();
        let rules: StateRules = rules.into_iter().collect();
        debug!(state = %state, rules = rules.len(), "registering transition rules");

        if self.rules.insert(state.clone(), rules).is_some() {
            debug!(state = %state, "replaced existing transition rules");
        }
    }

    /// Finds the action for `symbol` read while in `state`.
    pub fn lookup(&self, state: &State, symbol: Symbol) -> Result<&Action, LookupError> {
        self.rules
            .get(state)
            .ok_or_else(|| LookupError::UnknownState(state.clone()))?
            .get(&symbol)
            .ok_or_else(|| LookupError::UnknownSymbol(state.clone(), symbol))
    }

    /// Copies every state of `other` into this table, replacing same-named states wholesale.
    pub fn merge(&mut self, other: &TransitionTable) {
        for (state, rules) in &other.rules {
            self.register(state, rules.iter().map(|(&read, action)| (read, action.clone())));
        }
    }

    /// Returns the rules registered for `state`.
    pub fn get(&self, state: &State) -> Option<&StateRules> {
        self.rules.get(state)
    }

    pub fn contains_state(&self, state: &State) -> bool {
        self.rules.contains_key(state)
    }

    /// Returns every state with registered rules, sorted for deterministic output.
    pub fn states(&self) -> Vec<&State> {
        let mut states: Vec<&State> = self.rules.keys().collect();
        states.sort();
        states
    }

    pub fn state_count(&self) -> usize {
        self.rules.len()
    }

    pub fn transition_count(&self) -> usize {
        self.rules.values().map(|rules| rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
