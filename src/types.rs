//! This module defines the core data structures and types used throughout the Turing Machine
//! engine, including state identifiers, head directions, transition actions, step outcomes,
//! and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The default blank symbol used on the Turing Machine tape.
pub const DEFAULT_BLANK_SYMBOL: char = '_';
/// The state a freshly configured machine starts in.
pub const DEFAULT_INITIAL_STATE: &str = "q0";
/// The sentinel state whose reach halts execution.
pub const DEFAULT_TERMINAL_STATE: &str = "!";

/// A single tape symbol.
pub type Symbol = char;

/// An opaque identifier naming a state of the machine.
///
/// Any string is a valid state as long as the transition rules reference it consistently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&State> for State {
    fn from(state: &State) -> Self {
        state.clone()
    }
}

impl PartialEq<str> for State {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents the possible directions a Turing Machine head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

impl Direction {
    /// Returns the signed head offset for this direction.
    pub fn offset(self) -> i64 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Stay => 0,
        }
    }
}

impl FromStr for Direction {
    type Err = TuringMachineError;

    /// Accepts the short forms `L`, `R`, `N` (or `S`) as well as the full names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "L" | "l" | "Left" | "left" => Ok(Direction::Left),
            "R" | "r" | "Right" | "right" => Ok(Direction::Right),
            "N" | "n" | "S" | "s" | "Stay" | "stay" => Ok(Direction::Stay),
            other => Err(TuringMachineError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Stay => 'N',
        };
        write!(f, "{c}")
    }
}

/// The action taken when a rule fires: what to write, where to move, which state comes next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The symbol written under the head.
    pub write: Symbol,
    /// The direction the head moves after writing.
    pub direction: Direction,
    /// The state the machine transitions to.
    pub next_state: State,
}

impl Action {
    pub fn new(write: Symbol, direction: Direction, next_state: impl Into<State>) -> Self {
        Self {
            write,
            direction,
            next_state: next_state.into(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.write, self.direction, self.next_state)
    }
}

/// Represents the outcome of a Turing Machine execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The machine performed a step and has not yet reached the terminal state.
    Continue,
    /// The machine is in the terminal state.
    Halt,
}

/// Represents various errors that can occur during Turing Machine operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TuringMachineError {
    /// The symbol under the head is not a member of the configured alphabet.
    #[error("Symbol {symbol:?} at position {position} is not in the alphabet")]
    SymbolNotInAlphabet { symbol: Symbol, position: i64 },
    /// The current state has no registered transition rules at all.
    #[error("State {0} is not defined")]
    UndefinedState(State),
    /// The current state has rules, but none for the symbol under the head.
    #[error("No transition defined for state {state} and symbol {symbol:?}")]
    UndefinedTransition { state: State, symbol: Symbol },
    /// A head direction could not be parsed.
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
    /// A machine setup that cannot be run as given.
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Reading, writing or decoding a configuration failed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// No canned program goes by the requested name.
    #[error("Unknown program: {0}")]
    UnknownProgram(String),
}
