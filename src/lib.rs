//! This crate provides the execution engine for a single-tape, single-head deterministic
//! Turing Machine. It includes modules for the sparse tape, the transition table, the machine
//! itself, its configuration, and a pair of canned rule sets.

pub mod config;
pub mod machine;
pub mod programs;
pub mod rules;
pub mod tape;
pub mod types;

/// Re-exports the `MachineConfig` struct from the config module.
pub use config::MachineConfig;
/// Re-exports the `TuringMachine` struct from the machine module.
pub use machine::TuringMachine;
/// Re-exports the canned program builders from the programs module.
pub use programs::{increment, invert, Program};
/// Re-exports the `TransitionTable` and its lookup error from the rules module.
pub use rules::{rule, LookupError, TransitionTable};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the types describing states, transitions and errors from the types module.
pub use types::{
    Action, Direction, State, Step, Symbol, TuringMachineError, DEFAULT_BLANK_SYMBOL,
    DEFAULT_INITIAL_STATE, DEFAULT_TERMINAL_STATE,
};
