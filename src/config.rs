//! This module defines `MachineConfig`, the register defaults a machine is built with, and
//! saving and loading it as JSON.

use crate::types::{
    State, Symbol, TuringMachineError, DEFAULT_BLANK_SYMBOL, DEFAULT_INITIAL_STATE,
    DEFAULT_TERMINAL_STATE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configures the registers of a `TuringMachine`.
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// The state every run starts in.
    pub initial_state: State,
    /// The state whose reach halts execution.
    pub terminal_state: State,
    /// The symbol read from any position never written.
    pub blank: Symbol,
    /// Whether `execute` restores the state and head position before loading its input.
    /// When `false`, consecutive runs continue from wherever the previous one stopped.
    pub reset_on_execute: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_state: State::from(DEFAULT_INITIAL_STATE),
            terminal_state: State::from(DEFAULT_TERMINAL_STATE),
            blank: DEFAULT_BLANK_SYMBOL,
            reset_on_execute: true,
        }
    }
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_state(mut self, state: impl Into<State>) -> Self {
        self.initial_state = state.into();
        self
    }

    pub fn with_terminal_state(mut self, state: impl Into<State>) -> Self {
        self.terminal_state = state.into();
        self
    }

    pub fn with_blank(mut self, blank: Symbol) -> Self {
        self.blank = blank;
        self
    }

    pub fn with_reset_on_execute(mut self, reset: bool) -> Self {
        self.reset_on_execute = reset;
        self
    }

    /// Checks that the configuration describes a machine that can run.
    pub fn validate(&self) -> Result<(), TuringMachineError> {
        if self.initial_state.is_empty() {
            return Err(TuringMachineError::ValidationError(
                "Initial state must not be empty".to_string(),
            ));
        }

        if self.terminal_state.is_empty() {
            return Err(TuringMachineError::ValidationError(
                "Terminal state must not be empty".to_string(),
            ));
        }

        if self.initial_state == self.terminal_state {
            return Err(TuringMachineError::ValidationError(format!(
                "Initial state {} must differ from the terminal state",
                self.initial_state
            )));
        }

        Ok(())
    }

    /// Loads and validates a configuration from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, TuringMachineError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TuringMachineError::ConfigError(format!(
                "Failed to read file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            TuringMachineError::ConfigError(format!(
                "Failed to parse configuration {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), TuringMachineError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            TuringMachineError::ConfigError(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(path, json).map_err(|e| {
            TuringMachineError::ConfigError(format!(
                "Failed to write file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
