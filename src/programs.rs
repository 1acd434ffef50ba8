//! This module provides the canned rule sets that ship with the engine: binary increment and
//! bitwise inversion. Each one is plain data registered into a machine's transition table.

use crate::config::MachineConfig;
use crate::machine::TuringMachine;
use crate::rules::{rule, TransitionTable};
use crate::types::{Direction, State, TuringMachineError};
use std::fmt;
use std::str::FromStr;

/// A built-in rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    /// Adds one to a binary numeral, least-significant digit rightmost.
    Increment,
    /// Flips every `0` and `1` up to the first blank.
    Invert,
}

impl Program {
    /// Every built-in program, in listing order.
    pub fn all() -> &'static [Program] {
        &[Program::Increment, Program::Invert]
    }

    pub fn name(self) -> &'static str {
        match self {
            Program::Increment => "increment",
            Program::Invert => "invert",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Program::Increment => "Add one to a binary number",
            Program::Invert => "Flip every binary digit",
        }
    }

    /// Builds the program's rules for a machine configured with `config`.
    ///
    /// The program enters at the configured initial state, halts in the configured terminal
    /// state and reads the configured blank. Intermediate states take the first free names
    /// among `q1`, `q2`, `q3`, ..., skipping the configured initial and terminal states.
    pub fn rules(self, config: &MachineConfig) -> TransitionTable {
        match self {
            Program::Increment => increment_rules(config),
            Program::Invert => invert_rules(config),
        }
    }

    /// Registers the program's rules into `machine`.
    pub fn install(self, machine: &mut TuringMachine) {
        let rules = self.rules(machine.config());
        machine.install(&rules);
    }
}

impl FromStr for Program {
    type Err = TuringMachineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::all()
            .iter()
            .copied()
            .find(|program| program.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TuringMachineError::UnknownProgram(s.to_string()))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registers the binary increment rules into `machine`.
pub fn increment(machine: &mut TuringMachine) {
    Program::Increment.install(machine);
}

/// Registers the bitwise inversion rules into `machine`.
pub fn invert(machine: &mut TuringMachine) {
    Program::Invert.install(machine);
}

/// Returns `count` state names of the form `qN` (N from 1) that differ from both the
/// configured initial and terminal states.
fn intermediate_states(config: &MachineConfig, count: usize) -> Vec<State> {
    (1..)
        .map(|n| State::new(format!("q{n}")))
        .filter(|state| *state != config.initial_state && *state != config.terminal_state)
        .take(count)
        .collect()
}

/// The entry state scans right to the end of the numeral, the carry state propagates the
/// carry leftward and the return state walks back to the leftmost digit.
fn increment_rules(config: &MachineConfig) -> TransitionTable {
    let blank = config.blank;
    let halt = &config.terminal_state;
    let states = intermediate_states(config, 2);
    let (carry, back) = (&states[0], &states[1]);
    let mut table = TransitionTable::new();

    table.register(
        &config.initial_state,
        [
            rule('0', '0', Direction::Right, &config.initial_state),
            rule('1', '1', Direction::Right, &config.initial_state),
            rule(blank, blank, Direction::Left, carry),
        ],
    );
    table.register(
        carry,
        [
            rule('0', '1', Direction::Stay, back),
            rule('1', '0', Direction::Left, carry),
            rule(blank, '1', Direction::Stay, halt),
        ],
    );
    table.register(
        back,
        [
            rule('0', '0', Direction::Left, back),
            rule('1', '1', Direction::Left, back),
            rule(blank, blank, Direction::Right, halt),
        ],
    );

    table
}

fn invert_rules(config: &MachineConfig) -> TransitionTable {
    let blank = config.blank;
    let start = &config.initial_state;
    let mut table = TransitionTable::new();

    table.register(
        start,
        [
            rule('0', '1', Direction::Right, start),
            rule('1', '0', Direction::Right, start),
            rule(blank, blank, Direction::Stay, &config.terminal_state),
        ],
    );

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_names() {
        let names: Vec<&str> = Program::all().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["increment", "invert"]);
    }

    #[test]
    fn test_program_from_str() {
        assert_eq!("increment".parse::<Program>().unwrap(), Program::Increment);
        assert_eq!("Invert".parse::<Program>().unwrap(), Program::Invert);

        let result = "decrement".parse::<Program>();
        assert_eq!(
            result,
            Err(TuringMachineError::UnknownProgram("decrement".to_string()))
        );
    }

    #[test]
    fn test_increment_rule_shape() {
        let table = Program::Increment.rules(&MachineConfig::default());

        assert_eq!(table.state_count(), 3);
        assert_eq!(table.transition_count(), 9);

        let action = table.lookup(&State::from("q1"), '_').unwrap();
        assert_eq!(action.write, '1');
        assert_eq!(action.next_state, "!");
    }

    #[test]
    fn test_invert_rule_shape() {
        let table = Program::Invert.rules(&MachineConfig::default());

        assert_eq!(table.state_count(), 1);
        assert_eq!(table.transition_count(), 3);
    }

    #[test]
    fn test_rules_follow_machine_config() {
        let config = MachineConfig::new()
            .with_initial_state("start")
            .with_terminal_state("halt")
            .with_blank('.');
        let table = Program::Invert.rules(&config);

        let start = State::from("start");
        assert!(table.lookup(&start, '_').is_err());
        let action = table.lookup(&start, '.').unwrap();
        assert_eq!(action.next_state, "halt");
    }

    #[test]
    fn test_increment_with_initial_state_named_like_intermediate() {
        let config = MachineConfig::new().with_initial_state("q2");
        let mut machine = TuringMachine::with_config(['0', '1'], config).unwrap();
        increment(&mut machine);

        assert_eq!(machine.rules().state_count(), 3);
        assert!(machine.rules().contains_state(&State::from("q3")));
        assert_eq!(machine.execute("11"), Ok("100".to_string()));
    }

    #[test]
    fn test_increment_with_terminal_state_named_like_intermediate() {
        let config = MachineConfig::new().with_terminal_state("q1");
        let mut machine = TuringMachine::with_config(['0', '1'], config).unwrap();
        increment(&mut machine);

        assert!(!machine.rules().contains_state(&State::from("q1")));
        assert_eq!(machine.execute("11"), Ok("100".to_string()));
        assert_eq!(machine.state(), "q1");
    }

    #[test]
    fn test_intermediate_states_skip_configured_names() {
        let config = MachineConfig::new()
            .with_initial_state("q1")
            .with_terminal_state("q3");
        let states = intermediate_states(&config, 2);

        assert_eq!(states, vec![State::from("q2"), State::from("q4")]);
    }

    #[test]
    fn test_installing_replaces_shared_states() {
        let mut machine = TuringMachine::new(['0', '1']);
        increment(&mut machine);
        invert(&mut machine);

        // invert only defines q0, which replaces increment's q0; q1 and q2 remain.
        assert_eq!(machine.rules().state_count(), 3);
        assert_eq!(machine.execute("10").unwrap(), "01");
    }
}
