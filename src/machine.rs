//! This module defines the `TuringMachine` struct, which simulates a single-tape, single-head
//! deterministic Turing Machine. It owns the tape, the transition table and the state and head
//! registers, and executes the step relation until the terminal state is reached.

use crate::config::MachineConfig;
use crate::rules::TransitionTable;
use crate::tape::Tape;
use crate::types::{Action, State, Step, Symbol, TuringMachineError};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Represents a single-tape Turing Machine.
///
/// The machine is built once with an alphabet; rules may be registered any number of times
/// before a run, and `execute` may be called repeatedly.
pub struct TuringMachine {
    alphabet: BTreeSet<Symbol>,
    config: MachineConfig,
    rules: TransitionTable,
    tape: Tape,
    state: State,
    head: i64,
    step_count: usize,
}

impl TuringMachine {
    /// Creates a new `TuringMachine` over `alphabet` with the default configuration.
    ///
    /// The blank symbol is added to the alphabet if it is missing.
    pub fn new<I>(alphabet: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        Self::build(alphabet, MachineConfig::default())
    }

    /// Creates a new `TuringMachine` over `alphabet` using `config` for its registers.
    ///
    /// # Returns
    ///
    /// * `Ok(TuringMachine)` if the configuration is valid.
    /// * `Err(TuringMachineError::ValidationError)` otherwise.
    pub fn with_config<I>(alphabet: I, config: MachineConfig) -> Result<Self, TuringMachineError>
    where
        I: IntoIterator<Item = Symbol>,
    {
        config.validate()?;
        Ok(Self::build(alphabet, config))
    }

    fn build<I>(alphabet: I, config: MachineConfig) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut alphabet: BTreeSet<Symbol> = alphabet.into_iter().collect();
        alphabet.insert(config.blank);

        Self {
            alphabet,
            rules: TransitionTable::new(),
            tape: Tape::new(config.blank),
            state: config.initial_state.clone(),
            head: 0,
            step_count: 0,
            config,
        }
    }

    /// Registers the rules for `state`, replacing any rules previously registered for it.
    pub fn add_transition_rule<I>(&mut self, state: impl Into<State>, rules: I)
    where
        I: IntoIterator<Item = (Symbol, Action)>,
    {
        self.rules.register(state, rules);
    }

    /// Registers every state of `table`, each replacing a same-named state wholesale.
    pub fn install(&mut self, table: &TransitionTable) {
        self.rules.merge(table);
    }

    /// Writes `input` onto the tape starting at position 0, one symbol per cell.
    ///
    /// Existing cells beyond the input are kept; neither the state nor the head moves.
    pub fn load_tape(&mut self, input: &str) {
        self.tape.load(input);
    }

    /// Executes a single step of the machine's computation.
    ///
    /// Reads the symbol under the head, looks up the rule for the current state, writes,
    /// moves the head and switches state. No rule is looked up once the terminal state is
    /// reached.
    ///
    /// # Returns
    ///
    /// * `Ok(Step::Continue)` if a transition was applied.
    /// * `Ok(Step::Halt)` if the machine is already in the terminal state.
    /// * `Err(TuringMachineError)` if the symbol is outside the alphabet or no rule applies.
    pub fn step(&mut self) -> Result<Step, TuringMachineError> {
        if self.is_halted() {
            return Ok(Step::Halt);
        }

        let symbol = self.tape.read(self.head);
        if !self.alphabet.contains(&symbol) {
            return Err(TuringMachineError::SymbolNotInAlphabet {
                symbol,
                position: self.head,
            });
        }

        let action = self.rules.lookup(&self.state, symbol)?.clone();
        trace!(
            step = self.step_count,
            state = %self.state,
            head = self.head,
            read = %symbol,
            action = %action,
            "applying transition"
        );

        // The write is unconditional, even when it matches the symbol read.
        self.tape.write(self.head, action.write);
        self.head += action.direction.offset();
        self.state = action.next_state;
        self.step_count += 1;

        Ok(Step::Continue)
    }

    /// Loads `input` onto the tape and steps until the terminal state is reached.
    ///
    /// There is no step bound: a rule set that never reaches the terminal state never
    /// returns. When `reset_on_execute` is set (the default), the state, head and step count
    /// are restored first. The tape is overwritten, not cleared.
    ///
    /// Writing the blank symbol erases a cell, so blanks at either end of the input (as in
    /// `"_1"`) are not part of the rendered output.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` with the occupied span of the tape after halting.
    /// * `Err(TuringMachineError)` from the first failing step.
    pub fn execute(&mut self, input: &str) -> Result<String, TuringMachineError> {
        self.start(input);

        while !self.is_halted() {
            self.step()?;
        }

        let output = self.tape.render_string();
        debug!(steps = self.step_count, output = %output, "machine halted");
        Ok(output)
    }

    /// Prepares a run of `input` without stepping: restores the registers when
    /// `reset_on_execute` is set, then loads the input onto the tape.
    ///
    /// Callers that want to observe every step use this followed by `step`.
    pub fn start(&mut self, input: &str) {
        if self.config.reset_on_execute {
            self.reset_registers();
        }

        self.load_tape(input);
        debug!(input, state = %self.state, head = self.head, "starting run");
    }

    /// Steps at most `max_steps` times without loading any input.
    ///
    /// Returns `Step::Halt` if the terminal state was reached, `Step::Continue` otherwise.
    pub fn run_for(&mut self, max_steps: usize) -> Result<Step, TuringMachineError> {
        for _ in 0..max_steps {
            if self.step()? == Step::Halt {
                return Ok(Step::Halt);
            }
        }

        Ok(if self.is_halted() {
            Step::Halt
        } else {
            Step::Continue
        })
    }

    /// Resets the machine to its initial configuration.
    /// This includes resetting the state, head position and step count, and clearing the tape.
    pub fn reset(&mut self) {
        self.reset_registers();
        self.tape.clear();
    }

    fn reset_registers(&mut self) {
        self.state = self.config.initial_state.clone();
        self.head = 0;
        self.step_count = 0;
    }

    /// Checks if the machine is in the terminal state.
    pub fn is_halted(&self) -> bool {
        self.state == self.config.terminal_state
    }

    /// Returns the current state of the machine.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Returns the current head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn rules(&self) -> &TransitionTable {
        &self.rules
    }

    /// Returns the alphabet, blank symbol included.
    pub fn alphabet(&self) -> &BTreeSet<Symbol> {
        &self.alphabet
    }

    pub fn blank(&self) -> Symbol {
        self.config.blank
    }

    pub fn initial_state(&self) -> &State {
        &self.config.initial_state
    }

    pub fn terminal_state(&self) -> &State {
        &self.config.terminal_state
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Returns the number of steps executed since the last reset.
    pub fn step_count(&self) -> usize {
        self.step_count
    }
}
