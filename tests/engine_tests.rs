//! End-to-end runs of the engine with the built-in programs and hand-built rule sets.

use tur_engine::{
    increment, invert, rule, Direction, MachineConfig, Program, State, Step, TuringMachine,
    TuringMachineError,
};

fn binary_machine() -> TuringMachine {
    TuringMachine::new(['0', '1', '_'])
}

#[test]
fn test_increment_carries_into_new_digit() {
    let mut machine = binary_machine();
    increment(&mut machine);

    assert_eq!(machine.execute("111").unwrap(), "1000");
    assert!(machine.is_halted());
}

#[test]
fn test_increment_single_zero() {
    let mut machine = binary_machine();
    increment(&mut machine);

    assert_eq!(machine.execute("0").unwrap(), "1");
}

#[test]
fn test_increment_without_carry_out() {
    let mut machine = binary_machine();
    increment(&mut machine);

    assert_eq!(machine.execute("1011").unwrap(), "1100");
}

#[test]
fn test_increment_counts_upwards() {
    let mut machine = binary_machine();
    increment(&mut machine);

    for n in 0u32..40 {
        let input = format!("{:b}", n);
        let expected = format!("{:b}", n + 1);

        machine.reset();
        assert_eq!(machine.execute(&input).unwrap(), expected, "incrementing {}", n);
    }
}

#[test]
fn test_invert_flips_every_digit() {
    let mut machine = binary_machine();
    invert(&mut machine);

    assert_eq!(machine.execute("1101010110").unwrap(), "0010101001");
}

#[test]
fn test_invert_empty_input() {
    let mut machine = binary_machine();
    invert(&mut machine);

    assert_eq!(machine.execute("").unwrap(), "");
    assert_eq!(machine.step_count(), 1);
}

#[test]
fn test_symbol_outside_alphabet_fails_first_step() {
    let mut machine = binary_machine();
    increment(&mut machine);

    let result = machine.execute("2");
    assert_eq!(
        result,
        Err(TuringMachineError::SymbolNotInAlphabet {
            symbol: '2',
            position: 0
        })
    );
    assert_eq!(machine.step_count(), 0);
    assert_eq!(machine.state(), "q0");
}

#[test]
fn test_symbol_outside_alphabet_found_mid_run() {
    let mut machine = binary_machine();
    invert(&mut machine);

    let result = machine.execute("10x1");
    assert_eq!(
        result,
        Err(TuringMachineError::SymbolNotInAlphabet {
            symbol: 'x',
            position: 2
        })
    );
    assert_eq!(machine.step_count(), 2);
}

#[test]
fn test_terminal_state_halts_without_rules() {
    let mut machine = binary_machine();
    machine.add_transition_rule("q0", [rule('1', '0', Direction::Stay, "!")]);

    assert_eq!(machine.execute("1").unwrap(), "0");
    assert!(machine.rules().get(&State::from("!")).is_none());
    assert_eq!(machine.step(), Ok(Step::Halt));
}

#[test]
fn test_second_registration_discards_first() {
    let mut machine = binary_machine();
    machine.add_transition_rule(
        "q0",
        [
            rule('0', '1', Direction::Right, "q0"),
            rule('_', '_', Direction::Stay, "!"),
        ],
    );
    machine.add_transition_rule("q0", [rule('_', '1', Direction::Stay, "!")]);

    let result = machine.execute("0");
    assert_eq!(
        result,
        Err(TuringMachineError::UndefinedTransition {
            state: State::from("q0"),
            symbol: '0'
        })
    );
}

#[test]
fn test_missing_state_reported_separately() {
    let mut machine = binary_machine();
    machine.add_transition_rule("q0", [rule('0', '0', Direction::Right, "scan")]);

    let result = machine.execute("0");
    assert_eq!(
        result,
        Err(TuringMachineError::UndefinedState(State::from("scan")))
    );
}

#[test]
fn test_repeated_runs_reset_state() {
    let mut machine = binary_machine();
    invert(&mut machine);

    assert_eq!(machine.execute("1").unwrap(), "0");
    assert_eq!(machine.state(), "!");

    // Without a reset the second run would return at once from the terminal state.
    assert_eq!(machine.execute("10").unwrap(), "01");
}

#[test]
fn test_programs_with_custom_config() {
    let config = MachineConfig::new()
        .with_initial_state("start")
        .with_terminal_state("done")
        .with_blank('.');
    let mut machine = TuringMachine::with_config(['0', '1'], config).unwrap();
    Program::Increment.install(&mut machine);

    assert_eq!(machine.execute("0111").unwrap(), "1000");
    assert_eq!(machine.state(), "done");
}
