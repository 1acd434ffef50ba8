use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tur_engine::{MachineConfig, Program, Step, TuringMachine, TuringMachineError};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
  tur-engine --program increment --input 111
  echo 1101010110 | tur-engine --program invert")]
struct Cli {
    /// The built-in program to run (see --list)
    #[arg(short, long, default_value = "increment")]
    program: Program,

    /// The input to the Turing machine; repeat to run several inputs on the same machine.
    /// Read from stdin, one input per line, when omitted
    #[arg(short, long)]
    input: Vec<String>,

    /// The symbols the machine may read and write (the blank is always included)
    #[arg(short, long, default_value = "01")]
    alphabet: String,

    /// JSON file with the machine configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the blank symbol
    #[arg(long)]
    blank: Option<char>,

    /// Override the initial state
    #[arg(long)]
    initial_state: Option<String>,

    /// Override the terminal state
    #[arg(long)]
    terminal_state: Option<String>,

    /// Print each step of the execution
    #[arg(short = 'd', long)]
    debug: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// List the built-in programs and exit
    #[arg(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list {
        for program in Program::all() {
            println!("{:<12}{}", program.name(), program.description());
        }
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), TuringMachineError> {
    let config = load_config(cli)?;
    let mut machine = TuringMachine::with_config(cli.alphabet.chars(), config)?;
    cli.program.install(&mut machine);
    debug!(program = %cli.program, "installed program");

    for input in read_inputs(cli)? {
        let output = if cli.debug {
            run_verbose(&mut machine, &input)?
        } else {
            machine.execute(&input)?
        };

        println!("{}", output);
    }

    Ok(())
}

/// Builds the configuration from the optional file, then applies command-line overrides.
fn load_config(cli: &Cli) -> Result<MachineConfig, TuringMachineError> {
    let mut config = match &cli.config {
        Some(path) => MachineConfig::load_from_file(path)?,
        None => MachineConfig::default(),
    };

    if let Some(blank) = cli.blank {
        config.blank = blank;
    }
    if let Some(state) = &cli.initial_state {
        config.initial_state = state.as_str().into();
    }
    if let Some(state) = &cli.terminal_state {
        config.terminal_state = state.as_str().into();
    }

    Ok(config)
}

fn read_inputs(cli: &Cli) -> Result<Vec<String>, TuringMachineError> {
    if !cli.input.is_empty() {
        return Ok(cli.input.clone());
    }

    if atty::is(atty::Stream::Stdin) {
        return Err(TuringMachineError::ValidationError(
            "No input provided: pass --input or pipe input via stdin".to_string(),
        ));
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|e| {
        TuringMachineError::ValidationError(format!("Failed to read from stdin: {}", e))
    })?;

    Ok(buffer
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Runs `input` one step at a time, printing the machine after every step.
fn run_verbose(machine: &mut TuringMachine, input: &str) -> Result<String, TuringMachineError> {
    machine.start(input);
    print_state(machine);

    loop {
        match machine.step()? {
            Step::Continue => print_state(machine),
            Step::Halt => break,
        }
    }

    println!("\nMachine halted.");
    Ok(machine.tape().render_string())
}

fn print_state(machine: &TuringMachine) {
    println!(
        "Step: {}, State: {}, Head: {}, Tape: [{}]",
        machine.step_count(),
        machine.state(),
        machine.head(),
        machine.tape()
    );
}
