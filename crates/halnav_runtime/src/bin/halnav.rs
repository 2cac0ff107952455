//! HAL navigator CLI entry point.

use halnav_runtime::{Repl, RuntimeConfig};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    dump_map: bool,
    runtime: RuntimeConfig,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

/// Returns the value following option `name`.
fn value<'a>(args: &'a [String], i: &mut usize, name: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{name} requires a value"))
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--no-color" => config.runtime.color = false,
            "--trace" => config.runtime.trace = true,
            "--trace-json" => {
                config.runtime.trace = true;
                config.runtime.trace_json = true;
            }
            "--trace-events" => {
                let list = value(args, &mut i, "--trace-events")?;
                config.runtime = config.runtime.with_trace_events(list)?;
            }
            "--trace-summary" => config.runtime.trace_summary = true,
            "--dump-map" => config.dump_map = true,
            "-t" | "--topology" => {
                let path = value(args, &mut i, "--topology")?;
                config.runtime.topology = Some(PathBuf::from(path));
            }
            "-s" | "--seed" => {
                let raw = value(args, &mut i, "--seed")?;
                config.runtime.seed = raw
                    .parse()
                    .map_err(|_| format!("invalid --seed value: {raw}"))?;
            }
            "--width" => {
                let raw = value(args, &mut i, "--width")?;
                config.runtime.width = raw
                    .parse()
                    .map_err(|_| format!("invalid --width value: {raw}"))?;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.scripts.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("halnav {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Scripts set the scene, so the banner would only interrupt them
    let runtime = config
        .runtime
        .clone()
        .with_banner(config.scripts.is_empty());
    let mut repl = Repl::from_config(&runtime).map_err(describe)?;

    if config.dump_map {
        print!("{}", repl.session().dump_map());
        println!();
    }

    repl.run_with_scripts(&config.scripts, !config.batch_mode).map_err(describe)?;

    if runtime.trace_summary {
        eprintln!("{}", repl.session().tracer().summary());
    }
    Ok(())
}

/// Appends the file and line an error came from, when known.
fn describe(e: halnav_foundation::Error) -> Box<dyn std::error::Error> {
    match &e.context {
        Some(context) => format!("{e} ({context})").into(),
        None => e.into(),
    }
}

fn print_help() {
    println!(
        "\x1b[1mhalnav\x1b[0m - Chat with HAL9000 and move around the ship

\x1b[1mUSAGE:\x1b[0m
    halnav [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Files of input lines to run before the prompt

\x1b[1mOPTIONS:\x1b[0m
    -h, --help              Print help information
    -V, --version           Print version information
    -t, --topology FILE     Load the map from a JSON topology file
    -s, --seed N            Chatbot seed (default 0)
    -b, --batch             Run scripts and exit (no prompt)
        --no-color          Disable ANSI colors
        --width N           Terminal width used for alignment (default 80)

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace                 Print trace events to stderr
    --trace-json            Print trace events as JSON lines
    --trace-events LIST     Record only these events (comma-separated,
                            e.g. relocated,door-changed)
    --trace-summary         Print event counts when the session ends
    --dump-map              Print rooms, doors and door states after loading

\x1b[1mEXAMPLES:\x1b[0m
    halnav                          Start chatting
    halnav -t ship.json             Use another ship layout
    halnav -b tour.hal              Run tour.hal and exit
    halnav --trace-json -b tour.hal Run with JSON trace output

\x1b[1mCOMMANDS:\x1b[0m
    /where [room|door]      Where you are, or where something leads
    /transitions            Every room you can reach from here
    /goto <room>            Move through an open door
    /open <door>            Open a door here
    /close <door>           Close a door here
    /help                   List commands
    /quit                   End the chat
    Ctrl+D                  End the chat
    Ctrl+C                  Cancel current input

Anything not starting with / is said to HAL."
    );
}
