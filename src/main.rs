//! grid-robot: feeds command lines to a simulated robot.
//!
//! Reads one command per line from a file or standard input. `REPORT` lines go to
//! standard output; logs go to standard error.

use anyhow::{Context, Result};
use clap::Parser;
use grid_robot::{Robot, RobotConfig, RobotInterpreter, RobotState};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid-robot", version, about = "Drive a robot on a square grid")]
struct Cli {
    /// File of commands, one per line. Reads standard input when omitted.
    input: Option<PathBuf>,

    /// Side length of the square grid.
    #[arg(long, default_value_t = RobotConfig::default().side_length,
          value_parser = clap::value_parser!(i32).range(1..))]
    side_length: i32,

    /// Print each command's result code (OK, DENIED, ERROR) after it runs.
    #[arg(long)]
    print_results: bool,

    /// Print the final robot state as JSON once input is exhausted.
    #[arg(long)]
    dump_state: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    })
}

/// Executes every line of `reader`. Result codes, when requested, share the robot's
/// report sink so they interleave with `REPORT` lines in command order.
fn run<W: Write>(
    reader: impl BufRead,
    robot: &mut RobotInterpreter<W>,
    print_results: bool,
) -> Result<()> {
    for line in reader.lines() {
        let line = line.context("reading command")?;
        let result = robot.execute(&line);
        if print_results {
            writeln!(robot.sink_mut(), "{result}")?;
        }
    }
    robot.sink_mut().flush()?;
    Ok(())
}

fn dump_state(state: &RobotState, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, state)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "grid_robot=debug"
    } else {
        "grid_robot=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let reader = open_input(cli.input.as_deref())?;

    let config = RobotConfig::default().with_side_length(cli.side_length);
    info!(side_length = config.side_length, "robot ready");
    let mut robot = RobotInterpreter::new(config);

    run(reader, &mut robot, cli.print_results)?;

    if cli.dump_state {
        dump_state(robot.state(), &mut io::stdout().lock())?;
    }

    Ok(())
}
