//! Binary entrypoint for the `playkeys` tool.
use std::{
    fs,
    path::{Path, PathBuf},
    process,
    sync::Arc,
};

use clap::{Parser, Subcommand};
use config::{Options, resolve_options_path};
use logging::LogArgs;
use tracing::debug;

/// Scripted sessions against an in-memory player.
mod sim;

use crate::sim::{Focus, SimArgs};

#[derive(Parser, Debug)]
#[command(
    name = "playkeys",
    about = "Keyboard and wheel hotkeys for media players",
    version
)]
/// Command-line interface for the `playkeys` binary.
struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,

    /// Logging controls
    #[command(flatten)]
    log: LogArgs,

    /// Optional path to the options file
    #[arg(long, global = true, value_name = "PATH")]
    options: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Load and validate an options file then exit.
    Check {
        /// Options file to check (defaults to ~/.playkeys/options.ron)
        path: Option<PathBuf>,

        /// Dump the parsed overrides as JSON to stdout
        #[arg(long)]
        dump: bool,
    },
    /// Replay a scripted session and print player state after each step.
    Sim {
        /// Steps: a chord spec ("space", "shift+right", "7"), "doc:<chord>",
        /// "wheel:<delta>", "legacy:<detail>", "play", "active", "inactive",
        /// "hover" or "leave".
        #[arg(required = true)]
        steps: Vec<String>,

        /// Element holding focus when the session starts
        #[arg(long, value_enum, default_value_t = Focus::Root)]
        focus: Focus,

        /// Media duration in seconds
        #[arg(long, default_value_t = 100.0)]
        duration: f64,

        /// Starting position in seconds
        #[arg(long, default_value_t = 0.0)]
        time: f64,

        /// Starting volume
        #[arg(long, default_value_t = 1.0)]
        volume: f64,

        /// Start playing instead of paused
        #[arg(long)]
        playing: bool,

        /// Pretend the player autoplays
        #[arg(long)]
        autoplay: bool,
    },
}

/// Print an error and exit non-zero.
fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

/// Load options from `path`, or the defaults when there is none.
fn load_options(path: Option<&Path>) -> Options {
    match resolve_options_path(path) {
        Some(p) => match config::load_from_path(&p) {
            Ok(opts) => opts,
            Err(e) => fail(&e.pretty()),
        },
        None => {
            debug!("no options file, using defaults");
            Options::default()
        }
    }
}

/// `playkeys check`.
fn check(path: Option<&Path>, dump: bool) {
    let Some(resolved) = resolve_options_path(path) else {
        println!("OK (no options file, defaults apply)");
        return;
    };
    if let Err(e) = config::load_from_path(&resolved) {
        fail(&e.pretty());
    }
    if !dump {
        println!("OK");
        return;
    }
    let raw = fs::read_to_string(&resolved)
        .map_err(|e| e.to_string())
        .and_then(|src| config::parse_raw(&src).map_err(|e| e.pretty()));
    match raw.map(|r| serde_json::to_string_pretty(&r)) {
        Ok(Ok(json)) => println!("{json}"),
        Ok(Err(e)) => fail(&format!("Failed to serialize options: {e}")),
        Err(e) => fail(&e),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log);

    match cli.command {
        Command::Check { path, dump } => {
            let explicit = path.as_deref().or(cli.options.as_deref());
            check(explicit, dump);
        }
        Command::Sim {
            steps,
            focus,
            duration,
            time,
            volume,
            playing,
            autoplay,
        } => {
            let opts = Arc::new(load_options(cli.options.as_deref()));
            let args = SimArgs {
                focus,
                duration,
                time,
                volume,
                playing,
                autoplay,
            };
            if let Err(e) = sim::run(opts, &args, &steps).await {
                fail(&e.to_string());
            }
        }
    }
}
