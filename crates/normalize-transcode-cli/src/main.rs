//! `transcode` - convert Python snippets to JavaScript, Java, or C++.

mod commands;
mod config;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "transcode", version, about = "Line-by-line Python to brace-language converter")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Project root for .normalize/transcode.toml lookup
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert Python source into one or more targets
    Convert(commands::convert::ConvertArgs),
    /// List supported target languages
    Targets(commands::targets::TargetsArgs),
    /// Print the classification of every source line as JSON
    Classify(commands::classify::ClassifyArgs),
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function; this only changes the
    // disposition of SIGPIPE back to terminate-on-broken-pipe.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Convert(args) => {
            let config = config::TranscodeConfig::load(&cli.root);
            commands::convert::run(args, &config)
        }
        Command::Targets(args) => commands::targets::run(args).map(|()| true),
        Command::Classify(args) => commands::classify::run(args).map(|()| true),
    }
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
