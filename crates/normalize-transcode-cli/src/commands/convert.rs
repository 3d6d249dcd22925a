//! Convert command - transcode a Python snippet into one or more targets.

use crate::config::TranscodeConfig;
use anyhow::Context;
use clap::{Args, ValueEnum};
use normalize_transcode::{Conversion, ConvertOptions, Converter, MalformedPolicy, target_ids};
use std::path::{Path, PathBuf};

const RULE: &str = "------------------------";

/// Convert command arguments
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Python source file (stdin if omitted or "-")
    pub input: Option<PathBuf>,

    /// Target languages, comma-separated: javascript, java, cpp
    #[arg(short = 't', long = "to", value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Convert to every registered target
    #[arg(long, conflicts_with = "targets")]
    pub all: bool,

    /// What to do with a line whose call or definition is incomplete
    #[arg(long, value_enum)]
    pub on_malformed: Option<OnMalformed>,

    /// Report source lines that produced no output (on stderr)
    #[arg(long)]
    pub report: bool,

    /// Write one `<stem>.<ext>` file per target instead of printing
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OnMalformed {
    /// Fail the target with no output
    Abort,
    /// Drop the line and continue
    Skip,
}

impl From<OnMalformed> for MalformedPolicy {
    fn from(value: OnMalformed) -> Self {
        match value {
            OnMalformed::Abort => MalformedPolicy::Abort,
            OnMalformed::Skip => MalformedPolicy::Skip,
        }
    }
}

/// Run the convert command. Returns `false` if any target failed.
pub fn run(args: ConvertArgs, config: &TranscodeConfig) -> anyhow::Result<bool> {
    let source = super::read_source(args.input.as_deref())?;

    let targets: Vec<String> = if args.all {
        target_ids().into_iter().map(String::from).collect()
    } else if !args.targets.is_empty() {
        args.targets.clone()
    } else {
        config.targets()
    };

    let converter = Converter::new(ConvertOptions {
        malformed: args
            .on_malformed
            .map(MalformedPolicy::from)
            .unwrap_or_else(|| config.malformed()),
    });
    let report = args.report || config.report();
    let headers = targets.len() > 1 && args.out_dir.is_none();
    tracing::debug!(?targets, options = ?converter.options(), "converting");

    let mut ok = true;
    for target in &targets {
        let conversion = match converter.convert(&source, target) {
            Ok(conversion) => conversion,
            Err(err) => {
                eprintln!("Error converting to {}: {}", target, err);
                ok = false;
                continue;
            }
        };

        if report {
            print_report(&conversion);
        }

        match &args.out_dir {
            Some(dir) => {
                let path = write_output(dir, args.input.as_deref(), &conversion)?;
                println!("{}", path.display());
            }
            None if headers => {
                println!("\nConverted to {}:", target.to_uppercase());
                println!("{RULE}");
                println!("{}", conversion.text());
                println!("{RULE}");
            }
            None => println!("{}", conversion.text()),
        }
    }

    Ok(ok)
}

fn print_report(conversion: &Conversion) {
    for skipped in &conversion.skipped {
        eprintln!(
            "{}: line {} dropped ({}): {}",
            conversion.target, skipped.line, skipped.reason, skipped.text
        );
    }
}

fn write_output(
    dir: &Path,
    input: Option<&Path>,
    conversion: &Conversion,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let stem = input
        .filter(|p| *p != Path::new("-"))
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("converted");
    let extension = normalize_transcode::lookup(conversion.target)?.extension;
    let path = dir.join(format!("{stem}.{extension}"));

    let mut text = conversion.text();
    text.push('\n');
    std::fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
