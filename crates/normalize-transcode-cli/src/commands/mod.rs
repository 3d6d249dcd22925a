//! Subcommands.

pub mod classify;
pub mod convert;
pub mod targets;

use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Read source text from a file, or from stdin when the path is absent or `-`.
pub fn read_source(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok(source)
        }
    }
}
