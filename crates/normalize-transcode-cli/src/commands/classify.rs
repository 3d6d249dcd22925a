//! Classify command - show how each source line is classified.
//!
//! Prints one JSON object per line, for debugging rule priority.

use clap::Args;
use normalize_transcode::{classify_with_rule, source_lines};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Python source file (stdin if omitted or "-")
    pub input: Option<PathBuf>,
}

pub fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    let source = super::read_source(args.input.as_deref())?;

    for (idx, raw) in source_lines(&source).enumerate() {
        let record = match classify_with_rule(raw) {
            Ok((rule, statement)) => json!({
                "line": idx + 1,
                "rule": rule,
                "statement": statement,
            }),
            Err(err) => json!({
                "line": idx + 1,
                "error": err.to_string(),
            }),
        };
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
