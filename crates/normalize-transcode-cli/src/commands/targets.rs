//! Targets command - list registered target languages.

use clap::Args;
use normalize_transcode::{SyntaxProfile, emitters};

#[derive(Args, Debug)]
pub struct TargetsArgs {
    /// Print full syntax profiles as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TargetsArgs) -> anyhow::Result<()> {
    let profiles: Vec<&SyntaxProfile> = emitters().iter().map(|e| e.profile()).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    for profile in profiles {
        let aliases = if profile.aliases.is_empty() {
            String::new()
        } else {
            format!(" (also: {})", profile.aliases.join(", "))
        };
        println!(
            "{:<12} {:<12} .{}{}",
            profile.id, profile.name, profile.extension, aliases
        );
    }
    Ok(())
}
