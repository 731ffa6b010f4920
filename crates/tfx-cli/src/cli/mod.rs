mod compare;
mod update;
mod validate;

use crate::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tfx")]
#[command(about = "Teams app scaffolding from AI plugin descriptors", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress informational output
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite an app manifest from a plugin descriptor
    Update(update::UpdateArgs),

    /// Check a descriptor or app manifest against the store rules
    Validate(validate::ValidateArgs),

    /// Compare two extension version strings
    Compare(compare::CompareArgs),
}

impl Cli {
    pub(crate) fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn execute(self) -> Result<()> {
        let quiet = self.quiet;

        match self.command {
            Commands::Update(args) => update::execute(args, quiet),
            Commands::Validate(args) => validate::execute(args, quiet),
            Commands::Compare(args) => compare::execute(args),
        }
    }
}
