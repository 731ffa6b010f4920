//! `tfx validate` - check records against the store rules

use crate::{Result, TfxError};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tfx_manifest::{validate_descriptor, validate_lengths, AppManifest, PluginDescriptor};
use tracing::debug;

#[derive(Args)]
#[command(group = clap::ArgGroup::new("records")
    .required(true)
    .multiple(true)
    .args(["descriptor", "manifest"]))]
pub struct ValidateArgs {
    /// Plugin descriptor JSON to check
    #[arg(long)]
    descriptor: Option<PathBuf>,

    /// App manifest JSON to check against the store length limits
    #[arg(long)]
    manifest: Option<PathBuf>,
}

pub fn execute(args: ValidateArgs, quiet: bool) -> Result<()> {
    let mut total = 0usize;

    if let Some(path) = &args.descriptor {
        debug!("Validating plugin descriptor {:?}", path);
        let descriptor = PluginDescriptor::load_from_path(path)?;
        for violation in validate_descriptor(&descriptor) {
            eprintln!("{} {}: {}", "✗".red().bold(), path.display(), violation);
            total += 1;
        }
    }

    if let Some(path) = &args.manifest {
        debug!("Validating app manifest {:?}", path);
        let manifest = AppManifest::load_from_path(path)?;
        for violation in validate_lengths(&manifest) {
            eprintln!("{} {}: {}", "✗".red().bold(), path.display(), violation);
            total += 1;
        }
    }

    if total > 0 {
        return Err(TfxError::ValidationFailed(total));
    }
    if !quiet {
        println!("{} No violations found", "✔".green().bold());
    }
    Ok(())
}
