//! `tfx update` - rewrite an app manifest from a plugin descriptor

use crate::{Result, TfxError};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tfx_manifest::{
    apply_descriptor, validate_descriptor, validate_lengths, AppManifest, PluginDescriptor,
};
use tracing::debug;

#[derive(Args)]
pub struct UpdateArgs {
    /// Path to the plugin descriptor JSON (ai-plugin.json)
    descriptor: PathBuf,

    /// Path to the app manifest to rewrite in place
    manifest: PathBuf,

    /// Treat length violations as errors instead of warnings
    #[arg(long)]
    strict: bool,
}

pub fn execute(args: UpdateArgs, quiet: bool) -> Result<()> {
    debug!(
        "Rewriting {:?} from descriptor {:?}",
        args.manifest, args.descriptor
    );
    let descriptor = PluginDescriptor::load_from_path(&args.descriptor)?;

    let descriptor_violations = validate_descriptor(&descriptor);
    if !descriptor_violations.is_empty() {
        for violation in &descriptor_violations {
            eprintln!("{} {}", "✗".red().bold(), violation);
        }
        return Err(TfxError::ValidationFailed(descriptor_violations.len()));
    }

    let mut manifest = AppManifest::load_from_path(&args.manifest)?;
    apply_descriptor(&descriptor, &mut manifest);

    let length_violations = validate_lengths(&manifest);
    for violation in &length_violations {
        eprintln!("{} {}", "warning:".yellow().bold(), violation);
    }
    if args.strict && !length_violations.is_empty() {
        return Err(TfxError::ValidationFailed(length_violations.len()));
    }

    manifest.save_to_path(&args.manifest)?;

    if !quiet {
        println!("{} Updated {}", "✔".green().bold(), args.manifest.display());
    }
    Ok(())
}
