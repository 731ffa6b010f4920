//! tfx: scaffolding helper for Teams apps built from AI plugin descriptors
//!
//! The binary wires the manifest and version crates to a small command-line
//! surface: rewrite an app manifest from a plugin descriptor, validate the
//! records against the store rules, and compare extension versions.

mod cli;
mod error;

pub use error::{Result, TfxError};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbosity());
    cli.execute()
}

fn init_logging(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}
