//! `tfx compare` - order two extension version strings

use crate::Result;
use clap::Args;
use std::cmp::Ordering;

#[derive(Args)]
pub struct CompareArgs {
    /// Left-hand version (e.g. 5.2.1 or 5.3.0-alpha)
    left: String,

    /// Right-hand version
    right: String,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let ordering = tfx_version::compare(&args.left, &args.right)?;
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", args.left, symbol, args.right);
    Ok(())
}
