//! `identifi inspect`: Print the normalized state of an identity record.

use clap::Args;
use std::path::PathBuf;

use identifi_core::IdentifiConfig;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// JSON file holding one identity record.
    pub record: PathBuf,
}

pub fn run(args: &InspectArgs, config: &IdentifiConfig) -> anyhow::Result<()> {
    let identity = super::load_identity(&args.record, config)?;
    println!("{}", serde_json::to_string_pretty(&identity.summary())?);
    Ok(())
}
