//! `identifi card`: Render a profile card.

use clap::Args;
use std::path::PathBuf;

use identifi_core::IdentifiConfig;
use identifi_render::{styles, CardRenderer};

#[derive(Args, Debug)]
pub struct CardArgs {
    /// JSON file holding one identity record.
    pub record: PathBuf,

    /// Leave out the stylesheet.
    #[arg(long)]
    pub no_style: bool,
}

pub fn run(args: &CardArgs, config: &IdentifiConfig) -> anyhow::Result<()> {
    let identity = super::load_identity(&args.record, config)?;
    if !args.no_style {
        if let Some(style) = styles::setup() {
            println!("{}", style);
        }
    }
    println!("{}", CardRenderer::new(&config.render).render(&identity)?);
    Ok(())
}
