//! `identifi identicon`: Render a trust identicon.

use clap::Args;
use std::path::PathBuf;

use identifi_core::IdentifiConfig;
use identifi_render::{identicon, styles, IdenticonOptions};

#[derive(Args, Debug)]
pub struct IdenticonArgs {
    /// JSON file holding one identity record.
    pub record: PathBuf,

    /// Width in pixels.
    #[arg(short, long, default_value_t = 60)]
    pub size: u32,

    /// Aura width in pixels (defaults to the configured border).
    #[arg(short, long)]
    pub border: Option<u32>,

    /// Hide the trust distance ordinal.
    #[arg(long)]
    pub no_distance: bool,

    /// Leave out the stylesheet.
    #[arg(long)]
    pub no_style: bool,
}

pub fn run(args: &IdenticonArgs, config: &IdentifiConfig) -> anyhow::Result<()> {
    if args.size == 0 {
        anyhow::bail!("--size must be positive");
    }
    let identity = super::load_identity(&args.record, config)?;
    let options = IdenticonOptions {
        size: args.size,
        border: args.border.unwrap_or(config.render.default_border),
        show_distance: !args.no_distance,
    };
    if !args.no_style {
        if let Some(style) = styles::setup() {
            println!("{}", style);
        }
    }
    println!("{}", identicon(&identity, &options)?);
    Ok(())
}
