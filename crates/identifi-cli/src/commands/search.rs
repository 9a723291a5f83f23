//! `identifi search`: Search a file of identity records and render the
//! result list.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use identifi_core::IdentifiConfig;
use identifi_identity::MemoryIndex;
use identifi_render::{styles, CardRenderer, SearchWidget};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// JSON file holding an array of identity records.
    pub records: PathBuf,

    /// Search text.
    #[arg(default_value = "")]
    pub query: String,

    /// Leave out the stylesheet.
    #[arg(long)]
    pub no_style: bool,
}

pub async fn run(args: &SearchArgs, config: &IdentifiConfig) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.records)
        .with_context(|| format!("reading {}", args.records.display()))?;

    let index = MemoryIndex::with_classifier(Arc::new(config.unique_types()));
    let count = index
        .load_json(&text)
        .with_context(|| format!("parsing identity records {}", args.records.display()))?;
    tracing::info!(count, query = %args.query, "searching");

    let widget = SearchWidget::new(Arc::new(index), CardRenderer::new(&config.render));
    widget.on_keyup(&args.query).await?;

    if !args.no_style {
        if let Some(style) = styles::setup() {
            println!("{}", style);
        }
    }
    println!("{}", widget.mount());
    Ok(())
}
