//! The code generator main() implementation

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use crate::config::{CodegenConfig, ItemResolutionStrategy};
use crate::pipeline::{generate, GeneratedTables};
use crate::prelude::*;
use crate::sources::DataSources;

#[derive(Parser, Debug)]
#[command(name = "rg_codegen", about = "Regen registry table generator")]
struct CliOptions {
    /// Directory holding the JSON data sources
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// How the item list is assembled from the legacy item tables
    #[arg(short, long, value_enum, default_value_t = ItemResolutionStrategy::default())]
    item_strategy: ItemResolutionStrategy,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl CliOptions {
    fn into_config(self) -> CodegenConfig {
        CodegenConfig {
            data_dir: self.data_dir,
            item_strategy: self.item_strategy,
            ..Default::default()
        }
    }
}

/// Parses the command line, then loads, resolves and summarizes every table.
pub fn run_codegen() -> Result<()> {
    let cli = CliOptions::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Installing the log subscriber")?;

    let config = cli.into_config();
    info!("Loading data sources from {}", config.data_dir.display());
    let sources = DataSources::load(&config.data_dir);
    let tables = generate(&sources, &config)?;
    log_summary(&tables);
    Ok(())
}

fn log_summary(tables: &GeneratedTables) {
    info!(
        items = tables.items.len(),
        blocks = tables.blocks.len(),
        item_namespace_ids = tables.item_namespace_ids.len(),
        block_types = tables.registries.block_types().len(),
        item_types = tables.registries.item_types().len(),
        block_tags = tables.block_tags.len(),
        item_tags = tables.item_tags.len(),
        sounds = tables.sounds.len(),
        "Generation finished"
    );
    for tag in tables.block_tags.iter_sorted() {
        debug!("{tag}: {} resolved", tag.types().len());
    }
    for tag in tables.item_tags.iter_sorted() {
        debug!("{tag}: {} resolved", tag.types().len());
    }
}
