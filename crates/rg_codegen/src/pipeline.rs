//! The full generation run: resolve every domain and populate the registries in dependency order.

use rg_registry::tags::{BlockTagRegistry, ItemTagRegistry, TagRegistry};
use rg_registry::types::TypeRegistries;
use tracing::info;

use crate::config::CodegenConfig;
use crate::prelude::*;
use crate::resolver::blocks::{resolve_blocks, ResolvedBlock};
use crate::resolver::items::{resolve_item_namespace_ids, resolve_items, ItemSources, ResolvedItem};
use crate::sounds::SoundSet;
use crate::sources::DataSources;

/// Everything a generation run produces.
#[derive(Debug)]
pub struct GeneratedTables {
    /// The sorted item list
    pub items: Vec<ResolvedItem>,
    /// The sorted block list
    pub blocks: Vec<ResolvedBlock>,
    /// Sorted identifiers of the palette entries that are not block item views
    pub item_namespace_ids: Vec<Identifier>,
    /// Block and item types, with every block shadowed by an item
    pub registries: TypeRegistries,
    /// Block tags resolved against the block registry
    pub block_tags: BlockTagRegistry,
    /// Item tags resolved against the item registry
    pub item_tags: ItemTagRegistry,
    /// Merged sound names
    pub sounds: SoundSet,
}

/// Runs every resolver over `sources`.
///
/// Items are registered before the blocks, so an item registered from the item tables wins over the shadow item of a
/// block with the same identifier. Tags are built last, against the completed registries.
pub fn generate(sources: &DataSources, config: &CodegenConfig) -> Result<GeneratedTables> {
    let sounds = SoundSet::merge(&sources.sound_names, &sources.music_names);
    info!("Merged {} sound names", sounds.len());

    let items = resolve_items(
        config.item_strategy,
        ItemSources {
            internal_item_ids: &sources.internal_legacy_item_ids,
            external_item_ids: &sources.external_legacy_item_ids,
            external_block_ids: &sources.external_legacy_block_ids,
        },
        config.string_identified_legacy_id,
    );
    let mut registries = TypeRegistries::new();
    for item in &items {
        registries.register_item(item.identifier.clone(), item.legacy_id);
    }
    info!("Registered {} of {} resolved items", registries.item_types().len(), items.len());

    let item_namespace_ids = resolve_item_namespace_ids(&sources.item_palette);

    let blocks = resolve_blocks(
        &sources.item_palette,
        &sources.external_legacy_block_ids,
        &sources.internal_legacy_item_ids,
    )
    .context("Resolving blocks")?;
    for block in &blocks {
        registries.register_block(block.registry_identifier(), block.legacy_id);
    }
    info!(
        "Registered {} blocks, {} items including block shadows",
        registries.block_types().len(),
        registries.item_types().len()
    );

    let item_tags = TagRegistry::build(&sources.item_tags, registries.item_types()).context("Building item tags")?;
    let block_tags = TagRegistry::build(&sources.block_tags, registries.block_types()).context("Building block tags")?;
    info!("Built {} item tags and {} block tags", item_tags.len(), block_tags.len());

    Ok(GeneratedTables {
        items,
        blocks,
        item_namespace_ids,
        registries,
        block_tags,
        item_tags,
        sounds,
    })
}
