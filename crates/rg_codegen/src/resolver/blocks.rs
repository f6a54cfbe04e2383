//! Block resolution from the item palette.
//!
//! The palette lists every item, and the blocks are the entries known to either legacy id table.
//! Palette entries of the form `minecraft:item.<name>` are item views of a block, and win over a
//! plain `minecraft:<name>` entry so the same block is not registered twice.

use hashbrown::hash_map::Entry;
use itertools::Itertools;
use tracing::debug;

use super::ResolveError;
use crate::prelude::*;
use crate::sources::LegacyIdTable;

/// A block entry picked from the palette.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolvedBlock {
    /// The palette identifier
    pub identifier: Identifier,
    /// The palette runtime id
    pub legacy_id: LegacyId,
    /// If the palette entry is an item view of the block (`minecraft:item.*`)
    pub item: bool,
}

impl ResolvedBlock {
    /// The identifier the block registers under, with every `item.` infix removed.
    pub fn registry_identifier(&self) -> Identifier {
        self.identifier.remove_item_infixes()
    }
}

/// Resolves the sorted block list.
///
/// A palette entry is kept if its identifier is a key of `legacy_block_ids` or of `internal_item_ids`.
/// Non-item entries named like the stripped form of a kept item view are dropped in favour of the item view.
pub fn resolve_blocks(
    palette: &LegacyIdTable,
    legacy_block_ids: &LegacyIdTable,
    internal_item_ids: &LegacyIdTable,
) -> Result<Vec<ResolvedBlock>, ResolveError> {
    let candidates = palette
        .iter()
        .filter(|(identifier, _id)| {
            legacy_block_ids.contains_key(identifier.as_str()) || internal_item_ids.contains_key(identifier.as_str())
        })
        .map(|(identifier, &id)| {
            let identifier = Identifier::new(identifier);
            ResolvedBlock {
                item: identifier.is_item_view(),
                identifier,
                legacy_id: LegacyId(id),
            }
        })
        .collect_vec();
    debug!(
        "{} of {} palette entries are known blocks",
        candidates.len(),
        palette.len()
    );

    let implied_items: HashSet<Identifier> = candidates
        .iter()
        .filter(|block| block.item)
        .map(|block| block.identifier.strip_item_view_prefix())
        .collect();

    let blocks = candidates
        .into_iter()
        .filter(|block| block.item || !implied_items.contains(&block.identifier))
        .sorted_by(|a, b| a.identifier.cmp(&b.identifier))
        .collect_vec();

    check_unique_registry_identifiers(&blocks)?;
    Ok(blocks)
}

/// Ensures no two blocks map to the same registry identifier.
pub(crate) fn check_unique_registry_identifiers(blocks: &[ResolvedBlock]) -> Result<(), ResolveError> {
    let mut registered: HashMap<Identifier, &Identifier> = HashMap::with_capacity(blocks.len());
    for block in blocks {
        match registered.entry(block.registry_identifier()) {
            Entry::Occupied(first) => {
                return Err(ResolveError::ConflictingBlockIdentifier {
                    identifier: first.key().clone(),
                    first: (*first.get()).clone(),
                    second: block.identifier.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(&block.identifier);
            }
        }
    }
    Ok(())
}
