//! Item resolution from the legacy item id tables.

use itertools::Itertools;
use tracing::debug;

use crate::config::ItemResolutionStrategy;
use crate::prelude::*;
use crate::sources::LegacyIdTable;

/// An item entry picked from the legacy id tables.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ResolvedItem {
    /// The item identifier
    pub identifier: Identifier,
    /// The legacy item id
    pub legacy_id: LegacyId,
}

impl ResolvedItem {
    fn new(identifier: Identifier, legacy_id: LegacyId) -> Self {
        Self { identifier, legacy_id }
    }
}

/// The legacy id tables item resolution reads from.
#[derive(Copy, Clone, Debug)]
pub struct ItemSources<'s> {
    /// In-house legacy item ids
    pub internal_item_ids: &'s LegacyIdTable,
    /// External legacy item ids
    pub external_item_ids: &'s LegacyIdTable,
    /// External legacy block ids
    pub external_block_ids: &'s LegacyIdTable,
}

/// Resolves the sorted, deduplicated item list with the given strategy.
pub fn resolve_items(
    strategy: ItemResolutionStrategy,
    sources: ItemSources<'_>,
    string_identified_legacy_id: LegacyId,
) -> Vec<ResolvedItem> {
    let items = match strategy {
        ItemResolutionStrategy::CrossReferenced => resolve_cross_referenced(sources, string_identified_legacy_id),
        ItemResolutionStrategy::Direct => resolve_direct(sources.external_item_ids),
    };
    debug!("Resolved {} items with the {strategy:?} strategy", items.len());
    items
}

/// Internal items are kept if their lowercased identifier is an external item, with any `item.` infix removed.
/// External items unknown to both the internal items and the external blocks are added as string-identified items.
pub fn resolve_cross_referenced(sources: ItemSources<'_>, string_identified_legacy_id: LegacyId) -> Vec<ResolvedItem> {
    let confirmed = sources
        .internal_item_ids
        .iter()
        .sorted_unstable_by(|(a, _), (b, _)| a.cmp(b))
        .filter(|(identifier, _id)| sources.external_item_ids.contains_key(&identifier.to_lowercase()))
        .map(|(identifier, &id)| ResolvedItem::new(Identifier::new(identifier).remove_item_infixes(), LegacyId(id)));

    let string_identified = sources
        .external_item_ids
        .keys()
        .filter(|identifier| {
            !sources.external_block_ids.contains_key(identifier.as_str())
                && !sources.internal_item_ids.contains_key(identifier.as_str())
        })
        .map(|identifier| ResolvedItem::new(Identifier::new(identifier), string_identified_legacy_id));

    sort_and_dedup(confirmed.chain(string_identified))
}

/// Every external item as-is.
pub fn resolve_direct(external_item_ids: &LegacyIdTable) -> Vec<ResolvedItem> {
    sort_and_dedup(
        external_item_ids
            .iter()
            .map(|(identifier, &id)| ResolvedItem::new(Identifier::new(identifier), LegacyId(id))),
    )
}

/// Stable-sorts by identifier and keeps the first entry of every identifier.
fn sort_and_dedup(items: impl Iterator<Item = ResolvedItem>) -> Vec<ResolvedItem> {
    items
        .sorted_by(|a, b| a.identifier.cmp(&b.identifier))
        .dedup_by(|a, b| a.identifier == b.identifier)
        .collect_vec()
}

/// The sorted identifiers of every palette entry that is not an item view of a block.
pub fn resolve_item_namespace_ids(palette: &LegacyIdTable) -> Vec<Identifier> {
    palette
        .keys()
        .map(Identifier::from)
        .filter(|identifier| !identifier.is_item_view())
        .sorted()
        .collect_vec()
}
