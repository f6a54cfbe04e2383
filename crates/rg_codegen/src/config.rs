//! Generation run configuration

use std::path::PathBuf;

use clap::ValueEnum;
use rg_registry::identifier::{LegacyId, STRING_IDENTIFIED_LEGACY_ID};
use smart_default::SmartDefault;

/// How the canonical item list is assembled from the legacy item id sources.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, ValueEnum)]
pub enum ItemResolutionStrategy {
    /// Internal item ids confirmed by the external item table, plus string-identified external-only items.
    CrossReferenced,
    /// The external legacy item table as-is.
    #[default]
    Direct,
}

/// All configuration of a generation run.
#[derive(Clone, Eq, PartialEq, Debug, SmartDefault)]
pub struct CodegenConfig {
    /// The directory the data sources are read from.
    #[default(PathBuf::from("data"))]
    pub data_dir: PathBuf,
    /// The item resolution strategy.
    pub item_strategy: ItemResolutionStrategy,
    /// The legacy id given to items only known by identifier, used by [`ItemResolutionStrategy::CrossReferenced`].
    #[default(STRING_IDENTIFIED_LEGACY_ID)]
    pub string_identified_legacy_id: LegacyId,
}
