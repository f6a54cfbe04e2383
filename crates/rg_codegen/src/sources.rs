//! Loading the raw data sources the registries are resolved from.
//!
//! Every source is a plain JSON document: identifier -> integer objects for id tables,
//! tag name -> identifier array objects for tags, and string arrays for sound names.
//! A source that is missing, unreadable or malformed is replaced by an empty collection.

use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use crate::prelude::*;

/// identifier -> legacy (or runtime) id
pub type LegacyIdTable = HashMap<String, i32>;
/// tag name -> member identifiers
pub type TagTable = HashMap<String, HashSet<String>>;

/// The logical names of the data sources.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SourceName {
    /// identifier -> runtime id palette of every item, block items included
    ItemPalette,
    /// Legacy block ids from the external tables
    ExternalLegacyBlockIds,
    /// Legacy item ids from the external tables
    ExternalLegacyItemIds,
    /// Legacy item ids maintained in-house
    InternalLegacyItemIds,
    /// Vanilla block tags
    BlockTags,
    /// Vanilla item tags
    ItemTags,
    /// Sound effect names
    SoundNames,
    /// Music event names
    MusicNames,
}

impl SourceName {
    /// All the sources, in loading order.
    pub const ALL: [SourceName; 8] = [
        SourceName::ItemPalette,
        SourceName::ExternalLegacyBlockIds,
        SourceName::ExternalLegacyItemIds,
        SourceName::InternalLegacyItemIds,
        SourceName::BlockTags,
        SourceName::ItemTags,
        SourceName::SoundNames,
        SourceName::MusicNames,
    ];

    /// The file name of the source inside the data directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            SourceName::ItemPalette => "item_palette.json",
            SourceName::ExternalLegacyBlockIds => "external_legacy_block_ids.json",
            SourceName::ExternalLegacyItemIds => "external_legacy_item_ids.json",
            SourceName::InternalLegacyItemIds => "internal_legacy_item_ids.json",
            SourceName::BlockTags => "block_tags.json",
            SourceName::ItemTags => "item_tags.json",
            SourceName::SoundNames => "sound_names.json",
            SourceName::MusicNames => "music_names.json",
        }
    }
}

impl Display for SourceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SourceName::ItemPalette => "item palette",
            SourceName::ExternalLegacyBlockIds => "external legacy block ids",
            SourceName::ExternalLegacyItemIds => "external legacy item ids",
            SourceName::InternalLegacyItemIds => "internal legacy item ids",
            SourceName::BlockTags => "vanilla block tags",
            SourceName::ItemTags => "vanilla item tags",
            SourceName::SoundNames => "sound definitions",
            SourceName::MusicNames => "music definitions",
        };
        f.write_str(name)
    }
}

/// Errors reading a single data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("Could not read {source_name} from {path}: {source}")]
    Read {
        /// Which source failed.
        source_name: SourceName,
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// The file was read but is not in the expected shape.
    #[error("Could not parse {source_name} from {path}: {source}")]
    Parse {
        /// Which source failed.
        source_name: SourceName,
        /// The file path.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

impl SourceError {
    /// Checks if the error is just the source file not existing.
    pub fn is_missing(&self) -> bool {
        matches!(self, SourceError::Read { source, .. } if source.kind() == ErrorKind::NotFound)
    }
}

/// All raw inputs of a generation run.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataSources {
    /// identifier -> runtime id of every item in the palette
    pub item_palette: LegacyIdTable,
    /// External legacy block ids
    pub external_legacy_block_ids: LegacyIdTable,
    /// External legacy item ids
    pub external_legacy_item_ids: LegacyIdTable,
    /// In-house legacy item ids
    pub internal_legacy_item_ids: LegacyIdTable,
    /// Vanilla block tags
    pub block_tags: TagTable,
    /// Vanilla item tags
    pub item_tags: TagTable,
    /// Sound effect names
    pub sound_names: HashSet<String>,
    /// Music event names
    pub music_names: HashSet<String>,
}

impl DataSources {
    /// Loads every source from `data_dir`, degrading failed sources to empty collections.
    pub fn load(data_dir: &Path) -> Self {
        Self {
            item_palette: load_or_default(data_dir, SourceName::ItemPalette),
            external_legacy_block_ids: load_or_default(data_dir, SourceName::ExternalLegacyBlockIds),
            external_legacy_item_ids: load_or_default(data_dir, SourceName::ExternalLegacyItemIds),
            internal_legacy_item_ids: load_or_default(data_dir, SourceName::InternalLegacyItemIds),
            block_tags: load_or_default(data_dir, SourceName::BlockTags),
            item_tags: load_or_default(data_dir, SourceName::ItemTags),
            sound_names: load_or_default(data_dir, SourceName::SoundNames),
            music_names: load_or_default(data_dir, SourceName::MusicNames),
        }
    }
}

/// Reads and parses one source.
pub fn load_source<T: DeserializeOwned>(data_dir: &Path, source_name: SourceName) -> Result<T, SourceError> {
    let path = data_dir.join(source_name.file_name());
    let raw = std::fs::read_to_string(&path).map_err(|source| SourceError::Read {
        source_name,
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SourceError::Parse {
        source_name,
        path,
        source,
    })
}

fn load_or_default<T: DeserializeOwned + Default>(data_dir: &Path, source_name: SourceName) -> T {
    match load_source(data_dir, source_name) {
        Ok(value) => value,
        Err(e) if e.is_missing() => {
            debug!("No {source_name} found in {}, using an empty set", data_dir.display());
            T::default()
        }
        Err(e) => {
            warn!("{e}, using an empty set");
            T::default()
        }
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use super::*;

    #[test]
    fn missing_directory_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let sources = DataSources::load(&dir.path().join("does_not_exist"));
        assert_eq!(sources, DataSources::default());
    }

    #[test]
    fn loads_every_shape() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SourceName::ItemPalette.file_name()),
            r#"{"minecraft:stone": 1, "minecraft:item.stick": 2}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(SourceName::BlockTags.file_name()),
            r#"{"minecraft:logs": ["minecraft:oak_log", "minecraft:birch_log"]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(SourceName::SoundNames.file_name()),
            r#"["ambient.cave", "block.stone.break"]"#,
        )
        .unwrap();

        let sources = DataSources::load(dir.path());
        assert_eq!(sources.item_palette.len(), 2);
        assert_eq!(sources.item_palette.get("minecraft:item.stick"), Some(&2));
        assert_eq!(sources.block_tags["minecraft:logs"].len(), 2);
        assert!(sources.sound_names.contains("block.stone.break"));
        assert!(sources.music_names.is_empty());
        assert!(sources.external_legacy_item_ids.is_empty());
    }

    #[test]
    fn malformed_source_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SourceName::InternalLegacyItemIds.file_name());
        fs::write(&path, r#"{"minecraft:apple": "not a number"}"#).unwrap();

        let err = load_source::<LegacyIdTable>(dir.path(), SourceName::InternalLegacyItemIds).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
        assert!(!err.is_missing());

        let sources = DataSources::load(dir.path());
        assert!(sources.internal_legacy_item_ids.is_empty());
    }

    #[test]
    fn missing_source_is_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source::<LegacyIdTable>(dir.path(), SourceName::ItemPalette).unwrap_err();
        assert!(err.is_missing());
        assert!(err.to_string().starts_with("Could not read item palette from "));
    }

    #[test]
    fn file_names_are_unique() {
        let names: HashSet<&str> = SourceName::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), SourceName::ALL.len());
    }
}
