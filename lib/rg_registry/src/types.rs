//! Descriptors for block and item types, and the paired registries holding them.
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::identifier::{Identifier, LegacyId};
use crate::registry::{RegistryType, TypeRegistry};

/// A registered block type.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BlockType {
    /// The unique registry identifier
    pub identifier: Identifier,
    /// The runtime id from the item palette the block was resolved from
    pub legacy_id: LegacyId,
}

/// A registered item type.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ItemType {
    /// The unique registry identifier
    pub identifier: Identifier,
    /// The legacy item id
    pub legacy_id: LegacyId,
}

impl RegistryType for BlockType {
    fn new(identifier: Identifier, legacy_id: LegacyId) -> Self {
        Self { identifier, legacy_id }
    }

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn legacy_id(&self) -> LegacyId {
        self.legacy_id
    }
}

impl RegistryType for ItemType {
    fn new(identifier: Identifier, legacy_id: LegacyId) -> Self {
        Self { identifier, legacy_id }
    }

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn legacy_id(&self) -> LegacyId {
        self.legacy_id
    }
}

/// A registry of block types.
pub type BlockRegistry = TypeRegistry<BlockType>;
/// A registry of item types.
pub type ItemRegistry = TypeRegistry<ItemType>;

/// The block and item registries of one generation run.
///
/// They are kept together because registering a block also registers an item of the same identifier and legacy id,
/// and that pair of writes has to happen as one step.
#[derive(Debug, Default)]
pub struct TypeRegistries {
    block_types: BlockRegistry,
    item_types: ItemRegistry,
}

impl TypeRegistries {
    /// Constructs empty registries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item type, see [`TypeRegistry::register`].
    pub fn register_item(&mut self, identifier: impl Into<Identifier>, legacy_id: LegacyId) -> Arc<ItemType> {
        self.item_types.register(identifier, legacy_id)
    }

    /// Registers a block type, see [`TypeRegistry::register`].
    /// The block is shadow-registered as an item with the same identifier and legacy id, whether or not the
    /// block itself was a duplicate. Items registered earlier under that identifier win over the shadow.
    pub fn register_block(&mut self, identifier: impl Into<Identifier>, legacy_id: LegacyId) -> Arc<BlockType> {
        let identifier = identifier.into();
        let block = self.block_types.register(identifier.clone(), legacy_id);
        self.item_types.register(identifier, legacy_id);
        block
    }

    /// The block type registry.
    pub fn block_types(&self) -> &BlockRegistry {
        &self.block_types
    }

    /// The item type registry, including shadow items of all the registered blocks.
    pub fn item_types(&self) -> &ItemRegistry {
        &self.item_types
    }
}
