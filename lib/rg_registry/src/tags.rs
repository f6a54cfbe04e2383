//! Named tags grouping registered types, and the registry indexing them by name and by member.
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use hashbrown::hash_map::Entry;
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use kstring::KString;
use tracing::debug;

use crate::identifier::Identifier;
use crate::registry::{RegistryError, RegistryType, TypeRegistry};
use crate::types::{BlockType, ItemType};

/// A named set of types.
///
/// Members are referenced by identifier. A member with no matching registered type is kept as declared,
/// it just has no entry in [`Self::types`].
#[derive(Debug)]
pub struct Tag<Object: RegistryType> {
    name: KString,
    members: BTreeSet<Identifier>,
    types: Vec<Arc<Object>>,
}

/// A tag over block types.
pub type BlockTag = Tag<BlockType>;
/// A tag over item types.
pub type ItemTag = Tag<ItemType>;

impl<Object: RegistryType> Tag<Object> {
    /// Constructs a tag, resolving the member identifiers against an already populated registry.
    pub fn resolve<I>(name: &str, members: I, registry: &TypeRegistry<Object>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Identifier>,
    {
        let members: BTreeSet<Identifier> = members.into_iter().map(Into::into).collect();
        let types = members
            .iter()
            .filter_map(|member| registry.get(member.as_str()).cloned())
            .collect_vec();
        Self {
            name: KString::from_ref(name),
            members,
            types,
        }
    }

    /// The unique tag name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All member identifiers as declared, sorted.
    pub fn members(&self) -> &BTreeSet<Identifier> {
        &self.members
    }

    /// The registered types among the members, sorted by identifier.
    pub fn types(&self) -> &[Arc<Object>] {
        &self.types
    }

    /// Declared members that did not match a registered type.
    pub fn unresolved_members(&self) -> impl Iterator<Item = &Identifier> {
        self.members
            .iter()
            .filter(|member| !self.types.iter().any(|ty| ty.identifier() == *member))
    }

    /// Checks if the identifier is a declared member of this tag.
    pub fn contains(&self, identifier: &str) -> bool {
        self.members.contains(identifier)
    }
}

// Tags are unique by name within a registry, so the name alone identifies them.
impl<Object: RegistryType> PartialEq for Tag<Object> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<Object: RegistryType> Eq for Tag<Object> {}

impl<Object: RegistryType> Hash for Tag<Object> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl<Object: RegistryType> Display for Tag<Object> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({} members)", self.name, self.members.len())
    }
}

/// An index of tags by name, and of the tags every member identifier belongs to.
#[derive(Debug)]
pub struct TagRegistry<Object: RegistryType> {
    name_to_tag: HashMap<KString, Arc<Tag<Object>>>,
    member_to_tags: HashMap<Identifier, HashSet<Arc<Tag<Object>>>>,
}

/// A registry of block tags.
pub type BlockTagRegistry = TagRegistry<BlockType>;
/// A registry of item tags.
pub type ItemTagRegistry = TagRegistry<ItemType>;

impl<Object: RegistryType> Default for TagRegistry<Object> {
    fn default() -> Self {
        Self {
            name_to_tag: HashMap::new(),
            member_to_tags: HashMap::new(),
        }
    }
}

impl<Object: RegistryType> TagRegistry<Object> {
    /// Builds the tag registry from a tag name -> member identifiers source, after `types` has been fully populated.
    /// Tags are registered in name order.
    pub fn build<'s, S, M>(source: S, types: &TypeRegistry<Object>) -> Result<Self, RegistryError>
    where
        S: IntoIterator<Item = (&'s String, M)>,
        M: IntoIterator,
        M::Item: Into<Identifier>,
    {
        let mut registry = Self::default();
        for (name, members) in source.into_iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
            let tag = registry.register(Tag::resolve(name, members, types))?;
            let dangling = tag.unresolved_members().count();
            if dangling > 0 {
                debug!("Tag {} names {} unregistered member(s)", tag.name(), dangling);
            }
        }
        Ok(registry)
    }

    /// Registers the tag under its name and indexes it for each of its resolved types.
    /// Dangling members stay on the tag but are not indexed.
    /// Registering a name twice is an error, leaving the registry unchanged.
    pub fn register(&mut self, tag: Tag<Object>) -> Result<Arc<Tag<Object>>, RegistryError> {
        let tag = match self.name_to_tag.entry(tag.name.clone()) {
            Entry::Occupied(_) => return Err(RegistryError::DuplicateTag { name: tag.name }),
            Entry::Vacant(slot) => Arc::clone(slot.insert(Arc::new(tag))),
        };
        for ty in &tag.types {
            self.member_to_tags
                .entry(ty.identifier().clone())
                .or_default()
                .insert(Arc::clone(&tag));
        }
        Ok(tag)
    }

    /// Given a tag name, look up the tag, or return `None` if it's not found.
    pub fn get_tag(&self, name: &str) -> Option<&Arc<Tag<Object>>> {
        self.name_to_tag.get(name)
    }

    /// Returns the set of tags the identifier is a member of, empty if it has none.
    pub fn get_tags_set(&self, identifier: &str) -> HashSet<Arc<Tag<Object>>> {
        self.member_to_tags.get(identifier).cloned().unwrap_or_default()
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.name_to_tag.len()
    }

    /// Checks if no tags were registered yet.
    pub fn is_empty(&self) -> bool {
        self.name_to_tag.is_empty()
    }

    /// Iterates over all the registered tags sorted by name.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Arc<Tag<Object>>> {
        self.name_to_tag
            .iter()
            .sorted_unstable_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_name, tag)| tag)
    }
}
