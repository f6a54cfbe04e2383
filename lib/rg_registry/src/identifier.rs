//! Namespaced string identifiers and legacy numeric ids, the two keyspaces every registry is indexed by.
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

use kstring::KString;
use serde::{Deserialize, Serialize};

/// Namespace of the vanilla game objects (as a `const` for compile-time functions)
pub const MINECRAFT_NAMESPACE_CONST: &str = "minecraft";
/// Namespace of the vanilla game objects
pub static MINECRAFT_NAMESPACE: &str = MINECRAFT_NAMESPACE_CONST;
/// The infix separating an item view of a block from the block's own name, as in `minecraft:item.stick`.
pub const ITEM_INFIX: &str = "item.";
/// Identifier prefix of palette entries that are item views of a block.
pub const ITEM_VIEW_PREFIX: &str = "minecraft:item.";
/// What [`ITEM_VIEW_PREFIX`] collapses to once the item infix is stripped.
pub const MINECRAFT_PREFIX: &str = "minecraft:";

/// Legacy id assigned to items that only exist by their string identifier.
pub const STRING_IDENTIFIED_LEGACY_ID: LegacyId = LegacyId(255);

/// A namespaced registry identifier such as `minecraft:stone`.
///
/// Equality, hashing and ordering all work on the full string, so sorting identifiers is plain
/// lexicographic order and a `&str` can be used to look up identifier-keyed maps.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identifier(KString);

impl Identifier {
    /// Constructs an identifier by copying the given string.
    pub fn new(identifier: &str) -> Self {
        Self(KString::from_ref(identifier))
    }

    /// A compile time constructor.
    pub const fn from_static(identifier: &'static str) -> Self {
        Self(KString::from_static(identifier))
    }

    /// Constructs a `minecraft:`-namespaced identifier.
    pub fn minecraft(key: &str) -> Self {
        Self(KString::from_string(format!("{MINECRAFT_NAMESPACE}:{key}")))
    }

    /// The full identifier string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The namespace part, or `None` for un-namespaced identifiers.
    pub fn namespace(&self) -> Option<&str> {
        self.as_str().split_once(':').map(|(ns, _key)| ns)
    }

    /// The part after the namespace separator, or the whole identifier if there is none.
    pub fn key(&self) -> &str {
        self.as_str()
            .split_once(':')
            .map_or(self.as_str(), |(_ns, key)| key)
    }

    /// Checks if this is an item view of a block (`minecraft:item.*`).
    pub fn is_item_view(&self) -> bool {
        self.as_str().starts_with(ITEM_VIEW_PREFIX)
    }

    /// Strips a leading `minecraft:item.` down to `minecraft:`, leaving any other identifier as-is.
    pub fn strip_item_view_prefix(&self) -> Identifier {
        match self.as_str().strip_prefix(ITEM_VIEW_PREFIX) {
            Some(rest) => Self(KString::from_string(format!("{MINECRAFT_PREFIX}{rest}"))),
            None => self.clone(),
        }
    }

    /// Removes every occurrence of the `item.` infix, wherever it appears.
    pub fn remove_item_infixes(&self) -> Identifier {
        if self.as_str().contains(ITEM_INFIX) {
            Self(KString::from_string(self.as_str().replace(ITEM_INFIX, "")))
        } else {
            self.clone()
        }
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Identifier {}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

// Must hash exactly like `str` for the `Borrow<str>` lookups to work.
impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&String> for Identifier {
    fn from(value: &String) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self(KString::from_string(value))
    }
}

impl From<KString> for Identifier {
    fn from(value: KString) -> Self {
        Self(value)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

/// Newtype wrapper around a legacy (or runtime palette) numeric id.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, Ord, PartialOrd, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyId(pub i32);

impl Display for LegacyId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<i32> for LegacyId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
