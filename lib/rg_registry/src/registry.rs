//! A data structure for keeping track of a mapping between: namespaced identifiers, legacy numeric IDs and objects.
use std::fmt::Debug;
use std::sync::Arc;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use itertools::Itertools;
use kstring::KString;
use thiserror::Error;
use tracing::trace;

use crate::identifier::{Identifier, LegacyId};

/// Needs to be implemented on any object that can be a part of a [`TypeRegistry`]
pub trait RegistryType: Debug {
    /// Constructs a fresh, not yet registered object.
    fn new(identifier: Identifier, legacy_id: LegacyId) -> Self;
    /// Should be trivial
    fn identifier(&self) -> &Identifier;
    /// Should be trivial
    fn legacy_id(&self) -> LegacyId;
}

/// Possible errors from registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A tag name that is already present in the tag registry was prevented from being overwritten.
    #[error("Tag {name} is already registered")]
    DuplicateTag {
        /// The conflicting tag name.
        name: KString,
    },
}

/// A first-writer-wins registry of objects indexed by identifier and by legacy id.
///
/// The two indexes are independent of each other: each keeps the first object registered under its key.
/// They can therefore disagree, e.g. registering `a`/1, then `a`/2 keeps the first `a` under `a`,
/// while legacy id 2 points at the discarded second `a`. Lookups via [`Self::get`] and
/// [`Self::get_from_legacy`] are both authoritative for their own keyspace.
#[derive(Debug)]
pub struct TypeRegistry<Object: RegistryType> {
    id_to_type: HashMap<Identifier, Arc<Object>>,
    legacy_to_type: HashMap<LegacyId, Arc<Object>>,
}

impl<Object: RegistryType> Default for TypeRegistry<Object> {
    fn default() -> Self {
        Self {
            id_to_type: HashMap::with_capacity(64),
            legacy_to_type: HashMap::with_capacity(64),
        }
    }
}

impl<Object: RegistryType> TypeRegistry<Object> {
    /// Constructs a new object from the identifier and legacy id and registers it, see [`Self::register_type`].
    pub fn register(&mut self, identifier: impl Into<Identifier>, legacy_id: LegacyId) -> Arc<Object> {
        self.register_type(Object::new(identifier.into(), legacy_id))
    }

    /// Registers the object, returning the object now registered under its identifier.
    /// If the identifier was already taken, the existing object is returned and the new one is not stored
    /// in the identifier index. The legacy id index is filled independently, if its slot is still free.
    pub fn register_type(&mut self, object: impl Into<Arc<Object>>) -> Arc<Object> {
        let object = object.into();
        self.legacy_to_type
            .entry(object.legacy_id())
            .or_insert_with(|| Arc::clone(&object));
        match self.id_to_type.entry(object.identifier().clone()) {
            Entry::Occupied(existing) => {
                trace!(
                    "Discarding duplicate registration of {} (legacy id {})",
                    object.identifier(),
                    object.legacy_id()
                );
                Arc::clone(existing.get())
            }
            Entry::Vacant(slot) => Arc::clone(slot.insert(object)),
        }
    }

    /// Given an identifier, look up the object, or return `None` if it's not found.
    pub fn get(&self, identifier: &str) -> Option<&Arc<Object>> {
        self.id_to_type.get(identifier)
    }

    /// Given a legacy id, look up the first object registered with it, or return `None` if it's not found.
    pub fn get_from_legacy(&self, legacy_id: LegacyId) -> Option<&Arc<Object>> {
        self.legacy_to_type.get(&legacy_id)
    }

    /// Checks if an object is registered under the identifier.
    pub fn contains(&self, identifier: &str) -> bool {
        self.id_to_type.contains_key(identifier)
    }

    /// Number of registered identifiers.
    pub fn len(&self) -> usize {
        self.id_to_type.len()
    }

    /// Checks if nothing was registered yet.
    pub fn is_empty(&self) -> bool {
        self.id_to_type.is_empty()
    }

    /// Number of occupied legacy id slots, can be lower or higher than [`Self::len`].
    pub fn legacy_len(&self) -> usize {
        self.legacy_to_type.len()
    }

    /// Iterates over all the registered objects in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Object>> {
        self.id_to_type.values()
    }

    /// Iterates over all the registered objects sorted by identifier.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Arc<Object>> {
        self.id_to_type
            .iter()
            .sorted_unstable_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_id, object)| object)
    }
}

#[cfg(test)]
mod test {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[derive(Clone, Eq, PartialEq, Debug, Hash)]
    struct DummyObject(Identifier, LegacyId);

    impl RegistryType for DummyObject {
        fn new(identifier: Identifier, legacy_id: LegacyId) -> Self {
            Self(identifier, legacy_id)
        }

        fn identifier(&self) -> &Identifier {
            &self.0
        }

        fn legacy_id(&self) -> LegacyId {
            self.1
        }
    }

    #[test]
    pub fn simple_registry() {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        assert!(reg.is_empty());
        let a = reg.register("test:a", LegacyId(1));
        let b = reg.register("test:b", LegacyId(2));
        assert_eq!(reg.len(), 2);
        assert!(!Arc::ptr_eq(&a, &b));

        assert!(Arc::ptr_eq(reg.get("test:a").unwrap(), &a));
        assert!(Arc::ptr_eq(reg.get("test:b").unwrap(), &b));
        assert!(reg.get("test:c").is_none());
        assert!(!reg.contains("test:c"));

        assert!(Arc::ptr_eq(reg.get_from_legacy(LegacyId(1)).unwrap(), &a));
        assert!(Arc::ptr_eq(reg.get_from_legacy(LegacyId(2)).unwrap(), &b));
        assert!(reg.get_from_legacy(LegacyId(3)).is_none());
    }

    #[test]
    pub fn duplicate_identifier_returns_first() {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        let first = reg.register("test:a", LegacyId(1));
        let second = reg.register("test:a", LegacyId(1));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.legacy_len(), 1);
    }

    #[test]
    pub fn shared_legacy_id_keeps_first() {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        let a = reg.register("test:a", LegacyId(7));
        let b = reg.register("test:b", LegacyId(7));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.legacy_len(), 1);
        assert!(Arc::ptr_eq(reg.get("test:b").unwrap(), &b));
        assert!(Arc::ptr_eq(reg.get_from_legacy(LegacyId(7)).unwrap(), &a));
    }

    #[test]
    pub fn indexes_resolve_independently() {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        let a = reg.register("test:a", LegacyId(1));
        let returned = reg.register("test:a", LegacyId(2));
        assert!(Arc::ptr_eq(&a, &returned));
        assert_eq!(reg.len(), 1);

        // The discarded duplicate still claimed the free legacy slot.
        let by_legacy = reg.get_from_legacy(LegacyId(2)).unwrap();
        assert!(!Arc::ptr_eq(by_legacy, &a));
        assert_eq!(by_legacy.identifier(), "test:a");
        assert_eq!(by_legacy.legacy_id(), LegacyId(2));
    }

    #[test]
    pub fn register_prebuilt_object() {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        let object = Arc::new(DummyObject(Identifier::new("test:a"), LegacyId(3)));
        let registered = reg.register_type(Arc::clone(&object));
        assert!(Arc::ptr_eq(&object, &registered));
        assert!(Arc::ptr_eq(reg.get_from_legacy(LegacyId(3)).unwrap(), &object));
    }

    #[test]
    pub fn sorted_iteration() {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        for (idx, name) in ["test:c", "test:a", "test:b"].into_iter().enumerate() {
            reg.register(name, LegacyId(idx as i32));
        }
        let names: Vec<&str> = reg.iter_sorted().map(|o| o.identifier().as_str()).collect();
        assert_eq!(names, vec!["test:a", "test:b", "test:c"]);
        assert_eq!(reg.iter().count(), 3);
    }

    #[quickcheck]
    fn registering_twice_is_idempotent(entries: Vec<(String, i32)>) -> bool {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        let first: Vec<_> = entries
            .iter()
            .map(|(name, id)| reg.register(name.as_str(), LegacyId(*id)))
            .collect();
        let (len, legacy_len) = (reg.len(), reg.legacy_len());
        let second: Vec<_> = entries
            .iter()
            .map(|(name, id)| reg.register(name.as_str(), LegacyId(*id)))
            .collect();
        reg.len() == len
            && reg.legacy_len() == legacy_len
            && first.iter().zip(second.iter()).all(|(a, b)| Arc::ptr_eq(a, b))
    }

    #[quickcheck]
    fn distinct_identifiers_get_distinct_objects(entries: Vec<(String, i32)>) -> bool {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        for (name, id) in &entries {
            reg.register(name.as_str(), LegacyId(*id));
        }
        let mut seen: HashMap<&str, &Arc<DummyObject>> = HashMap::new();
        for (name, _id) in &entries {
            let object = reg.get(name).unwrap();
            if object.identifier() != name.as_str() {
                return false;
            }
            seen.insert(name.as_str(), object);
        }
        seen.values()
            .tuple_combinations()
            .all(|(a, b)| !Arc::ptr_eq(a, b))
    }

    #[quickcheck]
    fn legacy_index_keeps_first_registration(entries: Vec<(String, i32)>) -> bool {
        let mut reg: TypeRegistry<DummyObject> = TypeRegistry::default();
        let registered: Vec<_> = entries
            .iter()
            .map(|(name, id)| {
                let object = Arc::new(DummyObject(Identifier::new(name), LegacyId(*id)));
                reg.register_type(Arc::clone(&object));
                object
            })
            .collect();
        registered.iter().all(|object| {
            let first = registered
                .iter()
                .find(|o| o.legacy_id() == object.legacy_id())
                .unwrap();
            Arc::ptr_eq(reg.get_from_legacy(object.legacy_id()).unwrap(), first)
        })
    }
}
