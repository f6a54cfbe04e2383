//! Common type aliases

// some of the imports here are not used yet, but are pre-defined for symmetry
#![allow(unused)]

// Anyhow error handling
pub use anyhow::{anyhow, bail, ensure, Context, Result};

// Common synchronization types
pub use std::sync::Arc;

// hashbrown Hash* types
pub use hashbrown::{HashMap, HashSet};

// Registry types used all over the resolvers
pub use rg_registry::identifier::{Identifier, LegacyId};
