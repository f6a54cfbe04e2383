#![warn(missing_docs)]
#![deny(clippy::disallowed_types)]

//! A library crate of the in-memory registries built while generating the game's static block, item and tag tables.

pub mod identifier;
pub mod registry;
pub mod tags;
pub mod types;

/// Re-exported dependencies used in API types
pub mod dependencies {
    pub use hashbrown;
    pub use itertools;
    pub use kstring;
    pub use serde;
    pub use thiserror;
}
