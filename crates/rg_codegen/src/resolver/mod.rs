//! Merging the raw data sources into the canonical, sorted entity lists of each domain.

use thiserror::Error;

use crate::prelude::*;

pub mod blocks;
pub mod items;

/// Errors raised when the resolved entities break an invariant of the registries they feed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// Two resolved blocks would be registered under the same identifier.
    #[error("Blocks {first} and {second} would both register as {identifier}")]
    ConflictingBlockIdentifier {
        /// The shared registration identifier.
        identifier: Identifier,
        /// The first palette identifier mapping to it.
        first: Identifier,
        /// The second palette identifier mapping to it.
        second: Identifier,
    },
}
