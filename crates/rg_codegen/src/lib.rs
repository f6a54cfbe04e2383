#![warn(missing_docs)]
#![deny(clippy::disallowed_types)]

//! Resolves the legacy data sources into the canonical block, item, tag and sound tables

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod prelude;
pub mod resolver;
pub mod sounds;
pub mod sources;

