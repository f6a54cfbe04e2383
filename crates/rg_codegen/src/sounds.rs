//! Sound name merging.

use itertools::Itertools;

/// The sorted, deduplicated union of the sound effect and music event names.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct SoundSet {
    names: Vec<String>,
}

impl SoundSet {
    /// Merges both name sources into one ordered set.
    pub fn merge<'a>(
        effects: impl IntoIterator<Item = &'a String>,
        music: impl IntoIterator<Item = &'a String>,
    ) -> Self {
        let names = effects
            .into_iter()
            .chain(music)
            .sorted_unstable()
            .dedup()
            .cloned()
            .collect_vec();
        Self { names }
    }

    /// The number of distinct names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Checks if there are no names at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Checks if the set holds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    /// Iterates over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// The names as a sorted slice.
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}
