//! Identifier lookup for a single snapshot.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use delta_types::{DeltaItem, Snapshot};

use crate::error::{DiffError, DiffResult};

/// Maps each identifier of a snapshot to its position and item.
///
/// Built in one pass. Construction fails if two positions share an
/// identifier, so a successfully built index always has exactly one entry
/// per element of the snapshot.
#[derive(Debug)]
pub struct IdentityIndex<'a, T: DeltaItem> {
    entries: HashMap<T::Identifier, (usize, &'a T)>,
}

impl<'a, T: DeltaItem> IdentityIndex<'a, T> {
    /// Index `items`, tagging any collision with `snapshot`.
    pub fn build(items: &'a [T], snapshot: Snapshot) -> DiffResult<Self> {
        let mut entries = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            match entries.entry(item.delta_identifier()) {
                Entry::Occupied(e) => {
                    return Err(DiffError::DuplicateIdentifier {
                        snapshot,
                        identifier: format!("{:?}", e.key()),
                    });
                }
                Entry::Vacant(e) => {
                    e.insert((position, item));
                }
            }
        }
        debug_assert_eq!(entries.len(), items.len());
        Ok(Self { entries })
    }

    /// Position and item for `id`, if present.
    pub fn get(&self, id: &T::Identifier) -> Option<(usize, &'a T)> {
        self.entries.get(id).copied()
    }

    /// Position of `id`, if present.
    pub fn position(&self, id: &T::Identifier) -> Option<usize> {
        self.entries.get(id).map(|(position, _)| *position)
    }

    /// Returns `true` if `id` is present.
    pub fn contains(&self, id: &T::Identifier) -> bool {
        self.entries.contains_key(id)
    }
}
