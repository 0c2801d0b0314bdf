//! Error types for the diff crate.

use delta_types::Snapshot;

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// Two items in one snapshot share an identifier. This is a violation of
    /// the caller's contract and aborts the whole call.
    #[error("duplicate identifier {identifier} in `{snapshot}` snapshot")]
    DuplicateIdentifier {
        /// The snapshot containing the collision.
        snapshot: Snapshot,
        /// `Debug` rendering of the colliding identifier.
        identifier: String,
    },

    /// Diffing the items of a matched section failed.
    #[error("in section {index}: {source}")]
    Section {
        /// Index of the section in the new collection.
        index: usize,
        #[source]
        source: Box<DiffError>,
    },

    /// A record list could not be applied to the given snapshots.
    #[error("inconsistent records: {0}")]
    InconsistentRecords(String),
}

impl DiffError {
    /// The snapshot that contained a duplicate identifier, looking through
    /// section wrappers.
    pub fn duplicate_snapshot(&self) -> Option<Snapshot> {
        match self {
            DiffError::DuplicateIdentifier { snapshot, .. } => Some(*snapshot),
            DiffError::Section { source, .. } => source.duplicate_snapshot(),
            DiffError::InconsistentRecords(_) => None,
        }
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
