//! Diff engine for Delta.
//!
//! Computes the structural edits (insertions, removals, moves and content
//! changes) that transform one ordered collection of identity-bearing items
//! into another, and composes that flat computation into a two-level
//! section/item differ. The engine is synchronous, keeps no state between
//! calls and never mutates its inputs.
//!
//! # Key Types
//!
//! - [`IdentityIndex`] -- Identifier to (position, item) lookup for one snapshot
//! - [`diff`] / [`diff_with`] / [`DiffOutcome`] -- Flat list diff
//! - [`diff_sections`] / [`diff_sections_with`] -- Section + item diff
//! - [`section_record`] / [`item_record`] -- Projection onto collection coordinates
//! - [`apply_changes`] / [`apply_section_records`] -- Replay records onto the old snapshot
//! - [`DiffConfig`] -- Tunables for the empty-side reload and section changes

pub mod apply;
pub mod config;
pub mod error;
pub mod flat;
pub mod index;
pub mod projection;
pub mod sections;

pub use apply::{apply_changes, apply_section_records};
pub use config::DiffConfig;
pub use error::{DiffError, DiffResult};
pub use flat::{diff, diff_with, DiffOutcome};
pub use index::IdentityIndex;
pub use projection::{item_record, section_record};
pub use sections::{diff_sections, diff_sections_with};

pub use delta_types::{
    Change, ChangeSet, CollectionRecord, DeltaItem, DeltaSection, ItemPath, Snapshot,
};
