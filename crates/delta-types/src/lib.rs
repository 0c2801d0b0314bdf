//! Foundation types for Delta.
//!
//! Delta computes the structural edits that turn one ordered, identity-bearing
//! collection into another. This crate holds the vocabulary shared by the
//! engine and its consumers; it has no diffing logic of its own.
//!
//! # Key Types
//!
//! - [`DeltaItem`] / [`DeltaSection`] — Identity capability implemented by caller data
//! - [`Change`] / [`ChangeSet`] — Flat edit records (add/remove/move/change)
//! - [`CollectionRecord`] / [`ItemPath`] — Records projected onto section and item coordinates
//! - [`Snapshot`] — Which side of a diff (`from` or `to`) a value belongs to

pub mod change;
pub mod item;
pub mod record;
pub mod snapshot;

pub use change::{Change, ChangeSet};
pub use item::{DeltaItem, DeltaSection};
pub use record::{CollectionRecord, ItemPath};
pub use snapshot::Snapshot;
