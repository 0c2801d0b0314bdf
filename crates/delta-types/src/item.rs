//! Identity capability implemented by the data being diffed.
//!
//! Two values are the same logical entity when their identifiers are equal,
//! and unchanged when they are additionally equal under [`PartialEq`].

use std::fmt::Debug;
use std::hash::Hash;

/// A value that carries a stable identity across snapshots.
///
/// The identifier is typically the remote or database key of the value. If it
/// is derived from content instead, every content edit surfaces as a remove
/// followed by an add rather than a [`Change`](crate::Change).
pub trait DeltaItem: PartialEq {
    /// The identifier type. Must be unique within a single snapshot.
    type Identifier: Clone + Debug + Eq + Hash;

    /// The identifier of this value.
    fn delta_identifier(&self) -> Self::Identifier;
}

/// A [`DeltaItem`] that owns an ordered list of items.
///
/// Sections are compared by identifier like any other item. Their
/// [`PartialEq`] implementation is expected to be a deep comparison that
/// includes [`items`](DeltaSection::items).
pub trait DeltaSection: DeltaItem {
    /// The type of the items held by the section.
    type Item: DeltaItem;

    /// The items of the section, in display order.
    fn items(&self) -> &[Self::Item];
}

impl DeltaItem for u32 {
    type Identifier = u32;

    fn delta_identifier(&self) -> u32 {
        *self
    }
}

impl DeltaItem for u64 {
    type Identifier = u64;

    fn delta_identifier(&self) -> u64 {
        *self
    }
}

impl DeltaItem for i64 {
    type Identifier = i64;

    fn delta_identifier(&self) -> i64 {
        *self
    }
}

impl DeltaItem for String {
    type Identifier = String;

    fn delta_identifier(&self) -> String {
        self.clone()
    }
}
