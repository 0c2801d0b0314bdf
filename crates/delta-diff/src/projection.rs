//! Projection of flat records onto sectioned collection coordinates.
//!
//! A flat diff run over a list of sections yields section records; a flat diff
//! run over the items of one section yields item records tagged with the
//! section's old and new index.

use delta_types::{Change, CollectionRecord, ItemPath};

/// Project a record from a diff over sections.
///
/// Content changes become a reload of the section at its new index, the same
/// coordinate an item-level reload uses.
pub fn section_record(change: Change) -> CollectionRecord {
    match change {
        Change::Add { index } => CollectionRecord::AddSection { section: index },
        Change::Remove { index } => CollectionRecord::RemoveSection { section: index },
        Change::Move { index, from } => CollectionRecord::MoveSection {
            section: index,
            from,
        },
        Change::Change { index, .. } => CollectionRecord::ReloadSection { section: index },
    }
}

/// Project a record from a diff over the items of one section.
///
/// `section` is the section's index in the new collection and `old_section`
/// its index in the old one. Removals are addressed with `old_section`,
/// insertions with `section`.
pub fn item_record(change: Change, section: usize, old_section: usize) -> CollectionRecord {
    match change {
        Change::Add { index } => CollectionRecord::AddItem { section, index },
        Change::Remove { index } => CollectionRecord::RemoveItem {
            section: old_section,
            index,
        },
        Change::Move { index, from } => CollectionRecord::MoveItem {
            from: ItemPath::new(old_section, from),
            to: ItemPath::new(section, index),
        },
        Change::Change { index, from } => CollectionRecord::ChangeItem {
            from: ItemPath::new(old_section, from),
            to: ItemPath::new(section, index),
        },
    }
}
