//! Records addressed by section and item coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The position of an item inside a sectioned collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemPath {
    /// Index of the section.
    pub section: usize,
    /// Index of the item within the section.
    pub index: usize,
}

impl ItemPath {
    pub fn new(section: usize, index: usize) -> Self {
        Self { section, index }
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.index)
    }
}

/// A single edit to a sectioned collection.
///
/// Removal coordinates and every `from` path address the old collection.
/// Insertion coordinates and every `to` path address the new collection.
/// A presentation layer applying these records must keep the two apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollectionRecord {
    /// An item is inserted into a section that exists on both sides.
    AddItem { section: usize, index: usize },
    /// An item is removed from a section that exists on both sides.
    /// `section` is the section's old index.
    RemoveItem { section: usize, index: usize },
    /// An item moves within a section that exists on both sides.
    MoveItem { from: ItemPath, to: ItemPath },
    /// An item kept its identity but its content differs. Query the old
    /// element at `from` and update it with data found at `to`.
    ChangeItem { from: ItemPath, to: ItemPath },
    /// A section is inserted at `section` in the new collection.
    AddSection { section: usize },
    /// The section at `section` in the old collection is removed.
    RemoveSection { section: usize },
    /// A section moves from `from` in the old collection to `section` in the
    /// new one.
    MoveSection { section: usize, from: usize },
    /// A section must be reloaded as a whole, typically because one side of
    /// its item list is empty and per-item records cannot describe the swap
    /// between an empty-state placeholder and real items. `section` is the
    /// section's index in the new collection.
    ReloadSection { section: usize },
}

impl CollectionRecord {
    /// Returns `true` for records that address whole sections.
    pub fn is_section_record(&self) -> bool {
        matches!(
            self,
            CollectionRecord::AddSection { .. }
                | CollectionRecord::RemoveSection { .. }
                | CollectionRecord::MoveSection { .. }
                | CollectionRecord::ReloadSection { .. }
        )
    }
}

impl fmt::Display for CollectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionRecord::AddItem { section, index } => {
                write!(f, "add-item {}", ItemPath::new(*section, *index))
            }
            CollectionRecord::RemoveItem { section, index } => {
                write!(f, "remove-item {}", ItemPath::new(*section, *index))
            }
            CollectionRecord::MoveItem { from, to } => write!(f, "move-item {from} -> {to}"),
            CollectionRecord::ChangeItem { from, to } => write!(f, "change-item {from} -> {to}"),
            CollectionRecord::AddSection { section } => write!(f, "add-section {section}"),
            CollectionRecord::RemoveSection { section } => write!(f, "remove-section {section}"),
            CollectionRecord::MoveSection { section, from } => {
                write!(f, "move-section {from} -> {section}")
            }
            CollectionRecord::ReloadSection { section } => write!(f, "reload-section {section}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_records_are_classified() {
        assert!(CollectionRecord::AddSection { section: 0 }.is_section_record());
        assert!(CollectionRecord::ReloadSection { section: 2 }.is_section_record());
        assert!(!CollectionRecord::AddItem { section: 0, index: 1 }.is_section_record());
        assert!(!CollectionRecord::MoveItem {
            from: ItemPath::new(0, 0),
            to: ItemPath::new(1, 1),
        }
        .is_section_record());
    }

    #[test]
    fn display_uses_section_colon_index() {
        let record = CollectionRecord::ChangeItem {
            from: ItemPath::new(0, 1),
            to: ItemPath::new(1, 0),
        };
        assert_eq!(record.to_string(), "change-item 0:1 -> 1:0");
        assert_eq!(
            CollectionRecord::MoveSection { section: 1, from: 0 }.to_string(),
            "move-section 0 -> 1"
        );
    }

    #[test]
    fn serde_shape() {
        let record = CollectionRecord::MoveItem {
            from: ItemPath::new(1, 0),
            to: ItemPath::new(0, 1),
        };
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json["kind"], "move_item");
        assert_eq!(json["from"]["section"], 1);
        assert_eq!(json["to"]["index"], 1);
    }
}
