//! Flat edit records: the output of diffing two ordered lists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single edit between two flat lists.
///
/// `index` always addresses the new list and `from` always addresses the old
/// list. The two index spaces only coincide before any edit is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// A new item appears at `index` in the new list.
    Add { index: usize },
    /// The item at `index` in the old list is absent from the new list.
    Remove { index: usize },
    /// A surviving item relocates from `from` in the old list to `index` in
    /// the new list. A content edit on the same item is reported separately
    /// as a `Change`.
    Move { index: usize, from: usize },
    /// An item kept its identity but its content differs. Position may or may
    /// not also differ; this record only signals a re-render.
    Change { index: usize, from: usize },
}

impl Change {
    /// Short lowercase name of the record kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Change::Add { .. } => "add",
            Change::Remove { .. } => "remove",
            Change::Move { .. } => "move",
            Change::Change { .. } => "change",
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Add { index } | Change::Remove { index } => {
                write!(f, "{} index={}", self.kind(), index)
            }
            Change::Move { index, from } | Change::Change { index, from } => {
                write!(f, "{} index={} from={}", self.kind(), index, from)
            }
        }
    }
}

/// An ordered edit script between two flat lists.
///
/// Records are grouped as removals, additions, moves, then content changes.
/// Consumers may rely on that grouping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// The list of edits.
    pub changes: Vec<Change>,
}

impl ChangeSet {
    /// Create an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two lists were identical.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Change> {
        self.changes.iter()
    }

    /// Number of `Add` records.
    pub fn additions(&self) -> usize {
        self.count(|c| matches!(c, Change::Add { .. }))
    }

    /// Number of `Remove` records.
    pub fn removals(&self) -> usize {
        self.count(|c| matches!(c, Change::Remove { .. }))
    }

    /// Number of `Move` records.
    pub fn moves(&self) -> usize {
        self.count(|c| matches!(c, Change::Move { .. }))
    }

    /// Number of `Change` records.
    pub fn modifications(&self) -> usize {
        self.count(|c| matches!(c, Change::Change { .. }))
    }

    fn count(&self, pred: impl Fn(&Change) -> bool) -> usize {
        self.changes.iter().filter(|c| pred(c)).count()
    }
}

impl From<Vec<Change>> for ChangeSet {
    fn from(changes: Vec<Change>) -> Self {
        Self { changes }
    }
}

impl IntoIterator for ChangeSet {
    type Item = Change;
    type IntoIter = std::vec::IntoIter<Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_kind() {
        let set = ChangeSet::from(vec![
            Change::Remove { index: 0 },
            Change::Add { index: 1 },
            Change::Add { index: 2 },
            Change::Move { index: 3, from: 1 },
            Change::Change { index: 0, from: 2 },
        ]);
        assert_eq!(set.len(), 5);
        assert_eq!(set.removals(), 1);
        assert_eq!(set.additions(), 2);
        assert_eq!(set.moves(), 1);
        assert_eq!(set.modifications(), 1);
    }

    #[test]
    fn empty_set() {
        let set = ChangeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn display_includes_coordinates() {
        assert_eq!(Change::Add { index: 4 }.to_string(), "add index=4");
        assert_eq!(
            Change::Move { index: 2, from: 1 }.to_string(),
            "move index=2 from=1"
        );
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&Change::Change { index: 0, from: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"change","index":0,"from":3}"#);
        let parsed: Change = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Change::Change { index: 0, from: 3 });
    }
}
