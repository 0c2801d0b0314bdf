//! Flat diff: compare two ordered lists of identity-bearing items.
//!
//! Items are matched by identifier. Three passes over the two snapshots emit
//! removals and content changes, additions, and finally the moves needed to
//! reconcile the relative order of surviving items. Moves come from a greedy
//! alignment scan, so the script is sufficient but not guaranteed to have the
//! fewest possible moves.

use delta_types::{Change, ChangeSet, DeltaItem, Snapshot};
use tracing::{debug, trace};

use crate::config::DiffConfig;
use crate::error::DiffResult;
use crate::index::IdentityIndex;

/// The result of a flat diff with [`DiffConfig`] applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Exactly one side was empty and the caller asked for a reload instead of
    /// per-item records.
    Reload,
    /// Per-item records.
    Changes(ChangeSet),
}

/// Compute the edit script that turns `from` into `to`.
///
/// Records are returned grouped as removals, additions, moves, then content
/// changes. Fails with [`DiffError::DuplicateIdentifier`] before any record is
/// produced if either snapshot repeats an identifier.
///
/// [`DiffError::DuplicateIdentifier`]: crate::DiffError::DuplicateIdentifier
pub fn diff<T: DeltaItem>(from: &[T], to: &[T]) -> DiffResult<ChangeSet> {
    let from_index = IdentityIndex::build(from, Snapshot::From)?;
    let to_index = IdentityIndex::build(to, Snapshot::To)?;
    Ok(diff_indexed(from, to, &from_index, &to_index))
}

/// Like [`diff`], honouring [`DiffConfig::prefer_reload`].
///
/// Both snapshots are still checked for duplicate identifiers when the reload
/// shortcut applies.
pub fn diff_with<T: DeltaItem>(from: &[T], to: &[T], config: &DiffConfig) -> DiffResult<DiffOutcome> {
    let from_index = IdentityIndex::build(from, Snapshot::From)?;
    let to_index = IdentityIndex::build(to, Snapshot::To)?;

    if config.prefer_reload && from.is_empty() != to.is_empty() {
        trace!(from = from.len(), to = to.len(), "one side empty; reloading");
        return Ok(DiffOutcome::Reload);
    }

    Ok(DiffOutcome::Changes(diff_indexed(
        from,
        to,
        &from_index,
        &to_index,
    )))
}

fn diff_indexed<T: DeltaItem>(
    from: &[T],
    to: &[T],
    from_index: &IdentityIndex<'_, T>,
    to_index: &IdentityIndex<'_, T>,
) -> ChangeSet {
    let mut removed = Vec::new();
    let mut changed = Vec::new();

    // Removed and changed items, in `from` order.
    for (position, item) in from.iter().enumerate() {
        match to_index.get(&item.delta_identifier()) {
            None => removed.push(Change::Remove { index: position }),
            Some((index, target)) if target != item => changed.push(Change::Change {
                index,
                from: position,
            }),
            Some(_) => {}
        }
    }

    // Added items, in `to` order.
    let added: Vec<Change> = to
        .iter()
        .enumerate()
        .filter(|(_, item)| !from_index.contains(&item.delta_identifier()))
        .map(|(index, _)| Change::Add { index })
        .collect();

    let moved = moves(from, to, from_index, to_index);

    debug!(
        from = from.len(),
        to = to.len(),
        removed = removed.len(),
        added = added.len(),
        moved = moved.len(),
        changed = changed.len(),
        "list diff computed"
    );

    let mut changes = removed;
    changes.extend(added);
    changes.extend(moved);
    changes.extend(changed);
    ChangeSet { changes }
}

/// Greedy alignment scan over `to`.
///
/// `delta` is the running offset between a position in `to` and the position
/// in `from` currently aligned with it. Slots of removed items and sources of
/// emitted moves push it up; additions and destinations of earlier moves pull
/// it down.
fn moves<T: DeltaItem>(
    from: &[T],
    to: &[T],
    from_index: &IdentityIndex<'_, T>,
    to_index: &IdentityIndex<'_, T>,
) -> Vec<Change> {
    let mut delta: isize = 0;
    let mut processed = vec![false; to.len()];
    let mut records = Vec::new();

    for (i, item) in to.iter().enumerate() {
        let id = item.delta_identifier();
        loop {
            // Already filled by an earlier move.
            if processed[i] {
                delta -= 1;
                break;
            }

            // Added items take a slot without consuming one from `from`.
            if !from_index.contains(&id) {
                delta -= 1;
                break;
            }

            let compare_index = aligned(i, delta);
            let compare_id = from[compare_index].delta_identifier();

            // Removed item: skip its slot and realign the same target.
            let Some(final_index) = to_index.position(&compare_id) else {
                delta += 1;
                continue;
            };

            if compare_id == id {
                break;
            }

            delta += 1;
            processed[final_index] = true;
            records.push(Change::Move {
                index: final_index,
                from: compare_index,
            });
        }
    }

    records
}

fn aligned(i: usize, delta: isize) -> usize {
    i.checked_add_signed(delta)
        .expect("aligned position precedes the start of `from`")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiffError;

    #[derive(Clone, Debug, PartialEq)]
    struct Model {
        id: u32,
        count: u32,
    }

    impl DeltaItem for Model {
        type Identifier = u32;

        fn delta_identifier(&self) -> u32 {
            self.id
        }
    }

    fn m(id: u32) -> Model {
        Model { id, count: 0 }
    }

    fn mc(id: u32, count: u32) -> Model {
        Model { id, count }
    }

    fn models(ids: &[u32]) -> Vec<Model> {
        ids.iter().copied().map(m).collect()
    }

    fn changes(from: &[u32], to: &[u32]) -> Vec<Change> {
        diff(&models(from), &models(to)).unwrap().changes
    }

    #[test]
    fn identical_lists_no_changes() {
        let list = models(&[1, 2, 3]);
        assert!(diff(&list, &list).unwrap().is_empty());
    }

    #[test]
    fn adding_an_item() {
        assert_eq!(changes(&[1], &[1, 2]), vec![Change::Add { index: 1 }]);
    }

    #[test]
    fn removing_an_item() {
        assert_eq!(changes(&[1, 2], &[1]), vec![Change::Remove { index: 1 }]);
    }

    #[test]
    fn changing_an_item() {
        let set = diff(&[mc(1, 10)], &[mc(1, 5)]).unwrap();
        assert_eq!(set.changes, vec![Change::Change { index: 0, from: 0 }]);
    }

    #[test]
    fn changing_and_removing() {
        let set = diff(&[m(0), mc(1, 10)], &[mc(1, 5)]).unwrap();
        assert_eq!(
            set.changes,
            vec![Change::Remove { index: 0 }, Change::Change { index: 0, from: 1 }]
        );
    }

    #[test]
    fn removing_and_adding_in_place() {
        assert_eq!(
            changes(&[16, 64, 32], &[16, 256, 32]),
            vec![Change::Remove { index: 1 }, Change::Add { index: 1 }]
        );
    }

    #[test]
    fn single_move() {
        assert_eq!(
            changes(&[1, 3, 2], &[1, 2, 3]),
            vec![Change::Move { index: 2, from: 1 }]
        );
    }

    #[test]
    fn multiple_moves_in_scan_order() {
        assert_eq!(
            changes(&[1, 3, 6, 2, 5, 4], &[1, 2, 3, 4, 5, 6]),
            vec![
                Change::Move { index: 2, from: 1 },
                Change::Move { index: 5, from: 2 },
                Change::Move { index: 4, from: 4 },
            ]
        );
    }

    #[test]
    fn swapping_two_items() {
        assert_eq!(changes(&[1, 2], &[2, 1]), vec![Change::Move { index: 1, from: 0 }]);
    }

    #[test]
    fn moving_and_prepending() {
        assert_eq!(
            changes(&[1, 3, 6], &[4, 1, 6, 3]),
            vec![Change::Add { index: 0 }, Change::Move { index: 3, from: 1 }]
        );
    }

    #[test]
    fn removing_and_moving() {
        assert_eq!(
            changes(&[4, 1, 3, 6], &[1, 6, 3]),
            vec![Change::Remove { index: 0 }, Change::Move { index: 2, from: 2 }]
        );
    }

    #[test]
    fn removal_inside_moved_run_stays_aligned() {
        // A removed item sitting after a move source used to push the aligned
        // position past the end of `from`.
        assert_eq!(
            changes(&[2, 13, 18, 6], &[6, 18, 13]),
            vec![
                Change::Remove { index: 0 },
                Change::Move { index: 2, from: 1 },
                Change::Move { index: 1, from: 2 },
            ]
        );
    }

    #[test]
    fn record_groups_are_ordered() {
        let from = vec![m(1), mc(2, 0), m(3), m(4)];
        let to = vec![m(4), mc(2, 1), m(5), m(1)];
        let kinds: Vec<&str> = diff(&from, &to)
            .unwrap()
            .iter()
            .map(Change::kind)
            .collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| match *k {
            "remove" => 0,
            "add" => 1,
            "move" => 2,
            _ => 3,
        });
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.first(), Some(&"remove"));
        assert_eq!(kinds.last(), Some(&"change"));
    }

    #[test]
    fn everything_added() {
        let set = diff(&models(&[]), &models(&[1, 2])).unwrap();
        assert_eq!(set.additions(), 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn everything_removed() {
        let set = diff(&models(&[1, 2]), &models(&[])).unwrap();
        assert_eq!(set.removals(), 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicate_in_from() {
        let err = diff(&[m(1), mc(1, 2)], &[m(1)]).unwrap_err();
        assert!(matches!(
            err,
            DiffError::DuplicateIdentifier { snapshot: Snapshot::From, .. }
        ));
    }

    #[test]
    fn duplicate_in_to() {
        let err = diff(&[m(1)], &[m(1), m(2), m(2)]).unwrap_err();
        assert!(matches!(
            err,
            DiffError::DuplicateIdentifier { snapshot: Snapshot::To, .. }
        ));
    }

    #[test]
    fn reload_when_one_side_empty() {
        let config = DiffConfig::default();
        assert_eq!(diff_with(&models(&[]), &models(&[1]), &config).unwrap(), DiffOutcome::Reload);
        assert_eq!(diff_with(&models(&[1]), &models(&[]), &config).unwrap(), DiffOutcome::Reload);
    }

    #[test]
    fn no_records_when_both_sides_empty() {
        let empty: Vec<Model> = Vec::new();
        let outcome = diff_with(&empty, &empty, &DiffConfig::default()).unwrap();
        assert_eq!(outcome, DiffOutcome::Changes(ChangeSet::new()));
    }

    #[test]
    fn granular_config_never_reloads() {
        let outcome = diff_with(&models(&[]), &models(&[1, 2]), &DiffConfig::granular()).unwrap();
        match outcome {
            DiffOutcome::Changes(set) => assert_eq!(set.additions(), 2),
            DiffOutcome::Reload => panic!("granular config produced a reload"),
        }
    }

    #[test]
    fn reload_does_not_mask_duplicates() {
        let err = diff_with(&models(&[3, 3]), &models(&[]), &DiffConfig::default()).unwrap_err();
        assert_eq!(err.duplicate_snapshot(), Some(Snapshot::From));
    }

    #[test]
    fn reload_flag_does_not_affect_non_empty_lists() {
        let from = models(&[1, 2, 3]);
        let to = models(&[3, 1]);
        let plain = diff(&from, &to).unwrap();
        let outcome = diff_with(&from, &to, &DiffConfig::default()).unwrap();
        assert_eq!(outcome, DiffOutcome::Changes(plain));
    }
}
