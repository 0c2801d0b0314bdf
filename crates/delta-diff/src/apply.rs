//! Replay records onto the old snapshot.
//!
//! Records are applied with batch-update semantics, the way a collection view
//! consumes them: removals, content changes and move sources address the old
//! list; insertions and move destinations address the new list; every other
//! surviving item fills the remaining slots in its original relative order.
//! Records carry positions only, so inserted and changed content is read from
//! the new snapshot.

use delta_types::{Change, CollectionRecord, DeltaSection};

use crate::error::{DiffError, DiffResult};

/// Where the value of a slot in the new list comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Old(usize),
    New(usize),
}

/// Apply a flat edit script to `from`, reading new content from `to`.
///
/// Returns a list equal to `to` when `changes` was produced by
/// [`diff`](crate::diff) for the same two snapshots.
pub fn apply_changes<T: Clone>(from: &[T], to: &[T], changes: &[Change]) -> DiffResult<Vec<T>> {
    let mut replacements: Vec<Option<usize>> = vec![None; from.len()];
    for change in changes {
        if let Change::Change { index, from: source } = *change {
            check(source < from.len(), || format!("{change} is outside the old list"))?;
            check(index < to.len(), || format!("{change} is outside the new list"))?;
            replacements[source] = Some(index);
        }
    }

    let slots = layout(from.len(), to.len(), changes)?;
    Ok(slots
        .into_iter()
        .map(|slot| match slot {
            Slot::Old(source) => match replacements[source] {
                Some(index) => to[index].clone(),
                None => from[source].clone(),
            },
            Slot::New(index) => to[index].clone(),
        })
        .collect())
}

/// Apply sectioned records to `from`, reading new content from `to`.
///
/// Returns the items of every section of the resulting collection, in order.
/// A `ReloadSection` replaces the items of the addressed section of the new
/// collection wholesale.
pub fn apply_section_records<S>(
    from: &[S],
    to: &[S],
    records: &[CollectionRecord],
) -> DiffResult<Vec<Vec<S::Item>>>
where
    S: DeltaSection,
    S::Item: Clone,
{
    let mut section_changes = Vec::new();
    let mut reloaded = vec![false; to.len()];
    for record in records {
        match *record {
            CollectionRecord::AddSection { section } => {
                section_changes.push(Change::Add { index: section })
            }
            CollectionRecord::RemoveSection { section } => {
                section_changes.push(Change::Remove { index: section })
            }
            CollectionRecord::MoveSection { section, from } => {
                section_changes.push(Change::Move { index: section, from })
            }
            CollectionRecord::ReloadSection { section } => {
                check(section < to.len(), || format!("{record} is outside the new collection"))?;
                reloaded[section] = true;
            }
            _ => {}
        }
    }

    let slots = layout(from.len(), to.len(), &section_changes)?;
    let mut sections = Vec::with_capacity(to.len());
    for (section, slot) in slots.into_iter().enumerate() {
        let items = match slot {
            Slot::Old(_) if reloaded[section] => to[section].items().to_vec(),
            Slot::Old(old_section) => {
                let changes = item_changes(records, section, old_section);
                apply_changes(from[old_section].items(), to[section].items(), &changes)?
            }
            Slot::New(_) => to[section].items().to_vec(),
        };
        sections.push(items);
    }
    Ok(sections)
}

/// Item records of the section that moved from `old_section` to `section`,
/// translated back into flat records.
fn item_changes(records: &[CollectionRecord], section: usize, old_section: usize) -> Vec<Change> {
    records
        .iter()
        .filter_map(|record| match *record {
            CollectionRecord::AddItem { section: s, index } if s == section => {
                Some(Change::Add { index })
            }
            CollectionRecord::RemoveItem { section: s, index } if s == old_section => {
                Some(Change::Remove { index })
            }
            CollectionRecord::MoveItem { from, to }
                if from.section == old_section && to.section == section =>
            {
                Some(Change::Move {
                    index: to.index,
                    from: from.index,
                })
            }
            CollectionRecord::ChangeItem { from, to }
                if from.section == old_section && to.section == section =>
            {
                Some(Change::Change {
                    index: to.index,
                    from: from.index,
                })
            }
            _ => None,
        })
        .collect()
}

/// Resolve the source of every slot of the new list.
fn layout(old_len: usize, new_len: usize, changes: &[Change]) -> DiffResult<Vec<Slot>> {
    let mut slots: Vec<Option<Slot>> = vec![None; new_len];
    let mut consumed = vec![false; old_len];

    for change in changes {
        match *change {
            Change::Remove { index } => {
                check(index < old_len, || format!("{change} is outside the old list"))?;
                check(!consumed[index], || format!("{change} targets a consumed item"))?;
                consumed[index] = true;
            }
            Change::Add { index } => {
                claim(&mut slots, index, Slot::New(index), change)?;
            }
            Change::Move { index, from } => {
                check(from < old_len, || format!("{change} is outside the old list"))?;
                check(!consumed[from], || format!("{change} targets a consumed item"))?;
                consumed[from] = true;
                claim(&mut slots, index, Slot::Old(from), change)?;
            }
            Change::Change { .. } => {}
        }
    }

    let mut survivors = (0..old_len).filter(|i| !consumed[*i]);
    let mut resolved = Vec::with_capacity(new_len);
    for slot in slots {
        match slot {
            Some(slot) => resolved.push(slot),
            None => {
                let source = survivors.next().ok_or_else(|| {
                    DiffError::InconsistentRecords(format!(
                        "fewer surviving items than free slots in a list of {new_len}"
                    ))
                })?;
                resolved.push(Slot::Old(source));
            }
        }
    }
    check(survivors.next().is_none(), || {
        format!("more surviving items than free slots in a list of {new_len}")
    })?;

    Ok(resolved)
}

fn claim(slots: &mut [Option<Slot>], index: usize, slot: Slot, change: &Change) -> DiffResult<()> {
    check(index < slots.len(), || format!("{change} is outside the new list"))?;
    check(slots[index].is_none(), || format!("{change} targets a filled slot"))?;
    slots[index] = Some(slot);
    Ok(())
}

fn check(condition: bool, message: impl FnOnce() -> String) -> DiffResult<()> {
    if condition {
        Ok(())
    } else {
        Err(DiffError::InconsistentRecords(message()))
    }
}
