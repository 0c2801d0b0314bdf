//! Sectioned diff: compare two lists of sections, each holding a list of items.
//!
//! The flat differ runs twice. Once over the sections themselves, treating
//! each section as an atomic item, and once per section that exists on both
//! sides, over that section's items. Item records come first in the output,
//! followed by section records.
//!
//! A section present on both sides whose content changed is described only by
//! its item records; the section-level change record is dropped unless
//! [`DiffConfig::emit_section_changes`] is set.

use delta_types::{Change, CollectionRecord, DeltaSection, Snapshot};
use tracing::debug;

use crate::config::DiffConfig;
use crate::error::{DiffError, DiffResult};
use crate::flat::{self, DiffOutcome};
use crate::index::IdentityIndex;
use crate::projection::{item_record, section_record};

/// Compute the records that turn the sections `from` into `to`, using the
/// default [`DiffConfig`].
pub fn diff_sections<S: DeltaSection>(from: &[S], to: &[S]) -> DiffResult<Vec<CollectionRecord>> {
    diff_sections_with(from, to, &DiffConfig::default())
}

/// Compute the records that turn the sections `from` into `to`.
///
/// Duplicate section identifiers fail the call with
/// [`DiffError::DuplicateIdentifier`]; duplicate item identifiers inside a
/// matched section fail it with [`DiffError::Section`]. No partial record list
/// is returned in either case.
pub fn diff_sections_with<S: DeltaSection>(
    from: &[S],
    to: &[S],
    config: &DiffConfig,
) -> DiffResult<Vec<CollectionRecord>> {
    let section_changes = flat::diff(from, to)?;
    let from_index = IdentityIndex::build(from, Snapshot::From)?;

    let mut records = Vec::new();
    for (section, target) in to.iter().enumerate() {
        // Added sections are covered by their `AddSection` record.
        let Some((old_section, source)) = from_index.get(&target.delta_identifier()) else {
            continue;
        };

        let outcome = flat::diff_with(source.items(), target.items(), config).map_err(|e| {
            DiffError::Section {
                index: section,
                source: Box::new(e),
            }
        })?;

        match outcome {
            DiffOutcome::Reload => records.push(CollectionRecord::ReloadSection { section }),
            DiffOutcome::Changes(set) => records.extend(
                set.into_iter()
                    .map(|change| item_record(change, section, old_section)),
            ),
        }
    }
    let item_records = records.len();

    records.extend(
        section_changes
            .into_iter()
            .filter(|change| {
                config.emit_section_changes || !matches!(change, Change::Change { .. })
            })
            .map(section_record),
    );

    debug!(
        from = from.len(),
        to = to.len(),
        item_records,
        section_records = records.len() - item_records,
        "section diff computed"
    );

    Ok(records)
}
