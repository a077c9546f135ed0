//! Instrumented binary search.

use std::cmp::Ordering;

use log;

use crate::collection::Collection;
use crate::metrics::{Metrics, Probe};

/// Binary search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Index of a record with the requested name.
    FoundAt(usize),
    /// No record with the requested name was met.
    NotFound,
}

impl SearchOutcome {
    pub fn index(&self) -> Option<usize> {
        match self {
            SearchOutcome::FoundAt(index) => Some(*index),
            SearchOutcome::NotFound => None,
        }
    }
}

/// Looks up a record by name using iterative binary search.
///
/// The collection **must** be sorted by name in ascending order (see
/// [`sort_by_name`](crate::sort::sort_by_name)), otherwise the result is undefined: a
/// present record may be reported as missing or vice versa. The ordering is not verified
/// since that would cost a linear scan; callers that can't track it themselves may use
/// [`Collection::is_ordered_by`] before searching.
///
/// If several records share the name any one of their indices may be returned.
/// One comparison is counted per probed record.
///
/// # Arguments
/// * `collection` - Collection sorted by name
/// * `name` - Name to look for, compared byte-wise
pub fn search_by_name(collection: &Collection, name: &str) -> (SearchOutcome, Metrics) {
    log::debug!("searching for '{}' among {} records ...", name, collection.len());

    let records = collection.as_slice();

    let mut probe = Probe::start();
    let mut outcome = SearchOutcome::NotFound;
    if !records.is_empty() {
        let mut low = 0;
        let mut high = records.len() - 1;

        while low <= high {
            let mid = low + (high - low) / 2;
            probe.compare();

            match records[mid].name().cmp(name) {
                Ordering::Equal => {
                    outcome = SearchOutcome::FoundAt(mid);
                    break;
                }
                Ordering::Less => low = mid + 1,
                Ordering::Greater => match mid.checked_sub(1) {
                    Some(new_high) => high = new_high,
                    // the name is less than every record
                    None => break,
                },
            }
        }
    }
    let metrics = probe.finish();

    log::debug!("search for '{}' done: {:?} ({})", name, outcome, metrics);

    return (outcome, metrics);
}
