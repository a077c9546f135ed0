//! Instrumented in-place sorts.
//!
//! Each sort orders a [`Collection`] by a single record field and reports the number of
//! key comparisons it performed together with the time spent in the algorithm body.
//! The algorithms are deliberately quadratic: their comparison counts are part of the
//! contract and are what the [`Metrics`] make observable.

use log;

use crate::collection::{Collection, SortKey};
use crate::metrics::{Metrics, Probe};

/// Sorts the collection by name in ascending byte-wise order using bubble sort.
///
/// Every pass examines each adjacent pair of the unsorted prefix exactly once and there
/// is no early exit, so a collection of length *n* always costs *n*(*n*-1)/2 comparisons.
/// A pair is swapped only if the left name is strictly greater, which keeps equal names
/// in their original relative order.
pub fn sort_by_name(collection: &mut Collection) -> Metrics {
    log::debug!("sorting {} records by name (bubble sort) ...", collection.len());

    let records = collection.as_mut_slice();
    let len = records.len();

    let mut probe = Probe::start();
    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            probe.compare();
            if records[j].name() > records[j + 1].name() {
                records.swap(j, j + 1);
            }
        }
    }
    let metrics = probe.finish();

    log::debug!("sorting by name done ({})", metrics);

    return metrics;
}

/// Sorts the collection by category in ascending byte-wise order using insertion sort.
///
/// Each record is moved left past every predecessor whose category is strictly greater.
/// One comparison is counted per examined predecessor, including the one that stops the
/// scan: an already sorted collection costs *n*-1 comparisons, a reverse sorted one
/// *n*(*n*-1)/2. Records with equal categories keep their relative order.
pub fn sort_by_category(collection: &mut Collection) -> Metrics {
    log::debug!("sorting {} records by category (insertion sort) ...", collection.len());

    let records = collection.as_mut_slice();

    let mut probe = Probe::start();
    for i in 1..records.len() {
        let mut slot = i;
        while slot > 0 {
            probe.compare();
            if records[slot - 1].category() > records[i].category() {
                slot -= 1;
            } else {
                break;
            }
        }
        // shift the greater predecessors one position right and put the key in the vacated slot
        records[slot..=i].rotate_right(1);
    }
    let metrics = probe.finish();

    log::debug!("sorting by category done ({})", metrics);

    return metrics;
}

/// Sorts the collection by priority in descending order using selection sort.
///
/// For each position the remaining suffix is scanned for the highest priority, one
/// comparison per scanned record, so the cost is always *n*(*n*-1)/2 regardless of the
/// input order. The found record is swapped into place unless it is already there.
/// Equal priorities may be reordered.
pub fn sort_by_priority(collection: &mut Collection) -> Metrics {
    log::debug!("sorting {} records by priority (selection sort) ...", collection.len());

    let records = collection.as_mut_slice();
    let len = records.len();

    let mut probe = Probe::start();
    for i in 0..len.saturating_sub(1) {
        let mut max_idx = i;
        for j in i + 1..len {
            probe.compare();
            if records[j].priority() > records[max_idx].priority() {
                max_idx = j;
            }
        }
        if max_idx != i {
            records.swap(i, max_idx);
        }
    }
    let metrics = probe.finish();

    log::debug!("sorting by priority done ({})", metrics);

    return metrics;
}

/// Sorts the collection using the algorithm assigned to `key`.
///
/// # Arguments
/// * `collection` - Collection to be reordered in place
/// * `key` - Field to order by: [`SortKey::Name`] calls [`sort_by_name`],
///   [`SortKey::Category`] calls [`sort_by_category`], [`SortKey::Priority`] calls [`sort_by_priority`]
pub fn sort_by_key(collection: &mut Collection, key: SortKey) -> Metrics {
    match key {
        SortKey::Name => sort_by_name(collection),
        SortKey::Category => sort_by_category(collection),
        SortKey::Priority => sort_by_priority(collection),
    }
}

#[cfg(test)]
mod test {
    use rand::seq::SliceRandom;
    use rand::Rng;
    use rstest::*;

    use super::{sort_by_category, sort_by_key, sort_by_name, sort_by_priority};
    use crate::collection::{Collection, SortKey, MAX_RECORDS};
    use crate::metrics::Metrics;
    use crate::record::Record;

    fn triangular(n: usize) -> u64 {
        (n * n.saturating_sub(1) / 2) as u64
    }

    fn collection_of(records: Vec<(&str, &str, i64)>) -> Collection {
        Collection::try_from(Vec::from_iter(
            records
                .into_iter()
                .map(|(name, category, priority)| Record::new(name, category, priority).unwrap()),
        ))
        .unwrap()
    }

    fn random_collection(len: usize) -> Collection {
        let mut rng = rand::thread_rng();
        let mut collection = Collection::new();
        for i in 0..len {
            // few distinct categories and priorities to get plenty of ties
            let name = format!("item-{:02}", rng.gen_range(0..len.max(1)));
            let category = format!("cat-{}", rng.gen_range(0..4));
            let record = Record::new(format!("{} {}", name, i), category, rng.gen_range(1..=10)).unwrap();
            collection.push(record).unwrap();
        }

        return collection;
    }

    fn names(collection: &Collection) -> Vec<&str> {
        Vec::from_iter(collection.iter().map(|r| r.name()))
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    #[case(MAX_RECORDS)]
    fn test_sort_by_name(#[case] len: usize) {
        let mut collection = random_collection(len);

        let metrics = sort_by_name(&mut collection);

        assert_eq!(collection.len(), len);
        assert!(collection.is_ordered_by(SortKey::Name));
        assert_eq!(metrics.comparisons, triangular(len));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    #[case(MAX_RECORDS)]
    fn test_sort_by_category(#[case] len: usize) {
        let mut collection = random_collection(len);

        let metrics = sort_by_category(&mut collection);

        assert_eq!(collection.len(), len);
        assert!(collection.is_ordered_by(SortKey::Category));
        assert!(metrics.comparisons <= triangular(len));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(7)]
    #[case(MAX_RECORDS)]
    fn test_sort_by_priority(#[case] len: usize) {
        let mut collection = random_collection(len);

        let metrics = sort_by_priority(&mut collection);

        assert_eq!(collection.len(), len);
        assert!(collection.is_ordered_by(SortKey::Priority));
        assert_eq!(metrics.comparisons, triangular(len));
    }

    #[rstest]
    #[case(SortKey::Name)]
    #[case(SortKey::Category)]
    #[case(SortKey::Priority)]
    fn test_sort_keeps_records(#[case] key: SortKey) {
        let mut collection = random_collection(MAX_RECORDS);
        let mut before = Vec::from_iter(collection.iter().cloned());

        sort_by_key(&mut collection, key);
        assert!(collection.is_ordered_by(key));

        let mut after = Vec::from_iter(collection.iter().cloned());
        before.sort_by(|a, b| a.name().cmp(b.name()));
        after.sort_by(|a, b| a.name().cmp(b.name()));
        assert_eq!(after, before);
    }

    #[rstest]
    #[case(SortKey::Name)]
    #[case(SortKey::Category)]
    #[case(SortKey::Priority)]
    fn test_sort_trivial_collections(#[case] key: SortKey) {
        let mut empty = Collection::new();
        assert_eq!(sort_by_key(&mut empty, key).comparisons, 0);
        assert!(empty.is_empty());

        let mut single = collection_of(vec![("Chip Central", "controle", 10)]);
        let expected = single.clone();
        assert_eq!(sort_by_key(&mut single, key).comparisons, 0);
        assert_eq!(single, expected);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(8, 7)]
    #[case(MAX_RECORDS, MAX_RECORDS as u64 - 1)]
    fn test_sort_by_category_sorted_input(#[case] len: usize, #[case] expected_comparisons: u64) {
        let mut collection = Collection::new();
        for i in 0..len {
            let record = Record::new(format!("item {}", i), format!("cat-{:02}", i), 5).unwrap();
            collection.push(record).unwrap();
        }

        let metrics = sort_by_category(&mut collection);
        assert_eq!(metrics.comparisons, expected_comparisons);
    }

    #[rstest]
    #[case(2)]
    #[case(8)]
    #[case(MAX_RECORDS)]
    fn test_sort_by_category_reversed_input(#[case] len: usize) {
        let mut collection = Collection::new();
        for i in (0..len).rev() {
            let record = Record::new(format!("item {}", i), format!("cat-{:02}", i), 5).unwrap();
            collection.push(record).unwrap();
        }

        let metrics = sort_by_category(&mut collection);
        assert_eq!(metrics.comparisons, triangular(len));

        let categories = Vec::from_iter(collection.iter().map(|r| r.category().to_string()));
        let expected = Vec::from_iter((0..len).map(|i| format!("cat-{:02}", i)));
        assert_eq!(categories, expected);
    }

    #[test]
    fn test_sort_by_category_stability() {
        let mut records = Vec::new();
        for category in ["suporte", "controle", "propulsao", "estrutura"] {
            for i in 0..5 {
                records.push(Record::new(format!("{} {}", category, i), category, 1).unwrap());
            }
        }
        records.shuffle(&mut rand::thread_rng());

        let mut collection = Collection::try_from(records.clone()).unwrap();
        sort_by_category(&mut collection);

        // the standard library sort is stable, so it gives the expected order of ties
        records.sort_by(|a, b| a.category().cmp(b.category()));
        assert_eq!(Vec::from_iter(collection), records);
    }

    #[test]
    fn test_sort_by_priority_is_input_independent() {
        let mut ascending = Collection::new();
        let mut descending = Collection::new();
        for i in 1..=10 {
            ascending.push(Record::new(format!("a{}", i), "x", i).unwrap()).unwrap();
            descending.push(Record::new(format!("d{}", i), "x", 11 - i).unwrap()).unwrap();
        }

        assert_eq!(sort_by_priority(&mut ascending).comparisons, triangular(10));
        assert_eq!(sort_by_priority(&mut descending).comparisons, triangular(10));
        assert!(ascending.is_ordered_by(SortKey::Priority));
        assert!(descending.is_ordered_by(SortKey::Priority));
    }

    #[test]
    fn test_sort_by_name_idempotence() {
        let mut collection = random_collection(MAX_RECORDS);

        sort_by_name(&mut collection);
        let once = collection.clone();
        sort_by_name(&mut collection);

        assert_eq!(collection, once);
    }

    #[test]
    fn test_sort_by_name_byte_order() {
        let mut collection = collection_of(vec![("b", "x", 1), ("B", "x", 1), ("a", "x", 1), ("Ab", "x", 1)]);

        sort_by_name(&mut collection);
        assert_eq!(names(&collection), vec!["Ab", "B", "a", "b"]);
    }

    #[test]
    fn test_sort_sequence() {
        let mut collection =
            collection_of(vec![("Motor", "propulsao", 9), ("Chip", "controle", 10), ("Base", "estrutura", 7)]);

        let metrics: Metrics = sort_by_priority(&mut collection);
        assert_eq!(names(&collection), vec!["Chip", "Motor", "Base"]);
        assert_eq!(metrics.comparisons, 3);

        let metrics = sort_by_name(&mut collection);
        assert_eq!(names(&collection), vec!["Base", "Chip", "Motor"]);
        assert_eq!(metrics.comparisons, 3);
    }
}
