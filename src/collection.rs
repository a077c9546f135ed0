//! Capacity-bounded record collection.

use std::error::Error;
use std::fmt;
use std::fmt::Display;

use crate::record::Record;

/// Maximum number of records a collection holds.
pub const MAX_RECORDS: usize = 20;

/// Collection capacity overflow error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    capacity: usize,
}

impl CapacityError {
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Error for CapacityError {}

impl Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "collection capacity reached ({} records)", self.capacity)
    }
}

/// Record field a collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by name.
    Name,
    /// Ascending by category.
    Category,
    /// Descending by priority.
    Priority,
}

impl Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Category => write!(f, "category"),
            SortKey::Priority => write!(f, "priority"),
        }
    }
}

/// Ordered sequence of at most [`MAX_RECORDS`] records.
///
/// The collection owns its records. It is reordered in place by the
/// [`sort`](crate::sort) operations and never grows past its capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    limit: usize,
    inner: Vec<Record>,
}

impl Collection {
    /// Creates an empty collection with preallocated storage.
    pub fn new() -> Self {
        Collection {
            limit: MAX_RECORDS,
            inner: Vec::with_capacity(MAX_RECORDS),
        }
    }

    /// Appends a record to the end of the collection.
    /// Fails without modifying the collection if it is full.
    pub fn push(&mut self, record: Record) -> Result<(), CapacityError> {
        if self.is_full() {
            return Err(CapacityError { capacity: self.limit });
        }
        self.inner.push(record);

        return Ok(());
    }

    /// Returns collection length
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Checks if the collection reached the limit.
    pub fn is_full(&self) -> bool {
        self.inner.len() >= self.limit
    }

    pub fn capacity(&self) -> usize {
        self.limit
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.inner.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.inner.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        self.inner.as_slice()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Record] {
        self.inner.as_mut_slice()
    }

    /// Checks whether the collection is currently ordered by `key`, in the direction
    /// the corresponding sort produces. Runs in linear time; searches never call it.
    pub fn is_ordered_by(&self, key: SortKey) -> bool {
        self.inner.windows(2).all(|pair| match key {
            SortKey::Name => pair[0].name() <= pair[1].name(),
            SortKey::Category => pair[0].category() <= pair[1].category(),
            SortKey::Priority => pair[0].priority() >= pair[1].priority(),
        })
    }
}

impl Default for Collection {
    fn default() -> Self {
        Collection::new()
    }
}

impl TryFrom<Vec<Record>> for Collection {
    type Error = CapacityError;

    fn try_from(records: Vec<Record>) -> Result<Self, Self::Error> {
        let mut collection = Collection::new();
        for record in records {
            collection.push(record)?;
        }

        return Ok(collection);
    }
}

impl IntoIterator for Collection {
    type Item = Record;
    type IntoIter = <Vec<Record> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::{Collection, SortKey, MAX_RECORDS};
    use crate::record::Record;

    fn record(name: &str, category: &str, priority: i64) -> Record {
        Record::new(name, category, priority).unwrap()
    }

    #[test]
    fn test_collection_limit() {
        let mut collection = Collection::new();
        assert_eq!(collection.is_empty(), true);

        for i in 0..MAX_RECORDS {
            assert_eq!(collection.is_full(), false);
            collection.push(record(&format!("item {}", i), "x", 1)).unwrap();
        }
        assert_eq!(collection.is_full(), true);
        assert_eq!(collection.len(), MAX_RECORDS);

        let err = collection.push(record("overflow", "x", 1)).unwrap_err();
        assert_eq!(err.capacity(), MAX_RECORDS);
        assert_eq!(collection.len(), MAX_RECORDS);
        assert_eq!(collection.get(MAX_RECORDS - 1).unwrap().name(), "item 19");

        collection.clear();
        assert_eq!(collection.is_empty(), true);
        assert_eq!(collection.capacity(), MAX_RECORDS);
    }

    #[test]
    fn test_collection_try_from() {
        let records = Vec::from_iter((0..MAX_RECORDS + 1).map(|i| record(&i.to_string(), "x", 1)));

        assert!(Collection::try_from(records[..MAX_RECORDS].to_vec()).is_ok());
        assert!(Collection::try_from(records).is_err());
    }

    #[test]
    fn test_collection_keeps_insertion_order() {
        let collection =
            Collection::try_from(vec![record("b", "x", 1), record("a", "y", 2), record("c", "z", 3)]).unwrap();

        let names = Vec::from_iter(collection.iter().map(|r| r.name().to_string()));
        assert_eq!(names, vec!["b", "a", "c"]);

        let owned = Vec::from_iter(collection);
        assert_eq!(owned[1], record("a", "y", 2));
    }

    #[rstest]
    #[case(vec![], SortKey::Name, true)]
    #[case(vec![("a", "x", 1)], SortKey::Priority, true)]
    #[case(vec![("a", "y", 1), ("a", "x", 2), ("b", "x", 3)], SortKey::Name, true)]
    #[case(vec![("b", "x", 1), ("a", "x", 2)], SortKey::Name, false)]
    #[case(vec![("b", "x", 1), ("a", "y", 2)], SortKey::Category, true)]
    #[case(vec![("b", "y", 1), ("a", "x", 2)], SortKey::Category, false)]
    #[case(vec![("b", "x", 9), ("a", "x", 9), ("c", "x", 1)], SortKey::Priority, true)]
    #[case(vec![("b", "x", 1), ("a", "x", 2)], SortKey::Priority, false)]
    fn test_is_ordered_by(#[case] records: Vec<(&str, &str, i64)>, #[case] key: SortKey, #[case] expected: bool) {
        let records = Vec::from_iter(records.into_iter().map(|(n, c, p)| record(n, c, p)));
        let collection = Collection::try_from(records).unwrap();

        assert_eq!(collection.is_ordered_by(key), expected);
    }
}
