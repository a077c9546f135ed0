//! `catalog-sort` manages a small in-memory catalog of components and orders it with instrumented
//! comparison sorts.
//!
//! Every algorithm works in place on a [`Collection`] and reports [`Metrics`]: the number of key
//! comparisons it performed and the wall-clock time spent in the algorithm body. The algorithms are
//! the classic quadratic ones, each bound to a single record field:
//!
//! * [`sort_by_name`] - bubble sort, ascending by name;
//! * [`sort_by_category`] - insertion sort, ascending by category, stable;
//! * [`sort_by_priority`] - selection sort, **descending** by priority;
//! * [`search_by_name`] - binary search by name, requires the collection to be sorted by name.
//!
//! The collection holds at most [`MAX_RECORDS`] records. Which field it is currently ordered by
//! is up to the caller to track: the search trusts its precondition and does not verify it.
//!
//! # Example
//!
//! ```
//! use catalog_sort::{search_by_name, sort_by_name, sort_by_priority, Collection, Record, SearchOutcome};
//!
//! let mut collection = Collection::new();
//! collection.push(Record::new("Motor", "propulsao", 9).unwrap()).unwrap();
//! collection.push(Record::new("Chip", "controle", 10).unwrap()).unwrap();
//! collection.push(Record::new("Base", "estrutura", 7).unwrap()).unwrap();
//!
//! let metrics = sort_by_priority(&mut collection);
//! assert_eq!(metrics.comparisons, 3);
//! assert_eq!(collection.get(0).unwrap().name(), "Chip");
//!
//! sort_by_name(&mut collection);
//! let (outcome, metrics) = search_by_name(&collection, "Chip");
//! assert_eq!(outcome, SearchOutcome::FoundAt(1));
//! println!("found after {}", metrics);
//! ```

pub mod collection;
pub mod input;
pub mod metrics;
pub mod record;
pub mod sample;
pub mod search;
pub mod sort;

pub use collection::{CapacityError, Collection, SortKey, MAX_RECORDS};
pub use input::{read_collection, InputError};
pub use metrics::Metrics;
pub use record::{Record, RecordError, MAX_CATEGORY_LEN, MAX_NAME_LEN, MAX_PRIORITY, MIN_PRIORITY};
pub use sample::sample_collection;
pub use search::{search_by_name, SearchOutcome};
pub use sort::{sort_by_category, sort_by_key, sort_by_name, sort_by_priority};
