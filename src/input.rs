//! Text input reader.
//!
//! Reads records from a line-oriented source, one `name,category,priority` record per line.
//! Empty lines and lines starting with `#` are skipped.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::io;
use std::io::prelude::*;

use log;

use crate::collection::{CapacityError, Collection};
use crate::record::{Record, RecordError};

/// Input reading error.
#[derive(Debug)]
pub enum InputError {
    /// Common I/O error.
    IO(io::Error),
    /// Malformed or invalid record.
    Record {
        /// 1-based line number.
        line: usize,
        source: RecordError,
    },
    /// Input holds more records than the collection fits.
    Capacity(CapacityError),
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(match &self {
            InputError::IO(err) => err,
            InputError::Record { source, .. } => source,
            InputError::Capacity(err) => err,
        })
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            InputError::IO(err) => write!(f, "I/O operation failed: {}", err),
            InputError::Record { line, source } => write!(f, "invalid record at line {}: {}", line, source),
            InputError::Capacity(err) => write!(f, "too many records: {}", err),
        }
    }
}

/// Reads records from `reader` into a new collection.
pub fn read_collection<R: BufRead>(reader: R) -> Result<Collection, InputError> {
    let mut collection = Collection::new();
    extend_collection(&mut collection, reader)?;

    return Ok(collection);
}

/// Appends records read from `reader` to the end of `collection`.
/// Records read before an error stay in the collection.
pub fn extend_collection<R: BufRead>(collection: &mut Collection, reader: R) -> Result<(), InputError> {
    let mut added = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(InputError::IO)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let record: Record = trimmed
            .parse()
            .map_err(|err| InputError::Record { line: idx + 1, source: err })?;
        collection.push(record).map_err(InputError::Capacity)?;
        added += 1;
    }

    log::debug!("read {} records ({} total)", added, collection.len());

    return Ok(());
}
