//! Catalog record.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

/// Maximum record name length in bytes.
pub const MAX_NAME_LEN: usize = 29;
/// Maximum record category length in bytes.
pub const MAX_CATEGORY_LEN: usize = 19;
/// Lowest accepted priority.
pub const MIN_PRIORITY: u8 = 1;
/// Highest accepted priority.
pub const MAX_PRIORITY: u8 = 10;

/// Record validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Name exceeds [`MAX_NAME_LEN`] bytes.
    NameTooLong(usize),
    /// Category exceeds [`MAX_CATEGORY_LEN`] bytes.
    CategoryTooLong(usize),
    /// Name or category contains a line break.
    LineBreak,
    /// Priority is outside of [`MIN_PRIORITY`]..=[`MAX_PRIORITY`].
    PriorityOutOfRange(i64),
    /// Text representation can't be parsed.
    Format(String),
}

impl Error for RecordError {}

impl Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self {
            RecordError::NameTooLong(len) => {
                write!(f, "name is {} bytes long, at most {} allowed", len, MAX_NAME_LEN)
            }
            RecordError::CategoryTooLong(len) => {
                write!(f, "category is {} bytes long, at most {} allowed", len, MAX_CATEGORY_LEN)
            }
            RecordError::LineBreak => write!(f, "name and category must not contain line breaks"),
            RecordError::PriorityOutOfRange(priority) => write!(
                f,
                "priority {} out of range, must be between {} and {}",
                priority, MIN_PRIORITY, MAX_PRIORITY
            ),
            RecordError::Format(err) => write!(f, "record format error: {}", err),
        }
    }
}

/// A named, categorized, prioritized catalog entry.
///
/// Records are plain values: they have no identity beyond their position in a
/// [`Collection`](crate::Collection). Names and categories compare byte-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    category: String,
    priority: u8,
}

impl Record {
    /// Creates a validated record.
    ///
    /// # Arguments
    /// * `name` - Record name, at most [`MAX_NAME_LEN`] bytes
    /// * `category` - Record category, at most [`MAX_CATEGORY_LEN`] bytes
    /// * `priority` - Priority between [`MIN_PRIORITY`] and [`MAX_PRIORITY`]
    pub fn new(name: impl Into<String>, category: impl Into<String>, priority: i64) -> Result<Self, RecordError> {
        let name = name.into();
        let category = category.into();

        if name.contains('\n') || category.contains('\n') {
            return Err(RecordError::LineBreak);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(RecordError::NameTooLong(name.len()));
        }
        if category.len() > MAX_CATEGORY_LEN {
            return Err(RecordError::CategoryTooLong(category.len()));
        }
        if priority < MIN_PRIORITY as i64 || priority > MAX_PRIORITY as i64 {
            return Err(RecordError::PriorityOutOfRange(priority));
        }

        return Ok(Record {
            name,
            category,
            priority: priority as u8,
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.name, self.category, self.priority)
    }
}

/// Parses `name,category,priority` lines.
///
/// Fields are split from the right, so a name may itself contain commas.
impl FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim_end_matches(&['\r', '\n'][..]).rsplitn(3, ',');

        let priority = parts.next();
        let category = parts.next();
        let name = parts.next();

        match (name, category, priority) {
            (Some(name), Some(category), Some(priority)) => {
                let priority = priority
                    .trim()
                    .parse::<i64>()
                    .map_err(|err| RecordError::Format(format!("priority field: {}", err)))?;
                Record::new(name.trim(), category.trim(), priority)
            }
            _ => Err(RecordError::Format("expected 3 comma separated columns".to_string())),
        }
    }
}
