//! Resolving numbered user choices against fetched collections.
//!
//! Lists are shown to the user numbered from 1. A [`FetchedList`] is the
//! snapshot that was rendered; the number the user types afterwards is
//! resolved against that same snapshot and never against a fresh fetch.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("no entry numbered {index} (choose 1-{len})")]
    OutOfRange { index: String, len: usize },
}

/// Point-in-time snapshot of a server-returned, ordered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedList<T> {
    items: Vec<T>,
}

impl<T> FetchedList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items paired with the 1-based number shown to the user.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &T)> {
        self.items.iter().enumerate().map(|(i, item)| (i + 1, item))
    }

    /// Resolve a raw, 1-based index typed by the user.
    pub fn select(&self, raw: &str) -> Result<&T, SelectionError> {
        select(self, raw)
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> From<Vec<T>> for FetchedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Return the element at the 1-based position `raw` in `list`.
///
/// Any integer outside `1..=len` is out of range, including ones too large
/// to fit a machine word.
pub fn select<'a, T>(list: &'a FetchedList<T>, raw: &str) -> Result<&'a T, SelectionError> {
    let trimmed = raw.trim();
    let negative = trimmed.starts_with('-');
    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SelectionError::NotANumber(trimmed.to_string()));
    }

    let out_of_range = || SelectionError::OutOfRange {
        index: trimmed.to_string(),
        len: list.len(),
    };

    let position = digits
        .parse::<usize>()
        .ok()
        .filter(|_| !negative)
        .and_then(|i| i.checked_sub(1))
        .ok_or_else(out_of_range)?;

    list.items.get(position).ok_or_else(out_of_range)
}
