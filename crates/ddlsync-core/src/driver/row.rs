use crate::{err, Result};

/// A single result row, with every cell read back as text.
///
/// Introspection queries only need names, type spellings, flags and default
/// expressions, so drivers render each cell as an optional string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `index`, `None` for SQL `NULL` or a missing cell.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|cell| cell.as_deref())
    }

    /// Returns the cell at `index`, failing on SQL `NULL`.
    pub fn get_str(&self, index: usize) -> Result<&str> {
        match self.cells.get(index) {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(err!("unexpected NULL in result column {index}")),
            None => Err(err!(
                "result column {index} out of range; row has {} columns",
                self.cells.len()
            )),
        }
    }
}

impl<S: Into<String>> FromIterator<Option<S>> for Row {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Row::new(iter.into_iter().map(|cell| cell.map(Into::into)).collect())
    }
}
