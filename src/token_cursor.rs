use crate::error::RowcombError;
use std::rc::Rc;

/// Immutable cursor over the fields of one pre-split row
///
/// A cursor pairs the full row with the number of fields consumed so far.
/// Advancing produces a new cursor; the row itself is shared behind an `Rc`,
/// so cloning a cursor never copies field text. Position is 0-based and
/// counts consumed fields, which makes it directly usable in diagnostics.
#[derive(Debug, Clone)]
pub enum TokenCursor {
    Valid { row: Rc<[String]>, position: usize },
    EndOfRow { row: Rc<[String]> },
}

impl TokenCursor {
    pub fn new<I, S>(row: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Rc<[String]> = row.into_iter().map(Into::into).collect();
        Self::from_parts(row, 0)
    }

    pub(crate) fn from_parts(row: Rc<[String]>, position: usize) -> Self {
        if position >= row.len() {
            TokenCursor::EndOfRow { row }
        } else {
            TokenCursor::Valid { row, position }
        }
    }

    /// Get the field at the current cursor position
    ///
    /// Returns an error if the cursor is positioned past the last field
    pub fn value(&self) -> Result<&str, RowcombError> {
        match self {
            TokenCursor::Valid { row, position } => Ok(&row[*position]),
            TokenCursor::EndOfRow { row } => Err(RowcombError::InsufficientInput {
                position: row.len(),
            }),
        }
    }

    /// Advance the cursor past the current field
    ///
    /// If already past the last field, returns a cursor still at the end
    pub fn next(self) -> Self {
        match self {
            TokenCursor::Valid { row, position } => Self::from_parts(row, position + 1),
            end => end,
        }
    }

    /// Count of fields consumed so far
    ///
    /// For end-of-row cursors this equals the row length
    pub fn position(&self) -> usize {
        match self {
            TokenCursor::Valid { position, .. } => *position,
            TokenCursor::EndOfRow { row } => row.len(),
        }
    }

    /// Check if every field has been consumed
    pub fn eos(&self) -> bool {
        matches!(self, TokenCursor::EndOfRow { .. })
    }

    /// The full row, including already-consumed fields
    pub fn source(&self) -> &[String] {
        match self {
            TokenCursor::Valid { row, .. } => row,
            TokenCursor::EndOfRow { row } => row,
        }
    }

    /// The fields not yet consumed
    pub fn remaining(&self) -> &[String] {
        let position = self.position();
        &self.source()[position..]
    }

    /// Consume the cursor and return its shared row and position
    pub(crate) fn inner(self) -> (Rc<[String]>, usize) {
        match self {
            TokenCursor::Valid { row, position } => (row, position),
            TokenCursor::EndOfRow { row } => {
                let position = row.len();
                (row, position)
            }
        }
    }
}
