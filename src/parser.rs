use super::error::RowcombError;
use super::token_cursor::TokenCursor;

/// Core parser trait for field combinators
pub trait Parser: Sized {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and the advanced cursor on success,
    /// or Err if the parse fails. Failures never consume fields: the caller
    /// still holds the cursor it passed in (cursors are cheap clones).
    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError>;
}
