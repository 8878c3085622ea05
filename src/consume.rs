use super::error::RowcombError;
use super::parser::Parser;
use super::token_cursor::TokenCursor;

/// Parser that drops a fixed number of fields without producing a value
///
/// On a shortfall the reported position is the nominal `position + n` the
/// parser would have reached, which names the field count the row was
/// expected to hold; no fields are actually dropped by a failure.
pub struct ConsumeParser {
    count: usize,
}

impl ConsumeParser {
    pub fn new(count: usize) -> Self {
        ConsumeParser { count }
    }
}

/// Convenience function to create a ConsumeParser
pub fn consume(count: usize) -> ConsumeParser {
    ConsumeParser::new(count)
}

impl Parser for ConsumeParser {
    type Output = ();

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let (row, position) = cursor.inner();
        if row.len() - position < self.count {
            return Err(RowcombError::InsufficientInput {
                position: position + self.count,
            });
        }
        Ok(((), TokenCursor::from_parts(row, position + self.count)))
    }
}

/// Parser that drops every remaining field
///
/// Always succeeds, leaving the cursor at the end of the row.
pub struct ConsumeRestParser;

impl ConsumeRestParser {
    pub fn new() -> Self {
        ConsumeRestParser
    }
}

/// Convenience function to create a ConsumeRestParser
pub fn consume_rest() -> ConsumeRestParser {
    ConsumeRestParser::new()
}

impl Parser for ConsumeRestParser {
    type Output = ();

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let (row, _) = cursor.inner();
        let end = row.len();
        Ok(((), TokenCursor::from_parts(row, end)))
    }
}
