use super::error::RowcombError;
use super::parser::Parser;
use super::token_cursor::TokenCursor;

/// Parser that consumes and returns a single raw field
///
/// This is the atomic consumer every typed parser builds on: it takes
/// exactly one field, advances the position by one and yields the field's
/// text unchanged. On an exhausted row it fails with `InsufficientInput`
/// at the current position without advancing.
pub struct StringParser;

impl StringParser {
    pub fn new() -> Self {
        StringParser
    }
}

/// Convenience function to create a StringParser
pub fn string() -> StringParser {
    StringParser::new()
}

impl Parser for StringParser {
    type Output = String;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let text = cursor.value()?.to_owned();
        Ok((text, cursor.next()))
    }
}
