use super::parser::Parser;
use crate::error::RowcombError;
use crate::split::split_delimited;
use crate::token_cursor::TokenCursor;

/// Parser combinator that decomposes one string value into sub-fields
///
/// After the inner parser produces its string, the value is split on the
/// delimiter with quoting honored. The empty string yields an empty
/// sequence rather than one empty sub-field. No additional fields are
/// consumed from the outer row: the decomposition operates only on the
/// single already-consumed field.
pub struct Delimited<P> {
    parser: P,
    delimiter: char,
}

impl<P> Delimited<P> {
    pub fn new(parser: P, delimiter: char) -> Self {
        Delimited { parser, delimiter }
    }
}

impl<P> Parser for Delimited<P>
where
    P: Parser<Output = String>,
{
    type Output = Vec<String>;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let (value, cursor) = self.parser.parse(cursor)?;
        if value.is_empty() {
            return Ok((Vec::new(), cursor));
        }
        Ok((split_delimited(&value, self.delimiter), cursor))
    }
}

/// Convenience function to create a Delimited parser
pub fn split_on<P>(parser: P, delimiter: char) -> Delimited<P>
where
    P: Parser<Output = String>,
{
    Delimited::new(parser, delimiter)
}

/// Extension trait to add .split_on() method support for string parsers
pub trait SplitOnExt: Parser<Output = String> + Sized {
    fn split_on(self, delimiter: char) -> Delimited<Self> {
        Delimited::new(self, delimiter)
    }
}

/// Implement SplitOnExt for all string parsers
impl<P> SplitOnExt for P where P: Parser<Output = String> {}
