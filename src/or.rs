use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Biased-left ordered choice: if the first parser succeeds its outcome is
/// final, whatever the second would have produced. If it fails, the second
/// parser runs from the same pre-branch cursor rather than from any partial
/// consumption by the first, and its outcome (success or failure) is final.
/// There is no further fallback beyond the two branches; chain `.or()` calls
/// for more alternatives.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<P1, P2, O> Parser for Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        match self.parser1.parse(cursor.clone()) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt: Parser + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<P> OrExt for P where P: Parser {}

/// Convenience function to create an Or parser
pub fn or<P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<Output = O>,
    P2: Parser<Output = O>,
{
    Or::new(parser1, parser2)
}
