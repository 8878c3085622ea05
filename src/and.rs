use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics. The destructuring pattern is explicit
/// about the parsing order.
///
/// Example:
/// ```
/// use rowcomb::and::AndExt;
/// use rowcomb::parser::Parser;
/// use rowcomb::scalar::i64;
/// use rowcomb::string::string;
/// use rowcomb::token_cursor::TokenCursor;
///
/// let cursor = TokenCursor::new(["widget", "12"]);
/// let ((name, count), cursor) = string().and(i64()).parse(cursor).unwrap();
/// assert_eq!(name, "widget");
/// assert_eq!(count, 12);
/// assert!(cursor.eos());
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<P1, P2> Parser for And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser,
    P2: Parser,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt: Parser + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<P> AndExt for P where P: Parser {}
