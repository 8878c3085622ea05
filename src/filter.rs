use crate::error::RowcombError;
use crate::parser::Parser;
use crate::token_cursor::TokenCursor;
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// This is the custom-validator hook: any post-condition not covered by the
/// built-in validators can be expressed as a predicate with a message. A
/// rejected value produces an explicit failure at the position where the
/// value started.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<P, F, T> Parser for FilterParser<P, F>
where
    P: Parser<Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (value, new_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, new_cursor))
        } else {
            Err(RowcombError::ExplicitFailure {
                position: start,
                message: self.error_message.clone(),
            })
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt: Parser {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<P: Parser> FilterExt for P {}

/// Convenience function to create a filtered parser
pub fn filter<P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
