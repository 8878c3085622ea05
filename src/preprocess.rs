use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;
use std::rc::Rc;

/// Parser combinator that normalizes remaining fields before parsing
///
/// Every field not yet consumed is mapped through the normalizer, then the
/// inner parser runs from the same position over the rebuilt row. The
/// rebuilt row is carried forward: parsers sequenced after this one also
/// see the normalized fields. Typical use is trimming whitespace ahead of
/// the strict scalar conversions.
pub struct Preprocess<P, F> {
    parser: P,
    normalizer: F,
}

impl<P, F> Preprocess<P, F> {
    pub fn new(parser: P, normalizer: F) -> Self {
        Preprocess { parser, normalizer }
    }
}

impl<P, F> Parser for Preprocess<P, F>
where
    P: Parser,
    F: Fn(&str) -> String,
{
    type Output = P::Output;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let (row, position) = cursor.inner();
        let rebuilt: Rc<[String]> = row
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if i < position {
                    field.clone()
                } else {
                    (self.normalizer)(field)
                }
            })
            .collect();
        self.parser.parse(TokenCursor::from_parts(rebuilt, position))
    }
}

/// Convenience function to create a Preprocess parser
pub fn preprocess<P, F>(parser: P, normalizer: F) -> Preprocess<P, F>
where
    P: Parser,
    F: Fn(&str) -> String,
{
    Preprocess::new(parser, normalizer)
}

/// Extension trait to add .preprocess() method support for parsers
pub trait PreprocessExt: Parser + Sized {
    fn preprocess<F>(self, normalizer: F) -> Preprocess<Self, F>
    where
        F: Fn(&str) -> String,
    {
        Preprocess::new(self, normalizer)
    }
}

/// Implement PreprocessExt for all parsers
impl<P> PreprocessExt for P where P: Parser {}
