use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;

/// Parser combinator that requires a string value of an exact length
///
/// Lengths are counted in `char`s. Failure is a validation error tagged
/// with the position where the value started.
pub struct OfLength<P> {
    parser: P,
    length: usize,
}

impl<P> OfLength<P> {
    pub fn new(parser: P, length: usize) -> Self {
        OfLength { parser, length }
    }
}

impl<P> Parser for OfLength<P>
where
    P: Parser<Output = String>,
{
    type Output = String;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (value, cursor) = self.parser.parse(cursor)?;
        let actual = value.chars().count();
        if actual != self.length {
            return Err(RowcombError::ValidationFailed {
                position: start,
                message: format!(
                    "expected field of length {}, found '{}' of length {}",
                    self.length, value, actual
                )
                .into(),
            });
        }
        Ok((value, cursor))
    }
}

/// Convenience function to create an OfLength parser
pub fn of_length<P>(parser: P, length: usize) -> OfLength<P>
where
    P: Parser<Output = String>,
{
    OfLength::new(parser, length)
}

/// Extension trait to add .of_length() method support for string parsers
pub trait OfLengthExt: Parser<Output = String> + Sized {
    fn of_length(self, length: usize) -> OfLength<Self> {
        OfLength::new(self, length)
    }
}

/// Implement OfLengthExt for all string parsers
impl<P> OfLengthExt for P where P: Parser<Output = String> {}

/// Parser combinator that requires an exact length only when a value is present
///
/// An absent value passes through untouched; a present one is validated
/// exactly as `of_length`, with a message noting that the field is
/// optional.
pub struct OfLengthIfPresent<P> {
    parser: P,
    length: usize,
}

impl<P> OfLengthIfPresent<P> {
    pub fn new(parser: P, length: usize) -> Self {
        OfLengthIfPresent { parser, length }
    }
}

impl<P> Parser for OfLengthIfPresent<P>
where
    P: Parser<Output = Option<String>>,
{
    type Output = Option<String>;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (value, cursor) = self.parser.parse(cursor)?;
        match value {
            None => Ok((None, cursor)),
            Some(text) => {
                let actual = text.chars().count();
                if actual != self.length {
                    return Err(RowcombError::ValidationFailed {
                        position: start,
                        message: format!(
                            "expected optional field of length {}, found '{}' of length {}",
                            self.length, text, actual
                        )
                        .into(),
                    });
                }
                Ok((Some(text), cursor))
            }
        }
    }
}

/// Convenience function to create an OfLengthIfPresent parser
pub fn of_length_if_present<P>(parser: P, length: usize) -> OfLengthIfPresent<P>
where
    P: Parser<Output = Option<String>>,
{
    OfLengthIfPresent::new(parser, length)
}

/// Extension trait to add .of_length_if_present() method support for
/// optional string parsers
pub trait OfLengthIfPresentExt: Parser<Output = Option<String>> + Sized {
    fn of_length_if_present(self, length: usize) -> OfLengthIfPresent<Self> {
        OfLengthIfPresent::new(self, length)
    }
}

/// Implement OfLengthIfPresentExt for all optional string parsers
impl<P> OfLengthIfPresentExt for P where P: Parser<Output = Option<String>> {}
