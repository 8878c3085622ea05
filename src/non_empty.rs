use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;

/// Parser combinator that rejects an empty string value
///
/// Runs the inner parser and fails with a validation error, tagged with
/// the position where the value started, when the produced string is
/// empty. Non-empty values pass through unchanged.
pub struct NonEmpty<P> {
    parser: P,
}

impl<P> NonEmpty<P> {
    pub fn new(parser: P) -> Self {
        NonEmpty { parser }
    }
}

impl<P> Parser for NonEmpty<P>
where
    P: Parser<Output = String>,
{
    type Output = String;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (value, cursor) = self.parser.parse(cursor)?;
        if value.is_empty() {
            return Err(RowcombError::ValidationFailed {
                position: start,
                message: "expected non-empty field".into(),
            });
        }
        Ok((value, cursor))
    }
}

/// Convenience function to create a NonEmpty parser
pub fn non_empty<P>(parser: P) -> NonEmpty<P>
where
    P: Parser<Output = String>,
{
    NonEmpty::new(parser)
}

/// Extension trait to add .non_empty() method support for string parsers
pub trait NonEmptyExt: Parser<Output = String> + Sized {
    fn non_empty(self) -> NonEmpty<Self> {
        NonEmpty::new(self)
    }
}

/// Implement NonEmptyExt for all string parsers
impl<P> NonEmptyExt for P where P: Parser<Output = String> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::string::string;

    #[test]
    fn test_non_empty_passes_value_through() {
        let cursor = TokenCursor::new(["hello"]);
        let parser = string().non_empty();

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, "hello");
        assert!(cursor.eos());
    }

    #[test]
    fn test_non_empty_rejects_empty_field() {
        let cursor = TokenCursor::new([""]);
        let parser = string().non_empty();

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(
            error,
            RowcombError::ValidationFailed { position: 0, .. }
        ));
        assert_eq!(error.to_string(), "expected non-empty field at field 0");
    }

    #[test]
    fn test_non_empty_position_is_field_start() {
        let cursor = TokenCursor::new(["first", ""]).next();
        let parser = string().non_empty();

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_non_empty_propagates_inner_failure() {
        let cursor = TokenCursor::new(Vec::<String>::new());
        let parser = string().non_empty();

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(error, RowcombError::InsufficientInput { .. }));
    }
}
