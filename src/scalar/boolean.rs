use crate::error::RowcombError;
use crate::parser::Parser;
use crate::string::string;
use crate::token_cursor::TokenCursor;

/// Parser that converts one field to a boolean
///
/// Strict conversion: only the exact texts `true` and `false` are accepted.
pub struct BooleanParser;

impl BooleanParser {
    pub fn new() -> Self {
        BooleanParser
    }
}

/// Convenience function to create a BooleanParser
pub fn boolean() -> BooleanParser {
    BooleanParser::new()
}

impl Parser for BooleanParser {
    type Output = bool;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (text, cursor) = string().parse(cursor)?;
        match text.parse::<bool>() {
            Ok(value) => Ok((value, cursor)),
            Err(_) => Err(RowcombError::ConversionFailed {
                position: start,
                expected: "bool".into(),
                text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_true() {
        let cursor = TokenCursor::new(["true", "x"]);
        let (value, cursor) = boolean().parse(cursor).unwrap();
        assert!(value);
        assert_eq!(cursor.value().unwrap(), "x");
    }

    #[test]
    fn test_boolean_false() {
        let cursor = TokenCursor::new(["false"]);
        let (value, cursor) = boolean().parse(cursor).unwrap();
        assert!(!value);
        assert!(cursor.eos());
    }

    #[test]
    fn test_boolean_rejects_capitalized() {
        let cursor = TokenCursor::new(["True"]);
        let error = boolean().parse(cursor).unwrap_err();
        assert_eq!(error.to_string(), "cannot convert 'True' to bool at field 0");
    }

    #[test]
    fn test_boolean_rejects_numeric() {
        let cursor = TokenCursor::new(["1"]);
        let error = boolean().parse(cursor).unwrap_err();
        assert!(matches!(
            error,
            RowcombError::ConversionFailed { position: 0, .. }
        ));
    }

    #[test]
    fn test_boolean_end_of_row() {
        let cursor = TokenCursor::new(Vec::<String>::new());
        let error = boolean().parse(cursor).unwrap_err();
        assert!(matches!(error, RowcombError::InsufficientInput { .. }));
    }
}
