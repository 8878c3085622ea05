use crate::error::RowcombError;
use crate::parser::Parser;
use crate::string::string;
use crate::token_cursor::TokenCursor;

/// Parser that converts one field to a single character
///
/// The field must be exactly one `char` long; anything else, including the
/// empty field, is a conversion failure.
pub struct CharacterParser;

impl CharacterParser {
    pub fn new() -> Self {
        CharacterParser
    }
}

/// Convenience function to create a CharacterParser
pub fn character() -> CharacterParser {
    CharacterParser::new()
}

impl Parser for CharacterParser {
    type Output = char;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (text, cursor) = string().parse(cursor)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok((ch, cursor)),
            _ => Err(RowcombError::ConversionFailed {
                position: start,
                expected: "char".into(),
                text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_success() {
        let cursor = TokenCursor::new(["x", "rest"]);
        let (ch, cursor) = character().parse(cursor).unwrap();
        assert_eq!(ch, 'x');
        assert_eq!(cursor.value().unwrap(), "rest");
    }

    #[test]
    fn test_character_multibyte() {
        let cursor = TokenCursor::new(["ñ"]);
        let (ch, cursor) = character().parse(cursor).unwrap();
        assert_eq!(ch, 'ñ');
        assert!(cursor.eos());
    }

    #[test]
    fn test_character_rejects_empty() {
        let cursor = TokenCursor::new([""]);
        let error = character().parse(cursor).unwrap_err();
        assert_eq!(error.to_string(), "cannot convert '' to char at field 0");
    }

    #[test]
    fn test_character_rejects_long_text() {
        let cursor = TokenCursor::new(["ab"]);
        let error = character().parse(cursor).unwrap_err();
        assert!(matches!(
            error,
            RowcombError::ConversionFailed { position: 0, .. }
        ));
    }

    #[test]
    fn test_character_end_of_row() {
        let cursor = TokenCursor::new(Vec::<String>::new());
        let error = character().parse(cursor).unwrap_err();
        assert!(matches!(error, RowcombError::InsufficientInput { .. }));
    }
}
