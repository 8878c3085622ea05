use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Only the value is touched: position and remaining fields come straight
/// from the inner parser, and failures propagate unchanged.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<P, F, T, U> Parser for Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt: Parser + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<P> MapExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::i64;
    use crate::string::string;

    #[derive(Debug, PartialEq)]
    enum Field {
        Id(i64),
        Name(String),
    }

    #[test]
    fn test_map_int_to_string() {
        let cursor = TokenCursor::new(["123"]);
        let parser = i64().map(|num| format!("Number: {}", num));

        let (result, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(result, "Number: 123");
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_to_enum() {
        let cursor = TokenCursor::new(["42"]);
        let parser = i64().map(Field::Id);

        let (field, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(field, Field::Id(42));
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_chaining() {
        let cursor = TokenCursor::new(["5"]);
        let parser = i64().map(|n| n * 2).map(|n| format!("doubled: {}", n));

        let (result, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(result, "doubled: 10");
        assert!(cursor.eos());
    }

    #[test]
    fn test_map_does_not_touch_position() {
        let cursor = TokenCursor::new(["a", "b"]);
        let parser = string().map(|s| s.len());

        let (len, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(len, 1);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.value().unwrap(), "b");
    }

    #[test]
    fn test_map_preserves_errors() {
        let cursor = TokenCursor::new(["xyz"]);
        let parser = i64().map(Field::Id);

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(
            error,
            RowcombError::ConversionFailed { position: 0, .. }
        ));
    }

    #[test]
    fn test_function_syntax() {
        let cursor = TokenCursor::new(["alpha"]);
        let parser = map(string(), Field::Name);

        let (field, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(field, Field::Name("alpha".into()));
        assert!(cursor.eos());
    }
}
