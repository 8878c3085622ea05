use crate::error::RowcombError;
use crate::parser::Parser;
use crate::string::string;
use crate::token_cursor::TokenCursor;
use std::marker::PhantomData;
use std::str::FromStr;

/// Parser that converts one field to a numeric value via strict `FromStr`
///
/// The conversion accepts exactly what the target type's `from_str`
/// accepts; there is no trimming or leniency here. Use `preprocess` ahead
/// of the parser to normalize fields first. Conversion failures are
/// reported at the position where the consumed field started.
pub struct NumberParser<T> {
    expected: &'static str,
    _marker: PhantomData<T>,
}

impl<T> NumberParser<T> {
    fn new(expected: &'static str) -> Self {
        NumberParser {
            expected,
            _marker: PhantomData,
        }
    }
}

impl<T: FromStr> Parser for NumberParser<T> {
    type Output = T;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (text, cursor) = string().parse(cursor)?;
        match text.parse::<T>() {
            Ok(value) => Ok((value, cursor)),
            Err(_) => Err(RowcombError::ConversionFailed {
                position: start,
                expected: self.expected.into(),
                text,
            }),
        }
    }
}

/// Parser that matches a signed 8-bit integer field
pub fn i8() -> NumberParser<i8> {
    NumberParser::new("int8")
}

/// Parser that matches a signed 16-bit integer field
pub fn i16() -> NumberParser<i16> {
    NumberParser::new("int16")
}

/// Parser that matches a signed 32-bit integer field
pub fn i32() -> NumberParser<i32> {
    NumberParser::new("int32")
}

/// Parser that matches a signed 64-bit integer field
pub fn i64() -> NumberParser<i64> {
    NumberParser::new("int64")
}

/// Parser that matches an unsigned 8-bit integer field
pub fn u8() -> NumberParser<u8> {
    NumberParser::new("uint8")
}

/// Parser that matches an unsigned 16-bit integer field
pub fn u16() -> NumberParser<u16> {
    NumberParser::new("uint16")
}

/// Parser that matches an unsigned 32-bit integer field
pub fn u32() -> NumberParser<u32> {
    NumberParser::new("uint32")
}

/// Parser that matches an unsigned 64-bit integer field
pub fn u64() -> NumberParser<u64> {
    NumberParser::new("uint64")
}

/// Parser that matches a 32-bit floating point field
pub fn f32() -> NumberParser<f32> {
    NumberParser::new("float32")
}

/// Parser that matches a 64-bit floating point field
pub fn f64() -> NumberParser<f64> {
    NumberParser::new("float64")
}
