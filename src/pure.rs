use super::error::RowcombError;
use super::parser::Parser;
use super::token_cursor::TokenCursor;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a fixed value, consuming nothing
pub struct SuccessParser<T> {
    value: T,
}

impl<T> SuccessParser<T> {
    pub fn new(value: T) -> Self {
        SuccessParser { value }
    }
}

/// Convenience function to create a SuccessParser
pub fn success<T: Clone>(value: T) -> SuccessParser<T> {
    SuccessParser::new(value)
}

impl<T: Clone> Parser for SuccessParser<T> {
    type Output = T;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        Ok((self.value.clone(), cursor))
    }
}

/// Parser that always fails at the current position, consuming nothing
pub struct FailParser<T> {
    message: Cow<'static, str>,
    _marker: PhantomData<T>,
}

impl<T> FailParser<T> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        FailParser {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

/// Convenience function to create a FailParser
pub fn fail<T>(message: impl Into<Cow<'static, str>>) -> FailParser<T> {
    FailParser::new(message)
}

impl<T> Parser for FailParser<T> {
    type Output = T;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        Err(RowcombError::ExplicitFailure {
            position: cursor.position(),
            message: self.message.clone(),
        })
    }
}

/// Parser that yields the count of fields consumed so far, consuming nothing
pub struct CurrentPositionParser;

impl CurrentPositionParser {
    pub fn new() -> Self {
        CurrentPositionParser
    }
}

/// Convenience function to create a CurrentPositionParser
pub fn current_position() -> CurrentPositionParser {
    CurrentPositionParser::new()
}

impl Parser for CurrentPositionParser {
    type Output = usize;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        Ok((cursor.position(), cursor))
    }
}
