use crate::error::RowcombError;
use crate::parser::Parser;
use crate::string::string;
use crate::token_cursor::TokenCursor;
use chrono::{NaiveDate, NaiveDateTime};

/// Parser that converts one field to a calendar date
///
/// The pattern is a `chrono` format string such as `%Y-%m-%d`. Pattern
/// mismatches and impossible calendar values (like month 13) both fail at
/// the position where the consumed field started, naming the pattern and
/// the offending text.
pub struct DateParser {
    pattern: String,
}

impl DateParser {
    pub fn new(pattern: impl Into<String>) -> Self {
        DateParser {
            pattern: pattern.into(),
        }
    }
}

/// Convenience function to create a DateParser
pub fn date(pattern: impl Into<String>) -> DateParser {
    DateParser::new(pattern)
}

impl Parser for DateParser {
    type Output = NaiveDate;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (text, cursor) = string().parse(cursor)?;
        match NaiveDate::parse_from_str(&text, &self.pattern) {
            Ok(value) => Ok((value, cursor)),
            Err(_) => Err(RowcombError::ConversionFailed {
                position: start,
                expected: format!("date matching '{}'", self.pattern).into(),
                text,
            }),
        }
    }
}

/// Parser that converts one field to a date with time of day
pub struct DateTimeParser {
    pattern: String,
}

impl DateTimeParser {
    pub fn new(pattern: impl Into<String>) -> Self {
        DateTimeParser {
            pattern: pattern.into(),
        }
    }
}

/// Convenience function to create a DateTimeParser
pub fn date_time(pattern: impl Into<String>) -> DateTimeParser {
    DateTimeParser::new(pattern)
}

impl Parser for DateTimeParser {
    type Output = NaiveDateTime;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let start = cursor.position();
        let (text, cursor) = string().parse(cursor)?;
        match NaiveDateTime::parse_from_str(&text, &self.pattern) {
            Ok(value) => Ok((value, cursor)),
            Err(_) => Err(RowcombError::ConversionFailed {
                position: start,
                expected: format!("date-time matching '{}'", self.pattern).into(),
                text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_success() {
        let cursor = TokenCursor::new(["2024-03-15", "rest"]);
        let parser = date("%Y-%m-%d");

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(cursor.value().unwrap(), "rest");
    }

    #[test]
    fn test_date_pattern_mismatch() {
        let cursor = TokenCursor::new(["15/03/2024"]);
        let error = date("%Y-%m-%d").parse(cursor).unwrap_err();

        assert!(matches!(
            error,
            RowcombError::ConversionFailed { position: 0, .. }
        ));
        assert!(error.to_string().contains("%Y-%m-%d"));
        assert!(error.to_string().contains("15/03/2024"));
    }

    #[test]
    fn test_date_invalid_calendar_value() {
        let cursor = TokenCursor::new(["2024-13-01"]);
        let error = date("%Y-%m-%d").parse(cursor).unwrap_err();
        assert!(matches!(error, RowcombError::ConversionFailed { .. }));
    }

    #[test]
    fn test_date_end_of_row() {
        let cursor = TokenCursor::new(Vec::<String>::new());
        let error = date("%Y-%m-%d").parse(cursor).unwrap_err();
        assert!(matches!(error, RowcombError::InsufficientInput { .. }));
    }

    #[test]
    fn test_date_time_success() {
        let cursor = TokenCursor::new(["2024-03-15 10:30:00"]);
        let parser = date_time("%Y-%m-%d %H:%M:%S");

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(
            value,
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
        assert!(cursor.eos());
    }

    #[test]
    fn test_date_time_pattern_mismatch() {
        let cursor = TokenCursor::new(["2024-03-15"]);
        let error = date_time("%Y-%m-%d %H:%M:%S").parse(cursor).unwrap_err();
        assert!(error.to_string().contains("date-time matching"));
    }
}
