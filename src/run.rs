use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

/// Error type for the driver, adding original-row context to failures
///
/// Distinguishes a parser failure from the driver-only condition where the
/// parser succeeded but fields were left over. The latter never comes from
/// an individual combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The parser itself failed somewhere in the row
    Parse {
        input: Vec<String>,
        error: RowcombError,
    },
    /// The parser succeeded but did not consume the entire row
    UnconsumedInput {
        input: Vec<String>,
        position: usize,
        remaining: Vec<String>,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Parse { input, error } => {
                if input.is_empty() {
                    write!(f, "{}", error)
                } else {
                    write!(f, "cannot parse row '{}': {}", input.join(","), error)
                }
            }
            RunError::UnconsumedInput {
                input,
                position,
                remaining,
            } => {
                write!(
                    f,
                    "row '{}' was not fully consumed: stopped at field {} with '{}' remaining",
                    input.join(","),
                    position,
                    remaining.join(",")
                )
            }
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunError::Parse { error, .. } => Some(error),
            RunError::UnconsumedInput { .. } => None,
        }
    }
}

/// Run a parser over a full row, requiring every field to be consumed
///
/// This is the entry point external callers use: supply the pre-split row
/// and receive either the typed value or a displayable error. A success
/// that leaves fields unconsumed is reported as `UnconsumedInput`, a
/// distinct failure mode from a mid-parse error.
pub fn run<P, I, S>(parser: &P, row: I) -> Result<P::Output, RunError>
where
    P: Parser,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let row: Rc<[String]> = row.into_iter().map(Into::into).collect();
    let cursor = TokenCursor::from_parts(row.clone(), 0);
    match parser.parse(cursor) {
        Ok((value, rest)) => {
            if rest.eos() {
                Ok(value)
            } else {
                Err(RunError::UnconsumedInput {
                    input: row.to_vec(),
                    position: rest.position(),
                    remaining: rest.remaining().to_vec(),
                })
            }
        }
        Err(error) => Err(RunError::Parse {
            input: row.to_vec(),
            error,
        }),
    }
}
