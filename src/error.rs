use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Position-tagged failure produced by field parsers
///
/// Every variant records the 0-based position where the failure was
/// detected; positions count consumed fields, so position 0 is the first
/// field of the row. The variants keep "ran out of input" distinct from
/// "wrong type or value" so callers can test for either independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowcombError {
    /// Fewer fields remained than a parser required
    InsufficientInput { position: usize },
    /// A field's text could not be converted to the requested type
    ConversionFailed {
        position: usize,
        expected: Cow<'static, str>,
        text: String,
    },
    /// A structurally valid value failed a post-condition such as
    /// non-empty or fixed length
    ValidationFailed {
        position: usize,
        message: Cow<'static, str>,
    },
    /// A failure raised explicitly via `fail` or a custom validator
    ExplicitFailure {
        position: usize,
        message: Cow<'static, str>,
    },
}

impl RowcombError {
    /// The 0-based field position where this failure was detected
    pub fn position(&self) -> usize {
        match self {
            RowcombError::InsufficientInput { position }
            | RowcombError::ConversionFailed { position, .. }
            | RowcombError::ValidationFailed { position, .. }
            | RowcombError::ExplicitFailure { position, .. } => *position,
        }
    }
}

impl fmt::Display for RowcombError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowcombError::InsufficientInput { position } => {
                write!(f, "ran out of input: expected more than {} fields", position)
            }
            RowcombError::ConversionFailed {
                position,
                expected,
                text,
            } => {
                write!(
                    f,
                    "cannot convert '{}' to {} at field {}",
                    text, expected, position
                )
            }
            RowcombError::ValidationFailed { position, message } => {
                write!(f, "{} at field {}", message, position)
            }
            RowcombError::ExplicitFailure { position, message } => {
                write!(f, "{} at field {}", message, position)
            }
        }
    }
}

impl Error for RowcombError {}
