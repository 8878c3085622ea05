//! # RowComb - Field Combinator Library
//!
//! A parser combinator library for the fields of one pre-split row of
//! delimited text: build typed values field-by-field while tracking the
//! consumption position, and get precise, position-annotated errors when a
//! row does not match.
//!
//! RowComb provides composable, type-safe field parsers that combine into
//! row parsers from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing errors are handled through `Result` types
//! - **Rich error reporting**: Every failure carries the 0-based field
//!   position it was detected at, and the driver adds full-row context
//! - **Composability**: Small parsers combine into larger ones using
//!   combinators; sequencing, mapping and biased-left alternation cover
//!   the whole algebra
//! - **Purity**: A parser is a value, not a process; cursors are immutable
//!   and cheap to clone, so alternation retries from the exact pre-branch
//!   state
//!
//! The entry point for callers is [`run()`](run::run), which parses a
//! full row and requires every field to be consumed. The common
//! constructors and extension traits are re-exported at the crate root:
//!
//! ```
//! use rowcomb::{AndExt, MapExt, OptionalExt, i64, run, string};
//!
//! let parser = string()
//!     .and(i64().optional())
//!     .map(|(name, count)| (name, count.unwrap_or(0)));
//!
//! assert_eq!(run(&parser, ["widget", "12"]).unwrap(), ("widget".into(), 12));
//! assert_eq!(run(&parser, ["widget", ""]).unwrap(), ("widget".into(), 0));
//! ```

pub mod and;
pub mod bind;
pub mod consume;
pub mod date;
pub mod delimited;
pub mod error;
pub mod filter;
pub mod map;
pub mod non_empty;
pub mod of_length;
pub mod optional;
pub mod or;
pub mod parser;
pub mod preprocess;
pub mod pure;
pub mod run;
pub mod scalar;
pub mod split;
pub mod string;
pub mod token_cursor;

pub use and::AndExt;
pub use bind::BindExt;
pub use consume::{consume, consume_rest};
pub use date::{date, date_time};
pub use delimited::SplitOnExt;
pub use error::RowcombError;
pub use filter::FilterExt;
pub use map::MapExt;
pub use non_empty::NonEmptyExt;
pub use of_length::{OfLengthExt, OfLengthIfPresentExt};
pub use optional::OptionalExt;
pub use or::OrExt;
pub use parser::Parser;
pub use preprocess::PreprocessExt;
pub use pure::{current_position, fail, success};
pub use run::{RunError, run};
pub use scalar::{boolean, character, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64};
pub use split::split_delimited;
pub use string::string;
pub use token_cursor::TokenCursor;
