use super::parser::Parser;
use crate::error::RowcombError;
use crate::token_cursor::TokenCursor;

/// Parser combinator that sequences a parser with a value-dependent continuation
///
/// This is the sequencing primitive: the first parser runs, and on success
/// its value is handed to `binder` to build the parser that continues from
/// the advanced cursor. On failure the continuation is never invoked and
/// the failure propagates unchanged. Every typed field parser in this crate
/// is conceptually `string` followed by a bind that converts the text.
pub struct Bind<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Bind { parser, binder }
    }
}

impl<P, F, Q> Parser for Bind<P, F>
where
    P: Parser,
    Q: Parser,
    F: Fn(P::Output) -> Q,
{
    type Output = Q::Output;

    fn parse(&self, cursor: TokenCursor) -> Result<(Self::Output, TokenCursor), RowcombError> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create a Bind parser
pub fn bind<P, F, Q>(parser: P, binder: F) -> Bind<P, F>
where
    P: Parser,
    Q: Parser,
    F: Fn(P::Output) -> Q,
{
    Bind::new(parser, binder)
}

/// Extension trait to add .bind() method support for parsers
pub trait BindExt: Parser + Sized {
    fn bind<F, Q>(self, binder: F) -> Bind<Self, F>
    where
        Q: Parser,
        F: Fn(Self::Output) -> Q,
    {
        Bind::new(self, binder)
    }
}

/// Implement BindExt for all parsers
impl<P> BindExt for P where P: Parser {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consume::consume;
    use crate::map::MapExt;
    use crate::pure::{fail, success};
    use crate::scalar::i64;
    use crate::string::string;

    #[test]
    fn test_bind_sequences_two_fields() {
        let cursor = TokenCursor::new(["key", "7"]);
        let parser = string().bind(|name| i64().map(move |n| (name.clone(), n)));

        let ((name, n), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(name, "key");
        assert_eq!(n, 7);
        assert!(cursor.eos());
    }

    #[test]
    fn test_bind_value_dependent_continuation() {
        // The first field tells us how many fields to skip
        let cursor = TokenCursor::new(["2", "x", "y", "tail"]);
        let parser = i64().bind(|n| consume(n as usize));

        let ((), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.value().unwrap(), "tail");
    }

    #[test]
    fn test_bind_short_circuits_on_failure() {
        let cursor = TokenCursor::new(["oops", "7"]);
        let parser = i64().bind(|_| string());

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(
            error,
            RowcombError::ConversionFailed { position: 0, .. }
        ));
    }

    #[test]
    fn test_bind_propagates_continuation_failure() {
        let cursor = TokenCursor::new(["1"]);
        let parser = i64().bind(|_| fail::<i64>("rejected"));

        let error = parser.parse(cursor).unwrap_err();
        assert!(matches!(
            error,
            RowcombError::ExplicitFailure { position: 1, .. }
        ));
    }

    #[test]
    fn test_bind_success_equals_map() {
        // bind(x => success(f(x))) behaves exactly like map(f)
        let double = |n: i64| n * 2;

        let via_bind = i64().bind(move |n| success(double(n)));
        let via_map = i64().map(double);

        let (a, cursor_a) = via_bind.parse(TokenCursor::new(["21"])).unwrap();
        let (b, cursor_b) = via_map.parse(TokenCursor::new(["21"])).unwrap();
        assert_eq!(a, 42);
        assert_eq!(a, b);
        assert_eq!(cursor_a.position(), cursor_b.position());
    }

    #[test]
    fn test_function_syntax() {
        let cursor = TokenCursor::new(["3", "4"]);
        let parser = bind(i64(), |a| i64().map(move |b| a + b));

        let (sum, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(sum, 7);
        assert!(cursor.eos());
    }
}
