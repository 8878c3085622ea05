/// Split one field's text on a delimiter, honoring double-quote quoting
///
/// Delimiters inside a quoted section do not split; a doubled quote inside
/// a quoted section is an escaped literal quote. Surrounding quotes are
/// stripped from the output. The empty text yields a single empty field,
/// matching the usual row-splitting convention; callers that want "no
/// sub-fields at all" for the empty text check before calling (as the
/// `split_on` combinator does).
pub fn split_delimited(text: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == delimiter {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain() {
        assert_eq!(split_delimited("a,b,c", ','), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_single_field() {
        assert_eq!(split_delimited("abc", ','), ["abc"]);
    }

    #[test]
    fn test_split_empty_fields() {
        assert_eq!(split_delimited("a,,c", ','), ["a", "", "c"]);
        assert_eq!(split_delimited(",", ','), ["", ""]);
    }

    #[test]
    fn test_split_trailing_delimiter() {
        assert_eq!(split_delimited("a,b,", ','), ["a", "b", ""]);
    }

    #[test]
    fn test_split_quoted_delimiter() {
        assert_eq!(split_delimited("\"a,b\",c", ','), ["a,b", "c"]);
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(split_delimited("\"say \"\"hi\"\"\",x", ','), ["say \"hi\"", "x"]);
    }

    #[test]
    fn test_split_other_delimiter() {
        assert_eq!(split_delimited("a;b;c", ';'), ["a", "b", "c"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert_eq!(split_delimited("", ','), [""]);
    }
}
