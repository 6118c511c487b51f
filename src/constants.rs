pub const DEFAULT_INDENT: usize = 2;

pub const MAX_DEPTH: usize = 256;

/// Whitespace between tokens. Literal text is trimmed with exactly this set.
#[inline]
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r' | '\t')
}

#[inline]
pub fn is_skippable(ch: char) -> bool {
    is_whitespace(ch) || ch == ','
}

#[inline]
pub fn is_scalar_terminator(ch: char) -> bool {
    matches!(ch, '}' | ']' | ',')
}

#[inline]
pub fn is_path_delimiter(ch: char) -> bool {
    matches!(ch, '.' | '[' | ']')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, parse_with_options, ErrorKind, ParseOptions};

    #[rstest::rstest]
    fn test_is_whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(!is_whitespace('\u{c}'));
        assert!(!is_whitespace('\u{a0}'));
        assert!(is_skippable(','));
    }

    #[rstest::rstest]
    fn test_is_scalar_terminator() {
        assert!(is_scalar_terminator('}'));
        assert!(is_scalar_terminator(']'));
        assert!(is_scalar_terminator(','));
        assert!(!is_scalar_terminator(':'));
        assert!(!is_scalar_terminator(' '));
    }

    #[rstest::rstest]
    fn test_max_depth_boundary() {
        let nested = |depth: usize| format!("{}1{}", "[".repeat(depth), "]".repeat(depth));

        assert!(parse(&nested(MAX_DEPTH)).is_ok());

        let err = parse(&nested(MAX_DEPTH + 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StructuralParseError);

        let shallow = ParseOptions::new().with_max_depth(2);
        assert!(parse_with_options("[[1]]", &shallow).is_ok());
        assert!(parse_with_options("[[[1]]]", &shallow).is_err());
    }

    #[rstest::rstest]
    fn test_large_array() {
        let items: Vec<String> = (0..10_000).map(|i| i.to_string()).collect();
        let input = format!("[{}]", items.join(","));
        let root = parse(&input).unwrap();
        assert_eq!(root.query_integer("9999").unwrap(), 9999);
        assert_eq!(root.get_array().unwrap().len(), 10_000);
    }

    #[rstest::rstest]
    fn test_very_long_string() {
        let long_string = "x".repeat(100_000);
        let input = format!("{{\"data\": \"{long_string}\"}}");
        let root = parse(&input).unwrap();
        assert_eq!(root.query_string("data").unwrap(), long_string);
    }
}
