use std::fmt;

use smallvec::SmallVec;

use crate::constants::is_path_delimiter;

pub type Segments<'p> = SmallVec<[Segment<'p>; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'p> {
    Key(&'p str),
    /// Any integer literal, signed or not. Negative indices never resolve.
    Index(i64),
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Splits a path such as `a.b[2].c` or `a.b.2.c` into segments.
///
/// `.`, `[` and `]` all act as separators and empty runs between them are
/// dropped, so `a[0]` and `a.0` address the same node. A segment that reads
/// as an `i64`, with an optional sign, is an index; anything else is a key.
/// An object member named `"7"` or `"-1"` is therefore unreachable by path.
pub fn parse_path(path: &str) -> Segments<'_> {
    path.split(is_path_delimiter)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match parse_index(segment) {
            Some(index) => Segment::Index(index),
            None => Segment::Key(segment),
        })
        .collect()
}

fn parse_index(segment: &str) -> Option<i64> {
    let digits = segment
        .strip_prefix(|ch| ch == '-' || ch == '+')
        .unwrap_or(segment);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("a.b.c", vec![Segment::Key("a"), Segment::Key("b"), Segment::Key("c")])]
    #[case("arr[2]", vec![Segment::Key("arr"), Segment::Index(2)])]
    #[case("arr.2", vec![Segment::Key("arr"), Segment::Index(2)])]
    #[case("[0][1].x", vec![Segment::Index(0), Segment::Index(1), Segment::Key("x")])]
    #[case("a..b", vec![Segment::Key("a"), Segment::Key("b")])]
    #[case("a.-1", vec![Segment::Key("a"), Segment::Index(-1)])]
    #[case("a.+1", vec![Segment::Key("a"), Segment::Index(1)])]
    #[case("a[-0]", vec![Segment::Key("a"), Segment::Index(0)])]
    #[case("a.-", vec![Segment::Key("a"), Segment::Key("-")])]
    #[case("a.--1", vec![Segment::Key("a"), Segment::Key("--1")])]
    #[case("a.99999999999999999999999", vec![Segment::Key("a"), Segment::Key("99999999999999999999999")])]
    #[case("with space.x", vec![Segment::Key("with space"), Segment::Key("x")])]
    #[case("", vec![])]
    #[case(".[]", vec![])]
    fn test_parse_path(#[case] path: &str, #[case] expected: Vec<Segment<'static>>) {
        assert_eq!(parse_path(path).into_vec(), expected);
    }

    #[rstest::rstest]
    fn test_segment_display() {
        assert_eq!(Segment::Key("name").to_string(), "name");
        assert_eq!(Segment::Index(3).to_string(), "[3]");
    }
}
