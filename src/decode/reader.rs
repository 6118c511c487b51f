use std::io::Read;

use memchr::{memchr2, memchr_iter};

use crate::constants::is_whitespace;
use crate::{Error, Location, Result};

/// Drains a stream into memory; parsing never starts on a partial source.
pub fn read_source<R: Read>(mut source: R) -> Result<String> {
    let mut buf = Vec::new();
    source
        .read_to_end(&mut buf)
        .map_err(|err| Error::source_read(err.to_string()))?;
    String::from_utf8(buf).map_err(|err| Error::source_read(format!("invalid utf-8: {err}")))
}

pub fn decode_utf8(input: &[u8]) -> Result<&str> {
    std::str::from_utf8(input).map_err(|err| Error::source_read(format!("invalid utf-8: {err}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    position: usize,
    line: usize,
    column: usize,
}

/// Character cursor over a fully buffered source with one character of
/// pushback.
pub struct Reader<'a> {
    input: &'a str,
    cursor: Cursor,
    previous: Option<Cursor>,
}

impl<'a> Reader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            cursor: Cursor {
                position: 0,
                line: 1,
                column: 1,
            },
            previous: None,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn offset(&self) -> usize {
        self.cursor.position
    }

    pub fn location(&self) -> Location {
        Location {
            offset: self.cursor.position,
            line: self.cursor.line,
            column: self.cursor.column,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.cursor.position >= self.input.len()
    }

    pub fn peek(&self) -> Option<char> {
        let bytes = self.input.as_bytes();
        match bytes.get(self.cursor.position) {
            Some(&byte) if byte.is_ascii() => Some(byte as char),
            Some(_) => self.input[self.cursor.position..].chars().next(),
            None => None,
        }
    }

    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.previous = Some(self.cursor);
        self.cursor.position += ch.len_utf8();
        if ch == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 1;
        } else {
            self.cursor.column += 1;
        }
        Some(ch)
    }

    /// Steps back over the character returned by the last `next_char`.
    ///
    /// Only one step is remembered; a second call without an intervening
    /// read does nothing.
    pub fn unread(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.cursor = previous;
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_whitespace(ch) {
                break;
            }
            self.next_char();
        }
    }

    /// Consumes everything up to (not including) the next `"` or `\`, or to
    /// the end of input, and returns it.
    pub fn take_string_run(&mut self) -> &'a str {
        let start = self.cursor.position;
        let rest = &self.input.as_bytes()[start..];
        let len = memchr2(b'"', b'\\', rest).unwrap_or(rest.len());
        if len == 0 {
            return "";
        }
        let run = &self.input[start..start + len];

        let mut newlines = 0;
        let mut last_newline = None;
        for idx in memchr_iter(b'\n', run.as_bytes()) {
            newlines += 1;
            last_newline = Some(idx);
        }
        match last_newline {
            Some(idx) => {
                self.cursor.line += newlines;
                self.cursor.column = 1 + run[idx + 1..].chars().count();
            }
            None => self.cursor.column += run.chars().count(),
        }
        self.cursor.position += len;
        self.previous = None;
        run
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::ErrorKind;

    #[rstest::rstest]
    fn test_next_char_tracks_lines_and_columns() {
        let mut reader = Reader::new("a\nbé");
        assert_eq!(reader.next_char(), Some('a'));
        assert_eq!(reader.next_char(), Some('\n'));
        let loc = reader.location();
        assert_eq!((loc.line, loc.column, loc.offset), (2, 1, 2));
        assert_eq!(reader.next_char(), Some('b'));
        assert_eq!(reader.next_char(), Some('é'));
        assert!(reader.is_eof());
        assert_eq!(reader.offset(), 5);
        assert_eq!(reader.location().column, 3);
        assert_eq!(reader.next_char(), None);
    }

    #[rstest::rstest]
    fn test_unread_is_single_step() {
        let mut reader = Reader::new("xy");
        reader.next_char();
        reader.next_char();
        reader.unread();
        assert_eq!(reader.offset(), 1);
        reader.unread();
        assert_eq!(reader.offset(), 1);
        assert_eq!(reader.next_char(), Some('y'));
    }

    #[rstest::rstest]
    fn test_unread_restores_line() {
        let mut reader = Reader::new("\nz");
        reader.next_char();
        reader.unread();
        assert_eq!(reader.location(), Location::start());
    }

    #[rstest::rstest]
    fn test_take_string_run_stops_at_quote_or_escape() {
        let mut reader = Reader::new("ab\ncd\\\"x\"");
        assert_eq!(reader.take_string_run(), "ab\ncd");
        let loc = reader.location();
        assert_eq!((loc.line, loc.column), (2, 3));
        assert_eq!(reader.next_char(), Some('\\'));
        assert_eq!(reader.take_string_run(), "");
        assert_eq!(reader.next_char(), Some('"'));
        assert_eq!(reader.take_string_run(), "x");
    }

    #[rstest::rstest]
    fn test_take_string_run_to_end() {
        let mut reader = Reader::new("tail");
        assert_eq!(reader.take_string_run(), "tail");
        assert!(reader.is_eof());
    }

    #[rstest::rstest]
    fn test_skip_whitespace_leaves_commas() {
        let mut reader = Reader::new(" \t\r\n,");
        reader.skip_whitespace();
        assert_eq!(reader.peek(), Some(','));
    }

    struct FailingSource;

    impl Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("pipe closed"))
        }
    }

    #[rstest::rstest]
    fn test_read_source_failure() {
        let err = read_source(FailingSource).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceReadFailure);
        assert!(err.to_string().contains("pipe closed"));
    }

    #[rstest::rstest]
    fn test_read_source_rejects_invalid_utf8() {
        let err = read_source(&[0xff, 0xfe][..]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceReadFailure);
        assert!(decode_utf8(&[b'{', 0xc3]).is_err());
        assert_eq!(decode_utf8(b"[1]").unwrap(), "[1]");
    }
}
