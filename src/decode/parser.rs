use std::borrow::Cow;

use crate::constants::{is_scalar_terminator, is_skippable};
use crate::{Error, Location, ParseOptions, Result};

use super::raw::RawNode;
use super::reader::Reader;

pub fn parse_raw<'a>(input: &'a str, options: &ParseOptions) -> Result<RawNode<'a>> {
    let mut parser = RawParser::new(input, options);
    parser.parse_document()
}

struct RawParser<'a> {
    reader: Reader<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> RawParser<'a> {
    fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            reader: Reader::new(input),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> Result<RawNode<'a>> {
        self.reader.skip_whitespace();
        let location = self.reader.location();
        let root = match self.reader.next_char() {
            None => return Err(Error::structural("empty document", location)),
            Some('{') => self.read_object(location)?,
            Some('[') => self.read_array(location)?,
            Some('"') => self.read_string(location)?,
            Some(ch @ ('}' | ']' | ',' | ':')) => {
                return Err(Error::structural(format!("unexpected '{ch}'"), location))
            }
            Some(_) => {
                self.reader.unread();
                self.read_scalar(location)
            }
        };

        self.reader.skip_whitespace();
        if !self.reader.is_eof() {
            return Err(Error::structural(
                "unexpected trailing content",
                self.reader.location(),
            ));
        }
        Ok(root)
    }

    fn enter(&mut self, location: Location) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::structural(
                format!("maximum nesting depth of {} exceeded", self.max_depth),
                location,
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn read_object(&mut self, start: Location) -> Result<RawNode<'a>> {
        self.enter(start)?;
        let mut children = Vec::new();
        loop {
            let location = self.reader.location();
            let Some(ch) = self.reader.next_char() else {
                return Err(Error::structural("unterminated object", start));
            };
            match ch {
                '}' => break,
                '{' => children.push(self.read_object(location)?),
                '[' => children.push(self.read_array(location)?),
                '"' => children.push(self.read_string(location)?),
                ':' => children.push(RawNode::Separator { location }),
                ']' => return Err(Error::structural("unexpected ']' inside object", location)),
                ch if is_skippable(ch) => continue,
                _ => {
                    self.reader.unread();
                    children.push(self.read_scalar(location));
                }
            }
        }
        self.leave();
        Ok(RawNode::Object {
            children,
            location: start,
        })
    }

    fn read_array(&mut self, start: Location) -> Result<RawNode<'a>> {
        self.enter(start)?;
        let mut children = Vec::new();
        loop {
            let location = self.reader.location();
            let Some(ch) = self.reader.next_char() else {
                return Err(Error::structural("unterminated array", start));
            };
            match ch {
                ']' => break,
                '{' => children.push(self.read_object(location)?),
                '[' => children.push(self.read_array(location)?),
                '"' => children.push(self.read_string(location)?),
                '}' => return Err(Error::structural("unexpected '}' inside array", location)),
                ch if is_skippable(ch) => continue,
                _ => {
                    self.reader.unread();
                    children.push(self.read_scalar(location));
                }
            }
        }
        self.leave();
        Ok(RawNode::Array {
            children,
            location: start,
        })
    }

    /// Reads a string body after its opening quote. A backslash copies the
    /// following character through unchanged.
    fn read_string(&mut self, start: Location) -> Result<RawNode<'a>> {
        let mut owned: Option<String> = None;
        loop {
            let run = self.reader.take_string_run();
            match self.reader.next_char() {
                Some('"') => {
                    let text = match owned {
                        Some(mut buf) => {
                            buf.push_str(run);
                            Cow::Owned(buf)
                        }
                        None => Cow::Borrowed(run),
                    };
                    return Ok(RawNode::Quoted {
                        text,
                        location: start,
                    });
                }
                Some('\\') => {
                    let buf = owned.get_or_insert_with(String::new);
                    buf.push_str(run);
                    match self.reader.next_char() {
                        Some(escaped) => buf.push(escaped),
                        None => return Err(Error::structural("unterminated string", start)),
                    }
                }
                _ => return Err(Error::structural("unterminated string", start)),
            }
        }
    }

    /// Reads literal text up to `}`, `]` or `,`, leaving the terminator
    /// unread for the enclosing container.
    fn read_scalar(&mut self, start: Location) -> RawNode<'a> {
        let begin = self.reader.offset();
        while let Some(ch) = self.reader.next_char() {
            if is_scalar_terminator(ch) {
                self.reader.unread();
                break;
            }
        }
        let text = &self.reader.input()[begin..self.reader.offset()];
        RawNode::Literal {
            text,
            location: start,
        }
    }
}
