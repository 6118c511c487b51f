use crate::constants::{DEFAULT_INDENT, MAX_DEPTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
}

impl Indent {
    pub fn spaces(count: usize) -> Self {
        Indent::Spaces(count)
    }

    pub fn get_spaces(self) -> usize {
        let Indent::Spaces(count) = self;
        count
    }
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(DEFAULT_INDENT)
    }
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Deepest container nesting accepted before parsing fails.
    pub max_depth: usize,
    /// Accept a single leading `-` on integer and float literals.
    pub signed_numbers: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_signed_numbers(mut self, signed_numbers: bool) -> Self {
        self.signed_numbers = signed_numbers;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            signed_numbers: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    pub indent: Indent,
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}
