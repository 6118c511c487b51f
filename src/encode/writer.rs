use crate::options::SerializeOptions;
use crate::text::string::escape_string_into;

pub(crate) struct Writer {
    buffer: String,
    pretty: bool,
    indent_unit: String,
    indent_cache: Vec<String>,
}

impl Writer {
    pub fn compact() -> Self {
        Self {
            buffer: String::new(),
            pretty: false,
            indent_unit: String::new(),
            indent_cache: vec![String::new()],
        }
    }

    pub fn pretty(options: &SerializeOptions) -> Self {
        Self {
            buffer: String::new(),
            pretty: true,
            indent_unit: " ".repeat(options.indent.get_spaces()),
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    pub fn write_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn write_quoted(&mut self, value: &str) {
        self.buffer.push('"');
        escape_string_into(&mut self.buffer, value);
        self.buffer.push('"');
    }

    /// Writes the gap after an opening delimiter: a newline and indent when
    /// pretty, nothing when compact.
    pub fn open_container(&mut self, depth: usize) {
        if self.pretty {
            self.write_newline_indent(depth);
        }
    }

    pub fn write_item_separator(&mut self, depth: usize) {
        self.buffer.push(',');
        if self.pretty {
            self.write_newline_indent(depth);
        } else {
            self.buffer.push(' ');
        }
    }

    pub fn close_container(&mut self, depth: usize) {
        if self.pretty {
            self.write_newline_indent(depth);
        }
    }

    pub fn write_key_separator(&mut self) {
        self.buffer.push_str(": ");
    }

    fn write_newline_indent(&mut self, depth: usize) {
        self.buffer.push('\n');
        if depth == 0 || self.indent_unit.is_empty() {
            return;
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer.push_str(&self.indent_cache[depth]);
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let next = format!(
                "{}{}",
                self.indent_cache.last().map(String::as_str).unwrap_or(""),
                self.indent_unit
            );
            self.indent_cache.push(next);
        }
    }
}
