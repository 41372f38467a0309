//! Append-only output buffer with indentation tracking.
//!
//! Indentation is written lazily at the first write of each line, so text
//! copied from the source (which may itself span several lines) is never
//! re-indented.

#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent_level: u32,
    indent_width: usize,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new(indent_width: usize) -> Self {
        Self::with_capacity(0, indent_width)
    }

    pub fn with_capacity(capacity: usize, indent_width: usize) -> Self {
        SourceWriter {
            output: String::with_capacity(capacity),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Write text to output.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.write_indent();
            self.at_line_start = false;
        }
        self.output.push_str(text);
    }

    /// Write a newline.
    pub fn write_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write a newline unless the current line is empty.
    pub fn ensure_line_start(&mut self) {
        if !self.at_line_start {
            self.write_line();
        }
    }

    pub const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn write_indent(&mut self) {
        let width = self.indent_level as usize * self.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_only_at_line_start() {
        let mut writer = SourceWriter::new(2);
        writer.write("{");
        writer.write_line();
        writer.increase_indent();
        writer.write("a = 1;");
        writer.write_line();
        writer.decrease_indent();
        writer.write("}");
        writer.write_line();
        assert_eq!(writer.finish(), "{\n  a = 1;\n}\n");
    }

    #[test]
    fn copied_text_is_not_reindented() {
        let mut writer = SourceWriter::new(4);
        writer.increase_indent();
        writer.write("f(function () {\nreturn 1;\n});");
        writer.ensure_line_start();
        writer.ensure_line_start();
        assert_eq!(writer.finish(), "    f(function () {\nreturn 1;\n});\n");
    }

    #[test]
    fn empty_writes_do_not_indent() {
        let mut writer = SourceWriter::new(4);
        writer.increase_indent();
        writer.write("");
        writer.write_line();
        writer.decrease_indent();
        writer.decrease_indent();
        writer.write("x");
        assert_eq!(writer.finish(), "\nx");
        assert!(SourceWriter::new(4).finish().is_empty());
    }
}
