use colored::Colorize;
use std::collections::HashMap;
use std::path::Path;

use replscope_common::{Diagnostic, DiagnosticCategory, LineMap};

/// Renders diagnostics the way tsc does: `file:line:col - error: message`
/// followed by the offending source line and a `~` underline.
pub struct Reporter {
    color: bool,
    sources: HashMap<String, String>,
    line_maps: HashMap<String, LineMap>,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            sources: HashMap::new(),
            line_maps: HashMap::new(),
        }
    }

    /// Register the text of an input that is not on disk (`<eval>`, `<stdin>`).
    pub fn add_source(&mut self, file: impl Into<String>, text: impl Into<String>) {
        let file = file.into();
        self.line_maps.remove(&file);
        self.sources.insert(file, text.into());
    }

    pub fn render(&mut self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&mut self, diagnostic: &Diagnostic) -> String {
        let location = self.format_location(&diagnostic.file, diagnostic.start);
        let category = self.format_category(diagnostic.category);

        let mut output = String::new();
        if let Some(location) = location {
            output.push_str(&location);
        } else if !diagnostic.file.is_empty() {
            output.push_str(&diagnostic.file);
        } else {
            output.push_str("<unknown>");
        }

        output.push_str(" - ");
        output.push_str(&category);
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) =
            self.format_snippet(&diagnostic.file, diagnostic.start, diagnostic.length)
        {
            output.push_str(&snippet);
        }
        output
    }

    /// Source line with the error span underlined:
    ///   2   let b = ;
    ///               ~
    fn format_snippet(&mut self, file: &str, start: u32, length: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }

        let (line_num, column) = self.position_for(file, start)?;
        let source = self.sources.get(file)?;
        let line_map = self.line_maps.get(file)?;
        // Same line breaks as the position, including a lone `\r`.
        let line_start = line_map.line_start(line_num - 1)? as usize;
        let line_end = line_map
            .line_start(line_num)
            .map_or(source.len(), |end| end as usize);
        let line_text = source
            .get(line_start..line_end)?
            .trim_end_matches(['\r', '\n']);

        // Columns are characters; the span length is bytes of mostly-ASCII text.
        let first = column - 1;
        let last = first + length.max(1);
        let mut underline = String::new();
        for (i, ch) in line_text.chars().enumerate() {
            let i = i as u32;
            if i >= last {
                break;
            }
            let marker = if i < first { ' ' } else { '~' };
            if ch == '\t' {
                underline.extend(std::iter::repeat_n(marker, 4));
            } else {
                underline.push(marker);
            }
        }
        // The span may start at the end of the line (unexpected end of input).
        if !underline.contains('~') {
            underline.push('~');
        }

        let underline = if self.color {
            underline.red().to_string()
        } else {
            underline
        };
        Some(format!("\n  {line_num:>3}   {line_text}\n        {underline}"))
    }

    fn format_location(&mut self, file: &str, offset: u32) -> Option<String> {
        if file.is_empty() {
            return None;
        }

        let (line, column) = self.position_for(file, offset)?;
        Some(format!("{file}:{line}:{column}"))
    }

    fn position_for(&mut self, file: &str, offset: u32) -> Option<(u32, u32)> {
        self.ensure_source(file)?;
        if !self.line_maps.contains_key(file) {
            let source = self.sources.get(file)?;
            let map = LineMap::build(source);
            self.line_maps.insert(file.to_string(), map);
        }

        let source = self.sources.get(file)?;
        let line_map = self.line_maps.get(file)?;
        Some(line_map.offset_to_position(offset, source).one_based())
    }

    fn ensure_source(&mut self, file: &str) -> Option<()> {
        if !self.sources.contains_key(file) {
            let contents = std::fs::read_to_string(Path::new(file)).ok()?;
            self.sources.insert(file.to_string(), contents);
        }
        Some(())
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = category.as_str();
        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
        }
    }
}
