//! Syntax-tree walk that rebuilds a snippet as text.
//!
//! `SnippetPrinter` is split across submodules by syntax category, the way a
//! printer usually is:
//! - `patterns`: binding pattern flattening and re-serialization
//! - `expressions`: `import.meta` / `import()` substitution, verbatim copy otherwise
//! - `functions`: function declarations, parameter lists and bodies
//! - `classes`: class declarations member by member
//! - `statements`: the scope-mode-parameterized statement walk
//! - `program`: the top-level driver (final expression capture, hoisting)

mod classes;
mod expressions;
mod functions;
mod patterns;
mod program;
mod statements;

pub use patterns::binding_names;

use indexmap::IndexSet;
use oxc_span::Span;
use replscope_common::limits::{MAX_STATEMENT_DEPTH, OUTPUT_CAPACITY_FACTOR};
use serde::Serialize;

use crate::error::{Result, RewriteError};
use crate::options::RewriteOptions;
use crate::source_writer::SourceWriter;

/// Which scope a statement list belongs to.
///
/// Control-flow statements are handled identically in every mode; the modes
/// only differ in how declarations are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeMode {
    /// Statements directly in the snippet body.
    TopLevel,
    /// Blocks, loop bodies, branches and clauses nested in the snippet body,
    /// outside any function.
    TopLevelBlock,
    /// Anything inside a function, method, static block or class body.
    FunctionBody,
}

impl ScopeMode {
    /// Mode for the statement lists nested in a statement of this mode.
    pub const fn nested(self) -> Self {
        match self {
            ScopeMode::TopLevel => ScopeMode::TopLevelBlock,
            other => other,
        }
    }

    /// `var` and function declarations go to the global sink.
    pub const fn redirects_var(self) -> bool {
        !matches!(self, ScopeMode::FunctionBody)
    }

    /// `let`, `const` and class declarations go to the scope sink.
    pub const fn redirects_lexical(self) -> bool {
        matches!(self, ScopeMode::TopLevel)
    }
}

/// The two registration targets of the module capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sink {
    Global,
    Scope,
}

impl Sink {
    const fn method(self) -> &'static str {
        match self {
            Sink::Global => "global",
            Sink::Scope => "scope",
        }
    }
}

/// Names a rewritten snippet registers, in first-registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Bindings {
    /// Registered through `global(...)`: `var` and function declarations.
    pub global: IndexSet<String>,
    /// Registered through `scope(...)`: top-level `let`, `const` and classes.
    pub scope: IndexSet<String>,
    /// The subset of `scope` declared with `const`; the harness should make
    /// these properties non-writable once the snippet has run.
    pub constants: IndexSet<String>,
}

pub(crate) struct SnippetPrinter<'a> {
    source: &'a str,
    options: &'a RewriteOptions,
    writer: SourceWriter,
    bindings: Bindings,
    depth: u32,
}

impl<'a> SnippetPrinter<'a> {
    pub(crate) fn new(source: &'a str, options: &'a RewriteOptions) -> Self {
        SnippetPrinter {
            source,
            options,
            writer: SourceWriter::with_capacity(
                source.len() * OUTPUT_CAPACITY_FACTOR,
                options.indent_width,
            ),
            bindings: Bindings::default(),
            depth: 0,
        }
    }

    pub(crate) fn finish(self) -> (String, Bindings) {
        (self.writer.finish(), self.bindings)
    }

    // =========================================================================
    // Source text
    // =========================================================================

    /// Source text of a span, trimmed.
    fn text(&self, span: Span) -> &'a str {
        span.source_text(self.source).trim()
    }

    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    fn write_line(&mut self) {
        self.writer.write_line();
    }

    /// Terminate the current statement: `;` plus newline.
    fn write_semicolon_line(&mut self) {
        self.writer.write(";");
        self.writer.write_line();
    }

    /// Open a braced block and indent its contents.
    fn open_block(&mut self) {
        self.writer.write("{");
        self.writer.write_line();
        self.writer.increase_indent();
    }

    /// Close a block opened by `open_block`. Leaves the cursor after `}`.
    fn close_block(&mut self) {
        self.writer.ensure_line_start();
        self.writer.decrease_indent();
        self.writer.write("}");
    }

    /// `<module>.global("a", "b");` and the matching metadata.
    /// Nothing is written for an empty name list.
    fn write_registration(&mut self, sink: Sink, names: &[String]) {
        if names.is_empty() {
            return;
        }

        let registered = match sink {
            Sink::Global => &mut self.bindings.global,
            Sink::Scope => &mut self.bindings.scope,
        };
        registered.extend(names.iter().cloned());

        let mut call = String::with_capacity(32 + names.len() * 8);
        call.push_str(&self.options.module_binding);
        call.push('.');
        call.push_str(sink.method());
        call.push('(');
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                call.push_str(", ");
            }
            push_quoted(&mut call, name);
        }
        call.push(')');

        self.write(&call);
        self.write_semicolon_line();
    }

    // =========================================================================
    // Recursion guard
    // =========================================================================

    fn enter(&mut self, offset: u32) -> Result<()> {
        if self.depth >= MAX_STATEMENT_DEPTH {
            return Err(RewriteError::NestingTooDeep {
                depth: MAX_STATEMENT_DEPTH,
                offset,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Append `name` as a double-quoted JavaScript string literal.
fn push_quoted(out: &mut String, name: &str) {
    out.push('"');
    for c in name.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
