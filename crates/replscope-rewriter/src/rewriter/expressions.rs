//! Expression Module
//!
//! Expressions are copied from the source. Only the two module-only forms
//! are rewritten, wherever they occur inside the copied span:
//! - `import.meta`       -> `<module>.meta`
//! - `import(specifier)` -> `<module>.import(<specifier>)`

use oxc_ast::ast::{Expression, ImportExpression, MetaProperty};
use oxc_ast_visit::Visit;
use oxc_span::{GetSpan, Span};

use super::SnippetPrinter;

/// Collects the host-sensitive sites below a node, with their replacement text.
pub(super) struct HostFormCollector<'p, 'a> {
    printer: &'p SnippetPrinter<'a>,
    sites: Vec<(Span, String)>,
}

impl<'ast> Visit<'ast> for HostFormCollector<'_, '_> {
    fn visit_meta_property(&mut self, it: &MetaProperty<'ast>) {
        if it.meta.name.as_str() == "import" && it.property.name.as_str() == "meta" {
            let text = format!("{}.meta", self.printer.options.module_binding);
            self.sites.push((it.span, text));
        }
    }

    fn visit_import_expression(&mut self, it: &ImportExpression<'ast>) {
        // The specifier is rewritten recursively, so children are not walked here.
        let text = format!(
            "{}.import({})",
            self.printer.options.module_binding,
            self.printer.expression_text(&it.source)
        );
        self.sites.push((it.span, text));
    }
}

impl<'a> SnippetPrinter<'a> {
    // =========================================================================
    // Expressions
    // =========================================================================

    /// Source text of an expression with `import.meta` and `import()` replaced.
    pub(super) fn expression_text(&self, expr: &Expression<'_>) -> String {
        self.spliced_text(expr.span(), |collector| collector.visit_expression(expr))
    }

    /// Source text of `span` with every host form found by `walk` replaced.
    /// Sites outside `span` are ignored.
    pub(super) fn spliced_text(
        &self,
        span: Span,
        walk: impl FnOnce(&mut HostFormCollector<'_, 'a>),
    ) -> String {
        let mut collector = HostFormCollector {
            printer: self,
            sites: Vec::new(),
        };
        walk(&mut collector);

        let mut sites = collector.sites;
        if sites.is_empty() {
            return self.text(span).to_string();
        }
        sites.sort_by_key(|(site, _)| site.start);

        let mut out = String::with_capacity(span.size() as usize + 16);
        let mut cursor = span.start;
        for (site, replacement) in &sites {
            if site.start < cursor || site.end > span.end {
                continue;
            }
            out.push_str(Span::new(cursor, site.start).source_text(self.source));
            out.push_str(replacement);
            cursor = site.end;
        }
        out.push_str(Span::new(cursor, span.end).source_text(self.source));
        out.trim().to_string()
    }
}
