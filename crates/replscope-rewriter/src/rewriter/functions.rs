use oxc_ast::ast::{FormalParameter, FormalParameters, Function, FunctionBody};
use oxc_ast_visit::Visit;
use oxc_span::{GetSpan, Span};

use super::{ScopeMode, SnippetPrinter};
use crate::error::{Result, RewriteError};

impl<'a> SnippetPrinter<'a> {
    // =========================================================================
    // Functions
    // =========================================================================

    /// Emit `[async ]function[*] [name](params) { body }` without a trailing
    /// newline. The body is always rewritten in function scope.
    ///
    /// With `named` unset the name is dropped, so that inside the body the
    /// function's own name still resolves to the sink property.
    pub(super) fn emit_function(&mut self, func: &Function<'_>, named: bool) -> Result<()> {
        let Some(body) = &func.body else {
            return Err(RewriteError::unexpected(
                "function without body",
                "function",
                func.span.start,
            ));
        };

        if func.r#async {
            self.write("async ");
        }
        self.write(if func.generator { "function*" } else { "function" });
        match &func.id {
            Some(id) if named => {
                self.write(" ");
                self.write(id.name.as_str());
            }
            _ => self.write(" "),
        }
        let params = self.parameters_text(&func.params)?;
        self.write("(");
        self.write(&params);
        self.write(") ");
        self.emit_function_body(body)
    }

    /// Comma-separated parameter list, without the parentheses.
    pub(super) fn parameters_text(&self, params: &FormalParameters<'_>) -> Result<String> {
        let mut parts = Vec::with_capacity(params.items.len() + 1);
        for param in &params.items {
            parts.push(self.parameter_text(param)?);
        }
        if let Some(rest) = &params.rest {
            parts.push(format!("...{}", self.binding_pattern_text(&rest.rest.argument)?));
        }
        Ok(parts.join(", "))
    }

    fn parameter_text(&self, param: &FormalParameter<'_>) -> Result<String> {
        let mut text = self.binding_pattern_text(&param.pattern)?;

        // A default written after the pattern (`a = 1`) but kept outside it.
        let pattern_end = param.pattern.span().end;
        if pattern_end < param.span.end {
            let tail = self.spliced_text(Span::new(pattern_end, param.span.end), |collector| {
                collector.visit_formal_parameter(param);
            });
            if !tail.is_empty() {
                text.push(' ');
                text.push_str(&tail);
            }
        }
        Ok(text)
    }

    /// Emit `{ directives statements }` in function scope.
    pub(super) fn emit_function_body(&mut self, body: &FunctionBody<'_>) -> Result<()> {
        self.enter(body.span.start)?;
        self.open_block();
        for directive in &body.directives {
            let text = self.text(directive.expression.span);
            self.write(text);
            self.write_semicolon_line();
        }
        self.emit_statement_list(&body.statements, ScopeMode::FunctionBody)?;
        self.close_block();
        self.leave();
        Ok(())
    }
}
