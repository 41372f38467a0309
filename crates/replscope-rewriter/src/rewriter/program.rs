use oxc_ast::ast::{Directive, Program, Statement};
use oxc_span::GetSpan;
use tracing::{debug, trace};

use super::{ScopeMode, SnippetPrinter};
use crate::error::Result;

impl<'a> SnippetPrinter<'a> {
    // =========================================================================
    // Program
    // =========================================================================

    /// Rewrite a whole snippet. The last statement, when it is a bare
    /// expression, becomes the snippet's `return` value.
    pub(crate) fn emit_program(&mut self, program: &Program<'_>) -> Result<()> {
        let statements = &program.body;
        debug!(
            statements = statements.len(),
            directives = program.directives.len(),
            "rewriting program"
        );

        let Some((last, rest)) = statements.split_last() else {
            self.emit_directives_as_result(&program.directives);
            return Ok(());
        };

        for directive in &program.directives {
            let text = self.text(directive.expression.span);
            self.write(text);
            self.write_semicolon_line();
        }

        let hoist = self.options.hoist_functions;
        if hoist {
            for stmt in statements.iter().filter(|stmt| is_function_declaration(stmt)) {
                trace!(offset = stmt.span().start, "hoisting function declaration");
                self.emit_statement(stmt, ScopeMode::TopLevel)?;
            }
        }

        for stmt in rest {
            if hoist && is_function_declaration(stmt) {
                continue;
            }
            trace!(offset = stmt.span().start, "top-level statement");
            self.emit_statement(stmt, ScopeMode::TopLevel)?;
        }

        match last {
            Statement::ExpressionStatement(expr_stmt) => {
                trace!(offset = expr_stmt.span.start, "final expression");
                let text = self.expression_text(&expr_stmt.expression);
                self.write("return ");
                self.write(&text);
                self.write_semicolon_line();
            }
            stmt if hoist && is_function_declaration(stmt) => {}
            stmt => {
                trace!(offset = stmt.span().start, "top-level statement");
                self.emit_statement(stmt, ScopeMode::TopLevel)?;
            }
        }
        Ok(())
    }

    /// A snippet made of directives only (`"abc"`) evaluates to the last one.
    fn emit_directives_as_result(&mut self, directives: &[Directive<'_>]) {
        let Some((last, rest)) = directives.split_last() else {
            return;
        };
        for directive in rest {
            let text = self.text(directive.expression.span);
            self.write(text);
            self.write_semicolon_line();
        }
        let text = self.text(last.expression.span);
        self.write("return ");
        self.write(text);
        self.write_semicolon_line();
    }
}

fn is_function_declaration(stmt: &Statement<'_>) -> bool {
    matches!(stmt, Statement::FunctionDeclaration(_))
}
