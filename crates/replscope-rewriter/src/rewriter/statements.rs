//! Statement Module
//!
//! One walk over statement lists, parameterized by `ScopeMode`. Control flow
//! is rebuilt the same way in every mode; only declarations differ:
//!
//! | declaration       | TopLevel          | TopLevelBlock     | FunctionBody |
//! |-------------------|-------------------|-------------------|--------------|
//! | `var`             | global sink       | global sink       | ordinary     |
//! | function          | global property   | global property   | ordinary     |
//! | `let` / `const`   | scope sink        | ordinary          | ordinary     |
//! | class             | scope sink        | ordinary          | ordinary     |
//!
//! Redirected declarations are registered *before* the statement that carries
//! them (and before any labels in front of it), then re-emitted as bare
//! assignments.

use oxc_ast::ast::{
    BlockStatement, Class, ForInStatement, ForOfStatement, ForStatement, ForStatementInit,
    ForStatementLeft, Function, IfStatement, LabeledStatement, Statement, SwitchStatement,
    TryStatement, VariableDeclaration, VariableDeclarationKind, VariableDeclarator,
};
use oxc_ast_visit::Visit;
use oxc_span::GetSpan;
use tracing::trace;

use super::patterns::collect_binding_names;
use super::{ScopeMode, Sink, SnippetPrinter};
use crate::error::{Result, RewriteError};

impl<'a> SnippetPrinter<'a> {
    // =========================================================================
    // Statement lists
    // =========================================================================

    pub(super) fn emit_statement_list(
        &mut self,
        statements: &[Statement<'_>],
        mode: ScopeMode,
    ) -> Result<()> {
        for stmt in statements {
            self.emit_statement(stmt, mode)?;
        }
        Ok(())
    }

    pub(super) fn emit_statement(&mut self, stmt: &Statement<'_>, mode: ScopeMode) -> Result<()> {
        self.emit_statement_with(stmt, mode, false)
    }

    /// `registered` is set when the `var` names carried by `stmt` were already
    /// registered by an enclosing label.
    fn emit_statement_with(
        &mut self,
        stmt: &Statement<'_>,
        mode: ScopeMode,
        registered: bool,
    ) -> Result<()> {
        self.enter(stmt.span().start)?;
        if !registered {
            let names = Self::hoisted_var_names(stmt, mode);
            self.write_registration(Sink::Global, &names);
        }
        let result = self.emit_statement_kind(stmt, mode);
        self.leave();
        result
    }

    fn emit_statement_kind(&mut self, stmt: &Statement<'_>, mode: ScopeMode) -> Result<()> {
        match stmt {
            // -- Control flow --
            Statement::BlockStatement(block) => {
                self.emit_block(block, mode.nested())?;
                self.write_line();
            }
            Statement::IfStatement(if_stmt) => {
                self.emit_if(if_stmt, mode)?;
                self.write_line();
            }
            Statement::WhileStatement(while_stmt) => {
                let test = self.expression_text(&while_stmt.test);
                self.write("while (");
                self.write(&test);
                self.write(") ");
                self.emit_embedded(&while_stmt.body, mode)?;
                self.write_line();
            }
            Statement::DoWhileStatement(do_while) => {
                self.write("do ");
                self.emit_embedded(&do_while.body, mode)?;
                let test = self.expression_text(&do_while.test);
                self.write(" while (");
                self.write(&test);
                self.write(")");
                self.write_semicolon_line();
            }
            Statement::ForStatement(for_stmt) => {
                self.emit_for(for_stmt, mode)?;
                self.write_line();
            }
            Statement::ForInStatement(for_in) => {
                self.emit_for_in(for_in, mode)?;
                self.write_line();
            }
            Statement::ForOfStatement(for_of) => {
                self.emit_for_of(for_of, mode)?;
                self.write_line();
            }
            Statement::SwitchStatement(switch) => {
                self.emit_switch(switch, mode)?;
                self.write_line();
            }
            Statement::TryStatement(try_stmt) => {
                self.emit_try(try_stmt, mode)?;
                self.write_line();
            }
            Statement::WithStatement(with) => {
                let object = self.expression_text(&with.object);
                self.write("with (");
                self.write(&object);
                self.write(") ");
                self.emit_embedded(&with.body, mode)?;
                self.write_line();
            }
            Statement::LabeledStatement(labeled) => self.emit_labeled(labeled, mode)?,

            // -- Jumps --
            Statement::ReturnStatement(ret) => {
                self.write("return");
                if let Some(argument) = &ret.argument {
                    let text = self.expression_text(argument);
                    self.write(" ");
                    self.write(&text);
                }
                self.write_semicolon_line();
            }
            Statement::ThrowStatement(throw) => {
                let text = self.expression_text(&throw.argument);
                self.write("throw ");
                self.write(&text);
                self.write_semicolon_line();
            }
            Statement::BreakStatement(brk) => {
                self.write("break");
                if let Some(label) = &brk.label {
                    self.write(" ");
                    self.write(label.name.as_str());
                }
                self.write_semicolon_line();
            }
            Statement::ContinueStatement(cont) => {
                self.write("continue");
                if let Some(label) = &cont.label {
                    self.write(" ");
                    self.write(label.name.as_str());
                }
                self.write_semicolon_line();
            }

            // -- Other statements --
            Statement::ExpressionStatement(expr_stmt) => {
                let text = self.expression_text(&expr_stmt.expression);
                self.write(&text);
                self.write_semicolon_line();
            }
            Statement::EmptyStatement(_) | Statement::DebuggerStatement(_) => {}

            // -- Declarations --
            Statement::VariableDeclaration(decl) => self.emit_variable_declaration(decl, mode)?,
            Statement::FunctionDeclaration(func) => self.emit_function_declaration(func, mode)?,
            Statement::ClassDeclaration(class) => self.emit_class_declaration(class, mode)?,

            // -- Module declarations --
            Statement::ImportDeclaration(_)
            | Statement::ExportAllDeclaration(_)
            | Statement::ExportDefaultDeclaration(_)
            | Statement::ExportNamedDeclaration(_) => {
                if mode != ScopeMode::TopLevel {
                    return Err(RewriteError::unexpected(
                        "module declaration",
                        "nested statement",
                        stmt.span().start,
                    ));
                }
                trace!(offset = stmt.span().start, "dropping module declaration");
            }

            _ => {
                return Err(RewriteError::unexpected(
                    "TypeScript declaration",
                    "statement",
                    stmt.span().start,
                ));
            }
        }
        Ok(())
    }

    // =========================================================================
    // Blocks and embedded bodies
    // =========================================================================

    /// `{ ... }` with the statements in `mode`. No trailing newline.
    fn emit_block(&mut self, block: &BlockStatement<'_>, mode: ScopeMode) -> Result<()> {
        self.open_block();
        self.emit_statement_list(&block.body, mode)?;
        self.close_block();
        Ok(())
    }

    /// The body of an `if`, loop or `with`, always braced so a redirected
    /// declaration stays under its guard as a whole.
    fn emit_embedded(&mut self, body: &Statement<'_>, mode: ScopeMode) -> Result<()> {
        let nested = mode.nested();
        match body {
            Statement::BlockStatement(block) => self.emit_block(block, nested),
            other => {
                self.open_block();
                self.emit_statement(other, nested)?;
                self.close_block();
                Ok(())
            }
        }
    }

    fn emit_if(&mut self, if_stmt: &IfStatement<'_>, mode: ScopeMode) -> Result<()> {
        let test = self.expression_text(&if_stmt.test);
        self.write("if (");
        self.write(&test);
        self.write(") ");
        self.emit_embedded(&if_stmt.consequent, mode)?;

        match &if_stmt.alternate {
            None => {}
            // `else if` chains stay flat.
            Some(Statement::IfStatement(else_if)) => {
                self.enter(else_if.span.start)?;
                self.write(" else ");
                let result = self.emit_if(else_if, mode);
                self.leave();
                result?;
            }
            Some(alternate) => {
                self.write(" else ");
                self.emit_embedded(alternate, mode)?;
            }
        }
        Ok(())
    }

    fn emit_switch(&mut self, switch: &SwitchStatement<'_>, mode: ScopeMode) -> Result<()> {
        let discriminant = self.expression_text(&switch.discriminant);
        self.write("switch (");
        self.write(&discriminant);
        self.write(") ");
        self.open_block();
        for case in &switch.cases {
            match &case.test {
                Some(test) => {
                    let text = self.expression_text(test);
                    self.write("case ");
                    self.write(&text);
                    self.write(":");
                }
                None => self.write("default:"),
            }
            self.write_line();
            self.writer.increase_indent();
            self.emit_statement_list(&case.consequent, mode.nested())?;
            self.writer.decrease_indent();
        }
        self.close_block();
        Ok(())
    }

    fn emit_try(&mut self, try_stmt: &TryStatement<'_>, mode: ScopeMode) -> Result<()> {
        let nested = mode.nested();
        self.write("try ");
        self.emit_block(&try_stmt.block, nested)?;

        if let Some(handler) = &try_stmt.handler {
            self.write(" catch ");
            if let Some(param) = &handler.param {
                let pattern = self.binding_pattern_text(&param.pattern)?;
                self.write("(");
                self.write(&pattern);
                self.write(") ");
            }
            self.emit_block(&handler.body, nested)?;
        }
        if let Some(finalizer) = &try_stmt.finalizer {
            self.write(" finally ");
            self.emit_block(finalizer, nested)?;
        }
        Ok(())
    }

    /// Labels are written right in front of the innermost statement; the `var`
    /// registration of a labeled loop goes before the first label.
    fn emit_labeled(&mut self, labeled: &LabeledStatement<'_>, mode: ScopeMode) -> Result<()> {
        let mut labels = vec![labeled.label.name.as_str()];
        let mut body = &labeled.body;
        while let Statement::LabeledStatement(inner) = body {
            labels.push(inner.label.name.as_str());
            body = &inner.body;
        }

        let nested = mode.nested();
        let names = Self::hoisted_var_names(body, nested);
        self.write_registration(Sink::Global, &names);
        for label in labels {
            self.write(label);
            self.write(": ");
        }
        self.emit_statement_with(body, nested, true)
    }

    // =========================================================================
    // Loops
    // =========================================================================

    fn emit_for(&mut self, for_stmt: &ForStatement<'_>, mode: ScopeMode) -> Result<()> {
        let init = match &for_stmt.init {
            None => String::new(),
            Some(ForStatementInit::VariableDeclaration(decl)) => {
                if Self::redirects_declaration(decl, mode) {
                    self.assignment_list_text(decl)?
                } else {
                    self.declaration_text(decl)?
                }
            }
            Some(init) => match init.as_expression() {
                Some(expr) => self.expression_text(expr),
                None => {
                    return Err(RewriteError::unexpected(
                        "for initializer",
                        "for statement",
                        init.span().start,
                    ));
                }
            },
        };

        self.write("for (");
        self.write(&init);
        self.write(";");
        if let Some(test) = &for_stmt.test {
            let text = self.expression_text(test);
            self.write(" ");
            self.write(&text);
        }
        self.write(";");
        if let Some(update) = &for_stmt.update {
            let text = self.expression_text(update);
            self.write(" ");
            self.write(&text);
        }
        self.write(") ");
        self.emit_embedded(&for_stmt.body, mode)
    }

    fn emit_for_in(&mut self, for_in: &ForInStatement<'_>, mode: ScopeMode) -> Result<()> {
        let left = self.for_left_text(&for_in.left, mode, false)?;
        let right = self.expression_text(&for_in.right);
        self.write("for (");
        self.write(&left);
        self.write(" in ");
        self.write(&right);
        self.write(") ");
        self.emit_embedded(&for_in.body, mode)
    }

    fn emit_for_of(&mut self, for_of: &ForOfStatement<'_>, mode: ScopeMode) -> Result<()> {
        let left = self.for_left_text(&for_of.left, mode, true)?;
        let right = self.expression_text(&for_of.right);
        self.write(if for_of.r#await { "for await (" } else { "for (" });
        self.write(&left);
        self.write(" of ");
        self.write(&right);
        self.write(") ");
        self.emit_embedded(&for_of.body, mode)
    }

    /// Head of a `for-in`/`for-of`. A redirected `var` head keeps only its
    /// pattern: the loop assigns it on every iteration.
    fn for_left_text(
        &self,
        left: &ForStatementLeft<'_>,
        mode: ScopeMode,
        for_of: bool,
    ) -> Result<String> {
        match left {
            ForStatementLeft::VariableDeclaration(decl) => {
                if !Self::redirects_declaration(decl, mode) {
                    return self.declaration_text(decl);
                }
                let Some(declarator) = decl.declarations.first() else {
                    return Err(RewriteError::unexpected(
                        "empty declaration",
                        "for-in/for-of head",
                        decl.span.start,
                    ));
                };
                let pattern = self.binding_pattern_text(&declarator.id)?;
                // `for (async of xs)` is a syntax error.
                if for_of && pattern == "async" {
                    return Ok("(async)".to_string());
                }
                Ok(pattern)
            }
            other => Ok(self.spliced_text(other.span(), |collector| {
                collector.visit_for_statement_left(other);
            })),
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn emit_variable_declaration(
        &mut self,
        decl: &VariableDeclaration<'_>,
        mode: ScopeMode,
    ) -> Result<()> {
        let lexical = matches!(
            decl.kind,
            VariableDeclarationKind::Let | VariableDeclarationKind::Const
        );
        if lexical && mode.redirects_lexical() {
            let names = Self::declaration_names(decl);
            self.write_registration(Sink::Scope, &names);
            if decl.kind == VariableDeclarationKind::Const {
                self.bindings.constants.extend(names);
            }
            let text = self.assignment_list_text(decl)?;
            self.write(&text);
        } else if Self::redirects_declaration(decl, mode) {
            // Registered by `emit_statement_with`.
            let text = self.assignment_list_text(decl)?;
            self.write(&text);
        } else {
            let text = self.declaration_text(decl)?;
            self.write(&text);
        }
        self.write_semicolon_line();
        Ok(())
    }

    fn emit_function_declaration(&mut self, func: &Function<'_>, mode: ScopeMode) -> Result<()> {
        let Some(id) = &func.id else {
            return Err(RewriteError::unexpected(
                "anonymous function",
                "function declaration",
                func.span.start,
            ));
        };
        if !mode.redirects_var() {
            self.emit_function(func, true)?;
            self.write_line();
            return Ok(());
        }

        let name = id.name.as_str();
        self.bindings.global.insert(name.to_string());
        let mut target = String::with_capacity(self.options.global_binding.len() + name.len() + 4);
        target.push_str(&self.options.global_binding);
        target.push('[');
        super::push_quoted(&mut target, name);
        target.push_str("] = ");
        self.write(&target);
        self.emit_function(func, false)?;
        self.write_semicolon_line();
        Ok(())
    }

    fn emit_class_declaration(&mut self, class: &Class<'_>, mode: ScopeMode) -> Result<()> {
        if !mode.redirects_lexical() {
            self.emit_class(class)?;
            self.write_line();
            return Ok(());
        }

        let Some(id) = &class.id else {
            return Err(RewriteError::unexpected(
                "anonymous class",
                "class declaration",
                class.span.start,
            ));
        };
        let name = id.name.to_string();
        self.write_registration(Sink::Scope, std::slice::from_ref(&name));
        self.write(&name);
        self.write(" = ");
        self.emit_class(class)?;
        self.write_semicolon_line();
        Ok(())
    }

    /// `kind a = x, {b} = y` with patterns and initializers rewritten.
    fn declaration_text(&self, decl: &VariableDeclaration<'_>) -> Result<String> {
        let mut out = String::from(declaration_keyword(decl.kind));
        for (i, declarator) in decl.declarations.iter().enumerate() {
            out.push_str(if i == 0 { " " } else { ", " });
            out.push_str(&self.binding_pattern_text(&declarator.id)?);
            if let Some(init) = &declarator.init {
                out.push_str(" = ");
                out.push_str(&self.expression_text(init));
            }
        }
        Ok(out)
    }

    /// `a = x, ({b} = y), c = void 0`: the declarators as one assignment
    /// expression.
    fn assignment_list_text(&self, decl: &VariableDeclaration<'_>) -> Result<String> {
        let mut parts = Vec::with_capacity(decl.declarations.len());
        for declarator in &decl.declarations {
            parts.push(self.assignment_text(declarator)?);
        }
        Ok(parts.join(", "))
    }

    fn assignment_text(&self, declarator: &VariableDeclarator<'_>) -> Result<String> {
        let target = self.binding_pattern_text(&declarator.id)?;
        let value = match &declarator.init {
            Some(init) => self.expression_text(init),
            None => "void 0".to_string(),
        };
        if Self::is_object_pattern(&declarator.id) {
            Ok(format!("({target} = {value})"))
        } else {
            Ok(format!("{target} = {value}"))
        }
    }

    // =========================================================================
    // Name collection
    // =========================================================================

    fn redirects_declaration(decl: &VariableDeclaration<'_>, mode: ScopeMode) -> bool {
        decl.kind == VariableDeclarationKind::Var && mode.redirects_var()
    }

    fn declaration_names(decl: &VariableDeclaration<'_>) -> Vec<String> {
        let mut names = Vec::new();
        for declarator in &decl.declarations {
            collect_binding_names(&declarator.id, &mut names);
        }
        names
    }

    /// Names `stmt` registers with the global sink before it runs: a
    /// redirected `var` statement or the `var` head of a loop.
    fn hoisted_var_names(stmt: &Statement<'_>, mode: ScopeMode) -> Vec<String> {
        let decl = match stmt {
            Statement::VariableDeclaration(decl) => decl,
            Statement::ForStatement(for_stmt) => match &for_stmt.init {
                Some(ForStatementInit::VariableDeclaration(decl)) => decl,
                _ => return Vec::new(),
            },
            Statement::ForInStatement(for_in) => match &for_in.left {
                ForStatementLeft::VariableDeclaration(decl) => decl,
                _ => return Vec::new(),
            },
            Statement::ForOfStatement(for_of) => match &for_of.left {
                ForStatementLeft::VariableDeclaration(decl) => decl,
                _ => return Vec::new(),
            },
            _ => return Vec::new(),
        };
        if Self::redirects_declaration(decl, mode) {
            Self::declaration_names(decl)
        } else {
            Vec::new()
        }
    }
}

const fn declaration_keyword(kind: VariableDeclarationKind) -> &'static str {
    match kind {
        VariableDeclarationKind::Var => "var",
        VariableDeclarationKind::Let => "let",
        VariableDeclarationKind::Const => "const",
        VariableDeclarationKind::Using => "using",
        VariableDeclarationKind::AwaitUsing => "await using",
    }
}
