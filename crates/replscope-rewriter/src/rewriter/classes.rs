//! Class Module
//!
//! Rebuilds class declarations member by member. A class body is always
//! function scope, whatever scope the class itself is declared in.

use oxc_ast::ast::{
    Class, ClassElement, Decorator, MethodDefinition, MethodDefinitionKind, PropertyKey,
};
use oxc_span::GetSpan;

use super::{ScopeMode, SnippetPrinter};
use crate::error::{Result, RewriteError};

impl<'a> SnippetPrinter<'a> {
    // =========================================================================
    // Classes
    // =========================================================================

    /// Emit `class [name] [extends expr] { members }` without a trailing newline.
    pub(super) fn emit_class(&mut self, class: &Class<'_>) -> Result<()> {
        self.enter(class.span.start)?;
        self.emit_decorators(&class.decorators);
        self.write("class ");
        if let Some(id) = &class.id {
            self.write(id.name.as_str());
            self.write(" ");
        }
        if let Some(super_class) = &class.super_class {
            let text = self.expression_text(super_class);
            self.write("extends ");
            self.write(&text);
            self.write(" ");
        }

        self.open_block();
        for element in &class.body.body {
            self.emit_class_element(element)?;
        }
        self.close_block();
        self.leave();
        Ok(())
    }

    fn emit_class_element(&mut self, element: &ClassElement<'_>) -> Result<()> {
        match element {
            ClassElement::StaticBlock(block) => {
                self.enter(block.span.start)?;
                self.write("static ");
                self.open_block();
                self.emit_statement_list(&block.body, ScopeMode::FunctionBody)?;
                self.close_block();
                self.write_line();
                self.leave();
            }
            ClassElement::MethodDefinition(method) => {
                self.emit_method(method)?;
                self.write_line();
            }
            ClassElement::PropertyDefinition(field) => {
                self.emit_decorators(&field.decorators);
                if field.r#static {
                    self.write("static ");
                }
                let key = self.property_key_text(&field.key, field.computed)?;
                self.write(&key);
                self.emit_field_initializer(field.value.as_ref());
            }
            ClassElement::AccessorProperty(accessor) => {
                self.emit_decorators(&accessor.decorators);
                if accessor.r#static {
                    self.write("static ");
                }
                self.write("accessor ");
                let key = self.property_key_text(&accessor.key, accessor.computed)?;
                self.write(&key);
                self.emit_field_initializer(accessor.value.as_ref());
            }
            ClassElement::TSIndexSignature(signature) => {
                return Err(RewriteError::unexpected(
                    "index signature",
                    "class body",
                    signature.span.start,
                ));
            }
        }
        Ok(())
    }

    fn emit_method(&mut self, method: &MethodDefinition<'_>) -> Result<()> {
        let func = &method.value;
        let Some(body) = &func.body else {
            return Err(RewriteError::unexpected(
                "method without body",
                "class body",
                method.span.start,
            ));
        };

        self.emit_decorators(&method.decorators);
        if method.r#static {
            self.write("static ");
        }
        if func.r#async {
            self.write("async ");
        }
        if func.generator {
            self.write("*");
        }
        match method.kind {
            MethodDefinitionKind::Get => self.write("get "),
            MethodDefinitionKind::Set => self.write("set "),
            MethodDefinitionKind::Constructor | MethodDefinitionKind::Method => {}
        }

        let key = self.property_key_text(&method.key, method.computed)?;
        let params = self.parameters_text(&func.params)?;
        self.write(&key);
        self.write("(");
        self.write(&params);
        self.write(") ");
        self.emit_function_body(body)
    }

    /// ` = <initializer>;` with `void 0` when there is none.
    fn emit_field_initializer(&mut self, value: Option<&oxc_ast::ast::Expression<'_>>) {
        let text = match value {
            Some(expr) => self.expression_text(expr),
            None => "void 0".to_string(),
        };
        self.write(" = ");
        self.write(&text);
        self.write_semicolon_line();
    }

    /// Computed keys are rewritten as `[expr]`; identifiers, literals and
    /// private names are copied.
    fn property_key_text(&self, key: &PropertyKey<'_>, computed: bool) -> Result<String> {
        if !computed {
            return Ok(self.text(key.span()).to_string());
        }
        match key.as_expression() {
            Some(expr) => Ok(format!("[{}]", self.expression_text(expr))),
            None => Err(RewriteError::unexpected(
                "non-expression key",
                "computed class member",
                key.span().start,
            )),
        }
    }

    fn emit_decorators(&mut self, decorators: &[Decorator<'_>]) {
        for decorator in decorators {
            let text = self.expression_text(&decorator.expression);
            self.write("@");
            self.write(&text);
            self.write(" ");
        }
    }
}
