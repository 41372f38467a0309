//! Binding Pattern Module
//!
//! Flattens destructuring patterns into the names they bind, and re-serializes
//! them as assignment targets for the redirected forms.

use oxc_ast::ast::{BindingPattern, BindingProperty};
use oxc_span::GetSpan;

use super::SnippetPrinter;
use crate::error::{Result, RewriteError};

/// Names bound by a pattern, in declaration order. Duplicates are kept.
///
/// `[a, {b: [c, ...d]}, ...e]` binds `a`, `c`, `d`, `e`; a default value
/// never contributes a name.
pub fn binding_names(pattern: &BindingPattern<'_>) -> Vec<String> {
    let mut names = Vec::new();
    collect_binding_names(pattern, &mut names);
    names
}

pub(super) fn collect_binding_names(pattern: &BindingPattern<'_>, names: &mut Vec<String>) {
    match pattern {
        BindingPattern::BindingIdentifier(ident) => names.push(ident.name.to_string()),
        BindingPattern::ArrayPattern(array) => {
            for element in array.elements.iter().flatten() {
                collect_binding_names(element, names);
            }
            if let Some(rest) = &array.rest {
                collect_binding_names(&rest.argument, names);
            }
        }
        BindingPattern::ObjectPattern(object) => {
            for property in &object.properties {
                collect_binding_names(&property.value, names);
            }
            if let Some(rest) = &object.rest {
                collect_binding_names(&rest.argument, names);
            }
        }
        BindingPattern::AssignmentPattern(assign) => collect_binding_names(&assign.left, names),
    }
}

impl<'a> SnippetPrinter<'a> {
    // =========================================================================
    // Binding Patterns
    // =========================================================================

    /// Re-serialize a binding pattern. The result is valid both as a binding
    /// (after `let`) and as an assignment target.
    pub(crate) fn binding_pattern_text(&self, pattern: &BindingPattern<'_>) -> Result<String> {
        match pattern {
            BindingPattern::BindingIdentifier(ident) => Ok(ident.name.to_string()),
            BindingPattern::ArrayPattern(array) => {
                let mut out = String::from("[");
                for (i, element) in array.elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    if let Some(element) = element {
                        out.push_str(&self.binding_pattern_text(element)?);
                    }
                }
                if let Some(rest) = &array.rest {
                    if !array.elements.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str("...");
                    out.push_str(&self.binding_pattern_text(&rest.argument)?);
                } else if matches!(array.elements.last(), Some(None)) {
                    // A trailing hole needs its comma, or the pattern loses a slot.
                    out.push(',');
                }
                out.push(']');
                Ok(out)
            }
            BindingPattern::ObjectPattern(object) => {
                let mut out = String::from("{");
                for (i, property) in object.properties.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&self.binding_property_text(property)?);
                }
                if let Some(rest) = &object.rest {
                    if !object.properties.is_empty() {
                        out.push_str(", ");
                    }
                    out.push_str("...");
                    out.push_str(&self.binding_pattern_text(&rest.argument)?);
                }
                out.push('}');
                Ok(out)
            }
            BindingPattern::AssignmentPattern(assign) => Ok(format!(
                "{} = {}",
                self.binding_pattern_text(&assign.left)?,
                self.expression_text(&assign.right)
            )),
        }
    }

    /// `key: value`, with computed keys re-wrapped as `[expr]`.
    fn binding_property_text(&self, property: &BindingProperty<'_>) -> Result<String> {
        let value = self.binding_pattern_text(&property.value)?;
        if property.computed {
            let Some(key) = property.key.as_expression() else {
                return Err(RewriteError::unexpected(
                    "non-expression key",
                    "computed pattern property",
                    property.span.start,
                ));
            };
            Ok(format!("[{}]: {value}", self.expression_text(key)))
        } else {
            Ok(format!("{}: {value}", self.text(property.key.span())))
        }
    }

    /// An object pattern at the start of a statement would parse as a block.
    pub(super) fn is_object_pattern(pattern: &BindingPattern<'_>) -> bool {
        matches!(pattern, BindingPattern::ObjectPattern(_))
    }
}
