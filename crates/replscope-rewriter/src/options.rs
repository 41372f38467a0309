//! Rewriter configuration.

use oxc_syntax::identifier::is_identifier_name;
use oxc_syntax::keyword::is_reserved_keyword;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, RewriteError};

/// Names the rewritten code refers to, and emission switches.
///
/// The three binding names must match the parameter names the execution
/// harness binds (see [`crate::harness::parameters`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewriteOptions {
    /// Global-object-like sink: target of top-level `var` and function declarations.
    pub global_binding: String,
    /// Persistent scope object backing the `with` block around the snippet.
    pub scope_binding: String,
    /// Module capability exposing `meta`, `import`, `global` and `scope`.
    pub module_binding: String,
    /// Emit top-level function declarations before the other statements.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub hoist_functions: bool,
    /// Spaces per indentation level in the output.
    pub indent_width: usize,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        RewriteOptions {
            global_binding: "window".to_string(),
            scope_binding: "__scope__".to_string(),
            module_binding: "__module__".to_string(),
            hoist_functions: true,
            indent_width: 4,
        }
    }
}

impl RewriteOptions {
    /// Reject binding names that would produce unparsable output.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("globalBinding", &self.global_binding),
            ("scopeBinding", &self.scope_binding),
            ("moduleBinding", &self.module_binding),
        ] {
            if !is_binding_name(value) {
                return Err(RewriteError::InvalidOption {
                    name,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

/// An identifier usable as a reference in strict code.
fn is_binding_name(text: &str) -> bool {
    is_identifier_name(text) && !is_reserved_keyword(text)
}

/// Accept `true`/`false` as either JSON booleans or strings.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RewriteOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_identifier_bindings() {
        let options = RewriteOptions {
            scope_binding: "my scope".to_string(),
            ..RewriteOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(RewriteError::InvalidOption {
                name: "scopeBinding",
                value: "my scope".to_string(),
            })
        );

        let options = RewriteOptions {
            module_binding: "1module".to_string(),
            ..RewriteOptions::default()
        };
        assert!(options.validate().is_err());
        assert!(!is_binding_name(""));
        assert!(is_binding_name("$_scope1"));
    }

    #[test]
    fn rejects_reserved_words() {
        for word in ["class", "this", "new", "return", "let", "yield", "await"] {
            let options = RewriteOptions {
                global_binding: word.to_string(),
                ..RewriteOptions::default()
            };
            assert_eq!(
                options.validate(),
                Err(RewriteError::InvalidOption {
                    name: "globalBinding",
                    value: word.to_string(),
                }),
                "{word} cannot be referenced"
            );
        }
    }

    #[test]
    fn accepts_unicode_identifiers() {
        let options = RewriteOptions {
            scope_binding: "\u{3b1}\u{3bb}\u{3c6}\u{3b1}".to_string(),
            module_binding: "mod\u{e9}le".to_string(),
            ..RewriteOptions::default()
        };
        assert!(options.validate().is_ok());
        assert!(is_binding_name("globalThis"));
    }
}
