//! Execution harness for rewritten snippets.
//!
//! The host compiles the wrapped code as the body of a (sloppy-mode) function
//! taking [`parameters`], and calls it with:
//!
//! | parameter    | value                                   |
//! |--------------|-----------------------------------------|
//! | `arguments`  | `undefined` (hides the wrapper's own)   |
//! | `self`       | the global sink                         |
//! | `<global>`   | the global sink                         |
//! | `globalThis` | the global sink                         |
//! | `<scope>`    | the persistent scope object             |
//! | `<module>`   | the module capability                   |
//!
//! The snippet itself runs in a strict async arrow inside `with (<scope>)`, so
//! top-level `await` works and scope-sink names resolve as plain identifiers.
//! The call evaluates to a promise of the snippet's final expression.

use crate::options::RewriteOptions;

/// Body of the function the host compiles around rewritten `code`.
pub fn wrap(code: &str, options: &RewriteOptions) -> String {
    let scope = &options.scope_binding;
    let mut out = String::with_capacity(code.len() + scope.len() + 64);
    out.push_str("with (");
    out.push_str(scope);
    out.push_str(") {\nreturn (async () => {\n\"use strict\";\n");
    out.push_str(code);
    // The newline ends a trailing line comment, the `;` a trailing expression.
    out.push_str("\n;\n})();\n}");
    out
}

/// Parameter names for the compiled function, in call order. A binding name
/// that coincides with one of the fixed names is listed once.
pub fn parameters(options: &RewriteOptions) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(6);
    for name in [
        "arguments",
        "self",
        options.global_binding.as_str(),
        "globalThis",
        options.scope_binding.as_str(),
        options.module_binding.as_str(),
    ] {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}
