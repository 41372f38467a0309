//! Source-to-source rewriter for JavaScript REPL snippets.
//!
//! Each snippet is parsed on its own, but its top-level bindings must survive
//! into the next one. The rewriter redirects them into storage supplied by the
//! host:
//! - `var` and function declarations go to a global sink (`window`)
//! - top-level `let`, `const` and classes go to a scope object (`__scope__`)
//!   that the harness puts in front of the snippet with `with`
//! - `import.meta` and `import(x)` go through a module capability (`__module__`)
//! - the final bare expression becomes the snippet's `return` value
//!
//! ```
//! let code = replscope_rewriter::rewrite("let a = 5;\na * 2").unwrap();
//! assert_eq!(code, "__module__.scope(\"a\");\na = 5;\nreturn a * 2;\n");
//! ```

// Rewrite errors
pub mod error;
pub use error::{Result, RewriteError};

// Binding names and emission switches
pub mod options;
pub use options::RewriteOptions;

// Output buffer with indentation tracking
pub mod source_writer;

// Syntax-tree walk, split by syntax category
mod rewriter;
pub use rewriter::{Bindings, ScopeMode, binding_names};

// Parse + rewrite entry points
pub mod driver;
pub use driver::{RewriteOutput, Rewriter, flatten_pattern_names, rewrite, rewrite_pattern_text};

// Wrapper the host compiles around rewritten code
pub mod harness;
