//! Centralized limits for the rewriter.
//!
//! The rewriter is a recursive walk over the syntax tree; each nested
//! statement, function body or class body adds frames to the call stack.

/// Maximum nesting depth of statements, function bodies and class bodies.
///
/// Past this depth the rewriter fails with a "nesting too deep" error
/// instead of overflowing the stack. Rayon worker threads (used by the CLI
/// for multi-file input) run with a 2 MB stack, which bounds this value.
///
/// # JavaScript example
///
/// ```javascript
/// // Each block adds one level:
/// { { { { { /* ... 256 levels ... */ } } } } }
///
/// // So do nested functions and classes:
/// function a() { function b() { class C { m() { /* ... */ } } } }
/// ```
pub const MAX_STATEMENT_DEPTH: u32 = 256;

/// Initial output buffer capacity as a multiple of the input length.
///
/// Rewritten code is usually a little longer than its input (registration
/// calls, indentation), so the buffer starts slightly larger.
pub const OUTPUT_CAPACITY_FACTOR: usize = 2;
