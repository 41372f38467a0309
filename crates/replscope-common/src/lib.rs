//! Common types and utilities for the replscope rewriter.
//!
//! This crate provides foundational types shared by the rewriter and the CLI:
//! - Line/column positions for byte offsets (`LineMap`, `Position`)
//! - Diagnostics reported for rejected snippets (`Diagnostic`)
//! - Recursion limits

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Diagnostics for syntax errors and rejected nodes
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};

// Centralized limits and thresholds
pub mod limits;
