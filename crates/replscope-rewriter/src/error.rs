use oxc_diagnostics::OxcDiagnostic;
use replscope_common::{Diagnostic, LineMap};
use thiserror::Error;

pub type Result<T, E = RewriteError> = std::result::Result<T, E>;

/// Why a snippet could not be rewritten.
///
/// A rewrite either produces the whole output or one of these; partial output
/// is never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// The snippet does not parse. Carries the first parser diagnostic.
    #[error("{message} ({line}:{column})")]
    Syntax {
        message: String,
        offset: u32,
        length: u32,
        /// 1-indexed
        line: u32,
        /// 1-indexed
        column: u32,
    },

    /// The parser produced a node the rewriter has no rule for in this position
    /// (TypeScript or JSX syntax, a declaration where only statements occur).
    #[error("unexpected {kind} in {context} at offset {offset}")]
    UnexpectedNode {
        kind: &'static str,
        context: &'static str,
        offset: u32,
    },

    #[error("statements nested deeper than {depth} levels at offset {offset}")]
    NestingTooDeep { depth: u32, offset: u32 },

    /// A configured binding name is not usable as a JavaScript identifier.
    #[error("option `{name}` must be a JavaScript identifier, got {value:?}")]
    InvalidOption { name: &'static str, value: String },
}

impl RewriteError {
    pub(crate) fn syntax(diagnostic: &OxcDiagnostic, source: &str) -> Self {
        let (offset, length) = diagnostic
            .labels
            .as_ref()
            .and_then(|labels| labels.first())
            .map(|label| (label.offset() as u32, label.len() as u32))
            .unwrap_or((0, 0));
        let (line, column) = LineMap::build(source)
            .offset_to_position(offset, source)
            .one_based();

        RewriteError::Syntax {
            message: diagnostic.message.to_string(),
            offset,
            length,
            line,
            column,
        }
    }

    pub(crate) const fn unexpected(kind: &'static str, context: &'static str, offset: u32) -> Self {
        RewriteError::UnexpectedNode {
            kind,
            context,
            offset,
        }
    }

    /// Byte offset the error points at, when it has one.
    pub const fn offset(&self) -> Option<u32> {
        match self {
            RewriteError::Syntax { offset, .. }
            | RewriteError::UnexpectedNode { offset, .. }
            | RewriteError::NestingTooDeep { offset, .. } => Some(*offset),
            RewriteError::InvalidOption { .. } => None,
        }
    }

    /// Convert to a located diagnostic for reporting against `file`.
    pub fn to_diagnostic(&self, file: &str) -> Diagnostic {
        match self {
            RewriteError::Syntax {
                message,
                offset,
                length,
                ..
            } => Diagnostic::error(file, *offset, *length, message.clone()),
            other => Diagnostic::error(file, other.offset().unwrap_or(0), 0, other.to_string()),
        }
    }
}
