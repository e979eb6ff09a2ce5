//! Builder errors.
//!
//! [`InternalError`] means the walker and the builder disagree about the
//! shape of the event sequence: a compiler bug, fatal to the translation
//! unit. Every other [`BuildError`] is a mistake in the user's program and
//! can be reported as a diagnostic. A string literal that is quoted correctly
//! but whose escapes spell bytes outside UTF-8 is such a mistake, not a
//! malformed literal.

use crate::literal::LiteralError;
use elz_ast::SyntaxKind;
use elz_core::text::TextSpan;
use elz_diagnostics::{messages, Diagnostic};
use elz_program::TableError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    #[error("{construct} expects {expected} operand(s) but only {available} are on the stack")]
    StackUnderflow {
        construct: SyntaxKind,
        expected: usize,
        available: usize,
    },

    #[error("{count} operands left on the stack where a single expression was expected")]
    LeftoverOperands { count: usize },

    #[error("no expression on the stack to use as a binding body")]
    MissingRoot,

    #[error("{construct} expects {expected} but found {found}")]
    UnexpectedOperand {
        construct: SyntaxKind,
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to unquote string literal {literal}: {source}")]
    MalformedStringLiteral {
        literal: String,
        #[source]
        source: LiteralError,
    },

    #[error("type signature for `{name}` has no components")]
    EmptySignature { name: String },

    #[error("{count} type component(s) do not belong to any signature")]
    DanglingTypeComponents { count: usize },

    #[error("binding declaration carries no name")]
    MissingBindingName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("internal error: {0}")]
    Internal(#[from] InternalError),

    #[error("{source}")]
    Table {
        #[source]
        source: TableError,
        span: TextSpan,
    },

    #[error("type signature for `{name}` is already declared")]
    DuplicateSignature { name: String, span: TextSpan },

    #[error("binding `{name}` declares {params} parameter(s) but its signature only has {slots} parameter type(s)")]
    SignatureArityMismatch {
        name: String,
        params: usize,
        slots: usize,
        span: TextSpan,
    },

    #[error("string literal {literal} does not decode to valid UTF-8")]
    NonUtf8StringLiteral { literal: String },
}

impl BuildError {
    /// Whether this error is a compiler bug rather than a user mistake.
    pub fn is_internal(&self) -> bool {
        matches!(self, BuildError::Internal(_))
    }

    /// The binding name a user-facing error is about.
    pub fn name(&self) -> Option<&str> {
        match self {
            BuildError::Internal(_) | BuildError::NonUtf8StringLiteral { .. } => None,
            BuildError::Table { source, .. } => Some(source.name()),
            BuildError::DuplicateSignature { name, .. }
            | BuildError::SignatureArityMismatch { name, .. } => Some(name),
        }
    }

    pub fn span(&self) -> Option<TextSpan> {
        match self {
            BuildError::Internal(_) | BuildError::NonUtf8StringLiteral { .. } => None,
            BuildError::Table { span, .. }
            | BuildError::DuplicateSignature { span, .. }
            | BuildError::SignatureArityMismatch { span, .. } => Some(*span),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = match self {
            BuildError::Internal(err) => {
                return Diagnostic::new(&messages::INTERNAL_ERROR_0, &[err.to_string().as_str()]);
            }
            BuildError::Table { source, .. } => source.to_diagnostic(),
            BuildError::DuplicateSignature { name, .. } => {
                Diagnostic::new(&messages::DUPLICATE_SIGNATURE_0, &[name.as_str()])
            }
            BuildError::SignatureArityMismatch {
                name,
                params,
                slots,
                ..
            } => Diagnostic::new(
                &messages::BINDING_0_HAS_1_PARAMETERS_BUT_SIGNATURE_HAS_2,
                &[name.as_str(), &params.to_string(), &slots.to_string()],
            ),
            BuildError::NonUtf8StringLiteral { literal } => {
                Diagnostic::new(&messages::STRING_LITERAL_0_IS_NOT_VALID_UTF8, &[literal.as_str()])
            }
        };
        match self.span() {
            Some(span) => diagnostic.at(span),
            None => diagnostic,
        }
    }
}
