//! Program table errors.

use elz_diagnostics::{messages, Diagnostic};
use thiserror::Error;

/// A user-facing error raised by the program table. Each variant carries
/// the offending binding name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("binding `{name}` already exists")]
    DuplicateBinding { name: String },

    #[error("no binding named `{name}`")]
    UnknownBinding { name: String },

    /// Deliberately the same error whether the binding is missing or only
    /// private, so external callers cannot tell the two apart.
    #[error("no exported binding named `{name}`")]
    UnknownOrPrivateBinding { name: String },
}

impl TableError {
    /// The binding name this error is about.
    pub fn name(&self) -> &str {
        match self {
            TableError::DuplicateBinding { name }
            | TableError::UnknownBinding { name }
            | TableError::UnknownOrPrivateBinding { name } => name,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = match self {
            TableError::DuplicateBinding { .. } => &messages::DUPLICATE_BINDING_0,
            TableError::UnknownBinding { .. } => &messages::CANNOT_FIND_BINDING_0,
            TableError::UnknownOrPrivateBinding { .. } => &messages::NO_EXPORTED_BINDING_0,
        };
        Diagnostic::new(message, &[self.name()])
    }
}
