//! Traversal events reported by the parse-tree walker.
//!
//! Events arrive bottom-up: every child construct has fully exited before
//! its parent's exit event. Only exit events carry data; `Enter` is
//! accepted for completeness and otherwise ignored. Variable-arity
//! constructs carry their declared child count so the builder never has
//! to infer it from the operand stack.

use elz_ast::SyntaxKind;
use elz_core::text::TextSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'src> {
    /// The walker entered a construct.
    Enter(SyntaxKind),

    // ========================================================================
    // Top level
    // ========================================================================
    /// The whole translation unit exited.
    Program,
    /// `import path`.
    Import { path: &'src str, span: TextSpan },
    /// `name :: t1 -> t2 -> ...`; the components were reported just before.
    BindType { name: &'src str, span: TextSpan },
    /// `[export] name params... = body`. `idents` holds the binding's own
    /// name followed by its parameters.
    Binding {
        idents: Vec<&'src str>,
        exported: bool,
        span: TextSpan,
    },

    // ========================================================================
    // Expressions
    // ========================================================================
    Int(&'src str),
    Float(&'src str),
    /// String literal token, still quoted.
    Str(&'src str),
    Bool(&'src str),
    Ident(&'src str),
    /// Multiplicative operator; `op` is the operator token.
    MulDiv { op: &'src str },
    /// Additive operator; `op` is the operator token.
    AddSub { op: &'src str },
    /// List literal with `len` elements.
    List { len: usize },
    /// Call of `access_path` with `arg_count` arguments.
    Call { access_path: &'src str, arg_count: usize },
    /// One call argument, with its label if it has one.
    Arg { label: Option<&'src str> },

    // ========================================================================
    // Types
    // ========================================================================
    ExistType(&'src str),
    VoidType,
    VariantType(&'src str),
    /// An arrow between two components; carries nothing.
    CombineType,
}

impl Event<'_> {
    /// The construct this event belongs to.
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Event::Enter(kind) => *kind,
            Event::Program => SyntaxKind::Program,
            Event::Import { .. } => SyntaxKind::Import,
            Event::BindType { .. } => SyntaxKind::BindType,
            Event::Binding { .. } => SyntaxKind::Binding,
            Event::Int(_) => SyntaxKind::IntLiteral,
            Event::Float(_) => SyntaxKind::FloatLiteral,
            Event::Str(_) => SyntaxKind::StringLiteral,
            Event::Bool(_) => SyntaxKind::BoolLiteral,
            Event::Ident(_) => SyntaxKind::Identifier,
            Event::MulDiv { .. } => SyntaxKind::MulDiv,
            Event::AddSub { .. } => SyntaxKind::AddSub,
            Event::List { .. } => SyntaxKind::ListLiteral,
            Event::Call { .. } => SyntaxKind::FnCall,
            Event::Arg { .. } => SyntaxKind::Arg,
            Event::ExistType(_) => SyntaxKind::ExistType,
            Event::VoidType => SyntaxKind::VoidType,
            Event::VariantType(_) => SyntaxKind::VariantType,
            Event::CombineType => SyntaxKind::CombineType,
        }
    }

    pub fn is_enter(&self) -> bool {
        matches!(self, Event::Enter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Event::Enter(SyntaxKind::Binding).kind(), SyntaxKind::Binding);
        assert_eq!(Event::Int("1").kind(), SyntaxKind::IntLiteral);
        assert_eq!(
            Event::Call { access_path: "f", arg_count: 0 }.kind(),
            SyntaxKind::FnCall
        );
        assert_eq!(Event::CombineType.kind(), SyntaxKind::CombineType);
        assert!(Event::Enter(SyntaxKind::Program).is_enter());
        assert!(!Event::Program.is_enter());
    }
}
