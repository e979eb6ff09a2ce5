//! SyntaxKind enum - the grammar constructs the traversal driver reports.

use std::fmt;

/// The kind of a syntax construct in an elz parse tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SyntaxKind {
    // ========================================================================
    // Top level
    // ========================================================================
    Program,
    Import,
    BindType,
    Binding,

    // ========================================================================
    // Expressions
    // ========================================================================
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    BoolLiteral,
    ListLiteral,
    Identifier,
    /// `*` and `/` tier.
    MulDiv,
    /// `+` and `-` tier.
    AddSub,
    FnCall,
    Arg,

    // ========================================================================
    // Types
    // ========================================================================
    ExistType,
    VoidType,
    VariantType,
    CombineType,
}

impl SyntaxKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SyntaxKind::Program => "program",
            SyntaxKind::Import => "import",
            SyntaxKind::BindType => "bind type",
            SyntaxKind::Binding => "binding",
            SyntaxKind::IntLiteral => "int literal",
            SyntaxKind::FloatLiteral => "float literal",
            SyntaxKind::StringLiteral => "string literal",
            SyntaxKind::BoolLiteral => "bool literal",
            SyntaxKind::ListLiteral => "list literal",
            SyntaxKind::Identifier => "identifier",
            SyntaxKind::MulDiv => "mul/div",
            SyntaxKind::AddSub => "add/sub",
            SyntaxKind::FnCall => "function call",
            SyntaxKind::Arg => "argument",
            SyntaxKind::ExistType => "existing type",
            SyntaxKind::VoidType => "void type",
            SyntaxKind::VariantType => "type variable",
            SyntaxKind::CombineType => "arrow type",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(SyntaxKind::FnCall.to_string(), "function call");
        assert_eq!(SyntaxKind::VariantType.as_str(), "type variable");
        assert_eq!(format!("{} expects", SyntaxKind::MulDiv), "mul/div expects");
    }
}
