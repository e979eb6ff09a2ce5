//! elz_ast: Node model for the elz front end.
//!
//! Defines the expression tree, the type components of a signature, the
//! binding record produced per declaration, and the syntax kinds the
//! traversal driver reports.

pub mod binding;
pub mod expr;
pub mod syntax_kind;
pub mod types;
pub mod visitor;

// Re-export key types
pub use binding::Binding;
pub use expr::{Arg, BinaryExpr, Expr, FuncCall};
pub use syntax_kind::SyntaxKind;
pub use types::Type;
pub use visitor::ExprVisitor;
