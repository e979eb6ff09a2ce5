//! Expression nodes.
//!
//! Every child node is exclusively owned by its parent, so an expression is
//! always a tree.

// ============================================================================
// Expressions
// ============================================================================

/// An expression in a binding body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal, kept as written (`42`).
    Int(String),
    /// Float literal, kept as written (`3.14`).
    Float(String),
    /// String literal with quoting already removed.
    Str(String),
    /// Boolean literal, kept as written (`true`).
    Bool(String),
    /// List literal; elements are in source order.
    List(Vec<Expr>),
    /// A reference to a name.
    Ident(String),
    /// `left op right`.
    Binary(BinaryExpr),
    /// `path(args...)`.
    Call(FuncCall),
}

impl Expr {
    pub fn int(text: impl Into<String>) -> Self {
        Expr::Int(text.into())
    }

    pub fn float(text: impl Into<String>) -> Self {
        Expr::Float(text.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expr::Str(text.into())
    }

    pub fn bool(text: impl Into<String>) -> Self {
        Expr::Bool(text.into())
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn list(items: Vec<Expr>) -> Self {
        Expr::List(items)
    }

    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn call(access_path: impl Into<String>, args: Vec<Arg>) -> Self {
        Expr::Call(FuncCall {
            access_path: access_path.into(),
            args,
        })
    }

    /// A short human-readable name for the node kind, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Int(_) => "integer literal",
            Expr::Float(_) => "float literal",
            Expr::Str(_) => "string literal",
            Expr::Bool(_) => "boolean literal",
            Expr::List(_) => "list literal",
            Expr::Ident(_) => "identifier",
            Expr::Binary(_) => "binary expression",
            Expr::Call(_) => "function call",
        }
    }
}

/// A binary operator application. `op` is the operator token verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub op: String,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// A call of a (possibly qualified) target with ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncCall {
    /// Dotted call target as written, e.g. `add` or `math.add`.
    pub access_path: String,
    pub args: Vec<Arg>,
}

/// A call argument, optionally labelled (`that: 1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    pub label: Option<String>,
    pub value: Expr,
}

impl Arg {
    /// A positional argument.
    pub fn new(value: Expr) -> Self {
        Self { label: None, value }
    }

    /// A labelled argument.
    pub fn labeled(label: impl Into<String>, value: Expr) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_keeps_operand_sides() {
        let e = Expr::binary("-", Expr::ident("x"), Expr::ident("y"));
        match e {
            Expr::Binary(b) => {
                assert_eq!(b.op, "-");
                assert_eq!(*b.left, Expr::ident("x"));
                assert_eq!(*b.right, Expr::ident("y"));
            }
            other => panic!("expected binary, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Expr::int("1").kind_name(), "integer literal");
        assert_eq!(Expr::call("f", vec![]).kind_name(), "function call");
        assert_eq!(Expr::list(vec![]).kind_name(), "list literal");
    }

    #[test]
    fn test_arg_constructors() {
        assert_eq!(Arg::new(Expr::int("1")).label, None);
        assert_eq!(
            Arg::labeled("that", Expr::int("1")).label.as_deref(),
            Some("that")
        );
    }
}
