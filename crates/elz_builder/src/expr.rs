//! Expression stack builder.
//!
//! Rebuilds expression trees from post-order events on one explicit
//! operand stack shared by the whole walk. Binary operators fire after both
//! operands were pushed, so the first pop is the right operand.
//! Variable-arity constructs take exactly their declared child count off
//! the top of the stack, which keeps operands of enclosing, still-pending
//! constructs untouched.

use crate::error::{BuildError, InternalError};
use crate::literal::{self, LiteralError};
use elz_ast::{Arg, Expr, SyntaxKind};
use tracing::trace;

/// An entry on the operand stack. Call arguments share the stack with
/// expressions until their call claims them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Expr(Expr),
    Arg(Arg),
}

impl Operand {
    fn describe(&self) -> &'static str {
        match self {
            Operand::Expr(expr) => expr.kind_name(),
            Operand::Arg(_) => "argument",
        }
    }

    fn into_expr(self, construct: SyntaxKind) -> Result<Expr, InternalError> {
        match self {
            Operand::Expr(expr) => Ok(expr),
            other => Err(InternalError::UnexpectedOperand {
                construct,
                expected: "expression",
                found: other.describe(),
            }),
        }
    }

    fn into_arg(self, construct: SyntaxKind) -> Result<Arg, InternalError> {
        match self {
            Operand::Arg(arg) => Ok(arg),
            other => Err(InternalError::UnexpectedOperand {
                construct,
                expected: "argument",
                found: other.describe(),
            }),
        }
    }
}

impl From<Expr> for Operand {
    fn from(expr: Expr) -> Self {
        Operand::Expr(expr)
    }
}

impl From<Arg> for Operand {
    fn from(arg: Arg) -> Self {
        Operand::Arg(arg)
    }
}

#[derive(Debug, Default)]
pub struct ExprBuilder {
    stack: Vec<Operand>,
}

impl ExprBuilder {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, operand: impl Into<Operand>) {
        let operand = operand.into();
        trace!(operand = operand.describe(), depth = self.stack.len() + 1, "push");
        self.stack.push(operand);
    }

    /// Pop the top operand; `None` when the stack is empty.
    pub fn pop(&mut self) -> Option<Operand> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Claim the finished expression for a binding body. Exactly one
    /// expression must be left on the stack.
    pub fn take_root(&mut self) -> Result<Expr, InternalError> {
        match self.stack.len() {
            0 => Err(InternalError::MissingRoot),
            1 => match self.stack.pop() {
                Some(operand) => operand.into_expr(SyntaxKind::Binding),
                None => Err(InternalError::MissingRoot),
            },
            count => Err(InternalError::LeftoverOperands { count }),
        }
    }

    // ========================================================================
    // Leaves
    // ========================================================================

    pub fn exit_int(&mut self, text: &str) {
        self.push(Expr::int(text));
    }

    pub fn exit_float(&mut self, text: &str) {
        self.push(Expr::float(text));
    }

    /// The token is still quoted. A literal that fails to un-quote means the
    /// grammar let through something it should not have; one that un-quotes
    /// to bytes outside UTF-8 is the user's mistake.
    pub fn exit_string(&mut self, token: &str) -> Result<(), BuildError> {
        let value = literal::unquote(token).map_err(|source| match source {
            LiteralError::InvalidUtf8 => BuildError::NonUtf8StringLiteral {
                literal: token.to_string(),
            },
            source => BuildError::Internal(InternalError::MalformedStringLiteral {
                literal: token.to_string(),
                source,
            }),
        })?;
        self.push(Expr::Str(value));
        Ok(())
    }

    pub fn exit_bool(&mut self, text: &str) {
        self.push(Expr::bool(text));
    }

    pub fn exit_identifier(&mut self, name: &str) {
        self.push(Expr::ident(name));
    }

    // ========================================================================
    // Composites
    // ========================================================================

    /// `left op right`, for any precedence tier.
    pub fn exit_binary(&mut self, construct: SyntaxKind, op: &str) -> Result<(), InternalError> {
        self.ensure_available(construct, 2)?;
        let right = self.pop_expr(construct)?;
        let left = self.pop_expr(construct)?;
        self.push(Expr::binary(op, left, right));
        Ok(())
    }

    pub fn exit_list(&mut self, len: usize) -> Result<(), InternalError> {
        let items = self
            .pop_many(SyntaxKind::ListLiteral, len)?
            .into_iter()
            .map(|operand| operand.into_expr(SyntaxKind::ListLiteral))
            .collect::<Result<Vec<_>, _>>()?;
        self.push(Expr::list(items));
        Ok(())
    }

    pub fn exit_fn_call(&mut self, access_path: &str, arg_count: usize) -> Result<(), InternalError> {
        let args = self
            .pop_many(SyntaxKind::FnCall, arg_count)?
            .into_iter()
            .map(|operand| operand.into_arg(SyntaxKind::FnCall))
            .collect::<Result<Vec<_>, _>>()?;
        self.push(Expr::call(access_path, args));
        Ok(())
    }

    pub fn exit_arg(&mut self, label: Option<&str>) -> Result<(), InternalError> {
        let value = self.pop_expr(SyntaxKind::Arg)?;
        self.push(Arg {
            label: label.map(str::to_string),
            value,
        });
        Ok(())
    }

    // ========================================================================
    // Stack helpers
    // ========================================================================

    fn ensure_available(&self, construct: SyntaxKind, expected: usize) -> Result<(), InternalError> {
        if self.stack.len() < expected {
            return Err(InternalError::StackUnderflow {
                construct,
                expected,
                available: self.stack.len(),
            });
        }
        Ok(())
    }

    fn pop_expr(&mut self, construct: SyntaxKind) -> Result<Expr, InternalError> {
        self.ensure_available(construct, 1)?;
        match self.stack.pop() {
            Some(operand) => operand.into_expr(construct),
            None => Err(InternalError::StackUnderflow {
                construct,
                expected: 1,
                available: 0,
            }),
        }
    }

    /// Take the top `count` operands, returned in the order they were
    /// pushed, which is source order.
    fn pop_many(&mut self, construct: SyntaxKind, count: usize) -> Result<Vec<Operand>, InternalError> {
        self.ensure_available(construct, count)?;
        let at = self.stack.len() - count;
        Ok(self.stack.split_off(at))
    }
}
