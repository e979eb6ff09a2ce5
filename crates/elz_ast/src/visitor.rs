//! Expression visitor for traversing a binding body.
//!
//! Default implementations walk into children in source order, so an
//! implementor only overrides the node kinds it cares about.

use crate::expr::*;

/// A visitor over an expression tree.
pub trait ExprVisitor<'a> {
    fn visit_expr(&mut self, expr: &'a Expr) {
        walk_expr(self, expr);
    }

    /// Called for int, float, string and boolean literals.
    fn visit_literal(&mut self, _expr: &'a Expr) {}

    fn visit_ident(&mut self, _name: &'a str) {}

    fn visit_list(&mut self, items: &'a [Expr]) {
        for item in items {
            self.visit_expr(item);
        }
    }

    fn visit_binary(&mut self, node: &'a BinaryExpr) {
        self.visit_expr(&node.left);
        self.visit_expr(&node.right);
    }

    fn visit_call(&mut self, node: &'a FuncCall) {
        for arg in &node.args {
            self.visit_arg(arg);
        }
    }

    fn visit_arg(&mut self, arg: &'a Arg) {
        self.visit_expr(&arg.value);
    }
}

/// Dispatch on the expression kind.
pub fn walk_expr<'a, V: ExprVisitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) {
    match expr {
        Expr::Int(_) | Expr::Float(_) | Expr::Str(_) | Expr::Bool(_) => visitor.visit_literal(expr),
        Expr::Ident(name) => visitor.visit_ident(name),
        Expr::List(items) => visitor.visit_list(items),
        Expr::Binary(node) => visitor.visit_binary(node),
        Expr::Call(node) => visitor.visit_call(node),
    }
}
