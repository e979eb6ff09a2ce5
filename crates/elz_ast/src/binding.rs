//! The binding record produced for each binding declaration.

use crate::expr::{Expr, FuncCall};
use crate::types::Type;
use crate::visitor::ExprVisitor;
use elz_core::collections::FxHashSet;

/// A named value or function definition, optionally typed and exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    /// Whether the binding is visible outside its module.
    pub exported: bool,
    /// Parameter names in declaration order, not including `name`.
    pub params: Vec<String>,
    pub body: Expr,
    /// Signature components; the last one is the return type.
    ///
    /// Accumulated independently of `params`, so the two are not guaranteed
    /// to agree in length.
    pub signature: Option<Vec<Type>>,
}

impl Binding {
    /// The declared return type, if there is a signature.
    pub fn return_type(&self) -> Option<&Type> {
        self.signature.as_ref().and_then(|sig| sig.last())
    }

    /// The declared curried parameter types, if there is a signature.
    pub fn param_types(&self) -> Option<&[Type]> {
        self.signature
            .as_ref()
            .map(|sig| &sig[..sig.len().saturating_sub(1)])
    }

    /// Names the body refers to that are not its own parameters: plain
    /// identifiers and call targets, deduplicated, in first-seen order.
    pub fn referenced_names(&self) -> Vec<&str> {
        let mut collector = ReferenceCollector {
            params: &self.params,
            seen: FxHashSet::default(),
            names: Vec::new(),
        };
        collector.visit_expr(&self.body);
        collector.names
    }
}

struct ReferenceCollector<'a> {
    params: &'a [String],
    seen: FxHashSet<&'a str>,
    names: Vec<&'a str>,
}

impl<'a> ReferenceCollector<'a> {
    fn record(&mut self, name: &'a str) {
        if self.params.iter().any(|p| p == name) {
            return;
        }
        if self.seen.insert(name) {
            self.names.push(name);
        }
    }
}

impl<'a> ExprVisitor<'a> for ReferenceCollector<'a> {
    fn visit_ident(&mut self, name: &'a str) {
        self.record(name);
    }

    fn visit_call(&mut self, node: &'a FuncCall) {
        self.record(&node.access_path);
        for arg in &node.args {
            self.visit_arg(arg);
        }
    }
}
