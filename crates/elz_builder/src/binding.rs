//! Binding and signature builder.
//!
//! Type events append to the pending component list. When a signature
//! declaration exits, the pending list is moved into the signature map and
//! replaced by a fresh one, so no two signatures ever share storage.

use crate::error::{BuildError, InternalError};
use elz_ast::{Binding, Expr, Type};
use elz_core::collections::FxMap;
use elz_core::text::TextSpan;
use elz_printer::print_signature;
use tracing::debug;

#[derive(Debug, Default)]
pub struct BindingBuilder {
    /// Frozen signatures by binding name.
    signatures: FxMap<String, Vec<Type>>,
    /// Components of the signature currently being declared.
    pending: Vec<Type>,
}

impl BindingBuilder {
    pub fn new() -> Self {
        Self {
            signatures: FxMap::default(),
            pending: Vec::new(),
        }
    }

    // ========================================================================
    // Type components
    // ========================================================================

    /// `int`: a type declared elsewhere.
    pub fn exit_exist_type(&mut self, name: &str) {
        self.pending.push(Type::existing(name));
    }

    pub fn exit_void_type(&mut self) {
        self.pending.push(Type::Void);
    }

    /// `'a`: a type hole.
    pub fn exit_variant_type(&mut self, name: &str) {
        self.pending.push(Type::variable(name));
    }

    /// `int -> int`: components are already recorded in encounter order.
    pub fn exit_combine_type(&mut self) {}

    /// Number of components waiting for their signature declaration.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Freeze the pending components as the signature of `name`.
    pub fn exit_bind_type(&mut self, name: &str, span: TextSpan) -> Result<(), BuildError> {
        let components = std::mem::take(&mut self.pending);
        if components.is_empty() {
            return Err(InternalError::EmptySignature {
                name: name.to_string(),
            }
            .into());
        }
        if self.signatures.contains_key(name) {
            return Err(BuildError::DuplicateSignature {
                name: name.to_string(),
                span,
            });
        }
        debug!(name, signature = %print_signature(&components), "recorded signature");
        self.signatures.insert(name.to_string(), components);
        Ok(())
    }

    pub fn signature(&self, name: &str) -> Option<&[Type]> {
        self.signatures.get(name).map(Vec::as_slice)
    }

    /// Assemble a binding from its identifier list (own name first, then
    /// parameters) and its already-built body.
    pub fn build(&self, idents: &[&str], exported: bool, body: Expr) -> Result<Binding, InternalError> {
        let (name, params) = idents
            .split_first()
            .ok_or(InternalError::MissingBindingName)?;
        Ok(Binding {
            name: name.to_string(),
            exported,
            params: params.iter().map(|p| p.to_string()).collect(),
            body,
            signature: self.signatures.get(*name).cloned(),
        })
    }
}
