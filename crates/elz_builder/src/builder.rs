//! The combined builder: dispatches traversal events to the expression
//! and binding builders and fills the program table.

use crate::binding::BindingBuilder;
use crate::error::{BuildError, InternalError};
use crate::event::Event;
use crate::expr::ExprBuilder;
use elz_ast::{Binding, SyntaxKind};
use elz_core::text::TextSpan;
use elz_diagnostics::{messages, Diagnostic, DiagnosticCollection};
use elz_options::{ArityCheck, BuilderOptions};
use elz_printer::print_binding;
use elz_program::{ProgramTable, TableError};
use tracing::{debug, trace, warn};

/// Builds the program table of one translation unit.
///
/// A builder is created at the start of a walk and consumed by
/// [`Builder::finish`]; separate translation units use separate builders.
pub struct Builder {
    options: BuilderOptions,
    exprs: ExprBuilder,
    bindings: BindingBuilder,
    table: ProgramTable,
    /// Warnings that did not stop the walk.
    diagnostics: DiagnosticCollection,
}

impl Builder {
    pub fn new(options: BuilderOptions) -> Self {
        Self {
            options,
            exprs: ExprBuilder::new(),
            bindings: BindingBuilder::new(),
            table: ProgramTable::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// The table built so far.
    pub fn table(&self) -> &ProgramTable {
        &self.table
    }

    /// Take the warnings collected so far.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Feed a whole event sequence, stopping at the first error.
    pub fn build<'src, I>(&mut self, events: I) -> Result<(), BuildError>
    where
        I: IntoIterator<Item = Event<'src>>,
    {
        for event in events {
            self.handle(event)?;
        }
        Ok(())
    }

    /// React to a single traversal event.
    pub fn handle(&mut self, event: Event<'_>) -> Result<(), BuildError> {
        trace!(kind = %event.kind(), enter = event.is_enter(), "event");
        match event {
            Event::Enter(_) => {}

            // -- Top level --
            Event::Program => self.exit_program()?,
            Event::Import { path, .. } => self.table.insert_import(path),
            Event::BindType { name, span } => self.bindings.exit_bind_type(name, span)?,
            Event::Binding {
                idents,
                exported,
                span,
            } => self.exit_binding(&idents, exported, span)?,

            // -- Expressions --
            Event::Int(text) => self.exprs.exit_int(text),
            Event::Float(text) => self.exprs.exit_float(text),
            Event::Str(token) => self.exprs.exit_string(token)?,
            Event::Bool(text) => self.exprs.exit_bool(text),
            Event::Ident(name) => self.exprs.exit_identifier(name),
            Event::MulDiv { op } => self.exprs.exit_binary(SyntaxKind::MulDiv, op)?,
            Event::AddSub { op } => self.exprs.exit_binary(SyntaxKind::AddSub, op)?,
            Event::List { len } => self.exprs.exit_list(len)?,
            Event::Call {
                access_path,
                arg_count,
            } => self.exprs.exit_fn_call(access_path, arg_count)?,
            Event::Arg { label } => self.exprs.exit_arg(label)?,

            // -- Types --
            Event::ExistType(name) => self.bindings.exit_exist_type(name),
            Event::VoidType => self.bindings.exit_void_type(),
            Event::VariantType(name) => self.bindings.exit_variant_type(name),
            Event::CombineType => self.bindings.exit_combine_type(),
        }
        Ok(())
    }

    /// End the walk and hand over the table.
    pub fn finish(mut self) -> Result<ProgramTable, BuildError> {
        self.exit_program()?;
        debug!(
            bindings = self.table.len(),
            imports = self.table.dependencies().len(),
            "finished program table"
        );
        Ok(self.table)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// A rejected binding leaves no trace: neither a table entry nor a
    /// warning.
    fn exit_binding(&mut self, idents: &[&str], exported: bool, span: TextSpan) -> Result<(), BuildError> {
        let body = self.exprs.take_root()?;
        let binding = self.bindings.build(idents, exported, body)?;
        if self.table.contains(&binding.name) {
            return Err(BuildError::Table {
                source: TableError::DuplicateBinding { name: binding.name },
                span,
            });
        }
        let warning = self.check_arity(&binding, span)?;
        trace!(binding = %print_binding(&binding), "assembled binding");
        self.table
            .insert_binding(binding)
            .map_err(|source| BuildError::Table { source, span })?;
        if let Some(warning) = warning {
            warn!(diagnostic = %warning, "binding has more parameters than its signature");
            self.diagnostics.add(warning);
        }
        Ok(())
    }

    /// Every expression must have been claimed by a binding and every type
    /// component by a signature once the program exits.
    fn exit_program(&self) -> Result<(), InternalError> {
        if !self.exprs.is_empty() {
            return Err(InternalError::LeftoverOperands {
                count: self.exprs.len(),
            });
        }
        if self.bindings.pending_len() > 0 {
            return Err(InternalError::DanglingTypeComponents {
                count: self.bindings.pending_len(),
            });
        }
        Ok(())
    }

    /// A binding may take fewer parameters than its signature has parameter
    /// types (point-free style) but never more. In warn mode the warning is
    /// returned for the caller to record once the binding is in the table.
    fn check_arity(&self, binding: &Binding, span: TextSpan) -> Result<Option<Diagnostic>, BuildError> {
        let Some(param_types) = binding.param_types() else {
            return Ok(None);
        };
        let params = binding.params.len();
        let slots = param_types.len();
        if params <= slots {
            return Ok(None);
        }
        match self.options.signature_arity {
            ArityCheck::Off => Ok(None),
            ArityCheck::Warn => Ok(Some(
                Diagnostic::new(
                    &messages::BINDING_0_HAS_1_PARAMETERS_BUT_SIGNATURE_HAS_2_WARNING,
                    &[binding.name.as_str(), &params.to_string(), &slots.to_string()],
                )
                .at(span),
            )),
            ArityCheck::Deny => Err(BuildError::SignatureArityMismatch {
                name: binding.name.clone(),
                params,
                slots,
                span,
            }),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new(BuilderOptions::default())
    }
}

/// Build the program table of one translation unit from its events.
pub fn build_program<'src, I>(events: I, options: BuilderOptions) -> Result<ProgramTable, BuildError>
where
    I: IntoIterator<Item = Event<'src>>,
{
    let mut builder = Builder::new(options);
    builder.build(events)?;
    builder.finish()
}
