//! elz_builder: Program table construction from parse-tree traversal events.
//!
//! The external walker reports every syntax construct bottom-up, children
//! before parents. The builder reacts to those events:
//! - literal, identifier, operator, list, call and argument events rebuild
//!   the expression tree on an explicit operand stack
//! - type events accumulate signature components, frozen per name when the
//!   signature declaration exits
//! - binding events claim the finished expression, attach the matching
//!   signature, and insert the binding into the program table

mod binding;
mod builder;
mod error;
mod event;
mod expr;
pub mod literal;

pub use binding::BindingBuilder;
pub use builder::{build_program, Builder};
pub use error::{BuildError, InternalError};
pub use event::Event;
pub use expr::{ExprBuilder, Operand};
