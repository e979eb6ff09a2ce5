//! elz_program: The per-module program table.
//!
//! Owns the bindings and import references built from one translation
//! unit, enforces name uniqueness, and gates external lookups on the
//! export flag.

mod error;
mod table;

pub use error::TableError;
pub use table::ProgramTable;
