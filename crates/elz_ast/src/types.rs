//! Type components of a binding signature.
//!
//! A signature such as `int -> 'a -> ()` is stored as the flat, ordered list
//! of its components. The arrows themselves are not stored: the last
//! component is the return type and the ones before it are the curried
//! parameter types.

use std::fmt;

/// One component of a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A named type that must be declared elsewhere (`int`).
    Existing(String),
    /// The type with no value (`()`).
    Void,
    /// A universally quantified placeholder (`'a`).
    Variable(String),
}

impl Type {
    pub fn existing(name: impl Into<String>) -> Self {
        Type::Existing(name.into())
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Type::Variable(name.into())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Existing(name) => write!(f, "{}", name),
            Type::Void => write!(f, "()"),
            Type::Variable(name) => write!(f, "'{}", name),
        }
    }
}
