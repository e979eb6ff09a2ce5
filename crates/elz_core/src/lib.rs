//! elz_core: Core utilities for the elz front end.
//!
//! Provides source spans and the hash collections used throughout the
//! builder pipeline.

pub mod collections;
pub mod text;

// Re-export commonly used types
pub use collections::{FxHashSet, FxMap};
pub use text::{TextPos, TextSpan};
