//! Hash collection aliases used throughout the front end.
//!
//! Keys are compiler-internal names, so FxHash is used everywhere in place
//! of the DoS-resistant std hasher.

/// A set that uses FxHash for fast hashing.
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;

/// Re-export FxHashMap for convenience.
pub type FxMap<K, V> = rustc_hash::FxHashMap<K, V>;
