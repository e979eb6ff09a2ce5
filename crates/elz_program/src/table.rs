//! Program table definition.

use crate::error::TableError;
use elz_ast::Binding;
use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

/// The bindings and imports of one translation unit.
///
/// A name is inserted at most once; the table never overwrites or mutates
/// an existing entry.
#[derive(Debug, Clone, Default)]
pub struct ProgramTable {
    /// Import paths in encounter order. Duplicates are kept.
    imports: Vec<String>,
    /// Bindings by name, in insertion order.
    bindings: IndexMap<String, Binding>,
}

impl ProgramTable {
    pub fn new() -> Self {
        Self {
            imports: Vec::new(),
            bindings: IndexMap::new(),
        }
    }

    /// Insert a binding. Fails without touching the table if the name is
    /// already taken.
    pub fn insert_binding(&mut self, binding: Binding) -> Result<(), TableError> {
        match self.bindings.entry(binding.name.clone()) {
            Entry::Occupied(entry) => Err(TableError::DuplicateBinding {
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                debug!(
                    name = %binding.name,
                    exported = binding.exported,
                    params = binding.params.len(),
                    typed = binding.signature.is_some(),
                    "inserted binding"
                );
                entry.insert(binding);
                Ok(())
            }
        }
    }

    /// In-module lookup: sees every binding.
    pub fn lookup(&self, name: &str) -> Result<&Binding, TableError> {
        self.bindings.get(name).ok_or_else(|| TableError::UnknownBinding {
            name: name.to_string(),
        })
    }

    /// External lookup: only sees exported bindings.
    pub fn lookup_exported(&self, name: &str) -> Result<&Binding, TableError> {
        match self.bindings.get(name) {
            Some(binding) if binding.exported => Ok(binding),
            _ => Err(TableError::UnknownOrPrivateBinding {
                name: name.to_string(),
            }),
        }
    }

    pub fn insert_import(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug!(path = %path, "recorded import");
        self.imports.push(path);
    }

    /// The import paths, in encounter order.
    pub fn dependencies(&self) -> &[String] {
        &self.imports
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings, in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Exported bindings, in insertion order.
    pub fn exported(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values().filter(|b| b.exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elz_ast::Expr;

    fn binding(name: &str, exported: bool, value: &str) -> Binding {
        Binding {
            name: name.to_string(),
            exported,
            params: vec![],
            body: Expr::int(value),
            signature: None,
        }
    }

    #[test]
    fn test_duplicate_keeps_first() {
        let mut table = ProgramTable::new();
        table.insert_binding(binding("i", false, "1")).unwrap();
        let err = table.insert_binding(binding("i", true, "2")).unwrap_err();
        assert_eq!(err, TableError::DuplicateBinding { name: "i".into() });
        assert_eq!(table.len(), 1);
        let kept = table.lookup("i").unwrap();
        assert_eq!(kept.body, Expr::int("1"));
        assert!(!kept.exported);
    }

    #[test]
    fn test_lookup_unknown() {
        let table = ProgramTable::new();
        assert!(table.is_empty());
        assert_eq!(
            table.lookup("nope").unwrap_err(),
            TableError::UnknownBinding { name: "nope".into() }
        );
    }

    #[test]
    fn test_export_gate() {
        let mut table = ProgramTable::new();
        table.insert_binding(binding("private", false, "1")).unwrap();
        table.insert_binding(binding("public", true, "2")).unwrap();

        assert!(table.lookup("private").is_ok());
        assert_eq!(
            table.lookup_exported("private").unwrap_err(),
            TableError::UnknownOrPrivateBinding { name: "private".into() }
        );
        assert_eq!(
            table.lookup_exported("missing").unwrap_err(),
            TableError::UnknownOrPrivateBinding { name: "missing".into() }
        );
        assert!(table.lookup("public").is_ok());
        assert!(table.lookup_exported("public").is_ok());

        let exported: Vec<_> = table.exported().map(|b| b.name.as_str()).collect();
        assert_eq!(exported, vec!["public"]);
    }

    #[test]
    fn test_imports_keep_duplicates_in_order() {
        let mut table = ProgramTable::new();
        table.insert_import("std.io");
        table.insert_import("math");
        table.insert_import("std.io");
        assert_eq!(table.dependencies(), &["std.io", "math", "std.io"]);
    }

    #[test]
    fn test_bindings_in_insertion_order() {
        let mut table = ProgramTable::new();
        for name in ["c", "a", "b"] {
            table.insert_binding(binding(name, false, "0")).unwrap();
        }
        let names: Vec<_> = table.bindings().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert!(table.contains("a"));
        assert!(!table.contains("d"));
    }
}
