//! elz_diagnostics: Diagnostics reported while building program tables.
//!
//! A diagnostic is a catalogue message with its placeholders filled in,
//! optionally located by translation unit and span. Semantic build errors
//! and builder warnings are both turned into diagnostics so that a batch
//! build can report every failing unit at once.

use elz_core::text::TextSpan;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
        })
    }
}

/// A catalogue entry. `message` may contain `{0}`, `{1}`, ... placeholders.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Translation unit the diagnostic belongs to.
    pub file: Option<String>,
    pub span: Option<TextSpan>,
    pub message_text: String,
    pub code: u32,
    pub category: DiagnosticCategory,
}

impl Diagnostic {
    /// A diagnostic without location; chain [`Diagnostic::at`] and
    /// [`Diagnostic::in_file`] to place it.
    pub fn new(message: &DiagnosticMessage, args: &[&str]) -> Self {
        Self {
            file: None,
            span: None,
            message_text: format_message(message.message, args),
            code: message.code,
            category: message.category,
        }
    }

    pub fn at(mut self, span: TextSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    /// Ordering key: unit, then start offset. Unlocated diagnostics sort
    /// first.
    fn sort_key(&self) -> (Option<&str>, u32) {
        (self.file.as_deref(), self.span.map_or(0, |span| span.start))
    }
}

/// `unit(offset): error E2001: text`, leaving out whatever is unknown.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.file, self.span) {
            (Some(file), Some(span)) => write!(f, "{}({}): ", file, span.start)?,
            (Some(file), None) => write!(f, "{}: ", file)?,
            (None, _) => {}
        }
        write!(f, "{} E{}: {}", self.category, self.code, self.message_text)
    }
}

/// Fill `{N}` placeholders from `args`. Placeholders without a matching
/// argument are left as written.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            args.get(index).map(|arg| (arg, close))
        });
        match filled {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Diagnostics accumulated over a build.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Stable sort by unit and position, so diagnostics at the same place
    /// keep their report order.
    pub fn sort(&mut self) {
        self.diagnostics.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }
}

impl Extend<Diagnostic> for DiagnosticCollection {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

impl IntoIterator for DiagnosticCollection {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

// ============================================================================
// Message catalogue
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Internal errors (1000-1099)
    // ========================================================================
    pub const INTERNAL_ERROR_0: DiagnosticMessage = diag!(1000, Error, "Internal compiler error: {0}. This is a compiler bug, please report it.");

    // ========================================================================
    // Binding errors (2000-2099)
    // ========================================================================
    pub const DUPLICATE_BINDING_0: DiagnosticMessage = diag!(2001, Error, "Binding '{0}' is already defined.");
    pub const DUPLICATE_SIGNATURE_0: DiagnosticMessage = diag!(2002, Error, "A type signature for '{0}' is already declared.");
    pub const CANNOT_FIND_BINDING_0: DiagnosticMessage = diag!(2003, Error, "Cannot find binding '{0}'.");
    pub const NO_EXPORTED_BINDING_0: DiagnosticMessage = diag!(2004, Error, "No exported binding named '{0}'.");
    pub const STRING_LITERAL_0_IS_NOT_VALID_UTF8: DiagnosticMessage = diag!(2006, Error, "String literal {0} does not decode to valid UTF-8.");
    pub const BINDING_0_HAS_1_PARAMETERS_BUT_SIGNATURE_HAS_2: DiagnosticMessage = diag!(2005, Error, "Binding '{0}' declares {1} parameter(s) but its signature only has {2} parameter type(s).");

    // ========================================================================
    // Warnings (6000+)
    // ========================================================================
    pub const BINDING_0_HAS_1_PARAMETERS_BUT_SIGNATURE_HAS_2_WARNING: DiagnosticMessage = diag!(6001, Warning, "Binding '{0}' declares {1} parameter(s) but its signature only has {2} parameter type(s).");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(
            format_message("Binding '{0}' declares {1} parameter(s)", &["add", "3"]),
            "Binding 'add' declares 3 parameter(s)"
        );
        assert_eq!(format_message("{1}{0}", &["a", "b"]), "ba");
        assert_eq!(format_message("Nothing to fill.", &[]), "Nothing to fill.");
    }

    #[test]
    fn test_format_message_keeps_unmatched_braces() {
        assert_eq!(format_message("{0} and {2}", &["x"]), "x and {2}");
        assert_eq!(format_message("set {a} {", &["x"]), "set {a} {");
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::new(&messages::DUPLICATE_BINDING_0, &["add"])
            .at(TextSpan::new(10, 5))
            .in_file("math");
        assert_eq!(diag.to_string(), "math(10): error E2001: Binding 'add' is already defined.");

        let unlocated = Diagnostic::new(&messages::CANNOT_FIND_BINDING_0, &["main"]);
        assert!(unlocated.is_error());
        assert_eq!(unlocated.to_string(), "error E2003: Cannot find binding 'main'.");

        let file_only = unlocated.in_file("app");
        assert_eq!(file_only.to_string(), "app: error E2003: Cannot find binding 'main'.");
    }

    #[test]
    fn test_collection_counts() {
        let mut collection = DiagnosticCollection::new();
        assert!(collection.is_empty());

        collection.add(Diagnostic::new(
            &messages::BINDING_0_HAS_1_PARAMETERS_BUT_SIGNATURE_HAS_2_WARNING,
            &["f", "2", "1"],
        ));
        assert!(!collection.has_errors());
        assert_eq!(collection.error_count(), 0);

        collection.extend([Diagnostic::new(&messages::DUPLICATE_BINDING_0, &["f"])]);
        assert!(collection.has_errors());
        assert_eq!(collection.error_count(), 1);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.into_iter().map(|d| d.code).collect::<Vec<_>>(), vec![6001, 2001]);
    }

    #[test]
    fn test_sort_by_unit_then_offset() {
        let at = |file: &str, start: u32, name: &str| {
            Diagnostic::new(&messages::DUPLICATE_BINDING_0, &[name])
                .at(TextSpan::new(start, 1))
                .in_file(file)
        };
        let mut collection = DiagnosticCollection::new();
        collection.extend([at("b", 10, "x"), at("a", 20, "y"), at("a", 5, "z"), at("a", 5, "w")]);
        collection.sort();

        let order: Vec<_> = collection
            .diagnostics()
            .iter()
            .map(|d| d.message_text.as_str())
            .collect();
        assert_eq!(
            order,
            vec![
                "Binding 'z' is already defined.",
                "Binding 'w' is already defined.",
                "Binding 'y' is already defined.",
                "Binding 'x' is already defined.",
            ]
        );
    }
}
