//! Batch build integration tests.
//!
//! Several translation units built together: every clean unit yields a
//! table, failing units yield diagnostics, and internal errors stop the
//! batch.

use elz_ast::Expr;
use elz_builder::{BuildError, Event, InternalError};
use elz_compiler::Program;
use elz_core::text::TextSpan;
use elz_diagnostics::DiagnosticCategory;
use elz_options::{parse_config, ArityCheck, BuilderOptions};

/// `name = value`
fn constant<'a>(name: &'a str, value: &'a str, at: u32) -> Vec<Event<'a>> {
    vec![
        Event::Int(value),
        Event::Binding {
            idents: vec![name],
            exported: true,
            span: TextSpan::new(at, 1),
        },
    ]
}

fn unit<'a>(bindings: Vec<Vec<Event<'a>>>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = bindings.into_iter().flatten().collect();
    events.push(Event::Program);
    events
}

// ============================================================================
// Clean builds
// ============================================================================

#[test]
fn test_empty_program() {
    let output = Program::new(BuilderOptions::default()).build().unwrap();
    assert!(output.tables.is_empty());
    assert!(output.diagnostics.is_empty());
}

#[test]
fn test_tables_in_unit_order() {
    let mut program = Program::new(BuilderOptions::default());
    for name in ["c", "a", "b"] {
        program.add_unit(name, unit(vec![constant("x", "1", 0)]));
    }
    assert_eq!(program.unit_count(), 3);

    let output = program.build().unwrap();
    let names: Vec<_> = output.tables.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
    assert!(!output.has_errors());
}

#[test]
fn test_units_do_not_share_names() {
    // Both units define `x`; that is only a duplicate within one unit.
    let mut program = Program::new(BuilderOptions::default());
    program.add_unit("one", unit(vec![constant("x", "1", 0)]));
    program.add_unit("two", unit(vec![constant("x", "2", 0)]));

    let output = program.build().unwrap();
    assert!(output.diagnostics.is_empty());
    let one = output.table("one").unwrap();
    let two = output.table("two").unwrap();
    assert_eq!(one.lookup("x").unwrap().body, Expr::int("1"));
    assert_eq!(two.lookup("x").unwrap().body, Expr::int("2"));
    assert!(output.table("three").is_none());
}

// ============================================================================
// Semantic errors
// ============================================================================

#[test]
fn test_failing_unit_reports_and_others_continue() {
    let mut program = Program::new(BuilderOptions::default());
    program.add_unit("good", unit(vec![constant("x", "1", 0)]));
    program.add_unit(
        "bad",
        unit(vec![constant("x", "1", 0), constant("x", "2", 14)]),
    );

    let output = program.build().unwrap();
    assert_eq!(output.tables.len(), 1);
    assert!(output.table("good").is_some());
    assert!(output.table("bad").is_none());

    assert_eq!(output.diagnostics.error_count(), 1);
    let diag = &output.diagnostics.diagnostics()[0];
    assert_eq!(diag.code, 2001);
    assert_eq!(diag.file.as_deref(), Some("bad"));
    assert_eq!(diag.span, Some(TextSpan::new(14, 1)));
    assert_eq!(diag.to_string(), "bad(14): error E2001: Binding 'x' is already defined.");
}

#[test]
fn test_arity_warnings_are_tagged_with_their_unit() {
    let events = unit(vec![
        vec![
            Event::ExistType("int"),
            Event::BindType { name: "f", span: TextSpan::new(0, 8) },
        ],
        vec![
            Event::Int("0"),
            Event::Binding {
                idents: vec!["f", "a"],
                exported: false,
                span: TextSpan::new(9, 9),
            },
        ],
    ]);
    let options = BuilderOptions::default().with_signature_arity(ArityCheck::Warn);
    let mut program = Program::new(options);
    program.add_unit("lib", events);

    let output = program.build().unwrap();
    assert!(output.table("lib").unwrap().contains("f"));
    assert!(!output.has_errors());
    let diag = &output.diagnostics.diagnostics()[0];
    assert_eq!(diag.category, DiagnosticCategory::Warning);
    assert_eq!(diag.file.as_deref(), Some("lib"));
}

#[test]
fn test_diagnostics_are_sorted_by_unit() {
    let mut program = Program::new(BuilderOptions::default());
    for name in ["z", "m", "a"] {
        program.add_unit(name, unit(vec![constant("x", "1", 0), constant("x", "1", 5)]));
    }
    let output = program.build().unwrap();
    let files: Vec<_> = output
        .diagnostics
        .diagnostics()
        .iter()
        .filter_map(|d| d.file.as_deref())
        .collect();
    assert_eq!(files, vec!["a", "m", "z"]);
}

#[test]
fn test_non_utf8_string_rejects_only_its_unit() {
    let mut program = Program::new(BuilderOptions::default());
    program.add_unit(
        "bytes",
        unit(vec![vec![
            Event::Str(r#""\377""#),
            Event::Binding {
                idents: vec!["s"],
                exported: false,
                span: TextSpan::new(0, 10),
            },
        ]]),
    );
    program.add_unit("good", unit(vec![constant("x", "1", 0)]));

    let output = program.build().unwrap();
    assert!(output.table("bytes").is_none());
    assert!(output.table("good").is_some());
    let diag = &output.diagnostics.diagnostics()[0];
    assert_eq!(diag.code, 2006);
    assert_eq!(diag.file.as_deref(), Some("bytes"));
}

// ============================================================================
// Internal errors
// ============================================================================

#[test]
fn test_internal_error_aborts_batch() {
    let mut program = Program::new(BuilderOptions::default());
    program.add_unit("good", unit(vec![constant("x", "1", 0)]));
    program.add_unit("broken", vec![Event::Int("1"), Event::Program]);
    program.add_unit(
        "also_broken",
        vec![Event::List { len: 2 }, Event::Program],
    );

    let err = program.build().unwrap_err();
    assert_eq!(
        err,
        BuildError::Internal(InternalError::LeftoverOperands { count: 1 })
    );
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_from_config_selects_units() {
    let config = parse_config(
        r#"{ "builderOptions": { "signatureArity": "off" }, "units": ["main"] }"#,
    )
    .unwrap();
    let mut program = Program::from_config(&config);
    assert_eq!(program.options.signature_arity, ArityCheck::Off);

    program.add_unit("main", unit(vec![constant("x", "1", 0)]));
    program.add_unit("scratch", vec![Event::Int("1"), Event::Program]);

    // The broken unit is not selected, so it never runs.
    let output = program.build().unwrap();
    assert_eq!(output.tables.len(), 1);
    assert!(output.table("main").is_some());
}
