//! elz_compiler: Batch orchestration.
//!
//! Holds the translation units of a project and builds the program table
//! of each. Units are independent, so they are built in parallel, each with
//! its own builder; results are reported in the order units were added.

use elz_builder::{BuildError, Builder, Event};
use elz_diagnostics::{Diagnostic, DiagnosticCollection};
use elz_options::{BuilderOptions, ElzConfig};
use elz_program::ProgramTable;
use rayon::prelude::*;
use tracing::{debug, error, warn};

/// One translation unit: a module name and the events its walk produced.
struct Unit<'src> {
    name: String,
    events: Vec<Event<'src>>,
}

/// The program represents every translation unit of a project.
pub struct Program<'src> {
    /// Builder options shared by all units.
    pub options: BuilderOptions,
    /// Unit names selected by the project config. Empty selects every unit.
    pub root_units: Vec<String>,
    units: Vec<Unit<'src>>,
}

/// Tables of the units that built cleanly plus everything reported on the
/// way.
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub tables: Vec<(String, ProgramTable)>,
    pub diagnostics: DiagnosticCollection,
}

impl BuildOutput {
    pub fn table(&self, unit: &str) -> Option<&ProgramTable> {
        self.tables
            .iter()
            .find(|(name, _)| name == unit)
            .map(|(_, table)| table)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Result of building a single unit.
enum UnitOutcome {
    Built(ProgramTable, Vec<Diagnostic>),
    Rejected(Vec<Diagnostic>),
    Aborted(BuildError),
}

impl<'src> Program<'src> {
    pub fn new(options: BuilderOptions) -> Self {
        Self {
            options,
            root_units: Vec::new(),
            units: Vec::new(),
        }
    }

    /// Create a program from a parsed elz.json.
    pub fn from_config(config: &ElzConfig) -> Self {
        let mut program = Self::new(config.builder_options());
        program.root_units = config.units.clone().unwrap_or_default();
        program
    }

    /// Add a translation unit to the program.
    pub fn add_unit(&mut self, name: impl Into<String>, events: Vec<Event<'src>>) {
        self.units.push(Unit {
            name: name.into(),
            events,
        });
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Build every selected unit.
    ///
    /// A unit with a semantic error produces error diagnostics and no table;
    /// the remaining units are unaffected. The first internal error, in unit
    /// order, aborts the batch.
    pub fn build(&self) -> Result<BuildOutput, BuildError> {
        let selected: Vec<&Unit<'src>> = self
            .units
            .iter()
            .filter(|unit| self.is_selected(&unit.name))
            .collect();
        debug!(units = selected.len(), skipped = self.units.len() - selected.len(), "building program");

        let outcomes: Vec<UnitOutcome> = selected
            .par_iter()
            .map(|unit| build_unit(unit, self.options))
            .collect();

        let mut output = BuildOutput::default();
        for (unit, outcome) in selected.iter().zip(outcomes) {
            match outcome {
                UnitOutcome::Built(table, diagnostics) => {
                    debug!(unit = %unit.name, bindings = table.len(), "unit built");
                    output.diagnostics.extend(diagnostics);
                    output.tables.push((unit.name.clone(), table));
                }
                UnitOutcome::Rejected(diagnostics) => {
                    warn!(unit = %unit.name, "unit rejected");
                    output.diagnostics.extend(diagnostics);
                }
                UnitOutcome::Aborted(err) => {
                    error!(unit = %unit.name, error = %err, "internal error, aborting build");
                    return Err(err);
                }
            }
        }

        output.diagnostics.sort();
        debug!(
            tables = output.tables.len(),
            errors = output.diagnostics.error_count(),
            warnings = output.diagnostics.len() - output.diagnostics.error_count(),
            "program built"
        );
        Ok(output)
    }

    fn is_selected(&self, name: &str) -> bool {
        self.root_units.is_empty() || self.root_units.iter().any(|root| root == name)
    }
}

fn build_unit(unit: &Unit<'_>, options: BuilderOptions) -> UnitOutcome {
    let mut builder = Builder::new(options);
    let built = builder.build(unit.events.iter().cloned());
    let mut diagnostics: Vec<Diagnostic> = builder
        .take_diagnostics()
        .into_iter()
        .map(|d| d.in_file(unit.name.as_str()))
        .collect();

    match built.and_then(|()| builder.finish()) {
        Ok(table) => UnitOutcome::Built(table, diagnostics),
        Err(err) if err.is_internal() => UnitOutcome::Aborted(err),
        Err(err) => {
            diagnostics.push(err.to_diagnostic().in_file(unit.name.as_str()));
            UnitOutcome::Rejected(diagnostics)
        }
    }
}
