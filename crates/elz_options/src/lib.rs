//! elz_options: elz.json parsing and builder options.
//!
//! Parses elz.json files and provides the options that steer how the
//! front end builds a program table.

use serde::{Deserialize, Serialize};

/// Options for building one translation unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuilderOptions {
    /// What to do when a binding has more parameters than its signature
    /// has parameter types.
    pub signature_arity: ArityCheck,
}

impl BuilderOptions {
    pub fn with_signature_arity(mut self, check: ArityCheck) -> Self {
        self.signature_arity = check;
        self
    }
}

/// Policy for checking a binding's parameter list against its signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArityCheck {
    /// Leave it to a later type checking stage.
    Off,
    /// Report a warning diagnostic and keep the binding.
    Warn,
    /// Reject the binding.
    #[default]
    Deny,
}

/// The elz.json file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElzConfig {
    pub builder_options: Option<BuilderOptions>,
    /// Translation units making up the project.
    pub units: Option<Vec<String>>,
}

impl ElzConfig {
    /// The configured builder options, or the defaults.
    pub fn builder_options(&self) -> BuilderOptions {
        self.builder_options.unwrap_or_default()
    }
}

/// Parse an elz.json file from a string.
pub fn parse_config(content: &str) -> Result<ElzConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse an elz.json file from a path.
pub fn parse_config_file(path: &str) -> Result<ElzConfig, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok(config)
}
