use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional per-project config file, looked up in the working
/// directory.
pub const LOCAL_CONFIG: &str = ".typospot.toml";

/// Scan configuration. When none of the `*_only` flags is set every
/// identifier kind is scanned; otherwise the active flags combine additively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub ignore_words: Vec<String>,
    pub include_tests: bool,
    pub functions_only: bool,
    pub constants_only: bool,
    pub variables_only: bool,
    pub fail_on_findings: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_words: Vec::new(),
            include_tests: true,
            functions_only: false,
            constants_only: false,
            variables_only: false,
            fail_on_findings: false,
        }
    }
}

/// CLI-supplied values layered on top of the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub ignore: Vec<String>,
    pub tests: Option<bool>,
    pub functions: bool,
    pub constants: bool,
    pub variables: bool,
    pub set_exit_status: bool,
}

impl ScanConfig {
    /// Load configuration with priority: CLI args > local config > defaults.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let local = Path::new(LOCAL_CONFIG);
        let mut config = if local.exists() {
            Self::from_file(local)?
        } else {
            Self::default()
        };
        config.apply(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn apply(&mut self, overrides: Overrides) {
        self.ignore_words.extend(overrides.ignore);
        if let Some(tests) = overrides.tests {
            self.include_tests = tests;
        }
        self.functions_only |= overrides.functions;
        self.constants_only |= overrides.constants;
        self.variables_only |= overrides.variables;
        self.fail_on_findings |= overrides.set_exit_status;
    }
}
