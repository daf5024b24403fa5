//! Run-level result: artifacts plus every diagnostic collected.

use crate::error::ApiGenError;
use apigen_codegen::Artifact;
use std::fmt;

/// Pipeline stage a diagnostic was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading a schema resource.
    Read,
    /// Parsing schema text.
    Parse,
    /// Building type entries and inserting them into the registry.
    Register,
    /// Resolving and emitting artifacts.
    Generate,
}

impl Stage {
    /// Lowercase stage name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Parse => "parse",
            Self::Register => "register",
            Self::Generate => "generate",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single problem found during a run.
#[derive(Debug)]
pub struct Diagnostic {
    /// Stage that raised it.
    pub stage: Stage,
    /// The error itself.
    pub error: ApiGenError,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(stage: Stage, error: impl Into<ApiGenError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.stage, self.error)
    }
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Artifacts emitted, in deterministic order.
    pub artifacts: Vec<Artifact>,
    /// Every diagnostic, in the order found.
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    /// Returns true if the run found no problem.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Looks up the artifact for a type name.
    #[must_use]
    pub fn artifact(&self, type_name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.type_name == type_name)
    }

    /// Diagnostics raised in `stage`.
    pub fn diagnostics_in(&self, stage: Stage) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.stage == stage)
    }

    /// Converts the report into its artifacts, or the first error.
    ///
    /// # Errors
    /// Returns the first diagnostic's error when the run failed.
    pub fn into_result(self) -> Result<Vec<Artifact>, ApiGenError> {
        match self.diagnostics.into_iter().next() {
            Some(diagnostic) => Err(diagnostic.error),
            None => Ok(self.artifacts),
        }
    }
}
