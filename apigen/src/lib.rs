//! # apigen
//!
//! Generates Java API sources from GraphQL schema definitions.
//!
//! Schemas come in two batches: *reference* schemas, owned by already-built
//! dependencies and only used to resolve type names, and *generation*
//! schemas, owned by the current build. One artifact is emitted per
//! generation type.
//!
//! ## Quick Start
//!
//! ```ignore
//! use apigen::prelude::*;
//!
//! let apigen = ApiGen::builder()
//!     .default_package_name("com.example.api")
//!     .output_directory("target/generated-sources/apigen")
//!     .build()?;
//!
//! apigen.add_for_reference_file("deps/graphql-apigen-schema/user.graphql");
//! apigen.add_for_generation_file("schema/post.graphql");
//!
//! let report = apigen.generate();
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Parsing, directive resolution and the type registry
//! - [`codegen`] - Java generation over a frozen registry

pub mod error;
pub mod prelude;
pub mod report;
pub mod sink;

pub use error::ApiGenError;
pub use report::{Diagnostic, RunReport, Stage};
pub use sink::DirectorySink;

/// Schema model and type registry.
pub mod schema {
    pub use apigen_schema::*;
}

/// Java code generation.
pub mod codegen {
    pub use apigen_codegen::*;
}

use apigen_codegen::{ArtifactSink, DEFAULT_NAMESPACE, Generator, GeneratorConfig};
use apigen_schema::{BatchOutcome, RegistryBuilder, SourceLocator, parse_schema};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Default output directory for generated sources.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "target/generated-sources/apigen";

/// Builder for configuring a generation run.
#[derive(Debug, Clone)]
pub struct ApiGenBuilder {
    default_package_name: String,
    guice_module_name: Option<String>,
    generate_only_pojo: bool,
    output_directory: PathBuf,
}

impl ApiGenBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            default_package_name: DEFAULT_NAMESPACE.to_string(),
            guice_module_name: None,
            generate_only_pojo: false,
            output_directory: PathBuf::from(DEFAULT_OUTPUT_DIRECTORY),
        }
    }

    /// Sets the package used when a type has no `@java(package:)` override.
    #[must_use]
    pub fn default_package_name(mut self, name: impl Into<String>) -> Self {
        self.default_package_name = name.into();
        self
    }

    /// Sets the Guice module to generate.
    #[must_use]
    pub fn guice_module_name(mut self, name: impl Into<String>) -> Self {
        self.guice_module_name = Some(name.into());
        self
    }

    /// Emits plain data types only, without resolver contracts.
    #[must_use]
    pub fn generate_only_pojo(mut self, enabled: bool) -> Self {
        self.generate_only_pojo = enabled;
        self
    }

    /// Sets the output directory used by [`ApiGen::generate`].
    #[must_use]
    pub fn output_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_directory = path.into();
        self
    }

    /// Builds the run.
    ///
    /// # Errors
    /// Returns `ApiGenError::Config` if a package or module name is not a
    /// valid Java name.
    pub fn build(self) -> Result<ApiGen, ApiGenError> {
        if !apigen_schema::is_valid_namespace(&self.default_package_name) {
            return Err(ApiGenError::config(format!(
                "'{}' is not a valid package name",
                self.default_package_name
            )));
        }
        if let Some(module) = &self.guice_module_name {
            if !apigen_schema::is_valid_namespace(module) {
                return Err(ApiGenError::config(format!(
                    "'{module}' is not a valid module name"
                )));
            }
        }

        Ok(ApiGen {
            registry: RegistryBuilder::new(self.default_package_name.as_str()),
            config: GeneratorConfig {
                default_namespace: self.default_package_name,
                guice_module_name: self.guice_module_name,
                generate_only_pojo: self.generate_only_pojo,
            },
            output_directory: self.output_directory,
            diagnostics: Mutex::new(Vec::new()),
        })
    }
}

impl Default for ApiGenBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A generation run: collects schemas, then generates once.
///
/// Schema batches may be added from several threads. [`ApiGen::generate`]
/// consumes the run, so no schema can be added after generation starts.
#[derive(Debug)]
pub struct ApiGen {
    registry: RegistryBuilder,
    config: GeneratorConfig,
    output_directory: PathBuf,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl ApiGen {
    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> ApiGenBuilder {
        ApiGenBuilder::new()
    }

    /// Generator configuration of this run.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Output directory used by [`ApiGen::generate`].
    #[must_use]
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Adds schema text owned by an already-built dependency.
    ///
    /// Returns the names of the inserted types. Problems are recorded as
    /// diagnostics of the run.
    pub fn add_for_reference(&self, locator: &SourceLocator, text: &str) -> Vec<String> {
        tracing::debug!("Processing reference schema {}", locator);
        match parse_schema(locator, text) {
            Ok(definitions) => self.record(self.registry.add_reference(locator, definitions)),
            Err(e) => {
                self.push(Diagnostic::new(Stage::Parse, e));
                Vec::new()
            }
        }
    }

    /// Adds schema text to generate code for.
    ///
    /// Returns the names of the inserted types. Problems are recorded as
    /// diagnostics of the run.
    pub fn add_for_generation(&self, locator: &SourceLocator, text: &str) -> Vec<String> {
        tracing::debug!("Processing schema {}", locator);
        match parse_schema(locator, text) {
            Ok(definitions) => self.record(self.registry.add_generation(locator, definitions)),
            Err(e) => {
                self.push(Diagnostic::new(Stage::Parse, e));
                Vec::new()
            }
        }
    }

    /// Reads and adds a reference schema file.
    pub fn add_for_reference_file(&self, path: impl AsRef<Path>) -> Vec<String> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => self.add_for_reference(&locator_for(path), &text),
            Err(e) => {
                self.push(Diagnostic::new(Stage::Read, ApiGenError::io(path, e)));
                Vec::new()
            }
        }
    }

    /// Reads and adds a generation schema file.
    pub fn add_for_generation_file(&self, path: impl AsRef<Path>) -> Vec<String> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => self.add_for_generation(&locator_for(path), &text),
            Err(e) => {
                self.push(Diagnostic::new(Stage::Read, ApiGenError::io(path, e)));
                Vec::new()
            }
        }
    }

    /// Number of diagnostics recorded so far.
    #[must_use]
    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.lock().len()
    }

    /// Freezes the registry and writes every artifact under the output directory.
    #[must_use]
    pub fn generate(self) -> RunReport {
        let mut sink = DirectorySink::new(self.output_directory.clone());
        self.generate_into(&mut sink)
    }

    /// Freezes the registry and hands every artifact to `sink`.
    #[must_use]
    pub fn generate_into(self, sink: &mut dyn ArtifactSink) -> RunReport {
        let Self {
            registry,
            config,
            diagnostics,
            ..
        } = self;
        let registry = registry.freeze();
        let mut diagnostics = diagnostics.into_inner();

        tracing::info!(
            "Generating {} types ({} known)",
            registry.generation_entries().count(),
            registry.len()
        );
        let generation = Generator::new(&registry, &config).generate(sink);
        diagnostics.extend(
            generation
                .errors
                .into_iter()
                .map(|e| Diagnostic::new(Stage::Generate, e)),
        );

        RunReport {
            artifacts: generation.artifacts,
            diagnostics,
        }
    }

    fn record(&self, outcome: BatchOutcome) -> Vec<String> {
        if !outcome.errors.is_empty() {
            let mut diagnostics = self.diagnostics.lock();
            diagnostics.extend(
                outcome
                    .errors
                    .into_iter()
                    .map(|e| Diagnostic::new(Stage::Register, e)),
            );
        }
        outcome.inserted
    }

    fn push(&self, diagnostic: Diagnostic) {
        tracing::error!("{}", diagnostic);
        self.diagnostics.lock().push(diagnostic);
    }
}

fn locator_for(path: &Path) -> SourceLocator {
    SourceLocator::new(path.display().to_string())
}
