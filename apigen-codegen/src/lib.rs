//! # apigen Codegen
//!
//! Java code generation from a frozen GraphQL type registry.
//!
//! This crate provides:
//! - One Java artifact per generation entry
//! - Resolver contract selection per entry
//! - Optional Guice module wiring the generated resolvers
//! - Pluggable artifact sinks

pub mod error;
pub mod generator;
pub mod java;
pub mod naming;
pub mod sink;

pub use error::CodegenError;
pub use generator::{
    Artifact, Contracts, DEFAULT_NAMESPACE, GenerationReport, Generator, GeneratorConfig,
};
pub use sink::{ArtifactSink, MemorySink};

/// Generates Java sources for every type in a single schema text.
///
/// All definitions are generation entries in `namespace` unless overridden by
/// a `@java(package:)` directive.
///
/// # Arguments
/// * `source` - Name of the schema, used in diagnostics
/// * `text` - GraphQL schema text
/// * `namespace` - Default namespace
///
/// # Returns
/// A sink holding the generated sources.
///
/// # Errors
/// Returns the first `CodegenError` encountered.
pub fn generate_from_str(
    source: &str,
    text: &str,
    namespace: &str,
) -> Result<MemorySink, CodegenError> {
    let locator = apigen_schema::SourceLocator::new(source);
    let definitions = apigen_schema::parse_schema(&locator, text)?;

    let builder = apigen_schema::RegistryBuilder::new(namespace);
    let outcome = builder.add_generation(&locator, definitions);
    if let Some(err) = outcome.errors.into_iter().next() {
        return Err(err.into());
    }
    let registry = builder.freeze();

    let config = GeneratorConfig {
        default_namespace: namespace.to_string(),
        ..GeneratorConfig::default()
    };
    let mut sink = MemorySink::new();
    let report = Generator::new(&registry, &config).generate(&mut sink);
    match report.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(sink),
    }
}
