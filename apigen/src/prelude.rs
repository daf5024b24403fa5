//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use apigen::prelude::*;
//! ```

// Run types
pub use crate::error::ApiGenError;
pub use crate::report::{Diagnostic, RunReport, Stage};
pub use crate::sink::DirectorySink;
pub use crate::{ApiGen, ApiGenBuilder};

// Schema types
pub use apigen_schema::{
    Definition, Origin, RegistryBuilder, SchemaError, SourceLocator, TypeEntry, TypeRegistry,
    parse_schema, resolve_namespace,
};

// Codegen types
pub use apigen_codegen::{
    Artifact, ArtifactSink, CodegenError, Contracts, Generator, GeneratorConfig, MemorySink,
};
