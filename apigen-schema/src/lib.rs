//! # apigen Schema
//!
//! GraphQL schema model and type registry.
//!
//! This crate provides:
//! - Parsing of GraphQL schema text into a closed definition model
//! - `@java(package: ...)` directive resolution
//! - Type entries with derived generation metadata
//! - A type registry merged from reference and generation sources
//! - Resolution of type references for code generation

pub mod directive;
pub mod entry;
pub mod error;
pub mod ir;
pub mod parser;
pub mod registry;
pub mod types;

pub use directive::{
    CUSTOMIZATION_DIRECTIVE, NAMESPACE_ARGUMENT, is_valid_namespace, resolve_namespace,
};
pub use entry::{Origin, TypeEntry};
pub use error::SchemaError;
pub use ir::{DependencyEdge, ResolvedEntry, resolve_entry};
pub use parser::parse_schema;
pub use registry::{BatchOutcome, RegistryBuilder, TypeRegistry};
pub use types::{
    Argument, Definition, Directive, EnumDef, FieldDef, InputObjectDef, InputValueDef,
    InterfaceDef, ObjectDef, Position, ScalarDef, SourceLocator, TypeRef, UnionDef, Value,
    is_builtin_scalar,
};
