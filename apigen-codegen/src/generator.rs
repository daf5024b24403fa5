//! Generation orchestration over a frozen registry.

use crate::error::CodegenError;
use crate::java::{
    EnumGenerator, InputGenerator, InterfaceGenerator, ModuleGenerator, ObjectGenerator,
    ResolverBinding, ScalarGenerator, UnionGenerator, args_interface_name,
};
use crate::naming::capitalize;
use crate::sink::ArtifactSink;
use apigen_schema::{
    Definition, DependencyEdge, Origin, ResolvedEntry, TypeEntry, TypeRegistry, resolve_entry,
};

/// Default namespace for definitions without a `@java(package:)` override.
pub const DEFAULT_NAMESPACE: &str = "com.graphql.generated";

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Namespace used for a simple DI module name.
    pub default_namespace: String,
    /// Name of the Guice module to generate, if any.
    pub guice_module_name: Option<String>,
    /// Emit plain data types only, without resolver contracts.
    pub generate_only_pojo: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            guice_module_name: None,
            generate_only_pojo: false,
        }
    }
}

/// Resolver contracts a generated artifact exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contracts {
    /// Batch lookup of unresolved identity references.
    pub batch_lookup: bool,
    /// Per-field resolution from a fetching context.
    pub field_resolution: bool,
}

impl Contracts {
    /// Derives the contracts for an entry.
    #[must_use]
    pub fn for_entry(entry: &TypeEntry, config: &GeneratorConfig) -> Self {
        if config.generate_only_pojo {
            return Self::default();
        }
        let field_resolution = match entry.definition() {
            Definition::Object(def) => def.fields.iter().any(|f| f.has_arguments()),
            _ => false,
        };
        Self {
            batch_lookup: entry.has_identity_field(),
            field_resolution,
        }
    }
}

/// One generated source artifact.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Namespace of the artifact.
    pub namespace: String,
    /// Simple type name.
    pub type_name: String,
    /// File name under the namespace directory.
    pub file_name: String,
    /// Generated source text.
    pub text: String,
    /// Entries this artifact refers to.
    pub dependencies: Vec<DependencyEdge>,
    /// Contracts the artifact exposes.
    pub contracts: Contracts,
}

impl Artifact {
    /// Fully qualified name of the generated type.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.type_name.clone()
        } else {
            format!("{}.{}", self.namespace, self.type_name)
        }
    }

    /// Returns true if this artifact depends on `name`.
    #[must_use]
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.name == name)
    }
}

/// Outcome of a generation pass.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Artifacts handed to the sink, in registry order.
    pub artifacts: Vec<Artifact>,
    /// Every error encountered.
    pub errors: Vec<CodegenError>,
}

impl GenerationReport {
    /// Returns true if no entry failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Looks up the artifact generated for a type name.
    #[must_use]
    pub fn artifact(&self, type_name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.type_name == type_name)
    }
}

/// Main code generator.
pub struct Generator<'a> {
    registry: &'a TypeRegistry,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over a frozen registry.
    #[must_use]
    pub fn new(registry: &'a TypeRegistry, config: &'a GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Generates one artifact per generation entry and hands each to `sink`.
    ///
    /// A failing entry does not stop the pass; its errors are collected in
    /// the report.
    pub fn generate(&self, sink: &mut dyn ArtifactSink) -> GenerationReport {
        let mut report = GenerationReport::default();

        for entry in self.registry.generation_entries() {
            match self.generate_entry(entry) {
                Ok(artifact) => match Self::emit(sink, artifact) {
                    Ok(artifact) => report.artifacts.push(artifact),
                    Err(err) => {
                        tracing::error!("{err}");
                        report.errors.push(err);
                    }
                },
                Err(errors) => {
                    for err in errors {
                        tracing::error!("Failed to generate {}: {err}", entry.name());
                        report.errors.push(err);
                    }
                }
            }
        }

        if let Some(module_name) = self.config.guice_module_name.as_deref() {
            match self
                .generate_module(module_name, &report.artifacts)
                .and_then(|artifact| Self::emit(sink, artifact))
            {
                Ok(artifact) => report.artifacts.push(artifact),
                Err(err) => {
                    tracing::error!("{err}");
                    report.errors.push(err);
                }
            }
        }

        report
    }

    /// Generates the artifact for a single entry without emitting it.
    ///
    /// # Errors
    /// Returns every unresolved type reference of the entry, or a generation
    /// error if the entry does not describe a type.
    pub fn generate_entry(&self, entry: &TypeEntry) -> Result<Artifact, Vec<CodegenError>> {
        let resolved = resolve_entry(entry, self.registry)
            .map_err(|errors| errors.into_iter().map(CodegenError::from).collect::<Vec<_>>())?;
        let contracts = Contracts::for_entry(entry, self.config);
        Self::check_nested_names(&resolved, contracts).map_err(|e| vec![e])?;
        let text = Self::render(&resolved, contracts).map_err(|e| vec![e])?;

        Ok(Artifact {
            namespace: entry.namespace().to_string(),
            type_name: entry.name().to_string(),
            file_name: format!("{}.java", entry.name()),
            text,
            dependencies: resolved.dependencies.into_values().collect(),
            contracts,
        })
    }

    fn render(resolved: &ResolvedEntry<'_>, contracts: Contracts) -> Result<String, CodegenError> {
        let text = match resolved.entry.definition() {
            Definition::Object(def) => ObjectGenerator::new(resolved, contracts).generate(def),
            Definition::Interface(def) => InterfaceGenerator::new(resolved).generate(def),
            Definition::Union(def) => UnionGenerator::new(resolved).generate(def),
            Definition::Scalar(def) => ScalarGenerator::new(resolved).generate(def),
            Definition::Enum(def) => EnumGenerator::new(resolved).generate(def),
            Definition::InputObject(def) => InputGenerator::new(resolved).generate(def),
            other => {
                return Err(CodegenError::generation(format!(
                    "{} definition at {} is not a type",
                    other.kind_name(),
                    resolved.entry.locator()
                )));
            }
        };
        Ok(text)
    }

    /// Rejects entries whose own name or referenced type names would be
    /// shadowed by a member type nested in the generated source.
    fn check_nested_names(
        resolved: &ResolvedEntry<'_>,
        contracts: Contracts,
    ) -> Result<(), CodegenError> {
        let nested = nested_type_names(resolved.entry.definition(), contracts);
        let entry = resolved.entry;
        let clash = std::iter::once(entry.name())
            .chain(resolved.dependencies.keys().map(String::as_str))
            .find(|name| nested.iter().any(|n| n.as_str() == *name));

        match clash {
            Some(name) => Err(CodegenError::generation(format!(
                "{} at {}: type name {name} clashes with a nested member of the generated {}",
                entry.name(),
                entry.locator(),
                entry.name()
            ))),
            None => Ok(()),
        }
    }

    fn generate_module(
        &self,
        module_name: &str,
        artifacts: &[Artifact],
    ) -> Result<Artifact, CodegenError> {
        let generator = ModuleGenerator::new(module_name, &self.config.default_namespace);
        let clashes_with_entry = self
            .registry
            .resolve(generator.name())
            .is_some_and(|entry| entry.namespace() == generator.namespace());
        // Bound types are imported by simple name.
        let clashes_with_artifact = artifacts.iter().any(|a| {
            a.type_name == generator.name()
                && (a.namespace == generator.namespace() || a.contracts.batch_lookup)
        });
        if clashes_with_entry || clashes_with_artifact {
            return Err(CodegenError::generation(format!(
                "Guice module {} clashes with a generated type of the same name",
                qualify(generator.namespace(), generator.name())
            )));
        }
        let bound: Vec<&Artifact> = artifacts
            .iter()
            .filter(|a| a.contracts.batch_lookup)
            .collect();
        let bindings: Vec<ResolverBinding> = bound
            .iter()
            .map(|a| ResolverBinding::new(a.namespace.as_str(), a.type_name.as_str()))
            .collect();

        Ok(Artifact {
            namespace: generator.namespace().to_string(),
            type_name: generator.name().to_string(),
            file_name: format!("{}.java", generator.name()),
            text: generator.generate(&bindings),
            dependencies: bound
                .iter()
                .map(|a| DependencyEdge {
                    name: a.type_name.clone(),
                    namespace: a.namespace.clone(),
                    origin: Origin::Generation,
                })
                .collect(),
            contracts: Contracts::default(),
        })
    }

    fn emit(sink: &mut dyn ArtifactSink, artifact: Artifact) -> Result<Artifact, CodegenError> {
        sink.accept(&artifact.namespace, &artifact.type_name, &artifact.text)
            .map_err(|source| CodegenError::Sink {
                namespace: artifact.namespace.clone(),
                type_name: artifact.type_name.clone(),
                source,
            })?;
        tracing::debug!("Generated {}", artifact.qualified_name());
        Ok(artifact)
    }
}

/// Simple names of the member types nested in the source generated for `definition`.
fn nested_type_names(definition: &Definition, contracts: Contracts) -> Vec<String> {
    match definition {
        Definition::Object(def) => {
            let mut names = vec!["Builder".to_string(), "Impl".to_string()];
            if contracts.batch_lookup {
                names.push("Unresolved".to_string());
                names.push("Resolver".to_string());
            }
            for field in def.fields.iter().filter(|f| f.has_arguments()) {
                names.push(args_interface_name(field));
                if contracts.field_resolution {
                    names.push(format!("{}Resolver", capitalize(&field.name)));
                }
            }
            names
        }
        Definition::Interface(def) => def
            .fields
            .iter()
            .filter(|f| f.has_arguments())
            .map(args_interface_name)
            .collect(),
        Definition::InputObject(_) => vec!["Builder".to_string()],
        _ => Vec::new(),
    }
}

fn qualify(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}
