//! `apigen.toml` configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "apigen.toml";

/// Run configuration, loaded from `apigen.toml` and overridden by flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory searched recursively for schemas to generate.
    pub source_directory: PathBuf,

    /// Root of the generated sources.
    pub output_directory: PathBuf,

    /// Directories of already-built dependencies holding
    /// `graphql-apigen-schema/*.graphql{,s}`.
    pub reference_directories: Vec<PathBuf>,

    /// Package for types without a `@java(package:)` directive.
    pub default_package_name: String,

    /// Guice module to generate, simple or fully qualified.
    pub guice_module_name: Option<String>,

    /// Generate plain data types only, without resolver contracts.
    pub generate_only_pojo: bool,

    /// Where to publish the generation schemas for downstream builds.
    pub resource_directory: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from("schema"),
            output_directory: PathBuf::from(apigen::DEFAULT_OUTPUT_DIRECTORY),
            reference_directories: Vec::new(),
            default_package_name: apigen::codegen::DEFAULT_NAMESPACE.to_string(),
            guice_module_name: None,
            generate_only_pojo: false,
            resource_directory: None,
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Loads `path` if given, else `apigen.toml` when present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::from_file(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").expect("parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.source_directory, PathBuf::from("schema"));
        assert_eq!(
            config.output_directory,
            PathBuf::from("target/generated-sources/apigen")
        );
        assert_eq!(config.default_package_name, "com.graphql.generated");
        assert!(!config.generate_only_pojo);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
source_directory = "src/main/graphql"
output_directory = "gen"
reference_directories = ["deps/users", "deps/media"]
default_package_name = "com.acme.api"
guice_module_name = "com.acme.api.ApiModule"
generate_only_pojo = true
resource_directory = "target/classes"
"#,
        )
        .expect("parse");

        assert_eq!(config.source_directory, PathBuf::from("src/main/graphql"));
        assert_eq!(config.reference_directories.len(), 2);
        assert_eq!(config.guice_module_name.as_deref(), Some("com.acme.api.ApiModule"));
        assert!(config.generate_only_pojo);
        assert_eq!(config.resource_directory, Some(PathBuf::from("target/classes")));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_toml("sourceDirectory = \"x\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(Config::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "default_package_name = \"com.x\"\n").expect("write");

        let config = Config::load(Some(&path)).expect("load");
        assert_eq!(config.default_package_name, "com.x");
    }
}
