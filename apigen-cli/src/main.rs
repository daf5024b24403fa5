//! apigen CLI - generates Java API sources from GraphQL schemas
//!
//! Reads `apigen.toml` when present; flags override its values.

use anyhow::Result;
use apigen::{ApiGen, RunReport};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod discovery;

use config::Config;

#[derive(Parser)]
#[command(name = "apigen")]
#[command(author, version, about = "Generate Java APIs from GraphQL schemas", long_about = None)]
struct Cli {
    /// Path to the configuration file (default: ./apigen.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory searched recursively for schemas to generate
    #[arg(short, long)]
    source_directory: Option<PathBuf>,

    /// Root directory of the generated sources
    #[arg(short, long)]
    output_directory: Option<PathBuf>,

    /// Dependency directory publishing graphql-apigen-schema/ (repeatable)
    #[arg(short, long = "reference")]
    references: Vec<PathBuf>,

    /// Package for types without a @java(package:) directive
    #[arg(short = 'p', long)]
    default_package_name: Option<String>,

    /// Guice module to generate, simple or fully qualified
    #[arg(short, long)]
    guice_module_name: Option<String>,

    /// Generate plain data types only, without resolver contracts
    #[arg(long)]
    generate_only_pojo: bool,

    /// Directory to publish the generation schemas into
    #[arg(long)]
    resource_directory: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Loads the configuration file and applies flag overrides.
    fn into_config(self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        if let Some(dir) = self.source_directory {
            config.source_directory = dir;
        }
        if let Some(dir) = self.output_directory {
            config.output_directory = dir;
        }
        config.reference_directories.extend(self.references);
        if let Some(name) = self.default_package_name {
            config.default_package_name = name;
        }
        if self.guice_module_name.is_some() {
            config.guice_module_name = self.guice_module_name;
        }
        if self.generate_only_pojo {
            config.generate_only_pojo = true;
        }
        if self.resource_directory.is_some() {
            config.resource_directory = self.resource_directory;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.into_config()?;
    let report = run(&config)?;

    for diagnostic in &report.diagnostics {
        eprintln!("error: {diagnostic}");
    }
    if !report.is_success() {
        anyhow::bail!(
            "generation failed with {} error(s)",
            report.diagnostics.len()
        );
    }

    tracing::info!(
        "Generated {} artifacts in {}",
        report.artifacts.len(),
        config.output_directory.display()
    );
    Ok(())
}

/// Runs discovery, registry population and generation for `config`.
fn run(config: &Config) -> Result<RunReport> {
    if !config.source_directory.exists() {
        tracing::debug!(
            "Source directory {} does not exist, nothing to generate",
            config.source_directory.display()
        );
        return Ok(RunReport::default());
    }
    tracing::debug!("source_directory={}", config.source_directory.display());
    tracing::debug!("output_directory={}", config.output_directory.display());

    let mut builder = ApiGen::builder()
        .default_package_name(config.default_package_name.as_str())
        .generate_only_pojo(config.generate_only_pojo)
        .output_directory(config.output_directory.as_path());
    if let Some(module) = &config.guice_module_name {
        builder = builder.guice_module_name(module.as_str());
    }
    let apigen = builder.build()?;

    for path in discovery::find_reference_schemas(&config.reference_directories)? {
        apigen.add_for_reference_file(&path);
    }
    for path in discovery::find_generation_schemas(&config.source_directory)? {
        apigen.add_for_generation_file(&path);
    }

    if let Some(resource_dir) = &config.resource_directory {
        discovery::publish_schemas(&config.source_directory, resource_dir)?;
    }

    Ok(apigen.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(root: &std::path::Path) -> Config {
        Config {
            source_directory: root.join("schema"),
            output_directory: root.join("out"),
            default_package_name: "com.x".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_flags_override_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config_path = dir.path().join(config::CONFIG_FILE);
        fs::write(&config_path, "").expect("write");

        let missing = dir.path().join("missing.toml");
        let cli = Cli::parse_from([
            "apigen",
            "--config",
            missing.to_str().expect("utf-8 path"),
            "--reference",
            "deps/a",
        ]);
        // Explicit config path that does not exist is an error.
        assert!(cli.into_config().is_err());

        let cli = Cli::parse_from([
            "apigen",
            "--config",
            config_path.to_str().expect("utf-8 path"),
            "-s",
            "graphql",
            "-p",
            "com.acme",
            "-r",
            "deps/a",
            "-r",
            "deps/b",
            "--generate-only-pojo",
        ]);
        let config = cli.into_config().expect("config");
        assert_eq!(config.source_directory, PathBuf::from("graphql"));
        assert_eq!(config.default_package_name, "com.acme");
        assert_eq!(
            config.reference_directories,
            [PathBuf::from("deps/a"), PathBuf::from("deps/b")]
        );
        assert!(config.generate_only_pojo);
        assert_eq!(config.guice_module_name, None);
    }

    #[test]
    fn test_missing_source_directory_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = run(&config_in(dir.path())).expect("run");

        assert!(report.is_success());
        assert!(report.artifacts.is_empty());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_run_with_references_and_resources() {
        let dir = tempfile::tempdir().expect("tempdir");
        let published = dir.path().join("deps/users").join(discovery::SCHEMA_RESOURCE_DIR);
        fs::create_dir_all(&published).expect("create dir");
        fs::write(
            published.join("user.graphql"),
            r#"type User @java(package: "com.users") { id: ID, name: String }"#,
        )
        .expect("write");
        fs::create_dir_all(dir.path().join("schema")).expect("create dir");
        fs::write(
            dir.path().join("schema/post.graphql"),
            "type Post { id: ID, author: User }",
        )
        .expect("write");

        let mut config = config_in(dir.path());
        config.reference_directories = vec![dir.path().join("deps/users")];
        config.resource_directory = Some(dir.path().join("resources"));

        let report = run(&config).expect("run");
        assert!(report.is_success());
        assert_eq!(report.artifacts.len(), 1);

        let post = fs::read_to_string(dir.path().join("out/com/x/Post.java")).expect("Post.java");
        assert!(post.contains("import com.users.User;"));
        assert!(!dir.path().join("out/com/users/User.java").exists());
        assert!(
            dir.path()
                .join("resources")
                .join(discovery::SCHEMA_RESOURCE_DIR)
                .join("post.graphql")
                .is_file()
        );
    }

    #[test]
    fn test_run_reports_failures() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("schema")).expect("create dir");
        fs::write(
            dir.path().join("schema/post.graphql"),
            "type Post { id: ID, author: User }",
        )
        .expect("write");

        let report = run(&config_in(dir.path())).expect("run");
        assert!(!report.is_success());
        assert_eq!(report.diagnostics.len(), 1);
    }
}
