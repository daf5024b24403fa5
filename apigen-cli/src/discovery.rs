//! Schema discovery on disk.
//!
//! Generation schemas are found recursively under the source directory.
//! Reference schemas are published by dependencies under
//! `graphql-apigen-schema/`, which stands in for the dependency classpath.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory under which schemas are published for downstream builds.
pub const SCHEMA_RESOURCE_DIR: &str = "graphql-apigen-schema";

/// Returns true for `*.graphql` and `*.graphqls` files.
pub fn is_schema_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "graphql" || ext == "graphqls")
        .unwrap_or(false)
}

/// Finds every schema under `dir`, sorted by path.
pub fn find_generation_schemas(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut schemas = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && is_schema_file(path) {
            tracing::debug!("Found schema {}", path.display());
            schemas.push(path.to_path_buf());
        }
    }

    schemas.sort();
    Ok(schemas)
}

/// Finds the schemas published by each reference directory, in directory order.
///
/// Directories without a `graphql-apigen-schema/` folder contribute nothing.
pub fn find_reference_schemas(dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut schemas = Vec::new();

    for dir in dirs {
        let published = dir.join(SCHEMA_RESOURCE_DIR);
        if !published.is_dir() {
            tracing::debug!("No published schemas in {}", dir.display());
            continue;
        }
        schemas.extend(top_level_schemas(&published)?);
    }

    Ok(schemas)
}

/// Copies the schemas directly under `source_dir` into
/// `<resource_dir>/graphql-apigen-schema/`.
///
/// Returns the number of files copied.
pub fn publish_schemas(source_dir: &Path, resource_dir: &Path) -> Result<usize> {
    let target = resource_dir.join(SCHEMA_RESOURCE_DIR);
    let schemas = top_level_schemas(source_dir)?;
    if schemas.is_empty() {
        return Ok(0);
    }

    fs::create_dir_all(&target)
        .with_context(|| format!("Failed to create {}", target.display()))?;
    for schema in &schemas {
        let Some(name) = schema.file_name() else {
            continue;
        };
        let destination = target.join(name);
        fs::copy(schema, &destination).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                schema.display(),
                destination.display()
            )
        })?;
    }

    tracing::info!("Published {} schemas to {}", schemas.len(), target.display());
    Ok(schemas.len())
}

fn top_level_schemas(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut schemas = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read {}", dir.display()))?;
        if entry.file_type().is_file() && is_schema_file(entry.path()) {
            schemas.push(entry.into_path());
        }
    }

    schemas.sort();
    Ok(schemas)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dir");
        }
        fs::write(path, "type T { id: ID }").expect("write");
    }

    #[test]
    fn test_is_schema_file() {
        assert!(is_schema_file(Path::new("a/user.graphql")));
        assert!(is_schema_file(Path::new("user.graphqls")));
        assert!(!is_schema_file(Path::new("user.gql")));
        assert!(!is_schema_file(Path::new("graphql")));
    }

    #[test]
    fn test_find_generation_schemas_is_recursive_and_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        touch(&dir.path().join("b.graphql"));
        touch(&dir.path().join("nested/deeper/a.graphqls"));
        touch(&dir.path().join("a.graphql"));
        touch(&dir.path().join("notes.txt"));

        let found = find_generation_schemas(dir.path()).expect("walk");
        let relative: Vec<PathBuf> = found
            .iter()
            .map(|p| p.strip_prefix(dir.path()).expect("prefix").to_path_buf())
            .collect();
        assert_eq!(
            relative,
            [
                PathBuf::from("a.graphql"),
                PathBuf::from("b.graphql"),
                Path::new("nested").join("deeper").join("a.graphqls"),
            ]
        );
    }

    #[test]
    fn test_find_reference_schemas() {
        let dir = tempfile::tempdir().expect("tempdir");
        let users = dir.path().join("users");
        let empty = dir.path().join("empty");
        touch(&users.join(SCHEMA_RESOURCE_DIR).join("user.graphql"));
        touch(&users.join(SCHEMA_RESOURCE_DIR).join("nested/ignored.graphql"));
        touch(&users.join("other.graphql"));
        fs::create_dir_all(&empty).expect("create dir");

        let found = find_reference_schemas(&[empty, users.clone()]).expect("scan");
        assert_eq!(found, [users.join(SCHEMA_RESOURCE_DIR).join("user.graphql")]);
    }

    #[test]
    fn test_publish_schemas() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("schema");
        let resources = dir.path().join("resources");
        touch(&source.join("user.graphql"));
        touch(&source.join("nested/post.graphql"));

        let copied = publish_schemas(&source, &resources).expect("publish");
        assert_eq!(copied, 1);
        assert!(resources.join(SCHEMA_RESOURCE_DIR).join("user.graphql").is_file());
        assert!(!resources.join(SCHEMA_RESOURCE_DIR).join("post.graphql").exists());
    }
}
