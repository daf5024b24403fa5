//! Filesystem artifact sink.

use apigen_codegen::ArtifactSink;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each artifact to `<root>/<namespace as dirs>/<TypeName>.java`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an artifact is written to.
    #[must_use]
    pub fn path_for(&self, namespace: &str, type_name: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in namespace.split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{type_name}.java"));
        path
    }
}

impl ArtifactSink for DirectorySink {
    fn accept(&mut self, namespace: &str, type_name: &str, text: &str) -> std::io::Result<()> {
        let path = self.path_for(namespace, type_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, text)?;
        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}
