//! Artifact sinks.
//!
//! The generator never touches storage; every artifact goes through an
//! [`ArtifactSink`].

use std::collections::BTreeMap;

/// Destination for generated artifacts.
pub trait ArtifactSink {
    /// Accepts the generated text for `namespace.type_name`.
    ///
    /// # Errors
    /// Returns an IO error if the artifact cannot be stored.
    fn accept(&mut self, namespace: &str, type_name: &str, text: &str) -> std::io::Result<()>;
}

/// Sink keeping artifacts in memory, keyed by `(namespace, type_name)`.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    artifacts: BTreeMap<(String, String), String>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text stored for an artifact.
    #[must_use]
    pub fn get(&self, namespace: &str, type_name: &str) -> Option<&str> {
        self.artifacts
            .get(&(namespace.to_string(), type_name.to_string()))
            .map(String::as_str)
    }

    /// Iterates over `(namespace, type_name, text)` in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.artifacts
            .iter()
            .map(|((ns, name), text)| (ns.as_str(), name.as_str(), text.as_str()))
    }

    /// Returns the number of stored artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Returns true if nothing was stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl ArtifactSink for MemorySink {
    fn accept(&mut self, namespace: &str, type_name: &str, text: &str) -> std::io::Result<()> {
        self.artifacts.insert(
            (namespace.to_string(), type_name.to_string()),
            text.to_string(),
        );
        Ok(())
    }
}
