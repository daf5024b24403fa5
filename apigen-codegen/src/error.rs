//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema or resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] apigen_schema::SchemaError),

    /// The artifact sink rejected an artifact.
    #[error("failed to write artifact '{namespace}.{type_name}': {source}")]
    Sink {
        /// Namespace of the artifact.
        namespace: String,
        /// Type name of the artifact.
        type_name: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Returns true if this error is an unresolved type reference.
    #[must_use]
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(
            self,
            Self::Schema(apigen_schema::SchemaError::UnresolvedTypeReference { .. })
        )
    }
}
