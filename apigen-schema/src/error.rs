//! Error types for schema parsing, registry population and reference resolution.

use crate::types::SourceLocator;
use thiserror::Error;

/// Error type for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Malformed IDL text.
    #[error("syntax error in {locator} at line {line}, column {column}: {message}")]
    SchemaSyntax {
        /// Resource that failed to parse.
        locator: SourceLocator,
        /// Line of the failure (0 when unknown).
        line: usize,
        /// Column of the failure (0 when unknown).
        column: usize,
        /// Parser message.
        message: String,
    },

    /// Directive argument literal that cannot be decoded.
    #[error("invalid value for argument '{argument}' of directive '@{directive}' at {locator}: {reason}")]
    DirectiveValue {
        /// Directive name.
        directive: String,
        /// Argument name.
        argument: String,
        /// Location of the annotated definition.
        locator: SourceLocator,
        /// Why the literal was rejected.
        reason: String,
    },

    /// Same type name registered twice.
    #[error("duplicate type '{name}': defined at {first} and again at {second}; keeping the first")]
    DuplicateTypeName {
        /// Type name.
        name: String,
        /// Locator of the retained entry.
        first: SourceLocator,
        /// Locator of the rejected entry.
        second: SourceLocator,
    },

    /// Type name not present in the registry.
    #[error("type '{entry}' at {locator} references unknown type '{missing}' in '{site}'")]
    UnresolvedTypeReference {
        /// Referencing entry.
        entry: String,
        /// Unresolved name.
        missing: String,
        /// Field, argument, interface or member mentioning it.
        site: String,
        /// Locator of the referencing entry.
        locator: SourceLocator,
    },
}

impl SchemaError {
    /// Creates a syntax error.
    pub fn syntax(
        locator: SourceLocator,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::SchemaSyntax {
            locator,
            line,
            column,
            message: message.into(),
        }
    }

    /// Creates a directive value error.
    pub fn directive_value(
        directive: impl Into<String>,
        argument: impl Into<String>,
        locator: SourceLocator,
        reason: impl Into<String>,
    ) -> Self {
        Self::DirectiveValue {
            directive: directive.into(),
            argument: argument.into(),
            locator,
            reason: reason.into(),
        }
    }

    /// Creates an unresolved reference error.
    pub fn unresolved(
        entry: impl Into<String>,
        missing: impl Into<String>,
        site: impl Into<String>,
        locator: SourceLocator,
    ) -> Self {
        Self::UnresolvedTypeReference {
            entry: entry.into(),
            missing: missing.into(),
            site: site.into(),
            locator,
        }
    }
}
