//! Directive metadata resolution.
//!
//! Only the first directive attached to a definition is inspected. If it is
//! `@java`, its first `package` argument overrides the default namespace.
//! Directives after the first are never consulted, even when the first one
//! carries no override.

use crate::error::SchemaError;
use crate::types::{Directive, SourceLocator, Value};

/// Name of the customization directive.
pub const CUSTOMIZATION_DIRECTIVE: &str = "java";

/// Name of the namespace-override argument of the customization directive.
pub const NAMESPACE_ARGUMENT: &str = "package";

/// Returns the effective namespace for a definition carrying `directives`.
///
/// # Arguments
/// * `directives` - Directives in declared order
/// * `default_namespace` - Namespace used when no override applies
/// * `locator` - Location of the annotated definition, for diagnostics
///
/// # Errors
/// Returns `SchemaError::DirectiveValue` if the override is not a string literal.
pub fn resolve_namespace(
    directives: &[Directive],
    default_namespace: &str,
    locator: &SourceLocator,
) -> Result<String, SchemaError> {
    let Some(first) = directives.first() else {
        return Ok(default_namespace.to_string());
    };

    if first.name != CUSTOMIZATION_DIRECTIVE {
        return Ok(default_namespace.to_string());
    }

    match first
        .arguments
        .iter()
        .find(|arg| arg.name == NAMESPACE_ARGUMENT)
    {
        Some(arg) => decode_string(&first.name, &arg.name, &arg.value, locator),
        None => Ok(default_namespace.to_string()),
    }
}

fn decode_string(
    directive: &str,
    argument: &str,
    value: &Value,
    locator: &SourceLocator,
) -> Result<String, SchemaError> {
    match value {
        Value::String(s) if is_valid_namespace(s) => Ok(s.clone()),
        Value::String(s) => Err(SchemaError::directive_value(
            directive,
            argument,
            locator.clone(),
            format!("'{s}' is not a valid package name"),
        )),
        other => Err(SchemaError::directive_value(
            directive,
            argument,
            locator.clone(),
            format!("expected a string literal, found {}", other.kind_name()),
        )),
    }
}

/// Returns true for dot-separated Java identifiers with no empty segment.
pub fn is_valid_namespace(s: &str) -> bool {
    !s.is_empty()
        && s.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> SourceLocator {
        SourceLocator::new("test.graphql")
    }

    fn java_package(pkg: &str) -> Directive {
        Directive::new("java").with_argument("package", Value::String(pkg.to_string()))
    }

    #[test]
    fn test_no_directives_uses_default() {
        let ns = resolve_namespace(&[], "com.x", &locator()).expect("resolve");
        assert_eq!(ns, "com.x");
    }

    #[test]
    fn test_first_java_directive_overrides() {
        for default in ["com.x", "org.other", ""] {
            let ns = resolve_namespace(&[java_package("x.y")], default, &locator())
                .expect("resolve");
            assert_eq!(ns, "x.y");
        }
    }

    #[test]
    fn test_second_directive_is_ignored() {
        let directives = [Directive::new("deprecated"), java_package("x.y")];
        let ns = resolve_namespace(&directives, "com.x", &locator()).expect("resolve");
        assert_eq!(ns, "com.x");
    }

    #[test]
    fn test_second_java_directive_is_ignored_when_first_lacks_package() {
        let directives = [
            Directive::new("java").with_argument("name", Value::String("Other".to_string())),
            java_package("x.y"),
        ];
        let ns = resolve_namespace(&directives, "com.x", &locator()).expect("resolve");
        assert_eq!(ns, "com.x");
    }

    #[test]
    fn test_first_package_argument_wins() {
        let directive = java_package("a.b").with_argument("package", Value::String("c.d".into()));
        let ns = resolve_namespace(&[directive], "com.x", &locator()).expect("resolve");
        assert_eq!(ns, "a.b");
    }

    #[test]
    fn test_unrelated_directive_name_is_not_an_error() {
        let directive = Directive::new("cacheControl").with_argument("package", Value::Int(3));
        let ns = resolve_namespace(&[directive], "com.x", &locator()).expect("resolve");
        assert_eq!(ns, "com.x");
    }

    #[test]
    fn test_non_string_package_is_rejected() {
        let directive = Directive::new("java").with_argument("package", Value::Int(42));
        let err = resolve_namespace(&[directive], "com.x", &locator()).unwrap_err();
        match err {
            SchemaError::DirectiveValue {
                directive,
                argument,
                locator,
                ..
            } => {
                assert_eq!(directive, "java");
                assert_eq!(argument, "package");
                assert_eq!(locator.source, "test.graphql");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_package_string_is_rejected() {
        for bad in ["", "com..x", "1com.x", "com.x-y"] {
            let result = resolve_namespace(&[java_package(bad)], "com.x", &locator());
            assert!(result.is_err(), "{bad}");
        }
    }
}
