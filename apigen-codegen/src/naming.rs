//! Naming helpers for generated Java identifiers.
//!
//! GraphQL names are already camelCase, so only a few conversions are needed:
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `name` | [`capitalize`] | `Name` |
//! | `name` | [`getter_name`] | `getName` |
//! | `name` | [`member_name`] | `_name` |

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use apigen_codegen::naming::capitalize;
///
/// assert_eq!(capitalize("hello"), "Hello");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Getter method name for a field.
pub fn getter_name(field: &str) -> String {
    format!("get{}", capitalize(field))
}

/// Builder method name for a field.
pub fn builder_method_name(field: &str) -> String {
    format!("with{}", capitalize(field))
}

/// Private member name for a field.
///
/// The leading underscore keeps fields like `class` or `default` legal in Java.
pub fn member_name(field: &str) -> String {
    format!("_{field}")
}

/// Splits a fully qualified Java name into `(package, simple_name)`.
pub fn split_qualified(name: &str) -> (Option<&str>, &str) {
    match name.rsplit_once('.') {
        Some((package, simple)) => (Some(package), simple),
        None => (None, name),
    }
}
