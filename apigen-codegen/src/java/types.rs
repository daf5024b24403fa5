//! GraphQL to Java type mapping.
//!
//! | GraphQL | Java |
//! |---------|------|
//! | `ID`, `String` | `String` |
//! | `Int` | `Integer` |
//! | `Float` | `Double` |
//! | `Boolean` | `Boolean` |
//! | `[T]` | `List<T>` |
//! | `T!` | same as `T` |
//! | custom | simple type name |
//!
//! Boxed types are always used since every field may be absent on an
//! unresolved instance.

use apigen_schema::TypeRef;

/// Maps a built-in scalar to its Java type.
pub fn builtin_java_type(name: &str) -> Option<&'static str> {
    match name {
        "ID" | "String" => Some("String"),
        "Int" => Some("Integer"),
        "Float" => Some("Double"),
        "Boolean" => Some("Boolean"),
        _ => None,
    }
}

/// Maps a GraphQL type expression to a Java type.
pub fn java_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => builtin_java_type(name)
            .map(str::to_string)
            .unwrap_or_else(|| name.clone()),
        TypeRef::List(inner) => format!("List<{}>", java_type(inner)),
        TypeRef::NonNull(inner) => java_type(inner),
    }
}

/// Check if a type expression requires a `java.util.List` import.
pub fn needs_list_import(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Named(_) => false,
        TypeRef::List(_) => true,
        TypeRef::NonNull(inner) => needs_list_import(inner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_null(ty: TypeRef) -> TypeRef {
        TypeRef::NonNull(Box::new(ty))
    }

    fn list(ty: TypeRef) -> TypeRef {
        TypeRef::List(Box::new(ty))
    }

    #[test]
    fn test_builtin_scalars() {
        assert_eq!(java_type(&TypeRef::named("ID")), "String");
        assert_eq!(java_type(&TypeRef::named("String")), "String");
        assert_eq!(java_type(&TypeRef::named("Int")), "Integer");
        assert_eq!(java_type(&TypeRef::named("Float")), "Double");
        assert_eq!(java_type(&TypeRef::named("Boolean")), "Boolean");
    }

    #[test]
    fn test_custom_and_wrapped_types() {
        assert_eq!(java_type(&TypeRef::named("User")), "User");
        assert_eq!(java_type(&non_null(TypeRef::named("User"))), "User");
        assert_eq!(
            java_type(&non_null(list(non_null(TypeRef::named("Int"))))),
            "List<Integer>"
        );
        assert_eq!(
            java_type(&list(list(TypeRef::named("String")))),
            "List<List<String>>"
        );
    }

    #[test]
    fn test_needs_list_import() {
        assert!(!needs_list_import(&non_null(TypeRef::named("ID"))));
        assert!(needs_list_import(&non_null(list(TypeRef::named("ID")))));
    }
}
