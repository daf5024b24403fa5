//! Guice module generation.
//!
//! The module declares an `OptionalBinder` for every generated `Resolver` so
//! that applications can bind their batch lookups without the generated
//! code depending on them.

use super::render_file;
use crate::naming::split_qualified;
use std::collections::BTreeSet;

/// A generated type exposing a `Resolver` contract.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResolverBinding {
    /// Namespace of the type.
    pub namespace: String,
    /// Simple type name.
    pub type_name: String,
}

impl ResolverBinding {
    /// Creates a new binding.
    pub fn new(namespace: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
        }
    }
}

/// Generator for the dependency-injection module artifact.
pub struct ModuleGenerator<'a> {
    namespace: &'a str,
    name: &'a str,
}

impl<'a> ModuleGenerator<'a> {
    /// Creates a module generator for `module_name`.
    ///
    /// A simple name lands in `default_namespace`; a qualified name uses its
    /// own qualifier.
    #[must_use]
    pub fn new(module_name: &'a str, default_namespace: &'a str) -> Self {
        let (namespace, name) = split_qualified(module_name);
        Self {
            namespace: namespace.unwrap_or(default_namespace),
            name,
        }
    }

    /// Namespace the module is generated into.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.namespace
    }

    /// Simple class name of the module.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name
    }

    /// Generates the module source binding every resolver in `bindings`.
    #[must_use]
    pub fn generate(&self, bindings: &[ResolverBinding]) -> String {
        let mut imports: BTreeSet<String> = [
            "com.google.inject.AbstractModule",
            "com.google.inject.multibindings.OptionalBinder",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        for binding in bindings {
            if binding.namespace != self.namespace && !binding.namespace.is_empty() {
                imports.insert(format!("{}.{}", binding.namespace, binding.type_name));
            }
        }

        let mut body = String::new();
        body.push_str(&format!(
            "public class {} extends AbstractModule {{\n",
            self.name
        ));
        body.push_str("    @Override\n");
        body.push_str("    protected void configure() {\n");
        for binding in bindings {
            body.push_str(&format!(
                "        OptionalBinder.newOptionalBinder(binder(), {}.Resolver.class);\n",
                binding.type_name
            ));
        }
        body.push_str("    }\n");
        body.push_str("}\n");

        render_file(self.namespace, "generated resolvers", &imports, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_module_name() {
        let generator = ModuleGenerator::new("com.acme.di.ApiModule", "com.x");
        assert_eq!(generator.namespace(), "com.acme.di");
        assert_eq!(generator.name(), "ApiModule");

        let code = generator.generate(&[
            ResolverBinding::new("com.acme.di", "Post"),
            ResolverBinding::new("com.x", "User"),
        ]);
        assert!(code.contains("package com.acme.di;"));
        assert!(code.contains("import com.google.inject.AbstractModule;"));
        assert!(code.contains("import com.x.User;"));
        assert!(!code.contains("import com.acme.di.Post;"));
        assert!(code.contains("public class ApiModule extends AbstractModule {"));
        assert!(code.contains("OptionalBinder.newOptionalBinder(binder(), Post.Resolver.class);"));
        assert!(code.contains("OptionalBinder.newOptionalBinder(binder(), User.Resolver.class);"));
    }

    #[test]
    fn test_simple_module_name() {
        let generator = ModuleGenerator::new("ApiModule", "com.x");
        assert_eq!(generator.namespace(), "com.x");
        let code = generator.generate(&[]);
        assert!(code.contains("protected void configure() {\n    }\n"));
    }
}
