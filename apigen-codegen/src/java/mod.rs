//! Java code generation modules.
//!
//! Each generator renders the body of one artifact; [`render_file`] wraps it
//! with the generated-file banner, package declaration and imports.

pub mod enums;
pub mod inputs;
pub mod module;
pub mod objects;
pub mod scalars;
pub mod types;
pub mod unions;

pub use enums::EnumGenerator;
pub use inputs::InputGenerator;
pub use module::{ModuleGenerator, ResolverBinding};
pub use objects::{InterfaceGenerator, ObjectGenerator};
pub use scalars::ScalarGenerator;
pub use unions::UnionGenerator;

use crate::naming::{capitalize, getter_name};
use apigen_schema::{FieldDef, ResolvedEntry};
use std::collections::BTreeSet;
use types::{java_type, needs_list_import};

/// Qualified name of the batch lookup contract.
pub const RESOLVER_CONTRACT: &str = "com.distelli.graphql.Resolver";

/// Qualified name of the field resolution contract.
pub const FIELD_RESOLVER_CONTRACT: &str = "com.distelli.graphql.ResolveDataFetchingEnvironment";

/// Renders a complete Java compilation unit.
pub fn render_file(namespace: &str, source: &str, imports: &BTreeSet<String>, body: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "// Generated by apigen from {source}. Do not edit.\n\n"
    ));
    if !namespace.is_empty() {
        output.push_str(&format!("package {namespace};\n\n"));
    }
    for import in imports {
        output.push_str(&format!("import {import};\n"));
    }
    if !imports.is_empty() {
        output.push('\n');
    }
    output.push_str(body);

    output
}

/// Imports every dependency living in another namespace.
pub(crate) fn dependency_imports(resolved: &ResolvedEntry<'_>) -> BTreeSet<String> {
    resolved
        .foreign_dependencies()
        .map(|dep| dep.qualified_name())
        .collect()
}

/// Adds `java.util.List` when any field or argument type is a list.
pub(crate) fn import_list_if_needed(imports: &mut BTreeSet<String>, fields: &[FieldDef]) {
    let uses_list = fields.iter().any(|f| {
        needs_list_import(&f.field_type)
            || f.arguments.iter().any(|a| needs_list_import(&a.value_type))
    });
    if uses_list {
        imports.insert("java.util.List".to_string());
    }
}

/// Writes a Javadoc block when a description is present.
pub(crate) fn push_javadoc(output: &mut String, indent: &str, description: Option<&str>) {
    let Some(description) = description else {
        return;
    };

    output.push_str(&format!("{indent}/**\n"));
    for line in description.lines() {
        let line = line.trim_end().replace("*/", "*&#47;");
        if line.is_empty() {
            output.push_str(&format!("{indent} *\n"));
        } else {
            output.push_str(&format!("{indent} * {line}\n"));
        }
    }
    output.push_str(&format!("{indent} */\n"));
}

/// Default getters returning `null`, so partial implementations stay legal.
pub(crate) fn push_default_getters(output: &mut String, fields: &[FieldDef]) {
    for field in fields {
        push_javadoc(output, "    ", field.description.as_deref());
        output.push_str(&format!(
            "    public default {} {}() {{\n",
            java_type(&field.field_type),
            getter_name(&field.name)
        ));
        output.push_str("        return null;\n");
        output.push_str("    }\n\n");
    }
}

/// Name of the nested arguments interface for a field.
pub(crate) fn args_interface_name(field: &FieldDef) -> String {
    format!("{}Args", capitalize(&field.name))
}

/// Nested `<Field>Args` interfaces for fields taking arguments.
pub(crate) fn push_args_interfaces(output: &mut String, fields: &[FieldDef]) {
    for field in fields.iter().filter(|f| f.has_arguments()) {
        output.push_str(&format!(
            "    public interface {} {{\n",
            args_interface_name(field)
        ));
        for arg in &field.arguments {
            output.push_str(&format!(
                "        public default {} {}() {{\n",
                java_type(&arg.value_type),
                getter_name(&arg.name)
            ));
            output.push_str("            return null;\n");
            output.push_str("        }\n");
        }
        output.push_str("    }\n\n");
    }
}

/// Path of the source definition for the banner.
pub(crate) fn banner_source(resolved: &ResolvedEntry<'_>) -> String {
    resolved.entry.locator().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_schema::TypeRef;

    #[test]
    fn test_render_file_with_package_and_imports() {
        let imports: BTreeSet<String> = ["java.util.List", "com.dep.User"]
            .into_iter()
            .map(String::from)
            .collect();
        let text = render_file("com.x", "schema/a.graphql", &imports, "public interface A {}\n");

        assert!(text.starts_with("// Generated by apigen from schema/a.graphql. Do not edit.\n"));
        assert!(text.contains("package com.x;\n\nimport com.dep.User;\nimport java.util.List;\n\n"));
        assert!(text.ends_with("public interface A {}\n"));
    }

    #[test]
    fn test_render_file_without_package() {
        let text = render_file("", "a.graphql", &BTreeSet::new(), "public enum E {}\n");
        assert!(!text.contains("package"));
        assert!(!text.contains("import"));
    }

    #[test]
    fn test_javadoc() {
        let mut out = String::new();
        push_javadoc(&mut out, "", Some("First line.\n\nSee */ here."));
        assert_eq!(out, "/**\n * First line.\n *\n * See *&#47; here.\n */\n");

        let mut out = String::new();
        push_javadoc(&mut out, "    ", None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_args_interfaces() {
        let mut field = FieldDef::new("posts", TypeRef::List(Box::new(TypeRef::named("Post"))));
        field
            .arguments
            .push(apigen_schema::InputValueDef::new("first", TypeRef::named("Int")));

        let mut out = String::new();
        push_args_interfaces(&mut out, &[field.clone(), FieldDef::new("id", TypeRef::named("ID"))]);
        assert!(out.contains("public interface PostsArgs {"));
        assert!(out.contains("public default Integer getFirst()"));
        assert!(!out.contains("IdArgs"));

        let mut imports = BTreeSet::new();
        import_list_if_needed(&mut imports, &[field]);
        assert!(imports.contains("java.util.List"));
    }
}
