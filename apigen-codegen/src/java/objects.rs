//! Object and interface type generation.
//!
//! An object type becomes a Java interface with default getters and nested
//! `Builder` and `Impl` classes. When the batch lookup contract applies, an
//! identity-only `Unresolved` implementation and a `Resolver` are added.

use super::types::java_type;
use super::{
    FIELD_RESOLVER_CONTRACT, RESOLVER_CONTRACT, banner_source, dependency_imports,
    import_list_if_needed, push_args_interfaces, push_default_getters, push_javadoc, render_file,
};
use crate::generator::Contracts;
use crate::naming::{builder_method_name, capitalize, getter_name, member_name};
use apigen_schema::{FieldDef, InterfaceDef, ObjectDef, ResolvedEntry};

/// Generator for object types.
pub struct ObjectGenerator<'a> {
    resolved: &'a ResolvedEntry<'a>,
    contracts: Contracts,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator.
    #[must_use]
    pub fn new(resolved: &'a ResolvedEntry<'a>, contracts: Contracts) -> Self {
        Self {
            resolved,
            contracts,
        }
    }

    /// Generates the compilation unit for `def`.
    #[must_use]
    pub fn generate(&self, def: &ObjectDef) -> String {
        let mut imports = dependency_imports(self.resolved);
        import_list_if_needed(&mut imports, &def.fields);
        if self.contracts.batch_lookup {
            imports.insert("java.util.List".to_string());
        }
        if !def.fields.is_empty() {
            imports.insert("java.util.Objects".to_string());
        }

        let mut body = String::new();
        push_javadoc(&mut body, "", def.description.as_deref());
        let mut supertypes: Vec<&str> = def.implements.iter().map(String::as_str).collect();
        for union in &self.resolved.unions {
            if !supertypes.contains(&union.as_str()) {
                supertypes.push(union);
            }
        }
        if supertypes.is_empty() {
            body.push_str(&format!("public interface {} {{\n", def.name));
        } else {
            body.push_str(&format!(
                "public interface {} extends {} {{\n",
                def.name,
                supertypes.join(", ")
            ));
        }

        body.push_str(&self.generate_builder(def));
        body.push_str(&self.generate_impl(def));

        if self.contracts.batch_lookup {
            body.push_str(&self.generate_unresolved(def));
            body.push_str(&format!(
                "    public interface Resolver extends {RESOLVER_CONTRACT}<{}> {{\n",
                def.name
            ));
            body.push_str(&format!(
                "        public List<{0}> resolve(List<{0}> unresolved);\n",
                def.name
            ));
            body.push_str("    }\n\n");
        }

        push_args_interfaces(&mut body, &def.fields);

        if self.contracts.field_resolution {
            for field in def.fields.iter().filter(|f| f.has_arguments()) {
                body.push_str(&format!(
                    "    public interface {}Resolver extends {FIELD_RESOLVER_CONTRACT}<{}> {{\n",
                    capitalize(&field.name),
                    java_type(&field.field_type)
                ));
                body.push_str("    }\n\n");
            }
        }

        push_default_getters(&mut body, &def.fields);
        trim_trailing_blank(&mut body);
        body.push_str("}\n");

        render_file(
            self.resolved.entry.namespace(),
            &banner_source(self.resolved),
            &imports,
            &body,
        )
    }

    /// Generates the nested builder class.
    fn generate_builder(&self, def: &ObjectDef) -> String {
        let mut output = String::new();

        output.push_str("    public static class Builder {\n");
        for field in &def.fields {
            output.push_str(&format!(
                "        private {} {};\n",
                java_type(&field.field_type),
                member_name(&field.name)
            ));
        }
        output.push_str("\n        public Builder() {}\n\n");

        output.push_str(&format!("        public Builder({} src) {{\n", def.name));
        for field in &def.fields {
            output.push_str(&format!(
                "            {} = src.{}();\n",
                member_name(&field.name),
                getter_name(&field.name)
            ));
        }
        output.push_str("        }\n\n");

        for field in &def.fields {
            let member = member_name(&field.name);
            output.push_str(&format!(
                "        public Builder {}({} {member}) {{\n",
                builder_method_name(&field.name),
                java_type(&field.field_type)
            ));
            output.push_str(&format!("            this.{member} = {member};\n"));
            output.push_str("            return this;\n");
            output.push_str("        }\n\n");
        }

        output.push_str(&format!("        public {} build() {{\n", def.name));
        output.push_str("            return new Impl(this);\n");
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output
    }

    /// Generates the nested immutable implementation.
    fn generate_impl(&self, def: &ObjectDef) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "    public static class Impl implements {} {{\n",
            def.name
        ));
        for field in &def.fields {
            output.push_str(&format!(
                "        private final {} {};\n",
                java_type(&field.field_type),
                member_name(&field.name)
            ));
        }
        if !def.fields.is_empty() {
            output.push('\n');
        }

        output.push_str("        protected Impl(Builder builder) {\n");
        for field in &def.fields {
            let member = member_name(&field.name);
            output.push_str(&format!("            this.{member} = builder.{member};\n"));
        }
        output.push_str("        }\n\n");

        push_overriding_getters(&mut output, &def.fields);

        output.push_str("        @Override\n");
        output.push_str("        public String toString() {\n");
        output.push_str(&format!(
            "            return \"{}{{\"{} + \"}}\";\n",
            def.name,
            to_string_parts(&def.fields)
        ));
        output.push_str("        }\n\n");

        output.push_str("        @Override\n");
        output.push_str("        public boolean equals(Object obj) {\n");
        output.push_str("            if (this == obj) return true;\n");
        output.push_str("            if (!(obj instanceof Impl)) return false;\n");
        if def.fields.is_empty() {
            output.push_str("            return true;\n");
        } else {
            output.push_str("            Impl other = (Impl) obj;\n");
            let comparisons: Vec<String> = def
                .fields
                .iter()
                .map(|f| {
                    let member = member_name(&f.name);
                    format!("Objects.equals({member}, other.{member})")
                })
                .collect();
            output.push_str(&format!(
                "            return {};\n",
                comparisons.join("\n                && ")
            ));
        }
        output.push_str("        }\n\n");

        output.push_str("        @Override\n");
        output.push_str("        public int hashCode() {\n");
        if def.fields.is_empty() {
            output.push_str("            return 0;\n");
        } else {
            let members: Vec<String> = def.fields.iter().map(|f| member_name(&f.name)).collect();
            output.push_str(&format!(
                "            return Objects.hash({});\n",
                members.join(", ")
            ));
        }
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output
    }

    /// Generates the identity-only instance handed to the batch resolver.
    fn generate_unresolved(&self, def: &ObjectDef) -> String {
        let mut output = String::new();
        let id_type = def
            .fields
            .iter()
            .find(|f| f.name == "id")
            .map_or_else(|| "String".to_string(), |f| java_type(&f.field_type));

        output.push_str(&format!(
            "    public static class Unresolved implements {} {{\n",
            def.name
        ));
        output.push_str(&format!("        private final {id_type} _id;\n\n"));
        output.push_str(&format!("        public Unresolved({id_type} _id) {{\n"));
        output.push_str("            this._id = _id;\n");
        output.push_str("        }\n\n");
        output.push_str("        @Override\n");
        output.push_str(&format!("        public {id_type} getId() {{\n"));
        output.push_str("            return _id;\n");
        output.push_str("        }\n\n");
        output.push_str("        @Override\n");
        output.push_str("        public String toString() {\n");
        output.push_str(&format!(
            "            return \"{}.Unresolved{{id=\" + _id + \"}}\";\n",
            def.name
        ));
        output.push_str("        }\n");
        output.push_str("    }\n\n");

        output
    }
}

/// Generator for interface types.
pub struct InterfaceGenerator<'a> {
    resolved: &'a ResolvedEntry<'a>,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub fn new(resolved: &'a ResolvedEntry<'a>) -> Self {
        Self { resolved }
    }

    /// Generates the compilation unit for `def`.
    #[must_use]
    pub fn generate(&self, def: &InterfaceDef) -> String {
        let mut imports = dependency_imports(self.resolved);
        import_list_if_needed(&mut imports, &def.fields);

        let mut body = String::new();
        push_javadoc(&mut body, "", def.description.as_deref());
        body.push_str(&format!("public interface {} {{\n", def.name));
        push_args_interfaces(&mut body, &def.fields);
        push_default_getters(&mut body, &def.fields);
        trim_trailing_blank(&mut body);
        body.push_str("}\n");

        render_file(
            self.resolved.entry.namespace(),
            &banner_source(self.resolved),
            &imports,
            &body,
        )
    }
}

fn push_overriding_getters(output: &mut String, fields: &[FieldDef]) {
    for field in fields {
        output.push_str("        @Override\n");
        output.push_str(&format!(
            "        public {} {}() {{\n",
            java_type(&field.field_type),
            getter_name(&field.name)
        ));
        output.push_str(&format!("            return {};\n", member_name(&field.name)));
        output.push_str("        }\n\n");
    }
}

/// `+ "name=" + _name + ", other=" + _other` for `toString`.
fn to_string_parts(fields: &[FieldDef]) -> String {
    fields
        .iter()
        .enumerate()
        .map(|(i, f)| {
            let sep = if i == 0 { "" } else { ", " };
            format!(" + \"{sep}{}=\" + {}", f.name, member_name(&f.name))
        })
        .collect()
}

/// Drops the blank line left after the last member.
fn trim_trailing_blank(body: &mut String) {
    while body.ends_with("\n\n") {
        body.pop();
    }
}
