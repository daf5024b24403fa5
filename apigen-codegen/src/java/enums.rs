//! Enum type generation.

use super::{banner_source, push_javadoc, render_file};
use apigen_schema::{EnumDef, ResolvedEntry};
use std::collections::BTreeSet;

/// Generator for enum types.
pub struct EnumGenerator<'a> {
    resolved: &'a ResolvedEntry<'a>,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(resolved: &'a ResolvedEntry<'a>) -> Self {
        Self { resolved }
    }

    /// Generates a Java enum with one constant per value, in declared order.
    #[must_use]
    pub fn generate(&self, def: &EnumDef) -> String {
        let mut body = String::new();

        push_javadoc(&mut body, "", def.description.as_deref());
        body.push_str(&format!("public enum {} {{\n", def.name));
        for (i, value) in def.values.iter().enumerate() {
            push_javadoc(&mut body, "    ", value.description.as_deref());
            let terminator = if i + 1 == def.values.len() { ";" } else { "," };
            body.push_str(&format!("    {}{terminator}\n", value.name));
        }
        body.push_str("}\n");

        render_file(
            self.resolved.entry.namespace(),
            &banner_source(self.resolved),
            &BTreeSet::new(),
            &body,
        )
    }
}
