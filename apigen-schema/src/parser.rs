//! GraphQL schema parser.
//!
//! Tokenizing and grammar are handled by `graphql-parser`; this module lowers
//! its syntax tree into the crate's [`Definition`] model.

use crate::error::SchemaError;
use crate::types::{
    Argument, Definition, Directive, DirectiveDef, EnumDef, EnumValueDef, ExtensionDef, FieldDef,
    InputObjectDef, InputValueDef, InterfaceDef, ObjectDef, Position, ScalarDef, SchemaDef,
    SourceLocator, TypeRef, UnionDef, Value,
};
use graphql_parser::schema as ast;

/// Parses GraphQL schema text into definitions.
///
/// # Arguments
/// * `locator` - Resource the text was read from
/// * `text` - Schema definition language text
///
/// # Returns
/// Definitions in declared order.
///
/// # Errors
/// Returns `SchemaError::SchemaSyntax` if the text is malformed.
pub fn parse_schema(locator: &SourceLocator, text: &str) -> Result<Vec<Definition>, SchemaError> {
    let document = ast::parse_schema::<String>(text).map_err(|e| {
        let message = e.to_string();
        let (line, column) = error_position(&message).unwrap_or((0, 0));
        SchemaError::syntax(locator.clone(), line, column, message.trim())
    })?;

    Ok(document.definitions.iter().map(lower_definition).collect())
}

/// Extracts `line:column` from a parser message such as `Parse error at 3:7`.
fn error_position(message: &str) -> Option<(usize, usize)> {
    let rest = &message[message.find(" at ")? + 4..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit() && c != ':')
        .unwrap_or(rest.len());
    let (line, column) = rest[..end].split_once(':')?;
    Some((line.parse().ok()?, column.parse().ok()?))
}

fn lower_definition(def: &ast::Definition<'_, String>) -> Definition {
    match def {
        ast::Definition::SchemaDefinition(schema) => Definition::Schema(SchemaDef {
            query: schema.query.clone(),
            mutation: schema.mutation.clone(),
            subscription: schema.subscription.clone(),
            directives: lower_directives(&schema.directives),
            position: Position::new(schema.position.line, schema.position.column),
        }),
        ast::Definition::TypeDefinition(type_def) => lower_type_definition(type_def),
        ast::Definition::TypeExtension(ext) => Definition::Extension(lower_extension(ext)),
        ast::Definition::DirectiveDefinition(directive) => Definition::Directive(DirectiveDef {
            name: directive.name.clone(),
            arguments: directive.arguments.iter().map(lower_input_value).collect(),
            position: Position::new(directive.position.line, directive.position.column),
        }),
    }
}

fn lower_type_definition(def: &ast::TypeDefinition<'_, String>) -> Definition {
    match def {
        ast::TypeDefinition::Scalar(t) => Definition::Scalar(ScalarDef {
            name: t.name.clone(),
            description: t.description.clone(),
            directives: lower_directives(&t.directives),
            position: Position::new(t.position.line, t.position.column),
        }),
        ast::TypeDefinition::Object(t) => Definition::Object(ObjectDef {
            name: t.name.clone(),
            description: t.description.clone(),
            implements: t.implements_interfaces.clone(),
            directives: lower_directives(&t.directives),
            fields: t.fields.iter().map(lower_field).collect(),
            position: Position::new(t.position.line, t.position.column),
        }),
        ast::TypeDefinition::Interface(t) => Definition::Interface(InterfaceDef {
            name: t.name.clone(),
            description: t.description.clone(),
            directives: lower_directives(&t.directives),
            fields: t.fields.iter().map(lower_field).collect(),
            position: Position::new(t.position.line, t.position.column),
        }),
        ast::TypeDefinition::Union(t) => Definition::Union(UnionDef {
            name: t.name.clone(),
            description: t.description.clone(),
            directives: lower_directives(&t.directives),
            members: t.types.clone(),
            position: Position::new(t.position.line, t.position.column),
        }),
        ast::TypeDefinition::Enum(t) => Definition::Enum(EnumDef {
            name: t.name.clone(),
            description: t.description.clone(),
            directives: lower_directives(&t.directives),
            values: t
                .values
                .iter()
                .map(|v| EnumValueDef {
                    name: v.name.clone(),
                    description: v.description.clone(),
                    directives: lower_directives(&v.directives),
                })
                .collect(),
            position: Position::new(t.position.line, t.position.column),
        }),
        ast::TypeDefinition::InputObject(t) => Definition::InputObject(InputObjectDef {
            name: t.name.clone(),
            description: t.description.clone(),
            directives: lower_directives(&t.directives),
            fields: t.fields.iter().map(lower_input_value).collect(),
            position: Position::new(t.position.line, t.position.column),
        }),
    }
}

fn lower_extension(ext: &ast::TypeExtension<'_, String>) -> ExtensionDef {
    let (name, kind, pos) = match ext {
        ast::TypeExtension::Scalar(t) => (&t.name, "scalar", t.position),
        ast::TypeExtension::Object(t) => (&t.name, "type", t.position),
        ast::TypeExtension::Interface(t) => (&t.name, "interface", t.position),
        ast::TypeExtension::Union(t) => (&t.name, "union", t.position),
        ast::TypeExtension::Enum(t) => (&t.name, "enum", t.position),
        ast::TypeExtension::InputObject(t) => (&t.name, "input", t.position),
    };

    ExtensionDef {
        name: name.clone(),
        kind,
        position: Position::new(pos.line, pos.column),
    }
}

fn lower_field(field: &ast::Field<'_, String>) -> FieldDef {
    FieldDef {
        name: field.name.clone(),
        description: field.description.clone(),
        arguments: field.arguments.iter().map(lower_input_value).collect(),
        field_type: lower_type(&field.field_type),
        directives: lower_directives(&field.directives),
        position: Position::new(field.position.line, field.position.column),
    }
}

fn lower_input_value(value: &ast::InputValue<'_, String>) -> InputValueDef {
    InputValueDef {
        name: value.name.clone(),
        description: value.description.clone(),
        value_type: lower_type(&value.value_type),
        default_value: value.default_value.as_ref().map(lower_value),
        directives: lower_directives(&value.directives),
        position: Position::new(value.position.line, value.position.column),
    }
}

fn lower_type(ty: &ast::Type<'_, String>) -> TypeRef {
    match ty {
        ast::Type::NamedType(name) => TypeRef::Named(name.clone()),
        ast::Type::ListType(inner) => TypeRef::List(Box::new(lower_type(inner))),
        ast::Type::NonNullType(inner) => TypeRef::NonNull(Box::new(lower_type(inner))),
    }
}

fn lower_directives(directives: &[ast::Directive<'_, String>]) -> Vec<Directive> {
    directives
        .iter()
        .map(|d| Directive {
            name: d.name.clone(),
            arguments: d
                .arguments
                .iter()
                .map(|(name, value)| Argument::new(name.clone(), lower_value(value)))
                .collect(),
            position: Position::new(d.position.line, d.position.column),
        })
        .collect()
}

fn lower_value(value: &ast::Value<'_, String>) -> Value {
    match value {
        ast::Value::Variable(name) => Value::Variable(name.clone()),
        ast::Value::Int(n) => n.as_i64().map_or(Value::Null, Value::Int),
        ast::Value::Float(f) => Value::Float(*f),
        ast::Value::String(s) => Value::String(s.clone()),
        ast::Value::Boolean(b) => Value::Boolean(*b),
        ast::Value::Null => Value::Null,
        ast::Value::Enum(name) => Value::Enum(name.clone()),
        ast::Value::List(items) => Value::List(items.iter().map(lower_value).collect()),
        ast::Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, value)| (name.clone(), lower_value(value)))
                .collect(),
        ),
    }
}
