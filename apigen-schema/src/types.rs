//! Schema definition model.
//!
//! This module contains the data structures representing parsed GraphQL
//! schema definitions: objects, interfaces, unions, scalars, enums, input
//! objects, plus the non-type definitions (directive declarations, the schema
//! declaration and type extensions).

use std::fmt;

/// Names of the scalars every GraphQL schema provides.
pub const BUILTIN_SCALARS: [&str; 5] = ["ID", "String", "Int", "Float", "Boolean"];

/// Returns true if `name` is one of the built-in scalars.
#[must_use]
pub fn is_builtin_scalar(name: &str) -> bool {
    BUILTIN_SCALARS.contains(&name)
}

/// Line/column position of a node inside its schema resource (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Identifies where a definition came from.
///
/// Used for diagnostics only, never for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SourceLocator {
    /// URL or path of the schema resource.
    pub source: String,
    /// Position inside the resource, if known.
    pub position: Option<Position>,
}

impl SourceLocator {
    /// Creates a locator for a whole resource.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position: None,
        }
    }

    /// Returns a locator pointing at `position` inside the same resource.
    #[must_use]
    pub fn at(&self, position: Position) -> Self {
        Self {
            source: self.source.clone(),
            position: Some(position),
        }
    }
}

impl fmt::Display for SourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{}:[{}, {}]", self.source, pos.line, pos.column),
            None => write!(f, "{}", self.source),
        }
    }
}

/// Literal value of a directive argument or default value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `$name` variable reference.
    Variable(String),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    String(String),
    /// Boolean literal.
    Boolean(bool),
    /// `null`.
    Null,
    /// Enum literal.
    Enum(String),
    /// List literal.
    List(Vec<Value>),
    /// Object literal, in declared order.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Returns a short name for the literal kind, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Null => "null",
            Self::Enum(_) => "enum",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

/// Named argument of a directive.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// Argument name.
    pub name: String,
    /// Literal value.
    pub value: Value,
}

impl Argument {
    /// Creates a new argument.
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Named annotation attached to a definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Directive name (without `@`).
    pub name: String,
    /// Arguments in declared order.
    pub arguments: Vec<Argument>,
    /// Position of the directive.
    pub position: Position,
}

impl Directive {
    /// Creates a directive without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            position: Position::default(),
        }
    }

    /// Adds an argument, builder style.
    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push(Argument::new(name, value));
        self
    }
}

/// Type expression used by fields and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Named type.
    Named(String),
    /// `[T]`.
    List(Box<TypeRef>),
    /// `T!`.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.base_name(),
        }
    }

    /// Returns true if the outermost wrapper is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{name}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

/// Argument of a field, or field of an input object.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDef {
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Declared type.
    pub value_type: TypeRef,
    /// Default value.
    pub default_value: Option<Value>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Position.
    pub position: Position,
}

impl InputValueDef {
    /// Creates an input value of the given type.
    #[must_use]
    pub fn new(name: impl Into<String>, value_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            value_type,
            default_value: None,
            directives: Vec::new(),
            position: Position::default(),
        }
    }
}

/// Field of an object or interface.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Arguments.
    pub arguments: Vec<InputValueDef>,
    /// Field type.
    pub field_type: TypeRef,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Position.
    pub position: Position,
}

impl FieldDef {
    /// Creates a field without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            arguments: Vec::new(),
            field_type,
            directives: Vec::new(),
            position: Position::default(),
        }
    }

    /// Returns true if the field takes arguments.
    #[must_use]
    pub fn has_arguments(&self) -> bool {
        !self.arguments.is_empty()
    }
}

/// Object type definition (`type Name { ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Implemented interfaces.
    pub implements: Vec<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Fields.
    pub fields: Vec<FieldDef>,
    /// Position.
    pub position: Position,
}

impl ObjectDef {
    /// Creates an empty object type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            implements: Vec::new(),
            directives: Vec::new(),
            fields: Vec::new(),
            position: Position::default(),
        }
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a directive, builder style.
    #[must_use]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.directives.push(directive);
        self
    }
}

/// Interface type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Fields.
    pub fields: Vec<FieldDef>,
    /// Position.
    pub position: Position,
}

/// Union type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Member type names.
    pub members: Vec<String>,
    /// Position.
    pub position: Position,
}

/// Custom scalar definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Position.
    pub position: Position,
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Values in declared order.
    pub values: Vec<EnumValueDef>,
    /// Position.
    pub position: Position,
}

/// Single enum value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDef {
    /// Value name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
}

/// Input object definition.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectDef {
    /// Type name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Input fields.
    pub fields: Vec<InputValueDef>,
    /// Position.
    pub position: Position,
}

/// Directive declaration (`directive @name(...) on ...`).
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDef {
    /// Directive name.
    pub name: String,
    /// Declared arguments.
    pub arguments: Vec<InputValueDef>,
    /// Position.
    pub position: Position,
}

/// Schema declaration (`schema { query: Query }`).
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDef {
    /// Query root type.
    pub query: Option<String>,
    /// Mutation root type.
    pub mutation: Option<String>,
    /// Subscription root type.
    pub subscription: Option<String>,
    /// Directives.
    pub directives: Vec<Directive>,
    /// Position.
    pub position: Position,
}

/// Type extension (`extend type Name ...`); recorded but never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionDef {
    /// Name of the extended type.
    pub name: String,
    /// Kind of the extended type.
    pub kind: &'static str,
    /// Position.
    pub position: Position,
}

/// A parsed schema definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Object type.
    Object(ObjectDef),
    /// Interface type.
    Interface(InterfaceDef),
    /// Union type.
    Union(UnionDef),
    /// Custom scalar.
    Scalar(ScalarDef),
    /// Enum type.
    Enum(EnumDef),
    /// Input object type.
    InputObject(InputObjectDef),
    /// Directive declaration.
    Directive(DirectiveDef),
    /// Schema declaration.
    Schema(SchemaDef),
    /// Type extension.
    Extension(ExtensionDef),
}

impl Definition {
    /// Returns the declared type name, or `None` for non-type definitions.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Object(d) => Some(&d.name),
            Self::Interface(d) => Some(&d.name),
            Self::Union(d) => Some(&d.name),
            Self::Scalar(d) => Some(&d.name),
            Self::Enum(d) => Some(&d.name),
            Self::InputObject(d) => Some(&d.name),
            Self::Directive(_) | Self::Schema(_) | Self::Extension(_) => None,
        }
    }

    /// Returns the directives attached to the definition.
    ///
    /// Definitions that cannot carry directives return an empty slice.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        match self {
            Self::Object(d) => &d.directives,
            Self::Interface(d) => &d.directives,
            Self::Union(d) => &d.directives,
            Self::Scalar(d) => &d.directives,
            Self::Enum(d) => &d.directives,
            Self::InputObject(d) => &d.directives,
            Self::Schema(d) => &d.directives,
            Self::Directive(_) | Self::Extension(_) => &[],
        }
    }

    /// Returns the position of the definition.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Object(d) => d.position,
            Self::Interface(d) => d.position,
            Self::Union(d) => d.position,
            Self::Scalar(d) => d.position,
            Self::Enum(d) => d.position,
            Self::InputObject(d) => d.position,
            Self::Directive(d) => d.position,
            Self::Schema(d) => d.position,
            Self::Extension(d) => d.position,
        }
    }

    /// Returns a short name for the definition kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Interface(_) => "interface",
            Self::Union(_) => "union",
            Self::Scalar(_) => "scalar",
            Self::Enum(_) => "enum",
            Self::InputObject(_) => "input",
            Self::Directive(_) => "directive",
            Self::Schema(_) => "schema",
            Self::Extension(_) => "extension",
        }
    }

    /// Returns true if this definition declares a named type.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(
            self,
            Self::Object(_)
                | Self::Interface(_)
                | Self::Union(_)
                | Self::Scalar(_)
                | Self::Enum(_)
                | Self::InputObject(_)
        )
    }

    /// Returns true if the definition is an object type with a field named exactly `id`.
    #[must_use]
    pub fn has_identity_field(&self) -> bool {
        match self {
            Self::Object(d) => d.fields.iter().any(|field| field.name == "id"),
            _ => false,
        }
    }

    /// Returns every named type this definition mentions, in declaration order.
    ///
    /// Built-in scalars are included; callers decide whether to skip them.
    #[must_use]
    pub fn type_references(&self) -> Vec<TypeReference> {
        let mut refs = Vec::new();
        match self {
            Self::Object(d) => {
                for name in &d.implements {
                    refs.push(TypeReference::new(name, "implements", d.position));
                }
                collect_field_refs(&d.fields, &mut refs);
            }
            Self::Interface(d) => collect_field_refs(&d.fields, &mut refs),
            Self::Union(d) => {
                for name in &d.members {
                    refs.push(TypeReference::new(name, "member", d.position));
                }
            }
            Self::InputObject(d) => {
                for field in &d.fields {
                    refs.push(TypeReference::new(
                        field.value_type.base_name(),
                        &field.name,
                        field.position,
                    ));
                }
            }
            Self::Scalar(_)
            | Self::Enum(_)
            | Self::Directive(_)
            | Self::Schema(_)
            | Self::Extension(_) => {}
        }
        refs
    }
}

fn collect_field_refs(fields: &[FieldDef], refs: &mut Vec<TypeReference>) {
    for field in fields {
        refs.push(TypeReference::new(
            field.field_type.base_name(),
            &field.name,
            field.position,
        ));
        for arg in &field.arguments {
            refs.push(TypeReference::new(
                arg.value_type.base_name(),
                format!("{}({})", field.name, arg.name),
                arg.position,
            ));
        }
    }
}

/// A named type mentioned by a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    /// Referenced type name.
    pub name: String,
    /// Where it is used (field name, `field(arg)`, `implements` or `member`).
    pub site: String,
    /// Position of the mentioning node.
    pub position: Position,
}

impl TypeReference {
    fn new(name: impl Into<String>, site: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            site: site.into(),
            position,
        }
    }
}
