use std::collections::HashMap;
use std::fmt;

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Query => write!(f, "query"),
            OperationType::Mutation => write!(f, "mutation"),
            OperationType::Subscription => write!(f, "subscription"),
        }
    }
}

/// Argument value as written in a document.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Converts the literal into a JSON value.
    ///
    /// Variable references resolve against `variables` by the variable's own
    /// name. An unbound variable yields `None` at the top level, `null` inside
    /// a list, and drops the entry inside an object.
    pub fn to_json(&self, variables: &JsonMap<String, JsonValue>) -> Option<JsonValue> {
        match self {
            Value::Variable(name) => variables.get(name).cloned(),
            Value::Int(i) => Some(JsonValue::from(*i)),
            Value::Float(f) => Some(Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number)),
            Value::String(s) => Some(JsonValue::String(s.clone())),
            Value::Boolean(b) => Some(JsonValue::Bool(*b)),
            Value::Null => Some(JsonValue::Null),
            Value::Enum(e) => Some(JsonValue::String(e.clone())),
            Value::List(items) => Some(JsonValue::Array(
                items
                    .iter()
                    .map(|item| item.to_json(variables).unwrap_or(JsonValue::Null))
                    .collect(),
            )),
            Value::Object(fields) => Some(JsonValue::Object(
                fields
                    .iter()
                    .filter_map(|(k, v)| v.to_json(variables).map(|v| (k.clone(), v)))
                    .collect(),
            )),
        }
    }

    /// String payload of a `String` or `Enum` literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Value::Variable(_))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Argument {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Directive {
    /// First argument with the given name.
    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| &arg.value)
    }
}

/// Type reference with list and non-null wrappers.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// The type one wrapper layer down, `None` for a named type.
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Named(_) => None,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => Some(inner),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

// ===== Executable documents =====

#[derive(Debug, PartialEq, Clone)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Field {
            alias: None,
            name: name.into(),
            arguments: Vec::new(),
            directives: Vec::new(),
            selection_set: Vec::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments.push(Argument::new(name, value));
        self
    }

    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selection_set = selections;
        self
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    /// Key under which the field appears in a response.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment {
    pub type_condition: Option<String>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn spread(name: impl Into<String>) -> Self {
        Selection::FragmentSpread(FragmentSpread {
            name: name.into(),
            directives: Vec::new(),
        })
    }

    pub fn as_field(&self) -> Option<&Field> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Arguments of a field selection; fragments carry none.
    pub fn arguments(&self) -> &[Argument] {
        match self {
            Selection::Field(field) => &field.arguments,
            Selection::FragmentSpread(_) | Selection::InlineFragment(_) => &[],
        }
    }
}

impl From<Field> for Selection {
    fn from(field: Field) -> Self {
        Selection::Field(field)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: String,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
}

/// Fragments of a document keyed by name.
pub type FragmentTable = HashMap<String, FragmentDefinition>;

#[derive(Debug, PartialEq, Clone)]
pub enum ExecutableDefinition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct ExecutableDocument {
    pub definitions: Vec<ExecutableDefinition>,
}

impl ExecutableDocument {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            ExecutableDefinition::Operation(op) => Some(op),
            ExecutableDefinition::Fragment(_) => None,
        })
    }

    /// Operation by name, or the only operation when `name` is `None`.
    pub fn operation(&self, name: Option<&str>) -> Option<&OperationDefinition> {
        match name {
            Some(name) => self
                .operations()
                .find(|op| op.name.as_deref() == Some(name)),
            None => {
                let mut ops = self.operations();
                let first = ops.next();
                if ops.next().is_some() {
                    None
                } else {
                    first
                }
            }
        }
    }

    pub fn fragments(&self) -> FragmentTable {
        self.definitions
            .iter()
            .filter_map(|def| match def {
                ExecutableDefinition::Fragment(fragment) => {
                    Some((fragment.name.clone(), fragment.clone()))
                }
                ExecutableDefinition::Operation(_) => None,
            })
            .collect()
    }
}

// ===== Type system documents =====

#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition {
    pub name: String,
    pub value_type: TypeRef,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition {
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeRef,
    pub directives: Vec<Directive>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TypeKind {
    Object,
    Interface,
    InputObject,
    Enum,
    Scalar,
    Union,
}

#[derive(Debug, PartialEq, Clone)]
pub struct TypeDefinition {
    pub kind: TypeKind,
    pub name: String,
    pub extension: bool,
    pub implements: Vec<String>,
    pub directives: Vec<Directive>,
    /// Object and interface fields
    pub fields: Vec<FieldDefinition>,
    /// Input object fields
    pub input_fields: Vec<InputValueDefinition>,
    pub enum_values: Vec<String>,
    pub union_members: Vec<String>,
}

impl TypeDefinition {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        TypeDefinition {
            kind,
            name: name.into(),
            extension: false,
            implements: Vec::new(),
            directives: Vec::new(),
            fields: Vec::new(),
            input_fields: Vec::new(),
            enum_values: Vec::new(),
            union_members: Vec::new(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct SchemaDefinition {
    pub query: Option<String>,
    pub mutation: Option<String>,
    pub subscription: Option<String>,
    pub directives: Vec<Directive>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition {
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<String>,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TypeSystemDefinition {
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct SchemaDocument {
    pub definitions: Vec<TypeSystemDefinition>,
}
