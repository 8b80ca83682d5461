use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde_json::{Map as JsonMap, Value as JsonValue};

use super::directives::{
    directive_args, find_directive, CypherDirective, MutationMeta, RelationDirective,
    TypedDirective,
};
use super::errors::SchemaError;
use super::type_identifiers::inner_type_name;
use crate::cypher_args::ParamMap;
use crate::graphql_parser::{
    self,
    ast::{
        Directive, FieldDefinition, OperationType, SchemaDocument, TypeDefinition, TypeKind,
        TypeRef, TypeSystemDefinition,
    },
};

const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// Declared argument of a schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentMeta {
    pub name: String,
    pub value_type: TypeRef,
    /// `None` when the argument declares no default
    pub default_value: Option<JsonValue>,
}

/// Everything the translator needs to know about one schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMeta {
    pub name: String,
    /// Declared arguments, in declaration order
    pub arguments: Vec<ArgumentMeta>,
    pub return_type: TypeRef,
    /// Raw directive usages, for directives outside the typed registry
    pub directives: Vec<Directive>,
    pub cypher: Option<CypherDirective>,
    pub relation: Option<RelationDirective>,
    pub mutation_meta: Option<MutationMeta>,
}

impl FieldMeta {
    pub fn from_definition(type_name: &str, def: &FieldDefinition) -> Result<Self, SchemaError> {
        let no_variables = JsonMap::new();
        let arguments = def
            .arguments
            .iter()
            .map(|arg| ArgumentMeta {
                name: arg.name.clone(),
                value_type: arg.value_type.clone(),
                default_value: arg
                    .default_value
                    .as_ref()
                    .and_then(|value| value.to_json(&no_variables)),
            })
            .collect();

        let at_field = |e: SchemaError| e.at_field(type_name, &def.name);

        Ok(FieldMeta {
            name: def.name.clone(),
            arguments,
            return_type: def.field_type.clone(),
            directives: def.directives.clone(),
            cypher: CypherDirective::find(&def.directives).map_err(at_field)?,
            relation: RelationDirective::find(&def.directives).map_err(at_field)?,
            mutation_meta: MutationMeta::find(&def.directives).map_err(at_field)?,
        })
    }

    pub fn argument(&self, name: &str) -> Option<&ArgumentMeta> {
        self.arguments.iter().find(|arg| arg.name == name)
    }

    /// Declared default values keyed by argument name.
    ///
    /// Arguments without a default are left out, so they never shadow a value
    /// supplied later.
    pub fn default_arguments(&self) -> ParamMap {
        self.arguments
            .iter()
            .filter_map(|arg| {
                arg.default_value
                    .as_ref()
                    .map(|value| (arg.name.clone(), value.clone()))
            })
            .collect()
    }

    pub fn directive(&self, name: &str) -> Option<&Directive> {
        find_directive(&self.directives, name)
    }

    pub fn directive_args(&self, directive_name: &str, wanted: &[&str]) -> ParamMap {
        directive_args(&self.directives, directive_name, wanted)
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directive(name).is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeIndex {
    pub name: String,
    pub kind: TypeKind,
    pub fields: HashMap<String, FieldMeta>,
}

/// Field metadata of a whole schema, indexed once at load time.
///
/// Lookups go straight from `type name → field name` to the precomputed
/// [`FieldMeta`] instead of walking the document on every resolution. The index
/// is immutable after construction and can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaIndex {
    types: HashMap<String, TypeIndex>,
    query_type: String,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    scalars: HashSet<String>,
    enums: HashSet<String>,
}

impl SchemaIndex {
    pub fn from_sdl(sdl: &str) -> Result<Self, SchemaError> {
        let document = graphql_parser::parse_schema(sdl).map_err(|e| SchemaError::Parse {
            message: e.to_string(),
        })?;
        Self::build(&document)
    }

    pub fn from_sdl_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let sdl = std::fs::read_to_string(path).map_err(|e| SchemaError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_sdl(&sdl)
    }

    pub fn build(document: &SchemaDocument) -> Result<Self, SchemaError> {
        let mut types: HashMap<String, TypeIndex> = HashMap::new();
        let mut extensions: Vec<&TypeDefinition> = Vec::new();
        let mut scalars: HashSet<String> = BUILTIN_SCALARS.iter().map(|s| s.to_string()).collect();
        let mut enums = HashSet::new();
        let mut roots = (None, None, None);

        for definition in &document.definitions {
            match definition {
                // `extend schema` only adds roots
                TypeSystemDefinition::Schema(schema) => {
                    roots = (
                        schema.query.clone().or(roots.0),
                        schema.mutation.clone().or(roots.1),
                        schema.subscription.clone().or(roots.2),
                    );
                }
                TypeSystemDefinition::Type(def) if def.extension => extensions.push(def),
                TypeSystemDefinition::Type(def) => {
                    if types.contains_key(&def.name) {
                        return Err(SchemaError::DuplicateType {
                            type_name: def.name.clone(),
                        });
                    }
                    match def.kind {
                        TypeKind::Scalar => {
                            scalars.insert(def.name.clone());
                        }
                        TypeKind::Enum => {
                            enums.insert(def.name.clone());
                        }
                        _ => {}
                    }
                    types.insert(def.name.clone(), index_type(def)?);
                }
                TypeSystemDefinition::Directive(_) => {}
            }
        }

        // Extensions may precede the type they extend
        for extension in extensions {
            let target = types.get_mut(&extension.name).ok_or_else(|| {
                SchemaError::UnknownExtendedType {
                    type_name: extension.name.clone(),
                }
            })?;
            for field in &extension.fields {
                target.fields.insert(
                    field.name.clone(),
                    FieldMeta::from_definition(&extension.name, field)?,
                );
            }
        }

        let (query, mutation, subscription) = roots;
        let index = SchemaIndex {
            query_type: query.unwrap_or_else(|| "Query".to_string()),
            mutation_type: mutation.or_else(|| {
                types.contains_key("Mutation").then(|| "Mutation".to_string())
            }),
            subscription_type: subscription.or_else(|| {
                types
                    .contains_key("Subscription")
                    .then(|| "Subscription".to_string())
            }),
            types,
            scalars,
            enums,
        };

        log::debug!(
            "Indexed schema: {} types, {} fields, mutation root: {:?}",
            index.types.len(),
            index.types.values().map(|t| t.fields.len()).sum::<usize>(),
            index.mutation_type
        );

        Ok(index)
    }

    pub fn query_type_name(&self) -> &str {
        &self.query_type
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn root_type_name(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => Some(&self.query_type),
            OperationType::Mutation => self.mutation_type.as_deref(),
            OperationType::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn type_index(&self, type_name: &str) -> Option<&TypeIndex> {
        self.types.get(type_name)
    }

    pub fn field(&self, type_name: &str, field_name: &str) -> Option<&FieldMeta> {
        self.types.get(type_name)?.fields.get(field_name)
    }

    /// Field of the root type for `operation`.
    pub fn root_field(&self, operation: OperationType, field_name: &str) -> Option<&FieldMeta> {
        self.field(self.root_type_name(operation)?, field_name)
    }

    pub fn mutation_field(&self, field_name: &str) -> Option<&FieldMeta> {
        self.root_field(OperationType::Mutation, field_name)
    }

    /// Declared defaults of a field; empty when the type or field is unknown.
    pub fn default_arguments(&self, type_name: &str, field_name: &str) -> ParamMap {
        self.field(type_name, field_name)
            .map(FieldMeta::default_arguments)
            .unwrap_or_default()
    }

    /// [`directive_args`] for `type_name.field_name`; empty when the field is unknown.
    pub fn field_directive_args(
        &self,
        type_name: &str,
        field_name: &str,
        directive_name: &str,
        wanted: &[&str],
    ) -> ParamMap {
        self.field(type_name, field_name)
            .map(|field| field.directive_args(directive_name, wanted))
            .unwrap_or_default()
    }

    /// True when the innermost type is a scalar or an enum.
    pub fn is_scalar_type(&self, type_ref: &TypeRef) -> bool {
        let name = inner_type_name(type_ref);
        self.scalars.contains(name) || self.enums.contains(name)
    }
}

fn index_type(def: &TypeDefinition) -> Result<TypeIndex, SchemaError> {
    let fields = def
        .fields
        .iter()
        .map(|field| Ok((field.name.clone(), FieldMeta::from_definition(&def.name, field)?)))
        .collect::<Result<HashMap<_, _>, SchemaError>>()?;

    Ok(TypeIndex {
        name: def.name.clone(),
        kind: def.kind,
        fields,
    })
}
