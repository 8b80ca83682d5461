//! Naming derived from a field's return type.
//!
//! The innermost named type of a return type gives both the node label
//! (`Movie`) and the pattern variable bound to it in generated Cypher (`movie`).

use crate::graphql_parser::ast::TypeRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeIdentifiers {
    pub variable_name: String,
    pub type_name: String,
}

/// Unwrap list and non-null layers down to the named type.
pub fn inner_type(type_ref: &TypeRef) -> &TypeRef {
    match type_ref.of_type() {
        Some(wrapped) => inner_type(wrapped),
        None => type_ref,
    }
}

/// Name of the innermost named type.
pub fn inner_type_name(type_ref: &TypeRef) -> &str {
    match type_ref {
        TypeRef::Named(name) => name.as_str(),
        TypeRef::List(inner) | TypeRef::NonNull(inner) => inner_type_name(inner),
    }
}

pub fn low_first_letter(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn type_identifiers(return_type: &TypeRef) -> TypeIdentifiers {
    let type_name = inner_type_name(return_type).to_string();
    TypeIdentifiers {
        variable_name: low_first_letter(&type_name),
        type_name,
    }
}

/// True for list types, including non-null lists such as `[Movie]!`.
pub fn is_array_type(type_ref: &TypeRef) -> bool {
    match type_ref {
        TypeRef::List(_) => true,
        TypeRef::NonNull(inner) => matches!(**inner, TypeRef::List(_)),
        TypeRef::Named(_) => false,
    }
}
