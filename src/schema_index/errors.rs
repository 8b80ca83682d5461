//! # Schema Index Error Types
//!
//! Errors raised while building the field index from a type system document.
//! They all point at schema authoring defects and surface once, at load time,
//! instead of on every field resolution.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    #[error("Failed to read schema file '{path}': {error}")]
    Read { path: String, error: String },
    #[error("Failed to parse schema: {message}")]
    Parse { message: String },
    #[error("Invalid @{directive} directive on `{type_name}.{field_name}`: {reason}")]
    InvalidDirective {
        directive: String,
        type_name: String,
        field_name: String,
        reason: String,
    },
    #[error("Type `{type_name}` is defined more than once")]
    DuplicateType { type_name: String },
    #[error("Extension of unknown type `{type_name}`")]
    UnknownExtendedType { type_name: String },
}

impl SchemaError {
    /// Attach the owning field to a directive error raised without it.
    pub fn at_field(self, type_name: &str, field_name: &str) -> Self {
        match self {
            SchemaError::InvalidDirective {
                directive, reason, ..
            } => SchemaError::InvalidDirective {
                directive,
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
                reason,
            },
            other => other,
        }
    }
}
