//! Schema metadata consumed by the argument translator.
//!
//! The index is built once from SDL and maps every `type.field` to its declared
//! arguments (with defaults), return type and directives. The directives the
//! translator understands are parsed into typed structs at the same time, so a
//! malformed `@MutationMeta` or `@relation` is reported when the schema loads.

pub mod directives;
pub mod errors;
pub mod field_index;
pub mod type_identifiers;

pub use directives::{
    directive_args, CypherDirective, MutationMeta, RelationDirection, RelationDirective,
    TypedDirective,
};
pub use errors::SchemaError;
pub use field_index::{ArgumentMeta, FieldMeta, SchemaIndex, TypeIndex};
pub use type_identifiers::{
    inner_type, inner_type_name, is_array_type, low_first_letter, type_identifiers,
    TypeIdentifiers,
};
