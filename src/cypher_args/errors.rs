use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TranslateError {
    #[error("Missing required MutationMeta directive on add relationship mutation `{field}`")]
    MissingMutationMetadata { field: String },

    #[error("Add relationship mutation `{field}` must declare a from argument and a to argument (found {found})")]
    MissingRelationshipArguments { field: String, found: usize },

    #[error("Argument `{argument}` of `{field}` does not start with the `{prefix}` role prefix")]
    RelationshipParamPrefix {
        field: String,
        argument: String,
        prefix: String,
    },

    #[error("Add relationship mutation `{field}` maps both from and to arguments onto `{key}`")]
    AmbiguousRelationshipParams { field: String, key: String },

    #[error("Fragment `{0}` is not defined in this document")]
    FragmentNotFound(String),

    #[error("Pagination argument `{argument}` must be an integer, got {value}")]
    InvalidPaginationArgument { argument: String, value: String },

    #[error("Field `{field}` is not defined on the {operation} root type")]
    UnknownField { operation: String, field: String },

    #[error("No field selection found for `{0}`")]
    MissingHeadSelection(String),
}
