use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Translator configuration with validation
#[derive(Clone, Debug, Validate, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[validate(schema(function = "validate_distinct_pagination_arguments"))]
pub struct TranslatorConfig {
    /// Argument holding the page size
    #[validate(length(min = 1, message = "First argument name cannot be empty"))]
    pub first_argument: String,

    /// Argument holding the number of rows to skip
    #[validate(length(min = 1, message = "Offset argument name cannot be empty"))]
    pub offset_argument: String,

    /// Reject add-relationship mutations whose from/to parameter keys collide
    /// instead of logging a warning
    pub strict_relationship_params: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            first_argument: "first".to_string(),
            offset_argument: "offset".to_string(),
            strict_relationship_params: false,
        }
    }
}

fn validate_distinct_pagination_arguments(
    config: &TranslatorConfig,
) -> Result<(), ValidationError> {
    if config.first_argument == config.offset_argument {
        let mut error = ValidationError::new("pagination_arguments");
        error.message = Some("First and offset arguments must have different names".into());
        return Err(error);
    }
    Ok(())
}

impl TranslatorConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            first_argument: env::var("GRAPHQL_CYPHER_FIRST_ARG")
                .unwrap_or_else(|_| "first".to_string()),
            offset_argument: env::var("GRAPHQL_CYPHER_OFFSET_ARG")
                .unwrap_or_else(|_| "offset".to_string()),
            strict_relationship_params: parse_env_var(
                "GRAPHQL_CYPHER_STRICT_RELATIONSHIP_PARAMS",
                "false",
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// True for the arguments consumed by slicing rather than filtering.
    pub fn is_pagination_argument(&self, name: &str) -> bool {
        name == self.first_argument || name == self.offset_argument
    }
}

/// Parse an environment variable with a default value
fn parse_env_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}
