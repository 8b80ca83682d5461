//! Tests for loading `TranslatorConfig` from the environment and YAML files

use std::env;
use std::io::Write;

use graphql_cypher::{ConfigError, TranslatorConfig};
use serial_test::serial;
use tempfile::NamedTempFile;

const ENV_KEYS: [&str; 3] = [
    "GRAPHQL_CYPHER_FIRST_ARG",
    "GRAPHQL_CYPHER_OFFSET_ARG",
    "GRAPHQL_CYPHER_STRICT_RELATIONSHIP_PARAMS",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = TranslatorConfig::from_env().unwrap();
    assert_eq!(config, TranslatorConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var("GRAPHQL_CYPHER_FIRST_ARG", "limit");
    env::set_var("GRAPHQL_CYPHER_OFFSET_ARG", "skip");
    env::set_var("GRAPHQL_CYPHER_STRICT_RELATIONSHIP_PARAMS", "true");

    let config = TranslatorConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.first_argument, "limit");
    assert_eq!(config.offset_argument, "skip");
    assert!(config.strict_relationship_params);
}

#[test]
#[serial]
fn test_from_env_rejects_bad_values() {
    clear_env();
    env::set_var("GRAPHQL_CYPHER_STRICT_RELATIONSHIP_PARAMS", "sometimes");
    let result = TranslatorConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Parse { .. })));

    env::set_var("GRAPHQL_CYPHER_FIRST_ARG", "offset");
    let result = TranslatorConfig::from_env();
    clear_env();
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_from_yaml_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "first_argument: limit")?;
    writeln!(file, "strict_relationship_params: true")?;

    let config = TranslatorConfig::from_yaml_file(file.path())?;
    assert_eq!(config.first_argument, "limit");
    // unspecified keys fall back to defaults
    assert_eq!(config.offset_argument, "offset");
    assert!(config.strict_relationship_params);
    Ok(())
}

#[test]
fn test_from_yaml_file_errors() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "first_argument: \"\"")?;
    assert!(matches!(
        TranslatorConfig::from_yaml_file(file.path()),
        Err(ConfigError::Validation(_))
    ));

    let mut file = NamedTempFile::new()?;
    writeln!(file, "strict_relationship_params: [1, 2]")?;
    assert!(matches!(
        TranslatorConfig::from_yaml_file(file.path()),
        Err(ConfigError::Parse { .. })
    ));

    assert!(TranslatorConfig::from_yaml_file("/nonexistent/translator.yaml").is_err());
    Ok(())
}
