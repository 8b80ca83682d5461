//! Unit tests - Public API behaviour of individual components
//!
//! These run without any schema files or environment setup unless a test
//! creates its own.

mod config_tests;
mod parser_robustness_tests;
