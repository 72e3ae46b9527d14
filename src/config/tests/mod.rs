//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `flag_loading`: CLI flag and configuration file loading tests

mod flag_loading;
mod helpers;
mod precedence;
