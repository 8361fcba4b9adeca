//! Integration tests for the aech translator CLI

mod binary_scenarios;
mod config_integration;
mod manifest_contract;
mod test_utils;
