//! Aech translator CLI
//!
//! A document translation command line tool that doubles as a
//! self-describing capability for agent runtimes. A bare `--help` or `-h`
//! prints a machine-readable JSON manifest; every other invocation is a
//! normal clap-driven CLI run.

pub mod classify;
pub mod cli;
pub mod config;
pub mod emit;
pub mod entry;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod provider;
pub mod translation;
