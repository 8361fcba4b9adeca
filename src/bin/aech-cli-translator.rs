//! Aech Translator CLI Binary
//!
//! Manifest-aware entry point: `--help` / `-h` alone print the capability
//! manifest, everything else runs the translator commands.

use std::process;

fn main() {
    process::exit(aech_cli_translator::entry::run(std::env::args_os()));
}
