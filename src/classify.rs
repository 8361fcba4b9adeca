//! Invocation classifier.
//!
//! Decides, before clap ever sees the argument vector, whether this process
//! was started as a bare capability-discovery request (`--help` or `-h` and
//! nothing else) or as a normal command invocation. The match is purely
//! syntactic: `translate --help` is a normal invocation and clap renders the
//! sub-command help for it.

use std::ffi::OsStr;

/// Tokens that request the manifest when they are the only argument.
pub const MANIFEST_FLAGS: [&str; 2] = ["--help", "-h"];

/// Outcome of classifying a raw argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Print the JSON manifest to stdout and exit successfully.
    EmitManifest,
    /// Hand the untouched argv to the command-line parser.
    Delegate,
}

/// Returns true only for exactly one token equal to `--help` or `-h`.
///
/// `args` excludes the program name. Tokens are compared as OS strings so
/// the decision is total over argv that is not valid UTF-8.
pub fn should_emit_manifest<S: AsRef<OsStr>>(args: &[S]) -> bool {
    match args {
        [only] => MANIFEST_FLAGS
            .iter()
            .any(|flag| only.as_ref() == OsStr::new(flag)),
        _ => false,
    }
}

/// Typed form of [`should_emit_manifest`].
pub fn classify<S: AsRef<OsStr>>(args: &[S]) -> Invocation {
    if should_emit_manifest(args) {
        Invocation::EmitManifest
    } else {
        Invocation::Delegate
    }
}
