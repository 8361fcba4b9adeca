//! Manifest emitter: the only thing that runs on the manifest path.

use crate::manifest::Manifest;
use std::io::{self, Write};

/// Exit status when the manifest could not be written (sysexits `EX_IOERR`).
pub const EXIT_WRITE_FAILED: i32 = 74;

/// Write the canonical manifest text to `out`.
///
/// The document is rendered in full before the first byte is written, so a
/// rendering failure never leaves partial JSON behind.
pub fn emit_manifest<W: Write>(manifest: &Manifest, out: &mut W) -> io::Result<()> {
    let document = manifest.to_json_pretty().map_err(io::Error::from)?;
    out.write_all(document.as_bytes())?;
    out.flush()
}

/// Emit to stdout and return the process exit status.
pub fn emit_to_stdout(manifest: &Manifest) -> i32 {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match emit_manifest(manifest, &mut handle) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("failed to write manifest: {}", e);
            EXIT_WRITE_FAILED
        }
    }
}
