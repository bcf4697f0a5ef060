//! The remote-archive extraction strategy.

use std::path::Path;

use crate::error::Error;
use crate::process::CommandRunner;

/// Fetch the compressed archive at `url` and unpack it into `target`.
///
/// The fetch is streamed straight into `tar`, so the archive bytes never
/// touch persistent storage. Unpacking preserves permission bits and numeric
/// owner/group IDs exactly as stored (`-p`; no UID/GID translation), handles
/// sparse files (`-S`) and creates directories only as the archive dictates.
pub fn extract_root_archive(
    runner: &dyn CommandRunner,
    url: &str,
    target: &Path,
) -> Result<(), Error> {
    let target = target.to_string_lossy();
    let script = "wget \"$1\" --progress=dot:mega -O - | tar -C \"$2\" -Sxpzf -";
    runner
        .run(&["sh", "-c", script, "--", url, target.as_ref()])
        .map(|_| ())
}
