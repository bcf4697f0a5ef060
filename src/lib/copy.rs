//! The local-copy extraction strategy.

use std::path::Path;

use crate::error::Error;
use crate::process::CommandRunner;

/// Copy the contents of `source_dir` into `target`, preserving all file
/// attributes and refusing to cross filesystem boundaries.
///
/// The whole operation is one `cp --archive --one-file-system` run: the
/// target (and intermediates) are created if absent, pre-existing unrelated
/// files are left alone, and same-named files are overwritten. A relative
/// `source_dir` is resolved against the current working directory first.
pub fn copy_to_target(
    runner: &dyn CommandRunner,
    source_dir: &Path,
    target: &Path,
) -> Result<(), Error> {
    let source_dir = std::path::absolute(source_dir).map_err(|err| {
        Error::Configuration(format!(
            "cannot resolve source directory '{}': {err}",
            source_dir.display()
        ))
    })?;
    let source = source_dir.to_string_lossy();
    let target = target.to_string_lossy();
    let script = concat!(
        "mkdir -p \"$2\" && cd \"$2\" && ",
        "cp --archive --one-file-system \"$1/\"* .",
    );
    runner
        .run(&["sh", "-c", script, "--", source.as_ref(), target.as_ref()])
        .map(|_| ())
}

#[cfg(test)]
mod test_copy_command {
    use super::*;
    use crate::process::fake::RecordingRunner;
    use std::path::PathBuf;

    #[test]
    fn runs_a_single_archive_copy_pipeline() {
        let runner = RecordingRunner::new();
        copy_to_target(&runner, Path::new("/srcA"), Path::new("/mnt/target")).unwrap();
        assert_eq!(runner.call_count(), 1);
        let call = runner.call(0);
        assert_eq!(call[0], "sh");
        assert_eq!(call[1], "-c");
        assert_eq!(
            call[2],
            "mkdir -p \"$2\" && cd \"$2\" && cp --archive --one-file-system \"$1/\"* ."
        );
        assert_eq!(&call[3..], ["--", "/srcA", "/mnt/target"]);
    }

    #[test]
    fn copy_preserves_attributes_and_stays_on_one_filesystem() {
        let runner = RecordingRunner::new();
        copy_to_target(&runner, Path::new("/srcA"), Path::new("/mnt/target")).unwrap();
        let script = &runner.call(0)[2];
        assert!(script.contains("--archive"));
        assert!(script.contains("--one-file-system"));
    }

    #[test]
    fn relative_source_is_made_absolute() {
        let runner = RecordingRunner::new();
        copy_to_target(&runner, Path::new("rel/dir"), Path::new("/mnt/target")).unwrap();
        let expected = std::env::current_dir().unwrap().join("rel/dir");
        assert_eq!(PathBuf::from(&runner.call(0)[4]), expected);
    }

    #[test]
    fn copy_failure_propagates() {
        let runner = RecordingRunner::failing_from(0);
        let err =
            copy_to_target(&runner, Path::new("/srcA"), Path::new("/mnt/target")).unwrap_err();
        assert!(matches!(err, Error::Subprocess { .. }));
    }
}
