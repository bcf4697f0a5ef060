//! Resolving which sources to install, and installing them in order.

use std::path::Path;

use crate::config::Config;
use crate::error::Error;
use crate::process::CommandRunner;
use crate::source::Source;

/// Determine the authoritative target and ordered source list for one run.
///
/// Locators given explicitly win and are used verbatim, in the given order;
/// only when none are given is the configuration file (if any) consulted for
/// its `sources` entry. A keyed `sources` table is flattened in ascending
/// string order of its keys.
pub fn resolve(
    target: Option<&str>,
    sources: &[String],
    config_path: Option<&Path>,
) -> Result<(String, Vec<String>), Error> {
    let target = match target {
        Some(target) if !target.is_empty() => target.to_string(),
        _ => {
            return Err(Error::Configuration(
                "target must be defined or set in environment".to_string(),
            ));
        }
    };

    let sources = if !sources.is_empty() {
        sources.to_vec()
    } else {
        let config = match config_path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        match config.sources {
            Some(set) if !set.is_empty() => set.into_ordered(),
            _ => {
                return Err(Error::Configuration(
                    "'sources' must be on cmdline or in config".to_string(),
                ));
            }
        }
    };

    tracing::debug!(?sources, %target, "installing sources");
    Ok((target, sources))
}

/// Extract every locator into `target`, strictly in order.
///
/// Each locator is parsed and extracted immediately; the first unrecognized
/// scheme or failed command aborts the run. Sources extracted before the
/// failure remain on disk.
pub fn extract_all(
    runner: &dyn CommandRunner,
    locators: &[String],
    target: &str,
) -> Result<(), Error> {
    for locator in locators {
        let source = Source::parse(locator)?;
        source.extract(runner, target)?;
    }
    Ok(())
}


#[cfg(test)]
mod test_extract_all {
    use super::*;
    use crate::error::ErrorKind;
    use crate::process::fake::RecordingRunner;

    fn locators(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sources_are_extracted_sequentially_in_resolved_order() {
        let runner = RecordingRunner::new();
        extract_all(
            &runner,
            &locators(&["cp:///a", "http://h/r.tar.gz", "cp:///b"]),
            "/t",
        )
        .unwrap();
        assert_eq!(runner.call_count(), 3);
        assert_eq!(runner.call(0)[4], "/a");
        assert!(runner.call(1)[2].contains("wget"));
        assert_eq!(runner.call(2)[4], "/b");
    }

    #[test]
    fn unsupported_scheme_aborts_without_running_anything_further() {
        let runner = RecordingRunner::new();
        let err = extract_all(
            &runner,
            &locators(&["cp:///a", "ftp://host/x", "cp:///b"]),
            "/t",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSource);
        assert!(err.to_string().contains("ftp://host/x"));
        // The first source was already extracted; the last never attempted.
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn failed_extraction_halts_the_pipeline() {
        let runner = RecordingRunner::failing_from(1);
        let err = extract_all(
            &runner,
            &locators(&["cp:///a", "cp:///b", "cp:///c"]),
            "/t",
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Extraction);
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn resolution_failure_means_no_subprocess_is_ever_invoked() {
        let runner = RecordingRunner::new();
        let resolved = resolve(None, &[], None);
        assert!(resolved.is_err());
        assert_eq!(runner.call_count(), 0);
    }
}
