use std::process::ExitCode;

use extract_sources::ErrorKind;

/// Application-level wrapper around the library error. We keep the concrete
/// error type rather than erasing it because the exit code depends on which
/// class of failure occurred.
#[derive(Debug)]
pub struct AppError(extract_sources::Error);

impl From<extract_sources::Error> for AppError {
    fn from(err: extract_sources::Error) -> Self {
        AppError(err)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.0)
    }
}

impl From<&AppError> for ExitCode {
    fn from(error: &AppError) -> Self {
        ExitCode::from(match error.0.kind() {
            ErrorKind::Extraction => 1,
            ErrorKind::Configuration => 2,
            ErrorKind::UnsupportedSource => 3,
        })
    }
}
