/// The main error enum for this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The invocation could not be resolved into a target and a source list.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The configuration file could not be read.
    #[error("failed to read config file '{}'", path.display())]
    ConfigRead {
        path: std::path::PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("failed to parse config file '{}'", path.display())]
    ConfigParse {
        path: std::path::PathBuf,
        #[source]
        err: Box<toml::de::Error>,
    },

    /// A locator carried a scheme no strategy handles.
    #[error("do not know how to extract '{0}'")]
    UnsupportedSource(String),

    /// An extraction command ran but reported failure.
    #[error("command '{command}' exited with status {status}\n{stderr}")]
    Subprocess {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// An extraction command could not be started at all.
    #[error("failed to spawn command '{command}'")]
    Spawn {
        command: String,
        #[source]
        err: std::io::Error,
    },
}

/// Categories of library errors that can be matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Target undefined, or no sources resolvable from cmdline or config.
    Configuration,
    /// Locator prefix not recognized.
    UnsupportedSource,
    /// The underlying fetch/unpack/copy subprocess failed.
    Extraction,
}

impl Error {
    /// The class of this error. Config loading failures count as
    /// configuration errors: the user must correct the input either way.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Configuration(_) | Error::ConfigRead { .. } | Error::ConfigParse { .. } => {
                ErrorKind::Configuration
            }
            Error::UnsupportedSource(_) => ErrorKind::UnsupportedSource,
            Error::Subprocess { .. } | Error::Spawn { .. } => ErrorKind::Extraction,
        }
    }
}
