//! Loading the external configuration document.
//!
//! Only the `sources` entry is interpreted; the rest of the document belongs
//! to the wider installer and is ignored here.

use std::path::Path;

use crate::error::Error;
use crate::source::SourceSet;

/// The subset of the installer configuration this crate reads.
#[derive(Debug, Default, serde::Deserialize)]
pub struct Config {
    /// Locators to install when none were given on the command line.
    #[serde(default)]
    pub sources: Option<SourceSet>,
}

impl Config {
    /// Load and parse the configuration file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let document = std::fs::read_to_string(path).map_err(|err| Error::ConfigRead {
            path: path.to_path_buf(),
            err,
        })?;
        toml::from_str(&document).map_err(|err| Error::ConfigParse {
            path: path.to_path_buf(),
            err: Box::new(err),
        })
    }
}
