//! Materialize installation sources into a target directory.
//!
//! Given a list of source locators and a target path, this crate installs the
//! union of those sources into the target filesystem tree. It is invoked once
//! per installation pass by a larger installer; sources are processed one at
//! a time, in a deterministic order, and any failure aborts the run.
//!
//! # Locators
//!
//! A locator is a scheme-prefixed string. Two forms are recognized:
//!
//! - `cp://<path>` — copy the contents of a local directory into the target,
//!   preserving all file attributes and never crossing a mount point.
//! - `http://<url>` — stream-fetch a compressed tar archive and unpack it
//!   directly into the target, preserving ownership and permissions, without
//!   ever writing the archive itself to disk.
//!
//! Any other prefix fails the run with [`Error::UnsupportedSource`].
//!
//! # Usage
//!
//! ```no_run
//! use extract_sources::{ShellRunner, extract_all, resolve};
//!
//! # fn main() -> Result<(), extract_sources::Error> {
//! let cmdline = vec!["cp:///srcA".to_string()];
//! let (target, sources) = resolve(Some("/mnt/target"), &cmdline, None)?;
//! extract_all(&ShellRunner, &sources, &target)?;
//! # Ok(())
//! # }
//! ```
//!
//! When no locators are given explicitly, `resolve` falls back to the
//! `sources` entry of a configuration file:
//!
//! ```toml
//! # either an ordered list...
//! sources = ["cp:///base", "http://images.example.com/root.tar.gz"]
//!
//! # ...or a keyed table, installed in ascending key order
//! [sources]
//! "10" = "cp:///base"
//! "20" = "cp:///overlay"
//! ```
//!
//! All filesystem and network I/O happens in external tools (`cp`, `wget`,
//! `tar`) spawned through the [`CommandRunner`] capability, so the extraction
//! strategies themselves stay small and testable.

pub mod config;
mod copy;
mod error;
pub mod process;
pub mod source;
mod tar;

mod extract;

#[doc(inline)]
pub use crate::config::Config;
#[doc(inline)]
pub use crate::error::{Error, ErrorKind};
#[doc(inline)]
pub use crate::extract::{extract_all, resolve};
#[doc(inline)]
pub use crate::process::{CommandRunner, Output, ShellRunner};
#[doc(inline)]
pub use crate::source::{Source, SourceSet};
