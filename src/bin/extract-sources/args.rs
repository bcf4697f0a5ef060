use std::path::PathBuf;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

const APP_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

#[derive(Debug, Parser)]
#[command(name = "extract-sources")]
#[command(about = "Materialize installation sources into a target directory")]
#[command(long_about = None)]
#[command(version)]
#[command(styles = APP_STYLING)]
#[command(term_width = 80)]
struct Args {
    /// Target directory to extract to (root) [default: $TARGET_MOUNT_POINT]
    #[arg(long, short = 't', value_name = "DIR")]
    target: Option<String>,

    /// Installer configuration file, consulted for its 'sources' entry when
    /// no sources are given on the command line [default: $CONFIG]
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// The sources to install [default: read from config]
    #[arg(value_name = "SOURCES")]
    sources: Vec<String>,
}

/// Command-line arguments with the environment defaults already applied.
#[derive(Debug)]
pub struct ValidatedArgs {
    pub target: Option<String>,
    pub config: Option<PathBuf>,
    pub sources: Vec<String>,
}

impl From<Args> for ValidatedArgs {
    fn from(args: Args) -> Self {
        let target = args
            .target
            .or_else(|| std::env::var("TARGET_MOUNT_POINT").ok());
        let config = args
            .config
            .or_else(|| std::env::var_os("CONFIG").map(PathBuf::from));
        ValidatedArgs {
            target,
            config,
            sources: args.sources,
        }
    }
}

pub fn parse() -> ValidatedArgs {
    Args::parse().into()
}
