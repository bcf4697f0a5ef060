use std::process::ExitCode;

use extract_sources::{ShellRunner, extract_all, resolve};
use tracing_subscriber::EnvFilter;

mod args;
mod error;

use error::AppError;

fn run() -> Result<(), AppError> {
    let args = args::parse();

    let (target, sources) = resolve(
        args.target.as_deref(),
        &args.sources,
        args.config.as_deref(),
    )?;
    extract_all(&ShellRunner, &sources, &target)?;

    println!("extracted {} source(s) into {target}", sources.len());
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let mut cause = std::error::Error::source(&err);
            while let Some(err) = cause {
                eprintln!("  caused by: {err}");
                cause = err.source();
            }
            ExitCode::from(&err)
        }
    }
}
