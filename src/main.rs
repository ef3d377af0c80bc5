use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "mojifix",
    version,
    about = "Repairs text mangled by UTF-8/Latin-1 double encoding (mojibake)."
)]
struct Cli {
    /// File to repair.
    source: PathBuf,

    /// Where to write the repaired text (default: overwrite the source).
    dest: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = real_main() {
        error!("{e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let report = mojifix::repair_file(&cli.source, cli.dest.as_deref())?;

    info!(
        "read {} as {}",
        cli.source.display(),
        report.encoding.label()
    );
    info!(
        "known corrupt sequences: {} before, {} after",
        report.corrupt_before, report.corrupt_after
    );
    info!("repaired file written to {}", report.destination.display());
    Ok(())
}
