///
/// This module implements the CLI interface for kibela-archive: argument parsing,
/// config resolution and the `run` entrypoint used by `main()` and integration tests.
///
/// All pipeline logic (loading, page building, writing) lives in [`kibela-archive-core`].
/// This module is strictly CLI glue.
///
/// ## How To Use
/// - Command line: `kibela-archive <SRC_DIR> <OUT_DIR> [--config <FILE>]`.
/// - Programmatic/integration use: call [`run`] with a constructed [`Cli`].
///
/// Missing positionals are a usage error: clap prints the usage text and the
/// process exits with status 2 before [`run`] is reached.
///
/// [`kibela-archive-core`]: ../../kibela-archive-core/
/// [`Cli`]: struct.Cli.html
/// [`run`]: fn.run.html
use crate::load_config::load_config;
use anyhow::{Context, Result};
use clap::Parser;
use kibela_archive_core::{ArchiveConfig, ArchiveReport};
use std::path::{Path, PathBuf};

/// CLI for kibela-archive: publish an exported notes directory as static HTML.
#[derive(Parser, Debug)]
#[clap(
    name = "kibela-archive",
    version,
    about = "Convert an exported Kibela notes directory into a static HTML archive"
)]
pub struct Cli {
    /// Export directory containing `notes/` and `attachments/`
    pub src_dir: PathBuf,
    /// Directory the archive is written to (created if absent)
    pub out_dir: PathBuf,
    /// Optional YAML file overriding site settings and source layout
    #[clap(long)]
    pub config: Option<PathBuf>,
}

/// Config file when given, defaults otherwise.
pub fn resolve_config(path: Option<&Path>) -> Result<ArchiveConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            tracing::info!("No config file given, using defaults");
            Ok(ArchiveConfig::default())
        }
    }
}

/// CLI logic entrypoint for integration tests and main()
pub fn run(cli: Cli) -> Result<ArchiveReport> {
    // Emit a top-level 'trace_initialised' event at the very start
    tracing::info!("trace_initialised");

    let config = resolve_config(cli.config.as_deref())?;
    config.trace_loaded();

    tracing::info!(
        command = "archive",
        src = %cli.src_dir.display(),
        out = %cli.out_dir.display(),
        "Starting archive"
    );
    let report = kibela_archive_core::run_default(&cli.src_dir, &cli.out_dir, &config)
        .with_context(|| {
            format!(
                "Archiving {} into {} failed",
                cli.src_dir.display(),
                cli.out_dir.display()
            )
        })?;

    println!(
        "Archive complete: {} notes, {} attachments written to {}",
        report.notes_written,
        report.attachments_copied,
        cli.out_dir.display()
    );
    if report.symlinks_skipped > 0 {
        println!(
            "Skipped {} symbolic link(s) in attachments",
            report.symlinks_skipped
        );
    }
    Ok(report)
}
