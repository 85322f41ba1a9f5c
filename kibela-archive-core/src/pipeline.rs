//! End-to-end archive run: load → build → materialize.
//!
//! [`run`] is the single entry point taking explicit directories; nothing is
//! read from the process environment. Loading finishes before anything is
//! written, so an input-data error leaves the output directory untouched.
//! File-system errors after that point leave partial output behind.

use crate::archive::Archive;
use crate::config::ArchiveConfig;
use crate::contract::{FrontMatterParser, MarkdownRenderer};
use crate::error::Result;
use crate::frontmatter::YamlFrontMatter;
use crate::loader::load_notes;
use crate::materialize::{materialize, MaterializeReport};
use crate::render::CommonMarkRenderer;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveReport {
    pub notes_written: usize,
    pub index_path: PathBuf,
    pub attachments_copied: usize,
    pub attachment_dirs_mirrored: usize,
    pub symlinks_skipped: usize,
}

impl From<MaterializeReport> for ArchiveReport {
    fn from(report: MaterializeReport) -> Self {
        Self {
            notes_written: report.notes_written,
            index_path: report.index_path,
            attachments_copied: report.attachments.files_copied,
            attachment_dirs_mirrored: report.attachments.dirs_mirrored,
            symlinks_skipped: report.attachments.symlinks_skipped,
        }
    }
}

pub fn run<P, R>(
    src_dir: &Path,
    out_dir: &Path,
    config: &ArchiveConfig,
    parser: &P,
    renderer: &R,
) -> Result<ArchiveReport>
where
    P: FrontMatterParser + ?Sized,
    R: MarkdownRenderer + ?Sized,
{
    info!(src = %src_dir.display(), out = %out_dir.display(), "[ARCHIVE] Starting archive run");

    let notes = load_notes(&src_dir.join(&config.notes_dir), parser, renderer)?;
    let archive = Archive::new(notes);
    info!(notes = archive.len(), "[ARCHIVE] Notes loaded");

    let pages = archive.build_output_pages(config);

    let result = materialize(
        out_dir,
        &pages,
        &src_dir.join(&config.attachments_dir),
        &out_dir.join(&config.attachments_dir),
    );
    match result {
        Ok(report) => {
            let report = ArchiveReport::from(report);
            info!(?report, "[ARCHIVE] Archive run complete");
            Ok(report)
        }
        Err(e) => {
            error!(error = %e, "[ARCHIVE][ERROR] Materialization failed; output may be partial");
            Err(e)
        }
    }
}

/// [`run`] with the YAML front-matter parser and CommonMark renderer.
pub fn run_default(src_dir: &Path, out_dir: &Path, config: &ArchiveConfig) -> Result<ArchiveReport> {
    run(
        src_dir,
        out_dir,
        config,
        &YamlFrontMatter,
        &CommonMarkRenderer::default(),
    )
}
