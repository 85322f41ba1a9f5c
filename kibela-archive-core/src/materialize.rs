//! # Tree Materializer
//!
//! Writes [`OutputPages`] to disk and mirrors the attachments tree:
//! 1. ensure the output root exists
//! 2. write each note page to `{root}/{user}/{noteId}.html`
//! 3. write `{root}/index.html`
//! 4. mirror the attachments source into `{root}/{attachments}`
//!
//! Existing directories are reused and existing files are overwritten.
//! The first failure aborts; whatever was written before it stays on disk.
//!
//! Symbolic links inside the attachments tree are never followed. They are
//! skipped with a warning, so a link cycle cannot make the walk loop.

use crate::archive::{NotePage, OutputPages, INDEX_FILE_NAME};
use crate::error::{ArchiveError, FsOp, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Counts from one attachments mirror.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MirrorReport {
    pub files_copied: usize,
    /// Directories created or reused, the mirror root included.
    pub dirs_mirrored: usize,
    pub symlinks_skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub notes_written: usize,
    pub index_path: PathBuf,
    pub attachments: MirrorReport,
}

/// Creates `dir` and its parents; an existing directory is fine.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        error!(error = ?e, dir = %dir.display(), "Failed to create directory");
        ArchiveError::fs(FsOp::CreateDir, dir, e)
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        error!(error = ?e, path = %path.display(), "Failed to write file");
        ArchiveError::fs(FsOp::Write, path, e)
    })
}

/// Writes every note page under `output_root`. Returns the number written.
pub fn write_note_pages(output_root: &Path, pages: &[NotePage]) -> Result<usize> {
    for page in pages {
        let save_path = output_root.join(&page.relative_path);
        if let Some(user_dir) = save_path.parent() {
            ensure_dir(user_dir)?;
        }
        info!("Saving {} to {}", page.id, save_path.display());
        write_file(&save_path, &page.html)?;
    }
    Ok(pages.len())
}

/// Writes `{output_root}/index.html` and returns its path.
pub fn write_index(output_root: &Path, html: &str) -> Result<PathBuf> {
    let index_path = output_root.join(INDEX_FILE_NAME);
    write_file(&index_path, html)?;
    info!(path = %index_path.display(), "Wrote index page");
    Ok(index_path)
}

/// Recursively mirrors `src` into `dst`: directories are created, files are
/// copied byte-for-byte, symlinks are skipped.
pub fn mirror_tree(src: &Path, dst: &Path) -> Result<MirrorReport> {
    info!(src = %src.display(), dst = %dst.display(), "Mirroring directory tree");

    let is_dir = fs::metadata(src)
        .map_err(|e| {
            error!(error = ?e, src = %src.display(), "Cannot stat mirror source");
            ArchiveError::fs(FsOp::Walk, src, e)
        })?
        .is_dir();
    if !is_dir {
        error!(src = %src.display(), "Mirror source is not a directory");
        return Err(ArchiveError::fs(
            FsOp::Walk,
            src,
            io::Error::new(io::ErrorKind::InvalidInput, "source is not a directory"),
        ));
    }

    let mut report = MirrorReport::default();
    for entry in WalkDir::new(src).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            error!(error = %e, path = %path.display(), "Failed to walk source tree");
            ArchiveError::fs(FsOp::Walk, path, e.into())
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            warn!(path = %entry.path().display(), "Skipping symbolic link");
            report.symlinks_skipped += 1;
        } else if file_type.is_dir() {
            ensure_dir(&target)?;
            report.dirs_mirrored += 1;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| {
                error!(error = ?e, from = %entry.path().display(), to = %target.display(), "Failed to copy file");
                ArchiveError::fs(FsOp::Copy, entry.path(), e)
            })?;
            debug!(path = %relative.display(), "Copied file");
            report.files_copied += 1;
        }
    }

    info!(
        files = report.files_copied,
        dirs = report.dirs_mirrored,
        symlinks_skipped = report.symlinks_skipped,
        "Mirrored directory tree"
    );
    Ok(report)
}

/// Runs all four materialization steps in order.
pub fn materialize(
    output_root: &Path,
    pages: &OutputPages,
    attachments_src: &Path,
    attachments_dst: &Path,
) -> Result<MaterializeReport> {
    ensure_dir(output_root)?;
    let notes_written = write_note_pages(output_root, &pages.note_pages)?;
    let index_path = write_index(output_root, &pages.index_page)?;
    let attachments = mirror_tree(attachments_src, attachments_dst)?;

    Ok(MaterializeReport {
        notes_written,
        index_path,
        attachments,
    })
}
