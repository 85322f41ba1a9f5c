//! Error taxonomy for the archive pipeline.
//!
//! Two families of failure exist once the CLI has parsed its arguments:
//! - [`InputError`]: a note file is malformed (bad UTF-8, bad front-matter,
//!   missing field, unusable `path`). Raised only by the loader.
//! - [`ArchiveError::Fs`]: a file-system operation failed. Raised by the
//!   loader (listing/reading) and the materializer (creating/writing/copying).
//!
//! Every failure is fatal to the run; nothing here is retried.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which file-system operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOp {
    ListDir,
    Read,
    CreateDir,
    Write,
    Copy,
    Walk,
}

impl std::fmt::Display for FsOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FsOp::ListDir => "list directory",
            FsOp::Read => "read",
            FsOp::CreateDir => "create directory",
            FsOp::Write => "write",
            FsOp::Copy => "copy",
            FsOp::Walk => "walk",
        };
        f.write_str(s)
    }
}

/// A note file that cannot become a [`crate::note::Note`].
#[derive(Error, Debug)]
pub enum InputError {
    #[error("note {file:?} is not valid UTF-8")]
    NotUtf8 { file: PathBuf },

    #[error("note {file:?} has unparsable front-matter: {message}")]
    FrontMatter { file: PathBuf, message: String },

    #[error("note {file:?} is missing required metadata field `{field}`")]
    MissingField { file: PathBuf, field: &'static str },

    #[error("note {file:?} has path {path:?} with fewer than 3 `/`-separated segments")]
    PathTooShort { file: PathBuf, path: String },

    #[error("note {file:?} has path {path:?} with an unusable {segment} segment")]
    BadPathSegment {
        file: PathBuf,
        path: String,
        segment: &'static str,
    },
}

impl InputError {
    pub fn file(&self) -> &Path {
        match self {
            InputError::NotUtf8 { file }
            | InputError::FrontMatter { file, .. }
            | InputError::MissingField { file, .. }
            | InputError::PathTooShort { file, .. }
            | InputError::BadPathSegment { file, .. } => file,
        }
    }
}

/// Any failure of an archive run.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("input data error: {0}")]
    Input(#[from] InputError),

    #[error("file-system error: failed to {op} {path:?}: {source}")]
    Fs {
        op: FsOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ArchiveError {
    pub fn fs(op: FsOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::Fs {
            op,
            path: path.into(),
            source,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, ArchiveError::Input(_))
    }

    pub fn is_fs(&self) -> bool {
        matches!(self, ArchiveError::Fs { .. })
    }
}

pub type Result<T, E = ArchiveError> = std::result::Result<T, E>;
