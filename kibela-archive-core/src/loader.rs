//! Note Loader: source files → [`Note`]s.
//!
//! Lists the notes directory (non-recursive), reads each entry as UTF-8,
//! splits front-matter, validates metadata and renders the body. Notes come
//! back in directory enumeration order; no sorting happens here.
//!
//! Any failure aborts the whole load. There is no per-note recovery.

use crate::contract::{FrontMatterParser, MarkdownRenderer};
use crate::error::{ArchiveError, FsOp, InputError, Result};
use crate::note::{Note, NoteMetadata};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

/// Loads every entry directly under `notes_dir`.
pub fn load_notes<P, R>(notes_dir: &Path, parser: &P, renderer: &R) -> Result<Vec<Note>>
where
    P: FrontMatterParser + ?Sized,
    R: MarkdownRenderer + ?Sized,
{
    info!(notes_dir = %notes_dir.display(), "Loading notes");

    let entries = fs::read_dir(notes_dir).map_err(|e| {
        error!(error = ?e, notes_dir = %notes_dir.display(), "Failed to list notes directory");
        ArchiveError::fs(FsOp::ListDir, notes_dir, e)
    })?;

    let mut notes = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            error!(error = ?e, notes_dir = %notes_dir.display(), "Failed to read notes directory entry");
            ArchiveError::fs(FsOp::ListDir, notes_dir, e)
        })?;
        notes.push(load_note(&entry.path(), parser, renderer)?);
    }

    info!(count = notes.len(), "Loaded notes");
    Ok(notes)
}

/// Reads and converts a single note file.
pub fn load_note<P, R>(file: &Path, parser: &P, renderer: &R) -> Result<Note>
where
    P: FrontMatterParser + ?Sized,
    R: MarkdownRenderer + ?Sized,
{
    let bytes = fs::read(file).map_err(|e| {
        error!(error = ?e, file = %file.display(), "Failed to read note file");
        ArchiveError::fs(FsOp::Read, file, e)
    })?;
    let text = String::from_utf8(bytes).map_err(|_| {
        error!(file = %file.display(), "Note file is not valid UTF-8");
        InputError::NotUtf8 {
            file: file.to_path_buf(),
        }
    })?;

    parse_note(file, &text, parser, renderer).map_err(|e| {
        error!(error = %e, file = %file.display(), "Rejected note");
        ArchiveError::from(e)
    })
}

/// Converts already-read source text. `file` names the note in errors.
pub fn parse_note<P, R>(
    file: &Path,
    text: &str,
    parser: &P,
    renderer: &R,
) -> std::result::Result<Note, InputError>
where
    P: FrontMatterParser + ?Sized,
    R: MarkdownRenderer + ?Sized,
{
    let doc = parser.parse(text).map_err(|e| InputError::FrontMatter {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;
    let metadata = NoteMetadata::from_yaml(&doc.metadata, file)?;
    let rendered = renderer.render(&doc.body);

    debug!(
        id = %metadata.id,
        path = %metadata.path.as_str(),
        has_title = rendered.title.is_some(),
        "Parsed note"
    );
    Ok(Note::new(
        metadata,
        rendered.html,
        rendered.title,
        file.to_path_buf(),
    ))
}
