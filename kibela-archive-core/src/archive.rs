//! # Archive Builder
//!
//! Owns the loaded [`Note`]s and turns them into output pages:
//! - one page per note at `{user}/{noteId}.html`
//! - an index page listing every note by `published_at`, oldest first
//!
//! # Invariants
//! - `notes` keeps load order and is never re-sorted in place; the index
//!   works on a sorted copy of references.
//! - The sort is a stable, plain string comparison of `published_at`, so
//!   equal timestamps keep load order and ISO 8601 strings sort by time.
//! - Metadata is inserted into markup verbatim.
//! - Page composition is pure: same notes and config, same bytes.

use crate::config::ArchiveConfig;
use crate::note::Note;
use std::path::PathBuf;
use tracing::{debug, info};

/// First two lines of every page.
pub const HTML_PREAMBLE: &str = "<!DOCTYPE html>\n<meta charset=\"utf-8\">";

/// File name of the index page under the output root.
pub const INDEX_FILE_NAME: &str = "index.html";

/// A rendered note page and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePage {
    /// `{user}/{noteId}.html`, relative to the output root.
    pub relative_path: PathBuf,
    /// Front-matter `id`, for progress logs only.
    pub id: String,
    pub html: String,
}

/// Everything the materializer writes, apart from attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPages {
    pub note_pages: Vec<NotePage>,
    pub index_page: String,
}

#[derive(Debug, Clone, Default)]
pub struct Archive {
    notes: Vec<Note>,
}

impl Archive {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes ordered by `published_at` ascending, ties in load order.
    pub fn notes_by_date(&self) -> Vec<&Note> {
        let mut sorted: Vec<&Note> = self.notes.iter().collect();
        sorted.sort_by(|a, b| a.metadata().published_at.cmp(&b.metadata().published_at));
        sorted
    }

    pub fn build_output_pages(&self, config: &ArchiveConfig) -> OutputPages {
        let note_pages = self
            .notes
            .iter()
            .map(|note| NotePage {
                relative_path: note.output_relative_path(),
                id: note.metadata().id.clone(),
                html: note_page(note, config),
            })
            .collect::<Vec<_>>();
        let index_page = self.index_page(config);

        info!(
            note_pages = note_pages.len(),
            index_bytes = index_page.len(),
            "Built output pages"
        );
        OutputPages {
            note_pages,
            index_page,
        }
    }

    pub fn index_page(&self, config: &ArchiveConfig) -> String {
        let items: String = self
            .notes_by_date()
            .into_iter()
            .map(|note| {
                let meta = note.metadata();
                debug!(id = %meta.id, published_at = %meta.published_at, "Index entry");
                format!(
                    "<li><a href=\"{}\">{} - {}</a></li>",
                    meta.path.index_link(),
                    note.display_title(),
                    meta.author
                )
            })
            .collect();

        format!(
            "{HTML_PREAMBLE}\n<h1> <a href=\"{}\">{}</a> Archive </h1>\n<ul>{items}</ul>\n",
            config.service_url, config.service_name
        )
    }
}

/// Breadcrumb block at the top of a note page.
pub fn note_header(note: &Note, config: &ArchiveConfig) -> String {
    let meta = note.metadata();
    format!(
        "<p>\n<a href=\"../{INDEX_FILE_NAME}\">{}</a><br>\n{} - {} - {}\n</p>",
        config.site_title, meta.author, meta.published_at, meta.groups
    )
}

pub fn note_page(note: &Note, config: &ArchiveConfig) -> String {
    format!(
        "{HTML_PREAMBLE}\n{}\n{}",
        note_header(note, config),
        note.body_html()
    )
}
