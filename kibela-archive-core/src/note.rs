//! Note records and the metadata validation that guards them.
//!
//! # Invariants
//! - A [`Note`] only exists with validated [`NoteMetadata`]: every required
//!   field present, and a [`NotePath`] with usable user and note-id segments.
//! - Notes are immutable once built; the archive only reads them.

use crate::contract::RawMetadata;
use crate::error::InputError;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// The note path from front-matter, e.g. `/@alice/42`.
///
/// Split on `/`, segment 1 is the user and segment 2 is the note id. The
/// leading empty segment produced by the leading `/` is segment 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePath {
    raw: String,
    user: String,
    note_id: String,
}

impl NotePath {
    /// Validates `raw`; `file` is only used to build the error.
    pub fn parse(raw: &str, file: &Path) -> Result<Self, InputError> {
        let segments: Vec<&str> = raw.split('/').collect();
        if segments.len() < 3 {
            return Err(InputError::PathTooShort {
                file: file.to_path_buf(),
                path: raw.to_string(),
            });
        }
        for (segment, name) in [(segments[1], "user"), (segments[2], "note id")] {
            if matches!(segment, "" | "." | "..") {
                return Err(InputError::BadPathSegment {
                    file: file.to_path_buf(),
                    path: raw.to_string(),
                    segment: name,
                });
            }
        }
        Ok(Self {
            raw: raw.to_string(),
            user: segments[1].to_string(),
            note_id: segments[2].to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn note_id(&self) -> &str {
        &self.note_id
    }

    /// `{user}/{noteId}.html`, relative to the output root.
    pub fn output_relative_path(&self) -> PathBuf {
        Path::new(&self.user).join(format!("{}.html", self.note_id))
    }

    /// Link target used by the index page: the raw path minus its first
    /// character, plus `.html`.
    pub fn index_link(&self) -> String {
        let mut chars = self.raw.chars();
        chars.next();
        format!("{}.html", chars.as_str())
    }
}

/// Required front-matter fields, rendered to strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteMetadata {
    pub path: NotePath,
    pub author: String,
    pub published_at: String,
    pub groups: String,
    pub id: String,
}

impl NoteMetadata {
    /// Validates the raw front-matter of `file`.
    pub fn from_yaml(raw: &RawMetadata, file: &Path) -> Result<Self, InputError> {
        let field = |name: &'static str| -> Result<String, InputError> {
            raw.get(name)
                .and_then(scalar_to_string)
                .ok_or_else(|| InputError::MissingField {
                    file: file.to_path_buf(),
                    field: name,
                })
        };

        let path = NotePath::parse(&field("path")?, file)?;
        let author = field("author")?;
        let published_at = field("published_at")?;
        let groups = raw
            .get("groups")
            .and_then(groups_to_string)
            .ok_or_else(|| InputError::MissingField {
                file: file.to_path_buf(),
                field: "groups",
            })?;
        let id = field("id")?;

        Ok(Self {
            path,
            author,
            published_at,
            groups,
            id,
        })
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// A scalar, or a list joined with `,`. Null list items render empty.
fn groups_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => Some(String::new()),
                other => groups_to_string(other),
            })
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        other => scalar_to_string(other),
    }
}

/// One archived document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    metadata: NoteMetadata,
    body_html: String,
    title: Option<String>,
    source: PathBuf,
}

impl Note {
    pub fn new(
        metadata: NoteMetadata,
        body_html: String,
        title: Option<String>,
        source: PathBuf,
    ) -> Self {
        Self {
            metadata,
            body_html,
            title,
            source,
        }
    }

    pub fn metadata(&self) -> &NoteMetadata {
        &self.metadata
    }

    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Index label: the captured title, else the note id segment.
    pub fn display_title(&self) -> &str {
        self.title().unwrap_or_else(|| self.metadata.path.note_id())
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output_relative_path(&self) -> PathBuf {
        self.metadata.path.output_relative_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> PathBuf {
        PathBuf::from("notes/x.md")
    }

    fn mapping(yaml: &str) -> RawMetadata {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn path_segments_follow_split_positions() {
        let p = NotePath::parse("/@alice/42", &file()).unwrap();
        assert_eq!(p.user(), "@alice");
        assert_eq!(p.note_id(), "42");
        assert_eq!(p.output_relative_path(), Path::new("@alice").join("42.html"));
        assert_eq!(p.index_link(), "@alice/42.html");
    }

    #[test]
    fn extra_segments_are_ignored_for_output_path() {
        let p = NotePath::parse("/teamX/u1/n1", &file()).unwrap();
        assert_eq!(p.user(), "teamX");
        assert_eq!(p.note_id(), "u1");
        assert_eq!(p.output_relative_path(), PathBuf::from("teamX").join("u1.html"));
        assert_eq!(p.index_link(), "teamX/u1/n1.html");
    }

    #[test]
    fn two_segment_path_is_rejected() {
        let err = NotePath::parse("/@alice", &file()).unwrap_err();
        assert!(matches!(err, InputError::PathTooShort { .. }));
    }

    #[test]
    fn dot_segments_are_rejected() {
        for raw in ["/../42", "/@alice/..", "//42", "/@alice/"] {
            let err = NotePath::parse(raw, &file()).unwrap_err();
            assert!(
                matches!(err, InputError::BadPathSegment { .. }),
                "{raw} gave {err:?}"
            );
        }
    }

    #[test]
    fn metadata_accepts_scalars_and_group_lists() {
        let raw = mapping(
            "path: /@bob/7\nauthor: bob\npublished_at: 2023-01-01T10:00:00+09:00\ngroups: [home, dev]\nid: 7\n",
        );
        let meta = NoteMetadata::from_yaml(&raw, &file()).unwrap();
        assert_eq!(meta.author, "bob");
        assert_eq!(meta.published_at, "2023-01-01T10:00:00+09:00");
        assert_eq!(meta.groups, "home,dev");
        assert_eq!(meta.id, "7");
    }

    #[test]
    fn missing_field_is_named() {
        let raw = mapping("path: /@bob/7\nauthor: bob\ngroups: home\nid: x\n");
        let err = NoteMetadata::from_yaml(&raw, &file()).unwrap_err();
        match err {
            InputError::MissingField { field, .. } => assert_eq!(field, "published_at"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn null_field_counts_as_missing() {
        let raw = mapping("path: /@bob/7\nauthor: ~\npublished_at: a\ngroups: g\nid: x\n");
        let err = NoteMetadata::from_yaml(&raw, &file()).unwrap_err();
        assert!(matches!(err, InputError::MissingField { field: "author", .. }));
    }

    #[test]
    fn display_title_falls_back_to_note_id() {
        let raw = mapping("path: /@bob/7\nauthor: bob\npublished_at: a\ngroups: g\nid: x\n");
        let meta = NoteMetadata::from_yaml(&raw, &file()).unwrap();
        let note = Note::new(meta, "<p>hi</p>\n".into(), None, file());
        assert_eq!(note.display_title(), "7");
    }
}
