//! YAML front-matter splitting.
//!
//! A note source looks like:
//!
//! ```text
//! ---
//! path: /@alice/42
//! author: alice
//! ---
//! # Body starts here
//! ```
//!
//! A source that does not open with a `---` line has no front-matter: the
//! metadata is empty and the whole text is the body. The loader then rejects
//! it for missing fields.

use crate::contract::{FrontMatterError, FrontMatterParser, ParsedDocument, RawMetadata};
use serde_yaml::Value;
use tracing::debug;

const FENCE: &str = "---";

/// [`FrontMatterParser`] for `---` fenced YAML blocks.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlFrontMatter;

impl FrontMatterParser for YamlFrontMatter {
    fn parse(&self, text: &str) -> Result<ParsedDocument, FrontMatterError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let Some((yaml, body)) = split_fenced(text)? else {
            debug!("No front-matter fence found; treating whole source as body");
            return Ok(ParsedDocument {
                metadata: RawMetadata::new(),
                body: text.to_string(),
            });
        };

        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| FrontMatterError(format!("invalid YAML: {e}")))?;
        let metadata = match value {
            Value::Mapping(map) => map,
            Value::Null => RawMetadata::new(),
            other => {
                return Err(FrontMatterError(format!(
                    "front-matter must be a mapping, found {}",
                    kind_of(&other)
                )))
            }
        };

        Ok(ParsedDocument {
            metadata,
            body: body.to_string(),
        })
    }
}

/// Returns `(yaml, body)` when `text` opens with a fence line.
fn split_fenced(text: &str) -> Result<Option<(&str, &str)>, FrontMatterError> {
    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok(None);
    };
    if first.trim_end() != FENCE {
        return Ok(None);
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Ok(Some((&text[yaml_start..offset], &text[offset + line.len()..])));
        }
        offset += line.len();
    }
    Err(FrontMatterError(
        "front-matter opened with `---` but never closed".to_string(),
    ))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_metadata_and_body() {
        let doc = YamlFrontMatter
            .parse("---\npath: /@alice/42\nauthor: alice\n---\n# Hi\n\nbody\n")
            .unwrap();
        assert_eq!(doc.metadata.get("author"), Some(&Value::from("alice")));
        assert_eq!(doc.body, "# Hi\n\nbody\n");
    }

    #[test]
    fn handles_crlf_fences() {
        let doc = YamlFrontMatter
            .parse("---\r\nid: 7\r\n---\r\ntext")
            .unwrap();
        assert_eq!(doc.metadata.get("id"), Some(&Value::from(7)));
        assert_eq!(doc.body, "text");
    }

    #[test]
    fn no_fence_means_empty_metadata() {
        let doc = YamlFrontMatter.parse("# Just markdown\n").unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "# Just markdown\n");
    }

    #[test]
    fn empty_block_is_empty_mapping() {
        let doc = YamlFrontMatter.parse("---\n---\nbody").unwrap();
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn unterminated_fence_is_an_error() {
        let err = YamlFrontMatter.parse("---\nid: 1\n# body\n").unwrap_err();
        assert!(err.0.contains("never closed"), "got {err}");
    }

    #[test]
    fn non_mapping_yaml_is_an_error() {
        let err = YamlFrontMatter.parse("---\n- a\n- b\n---\n").unwrap_err();
        assert!(err.0.contains("sequence"), "got {err}");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = YamlFrontMatter.parse("---\nkey: [:::\n---\n").unwrap_err();
        assert!(err.0.contains("invalid YAML"), "got {err}");
    }
}
