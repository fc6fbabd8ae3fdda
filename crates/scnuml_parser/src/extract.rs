//! Bracket/comment-aware record extraction
//!
//! Scene files are treated as a flat text blob: newlines and tabs are
//! stripped up front, then the blob is scanned for non-overlapping spans
//! of an optional `//`-delimited comment run immediately followed by a
//! brace-delimited body. Text between spans is ignored.

use crate::record::{KEY_COMMENT, Record};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use scnuml_errors::error::{Error, ParseErrorKind, Result};
use std::fs;
use std::path::Path;

/// Matches an optional run of `//`-delimited comment segments immediately
/// followed by a brace body. The body is everything up to the next `}`.
static RECORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"((?://.*?//\s*)*)\{(.*?)\}").expect("record pattern is valid"));

/// Read a scene file and extract its records
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| Error::from(e).with_file_path(path))?;
    from_str(&source).map_err(|e| e.with_file_path(path))
}

/// Extract records from scene-file text
///
/// Records are returned in encounter order. An empty body yields an empty
/// record; a comment run with no body directly after it yields nothing.
pub fn from_str(source: &str) -> Result<Vec<Record>> {
    // Values and keys never legitimately contain line breaks or tabs
    let flat = source.replace('\n', "").replace('\t', "");

    let mut records = Vec::new();
    for captures in RECORD_PATTERN.captures_iter(&flat) {
        let comment_run = captures.get(1).map_or("", |m| m.as_str());
        let body = captures.get(2).map_or("", |m| m.as_str());
        trace!("matched body {body:?} with comment run {comment_run:?}");

        let mut record = parse_body(body)?;
        let comment = join_comment_fragments(comment_run);
        if !comment.is_empty() {
            record.insert(KEY_COMMENT, comment);
        }
        records.push(record);
    }

    debug!("extracted {} records from {} bytes", records.len(), source.len());
    Ok(records)
}

/// Split a brace body into field assignments and assemble a record
fn parse_body(body: &str) -> Result<Record> {
    let mut record = Record::new();
    for fragment in body.trim().split(';') {
        if fragment.is_empty() {
            continue;
        }
        let (key, value) = fragment.split_once('=').ok_or_else(|| {
            Error::parse(
                format!("field assignment without '=': {fragment:?}"),
                ParseErrorKind::MissingSeparator,
            )
            .with_fragment(fragment)
        })?;
        record.insert(key.trim(), value.trim());
    }
    Ok(record)
}

/// Split a comment run on its `//` markers and join the surviving
/// fragments with newlines
fn join_comment_fragments(run: &str) -> String {
    run.split("//")
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_records_in_encounter_order() {
        let records =
            from_str("{type=object;id=1;}{type=shader;id=2;}{type=object;id=3;parent=1;}")
                .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].record_type(), Some("object"));
        assert_eq!(records[1].record_type(), Some("shader"));
        assert_eq!(records[2].get("parent"), Some("1"));
    }

    #[test]
    fn test_whitespace_and_line_breaks_are_insignificant() {
        let compact = from_str("{type=camera;id=5;}").unwrap();
        let sprawling = from_str("{\n\ttype = camera;\n\tid = 5;\n}\n").unwrap();
        assert_eq!(compact, sprawling);
    }

    #[test]
    fn test_empty_braces_yield_empty_record() {
        let records = from_str("{}").unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_empty());
    }

    #[test]
    fn test_comment_attaches_to_following_body() {
        let records = from_str("// main camera //{type=camera;id=5;}").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].comment(), Some("main camera"));
    }

    #[test]
    fn test_comment_segments_join_with_newlines() {
        let records = from_str("// first // // second //{type=light;id=9;}").unwrap();
        assert_eq!(records[0].comment(), Some("first\nsecond"));
    }

    #[test]
    fn test_comment_without_body_yields_nothing() {
        let records = from_str("// orphan comment //").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_comment_separated_from_body_does_not_attach() {
        let records = from_str("// note // stray {type=object;id=1;}").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].comment(), None);
    }

    #[test]
    fn test_comment_only_attaches_to_immediate_body() {
        let records = from_str("// shared? //{type=object;id=1;}{type=object;id=2;}").unwrap();
        assert_eq!(records[0].comment(), Some("shared?"));
        assert_eq!(records[1].comment(), None);
    }

    #[test]
    fn test_missing_separator_is_fatal() {
        let err = from_str("{type=object;id=1;broken}").unwrap_err();
        assert!(err.is_parse());
        match err {
            Error::Parse { kind, fragment, .. } => {
                assert_eq!(kind, ParseErrorKind::MissingSeparator);
                assert_eq!(fragment.as_deref(), Some("broken"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_keys_last_value_wins() {
        let records = from_str("{type=object;type=shader;id=1;}").unwrap();
        assert_eq!(records[0].record_type(), Some("shader"));
    }

    #[test]
    fn test_text_outside_spans_is_ignored() {
        let records = from_str("header junk {type=object;id=1;} trailing junk").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 2);
    }

    #[test]
    fn test_keys_and_values_are_stripped() {
        let records = from_str("{  type =  object ; id = 1 ;}").unwrap();
        assert_eq!(records[0].record_type(), Some("object"));
        assert_eq!(records[0].id(), Some("1"));
    }

    #[test]
    fn test_from_path_reads_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "// on disk //\n{{type=object;\n\tid=1;}}").unwrap();

        let records = from_path(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].comment(), Some("on disk"));
    }

    #[test]
    fn test_from_path_missing_file_carries_path() {
        let err = from_path("does/not/exist.scn").unwrap_err();
        assert!(err.is_io());
        assert!(err.file_path().is_some());
    }
}
