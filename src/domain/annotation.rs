//! Annotation lines: whitespace-separated sequences of canonical spans
//!
//! A chunker's output for one sentence is written as e.g.
//! `NP(0, 1) VP(2, 2) PP(3, 3) NP(4, 5)`. Spans may contain a space after
//! the comma and labels may contain spaces, so the line is split after each
//! `(left, right)` pair rather than on whitespace. Everything between two
//! pairs is the label of the second span.

use super::span::ChunkSpan;
use crate::error::{ChunkError, Result};
use regex::Regex;
use std::sync::OnceLock;

fn bounds_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\(\s*-?\d+\s*,\s*-?\d+\s*\)").unwrap())
}

/// Parse every span on an annotation line.
///
/// A pair with no label before it, or text after the last pair, makes the
/// whole line fail.
///
/// # Examples
///
/// ```
/// use chunktag::domain::annotation::parse_line;
///
/// let spans = parse_line("NP(0, 1) VP(2, 2)").unwrap();
/// assert_eq!(spans.len(), 2);
/// assert_eq!(spans[1].label(), "VP");
/// ```
pub fn parse_line(line: &str) -> Result<Vec<ChunkSpan>> {
    let mut spans: Vec<ChunkSpan> = Vec::new();
    let mut cursor = 0;

    for bounds in bounds_regex().find_iter(line) {
        let fragment = line[cursor..bounds.end()].trim();
        spans.push(fragment.parse::<ChunkSpan>()?);
        cursor = bounds.end();
    }
    check_gap(&line[cursor..])?;

    Ok(spans)
}

fn check_gap(gap: &str) -> Result<()> {
    if gap.trim().is_empty() {
        Ok(())
    } else {
        Err(ChunkError::MalformedSpan(gap.trim().to_string()))
    }
}

/// Render spans in canonical form, separated by single spaces
pub fn render_line(spans: &[ChunkSpan]) -> String {
    spans
        .iter()
        .map(ChunkSpan::format)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ChunkTag;

    #[test]
    fn test_parse_line() {
        let spans = parse_line("NP(0, 1) VP(2, 2) PP(3, 3) NP(4, 5)").unwrap();
        let rendered: Vec<String> = spans.iter().map(|s| s.format()).collect();
        assert_eq!(rendered, vec!["NP(0, 1)", "VP(2, 2)", "PP(3, 3)", "NP(4, 5)"]);
        assert_eq!(spans[2].tag(), Some(ChunkTag::Pp));
    }

    #[test]
    fn test_parse_line_tolerates_spacing() {
        let spans = parse_line("  NP(0,1)\tVP(2,  2)\n").unwrap();
        assert_eq!(render_line(&spans), "NP(0, 1) VP(2, 2)");
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(parse_line("").unwrap().is_empty());
        assert!(parse_line("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_line_keeps_unknown_labels() {
        let spans = parse_line("UNDEFINED(0, 0) X-NP(1, 2)").unwrap();
        assert!(!spans[0].has_label());
        assert_eq!(spans[1].label(), "X-NP");
        assert_eq!(spans[1].tag(), None);
    }

    #[test]
    fn test_parse_line_labels_with_spaces_and_parentheses() {
        let spans = parse_line("B NP(0, 1) VP(x)(2, 2) PP(3, 3)").unwrap();
        let labels: Vec<&str> = spans.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["B NP", "VP(x)", "PP"]);
    }

    #[test]
    fn test_render_then_parse_line() {
        let spans = vec![
            ChunkSpan::new(0, 1, "B NP"),
            ChunkSpan::new(2, 2, "NP(x)"),
            ChunkSpan::new(3, 4, ChunkTag::Pp),
        ];
        let parsed = parse_line(&render_line(&spans)).unwrap();
        assert_eq!(render_line(&parsed), "B NP(0, 1) NP(x)(2, 2) PP(3, 4)");
        assert_eq!(parsed[0], spans[0]);
        assert_eq!(parsed[1], spans[1]);
    }

    #[test]
    fn test_parse_line_rejects_missing_label() {
        let err = parse_line("NP(0, 1)(2, 3)").unwrap_err();
        match err {
            ChunkError::MalformedSpan(fragment) => assert_eq!(fragment, "(2, 3)"),
            other => panic!("Expected MalformedSpan, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_rejects_trailing_text() {
        let err = parse_line("NP(0, 1) VP(2, 2) and").unwrap_err();
        match err {
            ChunkError::MalformedSpan(fragment) => assert_eq!(fragment, "and"),
            other => panic!("Expected MalformedSpan, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_line_rejects_bad_span() {
        let err = parse_line("NP(0, 1) VP(x, 2)").unwrap_err();
        match err {
            ChunkError::MalformedSpan(fragment) => assert_eq!(fragment, "VP(x, 2)"),
            other => panic!("Expected MalformedSpan, got {:?}", other),
        }
        assert!(parse_line("NP(0, 1").is_err());
    }

    #[test]
    fn test_render_line() {
        let spans = vec![
            ChunkSpan::new(0, 1, ChunkTag::Np),
            ChunkSpan::new(2, 2, "VP"),
            ChunkSpan::new(3, 3, None::<&str>),
        ];
        assert_eq!(render_line(&spans), "NP(0, 1) VP(2, 2) UNDEFINED(3, 3)");
        assert_eq!(render_line(&[]), "");
    }
}
