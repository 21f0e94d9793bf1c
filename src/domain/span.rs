//! Chunk spans: labeled word intervals within a sentence

use super::compact::UNDEFINED_NAME;
use super::tag::ChunkTag;
use crate::error::{ChunkError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

fn span_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*(\S.*?)\(\s*(-?\d+)\s*,\s*(-?\d+)\s*\)\s*$").unwrap()
    })
}

/// First word position of a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IndexBase {
    /// Words are numbered from 0
    #[default]
    Zero,
    /// Words are numbered from 1
    One,
}

impl IndexBase {
    /// Position of the first word
    pub fn first(self) -> i32 {
        match self {
            IndexBase::Zero => 0,
            IndexBase::One => 1,
        }
    }
}

impl FromStr for IndexBase {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zero" | "0" => Ok(IndexBase::Zero),
            "one" | "1" => Ok(IndexBase::One),
            _ => Err(format!(
                "Invalid index base: '{}'. Valid values are: zero, one",
                s
            )),
        }
    }
}

/// Label attached to a chunk span
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChunkLabel {
    /// No label (renders as `UNDEFINED`)
    #[default]
    Unset,
    /// Free text as emitted by a chunker; never empty or `UNDEFINED`
    Raw(String),
    /// A taxonomy member
    Typed(ChunkTag),
}

impl ChunkLabel {
    /// Build a free-text label, collapsing empty text and `UNDEFINED` to [`ChunkLabel::Unset`]
    pub fn raw(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() || text == UNDEFINED_NAME {
            ChunkLabel::Unset
        } else {
            ChunkLabel::Raw(text)
        }
    }

    /// Textual form of the label
    pub fn as_str(&self) -> &str {
        match self {
            ChunkLabel::Unset => UNDEFINED_NAME,
            ChunkLabel::Raw(text) => text,
            ChunkLabel::Typed(tag) => tag.name(),
        }
    }
}

impl From<&str> for ChunkLabel {
    fn from(text: &str) -> Self {
        ChunkLabel::raw(text)
    }
}

impl From<String> for ChunkLabel {
    fn from(text: String) -> Self {
        ChunkLabel::raw(text)
    }
}

impl From<Option<&str>> for ChunkLabel {
    fn from(text: Option<&str>) -> Self {
        text.map_or(ChunkLabel::Unset, ChunkLabel::raw)
    }
}

impl From<ChunkTag> for ChunkLabel {
    fn from(tag: ChunkTag) -> Self {
        ChunkLabel::Typed(tag)
    }
}

impl From<Option<ChunkTag>> for ChunkLabel {
    fn from(tag: Option<ChunkTag>) -> Self {
        tag.map_or(ChunkLabel::Unset, ChunkLabel::Typed)
    }
}

/// A labeled interval `[left, right]` of word positions.
///
/// Bounds are not checked on construction: the valid range depends on the
/// sentence, which a span does not know. Use [`ChunkSpan::validate`] or
/// [`ChunkSpan::validate_within`] to opt into checking.
///
/// # Examples
///
/// ```
/// use chunktag::domain::{ChunkSpan, ChunkTag};
///
/// let span = ChunkSpan::new(2, 4, "NP");
/// assert_eq!(span.format(), "NP(2, 4)");
///
/// let span = ChunkSpan::new(2, 4, ChunkTag::Vp);
/// assert_eq!(span.label(), "VP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChunkSpan {
    left: i32,
    right: i32,
    label: ChunkLabel,
}

impl ChunkSpan {
    /// Create a span from a free-text label or a taxonomy tag
    pub fn new(left: i32, right: i32, label: impl Into<ChunkLabel>) -> Self {
        ChunkSpan {
            left,
            right,
            label: label.into(),
        }
    }

    /// Replace bounds and label; the previous label kind is discarded
    pub fn set_span(&mut self, left: i32, right: i32, label: impl Into<ChunkLabel>) {
        self.left = left;
        self.right = right;
        self.label = label.into();
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    /// Label text, or `UNDEFINED` when no label is set
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// The underlying label representation
    pub fn chunk_label(&self) -> &ChunkLabel {
        &self.label
    }

    /// True only when a free-text label is active.
    ///
    /// A typed tag does not count: `ChunkSpan::new(0, 1, ChunkTag::Np)`
    /// reports `false` here while still rendering as `NP(0, 1)`.
    pub fn has_label(&self) -> bool {
        matches!(self.label, ChunkLabel::Raw(_))
    }

    /// Taxonomy tag of this span, resolving free text case-sensitively
    pub fn tag(&self) -> Option<ChunkTag> {
        match &self.label {
            ChunkLabel::Unset => None,
            ChunkLabel::Raw(text) => ChunkTag::parse(Some(text)),
            ChunkLabel::Typed(tag) => Some(*tag),
        }
    }

    /// Canonical rendering `LABEL(left, right)`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Reject negative positions and inverted bounds
    pub fn validate(&self) -> Result<()> {
        if self.left < 0 {
            return Err(self.invalid(format!("left position {} is negative", self.left)));
        }
        if self.right < self.left {
            return Err(self.invalid(format!(
                "right position {} precedes left position {}",
                self.right, self.left
            )));
        }
        Ok(())
    }

    /// Like [`ChunkSpan::validate`], and also require both positions to fall
    /// inside a sentence of `token_count` words numbered from `base`.
    pub fn validate_within(&self, token_count: usize, base: IndexBase) -> Result<()> {
        self.validate()?;

        let first = base.first();
        if self.left < first {
            return Err(self.invalid(format!(
                "left position {} is before the first word ({})",
                self.left, first
            )));
        }

        let count = i64::try_from(token_count).unwrap_or(i64::MAX);
        let last = i64::from(first).saturating_add(count) - 1;
        if i64::from(self.right) > last {
            return Err(self.invalid(format!(
                "right position {} is past the last word of a {}-word sentence",
                self.right, token_count
            )));
        }
        Ok(())
    }

    fn invalid(&self, reason: String) -> ChunkError {
        ChunkError::InvalidSpan {
            span: self.format(),
            reason,
        }
    }
}

impl fmt::Display for ChunkSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.label(), self.left, self.right)
    }
}

impl FromStr for ChunkSpan {
    type Err = ChunkError;

    /// Parse the canonical rendering back into a span with a free-text label.
    ///
    /// The label is everything before the trailing `(left, right)`, so labels
    /// containing spaces or parentheses survive a render/parse round trip.
    /// Leading whitespace is not part of the label.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || ChunkError::MalformedSpan(s.to_string());

        let captures = span_regex().captures(s).ok_or_else(malformed)?;
        let left: i32 = captures[2].parse().map_err(|_| malformed())?;
        let right: i32 = captures[3].parse().map_err(|_| malformed())?;

        Ok(ChunkSpan::new(left, right, &captures[1]))
    }
}
