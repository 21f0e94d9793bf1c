//! Phrase category taxonomy (Penn Treebank chunk tags)

use crate::error::ChunkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of syntactic phrase categories a chunk can carry.
///
/// Declaration order is significant: [`ChunkTag::ordinal`] is the zero-based
/// position in this list and is used to index per-tag arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChunkTag {
    Np,
    Vp,
    Pp,
    Advp,
    Adjp,
    Conjp,
    Frag,
    Intj,
    Lst,
    Nac,
    Nx,
    Prn,
    Prt,
    Qp,
    Rrc,
    Ucp,
    Whadjp,
    Whavp,
    Whnp,
    Whpp,
}

const ALL_TAGS: [ChunkTag; 20] = [
    ChunkTag::Np,
    ChunkTag::Vp,
    ChunkTag::Pp,
    ChunkTag::Advp,
    ChunkTag::Adjp,
    ChunkTag::Conjp,
    ChunkTag::Frag,
    ChunkTag::Intj,
    ChunkTag::Lst,
    ChunkTag::Nac,
    ChunkTag::Nx,
    ChunkTag::Prn,
    ChunkTag::Prt,
    ChunkTag::Qp,
    ChunkTag::Rrc,
    ChunkTag::Ucp,
    ChunkTag::Whadjp,
    ChunkTag::Whavp,
    ChunkTag::Whnp,
    ChunkTag::Whpp,
];

impl ChunkTag {
    /// Number of variants in the taxonomy
    pub const COUNT: usize = ALL_TAGS.len();

    /// Every variant in declaration order
    pub fn all() -> &'static [ChunkTag] {
        &ALL_TAGS
    }

    /// Canonical tag name as it appears in chunk annotations
    pub fn name(self) -> &'static str {
        match self {
            ChunkTag::Np => "NP",
            ChunkTag::Vp => "VP",
            ChunkTag::Pp => "PP",
            ChunkTag::Advp => "ADVP",
            ChunkTag::Adjp => "ADJP",
            ChunkTag::Conjp => "CONJP",
            ChunkTag::Frag => "FRAG",
            ChunkTag::Intj => "INTJ",
            ChunkTag::Lst => "LST",
            ChunkTag::Nac => "NAC",
            ChunkTag::Nx => "NX",
            ChunkTag::Prn => "PRN",
            ChunkTag::Prt => "PRT",
            ChunkTag::Qp => "QP",
            ChunkTag::Rrc => "RRC",
            ChunkTag::Ucp => "UCP",
            ChunkTag::Whadjp => "WHADJP",
            ChunkTag::Whavp => "WHAVP",
            ChunkTag::Whnp => "WHNP",
            ChunkTag::Whpp => "WHPP",
        }
    }

    /// Human-readable description of the phrase category
    pub fn describe(self) -> &'static str {
        match self {
            ChunkTag::Np => "Noun Phrase",
            ChunkTag::Vp => "Verb Phrase",
            ChunkTag::Pp => "Prepositional Phrase",
            ChunkTag::Advp => "Adverb Phrase",
            ChunkTag::Adjp => "Adjective Phrase",
            ChunkTag::Conjp => "Conjunction Phrase",
            ChunkTag::Frag => "Fragment",
            ChunkTag::Intj => "Interjection",
            ChunkTag::Lst => "List marker",
            ChunkTag::Nac => "Not a Constituent",
            ChunkTag::Nx => "Head of a complex Noun Phrase",
            ChunkTag::Prn => "Parenthetical",
            ChunkTag::Prt => "Particle",
            ChunkTag::Qp => "Quantifier Phrase",
            ChunkTag::Rrc => "Reduced Relative Clause",
            ChunkTag::Ucp => "Unlike Coordinated Phrase",
            ChunkTag::Whadjp => "Wh-adjective Phrase",
            ChunkTag::Whavp => "Wh-adverb Phrase",
            ChunkTag::Whnp => "Wh-noun Phrase",
            ChunkTag::Whpp => "Wh-prepositional Phrase",
        }
    }

    /// Zero-based position in declaration order
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Inverse of [`ChunkTag::ordinal`]
    pub fn from_ordinal(ordinal: usize) -> Option<ChunkTag> {
        ALL_TAGS.get(ordinal).copied()
    }

    /// Look up a variant by its exact (case-sensitive) name.
    ///
    /// Free text from a chunker often is not a taxonomy member, so absence
    /// is reported as `None` rather than an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chunktag::domain::ChunkTag;
    ///
    /// assert_eq!(ChunkTag::parse(Some("WHNP")), Some(ChunkTag::Whnp));
    /// assert_eq!(ChunkTag::parse(Some("np")), None);
    /// assert_eq!(ChunkTag::parse(None), None);
    /// ```
    pub fn parse(name: Option<&str>) -> Option<ChunkTag> {
        let name = name?;
        ALL_TAGS.iter().copied().find(|tag| tag.name() == name)
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChunkTag {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChunkTag::parse(Some(s)).ok_or_else(|| ChunkError::UnknownTag(s.to_string()))
    }
}
