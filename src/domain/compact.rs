//! Compact numeric chunk codes
//!
//! A five-element projection of [`ChunkTag`] onto the codes `0..5`, kept for
//! consumers that store chunk tags as small integers. Anything outside the
//! projection maps to [`UNDEFINED`].

use super::tag::ChunkTag;

/// Sentinel code for names outside the compact domain
pub const UNDEFINED: i32 = -1;

/// Name reported for codes outside the compact domain
pub const UNDEFINED_NAME: &str = "UNDEFINED";

/// Compact domain, indexed by code
const DOMAIN: [ChunkTag; 5] = [
    ChunkTag::Np,
    ChunkTag::Vp,
    ChunkTag::Pp,
    ChunkTag::Prt,
    ChunkTag::Advp,
];

/// Convert a tag name to its compact code (case-insensitive).
///
/// # Examples
///
/// ```
/// use chunktag::domain::compact::{to_code, UNDEFINED};
///
/// assert_eq!(to_code(Some("pp")), 2);
/// assert_eq!(to_code(Some("QP")), UNDEFINED);
/// assert_eq!(to_code(None), UNDEFINED);
/// ```
pub fn to_code(name: Option<&str>) -> i32 {
    let Some(name) = name else {
        return UNDEFINED;
    };

    DOMAIN
        .iter()
        .position(|tag| tag.name().eq_ignore_ascii_case(name))
        .map_or(UNDEFINED, |code| code as i32)
}

/// Convert a compact code to its canonical name, or `"UNDEFINED"`.
pub fn to_name(code: i32) -> &'static str {
    tag_of(code).map_or(UNDEFINED_NAME, ChunkTag::name)
}

/// Tag at `code`, if the code is inside the compact domain
pub fn tag_of(code: i32) -> Option<ChunkTag> {
    usize::try_from(code)
        .ok()
        .and_then(|index| DOMAIN.get(index))
        .copied()
}

/// Compact code of a taxonomy variant, or [`UNDEFINED`] if it has none
pub fn code_of(tag: ChunkTag) -> i32 {
    DOMAIN
        .iter()
        .position(|&candidate| candidate == tag)
        .map_or(UNDEFINED, |code| code as i32)
}

/// Names of the compact domain in code order
pub fn all_compact_names() -> Vec<&'static str> {
    DOMAIN.iter().map(|tag| tag.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_order() {
        assert_eq!(all_compact_names(), vec!["NP", "VP", "PP", "PRT", "ADVP"]);
    }

    #[test]
    fn test_code_name_inverse() {
        for code in 0..5 {
            assert_eq!(to_code(Some(to_name(code))), code);
        }
    }

    #[test]
    fn test_to_code_case_insensitive() {
        let spellings = [
            ["NP", "np", "Np"],
            ["VP", "vp", "vP"],
            ["PP", "pp", "Pp"],
            ["PRT", "prt", "PrT"],
            ["ADVP", "advp", "AdVp"],
        ];
        for (code, group) in spellings.iter().enumerate() {
            for spelling in group {
                assert_eq!(to_code(Some(spelling)), code as i32, "{}", spelling);
            }
        }
    }

    #[test]
    fn test_to_name_canonicalizes() {
        assert_eq!(to_name(to_code(Some("advp"))), "ADVP");
        assert_eq!(to_name(to_code(Some("pRt"))), "PRT");
    }

    #[test]
    fn test_sentinels() {
        assert_eq!(to_code(None), UNDEFINED);
        assert_eq!(to_code(Some("")), UNDEFINED);
        assert_eq!(to_code(Some("xpt")), UNDEFINED);
        assert_eq!(to_code(Some("WHNP")), UNDEFINED);
        assert_eq!(to_name(UNDEFINED), "UNDEFINED");
        assert_eq!(to_name(5), "UNDEFINED");
        assert_eq!(to_name(99), "UNDEFINED");
        assert_eq!(to_name(i32::MIN), "UNDEFINED");
    }

    #[test]
    fn test_undefined_literal_is_not_a_code() {
        assert_eq!(to_code(Some("UNDEFINED")), UNDEFINED);
    }

    #[test]
    fn test_projection_agrees_with_taxonomy() {
        for &tag in ChunkTag::all() {
            let code = code_of(tag);
            if code == UNDEFINED {
                assert_eq!(to_code(Some(tag.name())), UNDEFINED);
            } else {
                assert_eq!(tag_of(code), Some(tag));
                assert_eq!(to_name(code), tag.name());
            }
        }
        assert_eq!(code_of(ChunkTag::Prt), 3);
        assert_eq!(code_of(ChunkTag::Adjp), UNDEFINED);
        assert_eq!(tag_of(-1), None);
    }
}
