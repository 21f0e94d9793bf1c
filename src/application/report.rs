//! Per-tag span counts

use crate::domain::{ChunkSpan, ChunkTag};

/// Number of spans per phrase category, indexed by [`ChunkTag::ordinal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHistogram {
    counts: [usize; ChunkTag::COUNT],
    unrecognized: usize,
}

impl Default for TagHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl TagHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self {
            counts: [0; ChunkTag::COUNT],
            unrecognized: 0,
        }
    }

    /// Count the tags of `spans`
    pub fn from_spans(spans: &[ChunkSpan]) -> Self {
        let mut histogram = Self::new();
        for span in spans {
            histogram.add(span);
        }
        histogram
    }

    /// Count one span; labels outside the taxonomy go to [`TagHistogram::unrecognized`]
    pub fn add(&mut self, span: &ChunkSpan) {
        match span.tag() {
            Some(tag) => self.counts[tag.ordinal()] += 1,
            None => self.unrecognized += 1,
        }
    }

    pub fn count(&self, tag: ChunkTag) -> usize {
        self.counts[tag.ordinal()]
    }

    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    /// Total number of spans counted
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.unrecognized
    }

    /// Tags with at least one span, in ordinal order
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (ChunkTag, usize)> + '_ {
        ChunkTag::all()
            .iter()
            .map(|&tag| (tag, self.count(tag)))
            .filter(|&(_, count)| count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::parse_line;

    #[test]
    fn test_empty_histogram() {
        let histogram = TagHistogram::new();
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.iter_nonzero().count(), 0);
        assert_eq!(histogram, TagHistogram::default());
    }

    #[test]
    fn test_counts_by_tag() {
        let spans = parse_line("NP(0, 1) VP(2, 2) NP(3, 4) WHPP(5, 6)").unwrap();
        let histogram = TagHistogram::from_spans(&spans);

        assert_eq!(histogram.count(ChunkTag::Np), 2);
        assert_eq!(histogram.count(ChunkTag::Vp), 1);
        assert_eq!(histogram.count(ChunkTag::Whpp), 1);
        assert_eq!(histogram.count(ChunkTag::Pp), 0);
        assert_eq!(histogram.total(), 4);
    }

    #[test]
    fn test_unrecognized_labels() {
        let spans = vec![
            ChunkSpan::new(0, 0, "np"),
            ChunkSpan::new(1, 1, None::<&str>),
            ChunkSpan::new(2, 2, ChunkTag::Qp),
        ];
        let histogram = TagHistogram::from_spans(&spans);

        assert_eq!(histogram.unrecognized(), 2);
        assert_eq!(histogram.count(ChunkTag::Qp), 1);
        assert_eq!(histogram.total(), 3);
    }

    #[test]
    fn test_iter_nonzero_in_ordinal_order() {
        let spans = parse_line("PRT(4, 4) NP(0, 1) ADVP(3, 3) NP(5, 6)").unwrap();
        let histogram = TagHistogram::from_spans(&spans);

        let entries: Vec<(ChunkTag, usize)> = histogram.iter_nonzero().collect();
        assert_eq!(
            entries,
            vec![
                (ChunkTag::Np, 2),
                (ChunkTag::Advp, 1),
                (ChunkTag::Prt, 1)
            ]
        );
    }
}
