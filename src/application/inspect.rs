//! Inspect annotation line use case

use crate::domain::annotation::parse_line;
use crate::domain::{ChunkSpan, ChunkTag};
use crate::error::Result;
use crate::infrastructure::Config;

/// Service for parsing chunker output and checking it against the config
pub struct InspectService {
    config: Config,
    strict_tags: bool,
}

impl InspectService {
    /// Create a new inspect service
    pub fn new(config: Config) -> Self {
        InspectService {
            config,
            strict_tags: false,
        }
    }

    /// Require every label to be a taxonomy member
    pub fn with_strict_tags(mut self, strict_tags: bool) -> Self {
        self.strict_tags = strict_tags;
        self
    }

    /// Parse an annotation line.
    ///
    /// With `strict_bounds` enabled every span is validated, and checked
    /// against the sentence length when `token_count` is given. With strict
    /// tags, a label outside the taxonomy fails with `UnknownTag`.
    pub fn execute(&self, line: &str, token_count: Option<usize>) -> Result<Vec<ChunkSpan>> {
        let spans = parse_line(line)?;
        tracing::debug!(count = spans.len(), "parsed annotation line");

        if self.config.strict_bounds {
            for span in &spans {
                match token_count {
                    Some(count) => span.validate_within(count, self.config.index_base)?,
                    None => span.validate()?,
                }
            }
        } else {
            for bad in spans.iter().filter(|span| span.validate().is_err()) {
                tracing::warn!(chunk = %bad, "accepting span with inverted or negative bounds");
            }
        }

        if self.strict_tags {
            for span in &spans {
                span.label().parse::<ChunkTag>()?;
            }
        }

        Ok(spans)
    }
}
