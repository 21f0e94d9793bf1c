//! Output formatting utilities

use crate::application::TagHistogram;
use crate::domain::compact::{all_compact_names, to_code, to_name};
use crate::domain::{ChunkSpan, ChunkTag};

/// Names run through the compact codec when `codes` gets no arguments
pub const DEFAULT_CODE_INPUTS: [&str; 6] = ["NP", "vp", "Pp", "prt", "ADVP", "xpt"];

/// Format the taxonomy: ordinal, name and description per line
pub fn format_tag_list(tags: &[ChunkTag]) -> String {
    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!(
            "{:>2}  {:<6}  {}\n",
            tag.ordinal(),
            tag.name(),
            tag.describe()
        ));
    }
    output
}

/// Format the compact code domain: code and name per line
pub fn format_compact_domain() -> String {
    let mut output = String::new();
    for (code, name) in all_compact_names().iter().enumerate() {
        output.push_str(&format!("{}  {}\n", code, name));
    }
    output
}

/// Format name -> code -> name conversions for each input
pub fn format_code_conversions<S: AsRef<str>>(inputs: &[S]) -> String {
    let mut output = String::new();
    for input in inputs {
        let code = to_code(Some(input.as_ref()));
        output.push_str(&format!(
            "{:?} -> {} -> {}\n",
            input.as_ref(),
            code,
            to_name(code)
        ));
    }
    output
}

/// Format parsed spans with the description of their tag
pub fn format_span_list(spans: &[ChunkSpan]) -> String {
    if spans.is_empty() {
        return "No spans found".to_string();
    }

    let mut output = String::new();
    for span in spans {
        let description = span.tag().map_or("-", ChunkTag::describe);
        output.push_str(&format!("{}  {}\n", span, description));
    }
    output
}

/// Format a histogram: one line per tag present, then the unrecognized count
pub fn format_histogram(histogram: &TagHistogram) -> String {
    if histogram.total() == 0 {
        return "No spans found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in histogram.iter_nonzero() {
        output.push_str(&format!("{:<9}  {}\n", tag.name(), count));
    }
    if histogram.unrecognized() > 0 {
        output.push_str(&format!("{:<9}  {}\n", "UNDEFINED", histogram.unrecognized()));
    }
    output
}
