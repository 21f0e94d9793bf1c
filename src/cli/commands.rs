//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chunktag")]
#[command(about = "Phrase chunk tags and chunk span annotations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $CHUNKTAG_CONFIG, then built-in defaults)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every phrase category with its ordinal and description
    Tags,

    /// List the compact code domain and convert names to codes
    Codes {
        /// Names to convert (default: NP vp Pp prt ADVP xpt)
        names: Vec<String>,
    },

    /// Render a span in canonical form
    Format {
        /// First word position
        #[arg(allow_negative_numbers = true)]
        left: i32,

        /// Last word position
        #[arg(allow_negative_numbers = true)]
        right: i32,

        /// Chunk label (omit for UNDEFINED)
        label: Option<String>,
    },

    /// Parse an annotation line such as "NP(0, 1) VP(2, 2)"
    Inspect {
        /// Annotation line
        line: String,

        /// Sentence length, used for bounds checks when strict_bounds is set
        #[arg(short, long)]
        tokens: Option<usize>,

        /// Reject labels that are not phrase categories (case-sensitive)
        #[arg(long)]
        strict_tags: bool,
    },

    /// Count spans per phrase category in an annotation line
    Report {
        /// Annotation line
        line: String,
    },

    /// Show the effective configuration
    Config {
        /// Config key to show (index_base, strict_bounds)
        key: Option<String>,
    },
}
