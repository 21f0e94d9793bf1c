//! Domain layer - chunk tag taxonomy and chunk spans

pub mod annotation;
pub mod compact;
pub mod span;
pub mod tag;

pub use span::{ChunkLabel, ChunkSpan, IndexBase};
pub use tag::ChunkTag;
