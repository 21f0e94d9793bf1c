//! chunktag - Phrase chunk tags and chunk span annotations
//!
//! Models the output of a shallow parser: a closed taxonomy of
//! Penn-Treebank phrase categories, a compact numeric encoding of its most
//! common members, and labeled word spans with a canonical text form
//! (`NP(2, 4)`).

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChunkError;
