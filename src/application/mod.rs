//! Application layer - Use cases and reports

pub mod inspect;
pub mod report;

pub use inspect::InspectService;
pub use report::TagHistogram;
