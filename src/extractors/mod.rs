// src/extractors/mod.rs
pub mod amendments;
pub mod field;
pub mod variants;

// Re-export key extraction types for convenience
pub use amendments::{AmendmentHistory, AmendmentNotice, NoticeCode};
pub use field::{parse_document, RecordExtractor};
