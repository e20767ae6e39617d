// src/lib.rs
//! Field extraction from FIPS open-registry pages: invention patents and
//! registration certificates for computer programs, databases and integrated
//! circuit topologies.
//!
//! ```no_run
//! use fips_doc_parser::{parse_document, DocumentKind};
//!
//! let html = std::fs::read_to_string("2384123.html").unwrap();
//! let record = parse_document(&html, DocumentKind::Patent).unwrap();
//! println!("{:?}", record.current_holders());
//! ```

pub mod batch;
pub mod document;
pub mod extractors;
pub mod record;
pub mod rules;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_fixtures;

pub use document::{DocumentKind, NormalizedDocument};
pub use extractors::{parse_document, AmendmentHistory, AmendmentNotice, NoticeCode, RecordExtractor};
pub use record::{FieldValue, ParsedRecord};
pub use rules::{FieldRule, RuleSet};
pub use utils::{AppError, ParseError, StorageError};
