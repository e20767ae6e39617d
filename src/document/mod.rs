// src/document/mod.rs
pub mod kind;
pub mod normalize;

pub use kind::DocumentKind;
pub use normalize::{NormalizedDocument, NOT_FOUND_MARKER};
