// src/extractors/variants.rs
//! As-amended values on certificate pages.
//!
//! Certificates publish changes as a caption paragraph followed by one or two
//! `notice` paragraphs. A correction ("следует читать") carries the misprinted
//! value first and the corrected one second.

use crate::document::NormalizedDocument;
use crate::rules::clean_value;
use crate::rules::patterns::NOTICE_VARIANT_RE;

const HOLDER_TOPIC: &str = "правообладател";
const TITLE_TOPIC: &str = "назван";
const AUTHOR_TOPIC: &str = "автор";
const READ_INSTEAD_MARKER: &str = "следует читать";

/// Replacement values for a topic, in the order they appear on the page.
pub fn amended_values(flat: &str, topic: &str) -> Vec<String> {
    NOTICE_VARIANT_RE
        .captures_iter(flat)
        .filter_map(|caps| {
            let caption = clean_value(caps.get(1).map_or("", |m| m.as_str())).to_lowercase();
            if !caption.contains(topic) {
                return None;
            }

            let first = caps.get(2);
            let corrected = caps.get(3);
            let value = if caption.contains(READ_INSTEAD_MARKER) {
                corrected.or(first)
            } else {
                first
            };
            value.map(|m| clean_value(m.as_str()))
        })
        .collect()
}

pub fn holders_amended(document: &NormalizedDocument) -> Vec<String> {
    amended_values(document.flat(), HOLDER_TOPIC)
}

pub fn title_amended(document: &NormalizedDocument) -> Vec<String> {
    amended_values(document.flat(), TITLE_TOPIC)
}

pub fn authors_amended(document: &NormalizedDocument) -> Vec<String> {
    amended_values(document.flat(), AUTHOR_TOPIC)
}
