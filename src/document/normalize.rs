// src/document/normalize.rs
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::error::ParseError;

/// Phrase the registry renders instead of a document body for unknown numbers.
pub const NOT_FOUND_MARKER: &str = "Документ с данным номером отсутствует";

static HORIZONTAL_WS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t\u{00a0}\u{000b}\u{000c}]+").expect("Failed to compile HORIZONTAL_WS_RE")
});

// After collapsing, indentation is a single space right after the break.
// Indented blank lines chain into one run.
static SOFT_WRAP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\n )+").expect("Failed to compile SOFT_WRAP_RE")
});

/// Start of the first amendment notice caption (`TitIzv` on patents,
/// `...Izv` captions on certificates).
static NOTICE_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<p[^>]*class="[^"]*Izv[^"]*""#).expect("Failed to compile NOTICE_START_RE")
});

static NOT_FOUND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Документ\s*с\s*данным\s*номером\s*отсутствует").expect("Failed to compile NOT_FOUND_RE")
});

/// A registry page reduced to the two canonical forms the rules run against.
///
/// `lines` keeps hard line breaks but has soft-wrapped (indented) lines merged;
/// `flat` has every line break removed so notice blocks spanning several
/// source lines can be matched in one pass. The bibliography is the prefix
/// of `lines` ahead of the first notice caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    lines: String,
    flat: String,
    bibliography_end: usize,
}

impl NormalizedDocument {
    /// Normalizes raw markup, failing if the page is the registry's
    /// "document not found" placeholder.
    pub fn new(raw_html: &str) -> Result<Self, ParseError> {
        let unified = raw_html
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .replace("&nbsp;", " ")
            .replace("&#160;", " ");

        let collapsed = HORIZONTAL_WS_RE.replace_all(&unified, " ");
        let merged = SOFT_WRAP_RE.replace_all(&collapsed, " ");
        // A trailing space before a merged break leaves a double space
        let lines = HORIZONTAL_WS_RE.replace_all(&merged, " ").into_owned();
        let flat = lines.replace('\n', "");

        if NOT_FOUND_RE.is_match(&flat) {
            tracing::warn!("Registry page carries the not-found marker");
            return Err(ParseError::DocumentNotFound);
        }

        tracing::debug!(
            "Normalized document: {} bytes raw, {} bytes line form, {} bytes flat form",
            raw_html.len(),
            lines.len(),
            flat.len()
        );

        let bibliography_end = NOTICE_START_RE.find(&lines).map_or(lines.len(), |m| m.start());

        Ok(Self { lines, flat, bibliography_end })
    }

    /// Whole page in line form.
    pub fn lines(&self) -> &str {
        &self.lines
    }

    /// Line form up to the first amendment notice, used by bibliographic
    /// field rules so notice text never fills a missing field.
    pub fn bibliography(&self) -> &str {
        &self.lines[..self.bibliography_end]
    }

    /// Fully flattened form used by notice scanning.
    pub fn flat(&self) -> &str {
        &self.flat
    }
}
