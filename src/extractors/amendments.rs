// src/extractors/amendments.rs
//! Amendment notices ("izv" blocks) on patent pages.
//!
//! A patent page lists every notice the registry published about it. Only
//! four notice codes change holder or author data; those are kept, enriched
//! with the replacement values they carry and ordered newest first, so the
//! first notice with a non-empty value is the current one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::NormalizedDocument;
use crate::rules::first_capture;
use crate::rules::patterns::{
    AUTHORS_RE, CORRECTED_AUTHORS_RE, CORRECTED_HOLDER_RE, NEW_HOLDER_NAME_RE, NEW_HOLDER_RE, NOTICE_BLOCK_RE,
    NOTICE_CAPTION_RE, READ_INSTEAD_RE,
};
use crate::rules::clean_value;

const PUB_DATE_FORMAT: &str = "%d.%m.%Y";

/// Notice codes that carry holder or author changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeCode {
    /// Holder changed its name.
    #[serde(rename = "PD4A")]
    HolderNameChange,
    /// Exclusive right passed to a new holder.
    #[serde(rename = "PC4A")]
    HolderChange,
    /// Correction of a published holder (and possibly authors).
    #[serde(rename = "TK4A")]
    HolderCorrection,
    /// Correction of a published author list.
    #[serde(rename = "TC4A")]
    AuthorCorrection,
}

impl NoticeCode {
    pub const ACCEPTED: [NoticeCode; 4] = [
        NoticeCode::HolderNameChange,
        NoticeCode::HolderChange,
        NoticeCode::HolderCorrection,
        NoticeCode::AuthorCorrection,
    ];

    /// Maps a registry code; `None` for every notice type we discard.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ACCEPTED.into_iter().find(|accepted| accepted.as_str() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoticeCode::HolderNameChange => "PD4A",
            NoticeCode::HolderChange => "PC4A",
            NoticeCode::HolderCorrection => "TK4A",
            NoticeCode::AuthorCorrection => "TC4A",
        }
    }
}

/// One notice block as found on the page, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNotice {
    pub code: Option<String>,
    pub name: String,
    pub body: String,
    /// The whole matched block.
    pub text: String,
    pub pub_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmendmentNotice {
    pub code: NoticeCode,
    pub name: String,
    pub text: String,
    pub pub_date: String,
    /// Replacement holder, empty when the notice carries none.
    pub holder: String,
    /// Replacement author list, empty when the notice carries none.
    pub authors: String,
}

impl AmendmentNotice {
    /// Publication date as a calendar date, `None` if it does not parse.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.pub_date, PUB_DATE_FORMAT).ok()
    }
}

/// Accepted notices of one patent, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AmendmentHistory(Vec<AmendmentNotice>);

impl AmendmentHistory {
    /// Sorts `notices` newest first. Equal dates keep their given order;
    /// unparseable dates go last.
    pub fn new(mut notices: Vec<AmendmentNotice>) -> Self {
        notices.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
        Self(notices)
    }

    pub fn notices(&self) -> &[AmendmentNotice] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AmendmentNotice> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Holder named by the most recent notice that names one.
    pub fn current_holder(&self) -> Option<&str> {
        self.iter().map(|n| n.holder.as_str()).find(|holder| !holder.is_empty())
    }

    pub fn current_authors(&self) -> Option<&str> {
        self.iter().map(|n| n.authors.as_str()).find(|authors| !authors.is_empty())
    }
}

/// Finds every notice block in document order, whatever its code.
///
/// The flat form is cut at each caption first, so a block missing its
/// publication date is dropped on its own instead of swallowing the next one.
pub fn scan_notices(flat: &str) -> Vec<RawNotice> {
    let starts: Vec<usize> = NOTICE_CAPTION_RE.find_iter(flat).map(|m| m.start()).collect();
    let ends = starts.iter().skip(1).copied().chain(std::iter::once(flat.len()));

    starts
        .iter()
        .zip(ends)
        .filter_map(|(&start, end)| {
            let segment = &flat[start..end];
            let caps = NOTICE_BLOCK_RE.captures(segment);
            if caps.is_none() {
                tracing::debug!("Skipping notice block without a publication date at byte {}", start);
            }
            caps
        })
        .map(|caps| RawNotice {
            code: caps.get(1).map(|m| m.as_str().to_string()),
            name: clean_value(caps.get(2).map_or("", |m| m.as_str())),
            body: caps.get(3).map_or("", |m| m.as_str()).to_string(),
            text: caps.get(0).map_or("", |m| m.as_str()).to_string(),
            pub_date: caps.get(4).map_or("", |m| m.as_str()).to_string(),
        })
        .collect()
}

/// Keeps accepted codes only and pulls the replacement values out of each.
pub fn reconcile(raw: Vec<RawNotice>) -> AmendmentHistory {
    let total = raw.len();
    let notices: Vec<AmendmentNotice> = raw
        .into_iter()
        .filter_map(|notice| {
            let code = notice.code.as_deref().and_then(NoticeCode::parse);
            if code.is_none() {
                tracing::trace!("Discarding notice {:?} ({})", notice.code, notice.name);
            }
            code.map(|code| enrich(code, notice))
        })
        .collect();

    tracing::debug!("Kept {} of {} amendment notices", notices.len(), total);
    AmendmentHistory::new(notices)
}

pub fn extract_history(document: &NormalizedDocument) -> AmendmentHistory {
    reconcile(scan_notices(document.flat()))
}

fn enrich(code: NoticeCode, notice: RawNotice) -> AmendmentNotice {
    let (holder, authors) = match code {
        NoticeCode::HolderNameChange => (new_holder_name(&notice.body), String::new()),
        NoticeCode::HolderChange => (new_holder(&notice.body), String::new()),
        NoticeCode::HolderCorrection => (corrected_holder(&notice.body), corrected_authors(&notice.body)),
        NoticeCode::AuthorCorrection => (String::new(), authors_after_correction_marker(&notice.body)),
    };

    AmendmentNotice {
        code,
        name: notice.name,
        text: notice.text,
        pub_date: notice.pub_date,
        holder,
        authors,
    }
}

pub fn new_holder_name(body: &str) -> String {
    first_capture(&NEW_HOLDER_NAME_RE, body)
}

pub fn new_holder(body: &str) -> String {
    first_capture(&NEW_HOLDER_RE, body)
}

pub fn corrected_holder(body: &str) -> String {
    first_capture(&CORRECTED_HOLDER_RE, body)
}

/// Plain-text author list first, `<b>`-wrapped list only if that fails.
pub fn corrected_authors(body: &str) -> String {
    first_capture(&CORRECTED_AUTHORS_RE, body)
}

/// Author list of an author correction. When the body has the "read instead"
/// part, only that part is searched so the misprinted list is skipped.
pub fn authors_after_correction_marker(body: &str) -> String {
    let corrected = READ_INSTEAD_RE.find(body).map_or(body, |m| &body[m.end()..]);
    first_capture(&AUTHORS_RE, corrected)
}
