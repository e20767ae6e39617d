// src/rules/patent.rs
//! Rules specific to invention patents.

use crate::document::NormalizedDocument;
use crate::extractors::amendments;
use crate::record::field;

use super::common;
use super::patterns::{PATENT_TITLE_RE, PRIORITY_APP_DATE_RE, PRIORITY_CONV_DATE_RE, START_DATE_RE, STATUS_RE};
use super::{first_capture, FieldRule};

pub fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::text(field::STATUS, status),
        common::application_rule(),
        FieldRule::text(field::PUB_DATE, common::pub_date),
        FieldRule::text(field::AUTHORS, common::authors),
        FieldRule::text(field::HOLDERS, common::holders),
        FieldRule::text(field::TITLE, title),
        FieldRule::text(field::PRIORITY_APP_DATE, priority_app_date),
        FieldRule::text(field::PRIORITY_CONV_DATE, priority_conv_date),
        FieldRule::text(field::START_DATE, start_date),
        FieldRule::history(field::AMENDMENTS, amendments::extract_history),
    ]
}

/// Legal status line, e.g. "действует (последнее изменение статуса: ...)".
pub fn status(document: &NormalizedDocument) -> String {
    first_capture(&STATUS_RE, document.bibliography())
}

pub fn title(document: &NormalizedDocument) -> String {
    first_capture(&PATENT_TITLE_RE, document.bibliography())
}

pub fn priority_app_date(document: &NormalizedDocument) -> String {
    first_capture(&PRIORITY_APP_DATE_RE, document.bibliography())
}

pub fn priority_conv_date(document: &NormalizedDocument) -> String {
    first_capture(&PRIORITY_CONV_DATE_RE, document.bibliography())
}

pub fn start_date(document: &NormalizedDocument) -> String {
    first_capture(&START_DATE_RE, document.bibliography())
}
