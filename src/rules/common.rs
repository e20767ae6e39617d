// src/rules/common.rs
//! Rules shared across document kinds.

use crate::document::NormalizedDocument;
use crate::record::field;

use super::patterns::{
    APPLICATION_BARE_RE, APPLICATION_RE, AUTHORS_RE, HOLDERS_RE, PUB_DATE_RE, REG_DATE_RE, REG_NUMBER_RE,
};
use super::{clean_value, first_capture, FieldRule};

/// The base rule set every kind starts from.
pub fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::text(field::REG_NUMBER, reg_number),
        FieldRule::text(field::REG_DATE, reg_date),
    ]
}

pub fn reg_number(document: &NormalizedDocument) -> String {
    first_capture(&REG_NUMBER_RE, document.bibliography())
}

pub fn reg_date(document: &NormalizedDocument) -> String {
    first_capture(&REG_DATE_RE, document.bibliography())
}

pub fn application_rule() -> FieldRule {
    FieldRule::pair("application", [field::APP_NUMBER, field::APP_DATE], application)
}

/// Application number and filing date, taken from one match.
pub fn application(document: &NormalizedDocument) -> (String, String) {
    let text = document.bibliography();
    if let Some(caps) = APPLICATION_RE.iter().find_map(|re| re.captures(text)) {
        return (clean_value(&caps[1]), clean_value(&caps[2]));
    }

    // Older pages only have the bare pair; ambiguous when it repeats.
    let bare: Vec<_> = APPLICATION_BARE_RE.captures_iter(text).collect();
    match bare.as_slice() {
        [caps] => (caps[1].to_string(), caps[2].to_string()),
        _ => (String::new(), String::new()),
    }
}

pub fn pub_date(document: &NormalizedDocument) -> String {
    first_capture(&PUB_DATE_RE, document.bibliography())
}

pub fn authors(document: &NormalizedDocument) -> String {
    first_capture(&AUTHORS_RE, document.bibliography())
}

pub fn holders(document: &NormalizedDocument) -> String {
    first_capture(&HOLDERS_RE, document.bibliography())
}
