// src/record.rs
use std::collections::BTreeMap;

use serde::Serialize;

use crate::document::DocumentKind;
use crate::extractors::amendments::AmendmentHistory;

/// Field keys produced by the built-in rule sets.
pub mod field {
    pub const REG_NUMBER: &str = "reg_number";
    pub const REG_DATE: &str = "reg_date";
    pub const STATUS: &str = "status";
    pub const APP_NUMBER: &str = "app_number";
    pub const APP_DATE: &str = "app_date";
    pub const PUB_DATE: &str = "pub_date";
    pub const AUTHORS: &str = "authors";
    pub const HOLDERS: &str = "holders";
    pub const TITLE: &str = "title";
    pub const PRIORITY_APP_DATE: &str = "priority_app_date";
    pub const PRIORITY_CONV_DATE: &str = "priority_conv_date";
    pub const START_DATE: &str = "start_date";
    pub const AMENDMENTS: &str = "amendments";
    pub const ABSTRACT: &str = "abstract";
    pub const TOOL: &str = "tool";
    pub const SIZE: &str = "size";
    pub const PC: &str = "pc";
    pub const OS: &str = "os";
    pub const HOLDERS_AMENDED: &str = "holders_amended";
    pub const TITLE_AMENDED: &str = "title_amended";
    pub const AUTHORS_AMENDED: &str = "authors_amended";
}

/// Value stored under one record key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// As-amended variants, in document order.
    List(Vec<String>),
    Amendments(AmendmentHistory),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_amendments(&self) -> Option<&AmendmentHistory> {
        match self {
            FieldValue::Amendments(history) => Some(history),
            _ => None,
        }
    }

    /// True for the "field absent" outcome: empty string or empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Amendments(history) => history.is_empty(),
        }
    }
}

/// Everything extracted from one registry page.
///
/// Every rule of the active rule set contributes its keys exactly once, so a
/// record always carries the full key set of its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRecord {
    kind: DocumentKind,
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
}

impl ParsedRecord {
    pub fn new(kind: DocumentKind) -> Self {
        Self { kind, fields: BTreeMap::new() }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub(crate) fn insert(&mut self, name: &str, value: FieldValue) -> Option<FieldValue> {
        self.fields.insert(name.to_string(), value)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text value of a field; `Some("")` when the rule matched nothing.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(FieldValue::as_list)
    }

    pub fn amendments(&self) -> Option<&AmendmentHistory> {
        self.get(field::AMENDMENTS).and_then(FieldValue::as_amendments)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn empty_field_count(&self) -> usize {
        self.fields.values().filter(|value| value.is_empty()).count()
    }

    /// Current right holders: the newest amendment carrying a holder, else the
    /// original filing value.
    pub fn current_holders(&self) -> Option<&str> {
        self.current_value(field::HOLDERS, field::HOLDERS_AMENDED, AmendmentHistory::current_holder)
    }

    pub fn current_authors(&self) -> Option<&str> {
        self.current_value(field::AUTHORS, field::AUTHORS_AMENDED, AmendmentHistory::current_authors)
    }

    /// Patents have no title notices, so only certificates can differ from the filing.
    pub fn current_title(&self) -> Option<&str> {
        self.current_value(field::TITLE, field::TITLE_AMENDED, |_| None)
    }

    fn current_value<'a>(
        &'a self,
        original: &str,
        amended: &str,
        from_history: fn(&'a AmendmentHistory) -> Option<&'a str>,
    ) -> Option<&'a str> {
        // Variants are kept in document order, so the last one is the newest.
        let amended_value = match self.amendments() {
            Some(history) => from_history(history),
            None => self
                .list(amended)
                .and_then(|variants| variants.iter().rev().find(|v| !v.is_empty()))
                .map(String::as_str),
        };

        amended_value.or_else(|| self.text(original).filter(|value| !value.is_empty()))
    }
}
