// src/rules/certificate.rs
//! Rules for registration certificates (computer programs, databases and
//! integrated circuit topologies).
//!
//! The three kinds share one rule set; computer programs and databases
//! override only `tool` and `size`, which use kind-specific captions.

use crate::document::NormalizedDocument;
use crate::extractors::variants;
use crate::record::field;

use super::common;
use super::patterns::{
    ABSTRACT_RE, ABSTRACT_TAIL_RE, CERTIFICATE_TITLE_RE, DATABASE_SIZE_RE, DATABASE_TOOL_RE, OS_IN_ABSTRACT_RE,
    OS_RE, PC_IN_ABSTRACT_RE, PC_RE, PROGRAM_SIZE_RE, PROGRAM_TOOL_RE, SIZE_RE, TOOL_RE,
};
use super::{clean_value, first_capture, FieldRule};

pub fn rules() -> Vec<FieldRule> {
    vec![
        FieldRule::text(field::PUB_DATE, common::pub_date),
        common::application_rule(),
        FieldRule::text(field::AUTHORS, common::authors),
        FieldRule::text(field::HOLDERS, common::holders),
        FieldRule::text(field::ABSTRACT, abstract_text),
        FieldRule::text(field::TITLE, title),
        FieldRule::list(field::HOLDERS_AMENDED, variants::holders_amended),
        FieldRule::list(field::TITLE_AMENDED, variants::title_amended),
        FieldRule::list(field::AUTHORS_AMENDED, variants::authors_amended),
        FieldRule::text(field::TOOL, tool),
        FieldRule::text(field::SIZE, size),
        FieldRule::text(field::PC, pc),
        FieldRule::text(field::OS, os),
    ]
}

pub fn computer_program_overrides() -> Vec<FieldRule> {
    vec![
        FieldRule::text(field::TOOL, program_language),
        FieldRule::text(field::SIZE, program_size),
    ]
}

pub fn database_overrides() -> Vec<FieldRule> {
    vec![
        FieldRule::text(field::TOOL, database_management_system),
        FieldRule::text(field::SIZE, database_size),
    ]
}

pub fn title(document: &NormalizedDocument) -> String {
    first_capture(&CERTIFICATE_TITLE_RE, document.bibliography())
}

/// Abstract text as published, including any hardware/OS tail.
fn raw_abstract(document: &NormalizedDocument) -> String {
    ABSTRACT_RE
        .captures(document.bibliography())
        .and_then(|caps| caps.get(1))
        .map(|m| clean_value(m.as_str()))
        .unwrap_or_default()
}

/// Abstract without the "Тип ЭВМ: ... ОС: ..." tail, which feeds `pc` and `os`.
pub fn abstract_text(document: &NormalizedDocument) -> String {
    let text = raw_abstract(document);
    ABSTRACT_TAIL_RE.replace(&text, "").trim().to_string()
}

/// Implementing computer type: its own caption, else the abstract tail.
pub fn pc(document: &NormalizedDocument) -> String {
    let from_caption = first_capture(&PC_RE, document.bibliography());
    if !from_caption.is_empty() {
        return from_caption;
    }
    first_capture(&PC_IN_ABSTRACT_RE, &raw_abstract(document))
}

pub fn os(document: &NormalizedDocument) -> String {
    let from_caption = first_capture(&OS_RE, document.bibliography());
    if !from_caption.is_empty() {
        return from_caption;
    }
    first_capture(&OS_IN_ABSTRACT_RE, &raw_abstract(document))
}

/// Accepts either certificate caption; kinds with a known caption override it.
pub fn tool(document: &NormalizedDocument) -> String {
    first_capture(&TOOL_RE, document.bibliography())
}

pub fn size(document: &NormalizedDocument) -> String {
    first_capture(&SIZE_RE, document.bibliography())
}

pub fn program_language(document: &NormalizedDocument) -> String {
    first_capture(&PROGRAM_TOOL_RE, document.bibliography())
}

pub fn program_size(document: &NormalizedDocument) -> String {
    first_capture(&PROGRAM_SIZE_RE, document.bibliography())
}

pub fn database_management_system(document: &NormalizedDocument) -> String {
    first_capture(&DATABASE_TOOL_RE, document.bibliography())
}

pub fn database_size(document: &NormalizedDocument) -> String {
    first_capture(&DATABASE_SIZE_RE, document.bibliography())
}
