// src/rules/mod.rs
//! Named field-extraction rules grouped into per-kind rule sets.
//!
//! A rule set is a plain ordered list. Kinds that share most of their fields
//! are built by deriving from a base set and stating only the rules that
//! differ, see [`RuleSet::derive`].

pub mod certificate;
pub mod common;
pub mod patent;
pub mod patterns;

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{DocumentKind, NormalizedDocument};
use crate::extractors::amendments::AmendmentHistory;
use crate::record::FieldValue;

/// How a rule turns a normalized document into record values.
#[derive(Clone, Copy)]
pub enum Extract {
    Text(fn(&NormalizedDocument) -> String),
    /// Two related fields captured from a single match.
    Pair {
        fields: [&'static str; 2],
        extract: fn(&NormalizedDocument) -> (String, String),
    },
    List(fn(&NormalizedDocument) -> Vec<String>),
    History(fn(&NormalizedDocument) -> AmendmentHistory),
}

#[derive(Clone)]
pub struct FieldRule {
    name: &'static str,
    extract: Extract,
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("fields", &self.fields())
            .finish()
    }
}

impl FieldRule {
    pub fn text(name: &'static str, extract: fn(&NormalizedDocument) -> String) -> Self {
        Self { name, extract: Extract::Text(extract) }
    }

    pub fn pair(
        name: &'static str,
        fields: [&'static str; 2],
        extract: fn(&NormalizedDocument) -> (String, String),
    ) -> Self {
        Self { name, extract: Extract::Pair { fields, extract } }
    }

    pub fn list(name: &'static str, extract: fn(&NormalizedDocument) -> Vec<String>) -> Self {
        Self { name, extract: Extract::List(extract) }
    }

    pub fn history(name: &'static str, extract: fn(&NormalizedDocument) -> AmendmentHistory) -> Self {
        Self { name, extract: Extract::History(extract) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Record keys this rule writes.
    pub fn fields(&self) -> &[&'static str] {
        match &self.extract {
            Extract::Pair { fields, .. } => fields.as_slice(),
            _ => std::slice::from_ref(&self.name),
        }
    }

    /// Runs the rule. A miss is an empty value, never an error.
    pub fn apply(&self, document: &NormalizedDocument) -> Vec<(&'static str, FieldValue)> {
        match &self.extract {
            Extract::Text(extract) => vec![(self.name, FieldValue::Text(extract(document)))],
            Extract::Pair { fields, extract } => {
                let (first, second) = extract(document);
                vec![(fields[0], FieldValue::Text(first)), (fields[1], FieldValue::Text(second))]
            }
            Extract::List(extract) => vec![(self.name, FieldValue::List(extract(document)))],
            Extract::History(extract) => vec![(self.name, FieldValue::Amendments(extract(document)))],
        }
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    rules: Vec<FieldRule>,
}

static BASE_RULES: Lazy<RuleSet> = Lazy::new(|| RuleSet::new("base", common::rules()));

static PATENT_RULES: Lazy<RuleSet> = Lazy::new(|| BASE_RULES.derive("patent", patent::rules()));

static CERTIFICATE_RULES: Lazy<RuleSet> =
    Lazy::new(|| BASE_RULES.derive("certificate", certificate::rules()));

static COMPUTER_PROGRAM_RULES: Lazy<RuleSet> =
    Lazy::new(|| CERTIFICATE_RULES.derive("computer_program", certificate::computer_program_overrides()));

static DATABASE_RULES: Lazy<RuleSet> =
    Lazy::new(|| CERTIFICATE_RULES.derive("database", certificate::database_overrides()));

impl RuleSet {
    pub fn new(name: &'static str, rules: Vec<FieldRule>) -> Self {
        Self { name, rules }
    }

    /// Builds a rule set from `self`: same-named rules are replaced in place,
    /// new names are appended after the inherited ones.
    pub fn derive(&self, name: &'static str, overrides: Vec<FieldRule>) -> Self {
        let mut rules = self.rules.clone();
        for rule in overrides {
            match rules.iter_mut().find(|existing| existing.name == rule.name) {
                Some(existing) => *existing = rule,
                None => rules.push(rule),
            }
        }
        Self { name, rules }
    }

    /// Rule set for a document kind. Topology certificates use the shared
    /// certificate set as is.
    pub fn for_kind(kind: DocumentKind) -> &'static RuleSet {
        match kind {
            DocumentKind::Patent => &PATENT_RULES,
            DocumentKind::ComputerProgram => &COMPUTER_PROGRAM_RULES,
            DocumentKind::Database => &DATABASE_RULES,
            DocumentKind::Topology => &CERTIFICATE_RULES,
        }
    }

    /// Rules shared by every document kind.
    pub fn base() -> &'static RuleSet {
        &BASE_RULES
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Every record key the set produces, in rule order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.rules.iter().flat_map(|rule| rule.fields().iter().copied()).collect()
    }
}

static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").expect("Failed to compile BR_RE"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile TAG_RE"));
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile SPACE_RE"));

/// Strips inline markup from a captured value and tidies its whitespace.
pub fn clean_value(raw: &str) -> String {
    let text = BR_RE.replace_all(raw, " ");
    let text = TAG_RE.replace_all(&text, "");
    let text = text
        .replace("&quot;", "\"")
        .replace("&laquo;", "«")
        .replace("&raquo;", "»")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    SPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// First capture group of the first pattern that matches, cleaned. Patterns
/// are tried in order; an empty string means none matched.
pub fn first_capture(patterns: &[Regex], text: &str) -> String {
    patterns
        .iter()
        .find_map(|re| re.captures(text).and_then(|caps| caps.get(1)))
        .map(|m| clean_value(m.as_str()))
        .unwrap_or_default()
}
