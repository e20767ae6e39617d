// src/extractors/field.rs

use crate::document::{DocumentKind, NormalizedDocument};
use crate::record::ParsedRecord;
use crate::rules::RuleSet;
use crate::utils::error::ParseError;

/// Runs a rule set over a registry page and collects the record.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordExtractor;

impl RecordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes `html` and extracts every field of `kind`.
    ///
    /// Fails only with [`ParseError::DocumentNotFound`]; unmatched fields are
    /// empty values in the returned record.
    pub fn parse(&self, html: &str, kind: DocumentKind) -> Result<ParsedRecord, ParseError> {
        let document = NormalizedDocument::new(html)?;
        Ok(self.extract(&document, kind))
    }

    pub fn extract(&self, document: &NormalizedDocument, kind: DocumentKind) -> ParsedRecord {
        self.extract_with_rules(document, kind, RuleSet::for_kind(kind))
    }

    /// Extracts with an explicit rule set, e.g. one derived for a new layout.
    pub fn extract_with_rules(&self, document: &NormalizedDocument, kind: DocumentKind, rules: &RuleSet) -> ParsedRecord {
        let mut record = ParsedRecord::new(kind);

        for rule in rules.rules() {
            for (name, value) in rule.apply(document) {
                if value.is_empty() {
                    tracing::trace!("Rule '{}' found nothing for field '{}'", rule.name(), name);
                }
                if record.insert(name, value).is_some() {
                    tracing::warn!("Field '{}' written twice in rule set '{}'", name, rules.name());
                }
            }
        }

        tracing::debug!(
            "Extracted {} fields ({} empty) using rule set '{}'",
            record.len(),
            record.empty_field_count(),
            rules.name()
        );
        record
    }
}

/// Parses one registry page of the given kind.
pub fn parse_document(html: &str, kind: DocumentKind) -> Result<ParsedRecord, ParseError> {
    RecordExtractor::new().parse(html, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::field;
    use crate::rules::{certificate, FieldRule};
    use crate::test_fixtures;
    use pretty_assertions::assert_eq;

    fn fixture(kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Patent => test_fixtures::PATENT_HTML,
            DocumentKind::ComputerProgram => test_fixtures::PROGRAM_HTML,
            DocumentKind::Database => test_fixtures::DATABASE_HTML,
            DocumentKind::Topology => test_fixtures::TOPOLOGY_HTML,
        }
    }

    #[test]
    fn test_not_found_for_every_kind() {
        for kind in DocumentKind::ALL {
            let result = parse_document(test_fixtures::NOT_FOUND_HTML, kind);
            assert_eq!(result, Err(ParseError::DocumentNotFound), "{}", kind);
        }
    }

    #[test]
    fn test_key_set_matches_rule_set() {
        for kind in DocumentKind::ALL {
            let record = parse_document(fixture(kind), kind).unwrap();
            let mut expected = RuleSet::for_kind(kind).field_names();
            expected.sort_unstable();
            let actual: Vec<_> = record.field_names().collect();
            assert_eq!(actual, expected, "{}", kind);
        }
    }

    #[test]
    fn test_key_set_complete_on_empty_page() {
        for kind in DocumentKind::ALL {
            let record = parse_document("<html><body></body></html>", kind).unwrap();
            assert_eq!(record.len(), RuleSet::for_kind(kind).field_names().len());
            assert_eq!(record.empty_field_count(), record.len(), "{}", kind);
        }
    }

    #[test]
    fn test_parsing_is_deterministic() {
        for kind in DocumentKind::ALL {
            let first = parse_document(fixture(kind), kind).unwrap();
            let second = parse_document(fixture(kind), kind).unwrap();
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }

    #[test]
    fn test_patent_record() {
        let record = parse_document(test_fixtures::PATENT_HTML, DocumentKind::Patent).unwrap();

        assert_eq!(record.kind(), DocumentKind::Patent);
        assert_eq!(record.text(field::REG_NUMBER), Some("2384123"));
        assert_eq!(record.text(field::REG_DATE), Some("15.03.2010"));
        assert_eq!(record.text(field::APP_NUMBER), Some("2008145123/14"));
        assert_eq!(record.text(field::APP_DATE), Some("17.11.2008"));
        assert_eq!(record.text(field::PUB_DATE), Some("20.03.2010"));
        assert_eq!(record.text(field::TITLE), Some("СПОСОБ ПОЛУЧЕНИЯ ВОДОРОДА"));

        let history = record.amendments().expect("patent records carry amendments");
        assert_eq!(history.len(), 4);
        let dates: Vec<_> = history.iter().filter_map(|n| n.published_on()).collect();
        assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]), "history not sorted: {:?}", dates);
        assert_eq!(record.current_holders(), Some("Публичное акционерное общество \"Лютик\" (RU)"));
    }

    #[test]
    fn test_missing_parties_stay_empty_when_only_a_notice_names_them() {
        let record = parse_document(test_fixtures::CORRECTION_ONLY_HTML, DocumentKind::Patent).unwrap();

        assert_eq!(record.text(field::REG_NUMBER), Some("2400001"));
        assert_eq!(record.text(field::AUTHORS), Some(""));
        assert_eq!(record.text(field::HOLDERS), Some(""));
        assert_eq!(record.text(field::PUB_DATE), Some(""));

        let history = record.amendments().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.notices()[0].pub_date, "10.05.2010");
        assert_eq!(record.current_holders(), Some("Верно (RU)"));
    }

    #[test]
    fn test_database_without_size_block() {
        let html = test_fixtures::DATABASE_HTML.replace("Объем базы данных:", "");
        let record = parse_document(&html, DocumentKind::Database).unwrap();
        assert_eq!(record.text(field::SIZE), Some(""));
        assert_eq!(record.text(field::TOOL), Some("PostgreSQL 9.1"));
    }

    #[test]
    fn test_derived_sets_agree_with_base_on_shared_fields() {
        let extractor = RecordExtractor::new();
        for (kind, html) in [
            (DocumentKind::ComputerProgram, test_fixtures::PROGRAM_HTML),
            (DocumentKind::Database, test_fixtures::DATABASE_HTML),
        ] {
            let document = NormalizedDocument::new(html).unwrap();
            let derived = extractor.extract(&document, kind);
            let base = extractor.extract(&document, DocumentKind::Topology);

            for name in RuleSet::for_kind(kind).field_names() {
                if name == field::TOOL || name == field::SIZE {
                    continue;
                }
                assert_eq!(derived.get(name), base.get(name), "{} / {}", kind, name);
            }
        }
    }

    #[test]
    fn test_overridden_fields_are_kind_specific() {
        let document = NormalizedDocument::new(test_fixtures::DATABASE_HTML).unwrap();
        let extractor = RecordExtractor::new();

        let as_database = extractor.extract(&document, DocumentKind::Database);
        let as_program = extractor.extract(&document, DocumentKind::ComputerProgram);

        assert_eq!(as_database.text(field::SIZE), Some("120 Мб"));
        assert_eq!(as_program.text(field::SIZE), Some(""));
        assert_eq!(as_program.text(field::TOOL), Some(""));
    }

    #[test]
    fn test_custom_rule_set_states_only_deltas() {
        fn fixed_size(_: &NormalizedDocument) -> String {
            "1 Мб".to_string()
        }

        let custom = RuleSet::for_kind(DocumentKind::Topology).derive("custom", vec![FieldRule::text(field::SIZE, fixed_size)]);
        let document = NormalizedDocument::new(test_fixtures::TOPOLOGY_HTML).unwrap();
        let record = RecordExtractor::new().extract_with_rules(&document, DocumentKind::Topology, &custom);

        assert_eq!(record.text(field::SIZE), Some("1 Мб"));
        assert_eq!(record.text(field::TITLE), Some(certificate::title(&document).as_str()));
        assert_eq!(record.len(), RuleSet::for_kind(DocumentKind::Topology).field_names().len());
    }

    #[test]
    fn test_topology_record() {
        let record = parse_document(test_fixtures::TOPOLOGY_HTML, DocumentKind::Topology).unwrap();
        assert_eq!(record.text(field::REG_NUMBER), Some("2015630042"));
        assert_eq!(record.text(field::TITLE), Some("Микросхема управления питанием"));
        assert_eq!(record.text(field::TOOL), Some(""));
        assert_eq!(record.list(field::HOLDERS_AMENDED), Some(&[][..]));
        assert!(record.amendments().is_none());
    }
}
