// src/document/kind.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// The registry document kinds the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Invention patent.
    Patent,
    /// Computer program registration certificate ("программа для ЭВМ").
    ComputerProgram,
    /// Database registration certificate.
    Database,
    /// Integrated circuit topology registration certificate.
    Topology,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Patent,
        DocumentKind::ComputerProgram,
        DocumentKind::Database,
        DocumentKind::Topology,
    ];

    /// Name of the registry database the document is published in.
    pub fn registry_code(self) -> &'static str {
        match self {
            DocumentKind::Patent => "RUPAT",
            DocumentKind::ComputerProgram => "EVM",
            DocumentKind::Database => "DB",
            DocumentKind::Topology => "TIMS",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Patent => "patent",
            DocumentKind::ComputerProgram => "computer_program",
            DocumentKind::Database => "database",
            DocumentKind::Topology => "topology",
        }
    }

    /// Certificates carry as-amended variants; patents carry an amendment history.
    pub fn is_certificate(self) -> bool {
        !matches!(self, DocumentKind::Patent)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
