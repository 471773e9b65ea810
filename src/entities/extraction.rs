//! Options understood by the extraction service.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Tables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenditionType {
    Tables,
    Figures,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStructure {
    Csv,
    Xlsx,
}

/// What the service should extract from every document.
///
/// The default asks for text and tables, table renditions, and table structure as spreadsheets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub elements_to_extract: Vec<ElementType>,
    pub rendition_elements: Vec<RenditionType>,
    pub table_structure: TableStructure,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            elements_to_extract: vec![ElementType::Text, ElementType::Tables],
            rendition_elements: vec![RenditionType::Tables],
            table_structure: TableStructure::Xlsx,
        }
    }
}

impl ExtractionConfig {
    /// Options as `(name, value)` pairs, ready to be sent as query parameters.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("elements", join(&self.elements_to_extract)),
            ("renditions", join(&self.rendition_elements)),
            ("table_structure", self.table_structure.to_string()),
        ]
    }
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Tables => write!(f, "tables"),
        }
    }
}

impl Display for RenditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tables => write!(f, "tables"),
            Self::Figures => write!(f, "figures"),
        }
    }
}

impl Display for TableStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Xlsx => write!(f, "xlsx"),
        }
    }
}
