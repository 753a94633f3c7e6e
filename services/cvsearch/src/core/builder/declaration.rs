//! Static field declarations the search configuration is derived from.

use serde::{Deserialize, Serialize};

/// A searchable field and its relevance weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedField {
    pub name: String,
    pub weight: f64,
}

impl WeightedField {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Kind of facet rendered for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetKind {
    /// Discrete value facet (one checkbox per distinct value)
    #[default]
    Value,
}

impl FacetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FacetKind::Value => "value",
        }
    }
}

/// A field exposed as a facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetDeclaration {
    pub name: String,
    #[serde(default)]
    pub kind: FacetKind,
}

impl FacetDeclaration {
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FacetKind::Value,
        }
    }
}

/// Declared inputs of the configuration builder.
///
/// Every list keeps declaration order; the order is carried through to
/// the built configuration and to the rendered widgets. A list left out
/// of a config file section deserializes as empty and is then rejected
/// by the builder, except for `disjunctive_facets` and `sort_fields`
/// which may legitimately be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDeclaration {
    #[serde(default)]
    pub search_fields: Vec<WeightedField>,

    #[serde(default)]
    pub result_fields: Vec<String>,

    #[serde(default)]
    pub facets: Vec<FacetDeclaration>,

    #[serde(default)]
    pub disjunctive_facets: Vec<String>,

    /// Fields offered in the sort selector, in display order
    #[serde(default)]
    pub sort_fields: Vec<String>,
}

impl SearchDeclaration {
    /// Declaration of the transcription search interface
    pub fn cv_transcriptions() -> Self {
        let demographics = ["age", "gender", "accent"];

        let mut search_fields = vec![WeightedField::new("generated_text", 1.0)];
        search_fields.extend(demographics.iter().map(|f| WeightedField::new(*f, 0.5)));

        Self {
            search_fields,
            result_fields: ["generated_text", "duration", "age", "gender", "accent"]
                .iter()
                .map(|f| f.to_string())
                .collect(),
            facets: demographics
                .iter()
                .map(|f| FacetDeclaration::value(*f))
                .collect(),
            disjunctive_facets: demographics.iter().map(|f| f.to_string()).collect(),
            sort_fields: vec!["duration".to_string()],
        }
    }
}

impl Default for SearchDeclaration {
    fn default() -> Self {
        Self::cv_transcriptions()
    }
}
