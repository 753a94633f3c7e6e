//! Index schema for the remote search index.
//!
//! The schema lists the fields the index stores together with their
//! type. The configuration builder uses it to reject references to fields
//! the index does not have, and the `index-mapping` command renders it as
//! the body of an index-creation request.

use crate::core::error::{CvSearchError, Result};
use crate::core::field_names::validate_field_list;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Index name used by the transcription search deployment
pub const CV_INDEX_NAME: &str = "cv-transcriptions";

/// Value written into demographic fields that were left empty
pub const UNKNOWN_VALUE: &str = "unknown";

/// Storage type of an index field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Analysed full-text field
    Text,
    /// Exact-value string field
    Keyword,
    Float,
    Integer,
}

impl FieldType {
    /// Name used in index mappings
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Keyword => "keyword",
            FieldType::Float => "float",
            FieldType::Integer => "integer",
        }
    }

    /// Whether a text query can match against this field
    pub fn is_searchable(self) -> bool {
        matches!(self, FieldType::Text | FieldType::Keyword)
    }

    /// Whether the field can back a value facet (needs doc values)
    pub fn is_facetable(self) -> bool {
        !matches!(self, FieldType::Text)
    }

    /// Whether results can be ordered by this field
    pub fn is_sortable(self) -> bool {
        !matches!(self, FieldType::Text)
    }
}

/// A single field of the index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Records without this field are not indexed
    #[serde(default)]
    pub required: bool,

    /// Value substituted when a record leaves this field empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            default: None,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Substitute `value` when a record leaves the field empty
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// Shard and replica settings for index creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IndexSettings {
    #[serde(default = "default_shards")]
    pub number_of_shards: u32,

    #[serde(default)]
    pub number_of_replicas: u32,
}

fn default_shards() -> u32 {
    1
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            number_of_shards: default_shards(),
            number_of_replicas: 0,
        }
    }
}

/// Ordered set of index fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SchemaField>", into = "Vec<SchemaField>")]
pub struct IndexSchema {
    fields: Vec<SchemaField>,
}

impl IndexSchema {
    /// Build a schema, rejecting empty, malformed or duplicated fields
    pub fn new(fields: Vec<SchemaField>) -> Result<Self> {
        if fields.is_empty() {
            return Err(CvSearchError::config("index schema declares no fields"));
        }
        validate_field_list(fields.iter().map(|f| f.name.as_str()), "index schema")?;

        if let Some(field) = fields.iter().find(|f| f.required && f.default.is_some()) {
            return Err(CvSearchError::config(format!(
                "schema field '{}' cannot be both required and defaulted",
                field.name
            )));
        }

        Ok(Self { fields })
    }

    /// Schema of the transcription index.
    ///
    /// The demographic fields are keywords so they can back facets.
    pub fn cv_transcriptions() -> Self {
        Self {
            fields: vec![
                SchemaField::new("generated_text", FieldType::Text).required(),
                SchemaField::new("duration", FieldType::Float),
                SchemaField::new("age", FieldType::Keyword).with_default(UNKNOWN_VALUE),
                SchemaField::new("gender", FieldType::Keyword).with_default(UNKNOWN_VALUE),
                SchemaField::new("accent", FieldType::Keyword).with_default(UNKNOWN_VALUE),
            ],
        }
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Body of the index-creation request
    pub fn mapping_body(&self, settings: &IndexSettings) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), json!({ "type": f.field_type.as_str() })))
            .collect();

        json!({
            "settings": {
                "number_of_shards": settings.number_of_shards,
                "number_of_replicas": settings.number_of_replicas,
            },
            "mappings": {
                "properties": properties,
            },
        })
    }
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self::cv_transcriptions()
    }
}

impl TryFrom<Vec<SchemaField>> for IndexSchema {
    type Error = CvSearchError;

    fn try_from(fields: Vec<SchemaField>) -> Result<Self> {
        Self::new(fields)
    }
}

impl From<IndexSchema> for Vec<SchemaField> {
    fn from(schema: IndexSchema) -> Self {
        schema.fields
    }
}
