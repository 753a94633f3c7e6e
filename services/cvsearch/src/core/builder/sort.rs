//! Sort options offered by the sort selector widget.

use serde::{Deserialize, Serialize};

/// Identifier of the relevance (unsorted) option
pub const RELEVANCE_ID: &str = "relevance";

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Suffix used in option labels
    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// A single `(field, direction)` sort key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    pub direction: SortDirection,
}

/// One entry of the sort selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    /// Stable identifier (`relevance`, `duration_asc`, ...)
    pub id: String,

    /// Label shown to the user
    pub name: String,

    /// Sort keys; empty means relevance order
    pub value: Vec<SortField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
}

impl SortOption {
    /// Relevance ordering, i.e. no explicit sort
    pub fn relevance() -> Self {
        Self {
            id: RELEVANCE_ID.to_string(),
            name: "Relevance".to_string(),
            value: Vec::new(),
            direction: None,
        }
    }

    /// Sort on a single field
    pub fn by_field(field: &str, direction: SortDirection) -> Self {
        Self {
            id: format!("{field}_{}", direction.as_str()),
            name: format!("{} {}", capitalize_first(field), direction.label()),
            value: vec![SortField {
                field: field.to_string(),
                direction,
            }],
            direction: Some(direction),
        }
    }

    pub fn is_relevance(&self) -> bool {
        self.value.is_empty()
    }
}

/// Expand sortable field names into selector options.
///
/// Relevance comes first, then an ascending and a descending option for
/// each field in declaration order.
pub fn build_sort_options<S: AsRef<str>>(sort_fields: &[S]) -> Vec<SortOption> {
    let mut options = Vec::with_capacity(1 + sort_fields.len() * 2);
    options.push(SortOption::relevance());
    for field in sort_fields {
        let field = field.as_ref();
        options.push(SortOption::by_field(field, SortDirection::Asc));
        options.push(SortOption::by_field(field, SortDirection::Desc));
    }
    options
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
