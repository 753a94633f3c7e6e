//! The built, immutable search configuration.

use crate::core::builder::declaration::{FacetKind, WeightedField};
use crate::core::builder::sort::SortOption;
use crate::core::error::{CvSearchError, Result};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// A facet field of the built configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetField {
    pub name: String,
    pub kind: FacetKind,
}

/// Search configuration handed to the query and rendering layers.
///
/// Only the builder can create one, so every instance has passed
/// validation. Fields are private to keep it immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfiguration {
    search_fields: Vec<WeightedField>,
    result_fields: Vec<String>,
    facet_fields: Vec<FacetField>,
    disjunctive_facets: Vec<String>,
    sort_options: Vec<SortOption>,
}

/// Checked reference to a result field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultFieldRef(String);

/// Checked reference to a search field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchFieldRef(String);

/// Checked reference to a facet field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FacetFieldRef(String);

macro_rules! field_ref_accessors {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

field_ref_accessors!(ResultFieldRef, SearchFieldRef, FacetFieldRef);

impl SearchConfiguration {
    pub(crate) fn new(
        search_fields: Vec<WeightedField>,
        result_fields: Vec<String>,
        facet_fields: Vec<FacetField>,
        disjunctive_facets: Vec<String>,
        sort_options: Vec<SortOption>,
    ) -> Self {
        Self {
            search_fields,
            result_fields,
            facet_fields,
            disjunctive_facets,
            sort_options,
        }
    }

    pub fn search_fields(&self) -> &[WeightedField] {
        &self.search_fields
    }

    /// Weight of a search field, if it is searched at all
    pub fn search_weight(&self, name: &str) -> Option<f64> {
        self.search_fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.weight)
    }

    pub fn result_fields(&self) -> &[String] {
        &self.result_fields
    }

    pub fn facet_fields(&self) -> &[FacetField] {
        &self.facet_fields
    }

    /// Facet field names in declaration order
    pub fn facet_field_names(&self) -> Vec<&str> {
        self.facet_fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn disjunctive_facets(&self) -> &[String] {
        &self.disjunctive_facets
    }

    pub fn is_disjunctive(&self, facet: &str) -> bool {
        self.disjunctive_facets.iter().any(|f| f == facet)
    }

    pub fn sort_options(&self) -> &[SortOption] {
        &self.sort_options
    }

    /// Resolve `name` to a result field reference
    pub fn result_field(&self, name: &str) -> Result<ResultFieldRef> {
        if self.result_fields.iter().any(|f| f == name) {
            Ok(ResultFieldRef(name.to_string()))
        } else {
            Err(unknown_reference(name, "result field", &self.result_fields))
        }
    }

    /// Resolve `name` to a search field reference
    pub fn search_field(&self, name: &str) -> Result<SearchFieldRef> {
        if self.search_weight(name).is_some() {
            Ok(SearchFieldRef(name.to_string()))
        } else {
            let known: Vec<String> = self.search_fields.iter().map(|f| f.name.clone()).collect();
            Err(unknown_reference(name, "search field", &known))
        }
    }

    /// Resolve `name` to a facet field reference
    pub fn facet_field(&self, name: &str) -> Result<FacetFieldRef> {
        if self.facet_fields.iter().any(|f| f.name == name) {
            Ok(FacetFieldRef(name.to_string()))
        } else {
            let known: Vec<String> = self.facet_fields.iter().map(|f| f.name.clone()).collect();
            Err(unknown_reference(name, "facet field", &known))
        }
    }

    /// View using the key names of the search UI framework's `searchQuery`
    pub fn search_query(&self) -> SearchQuery<'_> {
        SearchQuery {
            search_fields: WeightsView(&self.search_fields),
            result_fields: RawView(&self.result_fields),
            facets: FacetsView(&self.facet_fields),
            disjunctive_facets: &self.disjunctive_facets,
        }
    }
}

fn unknown_reference(name: &str, kind: &str, known: &[String]) -> CvSearchError {
    CvSearchError::config(format!(
        "'{name}' is not a configured {kind} (known: {})",
        known.join(", ")
    ))
}

/// Framework-native form of the configuration
#[derive(Debug, Serialize)]
pub struct SearchQuery<'a> {
    search_fields: WeightsView<'a>,
    result_fields: RawView<'a>,
    facets: FacetsView<'a>,
    #[serde(rename = "disjunctiveFacets")]
    disjunctive_facets: &'a [String],
}

#[derive(Debug)]
struct WeightsView<'a>(&'a [WeightedField]);

#[derive(Debug)]
struct RawView<'a>(&'a [String]);

#[derive(Debug)]
struct FacetsView<'a>(&'a [FacetField]);

#[derive(Serialize)]
struct Weight {
    weight: f64,
}

#[derive(Serialize)]
struct Raw {
    raw: Empty,
}

#[derive(Serialize)]
struct Empty {}

#[derive(Serialize)]
struct FacetType {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl Serialize for WeightsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in self.0 {
            map.serialize_entry(&field.name, &Weight { weight: field.weight })?;
        }
        map.end()
    }
}

impl Serialize for RawView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for name in self.0 {
            map.serialize_entry(name, &Raw { raw: Empty {} })?;
        }
        map.end()
    }
}

impl Serialize for FacetsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for facet in self.0 {
            map.serialize_entry(
                &facet.name,
                &FacetType {
                    kind: facet.kind.as_str(),
                },
            )?;
        }
        map.end()
    }
}

impl Serialize for SearchConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SearchConfiguration", 5)?;
        state.serialize_field("searchFields", &WeightsView(&self.search_fields))?;
        state.serialize_field("resultFields", &RawView(&self.result_fields))?;
        state.serialize_field("facetFields", &FacetsView(&self.facet_fields))?;
        state.serialize_field("disjunctiveFacets", &self.disjunctive_facets)?;
        state.serialize_field("sortOptions", &self.sort_options)?;
        state.end()
    }
}
