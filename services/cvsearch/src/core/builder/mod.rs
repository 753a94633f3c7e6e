//! Configuration builder.
//!
//! Turns a static [`SearchDeclaration`] into the [`SearchConfiguration`]
//! consumed by the query and rendering layers. Every operation validates
//! the part of the declaration it reads, so an authoring mistake surfaces
//! as a `ConfigurationError` at startup instead of an empty widget later.
//!
//! # Example
//!
//! ```
//! use cvsearch::core::builder::{ConfigBuilder, SearchDeclaration};
//!
//! let builder = ConfigBuilder::new(SearchDeclaration::cv_transcriptions());
//! assert_eq!(builder.get_facet_fields().unwrap(), ["age", "gender", "accent"]);
//!
//! let config = builder.get_config().unwrap();
//! assert_eq!(config.search_weight("generated_text"), Some(1.0));
//! ```

pub mod configuration;
pub mod declaration;
pub mod sort;
mod validation;

pub use configuration::{
    FacetField, FacetFieldRef, ResultFieldRef, SearchConfiguration, SearchFieldRef, SearchQuery,
};
pub use declaration::{FacetDeclaration, FacetKind, SearchDeclaration, WeightedField};
pub use sort::{build_sort_options, SortDirection, SortField, SortOption, RELEVANCE_ID};

use crate::core::error::Result;
use crate::core::schema::IndexSchema;

/// Builds the search configuration from a declaration
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    declaration: SearchDeclaration,
    schema: Option<IndexSchema>,
}

impl ConfigBuilder {
    pub fn new(declaration: SearchDeclaration) -> Self {
        Self {
            declaration,
            schema: None,
        }
    }

    /// Also check every referenced field against `schema`
    pub fn with_schema(mut self, schema: IndexSchema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn declaration(&self) -> &SearchDeclaration {
        &self.declaration
    }

    pub fn schema(&self) -> Option<&IndexSchema> {
        self.schema.as_ref()
    }

    /// Declared facet field names, in declaration order
    pub fn get_facet_fields(&self) -> Result<Vec<String>> {
        validation::validate_facets(&self.declaration, self.schema.as_ref())?;
        Ok(self
            .declaration
            .facets
            .iter()
            .map(|f| f.name.clone())
            .collect())
    }

    /// Options for the sort selector: relevance, then asc/desc per sort field
    pub fn build_sort_options_from_config(&self) -> Result<Vec<SortOption>> {
        validation::validate_sort_fields(&self.declaration, self.schema.as_ref())?;
        Ok(build_sort_options(&self.declaration.sort_fields))
    }

    /// Validate the whole declaration and build the configuration
    pub fn get_config(&self) -> Result<SearchConfiguration> {
        validation::validate_declaration(&self.declaration, self.schema.as_ref())?;

        let decl = &self.declaration;
        let facet_fields = decl
            .facets
            .iter()
            .map(|f| FacetField {
                name: f.name.clone(),
                kind: f.kind,
            })
            .collect();

        let config = SearchConfiguration::new(
            decl.search_fields.clone(),
            decl.result_fields.clone(),
            facet_fields,
            decl.disjunctive_facets.clone(),
            build_sort_options(&decl.sort_fields),
        );

        tracing::debug!(
            search_fields = config.search_fields().len(),
            result_fields = config.result_fields().len(),
            facets = config.facet_fields().len(),
            disjunctive = config.disjunctive_facets().len(),
            sort_options = config.sort_options().len(),
            "Search configuration built"
        );

        Ok(config)
    }
}
