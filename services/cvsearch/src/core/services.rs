//! Unified service container for cvsearch
//!
//! Builds the search configuration, layout and schema once, at startup,
//! and shares them read-only with every command.

use crate::core::builder::{ConfigBuilder, SearchConfiguration};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::layout::Layout;
use crate::core::schema::IndexSchema;
use std::sync::Arc;

/// Unified services container
#[derive(Debug, Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Fields of the remote index
    pub schema: Arc<IndexSchema>,

    /// Built search configuration
    pub search: Arc<SearchConfiguration>,

    /// Resolved widget layout
    pub layout: Arc<Layout>,
}

impl Services {
    /// Create services from configuration, using the transcription schema
    pub fn new(config: Config) -> Result<Self> {
        Self::with_schema(config, IndexSchema::cv_transcriptions())
    }

    /// Create services from configuration and an explicit index schema
    ///
    /// Fails with a configuration error if the declaration or layout
    /// reference anything the schema or configuration does not have.
    pub fn with_schema(config: Config, schema: IndexSchema) -> Result<Self> {
        let search = ConfigBuilder::new(config.declaration.clone())
            .with_schema(schema.clone())
            .get_config()?;
        let layout = Layout::resolve(&config.layout, &config.ui, &search)?;

        tracing::info!(
            index = %config.connector.index,
            facets = search.facet_fields().len(),
            "Search interface configured"
        );

        Ok(Self {
            config: Arc::new(config),
            schema: Arc::new(schema),
            search: Arc::new(search),
            layout: Arc::new(layout),
        })
    }

    /// Builder over the configured declaration, for the per-list operations
    pub fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new(self.config.declaration.clone()).with_schema((*self.schema).clone())
    }
}
