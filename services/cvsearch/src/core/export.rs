//! Document handed to the search UI framework.

use crate::core::builder::{SearchQuery, SortOption};
use crate::core::layout::Layout;
use crate::core::services::Services;
use serde::Serialize;

/// Connector settings as the framework expects them
#[derive(Debug, Serialize)]
pub struct ConnectorSettings<'a> {
    pub host: &'a str,
    pub index: &'a str,
}

/// Complete search UI configuration
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUiDocument<'a> {
    pub always_search_on_initial_load: bool,
    pub connector: ConnectorSettings<'a>,
    pub search_query: SearchQuery<'a>,
    pub sort_options: &'a [SortOption],
    pub layout: &'a Layout,
}

impl<'a> SearchUiDocument<'a> {
    /// Assemble the document from already-built services
    pub fn assemble(services: &'a Services) -> Self {
        let config = &services.config;
        Self {
            always_search_on_initial_load: config.ui.always_search_on_initial_load,
            connector: ConnectorSettings {
                host: &config.connector.host,
                index: &config.connector.index,
            },
            search_query: services.search.search_query(),
            sort_options: services.search.sort_options(),
            layout: &services.layout,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
