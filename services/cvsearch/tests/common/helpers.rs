// Helper functions for integration tests

use cvsearch::core::builder::{FacetDeclaration, SearchDeclaration};
use cvsearch::core::config::Config;
use cvsearch::core::services::Services;
use std::sync::Arc;

/// Services built from the default configuration
#[allow(dead_code)]
pub fn create_test_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()).expect("default configuration must be valid"))
}

/// Services built from a TOML config string
#[allow(dead_code)]
pub fn services_from_toml(toml: &str) -> cvsearch::Result<Services> {
    let config: Config = toml::from_str(toml)?;
    config.validate()?;
    Services::new(config)
}

/// The built-in declaration with its facets replaced by `facets`
///
/// Disjunctive facets are cleared so only the facet list is under test.
#[allow(dead_code)]
pub fn declaration_with_facets(facets: &[&str]) -> SearchDeclaration {
    let mut decl = SearchDeclaration::cv_transcriptions();
    decl.facets = facets.iter().map(|f| FacetDeclaration::value(*f)).collect();
    decl.disjunctive_facets.clear();
    decl
}
