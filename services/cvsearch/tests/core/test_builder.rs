// Integration tests for the configuration builder

use crate::common::declaration_with_facets;
use cvsearch::core::builder::{ConfigBuilder, SearchDeclaration, SortDirection, WeightedField};
use cvsearch::core::schema::IndexSchema;

#[test]
fn test_demographic_facets_in_order() {
    let builder = ConfigBuilder::new(SearchDeclaration::cv_transcriptions());
    assert_eq!(
        builder.get_facet_fields().unwrap(),
        vec!["age", "gender", "accent"]
    );
}

#[test]
fn test_facet_fields_match_declaration() {
    let cases: &[&[&str]] = &[
        &["age"],
        &["accent", "age"],
        &["gender", "accent", "age"],
        &["age", "gender", "accent"],
    ];

    for facets in cases {
        let builder = ConfigBuilder::new(declaration_with_facets(facets))
            .with_schema(IndexSchema::cv_transcriptions());
        let fields = builder.get_facet_fields().unwrap();
        assert_eq!(&fields, facets, "facet order must follow declaration");
    }
}

#[test]
fn test_missing_facet_list_is_configuration_error() {
    let builder = ConfigBuilder::new(declaration_with_facets(&[]));
    let err = builder.get_facet_fields().unwrap_err();
    assert!(err.is_configuration_error());
    assert!(err.message().contains("facets declares no fields"));
}

#[test]
fn test_weights_reproduced_unmodified() {
    let config = ConfigBuilder::new(SearchDeclaration::cv_transcriptions())
        .get_config()
        .unwrap();

    assert_eq!(config.search_weight("generated_text"), Some(1.0));
    assert_eq!(config.search_weight("age"), Some(0.5));
    assert_eq!(config.search_weight("gender"), Some(0.5));
    assert_eq!(config.search_weight("accent"), Some(0.5));
    assert_eq!(config.search_weight("duration"), None);
    assert_eq!(config.search_fields().len(), 4);
}

#[test]
fn test_unusual_weights_kept_as_declared() {
    let mut decl = SearchDeclaration::cv_transcriptions();
    decl.search_fields = vec![
        WeightedField::new("generated_text", 0.125),
        WeightedField::new("accent", 10.0),
    ];
    let config = ConfigBuilder::new(decl).get_config().unwrap();
    assert_eq!(config.search_weight("generated_text"), Some(0.125));
    assert_eq!(config.search_weight("accent"), Some(10.0));
}

#[test]
fn test_empty_search_fields_rejected() {
    let mut decl = SearchDeclaration::cv_transcriptions();
    decl.search_fields.clear();

    let err = ConfigBuilder::new(decl).get_config().unwrap_err();
    assert!(err.is_configuration_error());
}

#[test]
fn test_empty_result_fields_rejected() {
    let mut decl = SearchDeclaration::cv_transcriptions();
    decl.result_fields.clear();

    let err = ConfigBuilder::new(decl).get_config().unwrap_err();
    assert!(err.message().contains("result_fields declares no fields"));
}

#[test]
fn test_disjunctive_outside_facets_rejected() {
    let mut decl = declaration_with_facets(&["age", "gender"]);
    decl.disjunctive_facets = vec!["age".to_string(), "accent".to_string()];

    let err = ConfigBuilder::new(decl).get_config().unwrap_err();
    assert!(err.is_configuration_error());
    assert!(err.message().contains("'accent'"));
}

#[test]
fn test_disjunctive_subset_accepted() {
    let mut decl = declaration_with_facets(&["age", "gender", "accent"]);
    decl.disjunctive_facets = vec!["gender".to_string()];

    let config = ConfigBuilder::new(decl).get_config().unwrap();
    assert!(config.is_disjunctive("gender"));
    assert!(!config.is_disjunctive("age"));
    for facet in config.disjunctive_facets() {
        assert!(config.facet_field_names().contains(&facet.as_str()));
    }
}

#[test]
fn test_sort_options_idempotent_and_ordered() {
    let mut decl = SearchDeclaration::cv_transcriptions();
    decl.sort_fields = vec!["duration".to_string(), "age".to_string()];
    let builder = ConfigBuilder::new(decl).with_schema(IndexSchema::cv_transcriptions());

    let first = builder.build_sort_options_from_config().unwrap();
    let second = builder.build_sort_options_from_config().unwrap();
    assert_eq!(first, second);

    let labels: Vec<&str> = first.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        labels,
        ["Relevance", "Duration ASC", "Duration DESC", "Age ASC", "Age DESC"]
    );
    assert_eq!(first[4].direction, Some(SortDirection::Desc));
}

#[test]
fn test_sort_on_unknown_field_rejected_with_schema() {
    let mut decl = SearchDeclaration::cv_transcriptions();
    decl.sort_fields = vec!["uploaded_at".to_string()];

    let builder = ConfigBuilder::new(decl).with_schema(IndexSchema::cv_transcriptions());
    assert!(builder.build_sort_options_from_config().is_err());
}

#[test]
fn test_config_sort_options_match_operation() {
    let builder = ConfigBuilder::new(SearchDeclaration::cv_transcriptions());
    let config = builder.get_config().unwrap();
    assert_eq!(
        config.sort_options(),
        builder.build_sort_options_from_config().unwrap().as_slice()
    );
}

#[test]
fn test_configuration_json_matches_framework_contract() {
    let config = ConfigBuilder::new(SearchDeclaration::cv_transcriptions())
        .get_config()
        .unwrap();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(
        value["searchFields"],
        serde_json::json!({
            "generated_text": { "weight": 1.0 },
            "age": { "weight": 0.5 },
            "gender": { "weight": 0.5 },
            "accent": { "weight": 0.5 }
        })
    );
    assert_eq!(value["resultFields"]["duration"], serde_json::json!({ "raw": {} }));
    assert_eq!(value["facetFields"]["accent"], serde_json::json!({ "type": "value" }));
    assert_eq!(
        value["disjunctiveFacets"],
        serde_json::json!(["age", "gender", "accent"])
    );
}
