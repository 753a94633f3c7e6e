// Integration tests for layout resolution

use crate::common::{create_test_services, services_from_toml};
use cvsearch::core::layout::{Slot, Visibility, Widget};

#[test]
fn test_one_facet_widget_per_facet_field() {
    let services = create_test_services();
    assert_eq!(
        services.layout.facet_fields(),
        services.search.facet_field_names()
    );
}

#[test]
fn test_after_search_widgets() {
    let services = create_test_services();
    let after_search: Vec<&str> = services
        .layout
        .placements()
        .filter(|(_, p)| p.visibility == Visibility::AfterSearch)
        .map(|(_, p)| p.widget.name())
        .collect();
    assert_eq!(after_search, ["Sorting", "PagingInfo", "ResultsPerPage"]);
}

#[test]
fn test_results_have_no_url_by_default() {
    let services = create_test_services();
    match &services.layout.slot(Slot::BodyContent)[0].widget {
        Widget::Results {
            title_field,
            url_field,
            thumbnail_field,
            should_track_click_through,
        } => {
            assert_eq!(title_field.as_str(), "generated_text");
            assert!(url_field.is_none());
            assert!(thumbnail_field.is_none());
            assert!(*should_track_click_through);
        }
        other => panic!("expected Results, got {other:?}"),
    }
}

#[test]
fn test_search_box_uses_ui_tunables() {
    let services = services_from_toml(
        r#"
        [ui]
        autocomplete_minimum_characters = 2
        autocomplete_suggestion_size = 8
        debounce_length_ms = 150
    "#,
    )
    .unwrap();

    match &services.layout.slot(Slot::Header)[0].widget {
        Widget::SearchBox {
            autocomplete_minimum_characters,
            debounce_length,
            autocomplete_suggestions,
            ..
        } => {
            assert_eq!(*autocomplete_minimum_characters, 2);
            assert_eq!(*debounce_length, 150);
            assert_eq!(autocomplete_suggestions.size, 8);
            assert_eq!(autocomplete_suggestions.field.as_str(), "generated_text");
        }
        other => panic!("expected SearchBox, got {other:?}"),
    }
}

#[test]
fn test_renamed_result_field_caught_at_build_time() {
    // Result fields no longer carry the title field the layout points at
    let err = services_from_toml(
        r#"
        [declaration]
        result_fields = ["duration", "age"]
        facets = [{ name = "age" }]
        search_fields = [{ name = "generated_text", weight = 1.0 }]
    "#,
    )
    .unwrap_err();
    assert!(err.is_configuration_error());
    assert!(err
        .message()
        .contains("'generated_text' is not a configured result field"));
}

#[test]
fn test_layout_url_field_from_config() {
    let services = services_from_toml(
        r#"
        [layout.results]
        url_field = "accent"
    "#,
    )
    .unwrap();

    match &services.layout.slot(Slot::BodyContent)[0].widget {
        Widget::Results { url_field, .. } => {
            assert_eq!(url_field.as_ref().unwrap().as_str(), "accent")
        }
        other => panic!("expected Results, got {other:?}"),
    }
}
