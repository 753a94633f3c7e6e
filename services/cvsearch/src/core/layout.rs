//! Widget layout of the search page.
//!
//! A [`LayoutDeclaration`] names fields as plain strings. Resolving it
//! against a built [`SearchConfiguration`] turns every name into a checked
//! reference, so a widget can never point at a field the configuration
//! does not carry.

use crate::core::builder::{
    FacetFieldRef, ResultFieldRef, SearchConfiguration, SearchFieldRef, SortOption,
};
use crate::core::config::UiConfig;
use crate::core::error::{CvSearchError, Result};
use serde::{Deserialize, Serialize};

/// Slots of the page layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Header,
    SideContent,
    BodyContent,
    BodyHeader,
    BodyFooter,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::Header,
        Slot::SideContent,
        Slot::BodyContent,
        Slot::BodyHeader,
        Slot::BodyFooter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Header => "header",
            Slot::SideContent => "sideContent",
            Slot::BodyContent => "bodyContent",
            Slot::BodyHeader => "bodyHeader",
            Slot::BodyFooter => "bodyFooter",
        }
    }
}

/// When a widget is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[default]
    Always,
    /// Only once a search has been run
    AfterSearch,
}

/// How selected values of one facet combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// OR across selected values (disjunctive facets)
    Any,
    /// AND across selected values
    All,
}

/// Results section of the search box dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResults {
    pub link_target: String,
    pub section_title: String,
    pub title_field: ResultFieldRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_field: Option<ResultFieldRef>,
    pub should_track_click_through: bool,
}

/// Suggestions section of the search box dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteSuggestions {
    pub section_title: String,
    pub suggester: String,
    pub field: SearchFieldRef,
    pub size: u32,
}

/// A widget with its resolved props
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all_fields = "camelCase")]
pub enum Widget {
    SearchBox {
        autocomplete_minimum_characters: u32,
        debounce_length: u64,
        autocomplete_results: AutocompleteResults,
        autocomplete_suggestions: AutocompleteSuggestions,
    },
    Sorting {
        label: String,
        sort_options: Vec<SortOption>,
    },
    Facet {
        field: FacetFieldRef,
        label: String,
        filter_type: FilterType,
    },
    Results {
        title_field: ResultFieldRef,
        #[serde(skip_serializing_if = "Option::is_none")]
        url_field: Option<ResultFieldRef>,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumbnail_field: Option<ResultFieldRef>,
        should_track_click_through: bool,
    },
    PagingInfo,
    ResultsPerPage {
        options: Vec<u32>,
    },
    Paging,
}

impl Widget {
    /// Component name of the widget
    pub fn name(&self) -> &'static str {
        match self {
            Widget::SearchBox { .. } => "SearchBox",
            Widget::Sorting { .. } => "Sorting",
            Widget::Facet { .. } => "Facet",
            Widget::Results { .. } => "Results",
            Widget::PagingInfo => "PagingInfo",
            Widget::ResultsPerPage { .. } => "ResultsPerPage",
            Widget::Paging => "Paging",
        }
    }
}

/// A widget placed in a slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    #[serde(flatten)]
    pub widget: Widget,
    pub visibility: Visibility,
}

impl Placement {
    fn always(widget: Widget) -> Self {
        Self {
            widget,
            visibility: Visibility::Always,
        }
    }

    fn after_search(widget: Widget) -> Self {
        Self {
            widget,
            visibility: Visibility::AfterSearch,
        }
    }
}

/// Result list props, with field names as declared
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultsDeclaration {
    #[serde(default = "default_title_field")]
    pub title_field: String,

    /// Field holding a link for each result; none by default
    #[serde(default)]
    pub url_field: Option<String>,

    #[serde(default)]
    pub thumbnail_field: Option<String>,

    #[serde(default = "default_true")]
    pub track_click_through: bool,
}

/// Search box dropdown props, with field names as declared
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AutocompleteDeclaration {
    #[serde(default = "default_title_field")]
    pub title_field: String,

    #[serde(default)]
    pub url_field: Option<String>,

    #[serde(default = "default_link_target")]
    pub link_target: String,

    #[serde(default = "default_results_title")]
    pub results_section_title: String,

    #[serde(default = "default_suggestions_title")]
    pub suggestions_section_title: String,

    /// Name of the completion suggester in the index
    #[serde(default = "default_suggester")]
    pub suggester: String,

    #[serde(default = "default_title_field")]
    pub suggestion_field: String,

    #[serde(default = "default_true")]
    pub track_click_through: bool,
}

/// Declared layout props
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct LayoutDeclaration {
    #[serde(default)]
    pub results: ResultsDeclaration,

    #[serde(default)]
    pub autocomplete: AutocompleteDeclaration,
}

fn default_title_field() -> String {
    "generated_text".to_string()
}

fn default_link_target() -> String {
    "_blank".to_string()
}

fn default_results_title() -> String {
    "Results".to_string()
}

fn default_suggestions_title() -> String {
    "Suggestions".to_string()
}

fn default_suggester() -> String {
    "suggest".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ResultsDeclaration {
    fn default() -> Self {
        Self {
            title_field: default_title_field(),
            url_field: None,
            thumbnail_field: None,
            track_click_through: true,
        }
    }
}

impl Default for AutocompleteDeclaration {
    fn default() -> Self {
        Self {
            title_field: default_title_field(),
            url_field: None,
            link_target: default_link_target(),
            results_section_title: default_results_title(),
            suggestions_section_title: default_suggestions_title(),
            suggester: default_suggester(),
            suggestion_field: default_title_field(),
            track_click_through: true,
        }
    }
}

/// Resolved page layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub header: Vec<Placement>,
    pub side_content: Vec<Placement>,
    pub body_content: Vec<Placement>,
    pub body_header: Vec<Placement>,
    pub body_footer: Vec<Placement>,
}

fn optional_result_field(
    config: &SearchConfiguration,
    name: Option<&String>,
) -> Result<Option<ResultFieldRef>> {
    name.map(|n| config.result_field(n)).transpose()
}

impl Layout {
    /// Bind the declared widgets to the configuration
    pub fn resolve(
        decl: &LayoutDeclaration,
        ui: &UiConfig,
        config: &SearchConfiguration,
    ) -> Result<Self> {
        let auto = &decl.autocomplete;
        if auto.suggester.trim().is_empty() {
            return Err(CvSearchError::config("autocomplete suggester name is empty"));
        }
        if auto.link_target.trim().is_empty() {
            return Err(CvSearchError::config("autocomplete link target is empty"));
        }

        let search_box = Widget::SearchBox {
            autocomplete_minimum_characters: ui.autocomplete_minimum_characters,
            debounce_length: ui.debounce_length_ms,
            autocomplete_results: AutocompleteResults {
                link_target: auto.link_target.clone(),
                section_title: auto.results_section_title.clone(),
                title_field: config.result_field(&auto.title_field)?,
                url_field: optional_result_field(config, auto.url_field.as_ref())?,
                should_track_click_through: auto.track_click_through,
            },
            autocomplete_suggestions: AutocompleteSuggestions {
                section_title: auto.suggestions_section_title.clone(),
                suggester: auto.suggester.clone(),
                field: config.search_field(&auto.suggestion_field)?,
                size: ui.autocomplete_suggestion_size,
            },
        };

        let mut side_content = Vec::with_capacity(1 + config.facet_fields().len());
        // A selector holding only the relevance option is not worth showing
        if config.sort_options().iter().any(|o| !o.is_relevance()) {
            side_content.push(Placement::after_search(Widget::Sorting {
                label: ui.sort_label.clone(),
                sort_options: config.sort_options().to_vec(),
            }));
        }
        for facet in config.facet_fields() {
            let filter_type = if config.is_disjunctive(&facet.name) {
                FilterType::Any
            } else {
                FilterType::All
            };
            side_content.push(Placement::always(Widget::Facet {
                field: config.facet_field(&facet.name)?,
                label: facet.name.clone(),
                filter_type,
            }));
        }

        let results = &decl.results;
        if results.url_field.is_none() {
            tracing::debug!("Results have no URL field; result titles will not be links");
        }
        let results_widget = Widget::Results {
            title_field: config.result_field(&results.title_field)?,
            url_field: optional_result_field(config, results.url_field.as_ref())?,
            thumbnail_field: optional_result_field(config, results.thumbnail_field.as_ref())?,
            should_track_click_through: results.track_click_through,
        };

        Ok(Self {
            header: vec![Placement::always(search_box)],
            side_content,
            body_content: vec![Placement::always(results_widget)],
            body_header: vec![
                Placement::after_search(Widget::PagingInfo),
                Placement::after_search(Widget::ResultsPerPage {
                    options: ui.results_per_page_options.clone(),
                }),
            ],
            body_footer: vec![Placement::always(Widget::Paging)],
        })
    }

    /// Widgets placed in `slot`, in render order
    pub fn slot(&self, slot: Slot) -> &[Placement] {
        match slot {
            Slot::Header => &self.header,
            Slot::SideContent => &self.side_content,
            Slot::BodyContent => &self.body_content,
            Slot::BodyHeader => &self.body_header,
            Slot::BodyFooter => &self.body_footer,
        }
    }

    /// Every placement with its slot, in slot order
    pub fn placements(&self) -> impl Iterator<Item = (Slot, &Placement)> + '_ {
        Slot::ALL
            .into_iter()
            .flat_map(move |slot| self.slot(slot).iter().map(move |p| (slot, p)))
    }

    /// Fields rendered as facets, in render order
    pub fn facet_fields(&self) -> Vec<&str> {
        self.side_content
            .iter()
            .filter_map(|p| match &p.widget {
                Widget::Facet { field, .. } => Some(field.as_str()),
                _ => None,
            })
            .collect()
    }
}
