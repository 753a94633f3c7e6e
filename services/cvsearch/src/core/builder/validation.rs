//! Declaration checks run by the builder before anything is produced.

use crate::core::builder::declaration::SearchDeclaration;
use crate::core::error::{CvSearchError, Result};
use crate::core::field_names::validate_field_list;
use crate::core::schema::{FieldType, IndexSchema};

/// Capability a referenced field must have in the index schema
#[derive(Debug, Clone, Copy)]
enum Capability {
    Stored,
    Searchable,
    Facetable,
    Sortable,
}

impl Capability {
    fn allows(self, field_type: FieldType) -> bool {
        match self {
            Capability::Stored => true,
            Capability::Searchable => field_type.is_searchable(),
            Capability::Facetable => field_type.is_facetable(),
            Capability::Sortable => field_type.is_sortable(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Capability::Stored => "stored",
            Capability::Searchable => "searched",
            Capability::Facetable => "used as a facet",
            Capability::Sortable => "sorted on",
        }
    }
}

fn non_empty(len: usize, list: &str) -> Result<()> {
    if len == 0 {
        return Err(CvSearchError::config(format!("{list} declares no fields")));
    }
    Ok(())
}

fn check_schema<'a, I>(
    schema: Option<&IndexSchema>,
    names: I,
    list: &str,
    capability: Capability,
) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let Some(schema) = schema else {
        return Ok(());
    };

    for name in names {
        let field = schema.field(name).ok_or_else(|| {
            CvSearchError::config(format!(
                "{list} references '{name}', which is not in the index schema"
            ))
        })?;
        if !capability.allows(field.field_type) {
            return Err(CvSearchError::config(format!(
                "{list} references '{name}', but a {} field cannot be {}",
                field.field_type.as_str(),
                capability.describe()
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_search_fields(
    decl: &SearchDeclaration,
    schema: Option<&IndexSchema>,
) -> Result<()> {
    let names = || decl.search_fields.iter().map(|f| f.name.as_str());
    non_empty(decl.search_fields.len(), "search_fields")?;
    validate_field_list(names(), "search_fields")?;

    if let Some(field) = decl
        .search_fields
        .iter()
        .find(|f| !f.weight.is_finite() || f.weight <= 0.0)
    {
        return Err(CvSearchError::config(format!(
            "search field '{}' has weight {}; weights must be positive",
            field.name, field.weight
        )));
    }

    check_schema(schema, names(), "search_fields", Capability::Searchable)
}

pub(crate) fn validate_result_fields(
    decl: &SearchDeclaration,
    schema: Option<&IndexSchema>,
) -> Result<()> {
    let names = || decl.result_fields.iter().map(String::as_str);
    non_empty(decl.result_fields.len(), "result_fields")?;
    validate_field_list(names(), "result_fields")?;
    check_schema(schema, names(), "result_fields", Capability::Stored)
}

pub(crate) fn validate_facets(
    decl: &SearchDeclaration,
    schema: Option<&IndexSchema>,
) -> Result<()> {
    let names = || decl.facets.iter().map(|f| f.name.as_str());
    non_empty(decl.facets.len(), "facets")?;
    validate_field_list(names(), "facets")?;
    check_schema(schema, names(), "facets", Capability::Facetable)
}

pub(crate) fn validate_disjunctive_facets(decl: &SearchDeclaration) -> Result<()> {
    validate_field_list(
        decl.disjunctive_facets.iter().map(String::as_str),
        "disjunctive_facets",
    )?;

    for name in &decl.disjunctive_facets {
        if !decl.facets.iter().any(|f| &f.name == name) {
            return Err(CvSearchError::config(format!(
                "disjunctive facet '{name}' is not declared in facets"
            )));
        }
    }
    Ok(())
}

pub(crate) fn validate_sort_fields(
    decl: &SearchDeclaration,
    schema: Option<&IndexSchema>,
) -> Result<()> {
    let names = || decl.sort_fields.iter().map(String::as_str);
    validate_field_list(names(), "sort_fields")?;
    check_schema(schema, names(), "sort_fields", Capability::Sortable)
}

/// Run every check against the declaration
pub(crate) fn validate_declaration(
    decl: &SearchDeclaration,
    schema: Option<&IndexSchema>,
) -> Result<()> {
    validate_search_fields(decl, schema)?;
    validate_result_fields(decl, schema)?;
    validate_facets(decl, schema)?;
    validate_disjunctive_facets(decl)?;
    validate_sort_fields(decl, schema)
}
