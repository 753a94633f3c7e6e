//! Field name checks shared by the schema, the declaration and the layout.

use crate::core::error::{CvSearchError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Plain identifiers, optionally dotted for sub-fields (e.g. `age.keyword`)
static FIELD_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z0-9_]+)*$").unwrap());

/// Check that `name` is a usable index field name.
///
/// `list` names the declaration list the field came from and is only used
/// to make the error message point at the right place.
pub fn validate_field_name(name: &str, list: &str) -> Result<()> {
    if FIELD_NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(CvSearchError::config(format!(
            "invalid field name '{name}' in {list}"
        )))
    }
}

/// Validate every name of a list and reject duplicates.
pub fn validate_field_list<'a, I>(names: I, list: &str) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        validate_field_name(name, list)?;
        if !seen.insert(name) {
            return Err(CvSearchError::config(format!(
                "duplicate field '{name}' in {list}"
            )));
        }
    }
    Ok(())
}
