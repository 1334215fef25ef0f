// src/urlstate.rs

//! Bidirectional mapping between filter criteria and the page address.
//!
//! The address query string is the only persistence the filter state has:
//! a reload or a shared link reproduces the same view. Reading is
//! permissive (absent or empty parameters map to defaults); writing
//! removes a parameter entirely when its field is default, and leaves
//! every unmanaged parameter untouched. Replacing the address without a
//! history entry is the embedding page's concern, not handled here.
//!
//! A tag name containing a literal `,` cannot survive the comma-joined
//! `tags` parameter; that is a documented limitation of the format.

use url::Url;

use crate::models::FilterCriteria;

/// Query parameter for the selected category.
pub const PARAM_CATEGORY: &str = "category";
/// Query parameter for the selected year.
pub const PARAM_YEAR: &str = "year";
/// Query parameter for the comma-joined selected tags.
pub const PARAM_TAGS: &str = "tags";
/// Query parameter for the free-text query.
pub const PARAM_QUERY: &str = "q";

fn is_managed(key: &str) -> bool {
    matches!(key, PARAM_CATEGORY | PARAM_YEAR | PARAM_TAGS | PARAM_QUERY)
}

/// Parse the criteria out of an address.
///
/// Unknown parameters are ignored; empty values count as absent.
pub fn read_criteria(address: &Url) -> FilterCriteria {
    let mut criteria = FilterCriteria::default();

    for (key, value) in address.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            PARAM_CATEGORY => criteria.category = Some(value.into_owned()),
            PARAM_YEAR => criteria.year = Some(value.into_owned()),
            PARAM_TAGS => {
                criteria.tags = value
                    .split(',')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            PARAM_QUERY => criteria.query = value.into_owned(),
            _ => {}
        }
    }

    criteria
}

/// Serialize the criteria into an address, in place.
///
/// Non-default fields set their parameter; default fields remove it.
/// Unmanaged parameters keep their order and values.
pub fn write_criteria(address: &mut Url, criteria: &FilterCriteria) {
    let retained: Vec<(String, String)> = address
        .query_pairs()
        .filter(|(key, _)| !is_managed(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = address.query_pairs_mut();
        pairs.clear();

        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        if let Some(category) = &criteria.category {
            pairs.append_pair(PARAM_CATEGORY, category);
        }
        if let Some(year) = &criteria.year {
            pairs.append_pair(PARAM_YEAR, year);
        }
        if !criteria.tags.is_empty() {
            pairs.append_pair(PARAM_TAGS, &criteria.tags.join(","));
        }
        if !criteria.query.is_empty() {
            pairs.append_pair(PARAM_QUERY, &criteria.query);
        }
    }

    // No parameters at all: drop the bare '?' left by the serializer
    if address.query() == Some("") {
        address.set_query(None);
    }
}
