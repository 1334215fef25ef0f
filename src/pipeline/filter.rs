//! Filter engine with composable predicates.
//!
//! A project is visible iff every criterion matches. The four predicates
//! are pure and side-effect free, so evaluation order is irrelevant; an
//! empty result set is a valid outcome, not an error.

use crate::models::{Catalog, FilterCriteria, Project};

/// Apply the criteria to the catalog, preserving catalog order.
pub fn apply<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a Project> {
    catalog.iter().filter(|p| matches(p, criteria)).collect()
}

/// Whether one project satisfies every criterion.
pub fn matches(project: &Project, criteria: &FilterCriteria) -> bool {
    matches_category(project, criteria.category.as_deref())
        && matches_year(project, criteria.year.as_deref())
        && matches_tags(project, &criteria.tags)
        && matches_query(project, &criteria.query)
}

/// Unset, or a member of the project's category set.
fn matches_category(project: &Project, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(wanted) => project.category.iter().any(|c| c == wanted),
    }
}

/// Unset, or equal to the project's year rendered as a decimal string.
///
/// A year string that cannot correspond to any project (e.g. a mangled
/// URL parameter) simply matches nothing.
fn matches_year(project: &Project, year: Option<&str>) -> bool {
    match year {
        None => true,
        Some(wanted) => project.year.to_string() == wanted,
    }
}

/// Empty, or every selected tag present on the project (AND semantics).
fn matches_tags(project: &Project, tags: &[String]) -> bool {
    tags.iter().all(|tag| project.tags.contains(tag))
}

/// Empty, or a case-insensitive substring of the project's search text.
fn matches_query(project: &Project, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    project.search_text().contains(&query.to_lowercase())
}
