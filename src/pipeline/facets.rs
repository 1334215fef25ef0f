//! Facet option extraction.
//!
//! Derives the available filter options from a loaded catalog. A pure
//! read: the catalog does not change during a session, so facets are
//! computed once at attach time.

use serde::{Deserialize, Serialize};

use crate::models::Catalog;

/// Available filter options derived from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    /// Categories in first-seen catalog order, deduplicated
    pub categories: Vec<String>,

    /// Years sorted descending (most recent first), deduplicated
    pub years: Vec<i32>,

    /// Tags sorted ascending, deduplicated
    pub tags: Vec<String>,
}

/// Extract the facet options from the catalog.
pub fn extract_facets(catalog: &Catalog) -> Facets {
    let mut categories: Vec<String> = Vec::new();
    let mut years: Vec<i32> = Vec::new();
    let mut tags: Vec<String> = Vec::new();

    for project in catalog.iter() {
        for category in &project.category {
            if !categories.contains(category) {
                categories.push(category.clone());
            }
        }
        if !years.contains(&project.year) {
            years.push(project.year);
        }
        for tag in &project.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }

    years.sort_unstable_by(|a, b| b.cmp(a));
    tags.sort_unstable();

    Facets {
        categories,
        years,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Project;

    fn make_project(year: i32, category: &str, tags: &[&str]) -> Project {
        Project {
            id: format!("{year}-x"),
            title: "T".to_string(),
            subtitle: String::new(),
            description: String::new(),
            year,
            author: vec!["A".to_string()],
            category: vec![category.to_string()],
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: vec![],
            video: vec![],
            project_url: String::new(),
            project_repo: String::new(),
            student_url: String::new(),
        }
    }

    #[test]
    fn test_years_sorted_descending() {
        let catalog = Catalog::from_projects(vec![
            make_project(2022, "Thesis", &[]),
            make_project(2024, "Thesis", &[]),
            make_project(2023, "Thesis", &[]),
            make_project(2024, "Thesis", &[]),
        ]);
        let facets = extract_facets(&catalog);
        assert_eq!(facets.years, vec![2024, 2023, 2022]);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = Catalog::from_projects(vec![
            make_project(2024, "Thesis", &[]),
            make_project(2024, "Major Studio", &[]),
            make_project(2023, "Thesis", &[]),
        ]);
        let facets = extract_facets(&catalog);
        assert_eq!(facets.categories, vec!["Thesis", "Major Studio"]);
    }

    #[test]
    fn test_tags_sorted_ascending_deduped() {
        let catalog = Catalog::from_projects(vec![
            make_project(2024, "Thesis", &["video", "ai"]),
            make_project(2023, "Thesis", &["ai", "arts"]),
        ]);
        let facets = extract_facets(&catalog);
        assert_eq!(facets.tags, vec!["ai", "arts", "video"]);
    }

    #[test]
    fn test_empty_catalog() {
        let facets = extract_facets(&Catalog::new());
        assert_eq!(facets, Facets::default());
    }
}
