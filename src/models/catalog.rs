//! Catalog collection keyed by derived project id.

use std::collections::HashMap;

use crate::models::Project;

/// The full validated, normalized collection of projects for a session.
///
/// Insertion order is the default display order. Duplicate ids are kept
/// (identical (title, year, author) triples collide by design); `get`
/// resolves to the first occurrence.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-normalized projects, preserving order.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let mut catalog = Self::new();
        for project in projects {
            catalog.push(project);
        }
        catalog
    }

    /// Append a project, keeping the first occurrence for id lookup.
    pub fn push(&mut self, project: Project) {
        let position = self.projects.len();
        self.index.entry(project.id.clone()).or_insert(position);
        self.projects.push(project);
    }

    /// Look up a project by id (first occurrence on collision).
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.index.get(id).map(|&pos| &self.projects[pos])
    }

    /// Projects in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Iterate projects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Consume the catalog, returning the ordered projects.
    pub fn into_projects(self) -> Vec<Project> {
        self.projects
    }

    /// Pool for "more by this author" panels: every project sharing at
    /// least one credited author with the given project, excluding
    /// projects with the same id.
    pub fn more_by_authors<'a>(&'a self, project: &Project) -> Vec<&'a Project> {
        self.projects
            .iter()
            .filter(|p| p.id != project.id)
            .filter(|p| project.author.iter().any(|name| p.has_author(name)))
            .collect()
    }

    /// Pool for "related" panels: every project sharing at least one tag
    /// or category with the given project, excluding projects with the
    /// same id.
    pub fn related<'a>(&'a self, project: &Project) -> Vec<&'a Project> {
        self.projects
            .iter()
            .filter(|p| p.id != project.id)
            .filter(|p| {
                p.tags.iter().any(|t| project.tags.contains(t))
                    || p.category.iter().any(|c| project.category.contains(c))
            })
            .collect()
    }
}
