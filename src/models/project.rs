//! Project record data structure.

use serde::{Deserialize, Serialize};

/// A catalogued creative-work record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Derived identifier, stable for a given (title, year, author) triple
    pub id: String,

    /// Project title
    pub title: String,

    /// Short subtitle shown under the title
    pub subtitle: String,

    /// Long-form description
    pub description: String,

    /// Submission year
    pub year: i32,

    /// Authors in credit order
    pub author: Vec<String>,

    /// Canonical category values
    pub category: Vec<String>,

    /// Canonical tag values
    pub tags: Vec<String>,

    /// Image references (opaque to the pipeline)
    pub image: Vec<String>,

    /// Video references (opaque to the pipeline)
    pub video: Vec<String>,

    /// External project page
    pub project_url: String,

    /// Source repository link
    pub project_repo: String,

    /// Author portfolio link
    pub student_url: String,
}

impl Project {
    /// Lower-cased haystack for free-text search: title, description,
    /// and tags joined by spaces. Subtitle is deliberately excluded.
    pub fn search_text(&self) -> String {
        let mut parts = Vec::with_capacity(2 + self.tags.len());
        parts.push(self.title.as_str());
        parts.push(self.description.as_str());
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Whether the given name appears in the credit list (exact match).
    pub fn has_author(&self, name: &str) -> bool {
        self.author.iter().any(|a| a == name)
    }

    /// Format the project for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{subtitle}`, `{year}`
    /// - `{author}`, `{category}`, `{tags}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id)
            .replace("{title}", &self.title)
            .replace("{subtitle}", &self.subtitle)
            .replace("{year}", &self.year.to_string())
            .replace("{author}", &self.author.join(", "))
            .replace("{category}", &self.category.join(", "))
            .replace("{tags}", &self.tags.join(", "))
    }
}
