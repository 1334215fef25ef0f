//! Filter criteria value object.

/// The current user-selected filter/search state for one page view.
///
/// Owns no reference to the catalog; always serializable to and from a
/// flat string-keyed parameter set (see `urlstate`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Selected category, or `None` for all categories
    pub category: Option<String>,

    /// Selected year as its decimal string, or `None` for all years
    pub year: Option<String>,

    /// Selected tags; a project must carry every one of them
    pub tags: Vec<String>,

    /// Free-text search query
    pub query: String,
}

impl FilterCriteria {
    /// Whether every field holds its empty/unset default.
    pub fn is_default(&self) -> bool {
        self.category.is_none() && self.year.is_none() && self.tags.is_empty() && self.query.is_empty()
    }

    /// Restore all four fields to their empty/unset defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add the tag if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_default());
    }

    #[test]
    fn test_toggle_tag() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_tag("ai");
        criteria.toggle_tag("video");
        assert_eq!(criteria.tags, vec!["ai", "video"]);

        criteria.toggle_tag("ai");
        assert_eq!(criteria.tags, vec!["video"]);
    }

    #[test]
    fn test_reset() {
        let mut criteria = FilterCriteria {
            category: Some("Thesis".to_string()),
            year: Some("2024".to_string()),
            tags: vec!["ai".to_string()],
            query: "loom".to_string(),
        };
        criteria.reset();
        assert!(criteria.is_default());
    }
}
