//! Raw record validation and vocabulary normalization.
//!
//! A raw record is an untyped JSON object straight out of a source file.
//! Validation checks that every required field is present with the
//! expected shape and fails naming the offending field; normalization
//! rewrites legacy vocabulary values to their canonical form and attaches
//! the derived id. The raw input is never mutated.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::Project;
use crate::pipeline::identity::derive_id;

/// Legacy category values and their canonical replacements.
const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("ms1", "Major Studio"),
    ("ms2", "Major Studio"),
    ("thesis", "Thesis"),
];

/// Legacy tag values and their canonical replacements.
const TAG_ALIASES: &[(&str, &str)] = &[("art", "arts")];

/// Canonical form of a category value. Unknown values pass through.
pub fn canonical_category(raw: &str) -> &str {
    lookup(CATEGORY_ALIASES, raw)
}

/// Canonical form of a tag value. Unknown values pass through.
pub fn canonical_tag(raw: &str) -> &str {
    lookup(TAG_ALIASES, raw)
}

fn lookup<'a>(table: &[(&str, &'a str)], raw: &'a str) -> &'a str {
    table
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(raw)
}

/// Validate one raw record and produce a normalized project.
///
/// Field order within `category`/`tags` is preserved; aliasing is applied
/// per element and is idempotent. The derived id is attached last.
pub fn normalize_record(raw: &Value) -> Result<Project> {
    let title = require_str(raw, "title")?;
    let subtitle = require_str(raw, "subtitle")?;
    let description = require_str(raw, "description")?;
    let year = require_year(raw, "year")?;
    let author = require_str_array(raw, "author")?;

    let category = require_str_array(raw, "category")?
        .iter()
        .map(|c| canonical_category(c).to_string())
        .collect();
    let tags = require_str_array(raw, "tags")?
        .iter()
        .map(|t| canonical_tag(t).to_string())
        .collect();

    let image = require_str_array(raw, "image")?;
    let video = require_str_array(raw, "video")?;
    let project_url = require_str(raw, "project_url")?;
    let project_repo = require_str(raw, "project_repo")?;
    let student_url = require_str(raw, "student_url")?;

    let id = derive_id(&title, year, &author);

    Ok(Project {
        id,
        title,
        subtitle,
        description,
        year,
        author,
        category,
        tags,
        image,
        video,
        project_url,
        project_repo,
        student_url,
    })
}

fn field<'a>(raw: &'a Value, name: &str) -> Result<&'a Value> {
    raw.get(name)
        .ok_or_else(|| AppError::validation(name, "missing field"))
}

fn require_str(raw: &Value, name: &str) -> Result<String> {
    field(raw, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::validation(name, "expected a string"))
}

fn require_year(raw: &Value, name: &str) -> Result<i32> {
    let value = field(raw, name)?
        .as_i64()
        .ok_or_else(|| AppError::validation(name, "expected an integer"))?;
    i32::try_from(value).map_err(|_| AppError::validation(name, "year out of range"))
}

fn require_str_array(raw: &Value, name: &str) -> Result<Vec<String>> {
    let items = field(raw, name)?
        .as_array()
        .ok_or_else(|| AppError::validation(name, "expected an array"))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| AppError::validation(name, "expected an array of strings"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_record() -> Value {
        json!({
            "title": "Weaving Light",
            "subtitle": "A loom of lasers",
            "description": "Projected textiles",
            "year": 2024,
            "author": ["Jane Doe"],
            "category": ["ms1"],
            "tags": ["art", "installation"],
            "image": ["cover.jpg"],
            "video": [],
            "project_url": "https://example.com/p",
            "project_repo": "https://example.com/r",
            "student_url": "https://example.com/s"
        })
    }

    #[test]
    fn test_category_aliases() {
        assert_eq!(canonical_category("ms1"), "Major Studio");
        assert_eq!(canonical_category("ms2"), "Major Studio");
        assert_eq!(canonical_category("thesis"), "Thesis");
        assert_eq!(canonical_category("Elective"), "Elective");
    }

    #[test]
    fn test_tag_aliases() {
        assert_eq!(canonical_tag("art"), "arts");
        assert_eq!(canonical_tag("sound"), "sound");
    }

    #[test]
    fn test_aliasing_is_idempotent() {
        assert_eq!(canonical_category(canonical_category("ms2")), "Major Studio");
        assert_eq!(canonical_tag(canonical_tag("art")), "arts");
    }

    #[test]
    fn test_normalize_record() {
        let project = normalize_record(&raw_record()).unwrap();
        assert_eq!(project.id, "2024-jane-doe-weaving-light");
        assert_eq!(project.category, vec!["Major Studio"]);
        assert_eq!(project.tags, vec!["arts", "installation"]);
    }

    #[test]
    fn test_raw_input_is_untouched() {
        let raw = raw_record();
        normalize_record(&raw).unwrap();
        assert_eq!(raw["category"][0], "ms1");
        assert_eq!(raw["tags"][0], "art");
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let mut raw = raw_record();
        raw.as_object_mut().unwrap().remove("subtitle");

        let err = normalize_record(&raw).unwrap_err();
        assert!(err.to_string().contains("subtitle"));
    }

    #[test]
    fn test_wrong_shape_names_the_field() {
        let mut raw = raw_record();
        raw["tags"] = json!("not-an-array");

        let err = normalize_record(&raw).unwrap_err();
        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn test_year_must_be_integer() {
        let mut raw = raw_record();
        raw["year"] = json!("2024");
        assert!(normalize_record(&raw).is_err());
    }
}
