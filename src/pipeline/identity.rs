//! Deterministic project identity derivation.
//!
//! Ids are slugs of the form `year-authors-title`. Two records with an
//! identical (title, year, author) triple share an id on purpose:
//! duplicate submissions collide instead of multiplying.

/// Derive the stable id for a (title, year, author) triple.
///
/// Lower-cases each part, replaces every character outside `[A-Za-z0-9]`
/// with `-`, joins as `year-authors-title`, and collapses runs of `-`
/// into a single dash. No further trimming: a title ending in
/// punctuation keeps its trailing dash.
pub fn derive_id(title: &str, year: i32, authors: &[String]) -> String {
    let title = slug(title);
    let year = slug(&year.to_string());
    let authors = slug(&authors.join("-"));

    collapse_dashes(&format!("{year}-{authors}-{title}"))
}

/// Lower-case and replace non-alphanumeric characters with `-`.
fn slug(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

/// Collapse every run of consecutive dashes into a single dash.
fn collapse_dashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_dash = false;
    for c in text.chars() {
        if c == '-' {
            if !prev_dash {
                out.push(c);
            }
            prev_dash = true;
        } else {
            out.push(c);
            prev_dash = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_derive_id_basic() {
        assert_eq!(
            derive_id("My Project!", 2024, &authors(&["Jane Doe"])),
            "2024-jane-doe-my-project-"
        );
    }

    #[test]
    fn test_derive_id_is_deterministic() {
        let a = derive_id("Weaving Light", 2023, &authors(&["Jane Doe", "Sam Lee"]));
        let b = derive_id("Weaving Light", 2023, &authors(&["Jane Doe", "Sam Lee"]));
        assert_eq!(a, b);
        assert_eq!(a, "2023-jane-doe-sam-lee-weaving-light");
    }

    #[test]
    fn test_collapses_dash_runs() {
        // Consecutive punctuation and spaces produce runs that collapse
        assert_eq!(
            derive_id("Weaving -- Light!!", 2024, &authors(&["J. Doe"])),
            "2024-j-doe-weaving-light-"
        );
    }

    #[test]
    fn test_author_order_is_identity_significant() {
        let a = derive_id("T", 2024, &authors(&["A", "B"]));
        let b = derive_id("T", 2024, &authors(&["B", "A"]));
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_authors() {
        // Empty author list leaves nothing between the dashes, which collapse
        assert_eq!(derive_id("Solo", 2024, &[]), "2024-solo");
    }

    #[test]
    fn test_unicode_maps_to_dashes() {
        assert_eq!(
            derive_id("Café Étude", 2024, &authors(&["Zoë"])),
            "2024-zo-caf-tude"
        );
    }
}
