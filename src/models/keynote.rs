//! Keynote event data structure.

use serde::{Deserialize, Serialize};

/// A keynote presentation accompanying the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Keynote {
    /// Event year
    pub year: i32,

    /// Keynote title
    pub title: String,

    /// Hosting department
    pub department: String,

    /// Long-form description
    pub description: String,

    /// Venue
    pub location: String,

    /// Event date as display text
    pub date: String,

    /// Event time as display text
    pub time: String,

    /// Event page link
    pub url: String,

    /// Presenting students
    pub students: Vec<String>,

    /// Embeddable recording markup (opaque)
    pub video_embed_html: String,
}
