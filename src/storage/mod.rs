//! Storage for raw source files and the exported catalog snapshot.
//!
//! The pipeline itself never touches the filesystem: this layer reads
//! source groups and keynote files on the way in, and persists the
//! normalized catalog snapshot on the way out.
//!
//! ## Directory Layout
//!
//! ```text
//! {root}/
//! ├── config.toml           # Application configuration
//! ├── catalog.json          # Exported catalog snapshot
//! └── data/
//!     ├── projects/         # Source groups (one JSON array per file)
//!     │   ├── 2023.json
//!     │   └── 2024.json
//!     └── keynotes/         # Keynotes (one JSON object per file)
//!         └── 2024.json
//! ```

pub mod local;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Project;

// Re-export for convenience
pub use local::LocalStorage;

/// Header for catalog.json with freshness hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    /// ISO 8601 timestamp of last export
    pub updated_at: DateTime<Utc>,

    /// Total project count
    pub count: usize,

    /// The normalized projects, in catalog order
    pub projects: Vec<Project>,
}

impl CatalogData {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            updated_at: Utc::now(),
            count: projects.len(),
            projects,
        }
    }
}
