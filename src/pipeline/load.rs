// src/pipeline/load.rs

//! Catalog aggregation from raw source groups.
//!
//! Each source group is one file's worth of raw text expected to hold a
//! JSON array of records. A group is accepted only if the whole array
//! validates; any failure (malformed JSON, not an array, one bad record)
//! rejects the group. Rejected groups are skipped, never fatal: one
//! corrupt source must not take down the whole catalog.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Catalog, Project};
use crate::pipeline::normalize::normalize_record;

/// One raw source group, as handed over by the source-reading collaborator.
#[derive(Debug, Clone)]
pub struct SourceGroup {
    /// Group name for reporting (usually the source file name)
    pub name: String,

    /// Raw text content, expected to parse as a JSON array of records
    pub raw: String,
}

impl SourceGroup {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }
}

/// A group that was skipped during the load, with the reason why.
#[derive(Debug, Clone)]
pub struct SkippedGroup {
    pub name: String,
    pub reason: String,
}

/// Result of aggregating all source groups.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// The merged, validated catalog
    pub catalog: Catalog,

    /// Number of groups offered to the loader
    pub group_total: usize,

    /// Groups rejected and skipped, in input order
    pub skipped: Vec<SkippedGroup>,
}

impl LoadOutcome {
    /// Number of groups that contributed records.
    pub fn accepted_groups(&self) -> usize {
        self.group_total - self.skipped.len()
    }

    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Validate one group: parse, require an array, normalize every record.
pub fn parse_group(group: &SourceGroup) -> Result<Vec<Project>> {
    let value: Value = serde_json::from_str(&group.raw)
        .map_err(|e| AppError::group(&group.name, format!("invalid JSON: {e}")))?;

    let records = value
        .as_array()
        .ok_or_else(|| AppError::group(&group.name, "expected a top-level array"))?;

    records.iter().map(normalize_record).collect()
}

/// Aggregate all groups into a catalog, skipping rejected groups.
///
/// Accepted groups append their records in group order, then record
/// order. Skips are recorded in the outcome and logged as warnings.
pub fn load_catalog(groups: &[SourceGroup]) -> LoadOutcome {
    groups.iter().fold(
        LoadOutcome {
            group_total: groups.len(),
            ..LoadOutcome::default()
        },
        |mut outcome, group| {
            match parse_group(group) {
                Ok(projects) => {
                    for project in projects {
                        outcome.catalog.push(project);
                    }
                }
                Err(error) => {
                    log::warn!("Skipping source group {}: {}", group.name, error);
                    outcome.skipped.push(SkippedGroup {
                        name: group.name.clone(),
                        reason: error.to_string(),
                    });
                }
            }
            outcome
        },
    )
}
