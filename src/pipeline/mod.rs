//! Pipeline stages from raw source records to a browsable catalog.
//!
//! - `normalize`: schema validation and vocabulary normalization
//! - `identity`: deterministic id derivation
//! - `load`: group aggregation with skip-on-failure resilience
//! - `facets`: filter option extraction
//! - `filter`: criteria matching
//! - `sample`: randomized related-set drawing

pub mod facets;
pub mod filter;
pub mod identity;
pub mod load;
pub mod normalize;
pub mod sample;

pub use facets::{Facets, extract_facets};
pub use filter::apply;
pub use identity::derive_id;
pub use load::{LoadOutcome, SkippedGroup, SourceGroup, load_catalog, parse_group};
pub use normalize::normalize_record;
pub use sample::{RelatedSampler, sample, sample_n};
