// src/session.rs

//! Interactive browse session for one page view.
//!
//! A session owns the filter criteria, keeps the page address in sync
//! after every mutation, and computes the visible subset on demand. The
//! catalog itself is immutable for the session's lifetime; facets are
//! extracted once at attach.

use url::Url;

use crate::models::{Catalog, FilterCriteria, Project};
use crate::pipeline::{Facets, extract_facets, filter};
use crate::urlstate;

/// One page view's interactive filter/search state.
#[derive(Debug)]
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    facets: Facets,
    criteria: FilterCriteria,
    address: Url,
}

impl<'a> BrowseSession<'a> {
    /// Attach to a catalog, restoring criteria from the address.
    pub fn attach(catalog: &'a Catalog, address: Url) -> Self {
        let criteria = urlstate::read_criteria(&address);
        Self {
            catalog,
            facets: extract_facets(catalog),
            criteria,
            address,
        }
    }

    /// Current criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Facet options extracted at attach.
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    /// The address reflecting the current criteria.
    pub fn address(&self) -> &Url {
        &self.address
    }

    /// Projects matching the current criteria, in catalog order.
    pub fn visible(&self) -> Vec<&'a Project> {
        filter::apply(self.catalog, &self.criteria)
    }

    /// Select a category, or `None` for all categories.
    pub fn set_category(&mut self, category: Option<String>) {
        self.criteria.category = category.filter(|c| !c.is_empty());
        self.sync_address();
    }

    /// Select a year, or `None` for all years.
    pub fn set_year(&mut self, year: Option<String>) {
        self.criteria.year = year.filter(|y| !y.is_empty());
        self.sync_address();
    }

    /// Add or remove one selected tag.
    pub fn toggle_tag(&mut self, tag: &str) {
        self.criteria.toggle_tag(tag);
        self.sync_address();
    }

    /// Replace the free-text query.
    pub fn set_query(&mut self, query: &str) {
        self.criteria.query = query.to_string();
        self.sync_address();
    }

    /// Restore every criterion to its default and clear the address.
    pub fn reset(&mut self) {
        self.criteria.reset();
        self.sync_address();
    }

    fn sync_address(&mut self) {
        urlstate::write_criteria(&mut self.address, &self.criteria);
    }
}
