/// Generic catalog filter.
///
/// A `CatalogFilter<T>` is configured once per record shape with the fields the
/// free-text query searches and the fields each named facet constrains. It is then
/// evaluated against an immutable catalog and a `FilterState`, producing the
/// matching records in their original order.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::facet::Facet;

static UNCONSTRAINED: Facet = Facet::All;

/// Ephemeral filter state owned by a single listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query. Empty matches every record.
    #[serde(default)]
    pub query: String,
    /// Selected facet values by facet name. Missing entries are `Facet::All`.
    #[serde(default)]
    pub facets: BTreeMap<String, Facet>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn with_facet(mut self, name: impl Into<String>, facet: Facet) -> Self {
        self.select(name, facet);
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select(&mut self, name: impl Into<String>, facet: Facet) {
        let name = name.into();
        if facet.is_all() {
            self.facets.remove(&name);
        } else {
            self.facets.insert(name, facet);
        }
    }

    pub fn facet(&self, name: &str) -> &Facet {
        self.facets.get(name).unwrap_or(&UNCONSTRAINED)
    }

    /// True when the state selects the whole catalog.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.facets.values().all(Facet::is_all)
    }
}

/// Whether a filter evaluation produced anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOutcome {
    HasResults,
    NoResults,
}

impl FilterOutcome {
    pub fn of<R>(results: &[R]) -> Self {
        Self::from_count(results.len())
    }

    /// For results held in more than one collection, e.g. featured sections.
    pub fn from_count(matched: usize) -> Self {
        if matched == 0 {
            Self::NoResults
        } else {
            Self::HasResults
        }
    }
}

enum SearchField<T> {
    Text(fn(&T) -> &str),
    Set(fn(&T) -> &[String]),
}

struct FacetField<T> {
    name: &'static str,
    select: fn(&T) -> &str,
}

pub struct CatalogFilter<T> {
    search: Vec<SearchField<T>>,
    facets: Vec<FacetField<T>>,
}

impl<T> Default for CatalogFilter<T> {
    fn default() -> Self {
        Self {
            search: Vec::new(),
            facets: Vec::new(),
        }
    }
}

impl<T> CatalogFilter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search a single text field, e.g. title or provider.
    pub fn search_text(mut self, select: fn(&T) -> &str) -> Self {
        self.search.push(SearchField::Text(select));
        self
    }

    /// Search a set-valued field; any element containing the query matches.
    pub fn search_set(mut self, select: fn(&T) -> &[String]) -> Self {
        self.search.push(SearchField::Set(select));
        self
    }

    /// Constrain records by the named facet, compared exactly against `select`.
    pub fn facet(mut self, name: &'static str, select: fn(&T) -> &str) -> Self {
        self.facets.push(FacetField { name, select });
        self
    }

    pub fn facet_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.facets.iter().map(|f| f.name)
    }

    pub fn matches(&self, record: &T, state: &FilterState) -> bool {
        let needle = state.query.to_lowercase();
        self.matches_query(record, &needle) && self.matches_facets(record, state)
    }

    /// Evaluate the filter over a whole catalog.
    pub fn apply<'a>(&self, catalog: &'a [T], state: &FilterState) -> Vec<&'a T> {
        self.apply_iter(catalog.iter(), state)
    }

    /// Evaluate the filter over any ordered sequence of records, such as a
    /// previous result.
    pub fn apply_iter<'a, I>(&self, records: I, state: &FilterState) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        for name in state.facets.keys() {
            if !self.facets.iter().any(|f| f.name == name) {
                debug!(facet = %name, "ignoring facet not configured for this catalog");
            }
        }

        let needle = state.query.to_lowercase();
        let mut total = 0usize;
        let results: Vec<&'a T> = records
            .into_iter()
            .inspect(|_| total += 1)
            .filter(|record| {
                self.matches_query(record, &needle) && self.matches_facets(record, state)
            })
            .collect();

        debug!(
            query = %state.query,
            matched = results.len(),
            total,
            "catalog filtered"
        );
        results
    }

    fn matches_query(&self, record: &T, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.search.iter().any(|field| match field {
            SearchField::Text(select) => contains_folded(select(record), needle),
            SearchField::Set(select) => select(record)
                .iter()
                .any(|value| contains_folded(value, needle)),
        })
    }

    fn matches_facets(&self, record: &T, state: &FilterState) -> bool {
        self.facets
            .iter()
            .all(|field| state.facet(field.name).admits((field.select)(record)))
    }
}

/// `needle` must already be lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
