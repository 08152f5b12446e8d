/// Listings over the embedded catalogs.
///
/// Each catalog gets one `CatalogFilter` describing which fields the free-text query
/// searches and which fields the facets constrain. Listings run that filter against
/// the catalog and carry what the view layer needs (matches, total, outcome).
use guide_common::error::CommonError;
use guide_common::filter::{CatalogFilter, FilterOutcome, FilterState};
use guide_common::partition::{partition_featured, Featured};
use serde::Serialize;

use crate::catalog::{COURSE_CATEGORIES, COURSE_FORMATS, RESOURCE_CATEGORIES};
use crate::model::{CareerSuggestion, Course, Resource};

/// Search by title, provider or any skill; facets `category` and `format`.
pub fn course_filter() -> CatalogFilter<Course> {
    CatalogFilter::new()
        .search_text(|c: &Course| c.title.as_str())
        .search_text(|c: &Course| c.provider.as_str())
        .search_set(|c: &Course| c.skills.as_slice())
        .facet(COURSE_CATEGORIES.name, |c: &Course| c.category.as_str())
        .facet(COURSE_FORMATS.name, |c: &Course| c.format.as_str())
}

/// Search by title, snippet or any tag; facet `category`.
pub fn resource_filter() -> CatalogFilter<Resource> {
    CatalogFilter::new()
        .search_text(|r: &Resource| r.title.as_str())
        .search_text(|r: &Resource| r.snippet.as_str())
        .search_set(|r: &Resource| r.tags.as_slice())
        .facet(RESOURCE_CATEGORIES.name, |r: &Resource| r.category.as_str())
}

pub fn career_filter() -> CatalogFilter<CareerSuggestion> {
    CatalogFilter::new()
        .search_text(|c: &CareerSuggestion| c.title.as_str())
        .search_text(|c: &CareerSuggestion| c.description.as_str())
        .search_set(|c: &CareerSuggestion| c.skills.as_slice())
}

/// Build course filter state from raw control values. `None` means the control's default.
pub fn course_state(
    query: Option<&str>,
    category: Option<&str>,
    format: Option<&str>,
) -> Result<FilterState, CommonError> {
    Ok(FilterState::new()
        .with_query(query.unwrap_or_default())
        .with_facet(COURSE_CATEGORIES.name, COURSE_CATEGORIES.parse_optional(category)?)
        .with_facet(COURSE_FORMATS.name, COURSE_FORMATS.parse_optional(format)?))
}

pub fn resource_state(
    query: Option<&str>,
    category: Option<&str>,
) -> Result<FilterState, CommonError> {
    Ok(FilterState::new()
        .with_query(query.unwrap_or_default())
        .with_facet(
            RESOURCE_CATEGORIES.name,
            RESOURCE_CATEGORIES.parse_optional(category)?,
        ))
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseListing<'a> {
    pub state: FilterState,
    pub courses: Vec<&'a Course>,
    pub total: usize,
}

impl CourseListing<'_> {
    pub fn outcome(&self) -> FilterOutcome {
        FilterOutcome::of(&self.courses)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceListing<'a> {
    pub state: FilterState,
    pub sections: Featured<&'a Resource>,
    pub total: usize,
}

impl ResourceListing<'_> {
    pub fn matched(&self) -> usize {
        self.sections.len()
    }

    pub fn outcome(&self) -> FilterOutcome {
        FilterOutcome::from_count(self.matched())
    }
}

pub fn list_courses<'a>(catalog: &'a [Course], state: FilterState) -> CourseListing<'a> {
    let courses = course_filter().apply(catalog, &state);
    CourseListing {
        state,
        courses,
        total: catalog.len(),
    }
}

/// Filter first, then split featured articles into their own section.
pub fn list_resources<'a>(catalog: &'a [Resource], state: FilterState) -> ResourceListing<'a> {
    let matched = resource_filter().apply(catalog, &state);
    ResourceListing {
        state,
        sections: partition_featured(matched, |r| r.featured),
        total: catalog.len(),
    }
}

/// Career suggestions are always shown in full.
pub fn list_careers(catalog: &[CareerSuggestion]) -> Vec<&CareerSuggestion> {
    career_filter().apply(catalog, &FilterState::new())
}

#[cfg(test)]
mod tests {
    use guide_common::facet::Facet;

    use super::*;
    use crate::catalog::Catalogs;

    fn catalogs() -> Catalogs {
        Catalogs::load().expect("embedded catalogs are valid")
    }

    fn course_ids<'a>(listing: &CourseListing<'a>) -> Vec<&'a str> {
        listing.courses.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn python_matches_data_science_and_ai_courses() {
        let catalogs = catalogs();
        let state = course_state(Some("python"), None, Some("all")).unwrap();
        let listing = list_courses(&catalogs.courses, state);
        assert_eq!(course_ids(&listing), vec!["2", "7"]);
        assert_eq!(listing.total, 8);
    }

    #[test]
    fn technology_category_has_three_courses() {
        let catalogs = catalogs();
        let state = course_state(Some(""), Some("Technology"), None).unwrap();
        let listing = list_courses(&catalogs.courses, state);
        assert_eq!(course_ids(&listing), vec!["1", "2", "7"]);
        assert!(listing.courses.iter().all(|c| c.category == "Technology"));
    }

    #[test]
    fn no_match_is_empty_outcome() {
        let catalogs = catalogs();
        let state = course_state(Some("zzz-no-match"), None, None).unwrap();
        let listing = list_courses(&catalogs.courses, state);
        assert!(listing.courses.is_empty());
        assert_eq!(listing.outcome(), FilterOutcome::NoResults);
    }

    #[test]
    fn skill_search_ignores_case() {
        let catalogs = catalogs();
        let upper = list_courses(&catalogs.courses, course_state(Some("REACT"), None, None).unwrap());
        let lower = list_courses(&catalogs.courses, course_state(Some("react"), None, None).unwrap());
        assert_eq!(course_ids(&upper), vec!["1"]);
        assert_eq!(course_ids(&upper), course_ids(&lower));
    }

    #[test]
    fn provider_search_and_format_facet_combine() {
        let catalogs = catalogs();
        let state = course_state(Some("iit"), None, Some("Online")).unwrap();
        let listing = list_courses(&catalogs.courses, state);
        assert_eq!(course_ids(&listing), vec!["1", "7"]);

        let state = course_state(Some("iim"), None, Some("Online")).unwrap();
        assert!(list_courses(&catalogs.courses, state).courses.is_empty());
    }

    #[test]
    fn hybrid_format_only() {
        let catalogs = catalogs();
        let state = course_state(None, None, Some("Hybrid")).unwrap();
        let listing = list_courses(&catalogs.courses, state);
        assert_eq!(course_ids(&listing), vec!["5", "6"]);
    }

    #[test]
    fn unknown_facet_value_is_rejected_before_filtering() {
        let err = course_state(None, Some("technology"), None).unwrap_err();
        assert!(err.to_string().contains("unknown category 'technology'"), "{err}");
    }

    #[test]
    fn identity_resource_listing_puts_featured_first() {
        let catalogs = catalogs();
        let listing = list_resources(&catalogs.resources, FilterState::new());
        let featured: Vec<&str> = listing.sections.featured.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(featured, vec!["1", "2"]);
        assert_eq!(listing.sections.regular.len(), 10);
        assert_eq!(listing.matched(), listing.total);
    }

    #[test]
    fn featured_split_happens_after_filtering() {
        let catalogs = catalogs();
        let state = resource_state(Some("startups"), None).unwrap();
        let listing = list_resources(&catalogs.resources, state);
        let featured: Vec<&str> = listing.sections.featured.iter().map(|r| r.id.as_str()).collect();
        let regular: Vec<&str> = listing.sections.regular.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(featured, vec!["2"]);
        assert_eq!(regular, vec!["9"]);
    }

    #[test]
    fn resource_query_searches_snippet_and_tags() {
        let catalogs = catalogs();
        let by_snippet = list_resources(&catalogs.resources, resource_state(Some("esop"), None).unwrap());
        assert_eq!(by_snippet.matched(), 1);

        let state = resource_state(Some("linkedin"), Some("Networking")).unwrap();
        let listing = list_resources(&catalogs.resources, state);
        let ids: Vec<&str> = listing.sections.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);
    }

    #[test]
    fn resource_category_without_featured_has_empty_featured_section() {
        let catalogs = catalogs();
        let state = FilterState::new().with_facet("category", Facet::only("Remote Work"));
        let listing = list_resources(&catalogs.resources, state);
        assert!(listing.sections.featured.is_empty());
        assert_eq!(listing.matched(), 1);
        assert_eq!(listing.outcome(), FilterOutcome::HasResults);

        let state = resource_state(Some("zzz-no-match"), None).unwrap();
        let empty = list_resources(&catalogs.resources, state);
        assert_eq!(empty.outcome(), FilterOutcome::NoResults);
    }

    #[test]
    fn careers_are_unfiltered() {
        let catalogs = catalogs();
        let careers = list_careers(&catalogs.careers);
        assert_eq!(careers.len(), catalogs.careers.len());
        assert_eq!(careers[0].title, "Software Engineer");
    }

    #[test]
    fn career_filter_searches_skills() {
        let catalogs = catalogs();
        let state = FilterState::new().with_query("figma");
        let careers = career_filter().apply(&catalogs.careers, &state);
        assert_eq!(careers.len(), 1);
        assert_eq!(careers[0].title, "UX Designer");
    }
}
