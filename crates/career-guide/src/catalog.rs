/// Build-time catalogs.
///
/// Each catalog is a JSON document compiled into the binary. Loading parses it into
/// typed records and checks the invariants the listings rely on. A failure here means
/// the shipped data is broken, so callers treat it as fatal.
use std::collections::HashSet;
use std::sync::LazyLock;

use guide_common::facet::FacetDomain;
use regex::Regex;
use tracing::info;

use crate::error::AppError;
use crate::model::{CareerSuggestion, Course, ProfileDashboard, Resource};

const COURSES_JSON: &str = include_str!("../data/courses.json");
const RESOURCES_JSON: &str = include_str!("../data/resources.json");
const CAREERS_JSON: &str = include_str!("../data/careers.json");
const PROFILE_JSON: &str = include_str!("../data/profile.json");

pub const COURSE_CATEGORIES: FacetDomain = FacetDomain::new(
    "category",
    &["Technology", "Design", "Marketing", "Finance", "Management"],
);

pub const COURSE_FORMATS: FacetDomain =
    FacetDomain::new("format", &["Online", "Offline", "Hybrid"]);

pub const RESOURCE_CATEGORIES: FacetDomain = FacetDomain::new(
    "category",
    &[
        "Resume Building",
        "Interview Prep",
        "Internships",
        "Networking",
        "Career Growth",
        "Career Transition",
        "Personal Branding",
        "Remote Work",
        "Finance",
        "Diversity",
        "Career Choice",
        "Skill Development",
    ],
);

static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Free|₹\d[\d,]*)$").expect("valid regex"));

#[derive(Debug, Clone)]
pub struct Catalogs {
    pub courses: Vec<Course>,
    pub resources: Vec<Resource>,
    pub careers: Vec<CareerSuggestion>,
    pub dashboard: ProfileDashboard,
}

impl Catalogs {
    /// Parse and validate every embedded catalog.
    pub fn load() -> Result<Self, AppError> {
        let catalogs = Self {
            courses: parse_courses(COURSES_JSON)?,
            resources: parse_resources(RESOURCES_JSON)?,
            careers: parse_careers(CAREERS_JSON)?,
            dashboard: parse_dashboard(PROFILE_JSON)?,
        };
        info!(
            courses = catalogs.courses.len(),
            resources = catalogs.resources.len(),
            careers = catalogs.careers.len(),
            "catalogs loaded"
        );
        Ok(catalogs)
    }
}

pub fn parse_courses(content: &str) -> Result<Vec<Course>, AppError> {
    let courses: Vec<Course> = serde_json::from_str(content)?;
    ensure_unique_ids("course", courses.iter().map(|c| c.id.as_str()))?;

    for course in &courses {
        if !(0.0..=5.0).contains(&course.rating) {
            return Err(invalid(
                "course",
                format!("course {} has rating {} outside 0-5", course.id, course.rating),
            ));
        }
        if !COURSE_CATEGORIES.contains(&course.category) {
            return Err(invalid(
                "course",
                format!("course {} has unknown category '{}'", course.id, course.category),
            ));
        }
        if !PRICE.is_match(&course.price) {
            return Err(invalid(
                "course",
                format!("course {} has malformed price '{}'", course.id, course.price),
            ));
        }
    }
    Ok(courses)
}

pub fn parse_resources(content: &str) -> Result<Vec<Resource>, AppError> {
    let resources: Vec<Resource> = serde_json::from_str(content)?;
    ensure_unique_ids("resource", resources.iter().map(|r| r.id.as_str()))?;

    for resource in &resources {
        if !RESOURCE_CATEGORIES.contains(&resource.category) {
            return Err(invalid(
                "resource",
                format!(
                    "resource {} has unknown category '{}'",
                    resource.id, resource.category
                ),
            ));
        }
        if resource.read_minutes().is_none() {
            return Err(invalid(
                "resource",
                format!(
                    "resource {} has malformed read time '{}'",
                    resource.id, resource.read_time
                ),
            ));
        }
    }
    Ok(resources)
}

pub fn parse_careers(content: &str) -> Result<Vec<CareerSuggestion>, AppError> {
    let careers: Vec<CareerSuggestion> = serde_json::from_str(content)?;
    for career in &careers {
        ensure_percent("career", &career.title, career.match_score)?;
    }
    Ok(careers)
}

pub fn parse_dashboard(content: &str) -> Result<ProfileDashboard, AppError> {
    let dashboard: ProfileDashboard = serde_json::from_str(content)?;
    for score in &dashboard.readiness {
        ensure_percent("profile", &score.label, score.score)?;
    }
    for m in &dashboard.career_matches {
        ensure_percent("profile", &m.title, m.match_score)?;
    }
    for rec in &dashboard.course_recommendations {
        ensure_percent("profile", &rec.title, rec.relevance)?;
    }
    for gap in &dashboard.skill_gaps {
        ensure_percent("profile", &gap.skill, gap.current_level)?;
        ensure_percent("profile", &gap.skill, gap.target_level)?;
    }
    Ok(dashboard)
}

fn ensure_unique_ids<'a>(
    catalog: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(invalid(catalog, format!("duplicate id '{id}'")));
        }
    }
    Ok(())
}

fn ensure_percent(catalog: &'static str, owner: &str, value: u8) -> Result<(), AppError> {
    if value > 100 {
        return Err(invalid(
            catalog,
            format!("'{owner}' has percentage {value} above 100"),
        ));
    }
    Ok(())
}

fn invalid(catalog: &'static str, message: String) -> AppError {
    AppError::Catalog { catalog, message }
}
