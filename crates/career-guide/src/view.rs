/// Presentation of listings.
///
/// Each page is a serializable struct, so `--json` output and the plain-text
/// rendering (`Display`) come from the same data.
use std::fmt::{self, Display, Formatter};

use guide_common::facet::FacetDomain;
use guide_common::filter::{FilterOutcome, FilterState};
use serde::Serialize;

use crate::cli::{Assessment, ProfileTab};
use crate::config::Config;
use crate::model::{
    CareerSuggestion, Course, CourseFormat, Difficulty, IconId, Importance, MatchTier,
    ProfileDashboard, Resource,
};
use crate::search::{CourseListing, ResourceListing};

const NO_COURSES: EmptyState = EmptyState {
    title: "No courses found",
    hint: "Try adjusting your search terms or filters to find relevant courses.",
};

/// The profile sidebar always lists this many skills.
const SIDEBAR_SKILLS: usize = 3;

const NO_RESOURCES: EmptyState = EmptyState {
    title: "No resources found",
    hint: "Try adjusting your search terms or category filter to find relevant resources.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Caution,
    Critical,
    Info,
    Accent,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    fn new(label: &str, tone: Tone) -> Self {
        Self {
            label: label.to_string(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub fn difficulty_tone(difficulty: Difficulty) -> Tone {
    match difficulty {
        Difficulty::Beginner => Tone::Positive,
        Difficulty::Intermediate => Tone::Caution,
        Difficulty::Advanced => Tone::Critical,
    }
}

pub fn format_tone(format: CourseFormat) -> Tone {
    match format {
        CourseFormat::Online => Tone::Info,
        CourseFormat::Offline => Tone::Accent,
        CourseFormat::Hybrid => Tone::Positive,
    }
}

pub fn importance_tone(importance: Importance) -> Tone {
    match importance {
        Importance::High => Tone::Critical,
        Importance::Medium => Tone::Caution,
        Importance::Low => Tone::Positive,
    }
}

pub fn glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::Code => "</>",
        IconId::TrendingUp => "^",
        IconId::Palette => "*",
        IconId::Calculator => "#",
        IconId::Users => "@",
        IconId::Briefcase => "=",
        IconId::FileText => "~",
        IconId::BookOpen => "&",
    }
}

pub fn summary_line(matched: usize, total: usize, noun: &str) -> String {
    format!("Showing {matched} of {total} {noun}")
}

/// First `limit` items and how many were left out.
fn preview<T>(items: &[T], limit: usize) -> (&[T], usize) {
    let shown = items.len().min(limit);
    (&items[..shown], items.len() - shown)
}

// --- Education ---

#[derive(Debug, Clone, Serialize)]
pub struct CourseCard<'a> {
    #[serde(flatten)]
    pub course: &'a Course,
    pub badges: Vec<Badge>,
}

impl<'a> CourseCard<'a> {
    pub fn new(course: &'a Course) -> Self {
        let badges = vec![
            Badge::new(course.difficulty.as_str(), difficulty_tone(course.difficulty)),
            Badge::new(course.format.as_str(), format_tone(course.format)),
            Badge::new(&course.category, Tone::Neutral),
        ];
        Self { course, badges }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoursePage<'a> {
    pub filters: FilterState,
    pub summary: String,
    pub outcome: FilterOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
    pub courses: Vec<CourseCard<'a>>,
}

impl<'a> CoursePage<'a> {
    pub fn new(listing: CourseListing<'a>) -> Self {
        let outcome = listing.outcome();
        Self {
            summary: summary_line(listing.courses.len(), listing.total, "courses"),
            outcome,
            empty_state: (outcome == FilterOutcome::NoResults).then_some(NO_COURSES),
            courses: listing.courses.into_iter().map(CourseCard::new).collect(),
            filters: listing.state,
        }
    }
}

impl Display for CoursePage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        if let Some(empty) = &self.empty_state {
            return write_empty(f, empty);
        }
        for card in &self.courses {
            let c = card.course;
            writeln!(f)?;
            writeln!(f, "{}  ★ {} ({})", c.title, c.rating, c.students)?;
            match &c.location {
                Some(location) => writeln!(f, "  {} · {} · {}", c.provider, c.duration, location)?,
                None => writeln!(f, "  {} · {}", c.provider, c.duration)?,
            }
            writeln!(f, "  {}", c.description)?;
            writeln!(f, "  {}", badge_row(&card.badges))?;
            writeln!(f, "  Skills you'll learn: {}", c.skills.join(", "))?;
            writeln!(f, "  Price: {}", c.price)?;
        }
        Ok(())
    }
}

// --- Resources ---

#[derive(Debug, Clone, Serialize)]
pub struct ResourceCard<'a> {
    #[serde(flatten)]
    pub resource: &'a Resource,
    pub read_minutes: Option<u32>,
    pub visible_tags: &'a [String],
    pub hidden_tags: usize,
}

impl<'a> ResourceCard<'a> {
    pub fn new(resource: &'a Resource, tag_preview: usize) -> Self {
        let (visible_tags, hidden_tags) = preview(&resource.tags, tag_preview);
        Self {
            resource,
            read_minutes: resource.read_minutes(),
            visible_tags,
            hidden_tags,
        }
    }

    /// Card for the featured section, which lists every tag.
    pub fn full(resource: &'a Resource) -> Self {
        Self::new(resource, resource.tags.len())
    }

    fn tag_line(&self) -> String {
        let mut line = self.visible_tags.join(", ");
        if self.hidden_tags > 0 {
            line.push_str(&format!(" +{}", self.hidden_tags));
        }
        line
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourcePage<'a> {
    pub filters: FilterState,
    pub summary: String,
    pub outcome: FilterOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
    pub featured: Vec<ResourceCard<'a>>,
    pub regular: Vec<ResourceCard<'a>>,
}

impl<'a> ResourcePage<'a> {
    pub fn new(listing: ResourceListing<'a>, config: &Config) -> Self {
        let outcome = listing.outcome();
        let summary = summary_line(listing.matched(), listing.total, "resources");
        Self {
            summary,
            outcome,
            empty_state: (outcome == FilterOutcome::NoResults).then_some(NO_RESOURCES),
            featured: listing
                .sections
                .featured
                .into_iter()
                .map(ResourceCard::full)
                .collect(),
            regular: listing
                .sections
                .regular
                .into_iter()
                .map(|r| ResourceCard::new(r, config.tag_preview))
                .collect(),
            filters: listing.state,
        }
    }
}

impl Display for ResourcePage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.summary)?;
        if let Some(empty) = &self.empty_state {
            return write_empty(f, empty);
        }
        if !self.featured.is_empty() {
            writeln!(f)?;
            writeln!(f, "Featured Resources")?;
            for card in &self.featured {
                write_resource(f, card, true)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "All Resources")?;
        for card in &self.regular {
            write_resource(f, card, false)?;
        }
        Ok(())
    }
}

fn write_resource(f: &mut Formatter<'_>, card: &ResourceCard<'_>, featured: bool) -> fmt::Result {
    let r = card.resource;
    writeln!(f)?;
    if featured {
        writeln!(f, "  {} {}  [Featured]", glyph(r.icon), r.title)?;
    } else {
        writeln!(f, "  {} {}", glyph(r.icon), r.title)?;
    }
    writeln!(f, "    {} · {}", r.category, r.read_time)?;
    writeln!(f, "    {}", r.snippet)?;
    writeln!(f, "    Tags: {}", card.tag_line())
}

// --- Career ---

#[derive(Debug, Clone, Serialize)]
pub struct CareerCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub icon: IconId,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub tier: MatchTier,
    pub salary: &'a str,
    pub key_skills: &'a [String],
    pub next_steps: &'a [String],
}

impl<'a> CareerCard<'a> {
    pub fn new(career: &'a CareerSuggestion, skill_preview: usize) -> Self {
        let (key_skills, _) = preview(&career.skills, skill_preview);
        Self {
            title: &career.title,
            description: &career.description,
            icon: career.icon,
            match_score: career.match_score,
            tier: MatchTier::from_score(career.match_score),
            salary: &career.salary,
            key_skills,
            next_steps: &career.next_steps,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerPage<'a> {
    pub assessment: Assessment,
    pub careers: Vec<CareerCard<'a>>,
}

impl<'a> CareerPage<'a> {
    pub fn new(
        assessment: Assessment,
        careers: Vec<&'a CareerSuggestion>,
        config: &Config,
    ) -> Self {
        Self {
            assessment,
            careers: careers
                .into_iter()
                .map(|c| CareerCard::new(c, config.skill_preview))
                .collect(),
        }
    }
}

impl Display for CareerPage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your Career Matches (based on Indian job market trends)")?;
        for card in &self.careers {
            writeln!(f)?;
            writeln!(f, "{} {}  {}% match", glyph(card.icon), card.title, card.match_score)?;
            writeln!(f, "  {}", card.description)?;
            writeln!(f, "  Skill match: {}", meter(card.match_score, card.tier))?;
            writeln!(f, "  Expected salary: {}", card.salary)?;
            writeln!(f, "  Key skills: {}", card.key_skills.join(", "))?;
            writeln!(f, "  Next steps:")?;
            for step in card.next_steps {
                writeln!(f, "    - {step}")?;
            }
        }
        Ok(())
    }
}

// --- Profile ---

#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage<'a> {
    pub tab: ProfileTab,
    pub dashboard: &'a ProfileDashboard,
    /// Skills shown in the sidebar.
    pub top_skills: &'a [String],
}

impl<'a> ProfilePage<'a> {
    pub fn new(dashboard: &'a ProfileDashboard, tab: ProfileTab) -> Self {
        let (top_skills, _) = preview(&dashboard.profile.skills, SIDEBAR_SKILLS);
        Self {
            tab,
            dashboard,
            top_skills,
        }
    }
}

impl Display for ProfilePage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let p = &self.dashboard.profile;
        writeln!(f, "{} <{}>", p.name, p.email)?;
        writeln!(f, "  {} · {} · {} experience", p.location, p.current_role, p.experience)?;
        writeln!(f, "  Top skills: {}", self.top_skills.join(", "))?;
        writeln!(f)?;

        match self.tab {
            ProfileTab::Overview => {
                writeln!(f, "Career Readiness Score")?;
                for score in &self.dashboard.readiness {
                    writeln!(f, "  {:<20} {}", score.label, meter(score.score, score.tier))?;
                }
            }
            ProfileTab::Careers => {
                writeln!(f, "Career Matches")?;
                for m in &self.dashboard.career_matches {
                    writeln!(f)?;
                    writeln!(f, "  {}  {}% match", m.title, m.match_score)?;
                    writeln!(f, "    {}", m.reason)?;
                    writeln!(f, "    Recommended next steps: {}", m.next_steps.join(", "))?;
                }
            }
            ProfileTab::Courses => {
                writeln!(f, "Courses")?;
                for rec in &self.dashboard.course_recommendations {
                    writeln!(f)?;
                    writeln!(f, "  {}  {}% relevant", rec.title, rec.relevance)?;
                    writeln!(f, "    {} · {}", rec.provider, rec.duration)?;
                    writeln!(f, "    Skills you'll gain: {}", rec.skills_gained.join(", "))?;
                }
            }
            ProfileTab::Skills => {
                writeln!(f, "Skill Gaps")?;
                for gap in &self.dashboard.skill_gaps {
                    let priority = Badge::new(
                        &format!("{} Priority", gap.importance.as_str()),
                        importance_tone(gap.importance),
                    );
                    writeln!(f)?;
                    writeln!(
                        f,
                        "  {}  {}  gap {}%",
                        gap.skill,
                        badge_row(std::slice::from_ref(&priority)),
                        gap.gap()
                    )?;
                    writeln!(
                        f,
                        "    current {}%  target {}%",
                        gap.current_level, gap.target_level
                    )?;
                }
            }
        }
        Ok(())
    }
}

// --- Facets ---

#[derive(Debug, Clone, Serialize)]
pub struct FacetOptions {
    pub facet: &'static str,
    pub options: Vec<&'static str>,
}

impl From<FacetDomain> for FacetOptions {
    fn from(domain: FacetDomain) -> Self {
        Self {
            facet: domain.name,
            options: domain.options().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetPage {
    pub catalog: &'static str,
    pub facets: Vec<FacetOptions>,
}

impl Display for FacetPage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for facet in &self.facets {
            writeln!(f, "{} ({}): {}", facet.facet, self.catalog, facet.options.join(", "))?;
        }
        Ok(())
    }
}

fn write_empty(f: &mut Formatter<'_>, empty: &EmptyState) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", empty.title)?;
    writeln!(f, "{}", empty.hint)
}

fn badge_row(badges: &[Badge]) -> String {
    badges
        .iter()
        .map(|b| format!("[{}]", b.label))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ten-cell bar followed by the percentage and tier.
fn meter(score: u8, tier: MatchTier) -> String {
    let filled = usize::from(score.min(100)) / 10;
    let tier = match tier {
        MatchTier::High => "high",
        MatchTier::Medium => "medium",
        MatchTier::Low => "low",
    };
    format!(
        "{}{} {score}% ({tier})",
        "#".repeat(filled),
        ".".repeat(10 - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::search::{course_state, list_courses, list_resources, resource_state};

    fn catalogs() -> Catalogs {
        Catalogs::load().expect("embedded catalogs are valid")
    }

    #[test]
    fn course_page_reports_count_and_badges() {
        let catalogs = catalogs();
        let state = course_state(Some("python"), None, None).unwrap();
        let page = CoursePage::new(list_courses(&catalogs.courses, state));
        assert_eq!(page.summary, "Showing 2 of 8 courses");
        assert_eq!(page.outcome, FilterOutcome::HasResults);
        assert!(page.empty_state.is_none());
        assert_eq!(
            page.courses[0].badges[0],
            Badge::new("Advanced", Tone::Critical)
        );

        let text = page.to_string();
        assert!(text.contains("Data Science and Machine Learning"));
        assert!(text.contains("Artificial Intelligence Course"));
        assert!(!text.contains("No courses found"));
    }

    #[test]
    fn empty_course_page_shows_empty_state() {
        let catalogs = catalogs();
        let state = course_state(Some("zzz-no-match"), None, None).unwrap();
        let page = CoursePage::new(list_courses(&catalogs.courses, state));
        assert_eq!(page.empty_state, Some(NO_COURSES));
        let text = page.to_string();
        assert!(text.starts_with("Showing 0 of 8 courses"));
        assert!(text.contains("No courses found"));
    }

    #[test]
    fn course_location_is_rendered_when_present() {
        let catalogs = catalogs();
        let state = course_state(Some("IIM"), None, None).unwrap();
        let text = CoursePage::new(list_courses(&catalogs.courses, state)).to_string();
        assert!(text.contains("IIM Bangalore · 2 years · Bangalore"), "{text}");
    }

    #[test]
    fn resource_tags_overflow_marker() {
        let catalogs = catalogs();
        let card = ResourceCard::new(&catalogs.resources[0], 2);
        assert_eq!(card.visible_tags.len(), 2);
        assert_eq!(card.hidden_tags, 1);
        assert_eq!(card.tag_line(), "Resume, Job Search +1");

        let roomy = ResourceCard::new(&catalogs.resources[0], 5);
        assert_eq!(roomy.hidden_tags, 0);
        assert_eq!(roomy.tag_line(), "Resume, Job Search, Career Tips");
    }

    #[test]
    fn resource_page_sections() {
        let catalogs = catalogs();
        let config = Config::default();
        let page = ResourcePage::new(
            list_resources(&catalogs.resources, FilterState::new()),
            &config,
        );
        assert_eq!(page.summary, "Showing 12 of 12 resources");
        assert_eq!(page.featured.len(), 2);
        let text = page.to_string();
        let featured_at = text.find("Featured Resources").unwrap();
        let all_at = text.find("All Resources").unwrap();
        assert!(featured_at < all_at);
    }

    #[test]
    fn featured_cards_list_every_tag() {
        let catalogs = catalogs();
        let config = Config::default();
        let page = ResourcePage::new(
            list_resources(&catalogs.resources, FilterState::new()),
            &config,
        );
        let first = &page.featured[0];
        assert_eq!(first.hidden_tags, 0);
        assert_eq!(first.visible_tags, &["Resume", "Job Search", "Career Tips"]);
        assert!(page.regular.iter().all(|c| c.visible_tags.len() <= config.tag_preview));

        let text = page.to_string();
        assert!(text.contains("Tags: Resume, Job Search, Career Tips\n"), "{text}");
        assert!(text.contains("[Featured]"), "{text}");
        let all_at = text.find("All Resources").unwrap();
        assert!(!text[all_at..].contains("[Featured]"));
    }

    #[test]
    fn resource_page_without_featured_omits_section() {
        let catalogs = catalogs();
        let config = Config::default();
        let state = resource_state(None, Some("Finance")).unwrap();
        let text = ResourcePage::new(list_resources(&catalogs.resources, state), &config).to_string();
        assert!(!text.contains("Featured Resources"));
        assert!(text.contains("Understanding Stock Options in Indian Startups"));
    }

    #[test]
    fn empty_resource_page() {
        let catalogs = catalogs();
        let config = Config::default();
        let state = resource_state(Some("zzz-no-match"), None).unwrap();
        let page = ResourcePage::new(list_resources(&catalogs.resources, state), &config);
        assert_eq!(page.outcome, FilterOutcome::NoResults);
        assert!(page.to_string().contains("No resources found"));
    }

    #[test]
    fn career_card_truncates_skills_and_assigns_tier() {
        let catalogs = catalogs();
        let card = CareerCard::new(&catalogs.careers[0], 3);
        assert_eq!(card.key_skills, &["JavaScript", "React", "Node.js"]);
        assert_eq!(card.tier, MatchTier::High);

        let analyst = CareerCard::new(&catalogs.careers[1], 3);
        assert_eq!(analyst.tier, MatchTier::Medium);
        let pm = CareerCard::new(&catalogs.careers[5], 3);
        assert_eq!(pm.tier, MatchTier::Low);
    }

    #[test]
    fn profile_skills_tab_shows_gaps() {
        let catalogs = catalogs();
        let page = ProfilePage::new(&catalogs.dashboard, ProfileTab::Skills);
        assert_eq!(page.top_skills, &["JavaScript", "React", "Node.js"]);
        let text = page.to_string();
        assert!(text.contains("TypeScript  [High Priority]  gap 80%"), "{text}");
        assert!(text.contains("System Design  [High Priority]  gap 50%"), "{text}");
    }

    #[test]
    fn profile_overview_uses_dashboard_tiers() {
        let catalogs = catalogs();
        let page = ProfilePage::new(&catalogs.dashboard, ProfileTab::Overview);
        let text = page.to_string();
        assert!(text.contains("Technical Skills     ########.. 85% (high)"), "{text}");
        assert!(text.contains("Industry Knowledge   #######... 78% (medium)"), "{text}");
        assert!(text.contains("Leadership Skills    ######.... 65% (low)"), "{text}");
    }

    #[test]
    fn sidebar_skills_ignore_career_preview_setting() {
        let catalogs = catalogs();
        let page = ProfilePage::new(&catalogs.dashboard, ProfileTab::Overview);
        assert_eq!(page.top_skills.len(), SIDEBAR_SKILLS);
    }

    #[test]
    fn meter_fills_by_tens() {
        assert_eq!(meter(85, MatchTier::Medium), "########.. 85% (medium)");
        assert_eq!(meter(0, MatchTier::Low), ".......... 0% (low)");
    }

    #[test]
    fn importance_and_format_tones() {
        assert_eq!(importance_tone(Importance::High), Tone::Critical);
        assert_eq!(importance_tone(Importance::Low), Tone::Positive);
        assert_ne!(format_tone(CourseFormat::Online), format_tone(CourseFormat::Offline));
    }

    #[test]
    fn facet_page_lists_sentinel_first() {
        let page = FacetPage {
            catalog: "courses",
            facets: vec![crate::catalog::COURSE_FORMATS.into()],
        };
        assert_eq!(page.to_string(), "format (courses): all, Online, Offline, Hybrid\n");
    }
}
