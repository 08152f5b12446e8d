use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static READ_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) min read$").expect("valid regex"));

/// Opaque icon tag stored in catalog records, resolved to a glyph by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    Code,
    TrendingUp,
    Palette,
    Calculator,
    Users,
    Briefcase,
    FileText,
    BookOpen,
}

/// Delivery format of a course. Also the `format` facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseFormat {
    Online,
    Offline,
    Hybrid,
}

impl CourseFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
            Self::Hybrid => "Hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Priority of closing a skill gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Display band for a static match or relevance percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

impl MatchTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            Self::High
        } else if score >= 75 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A course or certification on the education listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique within the course catalog, e.g. "1"
    pub id: String,
    pub title: String,
    /// Institution or platform, e.g. "NPTEL"
    pub provider: String,
    /// Display string, e.g. "12 weeks"
    pub duration: String,
    pub format: CourseFormat,
    /// One of the course category facet values, e.g. "Technology"
    pub category: String,
    pub difficulty: Difficulty,
    /// 0.0 to 5.0
    pub rating: f32,
    /// Display string, e.g. "12,500+"
    pub students: String,
    pub description: String,
    pub skills: Vec<String>,
    /// Display string, "Free" or a rupee amount
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// An article on the resources listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub category: String,
    /// Display string of the form "8 min read"
    pub read_time: String,
    pub tags: Vec<String>,
    pub icon: IconId,
    #[serde(default)]
    pub featured: bool,
}

impl Resource {
    /// Minutes parsed from the read-time display string.
    pub fn read_minutes(&self) -> Option<u32> {
        READ_TIME
            .captures(&self.read_time)
            .and_then(|caps| caps[1].parse().ok())
    }
}

/// A career path shown after the assessment form is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub title: String,
    pub description: String,
    pub icon: IconId,
    /// Static percentage, 0 to 100
    #[serde(rename = "match")]
    pub match_score: u8,
    /// Display string, e.g. "₹6-25 LPA"
    pub salary: String,
    pub skills: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub location: String,
    pub current_role: String,
    /// Display string, e.g. "2 years"
    pub experience: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub title: String,
    #[serde(rename = "match")]
    pub match_score: u8,
    pub reason: String,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub relevance: u8,
    pub skills_gained: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub importance: Importance,
    pub current_level: u8,
    pub target_level: u8,
}

impl SkillGap {
    /// Percentage points between current and target level.
    pub fn gap(&self) -> i16 {
        i16::from(self.target_level) - i16::from(self.current_level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessScore {
    pub label: String,
    pub score: u8,
    /// Band assigned to this row by the dashboard, not derived from `score`.
    pub tier: MatchTier,
}

/// The mock user dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDashboard {
    pub profile: Profile,
    pub readiness: Vec<ReadinessScore>,
    pub career_matches: Vec<CareerMatch>,
    pub course_recommendations: Vec<CourseRecommendation>,
    pub skill_gaps: Vec<SkillGap>,
}
