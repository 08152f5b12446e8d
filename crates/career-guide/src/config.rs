use crate::error::AppError;

const DEFAULT_SKILL_PREVIEW: usize = 3;
const DEFAULT_TAG_PREVIEW: usize = 2;

/// Display configuration loaded from environment variables.
///
/// Every setting is optional; catalogs themselves are compiled in and not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skills shown per career card before truncation.
    pub skill_preview: usize,
    /// Tags shown per regular resource card before the "+N" overflow marker.
    pub tag_preview: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skill_preview: DEFAULT_SKILL_PREVIEW,
            tag_preview: DEFAULT_TAG_PREVIEW,
        }
    }
}

impl Config {
    /// Optional:
    /// - `CAREER_GUIDE_SKILL_PREVIEW` (default: 3)
    /// - `CAREER_GUIDE_TAG_PREVIEW` (default: 2)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        Ok(Self {
            skill_preview: preview_count(
                &lookup,
                "CAREER_GUIDE_SKILL_PREVIEW",
                DEFAULT_SKILL_PREVIEW,
            )?,
            tag_preview: preview_count(&lookup, "CAREER_GUIDE_TAG_PREVIEW", DEFAULT_TAG_PREVIEW)?,
        })
    }
}

fn preview_count(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: usize,
) -> Result<usize, AppError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
