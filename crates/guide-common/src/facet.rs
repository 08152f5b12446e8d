use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommonError;

/// Control value meaning "no constraint on this facet".
pub const ALL: &str = "all";

/// A selected facet value: either unconstrained or one exact value.
///
/// Serializes as the raw control string, so `Facet::All` round-trips as `"all"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Exact, case-sensitive comparison against a record's field.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == value,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(selected) => selected,
        }
    }
}

impl From<String> for Facet {
    fn from(raw: String) -> Self {
        if raw == ALL {
            Self::All
        } else {
            Self::Only(raw)
        }
    }
}

impl From<&str> for Facet {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Facet> for String {
    fn from(facet: Facet) -> Self {
        match facet {
            Facet::All => ALL.to_string(),
            Facet::Only(selected) => selected,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The allowed concrete values of a facet (the options of its select control).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetDomain {
    /// Facet name, e.g. "category" or "format". Also the key used in `FilterState`.
    pub name: &'static str,
    /// Concrete values in display order, not including the `all` sentinel.
    pub values: &'static [&'static str],
}

impl FacetDomain {
    pub const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
        Self { name, values }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    /// All control options in display order, starting with the `all` sentinel.
    pub fn options(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(ALL).chain(self.values.iter().copied())
    }

    /// Map a raw control value onto this domain.
    pub fn parse(&self, raw: &str) -> Result<Facet, CommonError> {
        if raw == ALL {
            return Ok(Facet::All);
        }
        if self.contains(raw) {
            return Ok(Facet::only(raw));
        }
        Err(CommonError::UnknownFacetValue {
            facet: self.name.to_string(),
            value: raw.to_string(),
            allowed: self.options().map(str::to_string).collect(),
        })
    }

    /// Like [`FacetDomain::parse`], treating an absent value as `all`.
    pub fn parse_optional(&self, raw: Option<&str>) -> Result<Facet, CommonError> {
        raw.map_or(Ok(Facet::All), |value| self.parse(value))
    }
}
