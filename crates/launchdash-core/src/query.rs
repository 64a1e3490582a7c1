use crate::error::{DashError, DashResult};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Dropdown value selecting every site.
pub const ALL_SITES: &str = "ALL";

/// Site half of a query: every site, or exactly one.
///
/// Any string other than `"ALL"` names a site. Names absent from the dataset
/// are valid and simply match nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(raw.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(name) => name == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES,
            SiteSelector::Site(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelector::All)
    }
}

impl FromStr for SiteSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelector::parse(s))
    }
}

impl From<&str> for SiteSelector {
    fn from(s: &str) -> Self {
        SiteSelector::parse(s)
    }
}

impl From<String> for SiteSelector {
    fn from(s: String) -> Self {
        SiteSelector::parse(&s)
    }
}

impl From<SiteSelector> for String {
    fn from(sel: SiteSelector) -> Self {
        sel.as_str().to_string()
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated closed payload interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Bounds are never swapped: `low > high` or a non-finite bound is an
    /// `InvalidRange` error.
    pub fn new(low: f64, high: f64) -> DashResult<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(DashError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }

    /// Finite for every valid range, even near `f64::MAX`.
    pub fn midpoint(&self) -> f64 {
        self.low / 2.0 + self.high / 2.0
    }
}

impl TryFrom<(f64, f64)> for PayloadRange {
    type Error = DashError;

    fn try_from((low, high): (f64, f64)) -> Result<Self, Self::Error> {
        PayloadRange::new(low, high)
    }
}

/// The two control values supplied on each interaction. The range is kept
/// raw; the aggregation engine validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    pub site: SiteSelector,
    pub payload_range: (f64, f64),
}

impl QueryParams {
    pub fn new(site: impl Into<SiteSelector>, low: f64, high: f64) -> Self {
        Self {
            site: site.into(),
            payload_range: (low, high),
        }
    }
}
