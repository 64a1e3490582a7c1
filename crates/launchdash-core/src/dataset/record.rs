use serde::{Deserialize, Serialize};
use strum::Display;

/// Launch result as recorded in the `class` column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    #[strum(serialize = "0")]
    Failure,
    #[strum(serialize = "1")]
    Success,
}

impl Outcome {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        Outcome::from_class(class).ok_or_else(|| format!("class must be 0 or 1, got {}", class))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }

    pub fn outcome_class(&self) -> u8 {
        self.outcome.class()
    }
}
