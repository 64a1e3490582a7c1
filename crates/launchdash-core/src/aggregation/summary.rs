use crate::dataset::LaunchRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const TOTAL_ROW_LABEL: &str = "Total";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoosterOutcomeRow {
    pub category: String,
    pub successes: usize,
    pub failures: usize,
    pub total: usize,
}

impl BoosterOutcomeRow {
    pub fn new(category: impl Into<String>, successes: usize, failures: usize) -> Self {
        Self {
            category: category.into(),
            successes,
            failures,
            total: successes + failures,
        }
    }
}

/// Per-category outcome counts, largest `total` first, plus the synthetic
/// total row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoosterOutcomeSummary {
    pub categories: Vec<BoosterOutcomeRow>,
    pub total: BoosterOutcomeRow,
}

impl BoosterOutcomeSummary {
    /// Category rows followed by the total row.
    pub fn rows(&self) -> impl Iterator<Item = &BoosterOutcomeRow> {
        self.categories.iter().chain(std::iter::once(&self.total))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A category with no launches of one outcome counts 0 for it. Categories
/// with equal totals are ordered by name.
pub fn booster_outcome_summary(records: &[&LaunchRecord]) -> BoosterOutcomeSummary {
    let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for r in records {
        let entry = counts
            .entry(r.booster_version_category.as_str())
            .or_default();
        if r.outcome.is_success() {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }

    let mut categories: Vec<BoosterOutcomeRow> = counts
        .into_iter()
        .map(|(category, (s, f))| BoosterOutcomeRow::new(category, s, f))
        .collect();
    categories.sort_by(|a, b| b.total.cmp(&a.total));

    let (successes, failures) = categories
        .iter()
        .fold((0, 0), |(s, f), row| (s + row.successes, f + row.failures));

    BoosterOutcomeSummary {
        categories,
        total: BoosterOutcomeRow::new(TOTAL_ROW_LABEL, successes, failures),
    }
}
