use super::tally_in_order;
use crate::dataset::Dataset;
use crate::query::SiteSelector;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const ALL_SITES_PIE_TITLE: &str = "Total Success Launches By Site";

/// Grouped counts behind the proportion chart. `labels[i]` owns `values[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteBreakdown {
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    pub title: String,
}

impl SiteBreakdown {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn sum(&self) -> usize {
        self.values.iter().sum()
    }
}

/// For `ALL`, successes per site (every site listed, even with zero). For a
/// single site, launches per outcome class at that site; only classes that
/// occur are listed, and an unknown site gives an empty grouping.
pub fn site_success_breakdown(dataset: &Dataset, site: &SiteSelector) -> SiteBreakdown {
    let (groups, title) = match site {
        SiteSelector::All => {
            let groups = tally_in_order(
                dataset
                    .all()
                    .iter()
                    .map(|r| (r.site.clone(), usize::from(r.outcome.is_success()))),
            );
            (groups, ALL_SITES_PIE_TITLE.to_string())
        }
        SiteSelector::Site(name) => {
            let groups = tally_in_order(
                dataset
                    .all()
                    .iter()
                    .filter(|r| &r.site == name)
                    .map(|r| (r.outcome.to_string(), 1)),
            );
            (groups, format!("Success vs Failure for site {}", name))
        }
    };

    debug!("Pie breakdown for '{}': {} groups", site, groups.len());

    let (labels, values) = groups.into_iter().unzip();
    SiteBreakdown {
        labels,
        values,
        title,
    }
}
