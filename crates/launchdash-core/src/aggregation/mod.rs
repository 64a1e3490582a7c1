//! Pure query functions over a [`Dataset`]. Nothing here is cached: every
//! call derives fresh values from the immutable records.

pub mod breakdown;
pub mod jitter;
pub mod payload;
pub mod summary;

pub use self::breakdown::{site_success_breakdown, SiteBreakdown};
pub use self::jitter::{jitter_outcomes, Jitter};
pub use self::payload::{payload_outcome_view, payload_outcome_view_with, PayloadOutcomeView};
pub use self::summary::{booster_outcome_summary, BoosterOutcomeRow, BoosterOutcomeSummary};

use crate::dataset::{Dataset, LaunchRecord};
use crate::query::{PayloadRange, SiteSelector};

/// Records matching a site selector and a closed payload range, in dataset
/// order.
pub type FilteredView<'a> = Vec<&'a LaunchRecord>;

/// The shared predicate of both chart pipelines. Site and payload bounds are
/// applied together in one pass.
pub fn filter_view<'a>(
    dataset: &'a Dataset,
    site: &SiteSelector,
    range: &PayloadRange,
) -> FilteredView<'a> {
    dataset
        .all()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && site.matches(&r.site))
        .collect()
}

/// Counts items per key, keeping keys in order of first appearance.
pub(crate) fn tally_in_order<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: PartialEq,
    I: IntoIterator<Item = (K, usize)>,
{
    let mut groups: Vec<(K, usize)> = Vec::new();
    for (key, n) in keys {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += n,
            None => groups.push((key, n)),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_appearance_order() {
        let groups = tally_in_order(vec![("b", 1), ("a", 0), ("b", 1), ("c", 1)]);
        assert_eq!(groups, vec![("b", 2), ("a", 0), ("c", 1)]);
    }
}
