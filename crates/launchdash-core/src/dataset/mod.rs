pub mod loader;
pub mod record;

pub use self::record::{LaunchRecord, Outcome};

use crate::error::{DashError, DashResult};
use itertools::Itertools;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// The launch records, loaded once and read-only afterwards.
///
/// Payload bounds, the site list and the fingerprint are computed at
/// construction and never change.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    sites: Vec<String>,
    fingerprint: String,
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> DashResult<Self> {
        let path = path.as_ref();
        info!("📂 Loading launch records from {:?}", path);

        let file = File::open(path).map_err(|e| {
            DashError::DataLoad(format!("could not open '{}': {}", path.display(), e))
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> DashResult<Self> {
        let records = loader::load_records(reader)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<LaunchRecord>) -> DashResult<Self> {
        if records.is_empty() {
            return Err(DashError::DataLoad(
                "dataset contains no launch records".to_string(),
            ));
        }

        if let Some((idx, bad)) = records
            .iter()
            .find_position(|r| !r.payload_mass_kg.is_finite() || r.payload_mass_kg < 0.0)
        {
            return Err(DashError::DataLoad(format!(
                "record {}: payload mass must be a non-negative number, got {}",
                idx + 1,
                bad.payload_mass_kg
            )));
        }

        let (min_payload, max_payload) = records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg)),
        );

        let sites: Vec<String> = records
            .iter()
            .map(|r| r.site.as_str())
            .unique()
            .map(String::from)
            .collect();

        let mut hasher = Sha256::new();
        hasher.update(serde_json::to_string(&records)?.as_bytes());
        let fingerprint = hex::encode(hasher.finalize());

        info!(
            "🚀 Dataset ready: {} launches across {} sites, payload {} kg to {} kg",
            records.len(),
            sites.len(),
            min_payload,
            max_payload
        );

        Ok(Self {
            records,
            min_payload,
            max_payload,
            sites,
            fingerprint,
        })
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn all(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, payload: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord::new(site, payload, "FT", outcome)
    }

    #[test]
    fn bounds_and_sites_are_computed_once() {
        let ds = Dataset::from_records(vec![
            rec("B", 300.0, Outcome::Success),
            rec("A", 50.0, Outcome::Failure),
            rec("B", 9000.0, Outcome::Failure),
        ])
        .unwrap();

        assert_eq!(ds.min_payload(), 50.0);
        assert_eq!(ds.max_payload(), 9000.0);
        assert_eq!(ds.sites(), ["B".to_string(), "A".to_string()]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Dataset::from_records(vec![rec("A", 1.0, Outcome::Success)]).unwrap();
        let b = Dataset::from_records(vec![rec("A", 1.0, Outcome::Success)]).unwrap();
        let c = Dataset::from_records(vec![rec("A", 2.0, Outcome::Success)]).unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn rejects_empty_and_negative_payloads() {
        assert!(matches!(
            Dataset::from_records(vec![]),
            Err(DashError::DataLoad(_))
        ));
        assert!(matches!(
            Dataset::from_records(vec![rec("A", -1.0, Outcome::Success)]),
            Err(DashError::DataLoad(_))
        ));
    }
}
