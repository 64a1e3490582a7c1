use crate::dataset::LaunchRecord;
use crate::error::{DashError, DashResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Gaussian offset added to binary outcomes so overlapping points separate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    pub seed: u64,
    pub std_dev: f64,
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            seed: 9,
            std_dev: 0.02,
        }
    }
}

/// `outcome_class + N(0, std_dev)` per record. The generator is reseeded on
/// every call, so the same records always get the same offsets.
pub fn jitter_outcomes(records: &[&LaunchRecord], jitter: &Jitter) -> DashResult<Vec<f64>> {
    // `Normal::new` accepts a negative spread and mirrors the noise.
    if !jitter.std_dev.is_finite() || jitter.std_dev < 0.0 {
        return Err(DashError::Config(format!(
            "jitter std dev must be a non-negative number, got {}",
            jitter.std_dev
        )));
    }
    let normal = Normal::new(0.0, jitter.std_dev).map_err(|e| {
        DashError::Config(format!("invalid jitter std dev {}: {}", jitter.std_dev, e))
    })?;
    let mut rng = StdRng::seed_from_u64(jitter.seed);

    Ok(records
        .iter()
        .map(|r| f64::from(r.outcome_class()) + normal.sample(&mut rng))
        .collect())
}
