use crate::aggregation::Jitter;
use crate::error::{DashError, DashResult};
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    // === SCATTER JITTER ===
    #[arg(long, default_value_t = 9)]
    pub jitter_seed: u64,
    #[arg(long, default_value_t = 0.02)]
    pub jitter_std_dev: f64,

    // === SCATTER AXES ===
    #[arg(long, default_value_t = 100.0)]
    pub axis_padding_kg: f64,

    // === PAYLOAD SLIDER ===
    #[arg(long, default_value_t = 0.0)]
    pub slider_min_kg: f64,
    #[arg(long, default_value_t = 10_000.0)]
    pub slider_max_kg: f64,
    #[arg(long, default_value_t = 1_000.0)]
    pub slider_step_kg: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            jitter_seed: 9,
            jitter_std_dev: 0.02,
            axis_padding_kg: 100.0,
            slider_min_kg: 0.0,
            slider_max_kg: 10_000.0,
            slider_step_kg: 1_000.0,
        }
    }
}

impl DashboardConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> DashResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashResult<()> {
        if !self.jitter_std_dev.is_finite() || self.jitter_std_dev < 0.0 {
            return Err(DashError::Config(format!(
                "jitter_std_dev must be a non-negative number, got {}",
                self.jitter_std_dev
            )));
        }
        if !self.axis_padding_kg.is_finite() || self.axis_padding_kg < 0.0 {
            return Err(DashError::Config(format!(
                "axis_padding_kg must be a non-negative number, got {}",
                self.axis_padding_kg
            )));
        }
        if !(self.slider_min_kg <= self.slider_max_kg) {
            return Err(DashError::Config(format!(
                "slider_min_kg ({}) exceeds slider_max_kg ({})",
                self.slider_min_kg, self.slider_max_kg
            )));
        }
        if !(self.slider_step_kg > 0.0) {
            return Err(DashError::Config(format!(
                "slider_step_kg must be positive, got {}",
                self.slider_step_kg
            )));
        }
        Ok(())
    }

    pub fn jitter(&self) -> Jitter {
        Jitter {
            seed: self.jitter_seed,
            std_dev: self.jitter_std_dev,
        }
    }

    /// Copies fields the user typed on the command line over the values
    /// loaded from file. Defaults filled in by clap are ignored.
    pub fn merge_from_cli(&mut self, cli_config: &DashboardConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli_config.$field.clone();
                }
            };
        }

        update_if_present!(jitter_seed, "jitter_seed");
        update_if_present!(jitter_std_dev, "jitter_std_dev");
        update_if_present!(axis_padding_kg, "axis_padding_kg");
        update_if_present!(slider_min_kg, "slider_min_kg");
        update_if_present!(slider_max_kg, "slider_max_kg");
        update_if_present!(slider_step_kg, "slider_step_kg");
    }
}
