use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::search::{AnnealingOptions, GeneticOptions, HillClimbingOptions, PathOptions};

/// Environment variable consulted when no config path is given.
pub const CONFIG_ENV: &str = "CHROMATUNE_CONFIG";

/// Optimizer configuration loaded from a YAML file.
///
/// Every section and field is optional; missing values take the optimizer
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Seed for the random source. Unseeded runs draw from OS entropy.
    pub seed: Option<u64>,

    pub hill_climbing: HillClimbingOptions,

    pub annealing: AnnealingOptions,

    pub genetic: GeneticConfig,

    pub path: PathOptions,
}

/// Genetic options plus the size of the generated starting population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Palettes seeded when no starting population is supplied
    pub population_size: usize,

    #[serde(flatten)]
    pub options: GeneticOptions,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            options: GeneticOptions::default(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load `path`, or the file named by `CHROMATUNE_CONFIG` when `path` is
    /// `None`. A missing, unreadable or invalid file falls back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(value) => PathBuf::from(value),
                None => return Self::default(),
            },
        };

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    seeded = config.seed.is_some(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    %e,
                    "Failed to load config, using defaults"
                );
                Self::default()
            }
        }
    }
}
