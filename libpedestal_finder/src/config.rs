use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::subrun::SubrunId;

/// Structure representing the application configuration. Contains pathing and run information
/// Configs are seralizable and deserializable to YAML using serde and serde_yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub dl1_path: PathBuf,
    pub output_path: PathBuf,
    pub first_run_number: u32,
    pub last_run_number: u32,
    pub n_threads: i32,
}

impl Default for Config {
    /// Generate a new Config object. All fields will be empty/invalid
    fn default() -> Self {
        Self {
            dl1_path: PathBuf::from("None"),
            output_path: PathBuf::from("None"),
            first_run_number: 0,
            last_run_number: 0,
            n_threads: 1,
        }
    }
}

impl Config {
    /// Read the configuration in a YAML file
    /// Returns a Config if successful
    pub fn read_config_file(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::BadFilePath(config_path.to_path_buf()));
        }

        let yaml_str = std::fs::read_to_string(config_path)?;

        Ok(serde_yaml::from_str::<Self>(&yaml_str)?)
    }

    /// Check if a run number falls in the configured inclusive range
    pub fn is_run_selected(&self, run_number: u32) -> bool {
        self.first_run_number <= run_number && run_number <= self.last_run_number
    }

    /// Get the path to the output pedestal id file for a sub-run
    pub fn get_output_file_name(&self, subrun: &SubrunId) -> Result<PathBuf, ConfigError> {
        let output_file_path: PathBuf = self.output_path.join(format!(
            "pedestal_ids_Run{:0>5}.{:0>4}.h5",
            subrun.run_number, subrun.subrun_index
        ));
        if self.output_path.exists() {
            Ok(output_file_path)
        } else {
            Err(ConfigError::BadFilePath(self.output_path.clone()))
        }
    }

    pub fn is_n_threads_valid(&self) -> bool {
        self.n_threads >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_range() {
        let config = Config {
            first_run_number: 2900,
            last_run_number: 2910,
            ..Default::default()
        };
        assert!(config.is_run_selected(2900));
        assert!(config.is_run_selected(2905));
        assert!(config.is_run_selected(2910));
        assert!(!config.is_run_selected(2899));
        assert!(!config.is_run_selected(2911));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            dl1_path: PathBuf::from("/data/dl1"),
            output_path: PathBuf::from("/data/pedestals"),
            first_run_number: 2700,
            last_run_number: 2750,
            n_threads: 4,
        };
        let yaml_str = serde_yaml::to_string(&config).unwrap();
        let parsed = serde_yaml::from_str::<Config>(&yaml_str).unwrap();
        assert_eq!(parsed.dl1_path, config.dl1_path);
        assert_eq!(parsed.output_path, config.output_path);
        assert_eq!(parsed.first_run_number, config.first_run_number);
        assert_eq!(parsed.last_run_number, config.last_run_number);
        assert_eq!(parsed.n_threads, config.n_threads);
    }
}
