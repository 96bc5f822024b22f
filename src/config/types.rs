//! Core configuration types
//!
//! This module defines the data structures that represent a bikeshare.yml configuration file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Directory holding the city files, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// File name overrides keyed by city name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cities: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full() {
        let yaml = r#"
data_dir: ./trips
cities:
  chicago: chi.csv
  New York City: nyc.csv
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("./trips")));
        assert_eq!(config.cities.get("chicago"), Some(&"chi.csv".to_string()));
        assert_eq!(
            config.cities.get("New York City"),
            Some(&"nyc.csv".to_string())
        );
    }

    #[test]
    fn test_deserialize_empty_document() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_serialize_skips_defaults() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert_eq!(yaml.trim(), "{}");
    }
}
