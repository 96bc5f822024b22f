//! Configuration validation
//!
//! This module checks a parsed configuration and turns its city overrides
//! into typed keys.

use crate::config::types::Config;
use crate::data::City;
use crate::error::{ConfigError, ConfigResult};
use std::collections::BTreeMap;

/// Validate a complete configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    city_overrides(config).map(|_| ())
}

/// City file overrides keyed by [`City`].
///
/// Keys are matched case-insensitively against the recognized cities; the
/// set of cities cannot be extended from configuration.
pub fn city_overrides(config: &Config) -> ConfigResult<BTreeMap<City, String>> {
    let mut overrides = BTreeMap::new();

    for (name, file) in &config.cities {
        let city = City::from_name(name).map_err(|_| ConfigError::UnknownCity(name.clone()))?;

        if file.trim().is_empty() {
            return Err(ConfigError::EmptyFileName(city.key().to_string()));
        }

        if overrides.insert(city, file.trim().to_string()).is_some() {
            return Err(ConfigError::Invalid(format!(
                "City '{}' is listed more than once",
                city.key()
            )));
        }
    }

    Ok(overrides)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: &[(&str, &str)]) -> Config {
        Config {
            data_dir: None,
            cities: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_valid_overrides() {
        let overrides = city_overrides(&config(&[("Chicago", "chi.csv")])).unwrap();
        assert_eq!(overrides.get(&City::Chicago), Some(&"chi.csv".to_string()));
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_unknown_city() {
        let result = validate_config(&config(&[("boston", "boston.csv")]));
        assert!(matches!(result, Err(ConfigError::UnknownCity(ref name)) if name == "boston"));
    }

    #[test]
    fn test_empty_file_name() {
        let result = validate_config(&config(&[("washington", "  ")]));
        assert!(matches!(result, Err(ConfigError::EmptyFileName(_))));
    }

    #[test]
    fn test_duplicate_city_in_different_case() {
        let result = validate_config(&config(&[("chicago", "a.csv"), ("CHICAGO", "b.csv")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
