//! Configuration file parsing and discovery

use crate::config::schema::city_overrides;
use crate::config::types::Config;
use crate::data::CityTable;
use crate::error::{BikeshareError, ConfigError, ConfigResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["bikeshare.yml", "bikeshare.yaml"];

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// Find the configuration file by searching current and parent directories
pub fn find_config_file() -> ConfigResult<PathBuf> {
    find_config_file_from(env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?)
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        for file_name in CONFIG_FILE_NAMES {
            let config_path = current_dir.join(file_name);
            searched_paths.push(config_path.display().to_string());

            if config_path.is_file() {
                return Ok(config_path);
            }
        }

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                // Reached root without finding config
                return Err(ConfigError::NotFound(searched_paths.join(", ")));
            }
        }
    }
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, BikeshareError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e))
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string. An empty document is the default
/// configuration.
pub fn parse_config(yaml: &str) -> Result<Config, BikeshareError> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Parse configuration with automatic file discovery. A missing file is not
/// an error; the defaults apply.
pub fn parse_config_auto() -> Result<(Config, Option<PathBuf>), BikeshareError> {
    match find_config_file() {
        Ok(path) => {
            log::debug!("using config file {}", path.display());
            let config = parse_config_file(&path)?;
            Ok((config, Some(path)))
        }
        Err(ConfigError::NotFound(searched)) => {
            log::debug!("no config file found (searched: {})", searched);
            Ok((Config::default(), None))
        }
        Err(e) => Err(e.into()),
    }
}

/// Where the data directory comes from, highest precedence first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataDirSources {
    /// `--data-dir`
    pub flag: Option<PathBuf>,
    /// [`DATA_DIR_ENV`]
    pub env: Option<PathBuf>,
    /// Directory of the config file, used to anchor a relative `data_dir`
    pub config_dir: Option<PathBuf>,
}

impl DataDirSources {
    /// Pick up the environment variable, ignoring empty values
    pub fn from_env(flag: Option<PathBuf>, config_path: Option<&Path>) -> Self {
        DataDirSources {
            flag,
            env: env::var_os(DATA_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            config_dir: config_path.and_then(|p| p.parent()).map(Path::to_path_buf),
        }
    }
}

/// Resolve the data directory: flag, then environment, then the config's
/// `data_dir`, then the config file's directory, then `.`.
pub fn resolve_data_dir(config: &Config, sources: &DataDirSources) -> PathBuf {
    if let Some(dir) = &sources.flag {
        return dir.clone();
    }
    if let Some(dir) = &sources.env {
        return dir.clone();
    }
    let base = sources
        .config_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    match &config.data_dir {
        Some(dir) => base.join(dir),
        None => base,
    }
}

/// Build the immutable city table from a validated configuration
pub fn build_city_table(config: &Config, sources: &DataDirSources) -> ConfigResult<CityTable> {
    let overrides = city_overrides(config)?;
    let data_dir = resolve_data_dir(config, sources);
    log::debug!("data directory: {}", data_dir.display());
    Ok(CityTable::with_overrides(&data_dir, &overrides))
}
