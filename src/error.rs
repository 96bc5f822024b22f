//! Error types for bikeshare

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bikeshare operations
pub type Result<T> = std::result::Result<T, BikeshareError>;

/// Main error type for bikeshare
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dataset loading errors
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("City '{0}' is not one of chicago, new york city, washington")]
    UnknownCity(String),

    #[error("City '{0}' has an empty file name")]
    EmptyFileName(String),
}

/// Errors raised while reading and filtering a city's trips
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("The city '{0}' is not recognized")]
    UnrecognizedCity(String),

    #[error("Data file for {city} not found at {}", path.display())]
    SourceNotFound { city: String, path: PathBuf },

    #[error("{} is missing the '{column}' column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Failed to read {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Row {row}: cannot parse {column} '{value}' as a timestamp")]
    MalformedTimestamp {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Row {row}: trip duration {value} is not a non-negative number")]
    InvalidDuration { row: usize, value: f64 },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for loading operations
pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Helper function to determine if an error is a user typo in the city name
/// (which should be reported as a hint, not as a data problem)
pub fn is_unrecognized_city(err: &LoadError) -> bool {
    matches!(err, LoadError::UnrecognizedCity(_))
}
