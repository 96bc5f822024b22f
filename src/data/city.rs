//! The fixed set of cities and where their trips live on disk

use crate::error::{LoadError, LoadResult};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// A city with trip data
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All recognized cities, in prompt order
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Resolve a city name typed by the user. Matching ignores case and
    /// surrounding whitespace.
    pub fn from_name(name: &str) -> LoadResult<Self> {
        let normalized = name.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.key() == normalized)
            .ok_or(LoadError::UnrecognizedCity(normalized))
    }

    /// Lowercase lookup key, e.g. `new york city`
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File name used when the configuration does not override it
    pub fn default_file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago_cleaned.csv",
            City::NewYorkCity => "new_york_city_cleaned.csv",
            City::Washington => "washington_cleaned.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for City {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::from_name(s)
    }
}

/// Immutable city → data file mapping, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTable {
    paths: BTreeMap<City, PathBuf>,
}

impl CityTable {
    /// Table with the default file names inside `data_dir`
    pub fn new(data_dir: &Path) -> Self {
        Self::with_overrides(data_dir, &BTreeMap::new())
    }

    /// Table with per-city file names replaced by `overrides`. Relative
    /// file names are joined onto `data_dir`.
    pub fn with_overrides(data_dir: &Path, overrides: &BTreeMap<City, String>) -> Self {
        let paths = City::ALL
            .into_iter()
            .map(|city| {
                let file = overrides
                    .get(&city)
                    .map(String::as_str)
                    .unwrap_or_else(|| city.default_file_name());
                (city, data_dir.join(file))
            })
            .collect();
        CityTable { paths }
    }

    /// Data file for a city
    pub fn path(&self, city: City) -> &Path {
        // Every city is inserted by the constructors.
        self.paths
            .get(&city)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| Path::new(city.default_file_name()))
    }

    /// Iterate over all entries in city order
    pub fn iter(&self) -> impl Iterator<Item = (City, &Path)> {
        self.paths.iter().map(|(city, path)| (*city, path.as_path()))
    }
}
