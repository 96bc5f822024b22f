//! Reading a city's trip file into a [`Dataset`]

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::data::city::{City, CityTable};
use crate::data::filter::{DayFilter, MonthFilter, TripFilter};
use crate::data::model::{Dataset, TripRecord, View};
use crate::error::{LoadError, LoadResult};

/// Columns every trip file must provide
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "start_time",
    "end_time",
    "start_station",
    "end_station",
    "trip_duration",
    "user_type",
];

/// Timestamp layouts accepted in `start_time` / `end_time`
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// One CSV row before validation. Unlisted columns are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    start_time: String,
    end_time: String,
    start_station: String,
    end_station: String,
    trip_duration: f64,
    user_type: Option<String>,
}

/// Parse a timestamp in any of the accepted layouts
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Read trips from CSV text. `source` names the input in errors.
pub fn read_trips<R: Read>(city: City, reader: R, source: &Path) -> LoadResult<Dataset> {
    let csv_error = |e: csv::Error| LoadError::Csv {
        path: source.to_path_buf(),
        source: e,
    };

    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: source.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawTrip>().enumerate() {
        let raw = result.map_err(csv_error)?;
        records.push(validate(idx + 1, raw)?);
    }

    Ok(Dataset::from_records(city, records))
}

/// Turn a raw row into a record. `row` is 1-based, excluding the header.
fn validate(row: usize, raw: RawTrip) -> LoadResult<TripRecord> {
    let start_time =
        parse_timestamp(&raw.start_time).ok_or_else(|| LoadError::MalformedTimestamp {
            row,
            column: "start_time",
            value: raw.start_time.clone(),
        })?;
    let end_time = parse_timestamp(&raw.end_time).ok_or_else(|| LoadError::MalformedTimestamp {
        row,
        column: "end_time",
        value: raw.end_time.clone(),
    })?;

    if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
        return Err(LoadError::InvalidDuration {
            row,
            value: raw.trip_duration,
        });
    }

    let user_type = raw
        .user_type
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(TripRecord {
        start_time,
        end_time,
        start_station: raw.start_station,
        end_station: raw.end_station,
        trip_duration: raw.trip_duration,
        user_type,
    })
}

/// Read the whole trip file for `city`
pub fn read_city(table: &CityTable, city: City) -> LoadResult<Dataset> {
    let path = table.path(city);
    if !path.is_file() {
        return Err(LoadError::SourceNotFound {
            city: city.to_string(),
            path: path.to_path_buf(),
        });
    }
    log::info!("loading {} trips from {}", city, path.display());

    let file = std::fs::File::open(path).map_err(|e| LoadError::Csv {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    let dataset = read_trips(city, std::io::BufReader::new(file), path)?;
    log::info!("read {} trips for {}", dataset.len(), city);
    Ok(dataset)
}

/// A city's dataset together with the trips selected by a filter
#[derive(Debug, Clone)]
pub struct FilteredDataset {
    dataset: Dataset,
    filter: TripFilter,
    selection: Vec<usize>,
    source: PathBuf,
}

impl FilteredDataset {
    /// Apply `filter` to a full dataset
    pub fn new(dataset: Dataset, filter: TripFilter, source: PathBuf) -> Self {
        let selection = filter.apply(&dataset.view()).indices().to_vec();
        FilteredDataset {
            dataset,
            filter,
            selection,
            source,
        }
    }

    /// The selected trips
    pub fn view(&self) -> View<'_> {
        self.dataset.select(&self.selection)
    }

    /// Every trip of the city, unfiltered
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filter(&self) -> &TripFilter {
        &self.filter
    }

    pub fn city(&self) -> City {
        self.dataset.city()
    }

    /// File the trips were read from
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// Loads city datasets through a fixed [`CityTable`]
#[derive(Debug, Clone)]
pub struct Loader {
    table: CityTable,
}

impl Loader {
    pub fn new(table: CityTable) -> Self {
        Loader { table }
    }

    /// Resolve the city, read its file, derive temporal fields, then filter
    /// by month and day.
    pub fn load(&self, city: &str, month: &str, day: &str) -> LoadResult<FilteredDataset> {
        let city = City::from_name(city)?;
        let filter = TripFilter::parse(month, day);

        if let MonthFilter::Unknown(text) = &filter.month {
            log::warn!("month '{}' is not January through June; no trips will match", text);
        }
        if let DayFilter::Unknown(text) = &filter.day {
            log::warn!("'{}' is not a weekday name; no trips will match", text);
        }

        let dataset = read_city(&self.table, city)?;
        let filtered = FilteredDataset::new(dataset, filter, self.table.path(city).to_path_buf());
        log::debug!(
            "{} of {} trips match {} / {}",
            filtered.view().len(),
            filtered.dataset().len(),
            filtered.filter().month,
            filtered.filter().day
        );
        Ok(filtered)
    }
}
