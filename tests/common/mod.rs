//! Common test utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "start_time,end_time,start_station,end_station,trip_duration,user_type";

/// Chicago sample: nine trips, January to June 2017.
///
/// 2017-01-02 and 2017-02-06 are Mondays.
pub const CHICAGO_CSV: &str = "\
,start_time,end_time,trip_duration,start_station,end_station,user_type,gender,birth_year
0,2017-01-02 08:05:00,2017-01-02 08:10:00,300,Canal St,Clark St,Subscriber,Male,1980
1,2017-01-02 08:30:00,2017-01-02 08:45:00,900,Canal St,Clark St,Subscriber,Female,1975
2,2017-01-03 17:00:00,2017-01-03 17:20:00,1200,Clark St,Canal St,Customer,,
3,2017-02-06 17:10:00,2017-02-06 17:20:00,600,Canal St,Clark St,Subscriber,Male,1990
4,2017-03-15 12:00:00,2017-03-15 12:30:00,1800,Lake Shore Dr,Canal St,Customer,,
5,2017-04-20 07:45:00,2017-04-20 07:55:00,600,Clark St,Lake Shore Dr,Subscriber,Female,1988
6,2017-05-01 08:00:00,2017-05-01 08:05:00,300,Canal St,Clark St,Dependent,,
7,2017-06-12 18:30:00,2017-06-12 19:00:00,1800,Lake Shore Dr,Clark St,Subscriber,Male,1969
8,2017-06-30 23:59:59,2017-07-01 00:09:59,600,Clark St,Canal St,,,
";

pub const WASHINGTON_CSV: &str = "\
start_time,end_time,start_station,end_station,trip_duration,user_type
2017-01-01 00:07:57,2017-01-01 00:20:53,Jefferson Dr & 14th St SW,Lincoln Memorial,775.0,Registered
2017-01-07 10:00:00,2017-01-07 10:05:00,Lincoln Memorial,Jefferson Dr & 14th St SW,300.0,Casual
";

/// Create a temporary data directory holding the given city files
pub fn create_data_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, contents) in files {
        fs::write(temp_dir.path().join(name), contents).unwrap();
    }
    temp_dir
}

/// Data directory with the default Chicago and Washington files
pub fn create_sample_data() -> TempDir {
    create_data_dir(&[
        ("chicago_cleaned.csv", CHICAGO_CSV),
        ("washington_cleaned.csv", WASHINGTON_CSV),
    ])
}

/// Create a bikeshare.yml in `dir`
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let config_path = dir.join("bikeshare.yml");
    fs::write(&config_path, content).unwrap();
    config_path
}
