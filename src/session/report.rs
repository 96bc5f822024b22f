//! Human-readable rendering of pages and statistics

use std::io::{self, Write};
use std::time::Duration;

use comfy_table::{Cell, Table};

use crate::data::{weekday_name, Page, Trip};
use crate::stats::{DurationStats, StationStats, Summary, TimeStats, UserStats};
use crate::ui;

const NO_DATA: &str = "No trips match the selected filters.";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PAGE_COLUMNS: [&str; 10] = [
    "",
    "start_time",
    "end_time",
    "start_station",
    "end_station",
    "trip_duration",
    "user_type",
    "month",
    "day_of_week",
    "hour",
];

fn page_cells(trip: &Trip) -> [String; 10] {
    let record = trip.record();
    [
        trip.row().to_string(),
        record.start_time.format(TIMESTAMP_FORMAT).to_string(),
        record.end_time.format(TIMESTAMP_FORMAT).to_string(),
        record.start_station.clone(),
        record.end_station.clone(),
        record.trip_duration.to_string(),
        record.user_type.clone().unwrap_or_default(),
        trip.month().to_string(),
        weekday_name(trip.day_of_week()).to_string(),
        trip.hour().to_string(),
    ]
}

/// Print a page as a table whose first column is the source row number,
/// followed by the page's position within the selection
pub fn write_page<W: Write>(out: &mut W, page: &Page<'_>) -> io::Result<()> {
    let mut table = Table::new();
    table.set_header(PAGE_COLUMNS.iter().map(|name| Cell::new(*name)));
    for trip in &page.rows {
        table.add_row(page_cells(trip).into_iter().map(Cell::new));
    }
    writeln!(out, "{table}")?;

    if !page.is_empty() {
        writeln!(
            out,
            "{}",
            ui::hint(&format!(
                "Trips {}-{} of {}",
                page.start + 1,
                page.start + page.len(),
                page.total
            ))
        )?;
    }
    Ok(())
}

pub fn write_time_stats<W: Write>(out: &mut W, stats: Option<&TimeStats>) -> io::Result<()> {
    writeln!(out, "\n{}", ui::heading("Most Frequent Times of Travel"))?;
    match stats {
        Some(stats) => {
            writeln!(out, "Most Common Month: {}", stats.month_name())?;
            writeln!(out, "Most Common Day of Week: {}", stats.day_name())?;
            writeln!(out, "Most Common Start Hour: {}", stats.hour_label())
        }
        None => writeln!(out, "{}", NO_DATA),
    }
}

pub fn write_station_stats<W: Write>(out: &mut W, stats: Option<&StationStats>) -> io::Result<()> {
    writeln!(out, "\n{}", ui::heading("Station and Trip Statistics"))?;
    match stats {
        Some(stats) => {
            writeln!(out, "Most Common Start Station: {}", stats.start_station)?;
            writeln!(out, "Most Common End Station: {}", stats.end_station)?;
            writeln!(
                out,
                "Most Common Trip: {} -> {} ({} trips)",
                stats.trip.0, stats.trip.1, stats.trip_count
            )
        }
        None => writeln!(out, "{}", NO_DATA),
    }
}

pub fn write_duration_stats<W: Write>(
    out: &mut W,
    stats: Option<&DurationStats>,
) -> io::Result<()> {
    writeln!(out, "\n{}", ui::heading("Trip Duration"))?;
    match stats {
        Some(stats) => {
            writeln!(out, "Total Travel Time: {} seconds", stats.total)?;
            writeln!(out, "Average Travel Time: {} seconds", stats.mean)
        }
        None => writeln!(out, "{}", NO_DATA),
    }
}

pub fn write_user_stats<W: Write>(out: &mut W, stats: Option<&UserStats>) -> io::Result<()> {
    writeln!(out, "\n{}", ui::heading("User Types"))?;
    let stats = match stats {
        Some(stats) => stats,
        None => return writeln!(out, "{}", NO_DATA),
    };

    let width = stats
        .counts
        .iter()
        .map(|(kind, _)| kind.chars().count())
        .chain(std::iter::once("(missing)".len()))
        .max()
        .unwrap_or(0);
    for (kind, count) in &stats.counts {
        writeln!(out, "{:<width$}  {}", kind, count, width = width)?;
    }
    if stats.missing > 0 {
        writeln!(
            out,
            "{}",
            ui::hint(&format!("{:<width$}  {}", "(missing)", stats.missing, width = width))
        )?;
    }
    Ok(())
}

/// Elapsed time line shown after each statistic group in verbose mode
pub fn write_timing<W: Write>(out: &mut W, elapsed: Duration) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        ui::hint(&format!("This took {:.6} seconds.", elapsed.as_secs_f64()))
    )
}

/// Print all four groups in order. With `timings`, each group is followed by
/// the time it took to compute.
pub fn write_summary<W: Write>(
    out: &mut W,
    summary: &Summary,
    timings: Option<&[Duration; 4]>,
) -> io::Result<()> {
    let timing = |out: &mut W, group: usize| match timings {
        Some(timings) => write_timing(out, timings[group]),
        None => Ok(()),
    };

    write_time_stats(out, summary.time.as_ref())?;
    timing(out, 0)?;
    write_station_stats(out, summary.station.as_ref())?;
    timing(out, 1)?;
    write_duration_stats(out, summary.duration.as_ref())?;
    timing(out, 2)?;
    write_user_stats(out, summary.users.as_ref())?;
    timing(out, 3)
}
