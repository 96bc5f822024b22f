//! The interactive session loop
//!
//! ```text
//! CollectInput → Load → ShowRawData → ComputeStats → OfferRestart
//!      ▲           │                                      │
//!      │           └──── load error ──────────────────────►│
//!      └───────────────────── yes ────────────────────────┘
//! ```
//!
//! Restarts go around the loop rather than re-entering it, so a session can
//! run any number of passes.

use std::io::{self, BufRead, Write};

use crate::data::{FilteredDataset, Pager, PAGE_SIZE};
use crate::error::{is_unrecognized_city, LoadError};
use crate::session::context::Context;
use crate::session::prompt::Terminal;
use crate::session::report;
use crate::stats::{Summary, GROUPS};
use crate::ui;

const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
const CITY_PROMPT: &str = "Enter the city (Chicago, New York City, Washington): ";
const MONTH_PROMPT: &str = "Enter the month (January to June or 'all' for no filter): ";
const DAY_PROMPT: &str = "Enter the day of the week (e.g., Monday) or 'all' for no filter: ";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter 'yes' or 'no': ";

/// What the user asked for in one pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub city: String,
    pub month: String,
    pub day: String,
}

/// Session states
#[derive(Debug)]
enum State {
    CollectInput,
    Load(Request),
    ShowRawData(FilteredDataset),
    ComputeStats(FilteredDataset),
    OfferRestart,
    Terminate,
}

/// An interactive session over a reader/writer pair
pub struct Session<R, W> {
    ctx: Context,
    term: Terminal<R, W>,
    passes: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(ctx: Context, input: R, output: W) -> Self {
        Session {
            ctx,
            term: Terminal::new(input, output),
            passes: 0,
        }
    }

    /// Run until the user declines to restart or input ends
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.term.out(), "{}", ui::heading(GREETING))?;

        let mut state = State::CollectInput;
        loop {
            state = match state {
                State::CollectInput => match self.collect_input()? {
                    Some(request) => State::Load(request),
                    None => State::Terminate,
                },
                State::Load(request) => {
                    self.passes += 1;
                    match self.ctx.loader.load(&request.city, &request.month, &request.day) {
                        Ok(data) => {
                            self.report_loaded(&data)?;
                            State::ShowRawData(data)
                        }
                        Err(err) => {
                            self.report_load_error(&err)?;
                            State::OfferRestart
                        }
                    }
                }
                State::ShowRawData(data) => {
                    self.show_raw_data(&data)?;
                    State::ComputeStats(data)
                }
                State::ComputeStats(data) => {
                    self.compute_stats(&data)?;
                    State::OfferRestart
                }
                State::OfferRestart => {
                    if self.term.confirm(RESTART_PROMPT)? {
                        State::CollectInput
                    } else {
                        State::Terminate
                    }
                }
                State::Terminate => break,
            };
        }

        self.term.out().flush()
    }

    /// Number of load attempts so far
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Give back the writer
    pub fn into_output(self) -> W {
        self.term.into_output()
    }

    fn collect_input(&mut self) -> io::Result<Option<Request>> {
        let Some(city) = self.term.ask(CITY_PROMPT)? else {
            return Ok(None);
        };
        let Some(month) = self.term.ask(MONTH_PROMPT)? else {
            return Ok(None);
        };
        let Some(day) = self.term.ask(DAY_PROMPT)? else {
            return Ok(None);
        };
        Ok(Some(Request { city, month, day }))
    }

    fn report_loaded(&mut self, data: &FilteredDataset) -> io::Result<()> {
        if !self.ctx.show_info() {
            return Ok(());
        }
        writeln!(
            self.term.out(),
            "\nLoaded {} of {} trips for {} ({}, {}).",
            data.view().len(),
            data.dataset().len(),
            data.city(),
            data.filter().month,
            data.filter().day
        )?;
        writeln!(
            self.term.out(),
            "{}",
            ui::hint(&format!("Source: {}", data.source().display()))
        )
    }

    fn report_load_error(&mut self, err: &LoadError) -> io::Result<()> {
        let message = match err {
            LoadError::UnrecognizedCity(city) => format!(
                "Error: The city '{}' is not recognized. Please check the city name and try again.",
                city
            ),
            other => format!("Error: {}", other),
        };
        // A mistyped city is the user's to fix; anything else is a data problem.
        if !is_unrecognized_city(err) {
            log::warn!("{}", err);
        }
        writeln!(self.term.out(), "{}", ui::error(&message))
    }

    /// Page through the selected trips while the user keeps saying yes.
    /// An empty selection is never offered.
    fn show_raw_data(&mut self, data: &FilteredDataset) -> io::Result<()> {
        let view = data.view();
        let pager = Pager::new(&view);
        let question = format!(
            "\nDo you want to see {} rows of raw data? Enter 'yes' or 'no': ",
            PAGE_SIZE
        );

        let mut cursor = 0;
        while pager.has_more(cursor) {
            if !self.term.confirm(&question)? {
                return Ok(());
            }
            let (page, next) = pager.next_page(cursor);
            report::write_page(self.term.out(), &page)?;
            cursor = next;
        }
        if cursor > 0 && self.ctx.show_info() {
            writeln!(self.term.out(), "No more rows to display.")?;
        }
        Ok(())
    }

    fn compute_stats(&mut self, data: &FilteredDataset) -> io::Result<()> {
        let (summary, timings) = Summary::compute_timed(&data.view());
        for (group, elapsed) in GROUPS.iter().zip(timings.iter()) {
            log::debug!("{} statistics took {:?}", group, elapsed);
        }
        let timings = self.ctx.show_timing().then_some(&timings);
        report::write_summary(self.term.out(), &summary, timings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CityTable;
    use crate::session::context::Verbosity;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const CSV: &str = "\
start_time,end_time,start_station,end_station,trip_duration,user_type
2017-01-02 08:05:00,2017-01-02 08:10:00,A,B,100,Subscriber
2017-01-03 09:05:00,2017-01-03 09:10:00,A,B,200,Customer
2017-02-06 17:05:00,2017-02-06 17:10:00,B,C,300,Subscriber
";

    const RAW_PROMPT: &str = "rows of raw data?";

    fn run(input: &str, verbosity: Verbosity) -> (String, usize) {
        run_with(CSV, input, verbosity)
    }

    fn run_with(csv: &str, input: &str, verbosity: Verbosity) -> (String, usize) {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("chicago_cleaned.csv"), csv).unwrap();
        let ctx = Context::new(CityTable::new(dir.path())).with_verbosity(verbosity);

        let mut session = Session::new(ctx, Cursor::new(input.to_string()), Vec::new());
        session.run().unwrap();
        let passes = session.passes();
        (String::from_utf8(session.into_output()).unwrap(), passes)
    }

    #[test]
    fn test_single_pass() {
        let (out, passes) = run("chicago\nall\nall\nno\nno\n", Verbosity::Normal);
        assert_eq!(passes, 1);
        assert!(out.contains("Loaded 3 of 3 trips for Chicago"));
        assert!(out.contains("Source: "));
        assert!(out.contains("chicago_cleaned.csv"));
        assert!(out.contains("Most Common Month: January"));
        assert!(out.contains("Most Common Trip: A -> B (2 trips)"));
        assert!(out.contains("Total Travel Time: 600 seconds"));
        assert!(!out.contains("This took"));
    }

    #[test]
    fn test_unrecognized_city_skips_to_restart() {
        let (out, passes) = run("Boston\nall\nall\nno\n", Verbosity::Normal);
        assert_eq!(passes, 1);
        assert!(out.contains("The city 'boston' is not recognized"));
        assert!(!out.contains("raw data"));
        assert!(!out.contains("Most Common Month"));
        assert!(out.contains("Would you like to restart?"));
    }

    #[test]
    fn test_restart_loops() {
        let input = "Boston\nall\nall\nyes\nCHICAGO\nfebruary\nall\nno\ny\nchicago\nall\nsunday\nno\n";
        let (out, passes) = run(input, Verbosity::Normal);
        assert_eq!(passes, 3);
        assert!(out.contains("Loaded 1 of 3 trips for Chicago (February, all days)"));
        assert!(out.contains("Loaded 0 of 3 trips for Chicago (all months, Sunday)"));
        assert!(out.contains("No trips match the selected filters."));
    }

    #[test]
    fn test_paging_until_exhausted() {
        let (out, passes) = run("chicago\nall\nall\nyes\nno\n", Verbosity::Normal);
        assert_eq!(passes, 1);
        assert_eq!(out.matches(RAW_PROMPT).count(), 1);
        assert_eq!(out.matches("start_station").count(), 1);
        assert_eq!(out.matches("No more rows to display.").count(), 1);
        assert!(out.contains("Most Common Month: January"));
    }

    #[test]
    fn test_single_row_is_offered_once() {
        let csv = "\
start_time,end_time,start_station,end_station,trip_duration,user_type
2017-01-02 08:05:00,2017-01-02 08:10:00,A,B,100,Subscriber
";
        let (out, _) = run_with(csv, "chicago\nall\nall\nyes\nno\nno\n", Verbosity::Normal);
        assert_eq!(out.matches(RAW_PROMPT).count(), 1);
        assert_eq!(out.matches("No more rows to display.").count(), 1);
        assert_eq!(out.matches("Would you like to restart?").count(), 1);
    }

    #[test]
    fn test_empty_selection_is_not_offered() {
        let (out, passes) = run("chicago\nmarch\nall\nno\n", Verbosity::Normal);
        assert_eq!(passes, 1);
        assert!(out.contains("Loaded 0 of 3 trips"));
        assert_eq!(out.matches(RAW_PROMPT).count(), 0);
        assert!(!out.contains("No more rows to display."));
        assert!(out.contains("No trips match the selected filters."));
        assert!(out.contains("Would you like to restart?"));
    }

    #[test]
    fn test_declining_stops_paging() {
        let csv: String = std::iter::once(
            "start_time,end_time,start_station,end_station,trip_duration,user_type\n".to_string(),
        )
        .chain((1..=7).map(|day| {
            format!(
                "2017-01-{:02} 08:05:00,2017-01-{:02} 08:10:00,A,B,60,Subscriber\n",
                day, day
            )
        }))
        .collect();
        let (out, _) = run_with(&csv, "chicago\nall\nall\ny\nno\nno\n", Verbosity::Normal);
        assert_eq!(out.matches(RAW_PROMPT).count(), 2);
        assert!(out.contains("Trips 1-5 of 7"));
        assert!(!out.contains("Trips 6-7 of 7"));
        assert!(!out.contains("No more rows to display."));
    }

    #[test]
    fn test_end_of_input_terminates() {
        let (out, passes) = run("chicago\nall\n", Verbosity::Normal);
        assert_eq!(passes, 0);
        assert!(out.contains(DAY_PROMPT.trim_end()));
    }

    #[test]
    fn test_verbose_shows_timing() {
        let (out, _) = run("chicago\nall\nall\nno\nno\n", Verbosity::Verbose);
        assert_eq!(out.matches("This took").count(), 4);
    }

    #[test]
    fn test_quiet_hides_load_summary() {
        let (out, _) = run("chicago\nall\nall\nno\nno\n", Verbosity::Quiet);
        assert!(!out.contains("Loaded 3 of 3"));
        assert!(out.contains("Most Common Start Station: A"));
    }
}
