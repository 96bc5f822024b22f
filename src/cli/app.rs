//! Main CLI application

use crate::config::{
    build_city_table, parse_config_auto, parse_config_file, validate_config, Config,
    DataDirSources,
};
use crate::error::BikeshareError;
use crate::session::{Context, Session, Verbosity};
use crate::ui;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::PathBuf;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run the application with command line arguments
    pub fn run(self) -> Result<(), BikeshareError> {
        let matches = self.command.get_matches();
        run_with_matches(&matches)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the clap command
fn build_command() -> Command {
    Command::new("bikeshare")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Explore US bikeshare trip data interactively")
        .long_about(
            "Explore US bikeshare trip data interactively.\n\n\
             All analysis input is collected through prompts once the program starts: \
             the city, the month and weekday filters, whether to page through raw \
             trips, and whether to restart. The options below only control where data \
             is found and how much is printed.",
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Path to bikeshare.yml config file"),
        )
        .arg(
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the city CSV files"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print prompts and results")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print computation times and debug logs")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
}

/// Get verbosity level from matches
fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    if matches.get_flag("quiet") {
        Verbosity::Quiet
    } else if matches.get_flag("verbose") {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    }
}

/// Default log filter for a verbosity level; `RUST_LOG` wins over it
fn log_filter(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "debug",
    }
}

fn init_logging(verbosity: Verbosity) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbosity));
    // A logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Load the config named by `--file`, or discover one
fn load_config(matches: &ArgMatches) -> Result<(Config, Option<PathBuf>), BikeshareError> {
    match matches.get_one::<PathBuf>("file") {
        Some(path) => Ok((parse_config_file(path)?, Some(path.clone()))),
        None => parse_config_auto(),
    }
}

fn run_with_matches(matches: &ArgMatches) -> Result<(), BikeshareError> {
    let dotenv = dotenvy::dotenv();

    let verbosity = get_verbosity(matches);
    init_logging(verbosity);
    if matches.get_flag("no-color") {
        ui::disable_color();
    }
    match dotenv {
        Ok(path) => log::debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("ignoring .env file: {}", e),
    }

    let (config, config_path) = load_config(matches)?;
    validate_config(&config)?;

    let sources = DataDirSources::from_env(
        matches.get_one::<PathBuf>("data-dir").cloned(),
        config_path.as_deref(),
    );
    let table = build_city_table(&config, &sources)?;
    for (city, path) in table.iter() {
        log::debug!("{} -> {}", city.key(), path.display());
    }

    let ctx = Context::new(table).with_verbosity(verbosity);
    let stdin = io::stdin();
    let mut session = Session::new(ctx, stdin.lock(), io::stdout().lock());
    session.run()?;
    Ok(())
}

/// Run the CLI application with provided arguments
pub fn run() -> Result<(), BikeshareError> {
    App::new().run()
}
