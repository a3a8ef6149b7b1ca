//! Command line options that are used across applications.

use std::path::{Path, PathBuf};

use clap::{App, Arg, ArgMatches};
use dirs::home_dir;

use crate::{airport_db::AirportDb, errors::AddsDataErr};

/// The default location for the airport database, `${HOME}/adds`.
pub fn default_root() -> Option<PathBuf> {
    home_dir().map(|hd| hd.join("adds"))
}

/// Struct to package up command line arguments.
#[derive(Clone, Debug)]
pub struct CommonCmdLineArgs {
    // Path to the directory holding the airport database
    root: PathBuf,
    // Default filter for log messages when RUST_LOG is not set.
    log_level: String,
}

impl<'a, 'b> CommonCmdLineArgs {
    const DEFAULT_LOG_LEVEL: &'static str = "warn";

    /// Create a new set of args.
    pub fn new_app(app_name: &'static str, about: &'static str) -> App<'a, 'b> {
        App::new(app_name)
            .about(about)
            .version(crate_version!())
            .arg(
                Arg::with_name("root")
                    .short("r")
                    .long("root")
                    .takes_value(true)
                    .global(true)
                    .help("Path to the data directory.")
                    .long_help("Path to the data directory. Defaults to '${HOME}/adds/'"),
            )
            .arg(
                Arg::with_name("log-level")
                    .long("log-level")
                    .takes_value(true)
                    .global(true)
                    .default_value(Self::DEFAULT_LOG_LEVEL)
                    .help("Log filter, e.g. info or debug.")
                    .long_help("Log filter, e.g. info or debug. RUST_LOG takes precedence."),
            )
    }

    /// Process an `App` to get the parsed values out of it and the matches object so an application
    /// can continue with further argument parsing.
    pub fn matches(app: App<'a, 'b>) -> Result<(Self, ArgMatches<'a>), AddsDataErr> {
        let matches = app.get_matches();

        let root = matches
            .value_of("root")
            .map(PathBuf::from)
            .or_else(default_root)
            .ok_or_else(|| {
                AddsDataErr::IO(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "unable to find home directory, use --root",
                ))
            })?;

        let log_level = matches
            .value_of("log-level")
            .unwrap_or(Self::DEFAULT_LOG_LEVEL)
            .to_owned();

        Ok((CommonCmdLineArgs { root, log_level }, matches))
    }

    /// Get the root of the data directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to the airport database file.
    pub fn db_file(&self) -> PathBuf {
        self.root.join(AirportDb::DB_FILE)
    }

    /// Get the default log filter.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}
