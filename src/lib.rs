#![deny(missing_docs)]
//! Package to fetch aviation weather reports from the Aviation Digital Data Service (ADDS) and
//! find the airports nearest a location using a local airport database.

//
// Public API
//
pub use airport::Airport;
pub use airport_db::{AirportDb, ImportSummary, REQUIRED_COLUMNS};
pub use client::{AddsClient, ClientConfig, ReportQuery, Route};
pub use cmd_line::{default_root, CommonCmdLineArgs};
pub use coords::{Coords, NM_PER_KM};
pub use errors::AddsDataErr;
pub use logging::init_logging;
pub use proximity::{AirportDistance, AirportSnapshot};
pub use reports::{
    parse_metars, parse_pireps, parse_tafs, time::parse_adds_time, DataSource, Metar, Pirep, Taf,
    TafForecast,
};

//
// Implementation only
//
#[macro_use]
extern crate clap;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate strum_macros;

mod airport;
mod airport_db;
mod client;
mod cmd_line;
mod coords;
mod errors;
mod logging;
mod proximity;
mod reports;
