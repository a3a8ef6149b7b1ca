//! A local database of airport locations.

use std::path::PathBuf;

/// The airport database.
#[derive(Debug)]
pub struct AirportDb {
    db_file: PathBuf,               // Path to the database file.
    db_conn: rusqlite::Connection, // An sqlite connection.
}

mod import;
mod query;
mod root;

pub use import::{ImportSummary, REQUIRED_COLUMNS};
