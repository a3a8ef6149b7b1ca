//! Module for errors.
use std::{error::Error, fmt::Display};

/// Error from the airport database or the report client.
#[derive(Debug)]
pub enum AddsDataErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Airport database errors
    /// The database file could not be opened.
    Connection(::rusqlite::Error),
    /// A query failed or a row could not be decoded.
    Query(::rusqlite::Error),
    /// The import source is missing a required column.
    Schema(String),
    /// The database structure is wrong.
    InvalidSchema,
    /// An airport has a latitude or longitude outside the valid range.
    InvalidCoords {
        /// The airport identifier.
        ident: String,
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
    /// Error forwarded from the csv crate
    Csv(::csv::Error),

    // Report retrieval errors
    /// The request could not be completed.
    Transport(::reqwest::Error),
    /// The server answered with something other than 200 OK.
    HttpStatus(::reqwest::StatusCode),
    /// The response body could not be decoded.
    Parse(String),
    /// The data service reported an error with the request.
    Service(String),
    /// The request succeeded but no reports matched.
    NoResults,
    /// The data source does not support this kind of query.
    UnsupportedQuery(&'static str),
}

impl Display for AddsDataErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::AddsDataErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),

            Connection(err) => write!(f, "unable to open airport database: {}", err),
            Query(err) => write!(f, "database error: {}", err),
            Schema(col) => write!(f, "missing required column: {}", col),
            InvalidSchema => write!(f, "invalid airport database format"),
            InvalidCoords { ident, lat, lon } => write!(
                f,
                "invalid coordinates for {}: lat = {}, lon = {}",
                ident, lat, lon
            ),
            Csv(err) => write!(f, "error forwarded from csv crate: {}", err),

            Transport(err) => write!(f, "http transport error: {}", err),
            HttpStatus(code) => write!(f, "unexpected http status: {}", code),
            Parse(msg) => write!(f, "unable to parse response: {}", msg),
            Service(msg) => write!(f, "data service error: {}", msg),
            NoResults => write!(f, "no results"),
            UnsupportedQuery(msg) => write!(f, "unsupported query: {}", msg),
        }
    }
}

impl Error for AddsDataErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use crate::errors::AddsDataErr::*;

        match self {
            IO(err) => Some(err),
            Connection(err) | Query(err) => Some(err),
            Csv(err) => Some(err),
            Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<::std::io::Error> for AddsDataErr {
    fn from(err: ::std::io::Error) -> AddsDataErr {
        AddsDataErr::IO(err)
    }
}

impl From<::rusqlite::Error> for AddsDataErr {
    fn from(err: ::rusqlite::Error) -> AddsDataErr {
        AddsDataErr::Query(err)
    }
}

impl From<::csv::Error> for AddsDataErr {
    fn from(err: ::csv::Error) -> AddsDataErr {
        AddsDataErr::Csv(err)
    }
}

impl From<::reqwest::Error> for AddsDataErr {
    fn from(err: ::reqwest::Error) -> AddsDataErr {
        AddsDataErr::Transport(err)
    }
}

impl From<::quick_xml::de::DeError> for AddsDataErr {
    fn from(err: ::quick_xml::de::DeError) -> AddsDataErr {
        AddsDataErr::Parse(err.to_string())
    }
}
