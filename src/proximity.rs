//! Nearest airport search over an in memory snapshot of the airport database.

use std::path::Path;

use crate::{airport::Airport, airport_db::AirportDb, coords::Coords, errors::AddsDataErr};

/// All the airports from the database, loaded once and never modified.
///
/// Share it by reference; there is no way to reload it in place.
#[derive(Debug, Clone, Default)]
pub struct AirportSnapshot {
    airports: Vec<Airport>,
}

/// An airport paired with its distance from a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirportDistance<'a> {
    /// The airport.
    pub airport: &'a Airport,
    /// Great circle distance from the query point in nautical miles.
    pub distance_nm: f64,
}

impl AirportSnapshot {
    /// Wrap a list of airports.
    pub fn new(airports: Vec<Airport>) -> Self {
        AirportSnapshot { airports }
    }

    /// Connect to the database file and load every airport in it.
    pub fn load(db_file: &dyn AsRef<Path>) -> Result<Self, AddsDataErr> {
        AirportDb::connect(db_file)?.load()
    }

    /// Number of airports.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// True if there are no airports.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Iterate over the airports in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Airport> {
        self.airports.iter()
    }

    /// Find an airport by its identifier, ignoring case.
    pub fn by_ident(&self, ident: &str) -> Option<&Airport> {
        self.airports
            .iter()
            .find(|apt| apt.ident.eq_ignore_ascii_case(ident))
    }

    /// Every airport with its distance from (`lat`, `lon`), nearest first.
    ///
    /// This is a linear scan followed by a stable sort, so airports at the same distance keep
    /// their load order. Distances that come out NaN sort to the end.
    pub fn find_closest(&self, lat: f64, lon: f64) -> Vec<AirportDistance<'_>> {
        let query = Coords::new(lat, lon);

        let mut distances: Vec<AirportDistance<'_>> = self
            .airports
            .iter()
            .map(|airport| AirportDistance {
                airport,
                distance_nm: query.distance_nm(airport.coords()),
            })
            .collect();

        distances.sort_by(|a, b| a.distance_nm.total_cmp(&b.distance_nm));

        distances
    }

    /// The `n` airports nearest to (`lat`, `lon`), nearest first.
    pub fn find_closest_n(&self, lat: f64, lon: f64, n: usize) -> Vec<AirportDistance<'_>> {
        let mut distances = self.find_closest(lat, lon);
        distances.truncate(n);
        distances
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
