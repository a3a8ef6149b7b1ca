use std::convert::TryFrom;

use tracing::info;

use super::AirportDb;

use crate::{airport::Airport, errors::AddsDataErr, proximity::AirportSnapshot};

impl AirportDb {
    /// Load every airport in the database into memory.
    ///
    /// Airports are kept in the order the database returns them. Rows that cannot be decoded or
    /// that have coordinates out of range fail the whole load.
    pub fn load(&self) -> Result<AirportSnapshot, AddsDataErr> {
        let mut stmt = self
            .db_conn
            .prepare(include_str!("query/all_airports.sql"))?;

        let airports: Result<Vec<Airport>, AddsDataErr> = stmt
            .query_and_then(rusqlite::NO_PARAMS, Self::parse_row_to_airport)?
            .collect();
        let airports = airports?;

        info!(count = airports.len(), db = %self.db_file.display(), "loaded airports");

        Ok(AirportSnapshot::new(airports))
    }

    fn parse_row_to_airport(row: &rusqlite::Row) -> Result<Airport, AddsDataErr> {
        let airport = Airport {
            id: row.get(0)?,
            ident: row.get(1)?,
            airport_type: row.get(2)?,
            name: row.get(3)?,
            lat: row.get(4)?,
            lon: row.get(5)?,
            continent: row.get(6)?,
            iso_country: row.get(7)?,
        };

        if !airport.coords().is_valid() {
            return Err(AddsDataErr::InvalidCoords {
                ident: airport.ident,
                lat: airport.lat,
                lon: airport.lon,
            });
        }

        Ok(airport)
    }

    /// Get the number of airports in the database.
    pub fn count(&self) -> Result<usize, AddsDataErr> {
        let num: i64 = self.db_conn.query_row(
            "SELECT COUNT(*) FROM airports",
            rusqlite::NO_PARAMS,
            |row| row.get(0),
        )?;

        Ok(usize::try_from(num).unwrap_or(0))
    }
}
