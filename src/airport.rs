use crate::coords::Coords;

/// An airport as stored in the reference database.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Row id assigned by the database.
    pub id: i64,
    /// Short code, e.g. "KJFK" or "00A".
    pub ident: String,
    /// Category, e.g. "large_airport", "heliport", "closed".
    pub airport_type: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub continent: String,
    pub iso_country: String,
}

impl Airport {
    /// The location of the airport.
    pub fn coords(&self) -> Coords {
        Coords::new(self.lat, self.lon)
    }
}
