//! Latitude and longitude coordinates and great circle distances.

/// Mean radius of the earth in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Nautical miles per kilometer.
pub const NM_PER_KM: f64 = 0.539957;

/// The latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    /// Latitude, positive north.
    pub lat: f64,
    /// Longitude, positive east.
    pub lon: f64,
}

impl From<(f64, f64)> for Coords {
    fn from(pair: (f64, f64)) -> Self {
        Self {
            lat: pair.0,
            lon: pair.1,
        }
    }
}

impl Coords {
    /// Create a new point.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Coords { lat, lon }
    }

    /// True if the latitude is in [-90, 90] and the longitude in [-180, 180].
    ///
    /// NaN values are never valid.
    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great circle distance to another point in kilometers, spherical earth.
    pub fn distance_km(self, other: Coords) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Great circle distance to another point in nautical miles.
    pub fn distance_nm(self, other: Coords) -> f64 {
        self.distance_km(other) * NM_PER_KM
    }
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
