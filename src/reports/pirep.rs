use chrono::{DateTime, Utc};
use metfor::Feet;

use super::{opt_quantity, time};

/// A pilot report, called an "aircraft report" by the data service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pirep {
    /// Time the report was received.
    #[serde(deserialize_with = "time::deserialize")]
    pub receipt_time: DateTime<Utc>,
    /// Time of the observation.
    #[serde(deserialize_with = "time::deserialize")]
    pub observation_time: DateTime<Utc>,
    /// Aircraft type, e.g. "B737".
    pub aircraft_ref: Option<String>,
    /// Latitude of the report in degrees.
    #[serde(rename = "latitude")]
    pub lat: Option<f64>,
    /// Longitude of the report in degrees.
    #[serde(rename = "longitude")]
    pub lon: Option<f64>,
    /// Altitude above mean sea level.
    #[serde(rename = "altitude_ft_msl", default, deserialize_with = "opt_quantity")]
    pub altitude: Option<Feet>,
    /// PIREP, Urgent PIREP or AIREP.
    pub report_type: Option<String>,
    /// The report as transmitted.
    #[serde(rename = "raw_text")]
    pub text: String,
}
