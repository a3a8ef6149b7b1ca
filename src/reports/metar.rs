use chrono::{DateTime, Utc};
use metfor::{Celsius, Knots, Meters};

use super::{opt_quantity, time};

/// A surface observation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metar {
    /// The report as transmitted.
    #[serde(rename = "raw_text")]
    pub text: String,
    /// Station identifier, e.g. "KMSO".
    pub station_id: String,
    /// Time of the observation.
    #[serde(deserialize_with = "time::deserialize")]
    pub observation_time: DateTime<Utc>,
    /// Station latitude in degrees.
    #[serde(rename = "latitude")]
    pub lat: Option<f64>,
    /// Station longitude in degrees.
    #[serde(rename = "longitude")]
    pub lon: Option<f64>,
    /// Air temperature.
    #[serde(rename = "temp_c", default, deserialize_with = "opt_quantity")]
    pub temperature: Option<Celsius>,
    /// Dew point temperature.
    #[serde(rename = "dewpoint_c", default, deserialize_with = "opt_quantity")]
    pub dew_point: Option<Celsius>,
    /// Direction the wind is blowing from in degrees.
    #[serde(rename = "wind_dir_degrees")]
    pub wind_direction: Option<f64>,
    /// Sustained wind speed.
    #[serde(rename = "wind_speed_kt", default, deserialize_with = "opt_quantity")]
    pub wind_speed: Option<Knots>,
    /// Wind gusts.
    #[serde(rename = "wind_gust_kt", default, deserialize_with = "opt_quantity")]
    pub wind_gust: Option<Knots>,
    /// Visibility in statute miles as reported, e.g. "10+" or "0.25".
    #[serde(rename = "visibility_statute_mi")]
    pub visibility: Option<String>,
    /// Altimeter setting in inches of mercury.
    #[serde(rename = "altim_in_hg")]
    pub altimeter_in_hg: Option<f64>,
    /// VFR, MVFR, IFR or LIFR.
    pub flight_category: Option<String>,
    /// Station elevation.
    #[serde(rename = "elevation_m", default, deserialize_with = "opt_quantity")]
    pub elevation: Option<Meters>,
}

impl Metar {
    /// Visibility in statute miles. A trailing "+" (greater than) is dropped.
    pub fn visibility_statute_mi(&self) -> Option<f64> {
        super::parse_visibility(self.visibility.as_ref()?)
    }
}
