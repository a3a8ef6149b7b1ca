use chrono::{DateTime, Utc};
use metfor::{Knots, Meters};

use super::{opt_quantity, time};

/// A terminal aerodrome forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Taf {
    /// The forecast as transmitted.
    #[serde(rename = "raw_text")]
    pub text: String,
    /// Station identifier.
    pub station_id: String,
    /// Time the forecast was issued.
    #[serde(deserialize_with = "time::deserialize")]
    pub issue_time: DateTime<Utc>,
    /// Time of the bulletin the forecast was part of.
    #[serde(deserialize_with = "time::deserialize")]
    pub bulletin_time: DateTime<Utc>,
    /// Start of the valid period.
    #[serde(deserialize_with = "time::deserialize")]
    pub valid_time_from: DateTime<Utc>,
    /// End of the valid period.
    #[serde(deserialize_with = "time::deserialize")]
    pub valid_time_to: DateTime<Utc>,
    /// Remarks, e.g. "AMD".
    pub remarks: Option<String>,
    /// Station latitude in degrees.
    #[serde(rename = "latitude")]
    pub lat: Option<f64>,
    /// Station longitude in degrees.
    #[serde(rename = "longitude")]
    pub lon: Option<f64>,
    /// Station elevation.
    #[serde(rename = "elevation_m", default, deserialize_with = "opt_quantity")]
    pub elevation: Option<Meters>,
    /// Forecast periods in the order they appear in the TAF.
    #[serde(rename = "forecast", default)]
    pub forecasts: Vec<TafForecast>,
}

/// One period of a TAF, the initial conditions or a FM/TEMPO/BECMG/PROB group.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TafForecast {
    /// Start of the period.
    #[serde(rename = "fcst_time_from", deserialize_with = "time::deserialize")]
    pub time_from: DateTime<Utc>,
    /// End of the period.
    #[serde(rename = "fcst_time_to", deserialize_with = "time::deserialize")]
    pub time_to: DateTime<Utc>,
    /// FM, TEMPO, BECMG or PROB, absent for the initial period.
    pub change_indicator: Option<String>,
    /// Direction the wind is blowing from in degrees.
    #[serde(rename = "wind_dir_degrees")]
    pub wind_direction: Option<f64>,
    /// Sustained wind speed.
    #[serde(rename = "wind_speed_kt", default, deserialize_with = "opt_quantity")]
    pub wind_speed: Option<Knots>,
    /// Wind gusts.
    #[serde(rename = "wind_gust_kt", default, deserialize_with = "opt_quantity")]
    pub wind_gust: Option<Knots>,
    /// Visibility in statute miles as reported.
    #[serde(rename = "visibility_statute_mi")]
    pub visibility: Option<String>,
    /// Weather phenomena, e.g. "-SHRA BR".
    pub wx_string: Option<String>,
}

impl Taf {
    /// The forecast period covering `time`. When groups overlap the last one listed wins.
    pub fn forecast_at(&self, time: DateTime<Utc>) -> Option<&TafForecast> {
        self.forecasts
            .iter()
            .filter(|fcst| fcst.time_from <= time && time < fcst.time_to)
            .last()
    }
}

impl TafForecast {
    /// Visibility in statute miles. A trailing "+" (greater than) is dropped.
    pub fn visibility_statute_mi(&self) -> Option<f64> {
        super::parse_visibility(self.visibility.as_ref()?)
    }
}
