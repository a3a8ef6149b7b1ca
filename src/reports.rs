//! Decoding the XML responses of the ADDS data server.

use metfor::Quantity;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::errors::AddsDataErr;

mod metar;
mod pirep;
mod taf;
pub mod time;

pub use metar::Metar;
pub use pirep::Pirep;
pub use taf::{Taf, TafForecast};

/// The kinds of reports available from the data server.
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumString, IntoStaticStr, EnumIter, Hash)]
pub enum DataSource {
    /// Surface observations.
    #[strum(serialize = "metars")]
    Metars,
    /// Terminal aerodrome forecasts.
    #[strum(serialize = "tafs")]
    Tafs,
    /// Pilot reports.
    #[strum(serialize = "aircraftreports")]
    AircraftReports,
}

impl DataSource {
    /// The name the data server uses for this source.
    pub fn as_static_str(self) -> &'static str {
        self.into()
    }
}

//
// The response envelope. Only the parts we use are declared, everything else is ignored.
//
#[derive(Debug, Deserialize)]
struct Response {
    #[serde(default)]
    errors: Errors,
    #[serde(default)]
    warnings: Warnings,
    #[serde(default)]
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
struct Errors {
    #[serde(rename = "error", default)]
    list: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Warnings {
    #[serde(rename = "warning", default)]
    list: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Data {
    #[serde(rename = "METAR", default)]
    metars: Vec<Metar>,
    #[serde(rename = "TAF", default)]
    tafs: Vec<Taf>,
    #[serde(rename = "AircraftReport", default)]
    pireps: Vec<Pirep>,
}

fn parse_response(xml: &str) -> Result<Data, AddsDataErr> {
    let response: Response = quick_xml::de::from_str(xml)?;

    if !response.errors.list.is_empty() {
        return Err(AddsDataErr::Service(response.errors.list.join("; ")));
    }

    for warning in &response.warnings.list {
        warn!(%warning, "data server warning");
    }

    Ok(response.data)
}

fn non_empty<T>(reports: Vec<T>) -> Result<Vec<T>, AddsDataErr> {
    if reports.is_empty() {
        Err(AddsDataErr::NoResults)
    } else {
        Ok(reports)
    }
}

/// Decode the METARs in a data server response.
pub fn parse_metars(xml: &str) -> Result<Vec<Metar>, AddsDataErr> {
    non_empty(parse_response(xml)?.metars)
}

/// Decode the TAFs in a data server response.
pub fn parse_tafs(xml: &str) -> Result<Vec<Taf>, AddsDataErr> {
    non_empty(parse_response(xml)?.tafs)
}

/// Decode the pilot reports in a data server response.
pub fn parse_pireps(xml: &str) -> Result<Vec<Pirep>, AddsDataErr> {
    non_empty(parse_response(xml)?.pireps)
}

// Optional numeric element into a metfor quantity.
fn opt_quantity<'de, D, Q>(deserializer: D) -> Result<Option<Q>, D::Error>
where
    D: Deserializer<'de>,
    Q: Quantity,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(Q::pack))
}

fn parse_visibility(text: &str) -> Option<f64> {
    text.trim().trim_end_matches('+').parse().ok()
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
