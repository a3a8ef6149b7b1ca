//! The ways reports can be selected and the URLs that select them.

use std::fmt::{self, Display};

use crate::{coords::Coords, errors::AddsDataErr, reports::DataSource};

/// A route for corridor searches.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Waypoints given by location.
    Coords(Vec<Coords>),
    /// Waypoints given by station identifier.
    Stations(Vec<String>),
}

impl Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Route::Coords(points) => {
                let legs: Vec<String> = points
                    .iter()
                    .map(|pnt| format!("{},{}", pnt.lon, pnt.lat))
                    .collect();
                write!(f, "{}", legs.join(";"))
            }
            Route::Stations(ids) => write!(f, "{}", ids.join(";")),
        }
    }
}

/// Which reports to request.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportQuery {
    /// Reports for one or more stations, e.g. "KMSO" or "KMSO,KGPI". Not supported for pilot
    /// reports.
    Station(String),
    /// The most recent reports inside a latitude/longitude box.
    Rect {
        /// South west corner.
        bottom_left: Coords,
        /// North east corner.
        top_right: Coords,
    },
    /// The most recent reports within `radius_sm` statute miles of a point.
    Radius {
        /// Search radius in statute miles.
        radius_sm: u32,
        /// Center of the search.
        center: Coords,
    },
    /// The most recent reports within `distance_sm` statute miles of a route.
    Route {
        /// Width of the corridor either side of the route in statute miles.
        distance_sm: f64,
        /// The route.
        route: Route,
    },
}

impl ReportQuery {
    /// Shorthand for a station query.
    pub fn station<T: AsRef<str>>(ident: T) -> Self {
        ReportQuery::Station(ident.as_ref().to_uppercase())
    }

    /// Build the full request URL for this query.
    pub fn url(&self, base_url: &str, source: DataSource) -> Result<String, AddsDataErr> {
        let mut url = format!(
            "{}?dataSource={}&requestType=retrieve&format=xml",
            base_url,
            source.as_static_str()
        );

        match self {
            ReportQuery::Station(ident) => {
                if source == DataSource::AircraftReports {
                    return Err(AddsDataErr::UnsupportedQuery(
                        "aircraft reports cannot be selected by station",
                    ));
                }
                url.push_str(&format!("&stationString={}&hoursBeforeNow=1.5", ident));
            }
            ReportQuery::Rect {
                bottom_left,
                top_right,
            } => url.push_str(&format!(
                "&hoursBeforeNow=1.25&minLat={:.6}&minLon={:.6}&maxLat={:.6}&maxLon={:.6}",
                bottom_left.lat, bottom_left.lon, top_right.lat, top_right.lon
            )),
            ReportQuery::Radius { radius_sm, center } => url.push_str(&format!(
                "&hoursBeforeNow=1.25&radialDistance={};{:.6},{:.6}",
                radius_sm, center.lon, center.lat
            )),
            ReportQuery::Route { distance_sm, route } => url.push_str(&format!(
                "&hoursBeforeNow=1.25&flightPath={:.6};{}",
                distance_sm, route
            )),
        }

        if source == DataSource::Metars {
            url.push_str("&mostRecentForEachStation=constraint");
        }

        Ok(url)
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    const BASE: &str = "https://example.com/httpparam";

    #[test]
    fn test_station_url() {
        let url = ReportQuery::station("kmso")
            .url(BASE, DataSource::Tafs)
            .expect("Error building url.");

        assert_eq!(
            url,
            "https://example.com/httpparam?dataSource=tafs&requestType=retrieve&format=xml\
             &stationString=KMSO&hoursBeforeNow=1.5"
        );
    }

    #[test]
    fn test_station_url_pireps_unsupported() {
        match ReportQuery::station("kmso").url(BASE, DataSource::AircraftReports) {
            Err(AddsDataErr::UnsupportedQuery(_)) => {}
            Err(err) => panic!("Wrong error type returned: {}", err),
            Ok(url) => panic!("Built url for unsupported query: {}", url),
        }
    }

    #[test]
    fn test_rect_url() {
        let query = ReportQuery::Rect {
            bottom_left: Coords::new(45.0, -115.0),
            top_right: Coords::new(48.5, -110.25),
        };
        let url = query
            .url(BASE, DataSource::Metars)
            .expect("Error building url.");

        assert!(url.contains("dataSource=metars"));
        assert!(url.contains("&hoursBeforeNow=1.25"));
        assert!(url.contains("&minLat=45.000000&minLon=-115.000000"));
        assert!(url.contains("&maxLat=48.500000&maxLon=-110.250000"));
        assert!(url.ends_with("&mostRecentForEachStation=constraint"));
    }

    #[test]
    fn test_radius_url_is_lon_first() {
        let query = ReportQuery::Radius {
            radius_sm: 50,
            center: Coords::new(46.92, -114.08),
        };
        let url = query
            .url(BASE, DataSource::AircraftReports)
            .expect("Error building url.");

        assert!(url.contains("dataSource=aircraftreports"));
        assert!(url.contains("&radialDistance=50;-114.080000,46.920000"));
        assert!(!url.contains("mostRecentForEachStation"));
    }

    #[test]
    fn test_route_urls() {
        let by_coords = ReportQuery::Route {
            distance_sm: 20.0,
            route: Route::Coords(vec![Coords::new(46.92, -114.08), Coords::new(47.45, -122.31)]),
        };
        let url = by_coords
            .url(BASE, DataSource::Tafs)
            .expect("Error building url.");
        assert!(url.contains("&flightPath=20.000000;-114.08,46.92;-122.31,47.45"));

        let by_ids = ReportQuery::Route {
            distance_sm: 5.5,
            route: Route::Stations(vec!["KMSO".to_owned(), "KSEA".to_owned()]),
        };
        let url = by_ids
            .url(BASE, DataSource::Metars)
            .expect("Error building url.");
        assert!(url.contains("&flightPath=5.500000;KMSO;KSEA"));
    }
}
