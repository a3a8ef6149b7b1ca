//! Importing the airport table from an OurAirports style CSV file.

use std::{fs::File, io::Read, path::Path};

use tracing::{debug, info, warn};

use super::AirportDb;

use crate::{coords::Coords, errors::AddsDataErr};

/// Columns that must be present in the header of an import file.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "ident",
    "type",
    "name",
    "latitude_deg",
    "longitude_deg",
    "continent",
    "iso_country",
];

/// The outcome of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of airports written to the database.
    pub inserted: usize,
    /// Number of rows that were too short or had unusable coordinates.
    pub skipped: usize,
}

// Position of each required column in a record.
struct Columns {
    ident: usize,
    airport_type: usize,
    name: usize,
    lat: usize,
    lon: usize,
    continent: usize,
    iso_country: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, AddsDataErr> {
        let find = |name: &str| -> Result<usize, AddsDataErr> {
            headers
                .iter()
                .position(|label| label.trim() == name)
                .ok_or_else(|| AddsDataErr::Schema(name.to_owned()))
        };

        Ok(Columns {
            ident: find(REQUIRED_COLUMNS[0])?,
            airport_type: find(REQUIRED_COLUMNS[1])?,
            name: find(REQUIRED_COLUMNS[2])?,
            lat: find(REQUIRED_COLUMNS[3])?,
            lon: find(REQUIRED_COLUMNS[4])?,
            continent: find(REQUIRED_COLUMNS[5])?,
            iso_country: find(REQUIRED_COLUMNS[6])?,
        })
    }

    /// A record needs at least this many fields to reach every required column.
    fn min_len(&self) -> usize {
        [
            self.ident,
            self.airport_type,
            self.name,
            self.lat,
            self.lon,
            self.continent,
            self.iso_country,
        ]
        .iter()
        .max()
        .map(|pos| pos + 1)
        .unwrap_or(0)
    }
}

impl AirportDb {
    /// Replace the contents of the database with the airports in a CSV file.
    ///
    /// Files ending in `.gz` are decompressed on the fly.
    pub fn import_csv_file(&mut self, path: &dyn AsRef<Path>) -> Result<ImportSummary, AddsDataErr> {
        let path = path.as_ref();
        let file = File::open(path)?;

        if path.extension().map_or(false, |ext| ext == "gz") {
            debug!(path = %path.display(), "importing gzip compressed csv");
            self.import_csv(flate2::read::GzDecoder::new(file))
        } else {
            self.import_csv(file)
        }
    }

    /// Replace the contents of the database with the airports read from a CSV source.
    ///
    /// The header row must name every column in [`REQUIRED_COLUMNS`], otherwise nothing is
    /// written. Rows too short to hold every required column, or with coordinates that are not
    /// valid numbers in range, are skipped. All inserts happen in a single transaction that is
    /// only committed if the whole file is read.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<ImportSummary, AddsDataErr> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::from_headers(rdr.headers()?)?;
        let min_len = columns.min_len();

        let mut summary = ImportSummary::default();

        let tx = self.db_conn.transaction()?;
        tx.execute("DELETE FROM airports", rusqlite::NO_PARAMS)?;

        {
            let mut stmt = tx.prepare(include_str!("import/insert_airport.sql"))?;

            for record in rdr.records() {
                let record = record?;

                if record.len() < min_len {
                    debug!(line = ?record.position().map(|p| p.line()), "skipping short row");
                    summary.skipped += 1;
                    continue;
                }

                let ident = &record[columns.ident];

                let coords = match parse_coords(&record[columns.lat], &record[columns.lon]) {
                    Some(coords) => coords,
                    None => {
                        warn!(
                            ident,
                            lat = &record[columns.lat],
                            lon = &record[columns.lon],
                            "skipping airport with invalid coordinates"
                        );
                        summary.skipped += 1;
                        continue;
                    }
                };

                stmt.execute(&[
                    &ident as &dyn rusqlite::types::ToSql,
                    &&record[columns.airport_type],
                    &&record[columns.name],
                    &coords.lat,
                    &coords.lon,
                    &&record[columns.continent],
                    &&record[columns.iso_country],
                ])?;

                summary.inserted += 1;
            }
        }

        tx.commit()?;

        info!(
            inserted = summary.inserted,
            skipped = summary.skipped,
            "imported airports"
        );

        Ok(summary)
    }
}

fn parse_coords(lat: &str, lon: &str) -> Option<Coords> {
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;

    Some(Coords::new(lat, lon)).filter(|coords| coords.is_valid())
}

#[cfg(test)]
mod unit {
    use super::*;
    use crate::airport_db::unit::*; // test helpers.

    use std::io::Write;

    #[test]
    fn test_import_round_trip() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");

        let csv = "ident,type,name,latitude_deg,longitude_deg,continent,iso_country\n\
                   KJFK,large_airport,John F Kennedy Intl,40.6398,-73.7789,NA,US\n";

        let summary = db.import_csv(csv.as_bytes()).expect("Error importing.");
        assert_eq!(
            summary,
            ImportSummary {
                inserted: 1,
                skipped: 0
            }
        );

        let snapshot = db.load().expect("Error loading.");
        assert_eq!(snapshot.len(), 1);

        let jfk = snapshot.iter().next().unwrap();
        assert_eq!(jfk.ident, "KJFK");
        assert_eq!(jfk.airport_type, "large_airport");
        assert_eq!(jfk.name, "John F Kennedy Intl");
        assert_eq!(jfk.lat, 40.6398);
        assert_eq!(jfk.lon, -73.7789);
        assert_eq!(jfk.continent, "NA");
        assert_eq!(jfk.iso_country, "US");
    }

    #[test]
    fn test_import_extra_columns_any_order() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");

        let csv = r#""id","ident","type","name","latitude_deg","longitude_deg","elevation_ft","continent","iso_country","iso_region"
3682,"KATL","large_airport","Hartsfield Jackson Atlanta International Airport",33.6367,-84.428101,1026,"NA","US","US-GA"
"#;

        db.import_csv(csv.as_bytes()).expect("Error importing.");

        let snapshot = db.load().expect("Error loading.");
        let katl = snapshot.by_ident("katl").expect("KATL missing.");
        assert_eq!(katl.name, "Hartsfield Jackson Atlanta International Airport");
        assert_eq!(katl.lon, -84.428101);
        assert_eq!(katl.iso_country, "US");
    }

    #[test]
    fn test_import_missing_column() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");
        fill_test_db(&mut db);

        let csv = "ident,type,name,latitude_deg,longitude_deg,continent\n\
                   KJFK,large_airport,John F Kennedy Intl,40.6398,-73.7789,NA\n";

        match db.import_csv(csv.as_bytes()) {
            Err(AddsDataErr::Schema(col)) => assert_eq!(col, "iso_country"),
            Err(err) => panic!("Wrong error type returned: {}", err),
            Ok(_) => panic!("Import should have failed."),
        }

        // Nothing was touched.
        assert_eq!(db.count().expect("db error"), 4);
    }

    #[test]
    fn test_import_error_mid_file_rolls_back() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");
        fill_test_db(&mut db);

        let mut csv: Vec<u8> = b"ident,type,name,latitude_deg,longitude_deg,continent,iso_country\n\
                                 KATL,large_airport,Atlanta Intl,33.6367,-84.4281,NA,US\n\
                                 KBAD,small_airport,Bad "
            .to_vec();
        csv.extend_from_slice(&[0xff, 0xfe]);
        csv.extend_from_slice(b" Field,45.0,-100.0,NA,US\n");

        match db.import_csv(csv.as_slice()) {
            Err(AddsDataErr::Csv(_)) => {}
            Err(err) => panic!("Wrong error type returned: {}", err),
            Ok(_) => panic!("Import should have failed."),
        }

        // KATL was inserted before the error, the transaction throws it away.
        assert_eq!(db.count().expect("db error"), 4);
        let snapshot = db.load().expect("Error loading.");
        assert!(snapshot.by_ident("KATL").is_none());
        assert!(snapshot.by_ident("KJFK").is_some());
    }

    #[test]
    fn test_import_missing_column_empty_db() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");

        let csv = "ident,type,name,latitude_deg,longitude_deg,continent\n";
        assert!(db.import_csv(csv.as_bytes()).is_err());
        assert_eq!(db.count().expect("db error"), 0);
    }

    #[test]
    fn test_import_skips_short_rows() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");

        let csv = "ident,type,name,latitude_deg,longitude_deg,continent,iso_country\n\
                   KJFK,large_airport,John F Kennedy Intl,40.6398,-73.7789,NA,US\n\
                   KBAD,small_airport\n\
                   KSEA,large_airport,Seattle Tacoma Intl,47.449,-122.309,NA,US\n";

        let summary = db.import_csv(csv.as_bytes()).expect("Error importing.");
        assert_eq!(summary.inserted, 2);
        assert_eq!(summary.skipped, 1);

        let snapshot = db.load().expect("Error loading.");
        assert!(snapshot.by_ident("KJFK").is_some());
        assert!(snapshot.by_ident("KSEA").is_some());
        assert!(snapshot.by_ident("KBAD").is_none());
    }

    #[test]
    fn test_import_skips_bad_coordinates() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");

        let csv = "ident,type,name,latitude_deg,longitude_deg,continent,iso_country\n\
                   XNAN,small_airport,Not A Number,north,-73.0,NA,US\n\
                   XFAR,small_airport,Too Far North,91.0,-73.0,NA,US\n\
                   KSEA,large_airport,Seattle Tacoma Intl,47.449,-122.309,NA,US\n";

        let summary = db.import_csv(csv.as_bytes()).expect("Error importing.");
        assert_eq!(summary.inserted, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(db.count().expect("db error"), 1);
    }

    #[test]
    fn test_import_replaces_existing() {
        let TestDb { tmp: _tmp, mut db } = create_test_db().expect("Failed to create test db.");
        fill_test_db(&mut db);
        fill_test_db(&mut db);

        assert_eq!(db.count().expect("db error"), 4);
    }

    #[test]
    fn test_import_gzip_file() {
        let TestDb { tmp, mut db } = create_test_db().expect("Failed to create test db.");

        let path = tmp.path().join("airports.csv.gz");
        let file = std::fs::File::create(&path).expect("Error creating file.");
        let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
        encoder
            .write_all(TEST_CSV.as_bytes())
            .expect("Error writing file.");
        encoder.finish().expect("Error finishing file.");

        let summary = db.import_csv_file(&path).expect("Error importing.");
        assert_eq!(summary.inserted, 4);

        let snapshot = db.load().expect("Error loading.");
        assert!(snapshot.by_ident("KMSO").is_some());
    }

    #[test]
    fn test_import_plain_file() {
        let TestDb { tmp, mut db } = create_test_db().expect("Failed to create test db.");

        let path = tmp.path().join("airports.csv");
        std::fs::write(&path, TEST_CSV).expect("Error writing file.");

        let summary = db.import_csv_file(&path).expect("Error importing.");
        assert_eq!(summary.inserted, 4);
        assert_eq!(summary.skipped, 0);
    }
}
