//! adds - Aviation weather reports and nearby airports from the command line.

extern crate adds_data;
extern crate clap;
extern crate failure;
extern crate metfor;

use adds_data::{
    init_logging, AddsClient, AirportDb, AirportSnapshot, CommonCmdLineArgs, Coords, ReportQuery,
};
use clap::{AppSettings, Arg, ArgMatches, SubCommand};
use failure::{err_msg, Error, Fail};
use metfor::Quantity;

fn main() {
    if let Err(ref e) = run() {
        println!("error: {}", e);

        let mut fail: &dyn Fail = e.as_fail();

        while let Some(cause) = fail.cause() {
            println!("caused by: {}", cause);
            fail = cause;
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let app = CommonCmdLineArgs::new_app("adds", "Aviation weather reports and airport search.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("import")
                .about("Create the airport database from an OurAirports airports.csv file.")
                .arg(
                    Arg::with_name("csv")
                        .index(1)
                        .required(true)
                        .takes_value(true)
                        .help("Path to the csv file, may be gzip compressed (.gz)."),
                ),
        )
        .subcommand(
            SubCommand::with_name("closest")
                .about("List the airports closest to a location.")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(
                    Arg::with_name("lat")
                        .index(1)
                        .takes_value(true)
                        .required_unless("near")
                        .help("Latitude in degrees, north positive."),
                )
                .arg(
                    Arg::with_name("lon")
                        .index(2)
                        .takes_value(true)
                        .required_unless("near")
                        .help("Longitude in degrees, east positive."),
                )
                .arg(
                    Arg::with_name("near")
                        .long("near")
                        .takes_value(true)
                        .conflicts_with_all(&["lat", "lon"])
                        .help("Use the location of this airport instead."),
                )
                .arg(
                    Arg::with_name("count")
                        .short("n")
                        .long("count")
                        .takes_value(true)
                        .default_value("10")
                        .help("Number of airports to list, at least 1."),
                ),
        )
        .subcommand(
            SubCommand::with_name("metar")
                .about("Get the latest METARs for stations.")
                .arg(
                    Arg::with_name("stations")
                        .index(1)
                        .multiple(true)
                        .required(true)
                        .help("Station identifiers (e.g. kmso kgpi)."),
                )
                .arg(
                    Arg::with_name("all")
                        .long("all")
                        .help("Show every report from the last 1.5 hours, not just the latest."),
                ),
        )
        .subcommand(
            SubCommand::with_name("taf")
                .about("Get the current TAFs for stations.")
                .arg(
                    Arg::with_name("stations")
                        .index(1)
                        .multiple(true)
                        .required(true)
                        .help("Station identifiers (e.g. kmso kgpi)."),
                ),
        )
        .subcommand(
            SubCommand::with_name("pireps")
                .about("Get recent pilot reports around a location.")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(
                    Arg::with_name("lat")
                        .index(1)
                        .required(true)
                        .takes_value(true)
                        .help("Latitude in degrees, north positive."),
                )
                .arg(
                    Arg::with_name("lon")
                        .index(2)
                        .required(true)
                        .takes_value(true)
                        .help("Longitude in degrees, east positive."),
                )
                .arg(
                    Arg::with_name("radius")
                        .long("radius")
                        .takes_value(true)
                        .default_value("100")
                        .help("Search radius in statute miles."),
                ),
        );

    let (common_args, matches) = CommonCmdLineArgs::matches(app)?;
    init_logging(common_args.log_level());

    match matches.subcommand() {
        ("import", Some(sub_args)) => import(common_args, sub_args)?,
        ("closest", Some(sub_args)) => closest(common_args, sub_args)?,
        ("metar", Some(sub_args)) => metar(sub_args)?,
        ("taf", Some(sub_args)) => taf(sub_args)?,
        ("pireps", Some(sub_args)) => pireps(sub_args)?,
        _ => unreachable!(),
    }

    Ok(())
}

fn parse_arg<T>(args: &ArgMatches, name: &str) -> Result<T, Error>
where
    T: std::str::FromStr,
{
    let val = args
        .value_of(name)
        .ok_or_else(|| err_msg(format!("missing argument: {}", name)))?;

    val.parse::<T>()
        .map_err(|_| err_msg(format!("invalid value for {}: {}", name, val)))
}

fn import(common_args: CommonCmdLineArgs, sub_args: &ArgMatches) -> Result<(), Error> {
    // Safe to unwrap because the argument is required.
    let csv = sub_args.value_of("csv").unwrap();

    let mut db = AirportDb::open_or_create(&common_args.db_file())?;
    let summary = db.import_csv_file(&csv)?;

    println!(
        "Imported {} airports into {} ({} rows skipped).",
        summary.inserted,
        db.db_file().display(),
        summary.skipped
    );

    Ok(())
}

fn closest(common_args: CommonCmdLineArgs, sub_args: &ArgMatches) -> Result<(), Error> {
    let snapshot = AirportSnapshot::load(&common_args.db_file())?;
    let count: usize = parse_arg(sub_args, "count")?;
    if count == 0 {
        return Err(err_msg("count must be at least 1"));
    }

    let center = if let Some(ident) = sub_args.value_of("near") {
        snapshot
            .by_ident(ident)
            .map(|apt| apt.coords())
            .ok_or_else(|| err_msg(format!("unknown airport: {}", ident)))?
    } else {
        Coords::new(parse_arg(sub_args, "lat")?, parse_arg(sub_args, "lon")?)
    };

    if !center.is_valid() {
        return Err(err_msg(format!(
            "invalid location: {}, {}",
            center.lat, center.lon
        )));
    }

    let closest = snapshot.find_closest_n(center.lat, center.lon, count);

    if closest.is_empty() {
        println!("No airports in the database.");
        return Ok(());
    }

    println!(
        "{:<8} {:<16} {:<40} {:>3} {:>9}",
        "IDENT", "TYPE", "NAME", "CTY", "DIST (NM)"
    );
    for dist in closest {
        let apt = dist.airport;
        println!(
            "{:<8} {:<16} {:<40} {:>3} {:>9.1}",
            apt.ident, apt.airport_type, apt.name, apt.iso_country, dist.distance_nm
        );
    }

    Ok(())
}

fn metar(sub_args: &ArgMatches) -> Result<(), Error> {
    let client = AddsClient::new()?;

    // Safe to unwrap because the argument is required.
    let stations: Vec<&str> = sub_args.values_of("stations").unwrap().collect();

    if sub_args.is_present("all") {
        for metar in client.metars(&ReportQuery::station(stations.join(",")))? {
            println!("{}", metar.text);
        }
        return Ok(());
    }

    for station in stations {
        let metar = client.latest_metar(station)?;

        println!("{}", metar.text);
        let blank = "-".to_owned();
        println!(
            "   observed: {}  category: {}  temp: {}  wind: {}",
            metar.observation_time,
            metar.flight_category.as_ref().unwrap_or(&blank),
            metar
                .temperature
                .map(|t| format!("{:.0}C", t.unpack()))
                .unwrap_or_else(|| blank.clone()),
            metar
                .wind_speed
                .map(|s| format!("{:.0}KT", s.unpack()))
                .unwrap_or_else(|| blank.clone()),
        );
    }

    Ok(())
}

fn taf(sub_args: &ArgMatches) -> Result<(), Error> {
    let client = AddsClient::new()?;

    // Safe to unwrap because the argument is required.
    let stations: Vec<&str> = sub_args.values_of("stations").unwrap().collect();

    for taf in client.tafs(&ReportQuery::station(stations.join(",")))? {
        println!("{}", taf.text);
        println!(
            "   valid {} -> {}, {} periods",
            taf.valid_time_from,
            taf.valid_time_to,
            taf.forecasts.len()
        );
    }

    Ok(())
}

fn pireps(sub_args: &ArgMatches) -> Result<(), Error> {
    let client = AddsClient::new()?;

    let query = ReportQuery::Radius {
        radius_sm: parse_arg(sub_args, "radius")?,
        center: Coords::new(parse_arg(sub_args, "lat")?, parse_arg(sub_args, "lon")?),
    };

    for pirep in client.pireps(&query)? {
        let altitude = pirep
            .altitude
            .map(|alt| format!("{:.0}ft", alt.unpack()))
            .unwrap_or_else(|| "-".to_owned());
        println!("{} {:>8} {}", pirep.observation_time, altitude, pirep.text);
    }

    Ok(())
}
