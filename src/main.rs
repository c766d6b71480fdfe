use clap::{crate_version, value_t, App, Arg, ArgMatches};
use log::{error, LevelFilter};
use thiserror::Error;

use geography::{CityMap, Strategy, DEFAULT_MAX_DEPTH};
use routefinder::{loader, report};

type Error = anyhow::Error;

fn main() {
    if let Err(e) = driver() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0} is not a city on this map")]
    UnknownCity(String),
}

fn init_logging(matches: &ArgMatches) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stderr);

    match matches.occurrences_of("verbose") {
        0 if std::env::var_os("RUST_LOG").is_some() => {}
        0 => {
            builder.filter_level(LevelFilter::Warn);
        }
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn list(map: &CityMap) {
    for city in map.cities() {
        let neighbors: Vec<&str> = map
            .neighbors(city.name())
            .map(|n| n.collect())
            .unwrap_or_default();
        println!(
            "{} {}: {}",
            city.name(),
            city.coordinate(),
            neighbors.join(", ")
        );
    }
}

fn driver() -> Result<(), Error> {
    let default_depth = DEFAULT_MAX_DEPTH.to_string();
    let matches = App::new("Route Finder")
        .version(crate_version!())
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find routes between cities")
        .arg(
            Arg::with_name("start")
                .value_name("START")
                .required_unless("list")
                .index(1),
        )
        .arg(
            Arg::with_name("goal")
                .value_name("GOAL")
                .required_unless("list")
                .index(2),
        )
        .arg(
            Arg::with_name("cities")
                .short("c")
                .long("cities")
                .value_name("FILE")
                .default_value("coordinates.csv")
                .help("City records, one name,latitude,longitude per line")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("adjacencies")
                .short("r")
                .long("adjacencies")
                .value_name("FILE")
                .default_value("Adjacencies.txt")
                .help("Roads, one pair of city names per line")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .value_name("ALGORITHM")
                .possible_values(&Strategy::NAMES)
                .default_value("astar")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("max-depth")
                .long("max-depth")
                .value_name("DEPTH")
                .default_value(&default_depth)
                .help("Depth bound for iterative deepening")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("all")
                .long("all")
                .help("Run every algorithm concurrently and compare"),
        )
        .arg(
            Arg::with_name("list")
                .long("list")
                .help("List the cities on the map"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase logging verbosity"),
        )
        .get_matches();

    init_logging(&matches);

    let loaded = loader::load(
        matches.value_of("cities").unwrap_or("coordinates.csv"),
        matches.value_of("adjacencies").unwrap_or("Adjacencies.txt"),
    )?;
    let map = loaded.map;

    if matches.is_present("list") {
        list(&map);
        return Ok(());
    }

    let max_depth = value_t!(matches, "max-depth", usize)?;
    let start = matches.value_of("start").unwrap_or_default();
    let goal = matches.value_of("goal").unwrap_or_default();
    for city in [start, goal].iter() {
        if !map.contains(city) {
            return Err(CliError::UnknownCity(city.to_string()).into());
        }
    }

    if matches.is_present("all") {
        for outcome in report::compare(&map, &Strategy::all(max_depth), start, goal) {
            println!("{}\n{}\n", outcome.strategy, outcome);
        }
    } else {
        let strategy: Strategy = matches
            .value_of("algorithm")
            .unwrap_or("astar")
            .parse()?;
        let outcome = report::run(&map, strategy.with_max_depth(max_depth), start, goal);
        println!("{}", outcome);
    }

    Ok(())
}
