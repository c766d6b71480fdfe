//! Reading city maps from flat files.
//!
//! Cities come from a comma separated file of `name,latitude,longitude`
//! records, roads from a file of whitespace separated `name name` pairs.
//! Records which cannot be used are skipped; each one produces a
//! [LoadWarning], which is logged and handed back to the caller.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use geography::{CityMap, Coordinate, CoordinateError, MapError};
use log::{debug, info, warn};
use thiserror::Error;

/// A fatal error while loading a map.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open {}", .0.display())]
    Open(PathBuf, #[source] io::Error),

    #[error("Could not read input")]
    Io(#[from] io::Error),
}

/// A record which was skipped while loading a map.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadWarning {
    #[error("line {0}: expected name,latitude,longitude: {1}")]
    MalformedCity(usize, String),

    #[error("line {0}: invalid coordinate for {1}")]
    InvalidCoordinate(usize, String, #[source] CoordinateError),

    #[error("line {0}: {1} is already on the map")]
    DuplicateCity(usize, String),

    #[error("line {0}: expected a pair of city names: {1}")]
    MalformedRoad(usize, String),

    #[error("line {0}: road skipped")]
    UnknownCity(usize, #[source] MapError),
}

/// A map and the records skipped while building it.
#[derive(Debug)]
pub struct Loaded {
    pub map: CityMap,
    pub warnings: Vec<LoadWarning>,
}

type Result<T> = std::result::Result<T, LoadError>;

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| LoadError::Open(path.to_path_buf(), e))
}

fn report(warning: LoadWarning, warnings: &mut Vec<LoadWarning>) {
    match std::error::Error::source(&warning) {
        Some(cause) => warn!("Ignoring record, {}: {}", warning, cause),
        None => warn!("Ignoring record, {}", warning),
    }
    warnings.push(warning);
}

/// Load a map from a cities file and a roads file.
pub fn load<P, Q>(cities: P, roads: Q) -> Result<Loaded>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut map = CityMap::new();
    let mut warnings = read_cities(open(cities.as_ref())?, &mut map)?;
    warnings.extend(read_roads(open(roads.as_ref())?, &mut map)?);

    info!(
        "Loaded {} cities and {} roads ({} records skipped)",
        map.len(),
        map.roads(),
        warnings.len()
    );
    Ok(Loaded { map, warnings })
}

/// Add `name,latitude,longitude` records to a map.
pub fn read_cities<R: Read>(input: R, map: &mut CityMap) -> Result<Vec<LoadWarning>> {
    let mut warnings = Vec::new();

    for (number, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let fields: Vec<&str> = text.split(',').collect();
        if fields.len() != 3 || fields[0].trim().is_empty() {
            report(LoadWarning::MalformedCity(number, text.to_string()), &mut warnings);
            continue;
        }

        let name = fields[0].trim();
        let coordinate: Coordinate = match fields[1..].join(",").parse() {
            Ok(c) => c,
            Err(e) => {
                report(
                    LoadWarning::InvalidCoordinate(number, name.to_string(), e),
                    &mut warnings,
                );
                continue;
            }
        };

        if map.insert_city(name, coordinate).is_none() {
            report(LoadWarning::DuplicateCity(number, name.to_string()), &mut warnings);
        }
    }

    Ok(warnings)
}

/// Add `name name` road records to a map of cities.
pub fn read_roads<R: Read>(input: R, map: &mut CityMap) -> Result<Vec<LoadWarning>> {
    let mut warnings = Vec::new();

    for (number, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let names: Vec<&str> = text.split_whitespace().collect();
        if names.len() != 2 {
            report(LoadWarning::MalformedRoad(number, text.to_string()), &mut warnings);
            continue;
        }

        match map.connect(names[0], names[1]) {
            Ok(true) => {}
            Ok(false) => debug!("line {}: road {} already known", number, text),
            Err(e) => report(LoadWarning::UnknownCity(number, e), &mut warnings),
        }
    }

    Ok(warnings)
}
