//! Positions on the globe.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Earth's mean radius, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

const LATITUDES: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDES: RangeInclusive<f64> = -180.0..=180.0;

/// A latitude and longitude, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Construct a coordinate, rejecting positions which are not on the globe.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !LATITUDES.contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !LONGITUDES.contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    /// Great-circle distance to another coordinate in kilometers,
    /// by the haversine formula.
    pub fn haversine(&self, other: &Coordinate) -> f64 {
        let (lat1, lon1) = (self.latitude.to_radians(), self.longitude.to_radians());
        let (lat2, lon2) = (other.latitude.to_radians(), other.longitude.to_radians());
        let dlat = lat2 - lat1;
        let dlon = lon2 - lon1;

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Error when parsing or validating a coordinate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("Invalid coordinate: {0}")]
    InvalidLiteral(String),

    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),

    #[error("Latitude {0} is outside -90..90")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is outside -180..180")]
    LongitudeOutOfRange(f64),
}

fn parse_degrees(s: &str) -> Result<f64, CoordinateError> {
    s.parse()
        .map_err(|_| CoordinateError::InvalidNumber(s.to_string()))
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    /// Parses `latitude,longitude`, validating both ranges.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex =
                Regex::new(r"^\s*(?P<lat>[^,\s]+)\s*,\s*(?P<lon>[^,\s]+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(CoordinateError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Coordinate::checked(parse_degrees(&cap["lat"])?, parse_degrees(&cap["lon"])?)
    }
}
