//! The graph of cities and the roads between them.

use std::collections::HashMap;

use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::pathfinder::Pathfinder;

/// Error returned when modifying a map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("{0} is not a city on this map")]
    UnknownCity(String),
}

/// A named location and the cities directly connected to it.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    name: String,
    coordinate: Coordinate,
    adjacent: Vec<usize>,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Positions of the connected cities in the map, in the order
    /// the connections were made.
    pub(crate) fn adjacent(&self) -> &[usize] {
        &self.adjacent
    }
}

/// Cities stored in insertion order, with undirected, symmetric adjacency.
///
/// Maps are built once and then only read, so a finished map can be
/// shared by reference between threads running independent searches.
#[derive(Debug, Clone, Default)]
pub struct CityMap {
    cities: Vec<City>,
    index: HashMap<String, usize>,
}

impl CityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city. Returns its position, or `None` when a city with this
    /// name already exists, in which case the existing city is kept.
    pub fn insert_city<S: Into<String>>(&mut self, name: S, coordinate: Coordinate) -> Option<usize> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return None;
        }

        let position = self.cities.len();
        self.index.insert(name.clone(), position);
        self.cities.push(City {
            name,
            coordinate,
            adjacent: Vec::new(),
        });
        Some(position)
    }

    /// Connect two cities in both directions.
    ///
    /// Returns false when nothing changed: the cities are the same
    /// or already connected.
    pub fn connect(&mut self, left: &str, right: &str) -> Result<bool, MapError> {
        let l = self.require(left)?;
        let r = self.require(right)?;

        if l == r || self.cities[l].adjacent.contains(&r) {
            return Ok(false);
        }

        self.cities[l].adjacent.push(r);
        self.cities[r].adjacent.push(l);
        Ok(true)
    }

    fn require(&self, name: &str) -> Result<usize, MapError> {
        self.index_of(name)
            .ok_or_else(|| MapError::UnknownCity(name.to_string()))
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.index_of(name).map(|i| &self.cities[i])
    }

    pub(crate) fn city_at(&self, position: usize) -> Option<&City> {
        self.cities.get(position)
    }

    /// Number of cities
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterate over cities in the order they were inserted.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Number of undirected connections.
    pub fn roads(&self) -> usize {
        self.cities.iter().map(|c| c.adjacent.len()).sum::<usize>() / 2
    }

    /// Names of the cities connected to this one.
    ///
    /// Returns None when the city is not on the map.
    pub fn neighbors(&self, name: &str) -> Option<impl Iterator<Item = &str>> {
        let city = self.get(name)?;
        Some(
            city.adjacent
                .iter()
                .filter_map(move |&i| self.city_at(i))
                .map(|c| c.name()),
        )
    }

    pub fn are_adjacent(&self, left: &str, right: &str) -> bool {
        match (self.index_of(left), self.index_of(right)) {
            (Some(l), Some(r)) => self.cities[l].adjacent.contains(&r),
            _ => false,
        }
    }

    /// Great-circle distance between two cities, in kilometers.
    pub fn distance(&self, left: &str, right: &str) -> Option<f64> {
        let l = self.get(left)?;
        let r = self.get(right)?;
        Some(l.coordinate.haversine(&r.coordinate))
    }

    pub(crate) fn distance_between(&self, left: usize, right: usize) -> f64 {
        self.cities[left]
            .coordinate
            .haversine(&self.cities[right].coordinate)
    }

    /// Search for routes on this map.
    pub fn pathfinder(&self) -> Pathfinder<'_> {
        Pathfinder::new(self)
    }
}

#[cfg(test)]
pub(crate) mod helpers {
    use super::*;

    /// Build a map from `(name, latitude, longitude)` records and road pairs.
    pub(crate) fn build(cities: &[(&str, f64, f64)], roads: &[(&str, &str)]) -> CityMap {
        let mut map = CityMap::new();
        for &(name, lat, lon) in cities {
            map.insert_city(name, Coordinate::new(lat, lon)).unwrap();
        }
        for &(a, b) in roads {
            map.connect(a, b).unwrap();
        }
        map
    }

    /// A(0,0) - B(0,1) - C(0,2)
    pub(crate) fn line() -> CityMap {
        build(
            &[("A", 0.0, 0.0), ("B", 0.0, 1.0), ("C", 0.0, 2.0)],
            &[("A", "B"), ("B", "C")],
        )
    }
}
