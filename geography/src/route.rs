//! Route data structures
//!
//! A route is a sequence of city names, each connected to the next.

use std::fmt;

use itertools::Itertools;

use crate::map::CityMap;

/// An ordered sequence of cities, origin first and destination last.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Route {
    stops: Vec<String>,
}

impl<S> From<Vec<S>> for Route
where
    S: Into<String>,
{
    fn from(stops: Vec<S>) -> Self {
        assert_ne!(stops.len(), 0);
        Self {
            stops: stops.into_iter().map(Into::into).collect(),
        }
    }
}

impl Route {
    /// Construct a route which starts (and ends) at this city.
    pub fn new<S: Into<String>>(origin: S) -> Self {
        Route {
            stops: vec![origin.into()],
        }
    }

    /// Number of roads travelled.
    pub fn len(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// True for the trivial route which never leaves the origin.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|s| s.as_str())
    }

    /// Where this route started
    pub fn origin(&self) -> &str {
        &self.stops[0]
    }

    /// Where this route ends
    pub fn destination(&self) -> &str {
        &self.stops[self.stops.len() - 1]
    }

    /// Total great-circle distance along the route, in kilometers.
    ///
    /// Returns None if a stop is not on the map.
    pub fn distance(&self, map: &CityMap) -> Option<f64> {
        self.iter()
            .tuple_windows()
            .map(|(a, b)| map.distance(a, b))
            .sum()
    }

    /// Whether every consecutive pair of stops is connected on the map.
    pub fn is_connected(&self, map: &CityMap) -> bool {
        self.iter().all(|s| map.contains(s))
            && self
                .iter()
                .tuple_windows()
                .all(|(a, b)| map.are_adjacent(a, b))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().join(" -> "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::map::helpers::line;

    #[test]
    fn display() {
        let route: Route = vec!["A", "B", "C"].into();
        assert_eq!(route.to_string(), "A -> B -> C");
        assert_eq!(route.len(), 2);
        assert_eq!(route.origin(), "A");
        assert_eq!(route.destination(), "C");
    }

    #[test]
    fn distance() {
        let map = line();
        let route: Route = vec!["A", "B", "C"].into();
        let expected = map.distance("A", "B").unwrap() + map.distance("B", "C").unwrap();

        assert_eq!(route.distance(&map), Some(expected));
        assert!(route.is_connected(&map));
    }

    #[test]
    fn trivial() {
        let map = line();
        let route = Route::new("B");

        assert!(route.is_empty());
        assert_eq!(route.distance(&map), Some(0.0));
        assert_eq!(route.to_string(), "B");
        assert!(route.is_connected(&map));
    }

    #[test]
    fn disconnected() {
        let map = line();

        assert!(!Route::from(vec!["A", "C"]).is_connected(&map));
        assert!(!Route::new("Z").is_connected(&map));
        assert_eq!(Route::from(vec!["A", "Z"]).distance(&map), None);
    }
}
