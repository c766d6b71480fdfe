//! Running strategies and reporting what they found.

use std::fmt;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use geography::{CityMap, Route, Strategy};
use log::info;

/// The result of running one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub strategy: Strategy,
    pub route: Option<Route>,
    /// Total great-circle distance of the route, in kilometers.
    pub distance: Option<f64>,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
}

/// Search for a route with a single strategy, timing the search.
pub fn run(map: &CityMap, strategy: Strategy, start: &str, goal: &str) -> Outcome {
    let now = Instant::now();
    let route = strategy.find(map, start, goal);
    let elapsed = now.elapsed();

    let distance = route.as_ref().and_then(|r| r.distance(map));
    info!(
        "{} from {} to {}: {} roads in {:?}",
        strategy,
        start,
        goal,
        route.as_ref().map_or(0, |r| r.len()),
        elapsed
    );

    Outcome {
        strategy,
        route,
        distance,
        elapsed,
    }
}

/// Run several strategies at once, one thread each, over the same map.
///
/// Outcomes are returned in the order the strategies were given.
pub fn compare(map: &CityMap, strategies: &[Strategy], start: &str, goal: &str) -> Vec<Outcome> {
    thread::scope(|s| {
        let handles: Vec<_> = strategies
            .iter()
            .map(|&strategy| s.spawn(move || run(map, strategy, start, goal)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    })
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.route {
            Some(route) => {
                writeln!(f, "Route found: {}", route)?;
                writeln!(f, "Time taken: {:.4} seconds", self.elapsed.as_secs_f64())?;
                write!(f, "Total distance: {:.2} km", self.distance.unwrap_or(0.0))
            }
            None => write!(f, "No route found."),
        }
    }
}
