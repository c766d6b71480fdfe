//! Route finding between cities using the algorithms in searcher.

use log::debug;
use searcher::{SearchCandidate, SearchHeuristic, SearchResult, SearchState};

use crate::map::CityMap;
use crate::route::Route;

/// How candidates are ordered on a ranked frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ranking {
    /// Not ranked at all.
    Unranked,
    /// Estimated distance to the goal only.
    Greedy,
    /// Distance travelled plus estimated distance to the goal.
    AStar,
}

/// Holds information about a route while the search
/// algorithm (in searcher) runs.
///
/// Candidates only know where they are; the route itself is rebuilt by
/// the search from the chain of candidates which led to the goal.
#[derive(Debug, Clone)]
struct RouteCandidate<'m> {
    map: &'m CityMap,
    goal: usize,
    city: usize,
    travelled: f64,
    priority: f64,
    ranking: Ranking,
}

impl<'m> RouteCandidate<'m> {
    fn start(map: &'m CityMap, origin: usize, goal: usize, ranking: Ranking) -> Self {
        Self {
            map,
            goal,
            city: origin,
            travelled: 0.0,
            priority: 0.0,
            ranking,
        }
    }

    fn step(&self, city: usize) -> Self {
        let (travelled, priority) = match self.ranking {
            Ranking::Unranked => (0.0, 0.0),
            Ranking::Greedy => (0.0, self.map.distance_between(city, self.goal)),
            Ranking::AStar => {
                let travelled = self.travelled + self.map.distance_between(self.city, city);
                (travelled, travelled + self.map.distance_between(city, self.goal))
            }
        };

        Self {
            map: self.map,
            goal: self.goal,
            city,
            travelled,
            priority,
            ranking: self.ranking,
        }
    }
}

impl<'m> SearchCandidate for RouteCandidate<'m> {
    fn is_complete(&self) -> bool {
        self.city == self.goal
    }

    fn children(&self) -> Vec<Self> {
        match self.map.city_at(self.city) {
            Some(city) => city
                .adjacent()
                .iter()
                .filter(|&&next| self.map.city_at(next).is_some())
                .map(|&next| self.step(next))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<'m> SearchState for RouteCandidate<'m> {
    type State = usize;

    fn state(&self) -> Self::State {
        self.city
    }
}

impl<'m> SearchHeuristic for RouteCandidate<'m> {
    type Priority = f64;

    fn priority(&self) -> Self::Priority {
        self.priority
    }
}

/// Implements route finding on a map.
///
/// Every search returns None when either city is not on the map, or
/// when the goal cannot be reached.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m> {
    map: &'m CityMap,
}

impl<'m> Pathfinder<'m> {
    /// Construct a new pathfinder.
    pub fn new(map: &'m CityMap) -> Self {
        Self { map }
    }

    fn candidate(&self, start: &str, goal: &str, ranking: Ranking) -> Option<RouteCandidate<'m>> {
        match (self.map.index_of(start), self.map.index_of(goal)) {
            (Some(s), Some(g)) => Some(RouteCandidate::start(self.map, s, g, ranking)),
            (None, _) => {
                debug!("Start city {} is not on the map", start);
                None
            }
            (_, None) => {
                debug!("Goal city {} is not on the map", goal);
                None
            }
        }
    }

    fn route(&self, outcome: SearchResult<Vec<RouteCandidate<'m>>>) -> Option<Route> {
        match outcome {
            Ok(steps) => Some(
                steps
                    .iter()
                    .filter_map(|c| self.map.city_at(c.city))
                    .map(|c| c.name())
                    .collect::<Vec<_>>()
                    .into(),
            ),
            Err(e) => {
                debug!("{}", e);
                None
            }
        }
    }

    /// Breadth-first search: the route with the fewest roads.
    pub fn breadth_first(&self, start: &str, goal: &str) -> Option<Route> {
        let origin = self.candidate(start, goal, Ranking::Unranked)?;
        self.route(searcher::bfs(origin))
    }

    /// Depth-first search: the first route found following roads in
    /// the order they were added.
    pub fn depth_first(&self, start: &str, goal: &str) -> Option<Route> {
        let origin = self.candidate(start, goal, Ranking::Unranked)?;
        self.route(searcher::dfs(origin))
    }

    /// Iterative-deepening depth-first search over routes of at most
    /// `max_depth - 1` roads. Longer routes are never found.
    pub fn iterative_deepening(&self, start: &str, goal: &str, max_depth: usize) -> Option<Route> {
        let origin = self.candidate(start, goal, Ranking::Unranked)?;
        self.route(searcher::iddfs(origin, max_depth))
    }

    /// Greedy best-first search, always heading for the city closest to
    /// the goal as the crow flies. Not guaranteed to find the shortest route.
    pub fn best_first(&self, start: &str, goal: &str) -> Option<Route> {
        let origin = self.candidate(start, goal, Ranking::Greedy)?;
        self.route(searcher::best_first(origin))
    }

    /// A* search: the route with the least total distance.
    pub fn astar(&self, start: &str, goal: &str) -> Option<Route> {
        let origin = self.candidate(start, goal, Ranking::AStar)?;
        self.route(searcher::best_first(origin))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::map::helpers::*;

    fn route(stops: &[&str]) -> Option<Route> {
        Some(stops.to_vec().into())
    }

    /// Every simple route between two cities, by exhaustive enumeration.
    fn every_route(map: &CityMap, start: &str, goal: &str) -> Vec<Route> {
        fn extend(map: &CityMap, goal: &str, stops: &mut Vec<String>, found: &mut Vec<Route>) {
            let last = stops[stops.len() - 1].clone();
            if last == goal {
                found.push(stops.clone().into());
                return;
            }
            let next: Vec<String> = map
                .neighbors(&last)
                .unwrap()
                .map(|s| s.to_string())
                .collect();
            for n in next {
                if !stops.contains(&n) {
                    stops.push(n);
                    extend(map, goal, stops, found);
                    stops.pop();
                }
            }
        }

        let mut found = Vec::new();
        extend(map, goal, &mut vec![start.to_string()], &mut found);
        found
    }

    /// Kansas towns on two loops into Wichita, and Oberlin off on its own.
    fn kansas() -> CityMap {
        build(
            &[
                ("Salina", 38.8403, -97.6114),
                ("McPherson", 38.3708, -97.6642),
                ("Newton", 38.0467, -97.3450),
                ("Wichita", 37.6872, -97.3301),
                ("Abilene", 38.9172, -97.2139),
                ("Marion", 38.3483, -97.0170),
                ("El_Dorado", 37.8172, -96.8622),
                ("Andover", 37.7139, -97.1364),
                ("Hutchinson", 38.0608, -97.9298),
                ("Oberlin", 39.8183, -100.5282),
            ],
            &[
                ("Salina", "McPherson"),
                ("Salina", "Abilene"),
                ("McPherson", "Newton"),
                ("McPherson", "Hutchinson"),
                ("Hutchinson", "Wichita"),
                ("Newton", "Wichita"),
                ("Abilene", "Marion"),
                ("Marion", "El_Dorado"),
                ("El_Dorado", "Andover"),
                ("Andover", "Wichita"),
            ],
        )
    }

    fn all(map: &CityMap, start: &str, goal: &str) -> Vec<Option<Route>> {
        let finder = map.pathfinder();
        vec![
            finder.breadth_first(start, goal),
            finder.depth_first(start, goal),
            finder.iterative_deepening(start, goal, 20),
            finder.best_first(start, goal),
            finder.astar(start, goal),
        ]
    }

    #[test]
    fn three_city_line() {
        let map = line();
        let finder = map.pathfinder();

        assert_eq!(finder.breadth_first("A", "C"), route(&["A", "B", "C"]));
        assert_eq!(finder.iterative_deepening("A", "C", 1), None);
        assert_eq!(finder.iterative_deepening("A", "C", 3), route(&["A", "B", "C"]));

        let total = finder.breadth_first("A", "C").unwrap().distance(&map).unwrap();
        let expected = map.distance("A", "B").unwrap() + map.distance("B", "C").unwrap();
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn every_strategy_on_the_line() {
        let map = line();
        for found in all(&map, "A", "C") {
            assert_eq!(found, route(&["A", "B", "C"]));
        }
    }

    #[test]
    fn start_is_goal() {
        let map = kansas();
        for found in all(&map, "Newton", "Newton") {
            let found = found.unwrap();
            assert_eq!(found, Route::new("Newton"));
            assert_eq!(found.distance(&map), Some(0.0));
        }
    }

    #[test]
    fn unknown_cities() {
        let map = kansas();
        for found in all(&map, "Topeka", "Wichita") {
            assert_eq!(found, None);
        }
        for found in all(&map, "Wichita", "Topeka") {
            assert_eq!(found, None);
        }
    }

    #[test]
    fn unreachable() {
        let map = kansas();
        for found in all(&map, "Salina", "Oberlin") {
            assert_eq!(found, None);
        }
        for found in all(&map, "Oberlin", "Salina") {
            assert_eq!(found, None);
        }
    }

    #[test]
    fn routes_follow_roads() {
        let map = kansas();
        let names: Vec<&str> = map.cities().map(|c| c.name()).filter(|&n| n != "Oberlin").collect();
        for start in &names {
            for goal in &names {
                for found in all(&map, start, goal) {
                    let found = found.unwrap();
                    assert_eq!(found.origin(), *start);
                    assert_eq!(found.destination(), *goal);
                    assert!(found.is_connected(&map), "{} is not connected", found);
                }
            }
        }
    }

    #[test]
    fn breadth_first_fewest_roads() {
        let map = kansas();
        let names: Vec<&str> = map.cities().map(|c| c.name()).filter(|&n| n != "Oberlin").collect();
        for start in &names {
            for goal in &names {
                let fewest = every_route(&map, start, goal)
                    .iter()
                    .map(|r| r.len())
                    .min()
                    .unwrap();
                let finder = map.pathfinder();
                assert_eq!(finder.breadth_first(start, goal).unwrap().len(), fewest);
                assert_eq!(
                    finder.iterative_deepening(start, goal, 20).unwrap().len(),
                    fewest
                );
            }
        }
    }

    #[test]
    fn astar_shortest_distance() {
        let map = kansas();
        let names: Vec<&str> = map.cities().map(|c| c.name()).filter(|&n| n != "Oberlin").collect();
        for start in &names {
            for goal in &names {
                let found = map.pathfinder().astar(start, goal).unwrap();
                let best = found.distance(&map).unwrap();
                for other in every_route(&map, start, goal) {
                    assert!(best <= other.distance(&map).unwrap() + 1e-9);
                }
            }
        }
    }

    #[test]
    fn astar_no_longer_than_greedy() {
        let map = kansas();
        let finder = map.pathfinder();
        let greedy = finder.best_first("Abilene", "Wichita").unwrap();
        let astar = finder.astar("Abilene", "Wichita").unwrap();

        assert!(greedy.is_connected(&map));
        assert!(astar.distance(&map).unwrap() <= greedy.distance(&map).unwrap() + 1e-9);
    }

    #[test]
    fn depth_limit_is_a_hard_cutoff() {
        let map = kansas();
        let finder = map.pathfinder();
        let fewest = finder.breadth_first("Salina", "Andover").unwrap().len();

        assert_eq!(finder.iterative_deepening("Salina", "Andover", fewest), None);
        assert_eq!(
            finder.iterative_deepening("Salina", "Andover", fewest + 1).unwrap().len(),
            fewest
        );
    }

    #[test]
    fn repeatable() {
        let map = kansas();
        assert_eq!(all(&map, "Hutchinson", "Marion"), all(&map, "Hutchinson", "Marion"));
    }

    #[test]
    fn shared_between_threads() {
        let map = kansas();
        let expected = all(&map, "Salina", "Andover");

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| all(&map, "Salina", "Andover")))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
