//! Selecting a search algorithm by name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::map::CityMap;
use crate::route::Route;

/// Depth bound used for iterative deepening unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// One of the five route finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    BreadthFirst,
    DepthFirst,
    IterativeDeepening { max_depth: usize },
    BestFirst,
    AStar,
}

impl Strategy {
    /// Names accepted by [Strategy::from_str], in display order.
    pub const NAMES: [&'static str; 5] = ["bfs", "dfs", "id-dfs", "best-first", "astar"];

    /// Every strategy, with iterative deepening bounded by `max_depth`.
    pub fn all(max_depth: usize) -> [Strategy; 5] {
        [
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::IterativeDeepening { max_depth },
            Strategy::BestFirst,
            Strategy::AStar,
        ]
    }

    /// Replace the depth bound of an iterative deepening strategy.
    /// Other strategies are returned unchanged.
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        match self {
            Strategy::IterativeDeepening { .. } => Strategy::IterativeDeepening { max_depth },
            other => other,
        }
    }

    /// Find a route from `start` to `goal` with this strategy.
    pub fn find(&self, map: &CityMap, start: &str, goal: &str) -> Option<Route> {
        let finder = map.pathfinder();
        match *self {
            Strategy::BreadthFirst => finder.breadth_first(start, goal),
            Strategy::DepthFirst => finder.depth_first(start, goal),
            Strategy::IterativeDeepening { max_depth } => {
                finder.iterative_deepening(start, goal, max_depth)
            }
            Strategy::BestFirst => finder.best_first(start, goal),
            Strategy::AStar => finder.astar(start, goal),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "BFS"),
            Strategy::DepthFirst => write!(f, "DFS"),
            Strategy::IterativeDeepening { .. } => write!(f, "ID-DFS"),
            Strategy::BestFirst => write!(f, "Best-First Search"),
            Strategy::AStar => write!(f, "A* Search"),
        }
    }
}

/// Error when a strategy name is not recognized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown search algorithm: {0}")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Strategy::BreadthFirst),
            "dfs" => Ok(Strategy::DepthFirst),
            "id-dfs" | "iddfs" => Ok(Strategy::IterativeDeepening {
                max_depth: DEFAULT_MAX_DEPTH,
            }),
            "best-first" | "greedy" => Ok(Strategy::BestFirst),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
