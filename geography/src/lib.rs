#![deny(clippy::all)]

//! Cities on the globe, the roads between them, and routes along those roads.

pub mod coordinate;
pub mod map;
pub mod pathfinder;
pub mod route;
pub mod strategy;

pub use coordinate::{Coordinate, CoordinateError, EARTH_RADIUS_KM};
pub use map::{City, CityMap, MapError};
pub use pathfinder::Pathfinder;
pub use route::Route;
pub use strategy::{ParseStrategyError, Strategy, DEFAULT_MAX_DEPTH};
