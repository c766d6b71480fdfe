#![deny(clippy::all)]

//! Find routes between cities, loading maps from flat files and timing
//! each of the search strategies provided by [geography].

pub mod loader;
pub mod report;

pub use geography;
