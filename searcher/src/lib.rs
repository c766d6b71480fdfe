//! Generalized search algorithms, especially useful for graph traversal.
//!
//! To use these search algorithms, implement at least the traits [SearchCandidate]
//! and [SearchState]. Ranked searches additionally need [SearchHeuristic].
//!
//! Every algorithm returns the sequence of candidates leading from the origin
//! to the first complete candidate it accepts.

pub mod algorithm;
mod errors;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::SearchCandidate;
pub use traits::SearchHeuristic;
pub use traits::SearchState;

pub use algorithm::basic::bfs;
pub use algorithm::depth::dfs;
pub use algorithm::depth::iddfs;
pub use algorithm::ranked;
pub use algorithm::ranked::best_first;
pub use algorithm::SearchOptions;
