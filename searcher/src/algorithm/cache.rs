//! Search caching support to eliminate already explored items.

use std::collections::HashSet;
use std::default::Default;

use crate::traits::{SearchCandidate, SearchState};

/// Defines the behavior required of a search cache.
pub trait Cache: Default {
    type Candidate: SearchCandidate;

    /// Record this candidate, returning false when it should be skipped.
    fn check(&mut self, candidate: &Self::Candidate) -> bool;

    /// Whether this candidate would be skipped, without recording it.
    fn seen(&self, candidate: &Self::Candidate) -> bool;
}

/// Remembers every state accepted during a run.
///
/// Once a state is visited no other candidate reaching the same
/// state is accepted, regardless of how it got there.
#[derive(Debug)]
pub struct VisitedCache<S>
where
    S: SearchState,
{
    visited: HashSet<S::State>,
}

impl<S> Default for VisitedCache<S>
where
    S: SearchState,
{
    fn default() -> Self {
        VisitedCache {
            visited: HashSet::default(),
        }
    }
}

impl<S> Cache for VisitedCache<S>
where
    S: SearchState,
{
    type Candidate = S;

    fn check(&mut self, candidate: &Self::Candidate) -> bool {
        self.visited.insert(candidate.state())
    }

    fn seen(&self, candidate: &Self::Candidate) -> bool {
        self.visited.contains(&candidate.state())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::fixtures::Graph;

    #[test]
    fn visited_cache_accepts_each_state_once() {
        let graph = Graph::undirected(2, &[(0, 1)]);
        let mut cache = VisitedCache::default();

        assert!(!cache.seen(&graph.start(0, 1)));
        assert!(cache.check(&graph.start(0, 1)));
        assert!(cache.seen(&graph.start(0, 1)));
        assert!(!cache.check(&graph.start(0, 0)));
        assert!(cache.check(&graph.start(1, 0)));
    }
}
