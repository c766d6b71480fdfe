use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for conducting searches.
///
/// Searches are "complete" when they are ready to be
/// returned to the user. The first complete candidate
/// accepted by a search algorithm ends the search.
pub trait SearchCandidate: Debug + Sized {
    /// Indicates that this candidate has reached the goal.
    fn is_complete(&self) -> bool;

    /// Produces the candidates reachable in one step from this
    /// one, in the order they should be explored.
    fn children(&self) -> Vec<Self>;
}

/// A candidate which can be identified by the state it has reached.
///
/// Algorithms which remember where they have been (visited sets,
/// on-path checks) compare candidates by state only.
pub trait SearchState: SearchCandidate + Clone {
    type State: Debug + Clone + Eq + Hash;

    fn state(&self) -> Self::State;
}

/// An interface for searching when candidates can be ranked.
///
/// Lower priorities are explored first. Candidates with equal
/// priority are explored in the order they were produced.
pub trait SearchHeuristic: SearchCandidate {
    type Priority: Debug + Copy + PartialOrd;

    fn priority(&self) -> Self::Priority;
}
