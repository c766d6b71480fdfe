//! Depth-first searches.
//!
//! Both searches walk an explicit stack of frames rather than recursing,
//! so deep graphs cannot overflow the call stack. Each frame holds a
//! candidate and the children it has not tried yet; children are tested
//! lazily, when the frame reaches them, exactly as a recursive walk would.

use std::collections::HashSet;
use std::vec;

use log::debug;

use crate::errors::{Result, SearchError};
use crate::traits::SearchState;

#[derive(Debug)]
struct Frame<S> {
    candidate: S,
    untried: vec::IntoIter<S>,
}

impl<S> Frame<S>
where
    S: SearchState,
{
    fn expand(candidate: S) -> Self {
        let untried = candidate.children().into_iter();
        Self { candidate, untried }
    }
}

/// The candidates on the stack, followed by the final one.
fn collect<S>(stack: Vec<Frame<S>>, last: S) -> Vec<S> {
    let mut steps: Vec<S> = stack.into_iter().map(|f| f.candidate).collect();
    steps.push(last);
    steps
}

/// Depth-first search, trying children in the order given by
/// [SearchCandidate::children] and returning the first complete
/// candidate found.
///
/// States are remembered for the whole run: a state explored on a
/// failed branch is never tried again. The result carries no
/// optimality guarantee.
///
/// [SearchCandidate::children]: crate::SearchCandidate::children
pub fn dfs<S>(origin: S) -> Result<Vec<S>>
where
    S: SearchState,
{
    let mut visited = HashSet::new();
    visited.insert(origin.state());
    if origin.is_complete() {
        return Ok(vec![origin]);
    }

    let mut stack = vec![Frame::expand(origin)];
    while let Some(frame) = stack.last_mut() {
        match frame.untried.find(|c| !visited.contains(&c.state())) {
            Some(child) => {
                visited.insert(child.state());
                if child.is_complete() {
                    debug!("Depth-first search complete, {} states visited", visited.len());
                    return Ok(collect(stack, child));
                }
                stack.push(Frame::expand(child));
            }
            None => {
                stack.pop();
            }
        }
    }

    Err(SearchError::NoResultFound)
}

/// Outcome of a single depth-limited pass.
#[derive(Debug)]
enum Limited<S> {
    Found(Vec<S>),
    /// Some branch was stopped by the limit and could have continued.
    Cutoff,
    /// Every branch ended before the limit did.
    Exhausted,
}

/// Whether any child of this candidate is off the current path.
fn extends<S>(candidate: &S, on_path: &HashSet<S::State>) -> bool
where
    S: SearchState,
{
    let state = candidate.state();
    candidate
        .children()
        .iter()
        .map(|c| c.state())
        .any(|s| s != state && !on_path.contains(&s))
}

/// Depth-first search which only accepts complete candidates exactly
/// `limit` steps from the origin and never steps further than that.
fn depth_limited<S>(origin: S, limit: usize) -> Limited<S>
where
    S: SearchState,
{
    let mut on_path = HashSet::new();

    if limit == 0 {
        if origin.is_complete() {
            return Limited::Found(vec![origin]);
        }
        return if extends(&origin, &on_path) {
            Limited::Cutoff
        } else {
            Limited::Exhausted
        };
    }

    let mut cutoff = false;
    on_path.insert(origin.state());
    let mut stack = vec![Frame::expand(origin)];

    while let Some(frame) = stack.last_mut() {
        match frame.untried.find(|c| !on_path.contains(&c.state())) {
            Some(child) if stack.len() == limit => {
                if child.is_complete() {
                    return Limited::Found(collect(stack, child));
                }
                on_path.insert(child.state());
                cutoff = cutoff || extends(&child, &on_path);
                on_path.remove(&child.state());
            }
            Some(child) => {
                on_path.insert(child.state());
                stack.push(Frame::expand(child));
            }
            None => {
                if let Some(done) = stack.pop() {
                    on_path.remove(&done.candidate.state());
                }
            }
        }
    }

    if cutoff {
        Limited::Cutoff
    } else {
        Limited::Exhausted
    }
}

/// Iterative-deepening depth-first search.
///
/// Runs depth-limited searches with limits `0..max_depth`, so the result
/// has the fewest steps of any route no longer than `max_depth - 1`
/// steps. Routes needing `max_depth` steps or more are never found.
/// A candidate is never revisited while it is on the current path.
///
/// Fails with [SearchError::DepthLimitExhausted] when the limit stopped the
/// search, and [SearchError::NoResultFound] when every route was exhausted
/// before reaching it.
pub fn iddfs<S>(origin: S, max_depth: usize) -> Result<Vec<S>>
where
    S: SearchState,
{
    for limit in 0..max_depth {
        match depth_limited(origin.clone(), limit) {
            Limited::Found(steps) => {
                debug!("Iterative deepening complete at depth {}", limit);
                return Ok(steps);
            }
            Limited::Cutoff => debug!("Nothing found at depth {}, deepening", limit),
            Limited::Exhausted => return Err(SearchError::NoResultFound),
        }
    }
    Err(SearchError::DepthLimitExhausted(max_depth))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::fixtures::{nodes, Graph};

    #[test]
    fn dfs_follows_adjacency_order() {
        // 0 - 1 - 2 - 3 and a shortcut 0 - 3 listed last.
        let graph = Graph::undirected(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(nodes(dfs(graph.start(0, 3)).unwrap()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn dfs_does_not_revisit_failed_branches() {
        // 1 is a dead end reached first; 2 leads to the goal 3.
        let graph = Graph::undirected(4, &[(0, 1), (0, 2), (2, 3)]);
        assert_eq!(nodes(dfs(graph.start(0, 3)).unwrap()), vec![0, 2, 3]);
    }

    #[test]
    fn dfs_trivial() {
        let graph = Graph::undirected(2, &[(0, 1)]);
        assert_eq!(nodes(dfs(graph.start(0, 0)).unwrap()), vec![0]);
    }

    #[test]
    fn dfs_disconnected() {
        let graph = Graph::undirected(4, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(dfs(graph.start(0, 3)).unwrap_err(), SearchError::NoResultFound);
    }

    #[test]
    fn iddfs_line() {
        let graph = Graph::undirected(3, &[(0, 1), (1, 2)]);

        assert_eq!(
            iddfs(graph.start(0, 2), 1).unwrap_err(),
            SearchError::DepthLimitExhausted(1)
        );
        assert_eq!(
            iddfs(graph.start(0, 2), 2).unwrap_err(),
            SearchError::DepthLimitExhausted(2)
        );
        assert_eq!(nodes(iddfs(graph.start(0, 2), 3).unwrap()), vec![0, 1, 2]);
    }

    #[test]
    fn iddfs_finds_shallowest() {
        let graph = Graph::undirected(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(nodes(iddfs(graph.start(0, 3), 10).unwrap()), vec![0, 3]);
    }

    #[test]
    fn iddfs_trivial() {
        let graph = Graph::undirected(2, &[(0, 1)]);
        assert_eq!(nodes(iddfs(graph.start(1, 1), 1).unwrap()), vec![1]);
        assert_eq!(
            iddfs(graph.start(1, 1), 0).unwrap_err(),
            SearchError::DepthLimitExhausted(0)
        );
    }

    #[test]
    fn iddfs_stops_when_exhausted() {
        // The component around 0 has no route longer than 2 edges.
        let graph = Graph::undirected(4, &[(0, 1), (1, 2)]);
        assert_eq!(
            iddfs(graph.start(0, 3), 50).unwrap_err(),
            SearchError::NoResultFound
        );
    }

    #[test]
    fn iddfs_ignores_goal_before_limit() {
        // The goal 1 is one step away; at limit 2 the only two-step
        // route ending at 1 goes through 2.
        let graph = Graph::undirected(3, &[(0, 1), (0, 2), (2, 1)]);
        assert_eq!(
            depth_limited(graph.start(0, 1), 2).found(),
            Some(vec![0, 2, 1])
        );
        assert_eq!(depth_limited(graph.start(0, 1), 1).found(), Some(vec![0, 1]));
    }

    impl<'g> Limited<crate::algorithm::fixtures::Walk<'g>> {
        fn found(self) -> Option<Vec<usize>> {
            match self {
                Limited::Found(steps) => Some(nodes(steps)),
                _ => None,
            }
        }
    }
}
