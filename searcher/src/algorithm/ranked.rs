//! Best-first searches over a ranked frontier.
//!
//! The same driver serves greedy best-first search and A*: the
//! difference lies entirely in what [SearchHeuristic::priority] reports.
//! Greedy candidates rank by their estimate to the goal alone, A*
//! candidates by the cost so far plus that estimate.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::BinaryHeap;
use std::default::Default;
use std::fmt::Debug;

use super::cache::VisitedCache;
use super::{SearchAlgorithm, SearchOptions, SearchQueue, PROGRESS_INTERVAL};
use crate::errors::Result;
use crate::traits::{SearchHeuristic, SearchState};

#[derive(Debug)]
struct Ranked<P> {
    priority: P,
    sequence: usize,
    position: usize,
}

impl<P> PartialEq for Ranked<P>
where
    P: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P> Eq for Ranked<P> where P: PartialOrd {}

impl<P> Ord for Ranked<P>
where
    P: PartialOrd,
{
    // BinaryHeap pops the greatest element, so both keys are reversed:
    // lowest priority first, then earliest insertion.
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.sequence.cmp(&other.sequence))
            .reverse()
    }
}

impl<P> PartialOrd for Ranked<P>
where
    P: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue which always yields the lowest priority candidate,
/// breaking ties by insertion order.
#[derive(Debug)]
pub struct RankedQueue<S>
where
    S: SearchHeuristic,
{
    queue: BinaryHeap<Ranked<S::Priority>>,
    sequence: usize,
}

impl<S> Default for RankedQueue<S>
where
    S: SearchHeuristic,
{
    fn default() -> Self {
        RankedQueue {
            queue: BinaryHeap::new(),
            sequence: 0,
        }
    }
}

impl<S> SearchQueue for RankedQueue<S>
where
    S: SearchHeuristic,
{
    type Candidate = S;

    fn pop(&mut self) -> Option<usize> {
        self.queue.pop().map(|r| r.position)
    }

    fn push(&mut self, position: usize, item: &Self::Candidate) {
        self.queue.push(Ranked {
            priority: item.priority(),
            sequence: self.sequence,
            position,
        });
        self.sequence += 1;
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type RankedSearcher<S> = SearchAlgorithm<S, RankedQueue<S>, VisitedCache<S>>;

/// Build a ranked searcher which never queues already visited states.
pub fn build<S>(origin: S) -> RankedSearcher<S>
where
    S: SearchHeuristic + SearchState,
{
    SearchAlgorithm::new(origin).with_options(SearchOptions {
        prune_visited: true,
        verbose: Some(PROGRESS_INTERVAL),
    })
}

/// Perform a best-first search ordered by candidate priority.
///
/// With an admissible, consistent estimate folded into the priority
/// (cost so far plus estimate remaining) this is A*, and the first
/// complete candidate accepted is a cheapest one.
pub fn best_first<S>(origin: S) -> Result<Vec<S>>
where
    S: SearchHeuristic + SearchState,
{
    build(origin).run()
}
