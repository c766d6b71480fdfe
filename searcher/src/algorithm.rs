//! Provides the building blocks for search algorithms

use std::default::Default;

use log::debug;

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::traits::SearchState;

pub mod basic;
pub mod cache;
pub mod depth;
pub mod ranked;

/// Trait used to implement queues of search candidates
/// which should be checked for completion.
///
/// Queues only hold positions in the search trail; the
/// candidate is passed to `push` so that ranked queues can
/// record its priority.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<usize>;

    fn push(&mut self, position: usize, item: &Self::Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Expansions between progress reports.
pub(crate) const PROGRESS_INTERVAL: usize = 10_000;

/// Options which tune how a [SearchAlgorithm] runs.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Drop children whose state has already been visited
    /// instead of queueing them.
    pub prune_visited: bool,

    /// Log progress every this many expansions.
    pub verbose: Option<usize>,
}

/// Candidates discovered during a search, each linked to the
/// candidate it was produced from.
#[derive(Debug)]
struct Trail<S> {
    candidates: Vec<S>,
    parents: Vec<Option<usize>>,
}

impl<S> Trail<S>
where
    S: SearchState,
{
    fn new() -> Self {
        Self {
            candidates: Vec::new(),
            parents: Vec::new(),
        }
    }

    fn push(&mut self, candidate: S, parent: Option<usize>) -> usize {
        self.candidates.push(candidate);
        self.parents.push(parent);
        self.candidates.len() - 1
    }

    fn get(&self, position: usize) -> &S {
        &self.candidates[position]
    }

    fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Walk the predecessor links back to the origin.
    fn unwind(&self, position: usize) -> Vec<S> {
        let mut steps = Vec::new();
        let mut cursor = Some(position);
        while let Some(p) = cursor {
            steps.push(self.candidates[p].clone());
            cursor = self.parents[p];
        }
        steps.reverse();
        steps
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic queue (Q) and a generic cache (C) to provide
/// a single foundation for multiple search algorithms. A candidate
/// is accepted when it is popped and the cache has not seen its
/// state before; the first accepted complete candidate wins.
#[derive(Debug)]
pub struct SearchAlgorithm<S, Q, C>
where
    S: SearchState,
    Q: SearchQueue<Candidate = S> + Default,
    C: Cache<Candidate = S>,
{
    cache: C,
    queue: Q,
    trail: Trail<S>,
    options: SearchOptions,
}

impl<S, Q, C> SearchAlgorithm<S, Q, C>
where
    S: SearchState,
    Q: SearchQueue<Candidate = S> + Default,
    C: Cache<Candidate = S>,
{
    fn new(origin: S) -> Self {
        let mut sr = SearchAlgorithm {
            cache: C::default(),
            queue: Q::default(),
            trail: Trail::new(),
            options: SearchOptions::default(),
        };
        sr.enqueue(origin, None);
        sr
    }

    /// Replace the options for this search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    fn enqueue(&mut self, candidate: S, parent: Option<usize>) {
        let position = self.trail.len();
        self.queue.push(position, &candidate);
        self.trail.push(candidate, parent);
    }

    /// Run the search until the first complete candidate is accepted.
    pub fn run(mut self) -> Result<Vec<S>> {
        let mut n = 0;
        while let Some(position) = self.queue.pop() {
            let candidate = self.trail.get(position);

            if !self.cache.check(candidate) {
                continue;
            }

            if candidate.is_complete() {
                debug!(
                    "Search complete after {} expansions ({} candidates queued)",
                    n,
                    self.trail.len()
                );
                return Ok(self.trail.unwind(position));
            }

            n += 1;
            if let Some(every) = self.options.verbose {
                if every > 0 && n % every == 0 {
                    debug!(
                        "Q{} T{} S{:?} {}",
                        self.queue.len(),
                        self.trail.len(),
                        candidate.state(),
                        n
                    );
                }
            }

            for child in candidate.children() {
                if self.options.prune_visited && self.cache.seen(&child) {
                    continue;
                }
                self.enqueue(child, Some(position));
            }
        }
        Err(SearchError::NoResultFound)
    }
}
