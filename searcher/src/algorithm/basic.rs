pub use bfs::bfs;

mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::cache::VisitedCache;
    use crate::algorithm::{SearchAlgorithm, SearchOptions, SearchQueue, PROGRESS_INTERVAL};
    use crate::errors::Result;
    use crate::SearchState;

    /// First in, first out.
    #[derive(Debug)]
    pub struct BreadthQueue<S> {
        queue: VecDeque<usize>,
        candidate: std::marker::PhantomData<S>,
    }

    impl<S> SearchQueue for BreadthQueue<S> {
        type Candidate = S;

        fn pop(&mut self) -> Option<usize> {
            self.queue.pop_front()
        }

        fn push(&mut self, position: usize, _item: &Self::Candidate) {
            self.queue.push_back(position);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl<S> Default for BreadthQueue<S> {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
                candidate: std::marker::PhantomData,
            }
        }
    }

    pub type BreadthFirstSearcher<S> = SearchAlgorithm<S, BreadthQueue<S>, VisitedCache<S>>;

    /// Build a breadth-first searcher.
    ///
    /// Children are queued even when their state was already visited;
    /// they are discarded when they reach the front of the queue.
    pub fn build<S>(origin: S) -> BreadthFirstSearcher<S>
    where
        S: SearchState,
    {
        SearchAlgorithm::new(origin).with_options(SearchOptions {
            prune_visited: false,
            verbose: Some(PROGRESS_INTERVAL),
        })
    }

    /// Breadth-first search, where the order is determined
    /// by the candidates returned by the [SearchCandidate::children] method.
    ///
    /// The result has the fewest steps of any sequence reaching
    /// a complete candidate.
    ///
    /// [SearchCandidate::children]: crate::SearchCandidate::children
    pub fn bfs<S>(origin: S) -> Result<Vec<S>>
    where
        S: SearchState,
    {
        build(origin).run()
    }
}
