//! Range-decomposed query driver
//!
//! Runs any ranked algorithm over contiguous doc-id sub-ranges instead of the
//! whole collection at once. Term bounds are tightest over short spans, so
//! confining each pruning pass to a bounded range keeps bound-vs-threshold
//! comparisons effective. Cursors are never reset between ranges: traversal is
//! monotonic, so resuming the same cursors performs no duplicate work.

use std::marker::PhantomData;

use log::trace;

use crate::error::{Error, Result};
use crate::DocId;

use super::{MaxScoreCursor, TopKQueue};

/// A ranked algorithm that evaluates one pass below an exclusive doc-id bound
///
/// Implementations are cheap to construct and hold no state of their own; all
/// persistent state lives in the cursors and the queue, passed in by reference
/// on every call. The range driver builds a fresh instance per range.
pub trait BoundedQuery: Default {
    fn evaluate<C: MaxScoreCursor>(
        &mut self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        bound: DocId,
    );
}

/// Drives an inner algorithm across fixed-size doc-id ranges
pub struct RangeQuery<A> {
    _alg: PhantomData<A>,
}

impl<A: BoundedQuery> RangeQuery<A> {
    pub fn new() -> Self {
        Self { _alg: PhantomData }
    }

    /// Evaluate the full query: the queue is cleared once, then the inner
    /// algorithm runs bounded to `range_size`, `2 * range_size`, ... and
    /// finally to `max_doc` for the remainder.
    pub fn run<C: MaxScoreCursor>(
        &self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        max_doc: DocId,
        range_size: u32,
    ) -> Result<()> {
        if range_size == 0 {
            return Err(Error::ZeroRangeSize);
        }
        if max_doc == 0 && !cursors.is_empty() {
            return Err(Error::InvalidDocBound(max_doc));
        }

        topk.clear();
        if cursors.is_empty() {
            return Ok(());
        }

        let mut end = range_size;
        while (end as u64) + (range_size as u64) < max_doc as u64 {
            trace!("range pass up to {}", end);
            A::default().evaluate(topk, cursors, end);
            end += range_size;
        }
        A::default().evaluate(topk, cursors, max_doc);

        Ok(())
    }
}

impl<A: BoundedQuery> Default for RangeQuery<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{MaxScored, RankedOrQuery};
    use crate::scorer::TermScorer;
    use crate::structures::PostingList;
    use crate::{Score, TermFreq};

    struct FreqScorer;

    impl TermScorer for FreqScorer {
        fn score(&self, _doc: DocId, freq: TermFreq) -> Score {
            freq as Score
        }
    }

    fn max_scored(list: &PostingList) -> MaxScored<crate::structures::PostingListCursor<'_>, FreqScorer> {
        let bound = list.iter().map(|p| p.term_freq as Score).fold(0.0, f32::max);
        MaxScored::new(list.cursor(), FreqScorer, bound)
    }

    #[test]
    fn test_range_size_zero_is_an_error() {
        let lists = vec![PostingList::from_pairs(&[(1, 1)])];
        let mut cursors: Vec<_> = lists.iter().map(max_scored).collect();
        let mut topk = TopKQueue::new(5);

        let result = RangeQuery::<RankedOrQuery>::new().run(&mut topk, &mut cursors, 100, 0);
        assert!(matches!(result, Err(Error::ZeroRangeSize)));
    }

    #[test]
    fn test_zero_bound_with_cursors_is_an_error() {
        let lists = vec![PostingList::from_pairs(&[(1, 1)])];
        let mut cursors: Vec<_> = lists.iter().map(max_scored).collect();
        let mut topk = TopKQueue::new(5);

        let result = RangeQuery::<RankedOrQuery>::new().run(&mut topk, &mut cursors, 0, 10);
        assert!(matches!(result, Err(Error::InvalidDocBound(0))));
    }

    #[test]
    fn test_empty_cursor_set_is_fine() {
        let mut cursors: Vec<MaxScored<crate::structures::PostingListCursor<'_>, FreqScorer>> =
            Vec::new();
        let mut topk = TopKQueue::new(5);

        RangeQuery::<RankedOrQuery>::new()
            .run(&mut topk, &mut cursors, 0, 10)
            .unwrap();
        assert!(topk.finalize().is_empty());
    }

    #[test]
    fn test_range_clears_previous_state() {
        let lists = vec![PostingList::from_pairs(&[(1, 1), (2, 3)])];
        let mut cursors: Vec<_> = lists.iter().map(max_scored).collect();

        let mut topk = TopKQueue::new(5);
        topk.insert(99.0, 42);

        RangeQuery::<RankedOrQuery>::new()
            .run(&mut topk, &mut cursors, 10, 4)
            .unwrap();

        let ids: Vec<DocId> = topk.finalize().iter().map(|e| e.doc_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_range_size_larger_than_collection() {
        let lists = vec![PostingList::from_pairs(&[(0, 1), (5, 2), (9, 1)])];
        let mut cursors: Vec<_> = lists.iter().map(max_scored).collect();

        let mut topk = TopKQueue::new(10);
        RangeQuery::<RankedOrQuery>::new()
            .run(&mut topk, &mut cursors, 10, 1000)
            .unwrap();

        let ids: Vec<DocId> = topk.finalize().iter().map(|e| e.doc_id).collect();
        assert_eq!(ids, vec![5, 0, 9]);
    }
}
