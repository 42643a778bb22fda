//! Cursor capability traits
//!
//! `PostingCursor` is the base abstraction for forward-only traversal of one
//! term's posting list. `ScoredCursor` adds a per-document score, and
//! `MaxScoreCursor` adds a static upper bound on that score. Algorithms state
//! the capability they need as a trait bound, so handing a plain or
//! scored-only cursor to a pruning algorithm is a compile error, not a runtime
//! check.

use crate::structures::{PostingListCursor, TERMINATED};
use crate::{DocId, Score, TermFreq};

/// Forward-only cursor over one term's sorted posting list
pub trait PostingCursor {
    /// Current document ID, or [`TERMINATED`] if exhausted
    fn doc(&self) -> DocId;

    /// Term frequency at the current position, 0 once exhausted
    fn term_freq(&self) -> TermFreq;

    /// Advance to the next posting. Returns the new doc ID or [`TERMINATED`].
    fn advance(&mut self) -> DocId;

    /// Seek to the first document >= `target`. Never moves backward.
    fn seek(&mut self, target: DocId) -> DocId {
        let mut doc = self.doc();
        while doc < target {
            doc = self.advance();
        }
        doc
    }

    /// Estimated number of remaining postings
    fn size_hint(&self) -> u32;
}

/// Posting cursor that scores its current document
pub trait ScoredCursor: PostingCursor {
    /// Score of the current document, 0 once exhausted
    fn score(&self) -> Score;
}

/// Scored cursor with a precomputed static score upper bound
///
/// For every posting the cursor will ever visit, `score() <= max_score()`.
/// WAND, MaxScore and the range driver require this capability.
pub trait MaxScoreCursor: ScoredCursor {
    /// Upper bound on this term's score contribution, fixed at construction
    fn max_score(&self) -> Score;
}

impl PostingCursor for Box<dyn PostingCursor + '_> {
    #[inline]
    fn doc(&self) -> DocId {
        (**self).doc()
    }
    #[inline]
    fn term_freq(&self) -> TermFreq {
        (**self).term_freq()
    }
    #[inline]
    fn advance(&mut self) -> DocId {
        (**self).advance()
    }
    #[inline]
    fn seek(&mut self, target: DocId) -> DocId {
        (**self).seek(target)
    }
    #[inline]
    fn size_hint(&self) -> u32 {
        (**self).size_hint()
    }
}

impl PostingCursor for PostingListCursor<'_> {
    #[inline]
    fn doc(&self) -> DocId {
        PostingListCursor::doc(self)
    }
    #[inline]
    fn term_freq(&self) -> TermFreq {
        PostingListCursor::term_freq(self)
    }
    #[inline]
    fn advance(&mut self) -> DocId {
        PostingListCursor::advance(self)
    }
    #[inline]
    fn seek(&mut self, target: DocId) -> DocId {
        PostingListCursor::seek(self, target)
    }
    #[inline]
    fn size_hint(&self) -> u32 {
        PostingListCursor::size_hint(self)
    }
}

/// Cursor for terms absent from the index: always exhausted, zero bound
pub struct EmptyCursor;

impl PostingCursor for EmptyCursor {
    #[inline]
    fn doc(&self) -> DocId {
        TERMINATED
    }
    #[inline]
    fn term_freq(&self) -> TermFreq {
        0
    }
    #[inline]
    fn advance(&mut self) -> DocId {
        TERMINATED
    }
    #[inline]
    fn seek(&mut self, _target: DocId) -> DocId {
        TERMINATED
    }
    fn size_hint(&self) -> u32 {
        0
    }
}

impl ScoredCursor for EmptyCursor {
    #[inline]
    fn score(&self) -> Score {
        0.0
    }
}

impl MaxScoreCursor for EmptyCursor {
    #[inline]
    fn max_score(&self) -> Score {
        0.0
    }
}
