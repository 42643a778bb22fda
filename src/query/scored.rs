//! Scored and max-scored cursor wrappers
//!
//! `Scored` pairs a posting cursor with a term scorer; `MaxScored` adds the
//! precomputed static score upper bound. Scores are computed lazily from the
//! current position and never cached, since the frequency changes on every
//! advance. Positional operations are forwarded unchanged.

use crate::scorer::TermScorer;
use crate::structures::TERMINATED;
use crate::{DocId, Score, TermFreq};

use super::{MaxScoreCursor, PostingCursor, ScoredCursor};

/// Posting cursor with a per-document score function
pub struct Scored<C, S> {
    cursor: C,
    scorer: S,
}

impl<C: PostingCursor, S: TermScorer> Scored<C, S> {
    pub fn new(cursor: C, scorer: S) -> Self {
        Self { cursor, scorer }
    }
}

impl<C: PostingCursor, S: TermScorer> PostingCursor for Scored<C, S> {
    #[inline]
    fn doc(&self) -> DocId {
        self.cursor.doc()
    }
    #[inline]
    fn term_freq(&self) -> TermFreq {
        self.cursor.term_freq()
    }
    #[inline]
    fn advance(&mut self) -> DocId {
        self.cursor.advance()
    }
    #[inline]
    fn seek(&mut self, target: DocId) -> DocId {
        self.cursor.seek(target)
    }
    #[inline]
    fn size_hint(&self) -> u32 {
        self.cursor.size_hint()
    }
}

impl<C: PostingCursor, S: TermScorer> ScoredCursor for Scored<C, S> {
    #[inline]
    fn score(&self) -> Score {
        let doc = self.cursor.doc();
        if doc == TERMINATED {
            return 0.0;
        }
        self.scorer.score(doc, self.cursor.term_freq())
    }
}

/// Scored cursor carrying its static score upper bound
pub struct MaxScored<C, S> {
    cursor: C,
    scorer: S,
    max_score: Score,
}

impl<C: PostingCursor, S: TermScorer> MaxScored<C, S> {
    /// `max_score` is the index-build-time bound: for every posting of this
    /// term, the actual score never exceeds it.
    pub fn new(cursor: C, scorer: S, max_score: Score) -> Self {
        Self {
            cursor,
            scorer,
            max_score,
        }
    }
}

impl<C: PostingCursor, S: TermScorer> PostingCursor for MaxScored<C, S> {
    #[inline]
    fn doc(&self) -> DocId {
        self.cursor.doc()
    }
    #[inline]
    fn term_freq(&self) -> TermFreq {
        self.cursor.term_freq()
    }
    #[inline]
    fn advance(&mut self) -> DocId {
        self.cursor.advance()
    }
    #[inline]
    fn seek(&mut self, target: DocId) -> DocId {
        self.cursor.seek(target)
    }
    #[inline]
    fn size_hint(&self) -> u32 {
        self.cursor.size_hint()
    }
}

impl<C: PostingCursor, S: TermScorer> ScoredCursor for MaxScored<C, S> {
    #[inline]
    fn score(&self) -> Score {
        let doc = self.cursor.doc();
        if doc == TERMINATED {
            return 0.0;
        }
        self.scorer.score(doc, self.cursor.term_freq())
    }
}

impl<C: PostingCursor, S: TermScorer> MaxScoreCursor for MaxScored<C, S> {
    #[inline]
    fn max_score(&self) -> Score {
        self.max_score
    }
}
