//! Bounded top-k queue shared by all ranked query algorithms
//!
//! The queue retains the k best-scoring candidates seen so far and owns the
//! pruning threshold. One queue instance lives for one query evaluation; every
//! algorithm variant reads and writes it but never replaces it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{DocId, Score};

/// A retained (score, doc_id) candidate
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: Score,
}

impl PartialEq for ScoredDoc {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.doc_id == other.doc_id
    }
}

impl Eq for ScoredDoc {}

impl PartialOrd for ScoredDoc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredDoc {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: lower scores come first (to be evicted); among equal
        // scores the largest doc id is evicted first.
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.doc_id.cmp(&other.doc_id))
    }
}

/// Bounded multiset of the k best candidates with threshold tracking
///
/// The threshold is the minimum live score once the queue is full, or the
/// configured floor before that; it never decreases over a query's lifetime.
pub struct TopKQueue {
    heap: BinaryHeap<ScoredDoc>,
    k: usize,
    initial_threshold: Score,
    effective_threshold: Score,
}

impl TopKQueue {
    /// Queue with the default floor of negative infinity
    pub fn new(k: usize) -> Self {
        Self::with_threshold(k, Score::NEG_INFINITY)
    }

    /// Queue with a caller-supplied minimum score floor: candidates scoring
    /// at or below the floor are never retained
    pub fn with_threshold(k: usize, floor: Score) -> Self {
        let capacity = k.saturating_add(1).min(1_000_000);
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            k,
            initial_threshold: floor,
            effective_threshold: if k == 0 { Score::INFINITY } else { floor },
        }
    }

    /// Offer a candidate. Returns whether it was retained.
    ///
    /// A candidate scoring <= the current threshold is rejected; otherwise it
    /// enters, evicting the current minimum when the queue is past capacity.
    pub fn insert(&mut self, score: Score, doc_id: DocId) -> bool {
        if !self.would_enter(score) {
            return false;
        }
        self.heap.push(ScoredDoc { doc_id, score });
        if self.heap.len() > self.k {
            self.heap.pop();
        }
        if self.heap.len() == self.k {
            if let Some(min) = self.heap.peek() {
                self.effective_threshold = min.score;
            }
        }
        true
    }

    /// Whether a candidate with `score` could enter the queue
    #[inline]
    pub fn would_enter(&self, score: Score) -> bool {
        score > self.effective_threshold
    }

    /// Minimum score a new candidate must beat
    #[inline]
    pub fn threshold(&self) -> Score {
        self.effective_threshold
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.k
    }

    /// Empty the queue and reset the threshold to its configured floor.
    /// Called once per independent query, never mid-query by algorithms.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.effective_threshold = if self.k == 0 {
            Score::INFINITY
        } else {
            self.initial_threshold
        };
    }

    /// The ranked result list: descending score, ties by ascending doc id.
    /// Does not mutate the queue; calling twice yields the same sequence.
    pub fn finalize(&self) -> Vec<ScoredDoc> {
        let mut results: Vec<ScoredDoc> = self.heap.iter().copied().collect();
        results.sort_unstable_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        results
    }
}
