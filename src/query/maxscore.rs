//! MaxScore top-k retrieval
//!
//! Cursors are ordered by descending static bound and split into an essential
//! prefix and a non-essential suffix: the suffix's cumulative bound alone
//! cannot enter the queue, so candidates only ever come from the essential
//! lists. Non-essential lists are probed per candidate in descending-bound
//! order, stopping as soon as the running total plus the remaining bounds can
//! no longer enter. The split moves as the threshold rises.
//!
//! Reference: Turtle and Flood, "Query Evaluation: Strategies and
//! Optimizations" (IP&M 1995).

use std::cmp::Ordering;

use log::debug;

use crate::structures::TERMINATED;
use crate::{DocId, Score};

use super::{BoundedQuery, MaxScoreCursor, PostingCursor, ScoredCursor, TopKQueue};

/// MaxScore evaluation over max-scored cursors
#[derive(Debug, Default)]
pub struct MaxScoreQuery;

impl MaxScoreQuery {
    pub fn run<C: MaxScoreCursor>(
        &mut self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        bound: DocId,
    ) {
        if cursors.is_empty() {
            return;
        }

        cursors.sort_unstable_by(|a, b| {
            b.max_score()
                .partial_cmp(&a.max_score())
                .unwrap_or(Ordering::Equal)
        });

        // suffix_bounds[i] = sum of bounds of cursors i..n; the scratch space
        // is rebuilt per pass since bounds are fixed but the slice may have
        // been reordered by another algorithm.
        let n = cursors.len();
        let mut suffix_bounds: Vec<Score> = vec![0.0; n + 1];
        for i in (0..n).rev() {
            suffix_bounds[i] = suffix_bounds[i + 1] + cursors[i].max_score();
        }

        // Lists in [essential_end, n) cannot enter the queue on their own.
        let mut essential_end = n;
        while essential_end > 0 && !topk.would_enter(suffix_bounds[essential_end - 1]) {
            essential_end -= 1;
        }

        loop {
            if essential_end == 0 {
                debug!("maxscore: all lists non-essential, stopping");
                return;
            }

            let doc = cursors[..essential_end]
                .iter()
                .map(|c| c.doc())
                .min()
                .unwrap_or(TERMINATED);
            if doc >= bound {
                return;
            }

            let mut score: Score = 0.0;
            for cursor in cursors[..essential_end].iter_mut() {
                if cursor.doc() == doc {
                    score += cursor.score();
                    cursor.advance();
                }
            }

            // Probe non-essential lists while the candidate can still enter.
            for i in essential_end..n {
                if !topk.would_enter(score + suffix_bounds[i]) {
                    break;
                }
                let cursor = &mut cursors[i];
                if cursor.seek(doc) == doc {
                    score += cursor.score();
                }
            }

            if topk.insert(score, doc) {
                while essential_end > 0 && !topk.would_enter(suffix_bounds[essential_end - 1]) {
                    essential_end -= 1;
                }
            }
        }
    }
}

impl BoundedQuery for MaxScoreQuery {
    fn evaluate<C: MaxScoreCursor>(
        &mut self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        bound: DocId,
    ) {
        self.run(topk, cursors, bound);
    }
}
