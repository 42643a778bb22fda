//! Conjunctive evaluation: unranked And and Ranked-And
//!
//! Both repeatedly take the largest current doc id among the cursors as the
//! next candidate and seek every cursor to it; a document matches when all
//! cursors agree. And returns the raw match list; Ranked-And sums each
//! cursor's score per match and feeds the shared top-k queue.

use crate::structures::TERMINATED;
use crate::{DocId, Score};

use super::{BoundedQuery, MaxScoreCursor, PostingCursor, ScoredCursor, TopKQueue};

/// Unranked boolean intersection
#[derive(Debug, Default)]
pub struct AndQuery;

impl AndQuery {
    /// Intersect the cursors below the exclusive `bound`, returning matches
    /// in ascending doc-id order. No scoring, no queue interaction.
    pub fn run<C: PostingCursor>(&self, cursors: &mut [C], bound: DocId) -> Vec<DocId> {
        let mut matches = Vec::new();
        if cursors.is_empty() {
            return matches;
        }
        loop {
            // The largest current doc id is the only plausible next match.
            let target = cursors.iter().map(|c| c.doc()).max().unwrap_or(TERMINATED);
            if target >= bound {
                return matches;
            }
            for cursor in cursors.iter_mut() {
                if cursor.doc() < target {
                    cursor.seek(target);
                }
            }
            if cursors.iter().all(|c| c.doc() == target) {
                matches.push(target);
                cursors[0].advance();
            }
        }
    }
}

/// Ranked boolean intersection feeding the top-k queue
#[derive(Debug, Default)]
pub struct RankedAndQuery;

impl RankedAndQuery {
    pub fn run<C: ScoredCursor>(&mut self, topk: &mut TopKQueue, cursors: &mut [C], bound: DocId) {
        if cursors.is_empty() {
            return;
        }
        loop {
            let target = cursors.iter().map(|c| c.doc()).max().unwrap_or(TERMINATED);
            if target >= bound {
                return;
            }
            for cursor in cursors.iter_mut() {
                if cursor.doc() < target {
                    cursor.seek(target);
                }
            }
            if cursors.iter().all(|c| c.doc() == target) {
                let score: Score = cursors.iter().map(|c| c.score()).sum();
                topk.insert(score, target);
                cursors[0].advance();
            }
        }
    }
}

impl BoundedQuery for RankedAndQuery {
    fn evaluate<C: MaxScoreCursor>(
        &mut self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        bound: DocId,
    ) {
        self.run(topk, cursors, bound);
    }
}
