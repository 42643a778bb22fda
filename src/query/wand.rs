//! WAND top-k retrieval
//!
//! Weak-AND pivot pruning: cursors are kept ordered by current doc id, and the
//! prefix sums of their static score bounds locate the pivot — the first
//! position at which the cumulative bound could still enter the queue.
//! Documents before the pivot cannot make the top-k and are skipped wholesale.
//!
//! Reference: Broder et al., "Efficient Query Evaluation using a Two-Level
//! Retrieval Process" (CIKM 2003).

use log::debug;

use crate::{DocId, Score};

use super::{BoundedQuery, MaxScoreCursor, PostingCursor, ScoredCursor, TopKQueue};

/// WAND evaluation over max-scored cursors
#[derive(Debug, Default)]
pub struct WandQuery;

impl WandQuery {
    pub fn run<C: MaxScoreCursor>(
        &mut self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        bound: DocId,
    ) {
        if cursors.is_empty() {
            return;
        }

        loop {
            cursors.sort_unstable_by_key(|c| c.doc());

            let Some(pivot) = find_pivot(topk, cursors) else {
                // No prefix of bounds can enter the queue any more.
                debug!("wand: cumulative bounds below threshold, stopping");
                return;
            };
            let pivot_doc = cursors[pivot].doc();
            if pivot_doc >= bound {
                return;
            }

            if cursors[0].doc() == pivot_doc {
                // Every cursor before the pivot sits on the pivot document:
                // evaluate it fully and move past.
                let mut score: Score = 0.0;
                for cursor in cursors.iter_mut() {
                    if cursor.doc() == pivot_doc {
                        score += cursor.score();
                        cursor.advance();
                    }
                }
                topk.insert(score, pivot_doc);
            } else {
                // Documents before the pivot cannot beat the threshold; skip
                // the leading cursors forward without scoring.
                for cursor in cursors[..pivot].iter_mut() {
                    if cursor.doc() < pivot_doc {
                        cursor.seek(pivot_doc);
                    }
                }
            }
        }
    }
}

/// Index of the first cursor at which the cumulative score bound could enter
/// the queue, over cursors sorted ascending by doc id
fn find_pivot<C: MaxScoreCursor>(topk: &TopKQueue, cursors: &[C]) -> Option<usize> {
    let mut bound_sum: Score = 0.0;
    for (i, cursor) in cursors.iter().enumerate() {
        bound_sum += cursor.max_score();
        if topk.would_enter(bound_sum) {
            return Some(i);
        }
    }
    None
}

impl BoundedQuery for WandQuery {
    fn evaluate<C: MaxScoreCursor>(
        &mut self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        bound: DocId,
    ) {
        self.run(topk, cursors, bound);
    }
}
