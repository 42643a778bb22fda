//! Exhaustive ranked disjunction
//!
//! Document-at-a-time evaluation of every document present in any list. No
//! pruning: this is the correctness baseline the bound-driven algorithms are
//! measured against, and the fallback when no max-score data exists.

use crate::structures::TERMINATED;
use crate::{DocId, Score};

use super::{BoundedQuery, MaxScoreCursor, PostingCursor, ScoredCursor, TopKQueue};

/// Exhaustive document-at-a-time disjunction feeding the top-k queue
#[derive(Debug, Default)]
pub struct RankedOrQuery;

impl RankedOrQuery {
    pub fn run<C: ScoredCursor>(&mut self, topk: &mut TopKQueue, cursors: &mut [C], bound: DocId) {
        if cursors.is_empty() {
            return;
        }
        loop {
            let doc = cursors.iter().map(|c| c.doc()).min().unwrap_or(TERMINATED);
            if doc >= bound {
                return;
            }
            let mut score: Score = 0.0;
            for cursor in cursors.iter_mut() {
                if cursor.doc() == doc {
                    score += cursor.score();
                    cursor.advance();
                }
            }
            topk.insert(score, doc);
        }
    }
}

impl BoundedQuery for RankedOrQuery {
    fn evaluate<C: MaxScoreCursor>(
        &mut self,
        topk: &mut TopKQueue,
        cursors: &mut [C],
        bound: DocId,
    ) {
        self.run(topk, cursors, bound);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Scored;
    use crate::scorer::TermScorer;
    use crate::structures::PostingList;
    use crate::TermFreq;

    struct FreqScorer;

    impl TermScorer for FreqScorer {
        fn score(&self, _doc: DocId, freq: TermFreq) -> Score {
            freq as Score
        }
    }

    #[test]
    fn test_ranked_or_scores_union() {
        let lists = vec![
            PostingList::from_pairs(&[(1, 1), (2, 1), (3, 1)]),
            PostingList::from_pairs(&[(2, 1), (3, 1), (4, 1)]),
        ];
        let mut cursors: Vec<_> = lists
            .iter()
            .map(|l| Scored::new(l.cursor(), FreqScorer))
            .collect();

        let mut topk = TopKQueue::new(10);
        RankedOrQuery.run(&mut topk, &mut cursors, 100);

        let results = topk.finalize();
        assert_eq!(results.len(), 4);
        // Docs 2 and 3 match both lists and rank first.
        assert_eq!(results[0].doc_id, 2);
        assert_eq!(results[1].doc_id, 3);
        assert_eq!(results[0].score, 2.0);
        assert_eq!(results[2].score, 1.0);
    }

    #[test]
    fn test_ranked_or_respects_bound() {
        let lists = vec![PostingList::from_pairs(&[(1, 1), (5, 1), (9, 1)])];
        let mut cursors: Vec<_> = lists
            .iter()
            .map(|l| Scored::new(l.cursor(), FreqScorer))
            .collect();

        let mut topk = TopKQueue::new(10);
        RankedOrQuery.run(&mut topk, &mut cursors, 6);
        let ids: Vec<DocId> = topk.finalize().iter().map(|e| e.doc_id).collect();
        assert_eq!(ids, vec![1, 5]);

        // Cursors resume where the bound stopped them.
        RankedOrQuery.run(&mut topk, &mut cursors, 100);
        let ids: Vec<DocId> = topk.finalize().iter().map(|e| e.doc_id).collect();
        assert_eq!(ids, vec![1, 5, 9]);
    }
}
