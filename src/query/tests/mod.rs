//! Cross-algorithm tests: pinned scenarios and pruning-equivalence checks


use std::sync::Arc;

use crate::query::MaxScored;
use crate::scorer::{
    term_max_score, CollectionStats, DirichletParams, DirichletScorer, DirichletTermScorer,
    IndexScorer,
};
use crate::structures::{PostingList, PostingListCursor};
use crate::{DocId, TermFreq, TermId};

/// Posting lists plus the statistics and scorer built over them, the way the
/// index layer would hand them to this crate.
pub(crate) struct Corpus {
    lists: Vec<PostingList>,
    scorer: DirichletScorer,
    num_docs: u32,
}

impl Corpus {
    pub(crate) fn new(terms: &[Vec<(DocId, TermFreq)>], doc_lengths: Vec<u32>) -> Self {
        let num_docs = doc_lengths.len() as u32;
        let mut stats = CollectionStats::new(doc_lengths);
        let mut lists = Vec::with_capacity(terms.len());
        for (term, pairs) in terms.iter().enumerate() {
            let list = PostingList::from_pairs(pairs);
            stats.record_term_occurrences(term as TermId, list.occurrence_count());
            lists.push(list);
        }
        let scorer = DirichletScorer::new(Arc::new(stats), DirichletParams::default());
        Self {
            lists,
            scorer,
            num_docs,
        }
    }

    /// Exclusive doc-id upper bound for a full pass
    pub(crate) fn max_doc(&self) -> DocId {
        self.num_docs
    }

    /// Fresh max-scored cursors, one per term, in term order
    pub(crate) fn cursors(&self) -> Vec<MaxScored<PostingListCursor<'_>, DirichletTermScorer>> {
        self.lists
            .iter()
            .enumerate()
            .map(|(term, list)| {
                let term_scorer = self.scorer.term_scorer(term as TermId).unwrap();
                let bound = term_max_score(list, &term_scorer);
                MaxScored::new(list.cursor(), term_scorer, bound)
            })
            .collect()
    }

    pub(crate) fn term_scorer(&self, term: TermId) -> DirichletTermScorer {
        self.scorer.term_scorer(term).unwrap()
    }
}
