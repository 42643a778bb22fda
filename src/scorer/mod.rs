//! Term scorer framework
//!
//! A term scorer turns raw term statistics into a per-document score function.
//! Scorers are built once per (collection, term, configuration) and are pure
//! afterwards: `score(doc, freq)` has no side effects and may be called in any
//! order. Collection-wide statistics are shared read-only behind an `Arc`.
//!
//! The Dirichlet-smoothed query-likelihood model is the concrete scoring
//! model. See J. M. Ponte and W. B. Croft, "A Language Modeling Approach to
//! Information Retrieval" (SIGIR 1998), and C. Zhai and J. Lafferty, "A Study
//! of Smoothing Methods for Language Models" (SIGIR 2001).

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::structures::PostingList;
use crate::{DocId, Score, TermFreq, TermId};

/// Pure per-document score function for one term
pub trait TermScorer {
    /// Score contribution of this term for `doc` with frequency `freq`
    fn score(&self, doc: DocId, freq: TermFreq) -> Score;
}

impl<S: TermScorer + ?Sized> TermScorer for &S {
    #[inline]
    fn score(&self, doc: DocId, freq: TermFreq) -> Score {
        (**self).score(doc, freq)
    }
}

impl<S: TermScorer + ?Sized> TermScorer for Box<S> {
    #[inline]
    fn score(&self, doc: DocId, freq: TermFreq) -> Score {
        (**self).score(doc, freq)
    }
}

/// Factory producing one term scorer per query term
///
/// Implementations close over collection statistics and scoring-method
/// configuration; `term_scorer` fails fast on statistics that make the model
/// undefined (for instance a term with zero occurrences), before any query
/// runs.
pub trait IndexScorer {
    type TermScorer: TermScorer;

    fn term_scorer(&self, term: TermId) -> Result<Self::TermScorer>;
}

/// Read-only collection statistics backing score functions
///
/// Holds per-document lengths, the total collection length, and per-term
/// occurrence counts. Built by the index layer, shared across term scorers.
#[derive(Debug, Clone, Default)]
pub struct CollectionStats {
    doc_lengths: Vec<u32>,
    collection_len: u64,
    term_occurrences: FxHashMap<TermId, u64>,
}

impl CollectionStats {
    pub fn new(doc_lengths: Vec<u32>) -> Self {
        let collection_len = doc_lengths.iter().map(|&l| l as u64).sum();
        Self {
            doc_lengths,
            collection_len,
            term_occurrences: FxHashMap::default(),
        }
    }

    /// Record the total number of occurrences of `term` in the collection
    pub fn record_term_occurrences(&mut self, term: TermId, occurrences: u64) {
        self.term_occurrences.insert(term, occurrences);
    }

    /// Total occurrences of `term`, 0 if never recorded
    #[inline]
    pub fn term_occurrences(&self, term: TermId) -> u64 {
        self.term_occurrences.get(&term).copied().unwrap_or(0)
    }

    /// Length of `doc`, 0 for ids outside the collection
    #[inline]
    pub fn doc_len(&self, doc: DocId) -> u32 {
        self.doc_lengths.get(doc as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub fn num_docs(&self) -> u32 {
        self.doc_lengths.len() as u32
    }

    /// Total length of the collection (sum of document lengths)
    #[inline]
    pub fn collection_len(&self) -> u64 {
        self.collection_len
    }

    pub fn avg_doc_len(&self) -> f32 {
        if self.doc_lengths.is_empty() {
            0.0
        } else {
            self.collection_len as f32 / self.doc_lengths.len() as f32
        }
    }
}

/// Dirichlet smoothing parameter
#[derive(Debug, Clone, Copy)]
pub struct DirichletParams {
    /// Smoothing parameter mu (typically 500-3000)
    pub mu: f32,
}

impl Default for DirichletParams {
    fn default() -> Self {
        Self { mu: 2000.0 }
    }
}

/// Query-likelihood scorer with Dirichlet smoothing
pub struct DirichletScorer {
    stats: Arc<CollectionStats>,
    mu: f32,
}

impl DirichletScorer {
    pub fn new(stats: Arc<CollectionStats>, params: DirichletParams) -> Self {
        Self {
            stats,
            mu: params.mu,
        }
    }
}

impl IndexScorer for DirichletScorer {
    type TermScorer = DirichletTermScorer;

    /// Build the score function for one term
    ///
    /// Fails with [`Error::ZeroTermOccurrences`] when the collection has no
    /// recorded occurrences of the term, since the smoothed estimate divides
    /// by the occurrence count.
    fn term_scorer(&self, term: TermId) -> Result<DirichletTermScorer> {
        let occurrences = self.stats.term_occurrences(term);
        if occurrences == 0 {
            return Err(Error::ZeroTermOccurrences(term));
        }
        let term_component = self.stats.collection_len() as f32 / (self.mu * occurrences as f32);
        Ok(DirichletTermScorer {
            stats: Arc::clone(&self.stats),
            mu: self.mu,
            term_component,
        })
    }
}

/// Score function for one term under the Dirichlet model
#[derive(Clone)]
pub struct DirichletTermScorer {
    stats: Arc<CollectionStats>,
    mu: f32,
    term_component: f32,
}

impl TermScorer for DirichletTermScorer {
    #[inline]
    fn score(&self, doc: DocId, freq: TermFreq) -> Score {
        let doc_len = self.stats.doc_len(doc) as f32;
        let length_part = (self.mu / (doc_len + self.mu)).ln();
        let freq_part = (freq as f32 * self.term_component).ln_1p();
        (length_part + freq_part).max(0.0)
    }
}

/// Static upper bound on a term's score contribution over its posting list
///
/// The index layer computes this once at build time and stores it next to the
/// posting list; max-scored cursors carry it into the pruning algorithms. For
/// every posting in the list, `scorer.score(doc, freq) <= term_max_score`.
pub fn term_max_score<S: TermScorer>(postings: &PostingList, scorer: &S) -> Score {
    postings
        .iter()
        .map(|p| scorer.score(p.doc_id, p.term_freq))
        .fold(0.0, f32::max)
}
