//! Skimmer - a query-time top-k retrieval core
//!
//! Given one posting cursor per query term, this library finds the top-k
//! highest-scoring documents without evaluating every document, using
//! precomputed score upper bounds to prune work. It provides:
//! - Forward-only posting cursors with fast skipping (`seek`)
//! - Scored and max-scored cursor wrappers over a pluggable term scorer
//! - A Dirichlet-smoothed language-model scorer as the concrete scoring model
//! - A bounded top-k queue that owns the pruning threshold
//! - And / Ranked-And / Ranked-Or / WAND / MaxScore evaluation algorithms
//! - A range driver that runs any ranked algorithm over bounded doc-id spans
//!
//! Index construction, compression, file I/O and query parsing live outside
//! this crate: callers hand in cursors, statistics and term ids, and read back
//! the finalized `(score, doc_id)` list.

pub mod error;
pub mod query;
pub mod scorer;
pub mod structures;

// Re-exports from structures
pub use structures::{Posting, PostingList, PostingListCursor, TERMINATED};

// Re-exports from scorer
pub use scorer::{
    CollectionStats, DirichletParams, DirichletScorer, DirichletTermScorer, IndexScorer,
    TermScorer, term_max_score,
};

// Re-exports from query
pub use query::{
    AndQuery, BoundedQuery, EmptyCursor, MaxScoreCursor, MaxScoreQuery, MaxScored, PostingCursor,
    RangeQuery, RankedAndQuery, RankedOrQuery, Scored, ScoredCursor, ScoredDoc, TopKQueue,
    WandQuery,
};

pub use error::{Error, Result};

pub type DocId = u32;
pub type TermFreq = u32;
pub type TermId = u32;
pub type Score = f32;
