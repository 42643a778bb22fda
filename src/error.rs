//! Error types for skimmer

use crate::{DocId, TermId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("term {0} has zero recorded occurrences; a term scorer cannot be built for it")]
    ZeroTermOccurrences(TermId),

    #[error("range size must be greater than zero")]
    ZeroRangeSize,

    #[error("document id bound of {0} is invalid for a non-empty cursor set")]
    InvalidDocBound(DocId),
}

pub type Result<T> = std::result::Result<T, Error>;
