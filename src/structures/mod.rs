//! In-memory data structures consumed by the query layer

mod posting;

pub use posting::{Posting, PostingList, PostingListCursor, TERMINATED};
