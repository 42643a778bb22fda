//! Posting list representation and its forward-only cursor
//!
//! A posting list holds one term's `(doc_id, term_freq)` pairs in strictly
//! increasing doc-id order. The delta+varint codec is the exchange format with
//! the external index layer; query evaluation only ever sees the decoded form
//! through `PostingListCursor`.

use byteorder::{ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

use crate::{DocId, TermFreq};

/// Sentinel doc id returned by exhausted cursors.
pub const TERMINATED: DocId = DocId::MAX;

/// A posting entry containing doc_id and term frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: TermFreq,
}

/// One term's posting list, sorted by doc id with no duplicates
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    postings: Vec<Posting>,
}

impl PostingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            postings: Vec::with_capacity(capacity),
        }
    }

    /// Build from `(doc_id, term_freq)` pairs already in doc-id order.
    pub fn from_pairs(pairs: &[(DocId, TermFreq)]) -> Self {
        let mut list = Self::with_capacity(pairs.len());
        for &(doc_id, term_freq) in pairs {
            list.push(doc_id, term_freq);
        }
        list
    }

    /// Add a posting (must be added in doc_id order)
    pub fn push(&mut self, doc_id: DocId, term_freq: TermFreq) {
        debug_assert!(
            self.postings.is_empty() || self.postings.last().unwrap().doc_id < doc_id,
            "Postings must be added in sorted order"
        );
        self.postings.push(Posting { doc_id, term_freq });
    }

    /// Add a posting, incrementing term_freq if doc already exists
    pub fn add(&mut self, doc_id: DocId, term_freq: TermFreq) {
        if let Some(last) = self.postings.last_mut() {
            if last.doc_id == doc_id {
                last.term_freq += term_freq;
                return;
            }
        }
        self.postings.push(Posting { doc_id, term_freq });
    }

    /// Number of documents containing the term
    pub fn doc_count(&self) -> u32 {
        self.postings.len() as u32
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Posting> {
        self.postings.iter()
    }

    /// Total term occurrences across the list (sum of frequencies)
    pub fn occurrence_count(&self) -> u64 {
        self.postings.iter().map(|p| p.term_freq as u64).sum()
    }

    /// Open a cursor over this list
    pub fn cursor(&self) -> PostingListCursor<'_> {
        PostingListCursor::new(self)
    }

    /// Serialize using delta encoding and varints
    pub fn serialize<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_vint(writer, self.postings.len() as u64)?;

        let mut prev_doc_id = 0u32;
        for posting in &self.postings {
            let delta = posting.doc_id - prev_doc_id;
            write_vint(writer, delta as u64)?;
            write_vint(writer, posting.term_freq as u64)?;
            prev_doc_id = posting.doc_id;
        }

        Ok(())
    }

    /// Deserialize from bytes
    pub fn deserialize<R: Read>(reader: &mut R) -> io::Result<Self> {
        let count = read_vint(reader)? as usize;
        let mut postings = Vec::with_capacity(count);

        let mut prev_doc_id = 0u32;
        for _ in 0..count {
            let delta = read_vint(reader)? as u32;
            let term_freq = read_vint(reader)? as u32;
            let doc_id = prev_doc_id + delta;
            postings.push(Posting { doc_id, term_freq });
            prev_doc_id = doc_id;
        }

        Ok(Self { postings })
    }
}

/// Forward-only cursor over a posting list with binary-search seek
pub struct PostingListCursor<'a> {
    postings: &'a [Posting],
    position: usize,
}

impl<'a> PostingListCursor<'a> {
    pub fn new(posting_list: &'a PostingList) -> Self {
        Self {
            postings: &posting_list.postings,
            position: 0,
        }
    }

    /// Current document ID, or [`TERMINATED`] if exhausted
    #[inline]
    pub fn doc(&self) -> DocId {
        if self.position < self.postings.len() {
            self.postings[self.position].doc_id
        } else {
            TERMINATED
        }
    }

    /// Current term frequency, 0 once exhausted
    #[inline]
    pub fn term_freq(&self) -> TermFreq {
        if self.position < self.postings.len() {
            self.postings[self.position].term_freq
        } else {
            0
        }
    }

    /// Advance to the next posting, returns the new doc id or [`TERMINATED`]
    #[inline]
    pub fn advance(&mut self) -> DocId {
        if self.position < self.postings.len() {
            self.position += 1;
        }
        self.doc()
    }

    /// Seek forward to the first posting with doc id >= `target`
    pub fn seek(&mut self, target: DocId) -> DocId {
        if self.position >= self.postings.len() {
            return TERMINATED;
        }
        let remaining = &self.postings[self.position..];
        match remaining.binary_search_by_key(&target, |p| p.doc_id) {
            Ok(offset) => {
                self.position += offset;
                self.postings[self.position].doc_id
            }
            Err(offset) => {
                self.position += offset;
                self.doc()
            }
        }
    }

    /// Remaining postings from the current position
    pub fn size_hint(&self) -> u32 {
        self.postings.len().saturating_sub(self.position) as u32
    }
}

/// Write variable-length integer (1-9 bytes)
fn write_vint<W: Write>(writer: &mut W, mut value: u64) -> io::Result<()> {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            writer.write_u8(byte)?;
            return Ok(());
        } else {
            writer.write_u8(byte | 0x80)?;
        }
    }
}

/// Read variable-length integer
fn read_vint<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut result = 0u64;
    let mut shift = 0;

    loop {
        let byte = reader.read_u8()?;
        result |= ((byte & 0x7F) as u64) << shift;
        if byte & 0x80 == 0 {
            return Ok(result);
        }
        shift += 7;
        if shift >= 64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "varint too long",
            ));
        }
    }
}
