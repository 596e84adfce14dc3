/// Identifier of a document: its zero-based position in the build input
pub type DocId = usize;

/// Number of times a word occurs in one document
pub type HitCount = usize;

/// Posting for one word in one document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub doc_id: DocId,
    pub hit_count: HitCount,
}

impl Entry {
    pub fn new(doc_id: DocId, hit_count: HitCount) -> Self {
        Self { doc_id, hit_count }
    }
}
