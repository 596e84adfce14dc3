//! Top-k selection over per-document hit counts
//!
//! Documents are ordered by hit count (descending), then by document id
//! (ascending). Only the first `limit` positions are fully sorted; documents
//! with no hits are never reported.

use crate::index::types::{DocId, HitCount};
use crate::utils::DEFAULT_RESULT_LIMIT;
use std::cmp::Ordering;

/// A ranked document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub doc_id: DocId,
    pub hit_count: HitCount,
}

#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    limit: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_LIMIT)
    }
}

impl Ranker {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Select the best documents for `counts` (indexed by DocId).
    ///
    /// `doc_ids` is scratch space reused between calls; its contents on entry
    /// are ignored.
    pub fn rank(&self, counts: &[HitCount], doc_ids: &mut Vec<DocId>) -> Vec<Hit> {
        doc_ids.clear();
        doc_ids.extend(0..counts.len());

        let head = self.limit.min(doc_ids.len());
        if head == 0 {
            return Vec::new();
        }

        let by_rank = |a: &DocId, b: &DocId| compare(counts, *a, *b);
        if head < doc_ids.len() {
            doc_ids.select_nth_unstable_by(head - 1, by_rank);
        }
        doc_ids[..head].sort_unstable_by(by_rank);

        doc_ids[..head]
            .iter()
            .map(|&doc_id| Hit {
                doc_id,
                hit_count: counts[doc_id],
            })
            .take_while(|hit| hit.hit_count > 0)
            .collect()
    }
}

/// Rank order: higher count first, smaller id first among equal counts
#[inline]
fn compare(counts: &[HitCount], a: DocId, b: DocId) -> Ordering {
    counts[b].cmp(&counts[a]).then(a.cmp(&b))
}
