//! Result line formatting
//!
//! One line per query: the query bytes exactly as read, a colon, then
//! ` {docid: N, hitcount: M}` for every reported document.

use crate::query::ranker::Hit;
use std::io::{self, Write};

/// Ranked answer to a single query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<'q> {
    pub query: &'q [u8],
    pub hits: Vec<Hit>,
}

/// Write a result followed by a newline
pub fn write_result<W: Write>(out: &mut W, result: &SearchResult<'_>) -> io::Result<()> {
    out.write_all(result.query)?;
    out.write_all(b":")?;
    for hit in &result.hits {
        write!(out, " {{docid: {}, hitcount: {}}}", hit.doc_id, hit.hit_count)?;
    }
    out.write_all(b"\n")
}
