use crate::index::InvertedIndex;
use crate::index::types::{DocId, HitCount};
use crate::output::{SearchResult, write_result};
use crate::query::ranker::Ranker;
use crate::server::sync::Synchronized;
use crate::utils::{LineReader, split_into_words};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Answers queries against an index, one lock window per query.
///
/// Counter buffers are sized to the document count of whatever index is
/// current when each query runs, and reused across queries.
pub struct QueryProcessor {
    ranker: Ranker,
    counts: Vec<HitCount>,
    doc_ids: Vec<DocId>,
}

impl QueryProcessor {
    pub fn new(ranker: Ranker) -> Self {
        Self {
            ranker,
            counts: Vec::new(),
            doc_ids: Vec::new(),
        }
    }

    /// Answer one query against the shared index.
    ///
    /// The monitor is held only while hit counts are accumulated; ranking runs
    /// after it is released.
    pub fn process<'q>(
        &mut self,
        query: &'q [u8],
        index: &Synchronized<InvertedIndex>,
    ) -> SearchResult<'q> {
        {
            let access = index.get_access();
            self.accumulate(query, &access);
        }
        self.finish(query)
    }

    /// Answer one query against an index the caller already has access to
    pub fn process_snapshot<'q>(
        &mut self,
        query: &'q [u8],
        index: &InvertedIndex,
    ) -> SearchResult<'q> {
        self.accumulate(query, index);
        self.finish(query)
    }

    /// Answer every query in `input`, writing one line per query to `output`.
    ///
    /// Returns the number of queries answered.
    pub fn run_batch<R, W>(
        &mut self,
        input: R,
        output: &mut W,
        index: &Synchronized<InvertedIndex>,
    ) -> Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut queries = LineReader::new(input);

        loop {
            let query_no = queries.lines_read();
            let Some(query) = queries
                .next_line()
                .with_context(|| format!("Failed to read query {}", query_no))?
            else {
                break;
            };

            let result = self.process(query, index);
            tracing::trace!(
                query = %query.escape_ascii(),
                hits = result.hits.len(),
                "answered query"
            );
            write_result(output, &result).context("Failed to write search result")?;
        }

        output.flush().context("Failed to flush search results")?;
        Ok(queries.lines_read())
    }

    fn accumulate(&mut self, query: &[u8], index: &InvertedIndex) {
        self.counts.clear();
        self.counts.resize(index.document_count(), 0);

        // Repeated query words count again
        for word in split_into_words(query) {
            for entry in index.lookup(word) {
                self.counts[entry.doc_id] += entry.hit_count;
            }
        }
    }

    fn finish<'q>(&mut self, query: &'q [u8]) -> SearchResult<'q> {
        let hits = self.ranker.rank(&self.counts, &mut self.doc_ids);
        SearchResult { query, hits }
    }
}

impl Default for QueryProcessor {
    fn default() -> Self {
        Self::new(Ranker::default())
    }
}
