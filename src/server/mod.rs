//! Concurrent search server
//!
//! The server owns one inverted index behind a [`Synchronized`] cell and the
//! handles of all work it has scheduled:
//!
//! - [`SearchServer::update_document_base`] builds a new index on a background
//!   thread without holding the lock, then swaps it in under the lock.
//! - [`SearchServer::add_queries_stream`] answers a query stream on a
//!   background thread, taking the lock once per query.
//!
//! Calls of either kind may overlap. Concurrent rebuilds are last-write-wins,
//! and queries in one batch may see different index generations. Each single
//! query sees exactly one.
//!
//! Dropping the server waits for all scheduled work to finish.

pub mod buffer;
pub mod sync;
pub mod tasks;

pub use buffer::SharedBuffer;
pub use sync::{Access, Synchronized};
pub use tasks::{TaskKind, TaskSet};

use crate::index::InvertedIndex;
use crate::query::{QueryProcessor, Ranker};
use crate::utils::ServerConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::sync::Arc;

pub struct SearchServer {
    index: Arc<Synchronized<InvertedIndex>>,
    config: ServerConfig,
    tasks: TaskSet,
}

impl SearchServer {
    /// Create a server with an empty index
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    pub fn with_config(config: ServerConfig) -> Self {
        Self::from_index(config, InvertedIndex::default())
    }

    /// Create a server and build its initial index before returning
    pub fn with_documents<R: BufRead>(input: R) -> Result<Self> {
        Self::with_config_and_documents(ServerConfig::default(), input)
    }

    pub fn with_config_and_documents<R: BufRead>(config: ServerConfig, input: R) -> Result<Self> {
        let index = InvertedIndex::build(input)?;
        Ok(Self::from_index(config, index))
    }

    fn from_index(config: ServerConfig, index: InvertedIndex) -> Self {
        Self {
            index: Arc::new(Synchronized::new(index)),
            config,
            tasks: TaskSet::new(),
        }
    }

    /// Schedule a rebuild of the index from `input`. Returns immediately.
    pub fn update_document_base<R>(&mut self, input: R)
    where
        R: BufRead + Send + 'static,
    {
        let cell = Arc::clone(&self.index);
        self.tasks.spawn(TaskKind::Rebuild, move || {
            let fresh = InvertedIndex::build(input)?;
            let documents = fresh.document_count();

            let previous = cell.get_access().replace(fresh);
            tracing::info!(
                documents,
                previous_documents = previous.document_count(),
                "swapped in rebuilt index"
            );
            Ok(())
        });
    }

    /// Schedule answering every query in `input`, one result line each to
    /// `output` in query order. Returns immediately.
    pub fn add_queries_stream<R, W>(&mut self, input: R, mut output: W)
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        let cell = Arc::clone(&self.index);
        let ranker = Ranker::new(self.config.result_limit);
        self.tasks.spawn(TaskKind::Queries, move || {
            let answered = QueryProcessor::new(ranker).run_batch(input, &mut output, &cell)?;
            tracing::info!(queries = answered, "finished query batch");
            Ok(())
        });
    }

    /// Number of scheduled tasks not yet waited on
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for all scheduled work. Every task is joined; the first failure
    /// is returned.
    pub fn wait(&mut self) -> Result<()> {
        self.tasks.join_all()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Shared index cell, for callers that query it directly
    pub fn index(&self) -> &Synchronized<InvertedIndex> {
        &self.index
    }
}

impl Default for SearchServer {
    fn default() -> Self {
        Self::new()
    }
}
