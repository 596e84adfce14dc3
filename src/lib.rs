//! # docsearch - concurrent hit-count search
//!
//! An in-memory full-text index over short text documents (one per line)
//! answering multi-word queries with the five documents containing the most
//! occurrences of the query words. Rebuilding the document base and answering
//! query batches run concurrently against the same index.
//!
//! ## Architecture
//!
//! - [`utils`] - Word splitting, line reading, configuration
//! - [`index`] - The inverted index (word -> per-document hit counts)
//! - [`query`] - Per-query hit accumulation and top-k ranking
//! - [`server`] - Exclusive-access monitor and the task-scheduling server
//! - [`output`] - Result line formatting
//!
//! ## Quick Start
//!
//! ```
//! use docsearch::server::{SearchServer, SharedBuffer};
//! use std::io::Cursor;
//!
//! let mut server = SearchServer::with_documents(Cursor::new("a b a\nb b\nc\n"))?;
//! let out = SharedBuffer::new();
//! server.add_queries_stream(Cursor::new("b\n"), out.clone());
//! server.wait()?;
//!
//! assert_eq!(out.contents(), "b: {docid: 1, hitcount: 2} {docid: 0, hitcount: 1}\n");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod index;
pub mod output;
pub mod query;
pub mod server;
pub mod utils;

pub use index::InvertedIndex;
pub use server::SearchServer;
