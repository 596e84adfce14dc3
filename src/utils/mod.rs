//! Utility functions and data structures.
//!
//! ## Modules
//!
//! - [`tokenizer`] - Space-delimited word splitting over borrowed lines
//! - [`lines`] - Buffer-reusing line reader for byte streams
//! - [`config`] - Server configuration (JSON file + environment overrides)
//!
//! ```
//! use docsearch::utils::collect_words;
//!
//! let words = collect_words("  hello   world ");
//! assert_eq!(words, [&b"hello"[..], &b"world"[..]]);
//! ```

pub mod config;
pub mod lines;
pub mod tokenizer;

pub use config::*;
pub use lines::LineReader;
pub use tokenizer::*;
